//! # Cicerone Core
//!
//! Domain layer for the Cicerone tour-guide marketplace client. This crate
//! holds the pure business logic and the wire shapes exchanged with the REST
//! backend:
//!
//! - **Schedule**: the slot/availability model attached to a trip
//! - **Models**: request/response types for trips, bookings, guides, and cities
//! - **Errors**: the shared error taxonomy
//!
//! Nothing in this crate performs I/O; every function is a total function of
//! its inputs and safe to call from any context.

/// Shared error types
pub mod errors;
/// Wire models exchanged with the backend
pub mod models;
/// Trip schedule and slot availability
pub mod schedule;
