//! # Cicerone Client
//!
//! The typed data-access layer between the UI and the REST backend. All
//! backend concerns go through the trait objects in [`apis`]; transport
//! implementations live with the embedding application, and [`mock`]
//! provides test doubles.
//!
//! The [`booking`] module owns the slot-selection flow: a chosen slot is
//! checked against the trip's schedule before a booking request is posted.

/// Backend API traits, one per concern
pub mod apis;
/// Booking slot selection and submission
pub mod booking;
/// Mock API implementations for tests
pub mod mock;
