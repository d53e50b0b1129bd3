//! # Cicerone Authoring
//!
//! Trip-draft state for the guide-facing authoring flow. A draft is a plain,
//! serializable value; every edit goes through a single update function
//! ([`draft::TripDraft::apply`]) so the UI layer never mutates form state
//! directly. The wizard module gates step navigation on the draft
//! validators.

/// The draft value and its update function
pub mod draft;
/// Field validation for trip drafts
pub mod validate;
/// Step navigation for the authoring wizard
pub mod wizard;
