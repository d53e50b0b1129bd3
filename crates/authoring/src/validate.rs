use cicerone_core::schedule::ScheduleError;
use thiserror::Error;

use crate::draft::TripDraft;

/// Minimum description length accepted by the backend.
pub const MIN_DESCRIPTION_LEN: usize = 20;

/// Field rules for a trip draft. Returned as lists rather than thrown so
/// the form can render every failing rule inline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("title must not be empty")]
    TitleEmpty,

    #[error("city must not be empty")]
    CityEmpty,

    #[error("description must be at least {MIN_DESCRIPTION_LEN} characters")]
    DescriptionTooShort,

    #[error("price must be greater than zero")]
    PriceZero,

    #[error("schedule must contain at least one slot")]
    ScheduleEmpty,
}

/// Rules for the details step of the wizard.
pub fn validate_details(draft: &TripDraft) -> Vec<DraftError> {
    let mut errors = Vec::new();
    if draft.title.trim().is_empty() {
        errors.push(DraftError::TitleEmpty);
    }
    if draft.city.trim().is_empty() {
        errors.push(DraftError::CityEmpty);
    }
    if draft.description.trim().chars().count() < MIN_DESCRIPTION_LEN {
        errors.push(DraftError::DescriptionTooShort);
    }
    if draft.price == 0 {
        errors.push(DraftError::PriceZero);
    }
    errors
}

/// Rules for the schedule step, delegating to the schedule's own
/// validation.
pub fn validate_schedule(draft: &TripDraft) -> Vec<DraftError> {
    draft
        .schedule
        .validate()
        .into_iter()
        .map(|error| match error {
            ScheduleError::Empty => DraftError::ScheduleEmpty,
        })
        .collect()
}

/// Every rule, in wizard order.
pub fn validate(draft: &TripDraft) -> Vec<DraftError> {
    let mut errors = validate_details(draft);
    errors.extend(validate_schedule(draft));
    errors
}
