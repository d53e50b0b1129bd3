use chrono::NaiveDate;
use cicerone_core::errors::{TourError, TourResult};
use cicerone_core::models::trip::{CreateTripRequest, UpdateTripRequest};
use cicerone_core::schedule::{ScheduleSet, TimeLabel};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::validate::{self, DraftError};

/// An in-progress trip being authored. Starts empty and is only changed
/// through [`TripDraft::apply`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripDraft {
    pub city: String,
    pub title: String,
    pub description: String,
    pub price: u32,
    pub schedule: ScheduleSet,
}

/// One edit to a trip draft.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftAction {
    SetCity(String),
    SetTitle(String),
    SetDescription(String),
    SetPrice(u32),
    AddSlot { date: NaiveDate, time: TimeLabel },
    RemoveSlot { date: NaiveDate, time: TimeLabel },
    ToggleSlot { date: NaiveDate, time: TimeLabel },
    ClearDate(NaiveDate),
}

impl TripDraft {
    /// Applies one action and returns the updated draft, leaving the
    /// receiver untouched.
    ///
    /// Slot additions (including toggles that would add) are rejected for
    /// dates before `today`; past dates are only valid when reconstructing
    /// existing trips, which does not go through actions.
    pub fn apply(&self, action: DraftAction, today: NaiveDate) -> TourResult<TripDraft> {
        debug!(?action, "applying draft action");

        let mut draft = self.clone();
        match action {
            DraftAction::SetCity(city) => draft.city = city,
            DraftAction::SetTitle(title) => draft.title = title,
            DraftAction::SetDescription(description) => draft.description = description,
            DraftAction::SetPrice(price) => draft.price = price,
            DraftAction::AddSlot { date, time } => {
                reject_past(date, today)?;
                draft.schedule = draft.schedule.add(date, time);
            }
            DraftAction::RemoveSlot { date, time } => {
                draft.schedule = draft.schedule.remove(date, time);
            }
            DraftAction::ToggleSlot { date, time } => {
                if !draft.schedule.is_slot_selected(date, time) {
                    reject_past(date, today)?;
                }
                draft.schedule = draft.schedule.toggle(date, time);
            }
            DraftAction::ClearDate(date) => {
                draft.schedule = draft.schedule.remove_all_for_date(date);
            }
        }
        Ok(draft)
    }

    /// Converts a fully valid draft into the trip-creation request body.
    pub fn into_request(self) -> Result<CreateTripRequest, Vec<DraftError>> {
        let errors = validate::validate(&self);
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(CreateTripRequest {
            city: self.city,
            title: self.title,
            description: self.description,
            price: self.price,
            schedule: self.schedule,
        })
    }

    /// Converts a fully valid draft into an update body replacing every
    /// field of an existing trip.
    pub fn into_update(self) -> Result<UpdateTripRequest, Vec<DraftError>> {
        let errors = validate::validate(&self);
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(UpdateTripRequest {
            city: Some(self.city),
            title: Some(self.title),
            description: Some(self.description),
            price: Some(self.price),
            schedule: Some(self.schedule),
        })
    }
}

fn reject_past(date: NaiveDate, today: NaiveDate) -> TourResult<()> {
    if date < today {
        return Err(TourError::Validation(format!(
            "cannot schedule a slot on past date {date}"
        )));
    }
    Ok(())
}
