//! Booking slot selection.
//!
//! The booking screen works from the schedule it last fetched with the
//! trip. Before a request is posted, the chosen (date, time) pair is
//! checked against that schedule's available slots so a slot that was
//! booked out from under the user fails locally with a clear message.
//! There is no server round-trip between the check and the submit; if the
//! backend still rejects the request, its error is surfaced as
//! [`TourError::Api`].

use chrono::NaiveDate;
use cicerone_core::errors::{TourError, TourResult};
use cicerone_core::models::booking::{CreateBookingRequest, CreateBookingResponse};
use cicerone_core::schedule::{ScheduleSet, TimeLabel};
use tracing::{debug, warn};

use crate::apis::BookingsApi;

/// Verifies the chosen pair is currently bookable in the given schedule.
///
/// A pair that exists but is marked unavailable fails the same way as a
/// pair that was never scheduled.
pub fn confirm_selection(
    schedule: &ScheduleSet,
    date: NaiveDate,
    time: TimeLabel,
) -> TourResult<()> {
    let bookable = schedule
        .available_slots()
        .any(|slot| slot.date == date && slot.time == time);

    if !bookable {
        warn!(%date, %time, "selected slot is no longer available");
        return Err(TourError::SlotUnavailable(format!("{date} {time}")));
    }

    Ok(())
}

/// Checks the request's slot against the schedule, then posts the booking.
pub async fn submit_booking(
    api: &dyn BookingsApi,
    schedule: &ScheduleSet,
    request: CreateBookingRequest,
) -> TourResult<CreateBookingResponse> {
    confirm_selection(schedule, request.date, request.time)?;

    debug!(trip_id = %request.trip_id, date = %request.date, time = %request.time, "submitting booking");
    api.create_booking(request).await
}
