//! # Trip Schedule Model
//!
//! A trip's schedule is a collection of (date, time) slots, each carrying an
//! availability flag. The authoring flow builds the schedule by adding and
//! toggling slots while a guide edits a draft; the booking flow reads it to
//! present bookable choices to a traveler.
//!
//! Two rules hold throughout:
//!
//! 1. The (date, time) pair is unique within a schedule. Adding a pair that
//!    is already present is a no-op.
//! 2. Every mutation returns a new [`ScheduleSet`] and leaves the receiver
//!    untouched. Callers that need undo/redo can simply keep old values.
//!
//! Whether a past date may be added is the caller's decision: the authoring
//! layer rejects past dates, while schedules reconstructed from backend data
//! keep historical slots as-is.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// First bookable hour of the day.
pub const FIRST_HOUR: u8 = 9;
/// Last bookable hour of the day.
pub const LAST_HOUR: u8 = 17;

/// A time-of-day label from the fixed hourly set `"09:00"` through `"17:00"`.
///
/// Labels are ordered by hour; that ordering is the display order used by
/// [`ScheduleSet::slots_for_date`]. On the wire a label is an `"HH:MM"`
/// string, and parsing anything outside the fixed set fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeLabel(u8);

impl TimeLabel {
    /// Returns the label for the given hour, or `None` if the hour is
    /// outside the bookable range.
    pub fn from_hour(hour: u8) -> Option<Self> {
        (FIRST_HOUR..=LAST_HOUR).contains(&hour).then_some(Self(hour))
    }

    pub fn hour(self) -> u8 {
        self.0
    }

    /// All labels in the fixed set, in display order.
    pub fn all() -> impl Iterator<Item = TimeLabel> {
        (FIRST_HOUR..=LAST_HOUR).map(TimeLabel)
    }
}

impl fmt::Display for TimeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid time label: {0:?}")]
pub struct ParseTimeLabelError(String);

impl FromStr for TimeLabel {
    type Err = ParseTimeLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseTimeLabelError(s.to_string());

        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
        if minute != "00" {
            return Err(invalid());
        }
        let hour: u8 = hour.parse().map_err(|_| invalid())?;
        Self::from_hour(hour).ok_or_else(invalid)
    }
}

impl TryFrom<String> for TimeLabel {
    type Error = ParseTimeLabelError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TimeLabel> for String {
    fn from(label: TimeLabel) -> Self {
        label.to_string()
    }
}

/// One bookable instance of a trip.
///
/// Serialized as `{"date": "YYYY-MM-DD", "time": "HH:MM", "isAvailable": b}`,
/// matching the backend's trip create/update body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    pub date: NaiveDate,
    pub time: TimeLabel,
    #[serde(rename = "isAvailable")]
    pub is_available: bool,
}

impl ScheduleSlot {
    /// Creates an available slot for the given date and time.
    pub fn new(date: NaiveDate, time: TimeLabel) -> Self {
        Self {
            date,
            time,
            is_available: true,
        }
    }
}

/// Validation errors reported by [`ScheduleSet::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("schedule must contain at least one slot")]
    Empty,
}

/// The full set of slots attached to a trip.
///
/// Slots are kept in insertion order. Serializes transparently as the slot
/// sequence the backend expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleSet {
    slots: Vec<ScheduleSlot>,
}

impl ScheduleSet {
    /// An empty schedule, as created when a trip draft starts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a schedule from backend data, dropping any slot whose
    /// (date, time) pair was already seen. First occurrence wins.
    pub fn from_slots(slots: impl IntoIterator<Item = ScheduleSlot>) -> Self {
        let mut set = Self::new();
        for slot in slots {
            if !set.is_slot_selected(slot.date, slot.time) {
                set.slots.push(slot);
            }
        }
        set
    }

    /// Adds an available slot for (date, time). No-op if the pair is
    /// already present, whatever its availability.
    #[must_use]
    pub fn add(&self, date: NaiveDate, time: TimeLabel) -> Self {
        if self.is_slot_selected(date, time) {
            return self.clone();
        }
        let mut slots = self.slots.clone();
        slots.push(ScheduleSlot::new(date, time));
        Self { slots }
    }

    /// Removes the slot matching exactly (date, time). No-op if absent.
    #[must_use]
    pub fn remove(&self, date: NaiveDate, time: TimeLabel) -> Self {
        let slots = self
            .slots
            .iter()
            .copied()
            .filter(|slot| !(slot.date == date && slot.time == time))
            .collect();
        Self { slots }
    }

    /// Removes the slot if present, adds it otherwise.
    #[must_use]
    pub fn toggle(&self, date: NaiveDate, time: TimeLabel) -> Self {
        if self.is_slot_selected(date, time) {
            self.remove(date, time)
        } else {
            self.add(date, time)
        }
    }

    /// Removes every slot scheduled on the given date.
    #[must_use]
    pub fn remove_all_for_date(&self, date: NaiveDate) -> Self {
        let slots = self
            .slots
            .iter()
            .copied()
            .filter(|slot| slot.date != date)
            .collect();
        Self { slots }
    }

    /// Time labels scheduled on the given date, in fixed time-set order
    /// rather than insertion order, for stable display.
    pub fn slots_for_date(&self, date: NaiveDate) -> Vec<TimeLabel> {
        let mut times: Vec<TimeLabel> = self
            .slots
            .iter()
            .filter(|slot| slot.date == date)
            .map(|slot| slot.time)
            .collect();
        times.sort();
        times
    }

    /// True iff (date, time) exists in the set, regardless of availability.
    pub fn is_slot_selected(&self, date: NaiveDate, time: TimeLabel) -> bool {
        self.slots
            .iter()
            .any(|slot| slot.date == date && slot.time == time)
    }

    /// Groups slots by calendar day for display. Dates are ordered; slots
    /// within a date keep insertion order.
    pub fn grouped_by_date(&self) -> BTreeMap<NaiveDate, Vec<ScheduleSlot>> {
        let mut groups: BTreeMap<NaiveDate, Vec<ScheduleSlot>> = BTreeMap::new();
        for slot in &self.slots {
            groups.entry(slot.date).or_default().push(*slot);
        }
        groups
    }

    /// Slots a traveler can currently book, in insertion order.
    ///
    /// Insertion order (not sorted by date/time) is deliberate: it is the
    /// order the booking screens have always shown.
    pub fn available_slots(&self) -> impl Iterator<Item = &ScheduleSlot> {
        self.slots.iter().filter(|slot| slot.is_available)
    }

    /// Cross-field validation owned by the schedule itself. Field rules for
    /// the rest of the trip form live with the draft validator.
    pub fn validate(&self) -> Vec<ScheduleError> {
        if self.slots.is_empty() {
            vec![ScheduleError::Empty]
        } else {
            Vec::new()
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScheduleSlot> {
        self.slots.iter()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
