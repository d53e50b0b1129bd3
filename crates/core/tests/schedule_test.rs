use chrono::NaiveDate;
use cicerone_core::schedule::{ScheduleError, ScheduleSet, ScheduleSlot, TimeLabel};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn label(s: &str) -> TimeLabel {
    s.parse().expect("valid time label")
}

#[test]
fn test_add_is_idempotent() {
    let d = date(2025, 6, 1);
    let t = label("09:00");

    let set = ScheduleSet::new().add(d, t).add(d, t);

    assert_eq!(set.len(), 1);
    assert!(set.is_slot_selected(d, t));
}

#[test]
fn test_add_does_not_mutate_receiver() {
    let original = ScheduleSet::new();
    let _updated = original.add(date(2025, 6, 1), label("09:00"));

    assert!(original.is_empty());
}

#[test]
fn test_toggle_twice_restores_set() {
    let d = date(2025, 6, 1);
    let set = ScheduleSet::new()
        .add(d, label("09:00"))
        .add(d, label("10:00"));

    let toggled_back = set.toggle(d, label("11:00")).toggle(d, label("11:00"));

    assert_eq!(toggled_back, set);
}

#[test]
fn test_remove_then_not_selected() {
    let d = date(2025, 6, 1);
    let t = label("09:00");
    let set = ScheduleSet::new().add(d, t).remove(d, t);

    assert!(!set.is_slot_selected(d, t));
    assert!(set.is_empty());
}

#[test]
fn test_remove_absent_slot_is_noop() {
    let set = ScheduleSet::new().add(date(2025, 6, 1), label("09:00"));
    let removed = set.remove(date(2025, 6, 2), label("09:00"));

    assert_eq!(removed, set);
}

#[test]
fn test_remove_all_for_date_clears_grouping() {
    let d1 = date(2025, 6, 1);
    let d2 = date(2025, 6, 2);
    let set = ScheduleSet::new()
        .add(d1, label("09:00"))
        .add(d1, label("10:00"))
        .add(d2, label("09:00"))
        .remove_all_for_date(d1);

    let grouped = set.grouped_by_date();
    assert!(!grouped.contains_key(&d1));
    assert_eq!(grouped[&d2].len(), 1);
}

#[test]
fn test_slots_for_date_uses_fixed_time_order() {
    let d = date(2025, 6, 1);
    let set = ScheduleSet::new()
        .add(d, label("17:00"))
        .add(d, label("09:00"))
        .add(d, label("12:00"));

    let times = set.slots_for_date(d);
    assert_eq!(times, vec![label("09:00"), label("12:00"), label("17:00")]);
}

#[test]
fn test_slots_for_date_ignores_other_dates() {
    let set = ScheduleSet::new()
        .add(date(2025, 6, 1), label("09:00"))
        .add(date(2025, 6, 2), label("10:00"));

    assert_eq!(set.slots_for_date(date(2025, 6, 2)), vec![label("10:00")]);
    assert_eq!(set.slots_for_date(date(2025, 6, 3)), vec![]);
}

#[test]
fn test_available_slots_excludes_unavailable() {
    let booked = ScheduleSlot {
        date: date(2025, 6, 2),
        time: label("09:00"),
        is_available: false,
    };
    let open = ScheduleSlot::new(date(2025, 6, 1), label("09:00"));
    let set = ScheduleSet::from_slots([open, booked]);

    let available: Vec<_> = set.available_slots().collect();
    assert_eq!(available, vec![&open]);
    assert!(available.iter().all(|slot| slot.is_available));
}

#[test]
fn test_available_slots_keeps_insertion_order() {
    let d = date(2025, 6, 1);
    let set = ScheduleSet::new()
        .add(d, label("15:00"))
        .add(d, label("09:00"))
        .add(d, label("11:00"));

    let times: Vec<_> = set.available_slots().map(|slot| slot.time).collect();
    assert_eq!(times, vec![label("15:00"), label("09:00"), label("11:00")]);
}

#[test]
fn test_is_slot_selected_ignores_availability() {
    let booked = ScheduleSlot {
        date: date(2025, 6, 2),
        time: label("09:00"),
        is_available: false,
    };
    let set = ScheduleSet::from_slots([booked]);

    assert!(set.is_slot_selected(booked.date, booked.time));
    assert_eq!(set.available_slots().count(), 0);
}

#[test]
fn test_validate_empty_schedule() {
    let set = ScheduleSet::new();
    assert_eq!(set.validate(), vec![ScheduleError::Empty]);
}

#[test]
fn test_validate_non_empty_schedule() {
    let set = ScheduleSet::new().add(date(2025, 6, 1), label("09:00"));
    assert_eq!(set.validate(), vec![]);
}

#[test]
fn test_grouped_by_date_orders_dates() {
    let set = ScheduleSet::new()
        .add(date(2025, 6, 3), label("09:00"))
        .add(date(2025, 6, 1), label("09:00"))
        .add(date(2025, 6, 2), label("09:00"));

    let dates: Vec<_> = set.grouped_by_date().into_keys().collect();
    assert_eq!(dates, vec![date(2025, 6, 1), date(2025, 6, 2), date(2025, 6, 3)]);
}

#[test]
fn test_from_slots_deduplicates_first_wins() {
    let d = date(2025, 6, 1);
    let first = ScheduleSlot {
        date: d,
        time: label("09:00"),
        is_available: false,
    };
    let duplicate = ScheduleSlot::new(d, label("09:00"));

    let set = ScheduleSet::from_slots([first, duplicate]);

    assert_eq!(set.len(), 1);
    assert_eq!(set.iter().next(), Some(&first));
}

// The numbered walkthrough: author a schedule, empty it, rebuild it, and
// observe a booked slot.
#[test]
fn test_authoring_walkthrough() {
    let d = date(2025, 6, 1);

    // Add one slot: valid, one bookable slot.
    let set = ScheduleSet::new().add(d, label("09:00"));
    assert_eq!(set.validate(), vec![]);
    assert_eq!(set.available_slots().count(), 1);

    // Duplicate add: size unchanged.
    let set = set.add(d, label("09:00"));
    assert_eq!(set.len(), 1);

    // Toggle the same pair off: empty again, validation fails.
    let set = set.toggle(d, label("09:00"));
    assert_eq!(set.len(), 0);
    assert_eq!(set.validate(), vec![ScheduleError::Empty]);

    // Two slots on one day, then clear the day.
    let set = set.add(d, label("09:00")).add(d, label("10:00"));
    let set = set.remove_all_for_date(d);
    assert_eq!(set.len(), 0);

    // A slot already booked out: selected but not bookable.
    let booked = ScheduleSlot {
        date: date(2025, 6, 2),
        time: label("09:00"),
        is_available: false,
    };
    let set = ScheduleSet::from_slots([booked]);
    assert_eq!(set.available_slots().count(), 0);
    assert!(set.is_slot_selected(date(2025, 6, 2), label("09:00")));
}

#[rstest]
#[case("09:00", 9)]
#[case("12:00", 12)]
#[case("17:00", 17)]
fn test_time_label_parses_fixed_set(#[case] input: &str, #[case] hour: u8) {
    let parsed: TimeLabel = input.parse().expect("label in fixed set");
    assert_eq!(parsed.hour(), hour);
    assert_eq!(parsed.to_string(), input);
}

#[rstest]
#[case("08:00")]
#[case("18:00")]
#[case("09:30")]
#[case("9am")]
#[case("")]
fn test_time_label_rejects_outside_fixed_set(#[case] input: &str) {
    assert!(input.parse::<TimeLabel>().is_err());
}

#[test]
fn test_time_label_all_in_display_order() {
    let labels: Vec<_> = TimeLabel::all().collect();

    assert_eq!(labels.len(), 9);
    assert_eq!(labels.first().map(|label| label.hour()), Some(9));
    assert_eq!(labels.last().map(|label| label.hour()), Some(17));
    assert!(labels.windows(2).all(|pair| pair[0] < pair[1]));
}
