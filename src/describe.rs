//! Appointment description building
//!
//! Produces the label shown on the printed schedule: base label, interval
//! tag recording whether the date was shifted from its naive J+N position,
//! and an optional time-of-day suffix.

use chrono::{Datelike, NaiveDate};

use crate::preference::{PreferenceConstraint, TimeSlot};

/// Build the description for one appointment
///
/// - Base label is `"Rendez-vous #{ordinal}"`; the fourth appointment also
///   carries the billing marker `"& Facturation"`.
/// - The interval tag is `"(J+N)"` when the date kept its naive position and
///   `"(base J+N)"` when it was shifted forward.
/// - When an allow-list is active and registers slots for the adjusted
///   date's weekday, a `" - {slot}"` suffix is appended, choosing by
///   priority: all-day, then morning, then afternoon, then whatever remains.
pub fn describe(
    offset_days: u32,
    ordinal: usize,
    original_candidate: NaiveDate,
    adjusted_date: NaiveDate,
    constraint: &PreferenceConstraint,
) -> String {
    let mut description = format!("Rendez-vous #{ordinal}");
    if ordinal == 4 {
        description.push_str(" & Facturation");
    }

    if adjusted_date == original_candidate {
        description.push_str(&format!(" (J+{offset_days})"));
    } else {
        description.push_str(&format!(" (base J+{offset_days})"));
    }

    if let PreferenceConstraint::AllowList(slots) = constraint {
        if let Some(slot) = slot_for_day(slots, adjusted_date) {
            description.push_str(&format!(" - {}", slot.label()));
        }
    }

    description
}

/// Pick the slot to display for the adjusted date's weekday
fn slot_for_day(slots: &[(chrono::Weekday, TimeSlot)], date: NaiveDate) -> Option<TimeSlot> {
    let day = date.weekday();
    let registered: Vec<TimeSlot> = slots
        .iter()
        .filter(|(d, _)| *d == day)
        .map(|(_, slot)| *slot)
        .collect();

    for preferred in [TimeSlot::AllDay, TimeSlot::Morning, TimeSlot::Afternoon] {
        if registered.contains(&preferred) {
            return Some(preferred);
        }
    }
    registered.first().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preference::parse;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_unshifted_date_uses_plain_interval_tag() {
        let day = date(2024, 1, 8);
        let description = describe(7, 1, day, day, &PreferenceConstraint::None);
        assert_eq!(description, "Rendez-vous #1 (J+7)");
    }

    #[test]
    fn test_shifted_date_uses_base_interval_tag() {
        let description = describe(
            14,
            2,
            date(2024, 1, 13),
            date(2024, 1, 15),
            &PreferenceConstraint::None,
        );
        assert_eq!(description, "Rendez-vous #2 (base J+14)");
    }

    #[test]
    fn test_fourth_appointment_carries_billing_marker() {
        let day = date(2024, 1, 31);
        let description = describe(30, 4, day, day, &PreferenceConstraint::None);
        assert_eq!(description, "Rendez-vous #4 & Facturation (J+30)");
    }

    #[test]
    fn test_slot_suffix_from_allow_list() {
        let constraint = parse("only on mardi matin");
        // 2024-01-09 is a Tuesday
        let day = date(2024, 1, 9);
        let description = describe(7, 1, day, day, &constraint);
        assert_eq!(description, "Rendez-vous #1 (J+7) - Matin");
    }

    #[test]
    fn test_slot_priority_all_day_over_morning_over_afternoon() {
        let day = date(2024, 1, 9); // Tuesday
        let slots = |phrases: &str| parse(&format!("only on {phrases}"));

        let constraint = slots("mardi après-midi, mardi matin");
        assert!(describe(7, 1, day, day, &constraint).ends_with("- Matin"));

        let constraint = slots("mardi après-midi, mardi matin, mardi toute la journée");
        assert!(describe(7, 1, day, day, &constraint).ends_with("- Toute la journée"));

        let constraint = slots("mardi après-midi");
        assert!(describe(7, 1, day, day, &constraint).ends_with("- Après-midi"));
    }

    #[test]
    fn test_no_suffix_when_day_not_in_allow_list() {
        // Constraint registers Tuesday only; describing a Friday date
        // (possible only if the caller bypassed adjust) adds no suffix.
        let constraint = PreferenceConstraint::AllowList(vec![(
            Weekday::Tue,
            crate::preference::TimeSlot::Morning,
        )]);
        let day = date(2024, 1, 12);
        let description = describe(7, 1, day, day, &constraint);
        assert_eq!(description, "Rendez-vous #1 (J+7)");
    }

    #[test]
    fn test_deny_list_never_adds_suffix() {
        let constraint = parse("not on vendredi");
        let day = date(2024, 1, 9);
        let description = describe(7, 1, day, day, &constraint);
        assert_eq!(description, "Rendez-vous #1 (J+7)");
    }
}
