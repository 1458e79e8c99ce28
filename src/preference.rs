//! Patient preference parsing
//!
//! Turns the free-text preference field from the scheduling form into a
//! structured constraint. Parsing is deliberately forgiving: anything that
//! does not match a recognized pattern degrades to the least restrictive
//! constraint, since a missed preference is less harmful than a rejected
//! booking.

use chrono::Weekday;

/// Time-of-day slot attached to a preferred weekday
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSlot {
    Morning,
    Afternoon,
    AllDay,
}

impl TimeSlot {
    /// Parse a French time phrase, tolerating missing accents
    fn parse_phrase(s: &str) -> Option<TimeSlot> {
        match s {
            "matin" => Some(TimeSlot::Morning),
            "après-midi" | "apres-midi" => Some(TimeSlot::Afternoon),
            "toute la journée" | "toute la journee" => Some(TimeSlot::AllDay),
            _ => None,
        }
    }

    /// Display label used in appointment descriptions
    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "Matin",
            TimeSlot::Afternoon => "Après-midi",
            TimeSlot::AllDay => "Toute la journée",
        }
    }
}

/// Structured form of a free-text day/time preference
///
/// Exactly one variant is active per resolution. An `AllowList` is never
/// empty: a restriction phrase that yields no valid slots degrades to `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceConstraint {
    /// No restriction beyond default weekend avoidance
    None,
    /// Restrict to exactly these (weekday, slot) pairs; overrides weekend
    /// avoidance entirely, so Saturday/Sunday slots are honored as given
    AllowList(Vec<(Weekday, TimeSlot)>),
    /// These weekdays are forbidden, in addition to weekends
    DenyList(Vec<Weekday>),
}

/// Fixed French weekday-name table (dimanche = Sunday … samedi = Saturday)
const WEEKDAY_NAMES: [(&str, Weekday); 7] = [
    ("dimanche", Weekday::Sun),
    ("lundi", Weekday::Mon),
    ("mardi", Weekday::Tue),
    ("mercredi", Weekday::Wed),
    ("jeudi", Weekday::Thu),
    ("vendredi", Weekday::Fri),
    ("samedi", Weekday::Sat),
];

/// Look up a French weekday name
fn weekday_from_name(name: &str) -> Option<Weekday> {
    WEEKDAY_NAMES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, day)| *day)
}

/// Parse a free-text preference expression into a structured constraint
///
/// Recognized forms (case-insensitive):
/// - `"only on <day> <time>, <day> <time>, ..."` → `AllowList`, e.g.
///   `"only on mardi matin, vendredi toute la journée"`. Malformed list
///   entries are silently dropped; if nothing survives, degrades to `None`.
/// - text containing `"not on <day>"` markers → `DenyList` of those days.
/// - anything else (including empty text) → `None`.
///
/// This never fails: unparseable text means "no expressed preference".
pub fn parse(preference_text: &str) -> PreferenceConstraint {
    let text = preference_text.trim().to_lowercase();

    if text.is_empty() {
        return PreferenceConstraint::None;
    }

    if let Some(list) = text.strip_prefix("only on") {
        let mut slots = Vec::new();
        for token in list.split(',') {
            let token = token.trim();
            // Token shape: "<weekday-name> <time-phrase>"
            let Some((day_name, time_phrase)) = token.split_once(' ') else {
                continue;
            };
            let day = weekday_from_name(day_name.trim());
            let slot = TimeSlot::parse_phrase(time_phrase.trim());
            if let (Some(day), Some(slot)) = (day, slot) {
                slots.push((day, slot));
            }
        }
        if slots.is_empty() {
            return PreferenceConstraint::None;
        }
        return PreferenceConstraint::AllowList(slots);
    }

    let mut denied = Vec::new();
    for (name, day) in WEEKDAY_NAMES {
        if text.contains(&format!("not on {name}")) && !denied.contains(&day) {
            denied.push(day);
        }
    }
    if !denied.is_empty() {
        return PreferenceConstraint::DenyList(denied);
    }

    PreferenceConstraint::None
}
