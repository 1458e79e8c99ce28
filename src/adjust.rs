//! Date adjustment
//!
//! Walks a candidate date forward, one calendar day at a time, until it
//! satisfies the patient's constraint. Pure computation: no clock, no I/O.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::error::{Error, Result};
use crate::preference::PreferenceConstraint;

/// Hard cap on the forward walk. Weekday-only constraints converge within 7
/// days; a full year of invalid days means the constraint is inconsistent.
const MAX_ADJUSTMENT_DAYS: u32 = 366;

/// Whether a date satisfies the given constraint
///
/// Time slots carried by an `AllowList` never affect validity; they only
/// select the description suffix later.
pub fn is_valid(date: NaiveDate, constraint: &PreferenceConstraint) -> bool {
    let day = date.weekday();
    let is_weekend = matches!(day, Weekday::Sat | Weekday::Sun);

    match constraint {
        PreferenceConstraint::None => !is_weekend,
        PreferenceConstraint::AllowList(slots) => slots.iter().any(|(d, _)| *d == day),
        PreferenceConstraint::DenyList(denied) => !is_weekend && !denied.contains(&day),
    }
}

/// Find the first valid date on or after the candidate
///
/// Returns the candidate unchanged when it is already valid. The walk is
/// bounded: exceeding [`MAX_ADJUSTMENT_DAYS`] returns an internal-consistency
/// error rather than looping, which cannot happen for constraints produced by
/// [`crate::preference::parse`] (an allow-list is never empty).
pub fn adjust(candidate: NaiveDate, constraint: &PreferenceConstraint) -> Result<NaiveDate> {
    let mut date = candidate;
    for _ in 0..=MAX_ADJUSTMENT_DAYS {
        if is_valid(date, constraint) {
            return Ok(date);
        }
        date = date
            .checked_add_days(Days::new(1))
            .ok_or(Error::AdjustmentExhausted(MAX_ADJUSTMENT_DAYS))?;
    }
    Err(Error::AdjustmentExhausted(MAX_ADJUSTMENT_DAYS))
}
