//! Follow-up sequence orchestration and the caller boundary
//!
//! Drives preference parsing, date adjustment and description building over
//! the fixed follow-up offsets, and exposes the string-typed entry point the
//! presentation layer calls with raw form input.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::adjust::adjust;
use crate::describe::describe;
use crate::error::{Error, Result};
use crate::preference;

/// Fixed follow-up offsets in days from the start date (J0)
pub const FOLLOW_UP_OFFSETS: [u32; 4] = [7, 14, 21, 30];

/// One scheduled follow-up appointment
///
/// The date serializes as ISO `yyyy-MM-dd`. Appointments are constructed
/// fresh on every resolution; the planner keeps no cross-call state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub date: NaiveDate,
    pub description: String,
}

/// Raw form input handed to the boundary by the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    /// Display-only; never used in resolution logic
    pub patient_name: String,
    /// ISO-8601 date string (yyyy-MM-dd)
    pub start_date: String,
    /// Optional free-text day/time preference
    #[serde(default)]
    pub patient_preferences: Option<String>,
}

/// Validated boundary output: the four appointments plus display context
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub patient_name: String,
    pub start_date: NaiveDate,
    pub appointments: Vec<Appointment>,
}

/// Compute the four follow-up appointments for a start date
///
/// The preference text is parsed once; each offset's naive J+N date is then
/// walked forward to the nearest valid day and labeled. Always returns
/// exactly four appointments, in ascending offset order. Arbitrary
/// preference text never fails; the only error is the internal adjustment
/// cap, unreachable through [`preference::parse`].
pub fn resolve(start_date: NaiveDate, preference_text: &str) -> Result<Vec<Appointment>> {
    let constraint = preference::parse(preference_text);

    let mut appointments = Vec::with_capacity(FOLLOW_UP_OFFSETS.len());
    for (index, offset) in FOLLOW_UP_OFFSETS.into_iter().enumerate() {
        let ordinal = index + 1;
        let candidate = start_date + Duration::days(offset as i64);
        let adjusted = adjust(candidate, &constraint)?;
        let description = describe(offset, ordinal, candidate, adjusted, &constraint);
        appointments.push(Appointment {
            date: adjusted,
            description,
        });
    }

    Ok(appointments)
}

/// Validate raw form input and compute the appointment schedule
///
/// Mirrors the scheduling form's rules: the patient name must be at least
/// two characters and the start date a valid ISO calendar date. Preference
/// text is never rejected here; anything unrecognized simply means no
/// constraint.
pub fn suggest(request: &SuggestionRequest) -> Result<Suggestion> {
    let patient_name = request.patient_name.trim();
    if patient_name.chars().count() < 2 {
        return Err(Error::PatientNameTooShort);
    }

    let raw_date = request.start_date.trim();
    if raw_date.is_empty() {
        return Err(Error::MissingStartDate);
    }
    let start_date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d")
        .map_err(|_| Error::InvalidStartDate(raw_date.to_string()))?;

    let preferences = request.patient_preferences.as_deref().unwrap_or("");
    let appointments = resolve(start_date, preferences)?;

    Ok(Suggestion {
        patient_name: patient_name.to_string(),
        start_date,
        appointments,
    })
}
