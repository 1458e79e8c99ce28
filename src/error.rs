//! Error types for the appointment planner

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the appointment planner
///
/// Boundary validation messages are the French product strings shown to the
/// practitioner; internal errors use plain English.
#[derive(Error, Debug)]
pub enum Error {
    /// Start date missing at the caller boundary
    #[error("La date de départ est requise.")]
    MissingStartDate,

    /// Start date present but not a valid ISO calendar date
    #[error("Date de départ invalide: {0}")]
    InvalidStartDate(String),

    /// Patient name shorter than the form minimum
    #[error("Le nom du patient doit contenir au moins 2 caractères.")]
    PatientNameTooShort,

    /// Date adjustment walked past its iteration cap without finding a
    /// valid day; indicates an internally inconsistent constraint
    #[error("no valid appointment date within {0} days of the candidate")]
    AdjustmentExhausted(u32),
}
