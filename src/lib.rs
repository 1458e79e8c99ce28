//! Follow-up Appointment Planner
//!
//! Computes the four follow-up appointments (J+7, J+14, J+21, J+30) after a
//! device fitting, adjusting each date to the patient's free-text day/time
//! preferences or, absent preferences, to avoid weekends. This library
//! provides functionality to:
//! - Parse free-text preferences into a structured constraint
//! - Walk a candidate date forward to the nearest valid day
//! - Label each appointment, recording whether its date was shifted
//! - Validate raw form input at the caller boundary
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use rdv_planner::schedule::resolve;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let appointments = resolve(start, "only on mardi matin").expect("bounded adjustment");
//!
//! assert_eq!(appointments.len(), 4);
//! assert!(appointments[0].description.starts_with("Rendez-vous #1"));
//! ```

pub mod adjust;
pub mod describe;
pub mod error;
pub mod preference;
pub mod schedule;

// Re-export commonly used items
pub use error::{Error, Result};
pub use preference::{PreferenceConstraint, TimeSlot};
pub use schedule::{resolve, suggest, Appointment, Suggestion, SuggestionRequest};
