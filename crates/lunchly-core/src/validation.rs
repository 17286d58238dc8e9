//! # Validation Module
//!
//! Field rules shared by the entity setters.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Web form (external)                                          │
//! │  └── Raw strings from the request                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Entity setters (Rust)                                        │
//! │  └── THIS MODULE: guest count, start time parsing                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── Foreign key constraints                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use lunchly_core::validation::{parse_start_at, validate_num_guests};
//!
//! assert!(validate_num_guests(4).is_ok());
//! assert!(validate_num_guests(0).is_err());
//!
//! assert!(parse_start_at("2023-01-05 13:30").is_ok());
//! assert!(parse_start_at("next tuesday").is_err());
//! ```

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

pub use crate::error::ValidationResult;
use crate::error::ValidationError;
use crate::MIN_GUESTS;

/// Formats accepted for a start time typed into a form.
///
/// `T`-separated variants are what an HTML `datetime-local` input submits.
const START_AT_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a party size.
///
/// ## Rules
/// - Must be at least [`MIN_GUESTS`] (1)
///
/// ## Example
/// ```rust
/// use lunchly_core::validation::validate_num_guests;
///
/// assert!(validate_num_guests(1).is_ok());
/// assert!(validate_num_guests(-2).is_err());
/// ```
pub fn validate_num_guests(num_guests: i32) -> ValidationResult<()> {
    if num_guests < MIN_GUESTS {
        return Err(ValidationError::BelowMinimum {
            field: "num_guests".to_string(),
            min: MIN_GUESTS as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Date/Time Validators
// =============================================================================

/// Parses a reservation start time from text.
///
/// ## Accepted Input
/// - `2023-01-05 13:30`, `2023-01-05 13:30:00` (optionally fractional)
/// - `2023-01-05T13:30` (HTML `datetime-local`)
/// - RFC 3339 with offset, e.g. `2023-01-05T13:30:00-05:00` (wall time kept)
/// - Date only, `2023-01-05`, meaning midnight
///
/// Anything else is not a date and fails with `InvalidFormat`.
pub fn parse_start_at(input: &str) -> ValidationResult<NaiveDateTime> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::Required {
            field: "start_at".to_string(),
        });
    }

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(input) {
        return Ok(with_offset.naive_local());
    }

    for format in START_AT_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(parsed);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight);
        }
    }

    Err(ValidationError::InvalidFormat {
        field: "start_at".to_string(),
        reason: format!("'{input}' is not a date and time"),
    })
}

// =============================================================================
// Notes
// =============================================================================

/// Serde hook for `notes` fields: a missing or `null` value becomes `""`.
pub(crate) fn notes_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// Unit Tests
// =============================================================================
