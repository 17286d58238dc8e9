//! # Error Types
//!
//! Domain error types for lunchly-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  lunchly-core errors (this file)                                       │
//! │  └── ValidationError  - Rejected field assignments                     │
//! │                                                                         │
//! │  lunchly-db errors (separate crate)                                    │
//! │  └── DbError          - NotFound (404) and store failures              │
//! │                                                                         │
//! │  Flow: ValidationError → DbError::Validation → web layer → user        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A setter that returns a `ValidationError` has not touched the entity:
//! the field still holds its previous value.

use thiserror::Error;

/// Field validation errors raised by entity setters and constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is below the allowed minimum.
    ///
    /// ## When This Occurs
    /// - Reservation for zero (or negative) guests
    #[error("{field} must be at least {min}")]
    BelowMinimum { field: String, min: i64 },

    /// Invalid format (e.g. a start time that is not a date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Reservation already belongs to a different customer.
    ///
    /// ## User Workflow
    /// ```text
    /// Reservation { customer_id: Some(7) }
    ///      │
    ///      ▼
    /// set_customer_id(9)
    ///      │
    ///      ▼
    /// CustomerReassignment { current: 7, requested: 9 }
    ///      │
    ///      ▼
    /// UI shows: "Cannot move reservation from customer 7 to customer 9"
    /// ```
    #[error("Cannot move reservation from customer {current} to customer {requested}")]
    CustomerReassignment { current: i64, requested: i64 },

    /// Entity id was already assigned by the store.
    #[error("{entity} already has id {id}")]
    IdAlreadyAssigned { entity: String, id: i64 },
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;
