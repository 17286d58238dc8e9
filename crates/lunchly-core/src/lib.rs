//! # lunchly-core: Entities and Validation for Lunchly
//!
//! The restaurant's two entities, [`Customer`] and [`Reservation`], with the
//! rules they enforce on every assignment. No I/O happens here; persistence
//! lives in `lunchly-db`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Lunchly Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Web layer (routes, templates) - external           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ lunchly-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐  ┌─────────────┐  ┌────────────┐              │   │
//! │  │   │  customer  │  │ reservation │  │ validation │              │   │
//! │  │   │  Customer  │  │ Reservation │  │   rules    │              │   │
//! │  │   └────────────┘  └─────────────┘  └────────────┘              │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  lunchly-db (Database Layer)                    │   │
//! │  │          SQLite queries, migrations, repositories               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`customer`] - The [`Customer`] entity
//! - [`reservation`] - The [`Reservation`] entity and start time formatting
//! - [`validation`] - Field rules used by the setters
//! - [`error`] - [`ValidationError`]
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use lunchly_core::Reservation;
//!
//! let start = NaiveDate::from_ymd_opt(2023, 1, 5)
//!     .unwrap()
//!     .and_hms_opt(13, 30, 0)
//!     .unwrap();
//!
//! let mut reservation = Reservation::new(1, start, 2).unwrap();
//!
//! // Rejected before mutation: still 2 guests
//! assert!(reservation.set_num_guests(0).is_err());
//! assert_eq!(reservation.num_guests(), 2);
//!
//! assert_eq!(reservation.format_start_at(), "January 5th 2023, 1:30 pm");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod customer;
pub mod error;
pub mod reservation;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use customer::Customer;
pub use error::{ValidationError, ValidationResult};
pub use reservation::Reservation;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Smallest party a reservation can be made for.
pub const MIN_GUESTS: i32 = 1;

/// Number of customers returned by a top-customers listing when the caller
/// does not ask for a specific count.
pub const DEFAULT_TOP_CUSTOMERS_LIMIT: u32 = 10;
