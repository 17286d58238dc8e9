//! # Reservation
//!
//! A booking for a party at a given time.
//!
//! ## Field Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Field          Rule                          Checked in                │
//! │  ─────────────  ────────────────────────────  ────────────────────────  │
//! │  num_guests     >= 1                          new(), set_num_guests()   │
//! │  start_at       a date/time                   type / set_start_at_str() │
//! │  customer_id    set once, never moved         set_customer_id()         │
//! │  notes          never absent ("" when none)   set_notes()               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A rejected assignment leaves the reservation exactly as it was.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};
use crate::validation::{notes_or_empty, parse_start_at, validate_num_guests};

/// A party's reservation.
///
/// Belongs to a customer through `customer_id` only; the store keeps no
/// back-reference on the customer side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(try_from = "ReservationFields")]
pub struct Reservation {
    id: Option<i64>,
    customer_id: Option<i64>,
    start_at: NaiveDateTime,
    num_guests: i32,
    notes: String,
}

impl Reservation {
    /// Creates an unsaved reservation for a customer.
    ///
    /// ## Returns
    /// * `Err(ValidationError::BelowMinimum)` - fewer than one guest
    pub fn new(customer_id: i64, start_at: NaiveDateTime, num_guests: i32) -> ValidationResult<Self> {
        let mut reservation = Reservation::unassigned(start_at, num_guests)?;
        reservation.customer_id = Some(customer_id);
        Ok(reservation)
    }

    /// Creates an unsaved reservation not yet tied to a customer.
    ///
    /// It must be given a customer with [`Reservation::set_customer_id`]
    /// before it can be saved.
    pub fn unassigned(start_at: NaiveDateTime, num_guests: i32) -> ValidationResult<Self> {
        validate_num_guests(num_guests)?;

        Ok(Reservation {
            id: None,
            customer_id: None,
            start_at,
            num_guests,
            notes: String::new(),
        })
    }

    /// Builder-style notes for freshly created reservations.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.set_notes(notes);
        self
    }

    /// Store-assigned id, `None` until the first save.
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Records the id generated by the store on insert.
    pub fn assign_id(&mut self, id: i64) -> ValidationResult<()> {
        if let Some(current) = self.id {
            return Err(ValidationError::IdAlreadyAssigned {
                entity: "Reservation".to_string(),
                id: current,
            });
        }

        self.id = Some(id);
        Ok(())
    }

    pub fn customer_id(&self) -> Option<i64> {
        self.customer_id
    }

    /// Ties the reservation to a customer.
    ///
    /// Any id, including `0`, counts as set. Repeating the current id is a
    /// no-op; a different id fails with `CustomerReassignment`.
    pub fn set_customer_id(&mut self, customer_id: i64) -> ValidationResult<()> {
        match self.customer_id {
            Some(current) if current != customer_id => Err(ValidationError::CustomerReassignment {
                current,
                requested: customer_id,
            }),
            _ => {
                self.customer_id = Some(customer_id);
                Ok(())
            }
        }
    }

    pub fn start_at(&self) -> NaiveDateTime {
        self.start_at
    }

    pub fn set_start_at(&mut self, start_at: NaiveDateTime) {
        self.start_at = start_at;
    }

    /// Sets the start time from form text, see [`parse_start_at`].
    pub fn set_start_at_str(&mut self, input: &str) -> ValidationResult<()> {
        self.start_at = parse_start_at(input)?;
        Ok(())
    }

    pub fn num_guests(&self) -> i32 {
        self.num_guests
    }

    /// Sets the party size; values below one are rejected.
    pub fn set_num_guests(&mut self, num_guests: i32) -> ValidationResult<()> {
        validate_num_guests(num_guests)?;
        self.num_guests = num_guests;
        Ok(())
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    pub fn clear_notes(&mut self) {
        self.notes.clear();
    }

    /// Human-readable start time, e.g. `January 5th 2023, 1:30 pm`.
    pub fn format_start_at(&self) -> String {
        format_start_at(&self.start_at)
    }
}

/// Renders a start time as `<Month> <Day><ordinal> <Year>, <h>:<mm> <am|pm>`.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use lunchly_core::reservation::format_start_at;
///
/// let at = NaiveDate::from_ymd_opt(2023, 1, 5).unwrap().and_hms_opt(13, 30, 0).unwrap();
/// assert_eq!(format_start_at(&at), "January 5th 2023, 1:30 pm");
/// ```
pub fn format_start_at(start_at: &NaiveDateTime) -> String {
    use chrono::Datelike;

    format!(
        "{}{} {}",
        start_at.format("%B %-d"),
        ordinal_suffix(start_at.day()),
        start_at.format("%Y, %-I:%M %P")
    )
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Wire shape used when deserializing, so incoming data passes the same
/// guest-count check as the setters.
#[derive(Deserialize)]
struct ReservationFields {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    customer_id: Option<i64>,
    start_at: NaiveDateTime,
    num_guests: i32,
    #[serde(default, deserialize_with = "notes_or_empty")]
    notes: String,
}

impl TryFrom<ReservationFields> for Reservation {
    type Error = ValidationError;

    fn try_from(fields: ReservationFields) -> Result<Self, Self::Error> {
        validate_num_guests(fields.num_guests)?;

        Ok(Reservation {
            id: fields.id,
            customer_id: fields.customer_id,
            start_at: fields.start_at,
            num_guests: fields.num_guests,
            notes: fields.notes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_new_rejects_empty_party() {
        assert!(Reservation::new(1, at(2023, 1, 5, 13, 30), 0).is_err());
        assert!(Reservation::new(1, at(2023, 1, 5, 13, 30), -3).is_err());

        let reservation = Reservation::new(1, at(2023, 1, 5, 13, 30), 2).unwrap();
        assert_eq!(reservation.customer_id(), Some(1));
        assert_eq!(reservation.num_guests(), 2);
        assert_eq!(reservation.notes(), "");
        assert_eq!(reservation.id(), None);
    }

    #[test]
    fn test_set_num_guests_keeps_old_value_on_error() {
        let mut reservation = Reservation::new(1, at(2023, 1, 5, 13, 30), 4).unwrap();

        let err = reservation.set_num_guests(0).unwrap_err();
        assert_eq!(
            err,
            ValidationError::BelowMinimum {
                field: "num_guests".to_string(),
                min: 1
            }
        );
        assert_eq!(reservation.num_guests(), 4);

        reservation.set_num_guests(6).unwrap();
        assert_eq!(reservation.num_guests(), 6);
    }

    #[test]
    fn test_set_start_at_str() {
        let mut reservation = Reservation::new(1, at(2023, 1, 5, 13, 30), 2).unwrap();

        assert!(reservation.set_start_at_str("not a date").is_err());
        assert_eq!(reservation.start_at(), at(2023, 1, 5, 13, 30));

        reservation.set_start_at_str("2024-02-29T19:15").unwrap();
        assert_eq!(reservation.start_at(), at(2024, 2, 29, 19, 15));

        reservation.set_start_at(at(2024, 3, 1, 12, 0));
        assert_eq!(reservation.start_at(), at(2024, 3, 1, 12, 0));
    }

    #[test]
    fn test_customer_id_cannot_move() {
        let mut reservation = Reservation::new(7, at(2023, 1, 5, 13, 30), 2).unwrap();

        let err = reservation.set_customer_id(9).unwrap_err();
        assert_eq!(
            err,
            ValidationError::CustomerReassignment {
                current: 7,
                requested: 9
            }
        );
        assert_eq!(reservation.customer_id(), Some(7));

        // Same customer again is accepted.
        reservation.set_customer_id(7).unwrap();
        assert_eq!(reservation.customer_id(), Some(7));
    }

    #[test]
    fn test_customer_zero_counts_as_set() {
        let mut reservation = Reservation::unassigned(at(2023, 1, 5, 13, 30), 2).unwrap();
        assert_eq!(reservation.customer_id(), None);

        reservation.set_customer_id(0).unwrap();
        assert_eq!(reservation.customer_id(), Some(0));
        assert!(reservation.set_customer_id(5).is_err());
        assert_eq!(reservation.customer_id(), Some(0));
    }

    #[test]
    fn test_notes_never_absent() {
        let mut reservation = Reservation::new(1, at(2023, 1, 5, 13, 30), 2)
            .unwrap()
            .with_notes("window seat");
        assert_eq!(reservation.notes(), "window seat");

        reservation.set_notes("");
        assert_eq!(reservation.notes(), "");

        reservation.set_notes("birthday");
        reservation.clear_notes();
        assert_eq!(reservation.notes(), "");
    }

    #[test]
    fn test_assign_id_only_once() {
        let mut reservation = Reservation::new(1, at(2023, 1, 5, 13, 30), 2).unwrap();
        reservation.assign_id(10).unwrap();
        assert!(reservation.is_persisted());
        assert!(reservation.assign_id(11).is_err());
        assert_eq!(reservation.id(), Some(10));
    }

    #[test]
    fn test_format_start_at() {
        let cases = [
            (at(2023, 1, 5, 13, 30), "January 5th 2023, 1:30 pm"),
            (at(2023, 3, 1, 0, 5), "March 1st 2023, 12:05 am"),
            (at(2023, 6, 2, 12, 0), "June 2nd 2023, 12:00 pm"),
            (at(2023, 7, 3, 9, 45), "July 3rd 2023, 9:45 am"),
            (at(2023, 8, 11, 18, 0), "August 11th 2023, 6:00 pm"),
            (at(2023, 8, 12, 18, 0), "August 12th 2023, 6:00 pm"),
            (at(2023, 8, 13, 18, 0), "August 13th 2023, 6:00 pm"),
            (at(2023, 10, 21, 20, 10), "October 21st 2023, 8:10 pm"),
            (at(2023, 10, 22, 20, 10), "October 22nd 2023, 8:10 pm"),
            (at(2023, 12, 31, 23, 59), "December 31st 2023, 11:59 pm"),
        ];

        for (start_at, expected) in cases {
            let reservation = Reservation::new(1, start_at, 2).unwrap();
            assert_eq!(reservation.format_start_at(), expected);
        }
    }

    #[test]
    fn test_deserialize_validates_guests() {
        let ok: Reservation = serde_json::from_str(
            r#"{"customer_id":3,"start_at":"2023-01-05T13:30:00","num_guests":2,"notes":null}"#,
        )
        .unwrap();
        assert_eq!(ok.customer_id(), Some(3));
        assert_eq!(ok.notes(), "");

        let bad = serde_json::from_str::<Reservation>(
            r#"{"customer_id":3,"start_at":"2023-01-05T13:30:00","num_guests":0}"#,
        );
        assert!(bad.is_err());
    }
}
