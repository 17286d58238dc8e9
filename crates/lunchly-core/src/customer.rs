//! # Customer
//!
//! A guest of the restaurant.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Customer::new(..)          CustomerRepository::save        save       │
//! │   ┌──────────────┐  insert   ┌──────────────────┐  update  ┌────────┐  │
//! │   │ NEW          │ ────────► │ PERSISTED        │ ───────► │ (same) │  │
//! │   │ id: None     │           │ id: Some(n)      │          │        │  │
//! │   └──────────────┘           └──────────────────┘          └────────┘  │
//! │                                                                         │
//! │   No deletion. The id is assigned exactly once.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};
use crate::validation::notes_or_empty;

/// A restaurant customer.
///
/// Reservations are not cached here; ask the reservation repository for
/// them each time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Customer {
    id: Option<i64>,

    /// Given name.
    pub first_name: String,

    /// Family name, primary sort key for listings.
    pub last_name: String,

    /// Contact phone number, stored as entered.
    pub phone: String,

    #[serde(default, deserialize_with = "notes_or_empty")]
    notes: String,
}

impl Customer {
    /// Creates a customer that has not been saved yet.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Customer {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: phone.into(),
            notes: String::new(),
        }
    }

    /// Builder-style notes for freshly created customers.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.set_notes(notes);
        self
    }

    /// Store-assigned id, `None` until the first save.
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// Whether this customer has been written to the store.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Records the id generated by the store on insert.
    ///
    /// ## Returns
    /// * `Err(ValidationError::IdAlreadyAssigned)` - the customer already has an id
    pub fn assign_id(&mut self, id: i64) -> ValidationResult<()> {
        if let Some(current) = self.id {
            return Err(ValidationError::IdAlreadyAssigned {
                entity: "Customer".to_string(),
                id: current,
            });
        }

        self.id = Some(id);
        Ok(())
    }

    /// `first_name + " " + last_name`
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Free-form notes, never absent (empty when none were given).
    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// Removes all notes, leaving an empty string.
    pub fn clear_notes(&mut self) {
        self.notes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let customer = Customer::new("Ada", "Lovelace", "555-0100");
        assert_eq!(customer.full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_new_customer_is_unsaved_with_empty_notes() {
        let customer = Customer::new("Ada", "Lovelace", "555-0100");
        assert_eq!(customer.id(), None);
        assert!(!customer.is_persisted());
        assert_eq!(customer.notes(), "");
    }

    #[test]
    fn test_notes_never_absent() {
        let mut customer = Customer::new("Ada", "Lovelace", "").with_notes("prefers booth");
        assert_eq!(customer.notes(), "prefers booth");

        customer.set_notes("");
        assert_eq!(customer.notes(), "");

        customer.set_notes(String::from("allergic to nuts"));
        customer.clear_notes();
        assert_eq!(customer.notes(), "");
    }

    #[test]
    fn test_assign_id_only_once() {
        let mut customer = Customer::new("Ada", "Lovelace", "");
        customer.assign_id(3).unwrap();
        assert_eq!(customer.id(), Some(3));
        assert!(customer.is_persisted());

        let err = customer.assign_id(4).unwrap_err();
        assert_eq!(
            err,
            ValidationError::IdAlreadyAssigned {
                entity: "Customer".to_string(),
                id: 3
            }
        );
        assert_eq!(customer.id(), Some(3));
    }

    #[test]
    fn test_deserialize_without_notes_defaults_to_empty() {
        let customer: Customer = serde_json::from_str(
            r#"{"id":null,"first_name":"Grace","last_name":"Hopper","phone":"555-0199"}"#,
        )
        .unwrap();

        assert_eq!(customer.notes(), "");
        assert_eq!(customer.id(), None);
    }

    #[test]
    fn test_deserialize_null_notes_coerces_to_empty() {
        let customer: Customer = serde_json::from_str(
            r#"{"id":5,"first_name":"Grace","last_name":"Hopper","phone":"","notes":null}"#,
        )
        .unwrap();

        assert_eq!(customer.notes(), "");
        assert_eq!(customer.id(), Some(5));
    }

    #[test]
    fn test_serialized_shape() {
        let customer = Customer::new("Grace", "Hopper", "555-0199").with_notes("regular");
        let json = serde_json::to_value(&customer).unwrap();

        assert_eq!(json["first_name"], "Grace");
        assert_eq!(json["notes"], "regular");
        assert!(json["id"].is_null());
    }
}
