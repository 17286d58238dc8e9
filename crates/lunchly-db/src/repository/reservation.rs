//! # Reservation Repository
//!
//! Database operations for reservations.
//!
//! Reservations are stored independently of customers and found through
//! `customer_id`. Field rules (guest count, start time, customer) are
//! enforced by the entity's setters, so `save` only adds the check that a
//! customer has been chosen at all.

use sqlx::SqlitePool;
use tracing::{debug, warn};

use crate::error::DbResult;
use lunchly_core::{Reservation, ValidationError};

/// Repository for reservation database operations.
#[derive(Debug, Clone)]
pub struct ReservationRepository {
    pool: SqlitePool,
}

impl ReservationRepository {
    /// Creates a new ReservationRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ReservationRepository { pool }
    }

    /// Every reservation of one customer, in storage order.
    pub async fn list_for_customer(&self, customer_id: i64) -> DbResult<Vec<Reservation>> {
        debug!(customer_id = %customer_id, "Listing reservations for customer");

        let reservations = sqlx::query_as::<_, Reservation>(
            r#"
            SELECT id, customer_id, start_at, num_guests, notes
            FROM reservations
            WHERE customer_id = ?1
            "#,
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(reservations)
    }

    /// Saves a reservation.
    ///
    /// ## Behavior
    /// - No id yet: INSERT, then the generated id is stored on `reservation`
    /// - Has id: UPDATE every field (last writer wins)
    ///
    /// ## Returns
    /// * `Err(DbError::Validation)` - no customer set; nothing was written
    /// * `Err(DbError::ForeignKeyViolation)` - customer id does not exist
    pub async fn save(&self, reservation: &mut Reservation) -> DbResult<()> {
        let customer_id = reservation
            .customer_id()
            .ok_or_else(|| ValidationError::Required {
                field: "customer_id".to_string(),
            })?;

        match reservation.id() {
            None => {
                debug!(customer_id = %customer_id, "Inserting reservation");

                let id: i64 = sqlx::query_scalar(
                    r#"
                    INSERT INTO reservations (customer_id, start_at, num_guests, notes)
                    VALUES (?1, ?2, ?3, ?4)
                    RETURNING id
                    "#,
                )
                .bind(customer_id)
                .bind(reservation.start_at())
                .bind(reservation.num_guests())
                .bind(reservation.notes())
                .fetch_one(&self.pool)
                .await?;

                reservation.assign_id(id)?;
            }

            Some(id) => {
                debug!(id = %id, customer_id = %customer_id, "Updating reservation");

                let result = sqlx::query(
                    r#"
                    UPDATE reservations SET
                        customer_id = ?2,
                        start_at = ?3,
                        num_guests = ?4,
                        notes = ?5
                    WHERE id = ?1
                    "#,
                )
                .bind(id)
                .bind(customer_id)
                .bind(reservation.start_at())
                .bind(reservation.num_guests())
                .bind(reservation.notes())
                .execute(&self.pool)
                .await?;

                if result.rows_affected() == 0 {
                    warn!(id = %id, "Reservation update matched no rows");
                }
            }
        }

        Ok(())
    }

    /// Counts all reservations (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reservations")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
