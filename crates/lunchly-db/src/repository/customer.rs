//! # Customer Repository
//!
//! Database operations for customers.
//!
//! ## Key Operations
//! - Name search (case-insensitive substring on "first last")
//! - Top customers by number of reservations
//! - Load by id, insert-or-update save
//!
//! ## Name Search
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User types: "SMI"                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  pattern = "%smi%"        (str::to_lowercase, Unicode-aware)           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  search_name LIKE pattern (search_name written by save, same folding)  │
//! │                                                                         │
//! │  "Anna Smith"    ← MATCH                                               │
//! │  "Will Smithers" ← MATCH                                               │
//! │  "Tom Jones"                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ORDER BY last_name, first_name                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::{debug, warn};

use super::escape_like;
use crate::error::{DbError, DbResult};
use lunchly_core::Customer;

/// Repository for customer database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = CustomerRepository::new(pool);
///
/// let everyone = repo.list_all("").await?;
/// let customer = repo.get_by_id(7).await?;
/// ```
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CustomerRepository { pool }
    }

    /// Lists customers whose full name contains `search_term`.
    ///
    /// ## Behavior
    /// - Case-insensitive for any script: the term and the stored
    ///   `search_name` are both folded with [`str::to_lowercase`]
    /// - `%` and `_` in the term match literally
    /// - Empty term returns every customer
    /// - Ordered by last name, then first name
    pub async fn list_all(&self, search_term: &str) -> DbResult<Vec<Customer>> {
        debug!(search_term = %search_term, "Listing customers");

        let pattern = format!("%{}%", escape_like(&search_term.to_lowercase()));

        let customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, first_name, last_name, phone, notes
            FROM customers
            WHERE search_name LIKE ?1 ESCAPE '\'
            ORDER BY last_name, first_name
            "#,
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        debug!(count = customers.len(), "Customer listing returned");
        Ok(customers)
    }

    /// Customers with the most reservations, best first.
    ///
    /// ## Behavior
    /// - Inner join: customers without reservations never appear
    /// - Equal counts are ordered by last name, then first name
    /// - At most `limit` customers
    ///   (see [`DEFAULT_TOP_CUSTOMERS_LIMIT`](lunchly_core::DEFAULT_TOP_CUSTOMERS_LIMIT))
    pub async fn top_customers(&self, limit: u32) -> DbResult<Vec<Customer>> {
        debug!(limit = %limit, "Ranking customers by reservation count");

        let customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT
                c.id,
                c.first_name,
                c.last_name,
                c.phone,
                c.notes
            FROM customers c
            INNER JOIN reservations r ON r.customer_id = c.id
            GROUP BY c.id
            ORDER BY COUNT(r.id) DESC, c.last_name, c.first_name
            LIMIT ?1
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        debug!(count = customers.len(), "Top customers returned");
        Ok(customers)
    }

    /// Gets a customer by id.
    ///
    /// ## Returns
    /// * `Ok(Customer)` - Customer found
    /// * `Err(DbError::NotFound)` - no such customer (status 404)
    pub async fn get_by_id(&self, id: i64) -> DbResult<Customer> {
        debug!(id = %id, "Loading customer");

        sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, first_name, last_name, phone, notes
            FROM customers
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("customer", id))
    }

    /// Saves a customer.
    ///
    /// ## Behavior
    /// - No id yet: INSERT, then the generated id is stored on `customer`
    /// - Has id: UPDATE every field (last writer wins)
    pub async fn save(&self, customer: &mut Customer) -> DbResult<()> {
        match customer.id() {
            None => {
                debug!(name = %customer.full_name(), "Inserting customer");

                let id: i64 = sqlx::query_scalar(
                    r#"
                    INSERT INTO customers (first_name, last_name, phone, notes, search_name)
                    VALUES (?1, ?2, ?3, ?4, ?5)
                    RETURNING id
                    "#,
                )
                .bind(&customer.first_name)
                .bind(&customer.last_name)
                .bind(&customer.phone)
                .bind(customer.notes())
                .bind(search_name(customer))
                .fetch_one(&self.pool)
                .await?;

                customer.assign_id(id)?;
            }

            Some(id) => {
                debug!(id = %id, "Updating customer");

                let result = sqlx::query(
                    r#"
                    UPDATE customers SET
                        first_name = ?2,
                        last_name = ?3,
                        phone = ?4,
                        notes = ?5,
                        search_name = ?6
                    WHERE id = ?1
                    "#,
                )
                .bind(id)
                .bind(&customer.first_name)
                .bind(&customer.last_name)
                .bind(&customer.phone)
                .bind(customer.notes())
                .bind(search_name(customer))
                .execute(&self.pool)
                .await?;

                if result.rows_affected() == 0 {
                    warn!(id = %id, "Customer update matched no rows");
                }
            }
        }

        Ok(())
    }

    /// Counts all customers (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// The value `list_all` matches against; must fold like the search term.
fn search_name(customer: &Customer) -> String {
    customer.full_name().to_lowercase()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use chrono::{NaiveDate, NaiveDateTime};
    use lunchly_core::Reservation;

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    async fn add_customer(db: &Database, first: &str, last: &str) -> Customer {
        let mut customer = Customer::new(first, last, "555-0000");
        db.customers().save(&mut customer).await.unwrap();
        customer
    }

    async fn add_reservations(db: &Database, customer: &Customer, n: usize) {
        for _ in 0..n {
            let mut reservation =
                Reservation::new(customer.id().unwrap(), lunch_time(), 2).unwrap();
            db.reservations().save(&mut reservation).await.unwrap();
        }
    }

    fn lunch_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 1, 5)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap()
    }

    fn names(customers: &[Customer]) -> Vec<String> {
        customers.iter().map(Customer::full_name).collect()
    }

    #[tokio::test]
    async fn test_list_all_orders_by_last_then_first_name() {
        let db = test_db().await;
        add_customer(&db, "Will", "Smithers").await;
        add_customer(&db, "Tom", "Jones").await;
        add_customer(&db, "Anna", "Smith").await;
        add_customer(&db, "Bob", "Smith").await;

        let all = db.customers().list_all("").await.unwrap();

        assert_eq!(
            names(&all),
            vec!["Tom Jones", "Anna Smith", "Bob Smith", "Will Smithers"]
        );
    }

    #[tokio::test]
    async fn test_list_all_search_is_case_insensitive_substring() {
        let db = test_db().await;
        add_customer(&db, "Anna", "Smith").await;
        add_customer(&db, "Will", "Smithers").await;
        add_customer(&db, "Tom", "Jones").await;

        let found = db.customers().list_all("SMITH").await.unwrap();
        assert_eq!(names(&found), vec!["Anna Smith", "Will Smithers"]);

        // Spans the space between first and last name
        let found = db.customers().list_all("a sm").await.unwrap();
        assert_eq!(names(&found), vec!["Anna Smith"]);

        let found = db.customers().list_all("nobody").await.unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_list_all_matches_non_ascii_names_in_any_case() {
        let db = test_db().await;
        let mut customer = Customer::new("Élodie", "Öztürk", "");
        db.customers().save(&mut customer).await.unwrap();
        add_customer(&db, "Elodie", "Ozturk").await;

        for term in ["Élodie", "élodie", "ÉLODIE", "ÖZTÜRK", "öztürk", "die öz"] {
            let found = db.customers().list_all(term).await.unwrap();
            assert_eq!(names(&found), vec!["Élodie Öztürk"], "term {term:?}");
        }
    }

    #[tokio::test]
    async fn test_list_all_follows_renamed_customer() {
        let db = test_db().await;
        let mut customer = add_customer(&db, "Anna", "Smith").await;

        customer.last_name = "Ørsted".to_string();
        db.customers().save(&mut customer).await.unwrap();

        assert!(db.customers().list_all("smith").await.unwrap().is_empty());
        let found = db.customers().list_all("ØRSTED").await.unwrap();
        assert_eq!(names(&found), vec!["Anna Ørsted"]);
    }

    #[tokio::test]
    async fn test_list_all_treats_wildcards_literally() {
        let db = test_db().await;
        add_customer(&db, "Anna", "Smith").await;

        assert!(db.customers().list_all("%").await.unwrap().is_empty());
        assert!(db.customers().list_all("_nna").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_top_customers() {
        let db = test_db().await;
        let light = add_customer(&db, "Light", "Eater").await;
        let heavy = add_customer(&db, "Heavy", "Eater").await;
        let medium = add_customer(&db, "Medium", "Eater").await;
        let regular = add_customer(&db, "Regular", "Eater").await;
        add_customer(&db, "Never", "Came").await;

        add_reservations(&db, &light, 1).await;
        add_reservations(&db, &heavy, 4).await;
        add_reservations(&db, &medium, 2).await;
        add_reservations(&db, &regular, 3).await;

        let top = db.customers().top_customers(3).await.unwrap();
        assert_eq!(
            names(&top),
            vec!["Heavy Eater", "Regular Eater", "Medium Eater"]
        );

        // Customers without reservations are never ranked
        let all = db.customers().top_customers(10).await.unwrap();
        assert_eq!(all.len(), 4);
        assert!(all.iter().all(|c| c.first_name != "Never"));
    }

    #[tokio::test]
    async fn test_top_customers_breaks_ties_by_last_then_first_name() {
        let db = test_db().await;
        let bob = add_customer(&db, "Bob", "Baker").await;
        let zed = add_customer(&db, "Zed", "Adams").await;
        let amy = add_customer(&db, "Amy", "Baker").await;
        let top = add_customer(&db, "Top", "Diner").await;

        add_reservations(&db, &bob, 2).await;
        add_reservations(&db, &zed, 2).await;
        add_reservations(&db, &amy, 2).await;
        add_reservations(&db, &top, 3).await;

        let ranked = db.customers().top_customers(10).await.unwrap();
        assert_eq!(
            names(&ranked),
            vec!["Top Diner", "Zed Adams", "Amy Baker", "Bob Baker"]
        );

        // Limit cuts inside the tied group
        let ranked = db.customers().top_customers(3).await.unwrap();
        assert_eq!(names(&ranked), vec!["Top Diner", "Zed Adams", "Amy Baker"]);
    }

    #[tokio::test]
    async fn test_top_customers_empty_without_reservations() {
        let db = test_db().await;
        add_customer(&db, "Anna", "Smith").await;

        assert!(db.customers().top_customers(10).await.unwrap().is_empty());
        assert!(db.customers().top_customers(0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let db = test_db().await;

        let err = db.customers().get_by_id(999).await.unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.to_string(), "No such customer: 999");
    }

    #[tokio::test]
    async fn test_save_inserts_then_updates() {
        let db = test_db().await;
        let repo = db.customers();

        let mut customer = Customer::new("Julia", "Child", "555-0101").with_notes("VIP");
        repo.save(&mut customer).await.unwrap();

        let id = customer.id().expect("id assigned on insert");
        assert_eq!(repo.get_by_id(id).await.unwrap(), customer);

        customer.phone = "555-0202".to_string();
        customer.clear_notes();
        repo.save(&mut customer).await.unwrap();

        assert_eq!(customer.id(), Some(id));
        let reloaded = repo.get_by_id(id).await.unwrap();
        assert_eq!(reloaded.phone, "555-0202");
        assert_eq!(reloaded.notes(), "");
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_save_assigns_distinct_ids() {
        let db = test_db().await;

        let first = add_customer(&db, "Anna", "Smith").await;
        let second = add_customer(&db, "Bob", "Smith").await;

        assert_ne!(first.id(), second.id());
        assert_eq!(db.customers().count().await.unwrap(), 2);
    }
}
