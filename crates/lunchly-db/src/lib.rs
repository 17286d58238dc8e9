//! # lunchly-db: Database Layer for Lunchly
//!
//! Persistence for customers and reservations, using SQLite through sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Lunchly Data Flow                                │
//! │                                                                         │
//! │  Web handler (list customers, add reservation, ...)                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     lunchly-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌─────────────────┐   ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories   │   │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │                 │   │  (embedded)  │  │   │
//! │  │   │               │    │ CustomerRepo    │   │              │  │   │
//! │  │   │ SqlitePool    │◄───│ ReservationRepo │   │ 001_initial  │  │   │
//! │  │   └───────────────┘    └─────────────────┘   └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  customers(id, first_name, last_name, phone, notes, search_name)       │
//! │  reservations(id, customer_id → customers.id, start_at, num_guests,    │
//! │               notes)                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Customer and reservation repositories
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lunchly_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::from_env()?).await?;
//!
//! let mut customer = db.customers().get_by_id(7).await?;
//! let reservations = db.customer_reservations(&customer).await?;
//!
//! customer.set_notes("prefers the patio");
//! db.customers().save(&mut customer).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::customer::CustomerRepository;
pub use repository::reservation::ReservationRepository;
