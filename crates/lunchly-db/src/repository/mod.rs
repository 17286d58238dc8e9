//! # Repository Module
//!
//! Database repository implementations for Lunchly.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Web handler                                                           │
//! │       │                                                                 │
//! │       │  db.customers().list_all("smith")                              │
//! │       ▼                                                                 │
//! │  CustomerRepository                ReservationRepository               │
//! │  ├── list_all(search)              ├── list_for_customer(id)           │
//! │  ├── top_customers(limit)          └── save(&mut reservation)          │
//! │  ├── get_by_id(id)                                                     │
//! │  └── save(&mut customer)                                               │
//! │       │                                                                 │
//! │       │  one SQL query per call                                         │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`CustomerRepository`](customer::CustomerRepository) - search, ranking, load, save
//! - [`ReservationRepository`](reservation::ReservationRepository) - per-customer load, save

pub mod customer;
pub mod reservation;

/// Escapes `%`, `_` and `\` so user input matches literally inside a
/// `LIKE ... ESCAPE '\'` pattern.
pub(crate) fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
