//! # Seed Data Generator
//!
//! Populates the database with sample customers and reservations for
//! development.
//!
//! ## Usage
//! ```bash
//! # 50 customers (default) into $LUNCHLY_DATABASE_PATH or ./lunchly.db
//! cargo run -p lunchly-db --bin seed
//!
//! # Custom amount and path
//! cargo run -p lunchly-db --bin seed -- --customers 200 --db ./data/lunchly.db
//! ```
//!
//! ## Generated Data
//! - Customers combine a first and last name list; phone numbers are fake
//! - Each customer gets 0-4 reservations over the next few weeks, so the
//!   top-customers ranking has something to rank and some customers are
//!   left out of it

use chrono::{Duration, NaiveDateTime, Utc};
use lunchly_core::{Customer, Reservation};
use lunchly_db::{Database, DbConfig};
use std::env;
use tracing_subscriber::EnvFilter;

const FIRST_NAMES: &[&str] = &[
    "Anna", "Ben", "Carla", "David", "Elena", "Frank", "Grace", "Hugo", "Iris", "Jamal", "Keiko",
    "Liam", "Maya", "Noah", "Olga", "Pedro",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Jones", "Garcia", "Nguyen", "Okafor", "Rossi", "Schmidt", "Tanaka", "Walsh",
    "Young",
];

const NOTES: &[&str] = &["", "", "window seat", "birthday", "allergic to shellfish", ""];

/// Seating times offered, as (hour, minute).
const SEATINGS: &[(i64, i64)] = &[(11, 30), (12, 30), (13, 30), (18, 0), (19, 30), (21, 0)];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().collect();

    let mut count: usize = 50;
    let mut config = DbConfig::from_env()?;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--customers" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(50);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    config.database_path = args[i + 1].clone().into();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Lunchly Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --customers <N>  Number of customers to generate (default: 50)");
                println!("  -d, --db <PATH>      Database file path (default: $LUNCHLY_DATABASE_PATH or ./lunchly.db)");
                println!("  -h, --help           Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Lunchly Seed Data Generator");
    println!("==============================");
    println!("Database:  {}", config.database_path.display());
    println!("Customers: {}", count);
    println!();

    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.customers().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} customers", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Generating customers and reservations...");

    let base = Utc::now().date_naive().and_hms_opt(0, 0, 0).unwrap_or_default();
    let mut reservations = 0;

    for seed in 0..count {
        let mut customer = generate_customer(seed);
        db.customers().save(&mut customer).await?;

        let Some(customer_id) = customer.id() else {
            continue;
        };

        for visit in 0..(seed * 7 % 5) {
            let mut reservation = generate_reservation(customer_id, base, seed, visit)?;
            db.reservations().save(&mut reservation).await?;
            reservations += 1;
        }
    }

    println!("✓ Generated {} customers, {} reservations", count, reservations);

    println!();
    println!("Top customers:");
    for customer in db.customers().top_customers(3).await? {
        let visits = db.customer_reservations(&customer).await?.len();
        println!("  {} ({} reservations)", customer.full_name(), visits);
    }

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

fn generate_customer(seed: usize) -> Customer {
    let first = FIRST_NAMES[seed % FIRST_NAMES.len()];
    let last = LAST_NAMES[(seed / FIRST_NAMES.len() + seed) % LAST_NAMES.len()];
    let phone = format!("555-{:04}", seed % 10_000);

    Customer::new(first, last, phone).with_notes(NOTES[seed % NOTES.len()])
}

fn generate_reservation(
    customer_id: i64,
    base: NaiveDateTime,
    seed: usize,
    visit: usize,
) -> Result<Reservation, lunchly_core::ValidationError> {
    let (hour, minute) = SEATINGS[(seed + visit) % SEATINGS.len()];
    let day = ((seed * 3 + visit * 5) % 28) as i64;
    let start_at = base + Duration::days(day) + Duration::hours(hour) + Duration::minutes(minute);
    let num_guests = 1 + ((seed + visit) % 8) as i32;

    let reservation = Reservation::new(customer_id, start_at, num_guests)?;
    Ok(reservation.with_notes(NOTES[(seed + visit) % NOTES.len()]))
}
