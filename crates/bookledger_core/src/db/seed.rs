//! Idempotent demonstration-row bootstrap.
//!
//! # Responsibility
//! - Seed the fixed member/book/sale demonstration rows on first use.
//!
//! # Invariants
//! - Seeding is keyed by primary identifier via `INSERT OR IGNORE`;
//!   re-running never duplicates or overwrites existing rows.
//! - All seed inserts commit in one transaction.
//! - Seeded sale rows carry explicit ids so later sales continue the
//!   monotone counter above them.

use crate::db::DbResult;
use log::info;
use rusqlite::{params, Connection};

const SEED_MEMBERS: &[(&str, &str, &str, Option<&str>)] = &[
    ("M001", "Alice", "0912-345678", Some("alice@example.com")),
    ("M002", "Bob", "0923-456789", Some("bob@example.com")),
    ("M003", "Cathy", "0934-567890", Some("cathy@example.com")),
];

// (code, title, unit_price, stock) — stock is the on-hand level after the
// seeded sales below have already been deducted.
const SEED_BOOKS: &[(&str, &str, i64, i64)] = &[
    ("B001", "Python Programming", 600, 50),
    ("B002", "Data Science Basics", 800, 30),
    ("B003", "Machine Learning Guide", 1200, 20),
];

// (id, sold_on, member_code, book_code, quantity, discount, total)
const SEED_SALES: &[(i64, &str, &str, &str, i64, i64, i64)] = &[
    (1, "2024-01-15", "M001", "B001", 2, 100, 1100),
    (2, "2024-01-16", "M002", "B002", 1, 50, 750),
    (3, "2024-01-17", "M001", "B003", 3, 200, 3400),
    (4, "2024-01-18", "M003", "B001", 1, 0, 600),
];

/// Inserts the demonstration rows that are missing from the store.
///
/// # Side effects
/// - Emits a `db_seed` logging event with the number of inserted rows.
pub fn seed_demo_rows(conn: &mut Connection) -> DbResult<()> {
    let mut inserted = 0usize;

    let tx = conn.transaction()?;
    for (code, name, phone, email) in SEED_MEMBERS {
        inserted += tx.execute(
            "INSERT OR IGNORE INTO members (member_code, name, phone, email)
             VALUES (?1, ?2, ?3, ?4);",
            params![code, name, phone, email],
        )?;
    }
    for (code, title, unit_price, stock) in SEED_BOOKS {
        inserted += tx.execute(
            "INSERT OR IGNORE INTO books (book_code, title, unit_price, stock)
             VALUES (?1, ?2, ?3, ?4);",
            params![code, title, unit_price, stock],
        )?;
    }
    for (id, sold_on, member_code, book_code, quantity, discount, total) in SEED_SALES {
        inserted += tx.execute(
            "INSERT OR IGNORE INTO sales
                (id, sold_on, member_code, book_code, quantity, discount, total)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![id, sold_on, member_code, book_code, quantity, discount, total],
        )?;
    }
    tx.commit()?;

    info!("event=db_seed module=db status=ok inserted_rows={inserted}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{SEED_BOOKS, SEED_SALES};

    #[test]
    fn seeded_sale_totals_match_book_prices() {
        for (id, _, _, book_code, quantity, discount, total) in SEED_SALES {
            let (_, _, unit_price, _) = SEED_BOOKS
                .iter()
                .find(|(code, ..)| code == book_code)
                .expect("seed sale references a seed book");
            assert_eq!(
                *total,
                unit_price * quantity - discount,
                "seed sale {id} total is inconsistent"
            );
        }
    }

    #[test]
    fn seeded_sale_ids_are_dense_from_one() {
        let ids: Vec<i64> = SEED_SALES.iter().map(|sale| sale.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }
}
