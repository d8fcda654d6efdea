//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Sale mutations and their stock adjustments commit in one transaction.
//! - Repository APIs return semantic errors (`SaleNotFound`,
//!   `InsufficientStock`, ...) in addition to DB transport errors.

use crate::db::DbError;
use crate::model::sale::SaleId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod catalog_repo;
pub mod report_repo;
pub mod sale_repo;

pub type LedgerResult<T> = Result<T, LedgerError>;

/// Operation-level error for ledger persistence and validation.
///
/// Every variant leaves the store unchanged: validation failures are raised
/// before any mutation, and storage failures roll the whole transaction
/// back.
#[derive(Debug)]
pub enum LedgerError {
    /// Member code does not resolve to a seeded member.
    MemberNotFound(String),
    /// Book code does not resolve to a seeded book.
    BookNotFound(String),
    /// Sale id does not resolve to an existing sale row.
    SaleNotFound(SaleId),
    /// Quantity is not a positive integer.
    InvalidQuantity(i64),
    /// Discount is negative.
    InvalidDiscount(i64),
    /// Requested quantity exceeds the available stock headroom.
    InsufficientStock { requested: i64, available: i64 },
    /// Underlying storage failed; the atomic unit was rolled back in full.
    Db(DbError),
}

impl Display for LedgerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MemberNotFound(code) => write!(f, "member not found: {code}"),
            Self::BookNotFound(code) => write!(f, "book not found: {code}"),
            Self::SaleNotFound(id) => write!(f, "sale not found: {id}"),
            Self::InvalidQuantity(value) => {
                write!(f, "quantity must be a positive integer, got {value}")
            }
            Self::InvalidDiscount(value) => {
                write!(f, "discount cannot be negative, got {value}")
            }
            Self::InsufficientStock {
                requested,
                available,
            } => write!(
                f,
                "insufficient stock: requested {requested}, available {available}"
            ),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for LedgerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for LedgerError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for LedgerError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
