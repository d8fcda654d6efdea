//! Sale domain records and input shapes.
//!
//! # Responsibility
//! - Define the persisted sale record, the creation draft and the report
//!   read model.
//! - Provide the sale-date shape check used by interactive callers.
//!
//! # Invariants
//! - `id` is assigned by the store, monotonically increasing, never reused.
//! - `total = unit_price * quantity - discount` at the time the row was
//!   last written; a discount larger than the gross amount makes it
//!   negative, which is allowed.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Stable store-assigned identifier for a sale row.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type SaleId = i64;

static SALE_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid sale date regex"));

/// A recorded purchase of a quantity of one book by one member.
///
/// Sale rows are created, mutated and deleted only through the sale
/// transaction engine; every mutation is paired with the opposite stock
/// adjustment on the referenced book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    pub id: SaleId,
    /// Sale date as entered by the caller, shape-checked outside the engine.
    pub sold_on: String,
    pub member_code: String,
    pub book_code: String,
    pub quantity: i64,
    pub discount: i64,
    pub total: i64,
}

/// Input draft for recording a new sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSale {
    pub sold_on: String,
    pub member_code: String,
    pub book_code: String,
    pub quantity: i64,
    pub discount: i64,
}

/// Identifier and computed total of a freshly recorded sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedSale {
    pub id: SaleId,
    pub total: i64,
}

/// Read model joining a sale with its member and book for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleView {
    pub sale_id: SaleId,
    pub sold_on: String,
    pub member_name: String,
    pub book_title: String,
    pub unit_price: i64,
    pub quantity: i64,
    pub discount: i64,
    pub total: i64,
}

/// Returns whether `value` has the `YYYY-MM-DD` sale-date shape.
///
/// The engine stores dates verbatim; interactive callers are expected to
/// run this check before submitting a draft.
pub fn is_valid_sale_date(value: &str) -> bool {
    SALE_DATE_RE.is_match(value)
}
