//! Book domain record.

use serde::{Deserialize, Serialize};

/// A catalog item identified by a unique code, with price and on-hand
/// stock count.
///
/// Books are created at bootstrap; `stock` is mutated exclusively by the
/// sale transaction engine, and must remain >= 0 at all times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Stable book code, e.g. `B001`.
    pub code: String,
    pub title: String,
    /// Non-negative price per unit, in whole currency units.
    pub unit_price: i64,
    pub stock: i64,
}
