//! Member domain record.

use serde::{Deserialize, Serialize};

/// A registered customer identified by a unique code.
///
/// Members are created at bootstrap seeding and never mutated or deleted by
/// the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Stable member code, e.g. `M001`.
    pub code: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
}
