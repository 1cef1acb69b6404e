/// User domain type
use serde::{Deserialize, Serialize};

/// User identifier
pub type UserId = i64;

/// User account
///
/// Accounts are managed by the authentication subsystem; this core only
/// resolves them by id when persisting playlist ownership and positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Login name
    pub username: String,

    /// Account creation timestamp (ISO string)
    pub created_at: String,
}
