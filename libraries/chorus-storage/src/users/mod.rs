//! User lookup queries
//!
//! Accounts are created and authenticated elsewhere; the playlist core only
//! resolves owner references.

use chorus_core::{error::Result, types::*, ChorusError};
use sqlx::{Row, SqliteConnection};

/// Resolve a user by id
///
/// Fails with `NotFound` if the id does not exist: a playlist save must
/// never invent an owner.
pub async fn find_user(conn: &mut SqliteConnection, id: UserId) -> Result<User> {
    let row = sqlx::query("SELECT id, username, created_at FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

    row.map(|row| User {
        id: row.get("id"),
        username: row.get("username"),
        created_at: row.get("created_at"),
    })
    .ok_or_else(|| ChorusError::not_found("User", id))
}
