//! Per-user playback position tracking

use chorus_core::{error::Result, types::*};
use sqlx::{Row, SqliteConnection, SqlitePool};

/// Create or update the position row for a (playlist, user) pair
///
/// `active_track_idx` is not range-checked against the playlist's current
/// track count; an out-of-range index from a stale client is tolerated and
/// simply reflected back on the next read. Concurrent writers for the same
/// pair resolve last-write-wins at commit order.
pub async fn set_position(
    conn: &mut SqliteConnection,
    playlist_id: PlaylistId,
    user_id: UserId,
    active_track_idx: i64,
    playback_position: f64,
) -> Result<()> {
    let now = chrono::Utc::now().to_rfc3339();

    sqlx::query(
        r#"
        INSERT INTO playback_positions
            (playlist_id, user_id, active_track_idx, playback_position, updated_at)
        VALUES (?, ?, ?, ?, ?)
        ON CONFLICT(playlist_id, user_id)
        DO UPDATE SET
            active_track_idx = excluded.active_track_idx,
            playback_position = excluded.playback_position,
            updated_at = excluded.updated_at
        "#,
    )
    .bind(playlist_id)
    .bind(user_id)
    .bind(active_track_idx)
    .bind(playback_position)
    .bind(now)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

/// Get the stored position for a (playlist, user) pair, if any
pub async fn get(
    pool: &SqlitePool,
    playlist_id: PlaylistId,
    user_id: UserId,
) -> Result<Option<PlaybackPosition>> {
    let row = sqlx::query(
        r#"
        SELECT playlist_id, user_id, active_track_idx, playback_position, updated_at
        FROM playback_positions
        WHERE playlist_id = ? AND user_id = ?
        "#,
    )
    .bind(playlist_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|row| PlaybackPosition {
        playlist_id: row.get("playlist_id"),
        user_id: row.get("user_id"),
        active_track_idx: row.get("active_track_idx"),
        playback_position: row.get("playback_position"),
        updated_at: row.get("updated_at"),
    }))
}
