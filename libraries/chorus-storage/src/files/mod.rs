//! Indexed media file lookups
//!
//! File rows are owned by the media indexing subsystem; this slice only
//! reads them when resolving file-backed tracks.

use chorus_core::{error::Result, types::*, ChorusError};
use sqlx::{Row, SqliteConnection};

/// Look up an indexed file by id
///
/// A dangling file id indicates a stale client view and fails with
/// `NotFound`; it is never auto-healed.
pub async fn find_file(conn: &mut SqliteConnection, id: FileId) -> Result<MediaFile> {
    let row = sqlx::query(
        "SELECT id, filename, title, artist, duration_seconds FROM files WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    row.map(|row| MediaFile {
        id: row.get("id"),
        filename: row.get("filename"),
        title: row.get("title"),
        artist: row.get("artist"),
        duration_seconds: row.get("duration_seconds"),
    })
    .ok_or_else(|| ChorusError::not_found("File", id))
}
