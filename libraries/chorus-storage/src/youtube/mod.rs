//! External entry lookup and lazy creation

use chorus_core::{error::Result, types::*, ChorusError};
use sqlx::{Row, SqliteConnection};

/// Look up an external entry by video id, creating it if absent
///
/// Returns the entry plus whether it was created by this call. When a row
/// already exists it is returned unchanged; the supplied attributes never
/// overwrite it (first-write-wins).
pub async fn get_or_create(
    conn: &mut SqliteConnection,
    descriptor: &YoutubeDescriptor,
) -> Result<(YoutubeEntry, bool)> {
    if let Some(existing) = find_by_video_id(conn, &descriptor.youtube_id).await? {
        return Ok((existing, false));
    }

    sqlx::query(
        r#"
        INSERT INTO youtube_entries (youtube_id, title, views, duration)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&descriptor.youtube_id)
    .bind(&descriptor.title)
    .bind(descriptor.views)
    .bind(descriptor.duration)
    .execute(&mut *conn)
    .await?;

    let entry = find_by_video_id(conn, &descriptor.youtube_id)
        .await?
        .ok_or_else(|| ChorusError::storage("Failed to retrieve created youtube entry"))?;

    Ok((entry, true))
}

/// Look up an external entry by its video id
pub async fn find_by_video_id(
    conn: &mut SqliteConnection,
    youtube_id: &str,
) -> Result<Option<YoutubeEntry>> {
    let row = sqlx::query(
        "SELECT id, youtube_id, title, views, duration FROM youtube_entries WHERE youtube_id = ?",
    )
    .bind(youtube_id)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(row.map(|row| YoutubeEntry {
        id: row.get("id"),
        youtube_id: row.get("youtube_id"),
        title: row.get("title"),
        views: row.get("views"),
        duration: row.get("duration"),
    }))
}
