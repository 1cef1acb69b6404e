//! Track source resolution
//!
//! The resolver turns a client-submitted [`TrackDescriptor`] into a
//! concrete backing row on the caller's transaction: file references must
//! already exist, external references are created lazily and shared.

use crate::{files, youtube};
use chorus_core::{error::Result, types::*, ChorusError};
use sqlx::SqliteConnection;

/// Resolve a descriptor to its backing source
///
/// A well-formed descriptor carries exactly one source reference:
/// - file: looked up by id, `NotFound` if absent (stale client view)
/// - youtube: looked up by video id, created from the descriptor's
///   attributes if absent, reused as-is otherwise
///
/// Both or neither present fails with `MalformedTrack`.
pub async fn resolve_source(
    conn: &mut SqliteConnection,
    descriptor: &TrackDescriptor,
) -> Result<TrackSource> {
    match (&descriptor.file, &descriptor.youtube) {
        (Some(file_id), None) => {
            let file = files::find_file(conn, *file_id).await?;
            Ok(TrackSource::File(file))
        }
        (None, Some(youtube_descriptor)) => {
            let (entry, _created) = youtube::get_or_create(conn, youtube_descriptor).await?;
            Ok(TrackSource::Youtube(entry))
        }
        (Some(_), Some(_)) => Err(ChorusError::malformed_track(
            "track references both a file and a youtube entry",
        )),
        (None, None) => Err(ChorusError::malformed_track(
            "track references neither a file nor a youtube entry",
        )),
    }
}

/// Insert one track row at the given position
pub(crate) async fn insert_track(
    conn: &mut SqliteConnection,
    playlist_id: PlaylistId,
    position: i64,
    source: &TrackSource,
) -> Result<()> {
    let (file_id, youtube_id) = match source {
        TrackSource::File(file) => (Some(file.id), None),
        TrackSource::Youtube(entry) => (None, Some(entry.id)),
    };

    sqlx::query(
        r#"
        INSERT INTO playlist_tracks (playlist_id, position, kind, file_id, youtube_id)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(playlist_id)
    .bind(position)
    .bind(source.kind().as_str())
    .bind(file_id)
    .bind(youtube_id)
    .execute(&mut *conn)
    .await?;

    Ok(())
}
