//! Playlist persistence: lifecycle and track reconciliation
//!
//! [`save`] is the single write entry point. The whole call runs on one
//! transaction: create-or-update of the playlist row, wholesale replacement
//! of its track list, and the submitting user's playback position either
//! all commit together or none of them do.

use crate::{playback_positions, tracks, users};
use chorus_core::{error::Result, types::*, ChorusError};
use sqlx::{Row, SqliteConnection, SqlitePool};
use tracing::{debug, info};

/// Persist a client-submitted playlist description
///
/// Resolves the owner first (`NotFound` if the user does not exist), then
/// creates or updates the playlist row, replaces its tracks, and upserts
/// the owner's playback position, all inside one transaction. Any failure
/// rolls the whole call back; the prior persisted state stays intact.
///
/// On update the owner is never reassigned; only name and visibility
/// change. Returns the persisted playlist with its tracks in position
/// order.
pub async fn save(pool: &SqlitePool, descriptor: &PlaylistDescriptor) -> Result<Playlist> {
    if descriptor.name.chars().count() > MAX_NAME_LEN {
        return Err(ChorusError::invalid_input(format!(
            "playlist name exceeds {MAX_NAME_LEN} characters"
        )));
    }

    let mut tx = pool.begin().await?;

    let owner = users::find_user(&mut *tx, descriptor.owner_id).await?;

    let playlist_id = match descriptor.target {
        PlaylistTarget::New => {
            let result = sqlx::query(
                "INSERT INTO playlists (name, owner_id, is_public) VALUES (?, ?, ?)",
            )
            .bind(&descriptor.name)
            .bind(owner.id)
            .bind(descriptor.public)
            .execute(&mut *tx)
            .await?;

            result.last_insert_rowid()
        }
        PlaylistTarget::Existing(id) => {
            let result = sqlx::query(
                r#"
                UPDATE playlists
                SET name = ?, is_public = ?, updated_at = datetime('now')
                WHERE id = ?
                "#,
            )
            .bind(&descriptor.name)
            .bind(descriptor.public)
            .bind(id)
            .execute(&mut *tx)
            .await?;

            if result.rows_affected() == 0 {
                return Err(ChorusError::not_found("Playlist", id));
            }
            id
        }
    };

    replace_tracks(&mut *tx, playlist_id, &descriptor.tracks).await?;

    playback_positions::set_position(
        &mut *tx,
        playlist_id,
        owner.id,
        descriptor.active_track_idx,
        descriptor.playback_position,
    )
    .await?;

    tx.commit().await?;

    info!(
        playlist_id,
        owner_id = owner.id,
        tracks = descriptor.tracks.len(),
        "saved playlist"
    );

    get_with_tracks(pool, playlist_id)
        .await?
        .ok_or_else(|| ChorusError::storage("Failed to retrieve saved playlist"))
}

/// Replace every track of a playlist with the submitted list
///
/// Existing rows are deleted and recreated in input order; each row's
/// position is its index in the input list, regardless of any order value
/// embedded in the descriptors. Runs on the caller's transaction, so a
/// resolver failure on any descriptor aborts the whole replacement.
///
/// Track row ids are not stable across calls; consumers must not cache
/// them between edits.
pub async fn replace_tracks(
    conn: &mut SqliteConnection,
    playlist_id: PlaylistId,
    descriptors: &[TrackDescriptor],
) -> Result<()> {
    // Wipe and recreate rather than diff: the client always sends the
    // complete desired state and playlists are small.
    sqlx::query("DELETE FROM playlist_tracks WHERE playlist_id = ?")
        .bind(playlist_id)
        .execute(&mut *conn)
        .await?;

    for (position, descriptor) in descriptors.iter().enumerate() {
        let source = tracks::resolve_source(conn, descriptor).await?;
        tracks::insert_track(conn, playlist_id, position as i64, &source).await?;
    }

    debug!(playlist_id, tracks = descriptors.len(), "replaced tracks");

    Ok(())
}

/// Get a playlist with its tracks expanded, in position order
pub async fn get_with_tracks(pool: &SqlitePool, id: PlaylistId) -> Result<Option<Playlist>> {
    let Some(mut playlist) = get_by_id(pool, id).await? else {
        return Ok(None);
    };

    let track_rows = sqlx::query(
        r#"
        SELECT
            pt.id, pt.position, pt.kind,
            f.id as file_id, f.filename, f.title as file_title, f.artist,
            f.duration_seconds,
            y.id as youtube_entry_id, y.youtube_id, y.title as youtube_title,
            y.views, y.duration
        FROM playlist_tracks pt
        LEFT JOIN files f ON pt.file_id = f.id
        LEFT JOIN youtube_entries y ON pt.youtube_id = y.id
        WHERE pt.playlist_id = ?
        ORDER BY pt.position
        "#,
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    let mut tracks = Vec::with_capacity(track_rows.len());
    for row in track_rows {
        let kind: String = row.get("kind");
        let source = match TrackKind::from_str(&kind) {
            Some(TrackKind::File) => TrackSource::File(MediaFile {
                id: row.get("file_id"),
                filename: row.get("filename"),
                title: row.get("file_title"),
                artist: row.get("artist"),
                duration_seconds: row.get("duration_seconds"),
            }),
            Some(TrackKind::Youtube) => TrackSource::Youtube(YoutubeEntry {
                id: row.get("youtube_entry_id"),
                youtube_id: row.get("youtube_id"),
                title: row.get("youtube_title"),
                views: row.get("views"),
                duration: row.get("duration"),
            }),
            None => {
                return Err(ChorusError::storage(format!(
                    "unknown track kind in playlist {id}: {kind}"
                )))
            }
        };

        tracks.push(PlaylistTrack {
            id: row.get("id"),
            position: row.get("position"),
            source,
        });
    }

    playlist.tracks = Some(tracks);

    Ok(Some(playlist))
}

/// Get a playlist header by id (tracks not populated)
pub async fn get_by_id(pool: &SqlitePool, id: PlaylistId) -> Result<Option<Playlist>> {
    let row = sqlx::query(
        r#"
        SELECT id, name, owner_id, is_public, created_at, updated_at
        FROM playlists
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(map_playlist_row))
}

/// Get playlists readable by a user: owned or public
pub async fn get_user_playlists(pool: &SqlitePool, user_id: UserId) -> Result<Vec<Playlist>> {
    let rows = sqlx::query(
        r#"
        SELECT id, name, owner_id, is_public, created_at, updated_at
        FROM playlists
        WHERE owner_id = ? OR is_public = 1
        ORDER BY updated_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(map_playlist_row).collect())
}

/// Delete a playlist and everything it owns
///
/// Owner-only. Track rows and playback positions go with it via cascade.
pub async fn delete(pool: &SqlitePool, id: PlaylistId, user_id: UserId) -> Result<()> {
    let playlist = get_by_id(pool, id).await?;

    match playlist {
        Some(p) if p.owner_id == user_id => {
            sqlx::query("DELETE FROM playlists WHERE id = ?")
                .bind(id)
                .execute(pool)
                .await?;
            info!(playlist_id = id, "deleted playlist");
            Ok(())
        }
        Some(_) => Err(ChorusError::PermissionDenied),
        None => Err(ChorusError::not_found("Playlist", id)),
    }
}

fn map_playlist_row(row: sqlx::sqlite::SqliteRow) -> Playlist {
    Playlist {
        id: row.get("id"),
        name: row.get("name"),
        owner_id: row.get("owner_id"),
        is_public: row.get::<i64, _>("is_public") != 0,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
        tracks: None,
    }
}
