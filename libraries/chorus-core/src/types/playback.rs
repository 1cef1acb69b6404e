/// Per-user playback position types
use super::playlist::PlaylistId;
use super::user::UserId;
use serde::{Deserialize, Serialize};

/// Where one user left off in one playlist
///
/// At most one row exists per (playlist, user) pair; saves upsert it.
/// `active_track_idx` is not validated against the current track count, so
/// a stale client may leave an out-of-range index until its next save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackPosition {
    pub playlist_id: PlaylistId,
    pub user_id: UserId,

    /// 0-based index of the active track
    pub active_track_idx: i64,

    /// Offset into the active track, in seconds
    pub playback_position: f64,

    pub updated_at: String,
}
