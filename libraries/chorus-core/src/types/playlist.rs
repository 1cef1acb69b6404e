//! Playlist types

use super::track::{TrackDescriptor, TrackRowId, TrackSource};
use super::user::UserId;
use serde::{Deserialize, Serialize};

/// Playlist identifier
pub type PlaylistId = i64;

/// Maximum length of a playlist name, in characters
pub const MAX_NAME_LEN: usize = 255;

/// Persisted playlist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: PlaylistId,
    pub name: String,
    pub owner_id: UserId,
    pub is_public: bool,
    pub created_at: String,
    pub updated_at: String,

    /// Tracks in position order (optional, populated when requested)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracks: Option<Vec<PlaylistTrack>>,
}

/// One persisted playlist entry with its backing source expanded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistTrack {
    pub id: TrackRowId,

    /// 0-based position within the playlist
    pub position: i64,

    #[serde(flatten)]
    pub source: TrackSource,
}

/// Which playlist row a save targets
///
/// The wire protocol marks "no identity yet" with a `-1` sentinel; it is
/// resolved into this type once at the API boundary so nothing deeper ever
/// compares against the sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaylistTarget {
    /// Create a new playlist row
    New,
    /// Update this existing playlist row in place
    Existing(PlaylistId),
}

impl PlaylistTarget {
    /// Resolve a wire id into a target (`-1` and any negative id mean new)
    pub fn from_wire_id(id: i64) -> Self {
        if id < 0 {
            PlaylistTarget::New
        } else {
            PlaylistTarget::Existing(id)
        }
    }
}

/// Client-submitted full description of a playlist
///
/// This is the single input of the save path: target row, header fields,
/// the complete desired track list in order, and the submitting user's
/// playback position. Consumed by reference, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistDescriptor {
    pub target: PlaylistTarget,
    pub name: String,
    pub owner_id: UserId,
    pub public: bool,
    pub active_track_idx: i64,
    pub playback_position: f64,
    pub tracks: Vec<TrackDescriptor>,
}
