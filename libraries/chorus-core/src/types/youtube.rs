/// External (YouTube) media source types
use serde::{Deserialize, Serialize};

/// Youtube entry row identifier
pub type YoutubeEntryId = i64;

/// A persisted external media entry
///
/// Entries are created lazily the first time any playlist references an
/// external video id and shared by every track that references the same id
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YoutubeEntry {
    pub id: YoutubeEntryId,

    /// External video identifier (unique)
    pub youtube_id: String,
    pub title: String,
    pub views: i64,
    pub duration: f64,
}

/// Display attributes for an external track as submitted by a client
///
/// Only consulted when no entry exists yet for `youtube_id`; an existing
/// entry is reused as-is (first-write-wins).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YoutubeDescriptor {
    pub youtube_id: String,
    pub title: String,
    #[serde(default)]
    pub views: i64,
    #[serde(default)]
    pub duration: f64,
}
