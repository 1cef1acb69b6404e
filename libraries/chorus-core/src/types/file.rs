/// Locally indexed media file types
use serde::{Deserialize, Serialize};

/// Media file identifier
pub type FileId = i64;

/// A locally indexed media file
///
/// File rows are written by the media indexing subsystem and are strictly
/// read-only from the playlist core: tracks reference existing rows by id
/// and a dangling id aborts the whole save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaFile {
    pub id: FileId,
    pub filename: String,

    /// Tag metadata, when the indexer extracted any
    pub title: Option<String>,
    pub artist: Option<String>,
    pub duration_seconds: Option<f64>,
}
