//! Track types
//!
//! A track is one entry of a playlist's ordered list. On the write side a
//! client submits [`TrackDescriptor`] values; on the read side persisted
//! rows come back as [`crate::types::PlaylistTrack`] with the backing
//! source expanded into a [`TrackSource`].

use super::file::{FileId, MediaFile};
use super::youtube::{YoutubeDescriptor, YoutubeEntry};
use serde::{Deserialize, Serialize};

/// Track row identifier
///
/// Track rows are recreated on every reconciliation, so these ids are not
/// stable across edits and must not be cached by consumers.
pub type TrackRowId = i64;

/// Backing source discriminator for a track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    /// Locally indexed media file
    File,
    /// External video-hosting entry
    Youtube,
}

impl TrackKind {
    /// Convert kind to string for database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackKind::File => "file",
            TrackKind::Youtube => "youtube",
        }
    }

    /// Parse kind from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "file" => Some(TrackKind::File),
            "youtube" => Some(TrackKind::Youtube),
            _ => None,
        }
    }
}

/// Resolved backing source of a persisted track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TrackSource {
    /// Locally indexed media file
    File(MediaFile),
    /// Shared external entry
    Youtube(YoutubeEntry),
}

impl TrackSource {
    /// Discriminator for this source
    pub fn kind(&self) -> TrackKind {
        match self {
            TrackSource::File(_) => TrackKind::File,
            TrackSource::Youtube(_) => TrackKind::Youtube,
        }
    }
}

/// Client-submitted description of one playlist entry
///
/// A well-formed descriptor carries exactly one of `file` / `youtube`.
/// Both or neither is a malformed descriptor and rejected by the resolver.
/// Any order value the client embeds alongside is ignored on write; the
/// position in the submitted list is authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackDescriptor {
    /// Reference to an existing indexed file, by id
    pub file: Option<FileId>,

    /// External source reference plus display attributes
    pub youtube: Option<YoutubeDescriptor>,
}

impl TrackDescriptor {
    /// Descriptor for a file-backed track
    pub fn file(id: FileId) -> Self {
        Self {
            file: Some(id),
            youtube: None,
        }
    }

    /// Descriptor for an external-backed track
    pub fn youtube(descriptor: YoutubeDescriptor) -> Self {
        Self {
            file: None,
            youtube: Some(descriptor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_string_conversion() {
        assert_eq!(TrackKind::File.as_str(), "file");
        assert_eq!(TrackKind::Youtube.as_str(), "youtube");

        assert_eq!(TrackKind::from_str("file"), Some(TrackKind::File));
        assert_eq!(TrackKind::from_str("youtube"), Some(TrackKind::Youtube));
        assert_eq!(TrackKind::from_str("vimeo"), None);
    }

    #[test]
    fn file_descriptor_carries_only_file() {
        let descriptor = TrackDescriptor::file(3);
        assert_eq!(descriptor.file, Some(3));
        assert!(descriptor.youtube.is_none());
    }

    #[test]
    fn source_kind_matches_variant() {
        let source = TrackSource::Youtube(YoutubeEntry {
            id: 1,
            youtube_id: "abc".to_string(),
            title: "Test".to_string(),
            views: 0,
            duration: 0.0,
        });
        assert_eq!(source.kind(), TrackKind::Youtube);
    }
}
