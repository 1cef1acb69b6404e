//! Chorus Core
//!
//! Domain types and error handling for the Chorus playlist server.
//!
//! This crate defines:
//! - **Domain Types**: `Playlist`, `PlaylistTrack`, `MediaFile`, `YoutubeEntry`, `User`
//! - **Write Descriptors**: `PlaylistDescriptor`, `TrackDescriptor`, `PlaylistTarget`
//! - **Error Handling**: Unified `ChorusError` and `Result` types
//!
//! The descriptor types are the immutable value form of a client-submitted
//! playlist: the API layer decodes a request into a [`PlaylistDescriptor`]
//! once (resolving the wire's `-1 = new` sentinel into [`PlaylistTarget`])
//! and everything below consumes it by reference.
//!
//! # Example
//!
//! ```rust
//! use chorus_core::types::{PlaylistDescriptor, PlaylistTarget, TrackDescriptor};
//!
//! let descriptor = PlaylistDescriptor {
//!     target: PlaylistTarget::from_wire_id(-1),
//!     name: "Road Trip".to_string(),
//!     owner_id: 7,
//!     public: false,
//!     active_track_idx: 0,
//!     playback_position: 0.0,
//!     tracks: vec![TrackDescriptor::file(3)],
//! };
//! assert_eq!(descriptor.target, PlaylistTarget::New);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{ChorusError, Result};
pub use types::{
    FileId, MediaFile, PlaybackPosition, Playlist, PlaylistDescriptor, PlaylistId, PlaylistTarget,
    PlaylistTrack, TrackDescriptor, TrackKind, TrackRowId, TrackSource, User, UserId,
    YoutubeDescriptor, YoutubeEntry, YoutubeEntryId, MAX_NAME_LEN,
};
