//! Domain types for Chorus

mod file;
mod playback;
mod playlist;
mod track;
mod user;
mod youtube;

pub use file::{FileId, MediaFile};
pub use playback::PlaybackPosition;
pub use playlist::{
    Playlist, PlaylistDescriptor, PlaylistId, PlaylistTarget, PlaylistTrack, MAX_NAME_LEN,
};
pub use track::{TrackDescriptor, TrackKind, TrackRowId, TrackSource};
pub use user::{User, UserId};
pub use youtube::{YoutubeDescriptor, YoutubeEntry, YoutubeEntryId};
