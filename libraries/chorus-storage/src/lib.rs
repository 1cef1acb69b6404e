//! Chorus Storage
//!
//! `SQLite` persistence layer for the Chorus playlist server.
//!
//! This crate holds the one piece of the application with a real
//! consistency contract: atomically replacing a playlist's persisted track
//! list with a client-submitted one, while deduplicating external entries
//! and recording per-user playback position.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: Each feature owns its own queries and logic
//! - **Explicit Transactions**: `playlists::save` opens one transaction and
//!   every step runs on that handle; commit or full rollback
//! - **Multi-User**: Playlists carry owners, positions are per (playlist, user)
//!
//! # Example
//!
//! ```rust,no_run
//! use chorus_core::types::{PlaylistDescriptor, PlaylistTarget, TrackDescriptor};
//! use chorus_storage::{create_pool, run_migrations};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://chorus.db").await?;
//! run_migrations(&pool).await?;
//!
//! let descriptor = PlaylistDescriptor {
//!     target: PlaylistTarget::New,
//!     name: "Evening".to_string(),
//!     owner_id: 1,
//!     public: false,
//!     active_track_idx: 0,
//!     playback_position: 0.0,
//!     tracks: vec![TrackDescriptor::file(3)],
//! };
//! let playlist = chorus_storage::playlists::save(&pool, &descriptor).await?;
//! # Ok(())
//! # }
//! ```

// Vertical slices
pub mod files;
pub mod playback_positions;
pub mod playlists;
pub mod tracks;
pub mod users;
pub mod youtube;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://chorus.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true) // Create database file if it doesn't exist
        .journal_mode(SqliteJournalMode::Wal) // Use WAL mode for better concurrency
        .foreign_keys(true) // Needed for ON DELETE CASCADE on playlist tracks
        .busy_timeout(std::time::Duration::from_secs(30)); // Wait up to 30s for locks

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}
