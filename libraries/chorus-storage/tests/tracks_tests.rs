//! Integration tests for track source resolution


use chorus_core::types::*;
use chorus_core::ChorusError;
use test_helpers::*;

#[tokio::test]
async fn resolves_existing_file() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let file_id = create_test_file(pool, "/music/track.flac", Some("Track")).await;

    let mut conn = pool.acquire().await.unwrap();
    let source = chorus_storage::tracks::resolve_source(&mut conn, &TrackDescriptor::file(file_id))
        .await
        .expect("Failed to resolve file track");

    assert_eq!(source.kind(), TrackKind::File);
    match source {
        TrackSource::File(file) => {
            assert_eq!(file.id, file_id);
            assert_eq!(file.filename, "/music/track.flac");
            assert_eq!(file.title.as_deref(), Some("Track"));
        }
        other => panic!("expected file source, got {other:?}"),
    }
}

#[tokio::test]
async fn dangling_file_reference_is_not_found() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let mut conn = pool.acquire().await.unwrap();
    let err = chorus_storage::tracks::resolve_source(&mut conn, &TrackDescriptor::file(12345))
        .await
        .unwrap_err();

    assert!(matches!(err, ChorusError::NotFound { .. }), "got {err:?}");
}

#[tokio::test]
async fn youtube_entry_is_created_once_and_reused() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let mut conn = pool.acquire().await.unwrap();

    let (first, created) = chorus_storage::youtube::get_or_create(
        &mut conn,
        &YoutubeDescriptor {
            youtube_id: "abc".to_string(),
            title: "Original".to_string(),
            views: 10,
            duration: 60.0,
        },
    )
    .await
    .unwrap();
    assert!(created);
    assert_eq!(first.title, "Original");

    // Same video id, different attributes: existing row wins untouched.
    let (second, created) = chorus_storage::youtube::get_or_create(
        &mut conn,
        &YoutubeDescriptor {
            youtube_id: "abc".to_string(),
            title: "Renamed".to_string(),
            views: 999,
            duration: 61.0,
        },
    )
    .await
    .unwrap();
    assert!(!created);
    assert_eq!(second.id, first.id);
    assert_eq!(second.title, "Original");
    assert_eq!(second.views, 10);

    drop(conn);
    assert_eq!(count_rows(pool, "youtube_entries").await, 1);
}

#[tokio::test]
async fn descriptor_with_both_sources_is_malformed() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let file_id = create_test_file(pool, "/a.mp3", None).await;

    let descriptor = TrackDescriptor {
        file: Some(file_id),
        youtube: Some(YoutubeDescriptor {
            youtube_id: "abc".to_string(),
            title: "Video".to_string(),
            views: 0,
            duration: 0.0,
        }),
    };

    let mut conn = pool.acquire().await.unwrap();
    let err = chorus_storage::tracks::resolve_source(&mut conn, &descriptor)
        .await
        .unwrap_err();

    assert!(matches!(err, ChorusError::MalformedTrack(_)), "got {err:?}");
}

#[tokio::test]
async fn descriptor_with_no_source_is_malformed() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let descriptor = TrackDescriptor {
        file: None,
        youtube: None,
    };

    let mut conn = pool.acquire().await.unwrap();
    let err = chorus_storage::tracks::resolve_source(&mut conn, &descriptor)
        .await
        .unwrap_err();

    assert!(matches!(err, ChorusError::MalformedTrack(_)), "got {err:?}");
}
