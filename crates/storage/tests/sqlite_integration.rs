use std::collections::BTreeMap;

use civic_core::model::{LessonId, LessonProgress, ProgressMap, ProgressUpdate};
use storage::repository::KeyValueStore;
use storage::sqlite::SqliteRepository;
use storage::{Storage, StorageKey};

#[tokio::test]
async fn sqlite_upserts_and_clears_entries() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_kv_upsert?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert_eq!(repo.get_raw("civic_lang").await.unwrap(), None);
    repo.set_raw("civic_lang", "\"ar\"").await.unwrap();
    repo.set_raw("civic_lang", "\"en\"").await.unwrap();
    assert_eq!(
        repo.get_raw("civic_lang").await.unwrap().as_deref(),
        Some("\"en\"")
    );

    repo.set_raw("civic_feedback", "[]").await.unwrap();
    repo.clear().await.unwrap();
    assert_eq!(repo.get_raw("civic_lang").await.unwrap(), None);
    assert_eq!(repo.get_raw("civic_feedback").await.unwrap(), None);
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_kv_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.migrate().await.expect("second migrate");
}

#[tokio::test]
async fn progress_map_survives_a_round_trip_through_sqlite() {
    let storage = Storage::sqlite("sqlite:file:memdb_kv_progress?mode=memory&cache=shared")
        .await
        .expect("storage");
    let json = storage.json();

    let mut progress = ProgressMap::new();
    let id = LessonId::new("U1L1");
    civic_core::model::progress::apply_update(
        &mut progress,
        &id,
        ProgressUpdate::reflection("notes").with_quiz_score(2),
    );
    json.set(StorageKey::Progress, &progress).await.unwrap();

    let loaded: ProgressMap = json.get_or_default(StorageKey::Progress).await.unwrap();
    assert_eq!(
        loaded.get(&id),
        Some(&LessonProgress {
            completed: false,
            reflection: "notes".into(),
            quiz_score: Some(2),
        })
    );
}

#[tokio::test]
async fn partial_records_decode_with_defaults() {
    let storage = Storage::sqlite("sqlite:file:memdb_kv_partial?mode=memory&cache=shared")
        .await
        .expect("storage");
    storage
        .entries
        .set_raw("civic_progress", r#"{"U1L2":{"completed":true}}"#)
        .await
        .unwrap();

    let loaded: BTreeMap<LessonId, LessonProgress> =
        storage.json().get_or_default(StorageKey::Progress).await.unwrap();
    let record = loaded.get(&LessonId::new("U1L2")).unwrap();
    assert!(record.completed);
    assert!(record.reflection.is_empty());
    assert_eq!(record.quiz_score, None);
}
