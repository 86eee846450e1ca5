use storage::repository::{KeyValueRepository, Storage, keys};
use storage::sqlite::SqliteRepository;

#[tokio::test]
async fn sqlite_roundtrip_and_overwrite() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_kv_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert_eq!(repo.get_value(keys::COURSES).await.unwrap(), None);

    repo.set_value(keys::ENROLLED_COURSE_IDS, "[1,2,4]")
        .await
        .unwrap();
    repo.set_value(keys::ENROLLED_COURSE_IDS, "[1,2,4,3]")
        .await
        .unwrap();

    let stored = repo.get_value(keys::ENROLLED_COURSE_IDS).await.unwrap();
    assert_eq!(stored.as_deref(), Some("[1,2,4,3]"));
}

#[tokio::test]
async fn sqlite_migrations_are_idempotent() {
    let url = "sqlite:file:memdb_kv_migrate?mode=memory&cache=shared";
    let repo = SqliteRepository::connect(url).await.expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.migrate().await.expect("second migrate");

    repo.set_value("k", "v").await.unwrap();
    repo.remove_value("k").await.unwrap();
    repo.remove_value("k").await.unwrap();
    assert_eq!(repo.get_value("k").await.unwrap(), None);
}

#[tokio::test]
async fn sqlite_values_survive_a_second_connection() {
    let url = "sqlite:file:memdb_kv_reopen?mode=memory&cache=shared";
    let first = Storage::sqlite(url).await.expect("first storage");
    first
        .kv
        .set_value(keys::COMPLETED_MODULES, r#"{"1":["ai-m1"]}"#)
        .await
        .unwrap();

    // keep `first` alive so the shared in-memory database is not dropped
    let second = Storage::sqlite(url).await.expect("second storage");
    let stored = second.kv.get_value(keys::COMPLETED_MODULES).await.unwrap();
    assert_eq!(stored.as_deref(), Some(r#"{"1":["ai-m1"]}"#));
    drop(first);
}
