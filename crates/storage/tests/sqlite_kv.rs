use storage::{KeyValueRepository, SqliteStore};

#[tokio::test]
async fn sqlite_kv_roundtrip() {
    let store = SqliteStore::open("sqlite:file:memdb_kv_roundtrip?mode=memory&cache=shared")
        .await
        .expect("open");

    assert_eq!(store.get("users").await.unwrap(), None);

    store.set("users", r#"{"a@b.c":{}}"#).await.unwrap();
    assert_eq!(
        store.get("users").await.unwrap(),
        Some(r#"{"a@b.c":{}}"#.to_owned())
    );

    store.set("users", "{}").await.unwrap();
    assert_eq!(store.get("users").await.unwrap(), Some("{}".to_owned()));

    store.delete("users").await.unwrap();
    assert_eq!(store.get("users").await.unwrap(), None);
}

#[tokio::test]
async fn migrate_twice_is_harmless() {
    let store = SqliteStore::open("sqlite:file:memdb_kv_migrate?mode=memory&cache=shared")
        .await
        .expect("open");
    store.migrate().await.unwrap();

    store.set("theme", "dark").await.unwrap();
    assert_eq!(store.get("theme").await.unwrap(), Some("dark".to_owned()));
}

#[tokio::test]
async fn delete_of_absent_key_is_ok() {
    let store = SqliteStore::open("sqlite:file:memdb_kv_delete?mode=memory&cache=shared")
        .await
        .expect("open");
    store.delete("missing").await.unwrap();
}
