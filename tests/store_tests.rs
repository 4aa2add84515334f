use watchlist::db::{AdminUpsert, Store};

async fn memory_store() -> Store {
    Store::new("sqlite::memory:")
        .await
        .expect("failed to open in-memory store")
}

#[tokio::test]
async fn test_admin_upsert_keeps_single_user() {
    let store = memory_store().await;
    assert_eq!(store.user_count().await.unwrap(), 0);

    let outcome = store.upsert_admin("alice", "secret").await.unwrap();
    assert_eq!(outcome, AdminUpsert::Created);
    assert_eq!(store.user_count().await.unwrap(), 1);

    let user = store.first_user().await.unwrap().unwrap();
    assert_eq!(user.username, "alice");
    assert_eq!(user.name, "Admin");
    assert!(store.verify_login("alice", "secret").await.unwrap().is_some());

    // a second run with different credentials updates the same row
    let outcome = store.upsert_admin("bob", "other").await.unwrap();
    assert_eq!(outcome, AdminUpsert::Updated);
    assert_eq!(store.user_count().await.unwrap(), 1);

    assert!(store.verify_login("alice", "secret").await.unwrap().is_none());
    assert!(store.verify_login("bob", "other").await.unwrap().is_some());
}

#[tokio::test]
async fn test_verify_login_failure_is_generic() {
    let store = memory_store().await;
    store.upsert_admin("test", "123").await.unwrap();

    assert!(store.verify_login("test", "wrong").await.unwrap().is_none());
    assert!(store.verify_login("wrong", "123").await.unwrap().is_none());
    assert!(store.verify_login("test", "123").await.unwrap().is_some());
}

#[tokio::test]
async fn test_password_is_stored_hashed() {
    let store = memory_store().await;
    store.upsert_admin("test", "123").await.unwrap();

    use sea_orm::EntityTrait;
    let row = watchlist::entities::users::Entity::find()
        .one(&store.conn)
        .await
        .unwrap()
        .unwrap();

    assert_ne!(row.password_hash, "123");
    assert!(row.password_hash.starts_with("$argon2"));
}

#[tokio::test]
async fn test_update_user_name() {
    let store = memory_store().await;
    store.upsert_admin("test", "123").await.unwrap();

    let user = store.first_user().await.unwrap().unwrap();
    store.update_user_name(user.id, "Grey").await.unwrap();

    let user = store.first_user().await.unwrap().unwrap();
    assert_eq!(user.name, "Grey");
}

#[tokio::test]
async fn test_movie_crud() {
    let store = memory_store().await;

    let movie = store.create_movie("Leon", "1994").await.unwrap();
    assert_eq!(store.get_movie(movie.id).await.unwrap().unwrap().title, "Leon");

    let updated = store
        .update_movie(movie.id, "Leon: The Professional", "1994")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.title, "Leon: The Professional");

    assert!(store.update_movie(999, "Nope", "2000").await.unwrap().is_none());
    assert!(!store.delete_movie(999).await.unwrap());

    assert!(store.delete_movie(movie.id).await.unwrap());
    assert!(store.list_movies().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_movies_list_in_insertion_order() {
    let store = memory_store().await;
    store.create_movie("First", "2001").await.unwrap();
    store.create_movie("Second", "2002").await.unwrap();

    let titles: Vec<String> = store
        .list_movies()
        .await
        .unwrap()
        .into_iter()
        .map(|movie| movie.title)
        .collect();
    assert_eq!(titles, ["First", "Second"]);
}

#[tokio::test]
async fn test_seed_fixtures() {
    let store = memory_store().await;
    store.seed_fixtures().await.unwrap();

    let movies = store.list_movies().await.unwrap();
    assert_eq!(movies.len(), 10);
    assert!(movies.iter().any(|movie| movie.title == "WALL-E"));

    assert_eq!(store.message_count().await.unwrap(), 3);
}

#[tokio::test]
async fn test_init_schema_drop_clears_data() {
    let store = memory_store().await;
    store.create_movie("Leon", "1994").await.unwrap();
    store.create_message("小江", "电影真好看啊！").await.unwrap();

    store.init_schema(true).await.unwrap();

    assert!(store.list_movies().await.unwrap().is_empty());
    assert_eq!(store.message_count().await.unwrap(), 0);
    assert_eq!(store.user_count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_init_schema_without_drop_preserves_data() {
    let store = memory_store().await;
    store.create_movie("Leon", "1994").await.unwrap();

    store.init_schema(false).await.unwrap();

    assert_eq!(store.list_movies().await.unwrap().len(), 1);
}
