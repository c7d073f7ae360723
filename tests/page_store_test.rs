use sea_orm::{ConnectionTrait, Database, DatabaseConnection, EntityTrait, PaginatorTrait, Statement};
use wiki::db;
use wiki::domain::{DomainError, Page, PageRepository, Title};
use wiki::infrastructure::SeaOrmPageRepository;
use wiki::models::page;

// Helper to create a test database
async fn setup_test_db() -> DatabaseConnection {
    // In-memory SQLite for testing
    db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB")
}

fn title(raw: &str) -> Title {
    Title::parse(raw).expect("valid title")
}

#[tokio::test]
async fn test_save_then_load_round_trips() {
    let repo = SeaOrmPageRepository::new(setup_test_db().await);

    for (raw, body) in [
        ("Test", "hello"),
        ("FrontPage", ""),
        ("Unicode42", "naïve café ✓\nsecond line"),
        ("Quotes", "it's a \"test\"; DROP TABLE pages; --"),
    ] {
        let page = Page::new(title(raw), body);
        repo.save(&page).await.expect("Failed to save page");

        let loaded = repo.load(&title(raw)).await.expect("Failed to load page");
        assert_eq!(loaded, page);
    }
}

#[tokio::test]
async fn test_non_utf8_body_round_trips_unchanged() {
    let repo = SeaOrmPageRepository::new(setup_test_db().await);

    let page = Page::new(title("Bytes"), vec![0xFF, 0xFE, 0x00, b'a', b'b', 0x80]);
    repo.save(&page).await.expect("Failed to save page");

    let loaded = repo.load(&title("Bytes")).await.expect("Failed to load page");
    assert_eq!(loaded.body, page.body);
}

#[tokio::test]
async fn test_load_missing_page_is_not_found() {
    let repo = SeaOrmPageRepository::new(setup_test_db().await);

    let err = repo.load(&title("NoSuchPage")).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound), "got {:?}", err);
}

#[tokio::test]
async fn test_save_overwrites_single_row() {
    let db = setup_test_db().await;
    let repo = SeaOrmPageRepository::new(db.clone());

    repo.save(&Page::new(title("Test"), "first"))
        .await
        .expect("Failed to save first version");
    repo.save(&Page::new(title("Test"), "second"))
        .await
        .expect("Failed to save second version");

    let loaded = repo.load(&title("Test")).await.expect("Failed to load page");
    assert_eq!(loaded.body, b"second");

    let rows = page::Entity::find().count(&db).await.expect("DB error");
    assert_eq!(rows, 1);
}

#[tokio::test]
async fn test_titles_are_case_sensitive() {
    let repo = SeaOrmPageRepository::new(setup_test_db().await);

    repo.save(&Page::new(title("Test"), "upper"))
        .await
        .expect("Failed to save page");

    let err = repo.load(&title("test")).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound), "got {:?}", err);
}

#[tokio::test]
async fn test_duplicate_rows_are_multiple_matches() {
    // Table without the primary key so the fixture can break the invariant
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect");
    for sql in [
        "CREATE TABLE pages (title TEXT NOT NULL, body BLOB NOT NULL)",
        "INSERT INTO pages (title, body) VALUES ('Twice', CAST('one' AS BLOB))",
        "INSERT INTO pages (title, body) VALUES ('Twice', CAST('two' AS BLOB))",
        "INSERT INTO pages (title, body) VALUES ('Once', CAST('only' AS BLOB))",
    ] {
        db.execute(Statement::from_string(db.get_database_backend(), sql.to_owned()))
            .await
            .expect("Failed to seed fixture");
    }

    let repo = SeaOrmPageRepository::new(db);

    match repo.load(&title("Twice")).await {
        Err(DomainError::MultipleMatches { title }) => assert_eq!(title, "Twice"),
        other => panic!("expected MultipleMatches, got {:?}", other),
    }

    let once = repo.load(&title("Once")).await.expect("Failed to load page");
    assert_eq!(once.body, b"only");
}

#[tokio::test]
async fn test_store_failure_is_database_error() {
    // No schema: every query fails
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect");
    let repo = SeaOrmPageRepository::new(db);

    let err = repo.load(&title("Test")).await.unwrap_err();
    assert!(matches!(err, DomainError::Database(_)), "got {:?}", err);

    let err = repo.save(&Page::new(title("Test"), "x")).await.unwrap_err();
    assert!(matches!(err, DomainError::Database(_)), "got {:?}", err);
}
