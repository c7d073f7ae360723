use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, DbErr, Statement};

/// Connect to the page store, check it answers, and create the schema.
pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;
    db.ping().await?;

    // Run migrations manually (simple SQL)
    run_migrations(&db).await?;

    Ok(db)
}

async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();

    // The primary key is what keeps one row per title.
    db.execute(Statement::from_string(
        backend,
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS pages (
                title TEXT PRIMARY KEY NOT NULL,
                body {} NOT NULL
            )
            "#,
            binary_type(backend)
        ),
    ))
    .await?;

    Ok(())
}

/// Column type for raw page bodies
fn binary_type(backend: DatabaseBackend) -> &'static str {
    match backend {
        DatabaseBackend::Postgres => "BYTEA",
        _ => "BLOB",
    }
}
