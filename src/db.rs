use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;

    // Run migrations manually (simple SQL)
    run_migrations(&db).await?;

    Ok(db)
}

async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    // Users: catalog actors referenced by ratings and interactions.
    // created_by/updated_by/deleted_by hold JSON {id, email} snapshots.
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            role TEXT NOT NULL DEFAULT 'user',
            address TEXT,
            phone TEXT,
            created_by TEXT,
            updated_by TEXT,
            deleted_by TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            deleted_at TEXT
        )
        "#
        .to_owned(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS product_types (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT,
            logo TEXT,
            created_by TEXT,
            updated_by TEXT,
            deleted_by TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            deleted_at TEXT
        )
        "#
        .to_owned(),
    ))
    .await?;

    // type_id is a weak reference: resolved on demand, no FK cascade
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            type_id TEXT,
            price INTEGER NOT NULL DEFAULT 0,
            description TEXT,
            is_active INTEGER NOT NULL DEFAULT 1,
            image TEXT,
            created_by TEXT,
            updated_by TEXT,
            deleted_by TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            deleted_at TEXT
        );
        CREATE INDEX IF NOT EXISTS idx_products_type_id ON products(type_id);
        CREATE INDEX IF NOT EXISTS idx_products_name ON products(name);
        "#
        .to_owned(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS ratings (
            id TEXT PRIMARY KEY,
            product_id TEXT,
            type_id TEXT,
            user_id TEXT NOT NULL,
            comment TEXT,
            status TEXT NOT NULL DEFAULT 'PENDING',
            is_positive INTEGER,
            comment_sentiment TEXT,
            created_by TEXT,
            updated_by TEXT,
            deleted_by TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            deleted_at TEXT
        );
        CREATE INDEX IF NOT EXISTS idx_ratings_user_id ON ratings(user_id);
        CREATE INDEX IF NOT EXISTS idx_ratings_product_id ON ratings(product_id);
        CREATE INDEX IF NOT EXISTS idx_ratings_status ON ratings(status);
        "#
        .to_owned(),
    ))
    .await?;

    // Append-only status-transition log; rows are never updated or removed
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS rating_history (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            rating_id TEXT NOT NULL,
            status TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            updated_by TEXT
        );
        CREATE INDEX IF NOT EXISTS idx_rating_history_rating_id ON rating_history(rating_id);
        "#
        .to_owned(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS interactions (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            product_id TEXT NOT NULL,
            clicks INTEGER NOT NULL DEFAULT 0,
            views INTEGER NOT NULL DEFAULT 0,
            purchased INTEGER NOT NULL DEFAULT 0,
            created_by TEXT,
            updated_by TEXT,
            deleted_by TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            deleted_at TEXT
        );
        CREATE INDEX IF NOT EXISTS idx_interactions_user_id ON interactions(user_id);
        CREATE INDEX IF NOT EXISTS idx_interactions_product_id ON interactions(product_id);
        "#
        .to_owned(),
    ))
    .await?;

    Ok(())
}
