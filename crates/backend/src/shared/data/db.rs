use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Tables in creation order (referenced tables first)
const SCHEMA: &[(&str, &str)] = &[
    (
        "user",
        r#"
        CREATE TABLE IF NOT EXISTS "user" (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE
        );
        "#,
    ),
    (
        "guinea_pig",
        r#"
        CREATE TABLE IF NOT EXISTS guinea_pig (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        );
        "#,
    ),
    (
        "food_type",
        r#"
        CREATE TABLE IF NOT EXISTS food_type (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            label TEXT NOT NULL,
            recommendations TEXT,
            in_statistics INTEGER NOT NULL DEFAULT 1,
            is_hidden INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "food_entry",
        r#"
        CREATE TABLE IF NOT EXISTS food_entry (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            food_type_id INTEGER NOT NULL REFERENCES food_type(id),
            notes TEXT,
            user_id INTEGER REFERENCES "user"(id),
            utc_date TEXT NOT NULL
        );
        "#,
    ),
    (
        "food_entries",
        r#"
        CREATE TABLE IF NOT EXISTS food_entries (
            food_entry_id INTEGER NOT NULL REFERENCES food_entry(id),
            guinea_pig_id INTEGER NOT NULL REFERENCES guinea_pig(id),
            PRIMARY KEY (food_entry_id, guinea_pig_id)
        );
        "#,
    ),
    (
        "weight_entry",
        r#"
        CREATE TABLE IF NOT EXISTS weight_entry (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            value REAL NOT NULL,
            guinea_pig_id INTEGER NOT NULL REFERENCES guinea_pig(id),
            user_id INTEGER REFERENCES "user"(id),
            utc_date TEXT NOT NULL
        );
        "#,
    ),
    (
        "vitamin_c_entry",
        r#"
        CREATE TABLE IF NOT EXISTS vitamin_c_entry (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER REFERENCES "user"(id),
            utc_date TEXT NOT NULL
        );
        "#,
    ),
    (
        "sys_settings",
        r#"
        CREATE TABLE IF NOT EXISTS sys_settings (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL,
            description TEXT,
            created_at TEXT,
            updated_at TEXT
        );
        "#,
    ),
];

const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_food_entry_utc_date ON food_entry(utc_date);",
    "CREATE INDEX IF NOT EXISTS idx_weight_entry_utc_date ON weight_entry(utc_date);",
    "CREATE INDEX IF NOT EXISTS idx_vitamin_c_entry_utc_date ON vitamin_c_entry(utc_date);",
];

fn build_sqlite_url(path: &Path) -> String {
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    format!("sqlite://{}{}?mode=rwc", prefix, normalized)
}

pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    let db_url = build_sqlite_url(&absolute_path);
    tracing::info!("Opening database {}", absolute_path.display());
    let conn = Database::connect(&db_url).await?;

    for (table, sql) in SCHEMA {
        tracing::debug!("Ensuring table {}", table);
        conn.execute(Statement::from_string(DatabaseBackend::Sqlite, sql.to_string()))
            .await?;
    }
    for sql in INDEXES {
        conn.execute(Statement::from_string(DatabaseBackend::Sqlite, sql.to_string()))
            .await?;
    }

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

/// One on-disk database per test binary
///
/// `DB_CONN` can be set only once, so storage tests share it. Holding the
/// returned guard keeps them from running against it concurrently.
#[cfg(test)]
pub(crate) mod testing {
    use once_cell::sync::Lazy;
    use tokio::sync::{Mutex, MutexGuard, OnceCell};

    static DIR: Lazy<tempfile::TempDir> = Lazy::new(|| {
        tempfile::Builder::new()
            .prefix("guineapigs-test")
            .tempdir()
            .expect("create test database dir")
    });
    static INIT: Lazy<OnceCell<()>> = Lazy::new(OnceCell::new);
    static LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    pub async fn database() -> MutexGuard<'static, ()> {
        let guard = LOCK.lock().await;
        INIT.get_or_init(|| async {
            super::initialize_database(&DIR.path().join("test.db"))
                .await
                .expect("initialize test database");
        })
        .await;
        guard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_schema_is_created() {
        let _db = testing::database().await;
        let rows = get_connection()
            .query_all(Statement::from_string(
                DatabaseBackend::Sqlite,
                "SELECT name FROM sqlite_master WHERE type = 'table'".to_string(),
            ))
            .await
            .unwrap();
        let tables: Vec<String> = rows
            .iter()
            .map(|r| r.try_get::<String>("", "name").unwrap())
            .collect();
        for (table, _) in SCHEMA {
            assert!(tables.iter().any(|t| t == table), "missing table {}", table);
        }
    }

    #[test]
    fn test_sqlite_url() {
        assert_eq!(
            build_sqlite_url(Path::new("/var/lib/gp/app.db")),
            "sqlite:///var/lib/gp/app.db?mode=rwc"
        );
        assert_eq!(
            build_sqlite_url(Path::new("C:\\data\\app.db")),
            "sqlite:///C:/data/app.db?mode=rwc"
        );
    }

    #[test]
    fn test_link_table_follows_its_references() {
        let position = |name: &str| SCHEMA.iter().position(|(t, _)| *t == name).unwrap();
        assert!(position("food_entries") > position("food_entry"));
        assert!(position("food_entries") > position("guinea_pig"));
        assert!(position("weight_entry") > position("user"));
    }
}
