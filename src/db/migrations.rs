//! Database schema migration management and versioning.
//!
//! Migrations are applied automatically when the database is opened. Each
//! migration runs inside its own transaction and is recorded in a
//! bookkeeping table, so a database can always report its version and a
//! newer binary can bring an older file up to date.

use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

/// SQL schema for the migrations tracking table.
const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// A single schema change: version, descriptive name, and the transformation
/// applied within a transaction.
#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of all migrations, applied in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    /// Registers all database migrations in chronological order.
    fn register_migrations(&mut self) {
        self.migrations.push(Migration {
            version: 1,
            name: "create_categories_and_tasks",
            up: |tx| {
                tx.execute(
                    "CREATE TABLE IF NOT EXISTS categories (
                        id INTEGER PRIMARY KEY AUTOINCREMENT,
                        title TEXT NOT NULL UNIQUE
                    )",
                    [],
                )?;
                tx.execute(
                    "CREATE TABLE IF NOT EXISTS tasks (
                        id INTEGER PRIMARY KEY AUTOINCREMENT,
                        title TEXT NOT NULL UNIQUE,
                        description TEXT,
                        done INTEGER NOT NULL DEFAULT 0,
                        category_id INTEGER NOT NULL,
                        FOREIGN KEY (category_id) REFERENCES categories (id) ON DELETE CASCADE
                    )",
                    [],
                )?;
                Ok(())
            },
        });

        self.migrations.push(Migration {
            version: 2,
            name: "index_tasks_category_id",
            up: |tx| {
                tx.execute(
                    "CREATE INDEX IF NOT EXISTS idx_tasks_category_id ON tasks (category_id)",
                    [],
                )?;
                Ok(())
            },
        });
    }

    /// Applies every migration newer than the database's current version.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current = get_db_version(conn)?;
        for migration in self.migrations.iter().filter(|m| m.version > current) {
            crate::msg_debug!("Applying migration v{}: {}", migration.version, migration.name);
            let tx = conn.transaction()?;
            (migration.up)(&tx)?;
            tx.execute(
                "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                params![migration.version, migration.name],
            )?;
            tx.commit()?;
        }
        Ok(())
    }

    /// Applied migrations as `(version, name, applied_at)`, oldest first.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<(u32, String, String)>> {
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;
        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?;

        let mut history = Vec::new();
        for row in rows {
            history.push(row?);
        }
        Ok(history)
    }

    fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Opens the bookkeeping and applies pending migrations. Called from
/// `Db::new` on every startup.
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().run_migrations(conn)
}

/// Current schema version, 0 for a fresh database.
pub fn get_db_version(conn: &Connection) -> Result<u32> {
    // The bookkeeping table does not exist before the first run.
    let exists: bool = conn.query_row(
        "SELECT EXISTS (SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'migrations')",
        [],
        |row| row.get(0),
    )?;
    if !exists {
        return Ok(0);
    }

    let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))?;
    Ok(version.unwrap_or(0))
}

/// Whether the database is behind the migrations this binary knows about.
pub fn needs_migration(conn: &Connection) -> Result<bool> {
    Ok(get_db_version(conn)? < MigrationManager::new().latest_version())
}
