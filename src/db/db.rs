use crate::db::migrations;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "taskboard.db";

/// The single database handle shared by every repository in one invocation.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database and applies any pending migrations.
    ///
    /// A failure here is fatal to the application: the error propagates out
    /// of `main` and the process exits nonzero.
    pub fn new() -> Result<Db> {
        let mut conn = Self::open()?;
        migrations::init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// Opens a raw connection without running migrations. Used by the
    /// migration tests.
    pub fn new_without_migrations() -> Result<Connection> {
        Self::open()
    }

    fn open() -> Result<Connection> {
        let file_name = Config::read()?.db_file_name();
        let db_file_path = DataStorage::new().get_path(&file_name)?;
        let conn = Connection::open(db_file_path)?;
        // Cascading deletes rely on this pragma; SQLite ships with it off.
        conn.pragma_update(None, "foreign_keys", true)?;

        Ok(conn)
    }
}
