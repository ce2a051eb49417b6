use crate::db::db::Db;
use crate::libs::category::Category;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_error_anyhow};
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};

const SELECT_CATEGORIES: &str = "SELECT id, title FROM categories ORDER BY id";
const SELECT_CATEGORY_BY_TITLE: &str = "SELECT id, title FROM categories WHERE title = ?1";
const SELECT_CATEGORY_BY_ID: &str = "SELECT id, title FROM categories WHERE id = ?1";
const INSERT_CATEGORY: &str = "INSERT INTO categories (title) VALUES (?1)";
const DELETE_CATEGORY: &str = "DELETE FROM categories WHERE id = ?1";
const COUNT_TASKS_IN_CATEGORY: &str = "SELECT COUNT(*) FROM tasks WHERE category_id = ?1";

/// Category repository over the injected connection.
pub struct Categories<'a> {
    conn: &'a Connection,
}

impl<'a> Categories<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { conn: &db.conn }
    }

    /// Inserts a new category. Rejects empty titles; duplicate titles are
    /// rejected by the UNIQUE constraint.
    pub fn create(&self, category: &Category) -> Result<i64> {
        if category.title.trim().is_empty() {
            msg_bail_anyhow!(Message::CategoryTitleEmpty);
        }
        self.conn.execute(INSERT_CATEGORY, params![category.title])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// All categories in storage order.
    pub fn list(&self) -> Result<Vec<Category>> {
        let mut stmt = self.conn.prepare(SELECT_CATEGORIES)?;
        let category_iter = stmt.query_map([], Self::map_row)?;

        let mut categories = Vec::new();
        for category in category_iter {
            categories.push(category?);
        }
        Ok(categories)
    }

    pub fn get_by_title(&self, title: &str) -> Result<Option<Category>> {
        self.conn
            .query_row(SELECT_CATEGORY_BY_TITLE, params![title], Self::map_row)
            .optional()
            .map_err(Into::into)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Category>> {
        self.conn
            .query_row(SELECT_CATEGORY_BY_ID, params![id], Self::map_row)
            .optional()
            .map_err(Into::into)
    }

    /// Number of tasks that still reference a category.
    pub fn task_count(&self, id: i64) -> Result<usize> {
        let count: i64 = self.conn.query_row(COUNT_TASKS_IN_CATEGORY, params![id], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Deletes a category. The schema cascades the delete to its tasks.
    pub fn delete(&self, id: i64) -> Result<usize> {
        let affected = self.conn.execute(DELETE_CATEGORY, params![id])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::CategoryNotFound(id.to_string())));
        }
        Ok(affected)
    }

    fn map_row(row: &Row<'_>) -> rusqlite::Result<Category> {
        Ok(Category {
            id: row.get(0)?,
            title: row.get(1)?,
        })
    }
}
