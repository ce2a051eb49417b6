use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskFilter};
use crate::{msg_bail_anyhow, msg_error_anyhow};
use anyhow::Result;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

const SELECT_TASKS: &str = "
    SELECT tasks.id, tasks.title, tasks.description, tasks.done, tasks.category_id, categories.title
    FROM tasks
    JOIN categories ON tasks.category_id = categories.id";
const WHERE_CATEGORY_TITLE: &str = "WHERE categories.title = ?1";
const ORDER_BY_ID: &str = "ORDER BY tasks.id";
const SELECT_TASK_BY_TITLE: &str = "
    SELECT tasks.id, tasks.title, tasks.description, tasks.done, tasks.category_id, categories.title
    FROM tasks
    LEFT JOIN categories ON tasks.category_id = categories.id
    WHERE tasks.title = ?1";
const SELECT_TASK_BY_ID: &str = "
    SELECT tasks.id, tasks.title, tasks.description, tasks.done, tasks.category_id, categories.title
    FROM tasks
    LEFT JOIN categories ON tasks.category_id = categories.id
    WHERE tasks.id = ?1";
const INSERT_TASK: &str = "INSERT INTO tasks (title, description, done, category_id) VALUES (?1, ?2, ?3, ?4)";
const UPDATE_TASK_DONE: &str = "UPDATE tasks SET done = ?2 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

/// Task repository over the injected connection.
pub struct Tasks<'a> {
    conn: &'a Connection,
}

impl<'a> Tasks<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { conn: &db.conn }
    }

    /// Inserts a new task. Rejects empty titles; duplicate titles and
    /// unknown categories are rejected by the schema constraints.
    pub fn insert(&self, task: &Task) -> Result<i64> {
        if task.title.trim().is_empty() {
            msg_bail_anyhow!(Message::TaskTitleEmpty);
        }
        self.conn.execute(
            INSERT_TASK,
            params![task.title, task.description, task.done, task.category_id],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Fetches tasks joined with their category titles, in storage order,
    /// optionally restricted to a single category.
    pub fn fetch(&self, filter: TaskFilter) -> Result<Vec<Task>> {
        let (sql, filter_params) = match filter {
            TaskFilter::All => (format!("{} {}", SELECT_TASKS, ORDER_BY_ID), vec![]),
            TaskFilter::ByCategory(title) => (
                format!("{} {} {}", SELECT_TASKS, WHERE_CATEGORY_TITLE, ORDER_BY_ID),
                vec![title],
            ),
        };

        let mut stmt = self.conn.prepare(&sql)?;
        let task_iter = stmt.query_map(params_from_iter(filter_params.iter()), Self::map_row)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    pub fn get_by_title(&self, title: &str) -> Result<Option<Task>> {
        self.conn
            .query_row(SELECT_TASK_BY_TITLE, params![title], Self::map_row)
            .optional()
            .map_err(Into::into)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Task>> {
        self.conn
            .query_row(SELECT_TASK_BY_ID, params![id], Self::map_row)
            .optional()
            .map_err(Into::into)
    }

    /// Persists the completion checkbox state of a task.
    pub fn set_done(&self, id: i64, done: bool) -> Result<()> {
        let affected = self.conn.execute(UPDATE_TASK_DONE, params![id, done])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::TaskNotFound(id.to_string())));
        }
        Ok(())
    }

    pub fn delete(&self, id: i64) -> Result<usize> {
        let affected = self.conn.execute(DELETE_TASK, params![id])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::TaskNotFound(id.to_string())));
        }
        Ok(affected)
    }

    fn map_row(row: &Row<'_>) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            done: row.get(3)?,
            category_id: row.get(4)?,
            category: row.get(5)?,
        })
    }
}
