//! Database layer for the taskboard application.
//!
//! A thin persistence layer over SQLite. One `Db` handle is opened per
//! invocation and injected into the repositories; the schema is kept up to
//! date by a versioned migration runner.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskboard::db::{categories::Categories, db::Db, tasks::Tasks};
//! use taskboard::libs::category::Category;
//! use taskboard::libs::task::{Task, TaskFilter};
//!
//! # fn main() -> anyhow::Result<()> {
//! let db = Db::new()?;
//! let category_id = Categories::new(&db).create(&Category::new("Work"))?;
//! Tasks::new(&db).insert(&Task::new("Review PR", None, category_id))?;
//! let work_tasks = Tasks::new(&db).fetch(TaskFilter::ByCategory("Work".to_string()))?;
//! # Ok(())
//! # }
//! ```

/// Category storage operations, including the cascading delete.
pub mod categories;

/// Core database connection and initialization module.
pub mod db;

/// Database schema migration system.
pub mod migrations;

/// Task storage operations: insert, filtered fetch, checkbox state, delete.
pub mod tasks;
