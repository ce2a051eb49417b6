//! # Taskboard - Categorized task manager
//!
//! A single-user command-line task manager. Tasks carry a title, an optional
//! description and a completion checkbox, and every task belongs to exactly
//! one category. Everything is persisted in a local SQLite database.
//!
//! ## Features
//!
//! - **Task Management**: Create, list, complete, and delete tasks
//! - **Categories**: Group tasks into categories; deleting a category
//!   removes its tasks
//! - **Filtering**: Restrict the task list to a single category
//! - **Interactive Views**: Checkbox toggling and guided prompts for every
//!   action, next to plain subcommands for scripting
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskboard::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
