//! Display implementation for taskboard application messages.
//!
//! The single source of user-facing text: every `Message` variant is turned
//! into its terminal representation here, so command modules never carry
//! string literals of their own.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let message = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(title) => format!("Task '{}' added successfully", title),
            Message::TaskDeleted(title) => format!("Task '{}' deleted successfully", title),
            Message::TaskAlreadyExists(title) => format!("Task '{}' already exists", title),
            Message::TaskNotFound(task) => format!("Task '{}' not found", task),
            Message::TaskTitleEmpty => "Task title must not be empty".to_string(),
            Message::TaskMarkedDone(title) => format!("Task '{}' marked as done", title),
            Message::TaskMarkedUndone(title) => format!("Task '{}' marked as not done", title),
            Message::TaskCheckboxesSaved(count) => format!("Saved {} checkbox change(s)", count),
            Message::TasksHeader => "Tasks:".to_string(),
            Message::TasksFilteredHeader(category) => format!("Tasks in category '{}':", category),
            Message::NoTasksFound => "No tasks found".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),
            Message::SelectTaskAction => "Select action".to_string(),
            Message::SelectTaskToShow => "Select task to show".to_string(),
            Message::SelectTaskToDelete => "Select task to delete".to_string(),
            Message::PromptTaskTitle => "Task title".to_string(),
            Message::PromptTaskDescription => "Task description".to_string(),
            Message::PromptToggleTasks => "Toggle done checkboxes (space), then confirm (enter)".to_string(),

            // === CATEGORY MESSAGES ===
            Message::CategoryAdded(title) => format!("Category '{}' added successfully", title),
            Message::CategoryDeleted(title) => format!("Category '{}' deleted successfully", title),
            Message::CategoryAlreadyExists(title) => format!("Category '{}' already exists", title),
            Message::CategoryNotFound(category) => format!("Category '{}' not found", category),
            Message::CategoryTitleEmpty => "Category title must not be empty".to_string(),
            Message::CategoriesHeader => "Categories:".to_string(),
            Message::NoCategoriesFound => "No categories found. Add a category first".to_string(),
            Message::ConfirmDeleteCategory(title) => format!("Delete category '{}'?", title),
            Message::ConfirmDeleteCategoryWithTasks(title, count) => {
                format!("Delete category '{}' and the {} task(s) inside it?", title, count)
            }
            Message::SelectCategoryAction => "Select action".to_string(),
            Message::SelectCategoryToDelete => "Select category to delete".to_string(),
            Message::PromptCategoryTitle => "Category title".to_string(),
            Message::PromptSelectCategory => "Select category".to_string(),

            // === FILTER MESSAGES ===
            Message::PromptFilterCategory => "Filter by category".to_string(),
            Message::FilterApplied(category) => format!("Showing tasks in category '{}'", category),
            Message::FilterCleared => "Showing all tasks".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigParseError => "Failed to parse configuration file".to_string(),
            Message::PromptDatabaseFile => "Database file name".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", message)
    }
}
