use super::category::Category;
use super::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DONE", "TITLE", "CATEGORY", "DESCRIPTION"]);
        for task in tasks {
            table.add_row(row![
                task.id.unwrap_or(0),
                if task.done { "[x]" } else { "[ ]" },
                task.title,
                task.category.as_deref().unwrap_or(""),
                task.description.as_deref().unwrap_or("")
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn categories(categories: &[Category]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE"]);
        for category in categories {
            table.add_row(row![category.id.unwrap_or(0), category.title]);
        }
        table.printstd();

        Ok(())
    }

    /// Detail pane for a single task.
    pub fn task_detail(task: &Task) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["Title", task.title]);
        table.add_row(row!["Description", task.description.as_deref().unwrap_or("")]);
        table.add_row(row!["Done", if task.done { "[x]" } else { "[ ]" }]);
        table.add_row(row!["Category", task.category.as_deref().unwrap_or("")]);
        table.printstd();

        Ok(())
    }
}
