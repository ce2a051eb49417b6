//! Category view: list, add, and delete categories.
//!
//! Deleting a category cascades to the tasks inside it, so the confirmation
//! prompt names the category and, when it still has tasks, how many of them
//! go with it.

use crate::{
    db::{categories::Categories, db::Db},
    libs::{category::Category, messages::Message, view::View},
    msg_error, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct CategoryArgs {
    #[command(subcommand)]
    command: Option<CategoryCommand>,
}

#[derive(Debug, Subcommand)]
enum CategoryCommand {
    /// Add a new category
    Add {
        /// Category title
        title: Option<String>,
    },
    /// List all categories
    List,
    /// Delete a category and the tasks inside it
    Delete {
        /// Category title or ID to delete
        category: String,
    },
}

pub fn cmd(args: CategoryArgs) -> Result<()> {
    let db = Db::new()?;
    match args.command {
        Some(CategoryCommand::Add { title }) => handle_add(&db, title),
        Some(CategoryCommand::List) => handle_list(&db),
        Some(CategoryCommand::Delete { category }) => handle_delete(&db, &category),
        None => handle_interactive(&db),
    }
}

fn handle_add(db: &Db, title: Option<String>) -> Result<()> {
    let categories = Categories::new(db);

    let title: String = match title {
        Some(title) => title,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptCategoryTitle.to_string())
            .allow_empty(true)
            .interact_text()?,
    };
    if title.trim().is_empty() {
        msg_error!(Message::CategoryTitleEmpty);
        return Ok(());
    }
    if categories.get_by_title(&title)?.is_some() {
        msg_error!(Message::CategoryAlreadyExists(title));
        return Ok(());
    }

    categories.create(&Category::new(&title))?;
    msg_success!(Message::CategoryAdded(title));
    Ok(())
}

fn handle_list(db: &Db) -> Result<()> {
    let categories = Categories::new(db).list()?;

    if categories.is_empty() {
        msg_info!(Message::NoCategoriesFound);
        return Ok(());
    }

    msg_print!(Message::CategoriesHeader, true);
    View::categories(&categories)?;
    Ok(())
}

fn handle_delete(db: &Db, identifier: &str) -> Result<()> {
    let categories = Categories::new(db);

    // Try to find the category by ID or title
    let category = if let Ok(id) = identifier.parse::<i64>() {
        categories.get_by_id(id)?
    } else {
        categories.get_by_title(identifier)?
    };

    let category = match category {
        Some(c) => c,
        None => {
            msg_error!(Message::CategoryNotFound(identifier.to_string()));
            return Ok(());
        }
    };
    let id = category.id.unwrap_or_default();

    // Deleting cascades, so tell the user what goes with the category
    let task_count = categories.task_count(id)?;
    let prompt = if task_count > 0 {
        Message::ConfirmDeleteCategoryWithTasks(category.title.clone(), task_count)
    } else {
        Message::ConfirmDeleteCategory(category.title.clone())
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(false)
        .interact()?;

    if confirmed {
        categories.delete(id)?;
        msg_success!(Message::CategoryDeleted(category.title));
    } else {
        msg_info!(Message::OperationCancelled);
    }

    Ok(())
}

/// The category view: the current list plus add/delete actions, looping
/// until the user goes back.
pub(crate) fn handle_interactive(db: &Db) -> Result<()> {
    loop {
        let categories = Categories::new(db).list()?;
        if categories.is_empty() {
            msg_info!(Message::NoCategoriesFound);
        } else {
            msg_print!(Message::CategoriesHeader, true);
            View::categories(&categories)?;
        }

        let options = vec!["Add category", "Delete category", "Back"];
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::SelectCategoryAction.to_string())
            .items(&options)
            .interact()?;

        match selection {
            0 => handle_add(db, None)?,
            1 => {
                if categories.is_empty() {
                    msg_warning!(Message::NoCategoriesFound);
                    continue;
                }
                let titles: Vec<&str> = categories.iter().map(|c| c.title.as_str()).collect();
                let selection = Select::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::SelectCategoryToDelete.to_string())
                    .items(&titles)
                    .interact()?;
                handle_delete(db, titles[selection])?;
            }
            _ => break,
        }
    }
    Ok(())
}
