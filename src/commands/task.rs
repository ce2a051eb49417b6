//! Task view: list, inspect, add, complete, and delete tasks.
//!
//! Every handler takes the injected database handle plus its explicit
//! inputs and reloads the affected list afterwards. The interactive view
//! wires the same handlers to a checkbox list, a category filter with a
//! leading "all categories" entry, and an entry point into the category
//! view.

use crate::{
    commands::category,
    db::{categories::Categories, db::Db, tasks::Tasks},
    libs::{
        messages::Message,
        task::{Task, TaskFilter},
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};

/// Label of the leading no-filter entry in the category filter list.
const FILTER_ALL: &str = "(all categories)";

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: Option<TaskCommand>,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Add a new task
    Add {
        /// Task title
        title: Option<String>,
        /// Task description
        #[arg(short, long)]
        description: Option<String>,
        /// Title of the category the task belongs to
        #[arg(short, long)]
        category: Option<String>,
    },
    /// List tasks, optionally restricted to one category
    List {
        /// Only show tasks in this category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show the details of a task
    Show {
        /// Task title
        title: String,
    },
    /// Mark a task as done
    Done {
        /// Task title
        title: String,
    },
    /// Mark a task as not done
    Undone {
        /// Task title
        title: String,
    },
    /// Delete a task
    Delete {
        /// Task title
        title: String,
    },
}

pub fn cmd(args: TaskArgs) -> Result<()> {
    let db = Db::new()?;
    match args.command {
        Some(TaskCommand::Add {
            title,
            description,
            category,
        }) => handle_add(&db, title, description, category),
        Some(TaskCommand::List { category }) => handle_list(&db, category),
        Some(TaskCommand::Show { title }) => handle_show(&db, &title),
        Some(TaskCommand::Done { title }) => handle_set_done(&db, &title, true),
        Some(TaskCommand::Undone { title }) => handle_set_done(&db, &title, false),
        Some(TaskCommand::Delete { title }) => handle_delete(&db, &title),
        None => handle_interactive(&db),
    }
}

fn handle_list(db: &Db, category: Option<String>) -> Result<()> {
    // An empty filter means no restriction
    let filter = match category {
        Some(title) if !title.is_empty() => TaskFilter::ByCategory(title),
        _ => TaskFilter::All,
    };
    let tasks = Tasks::new(db).fetch(filter.clone())?;

    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    print_task_list(&filter, &tasks)
}

fn print_task_list(filter: &TaskFilter, tasks: &[Task]) -> Result<()> {
    match filter {
        TaskFilter::ByCategory(title) => msg_print!(Message::TasksFilteredHeader(title.clone()), true),
        TaskFilter::All => msg_print!(Message::TasksHeader, true),
    }
    View::tasks(tasks)
}

fn handle_show(db: &Db, title: &str) -> Result<()> {
    match Tasks::new(db).get_by_title(title)? {
        Some(task) => View::task_detail(&task),
        None => {
            msg_error!(Message::TaskNotFound(title.to_string()));
            Ok(())
        }
    }
}

fn handle_add(db: &Db, title: Option<String>, description: Option<String>, category: Option<String>) -> Result<()> {
    let tasks = Tasks::new(db);
    let categories_db = Categories::new(db);

    // A task cannot exist without a category to put it in
    let categories = categories_db.list()?;
    if categories.is_empty() {
        msg_info!(Message::NoCategoriesFound);
        return Ok(());
    }

    let title: String = match title {
        Some(title) => title,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskTitle.to_string())
            .allow_empty(true)
            .interact_text()?,
    };
    if title.trim().is_empty() {
        msg_error!(Message::TaskTitleEmpty);
        return Ok(());
    }
    if tasks.get_by_title(&title)?.is_some() {
        msg_error!(Message::TaskAlreadyExists(title));
        return Ok(());
    }

    let description: String = match description {
        Some(description) => description,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskDescription.to_string())
            .allow_empty(true)
            .interact_text()?,
    };
    let description = if description.is_empty() { None } else { Some(description) };

    let category_title = match category {
        Some(category) => category,
        None => {
            let titles: Vec<&str> = categories.iter().map(|c| c.title.as_str()).collect();
            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptSelectCategory.to_string())
                .items(&titles)
                .interact()?;
            titles[selection].to_string()
        }
    };
    let category = match categories_db.get_by_title(&category_title)? {
        Some(category) => category,
        None => {
            msg_error!(Message::CategoryNotFound(category_title));
            return Ok(());
        }
    };

    let task = Task::new(&title, description.as_deref(), category.id.unwrap_or_default());
    tasks.insert(&task)?;
    msg_success!(Message::TaskAdded(title));
    Ok(())
}

fn handle_set_done(db: &Db, title: &str, done: bool) -> Result<()> {
    let tasks = Tasks::new(db);

    let task = match tasks.get_by_title(title)? {
        Some(task) => task,
        None => {
            msg_error!(Message::TaskNotFound(title.to_string()));
            return Ok(());
        }
    };

    tasks.set_done(task.id.unwrap_or_default(), done)?;
    if done {
        msg_success!(Message::TaskMarkedDone(task.title));
    } else {
        msg_success!(Message::TaskMarkedUndone(task.title));
    }
    Ok(())
}

fn handle_delete(db: &Db, title: &str) -> Result<()> {
    let tasks = Tasks::new(db);

    let task = match tasks.get_by_title(title)? {
        Some(task) => task,
        None => {
            msg_error!(Message::TaskNotFound(title.to_string()));
            return Ok(());
        }
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteTask(task.title.clone()).to_string())
        .default(false)
        .interact()?;

    if confirmed {
        tasks.delete(task.id.unwrap_or_default())?;
        msg_success!(Message::TaskDeleted(task.title));
    } else {
        msg_info!(Message::OperationCancelled);
    }

    Ok(())
}

/// The task view: current list, then one action per loop iteration. Every
/// mutating action is followed by a full reload at the top of the loop.
fn handle_interactive(db: &Db) -> Result<()> {
    let mut filter = TaskFilter::All;
    loop {
        let tasks = Tasks::new(db).fetch(filter.clone())?;
        if tasks.is_empty() {
            msg_info!(Message::NoTasksFound);
        } else {
            print_task_list(&filter, &tasks)?;
        }

        let options = vec![
            "Toggle done checkboxes",
            "Show task details",
            "Add task",
            "Delete task",
            "Filter by category",
            "Manage categories",
            "Quit",
        ];
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::SelectTaskAction.to_string())
            .items(&options)
            .interact()?;

        match selection {
            0 => handle_toggle(db, &tasks)?,
            1 => {
                if let Some(title) = pick_task(&tasks, Message::SelectTaskToShow)? {
                    handle_show(db, &title)?;
                }
            }
            2 => handle_add(db, None, None, None)?,
            3 => {
                if let Some(title) = pick_task(&tasks, Message::SelectTaskToDelete)? {
                    handle_delete(db, &title)?;
                }
            }
            4 => filter = pick_filter(db)?,
            5 => category::handle_interactive(db)?,
            _ => break,
        }
    }
    Ok(())
}

/// Presents the checkbox list and persists every flag the user changed.
fn handle_toggle(db: &Db, tasks: &[Task]) -> Result<()> {
    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    let titles: Vec<&str> = tasks.iter().map(|t| t.title.as_str()).collect();
    let defaults: Vec<bool> = tasks.iter().map(|t| t.done).collect();
    let checked = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptToggleTasks.to_string())
        .items(&titles)
        .defaults(&defaults)
        .interact()?;

    let repo = Tasks::new(db);
    let mut changed = 0;
    for (index, task) in tasks.iter().enumerate() {
        let done = checked.contains(&index);
        if done != task.done {
            repo.set_done(task.id.unwrap_or_default(), done)?;
            changed += 1;
        }
    }
    msg_success!(Message::TaskCheckboxesSaved(changed));
    Ok(())
}

fn pick_task(tasks: &[Task], prompt: Message) -> Result<Option<String>> {
    if tasks.is_empty() {
        msg_warning!(Message::NoTasksFound);
        return Ok(None);
    }
    let titles: Vec<&str> = tasks.iter().map(|t| t.title.as_str()).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .items(&titles)
        .interact()?;
    Ok(Some(titles[selection].to_string()))
}

/// Category filter list: the full category list behind a leading entry that
/// clears the restriction.
fn pick_filter(db: &Db) -> Result<TaskFilter> {
    let categories = Categories::new(db).list()?;

    let mut options = vec![FILTER_ALL.to_string()];
    options.extend(categories.iter().map(|c| c.title.clone()));

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptFilterCategory.to_string())
        .items(&options)
        .default(0)
        .interact()?;

    if selection == 0 {
        msg_info!(Message::FilterCleared);
        Ok(TaskFilter::All)
    } else {
        msg_info!(Message::FilterApplied(options[selection].clone()));
        Ok(TaskFilter::ByCategory(options[selection].clone()))
    }
}
