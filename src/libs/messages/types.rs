#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(String),
    TaskDeleted(String),
    TaskAlreadyExists(String),
    TaskNotFound(String),
    TaskTitleEmpty,
    TaskMarkedDone(String),
    TaskMarkedUndone(String),
    TaskCheckboxesSaved(usize),
    TasksHeader,
    TasksFilteredHeader(String), // category title
    NoTasksFound,
    ConfirmDeleteTask(String),
    SelectTaskAction,
    SelectTaskToShow,
    SelectTaskToDelete,
    PromptTaskTitle,
    PromptTaskDescription,
    PromptToggleTasks,

    // === CATEGORY MESSAGES ===
    CategoryAdded(String),
    CategoryDeleted(String),
    CategoryAlreadyExists(String),
    CategoryNotFound(String),
    CategoryTitleEmpty,
    CategoriesHeader,
    NoCategoriesFound,
    ConfirmDeleteCategory(String),
    ConfirmDeleteCategoryWithTasks(String, usize), // title, task count
    SelectCategoryAction,
    SelectCategoryToDelete,
    PromptCategoryTitle,
    PromptSelectCategory,

    // === FILTER MESSAGES ===
    PromptFilterCategory,
    FilterApplied(String), // category title
    FilterCleared,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigParseError,
    PromptDatabaseFile,

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
