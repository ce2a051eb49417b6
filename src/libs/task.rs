#[derive(Debug, Clone)]
pub struct Task {
    pub id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub done: bool,
    pub category_id: Option<i64>,
    /// Category title, populated when the row comes from a join.
    pub category: Option<String>,
}

impl Task {
    pub fn new(title: &str, description: Option<&str>, category_id: i64) -> Self {
        Task {
            id: None,
            title: title.to_string(),
            description: description.map(|d| d.to_string()),
            done: false,
            category_id: Some(category_id),
            category: None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum TaskFilter {
    All,
    ByCategory(String),
}
