#[derive(Debug, Clone)]
pub struct Category {
    pub id: Option<i64>,
    pub title: String,
}

impl Category {
    pub fn new(title: &str) -> Self {
        Category {
            id: None,
            title: title.to_string(),
        }
    }
}
