#[cfg(test)]
mod tests {
    use std::sync::{Mutex, MutexGuard};
    use taskboard::db::categories::Categories;
    use taskboard::db::db::Db;
    use taskboard::db::tasks::Tasks;
    use taskboard::libs::category::Category;
    use taskboard::libs::task::{Task, TaskFilter};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // Tests in this binary redirect HOME/LOCALAPPDATA, so they must not
    // overlap.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct FilterTestContext {
        _temp_dir: TempDir,
        _env_guard: MutexGuard<'static, ()>,
    }

    impl TestContext for FilterTestContext {
        fn setup() -> Self {
            let env_guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            FilterTestContext {
                _temp_dir: temp_dir,
                _env_guard: env_guard,
            }
        }
    }

    fn seed(db: &Db) {
        let categories = Categories::new(db);
        let tasks = Tasks::new(db);

        let work_id = categories.create(&Category::new("Work")).unwrap();
        let home_id = categories.create(&Category::new("Home")).unwrap();

        tasks.insert(&Task::new("Review PR", None, work_id)).unwrap();
        tasks.insert(&Task::new("Write report", None, work_id)).unwrap();
        tasks.insert(&Task::new("Buy milk", None, home_id)).unwrap();
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_filter_restricts_to_category(_ctx: &mut FilterTestContext) {
        let db = Db::new().unwrap();
        seed(&db);

        let tasks = Tasks::new(&db);

        let work = tasks.fetch(TaskFilter::ByCategory("Work".to_string())).unwrap();
        assert_eq!(work.len(), 2);
        assert!(work.iter().all(|t| t.category.as_deref() == Some("Work")));

        let home = tasks.fetch(TaskFilter::ByCategory("Home".to_string())).unwrap();
        assert_eq!(home.len(), 1);
        assert_eq!(home[0].title, "Buy milk");
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_clearing_filter_shows_all_tasks(_ctx: &mut FilterTestContext) {
        let db = Db::new().unwrap();
        seed(&db);

        let all = Tasks::new(&db).fetch(TaskFilter::All).unwrap();
        assert_eq!(all.len(), 3);

        // Storage order, not category order
        let titles: Vec<&str> = all.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Review PR", "Write report", "Buy milk"]);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_filter_unknown_category_matches_nothing(_ctx: &mut FilterTestContext) {
        let db = Db::new().unwrap();
        seed(&db);

        let none = Tasks::new(&db).fetch(TaskFilter::ByCategory("Nope".to_string())).unwrap();
        assert!(none.is_empty());
    }
}
