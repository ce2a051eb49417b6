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

    struct CategoryTestContext {
        _temp_dir: TempDir,
        _env_guard: MutexGuard<'static, ()>,
    }

    impl TestContext for CategoryTestContext {
        fn setup() -> Self {
            let env_guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            CategoryTestContext {
                _temp_dir: temp_dir,
                _env_guard: env_guard,
            }
        }
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_category_add_and_list(_ctx: &mut CategoryTestContext) {
        let db = Db::new().unwrap();
        let categories = Categories::new(&db);

        let work_id = categories.create(&Category::new("Work")).unwrap();
        assert!(work_id > 0);

        // Adding a category increases the count by one and it shows up in
        // the list
        let listed = categories.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "Work");

        // Storage order is preserved
        categories.create(&Category::new("Home")).unwrap();
        let listed = categories.list().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].title, "Work");
        assert_eq!(listed[1].title, "Home");
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_category_empty_title_rejected(_ctx: &mut CategoryTestContext) {
        let db = Db::new().unwrap();
        let categories = Categories::new(&db);

        assert!(categories.create(&Category::new("")).is_err());
        assert!(categories.create(&Category::new("  ")).is_err());
        assert_eq!(categories.list().unwrap().len(), 0);
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_category_duplicate_title_rejected(_ctx: &mut CategoryTestContext) {
        let db = Db::new().unwrap();
        let categories = Categories::new(&db);

        categories.create(&Category::new("Work")).unwrap();
        assert!(categories.create(&Category::new("Work")).is_err());
        assert_eq!(categories.list().unwrap().len(), 1);
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_category_lookup(_ctx: &mut CategoryTestContext) {
        let db = Db::new().unwrap();
        let categories = Categories::new(&db);

        let id = categories.create(&Category::new("Work")).unwrap();

        let by_title = categories.get_by_title("Work").unwrap().unwrap();
        assert_eq!(by_title.id, Some(id));

        let by_id = categories.get_by_id(id).unwrap().unwrap();
        assert_eq!(by_id.title, "Work");

        assert!(categories.get_by_title("Nope").unwrap().is_none());
        assert!(categories.get_by_id(999).unwrap().is_none());
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_category_delete_cascades_to_tasks(_ctx: &mut CategoryTestContext) {
        let db = Db::new().unwrap();
        let categories = Categories::new(&db);
        let tasks = Tasks::new(&db);

        let work_id = categories.create(&Category::new("Work")).unwrap();
        let home_id = categories.create(&Category::new("Home")).unwrap();

        tasks.insert(&Task::new("Review PR", None, work_id)).unwrap();
        tasks.insert(&Task::new("Write report", None, work_id)).unwrap();
        tasks.insert(&Task::new("Buy milk", None, home_id)).unwrap();

        assert_eq!(categories.task_count(work_id).unwrap(), 2);
        assert_eq!(categories.task_count(home_id).unwrap(), 1);

        // Deleting "Work" removes its two tasks with it
        categories.delete(work_id).unwrap();

        let listed = categories.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "Home");

        let remaining = tasks.fetch(TaskFilter::All).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].title, "Buy milk");
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_category_delete_unknown_is_error(_ctx: &mut CategoryTestContext) {
        let db = Db::new().unwrap();
        let categories = Categories::new(&db);

        assert!(categories.delete(42).is_err());
    }
}
