#[cfg(test)]
mod tests {
    use std::sync::{Mutex, MutexGuard};
    use taskboard::db::db::Db;
    use taskboard::db::migrations::{get_db_version, needs_migration, MigrationManager};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // Tests in this binary redirect HOME/LOCALAPPDATA, so they must not
    // overlap.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct MigrationTestContext {
        _temp_dir: TempDir,
        _env_guard: MutexGuard<'static, ()>,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            let env_guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            MigrationTestContext {
                _temp_dir: temp_dir,
                _env_guard: env_guard,
            }
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_run_automatically(_ctx: &mut MigrationTestContext) {
        // Creating the handle runs all migrations
        let db = Db::new().unwrap();

        let version = get_db_version(&db.conn).unwrap();
        assert!(version > 0);
        assert!(!needs_migration(&db.conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_history(_ctx: &mut MigrationTestContext) {
        let mut conn = Db::new_without_migrations().unwrap();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();

        let history = manager.get_migration_history(&conn).unwrap();
        assert!(!history.is_empty());

        // Migrations are recorded in order, starting at version 1
        for (index, entry) in history.iter().enumerate() {
            assert_eq!(entry.0 as usize, index + 1);
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_idempotency(_ctx: &mut MigrationTestContext) {
        let mut conn = Db::new_without_migrations().unwrap();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();
        let version = get_db_version(&conn).unwrap();

        // Running again applies nothing and keeps the version
        manager.run_migrations(&mut conn).unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), version);
        assert!(!needs_migration(&conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_fresh_database_reports_version_zero(_ctx: &mut MigrationTestContext) {
        let conn = Db::new_without_migrations().unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), 0);
        assert!(needs_migration(&conn).unwrap());
    }
}
