//! Persistence across database reopens: tasks, stats, and unlocked
//! achievements all survive a process restart.

use std::sync::Arc;

use taskquest::storage::Database;
use taskquest::tasks::types::{Priority, Task};
use taskquest::TaskManager;

#[test]
fn test_state_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("taskquest.db");

    let pending_id;
    {
        let db = Arc::new(Database::open(&path).unwrap());
        let manager = TaskManager::new(Arc::clone(&db));
        manager.engine().initialize_catalog().unwrap();

        let mut done = Task::new("Ship it".to_string());
        done.priority = Priority::High;
        manager.create_task(&done).unwrap();

        let pending = Task::new("Later".to_string());
        manager.create_task(&pending).unwrap();
        pending_id = pending.id;

        // First call initializes the stats row, second accrues
        manager.engine().record_task_completion(0).unwrap();
        let unlocked = manager.complete_task(done.id).unwrap();
        assert!(unlocked.iter().any(|a| a.id == "first_task"));
    }

    let db = Arc::new(Database::open(&path).unwrap());
    let manager = TaskManager::new(Arc::clone(&db));
    // Re-seeding after reopen must not reset unlock state
    manager.engine().initialize_catalog().unwrap();

    let stats = db.read_user_stats().unwrap().unwrap();
    assert_eq!(stats.total_tasks_completed, 1);
    assert!(stats.total_points >= Priority::High.points());

    let first = db.get_achievement("first_task").unwrap().unwrap();
    assert!(first.is_unlocked);
    assert!(first.unlocked_at.is_some());

    let pending = manager.list_tasks(Some(false)).unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, pending_id);

    // Completing the carried-over task continues the same counters
    manager.complete_task(pending_id).unwrap();
    let stats = db.read_user_stats().unwrap().unwrap();
    assert_eq!(stats.total_tasks_completed, 2);
}
