//! End-to-end accrual flow: completing tasks moves stats, unlocks
//! achievements, and advances the status tier.

use chrono::{Duration, Utc};
use std::sync::Arc;

use taskquest::gamification::types::UserStats;
use taskquest::storage::Database;
use taskquest::tasks::types::{Priority, Task};
use taskquest::TaskManager;

fn setup() -> (Arc<Database>, TaskManager) {
    let db = Arc::new(Database::open_in_memory().unwrap());
    let manager = TaskManager::new(Arc::clone(&db));
    manager.engine().initialize_catalog().unwrap();
    db.write_user_stats(&UserStats::new(Utc::now())).unwrap();
    (db, manager)
}

/// Shift the stored day markers back, simulating activity N days ago.
fn backdate(db: &Database, days: i64) {
    let mut stats = db.read_user_stats().unwrap().unwrap();
    stats.current_date -= Duration::days(days);
    stats.last_active_date -= Duration::days(days);
    db.write_user_stats(&stats).unwrap();
}

fn add_task(manager: &TaskManager, title: &str, priority: Priority) -> Task {
    let mut task = Task::new(title.to_string());
    task.priority = priority;
    manager.create_task(&task).unwrap();
    task
}

#[test]
fn test_first_day_of_use() {
    let (db, manager) = setup();

    let task = add_task(&manager, "Unpack", Priority::Low);
    let unlocked = manager.complete_task(task.id).unwrap();

    // First completion: daily count and streak start, first_task unlocks
    assert_eq!(unlocked.len(), 1);
    assert_eq!(unlocked[0].id, "first_task");

    let stats = db.read_user_stats().unwrap().unwrap();
    assert_eq!(stats.daily_task_count, 1);
    assert_eq!(stats.total_tasks_completed, 1);
    assert_eq!(stats.current_streak, 1);
    assert_eq!(stats.max_streak, 1);
    assert_eq!(
        stats.total_points,
        Priority::Low.points() + unlocked[0].points_reward
    );
}

#[test]
fn test_busy_day_unlocks_daily_achievement() {
    let (db, manager) = setup();

    let mut all_unlocked = Vec::new();
    for i in 0..5 {
        let task = add_task(&manager, &format!("Chore {}", i), Priority::Medium);
        all_unlocked.extend(manager.complete_task(task.id).unwrap());
    }

    let ids: Vec<_> = all_unlocked.iter().map(|a| a.id.as_str()).collect();
    assert!(ids.contains(&"first_task"));
    assert!(ids.contains(&"daily_5"));

    let stats = db.read_user_stats().unwrap().unwrap();
    assert_eq!(stats.daily_task_count, 5);
    // Same-day completions never move the streak past 1
    assert_eq!(stats.current_streak, 1);
}

#[test]
fn test_streak_across_days() {
    let (db, manager) = setup();

    let mut streak_unlock = None;
    for day in 0..3 {
        let task = add_task(&manager, &format!("Day {}", day), Priority::Medium);
        let unlocked = manager.complete_task(task.id).unwrap();
        streak_unlock = streak_unlock.or_else(|| {
            unlocked.into_iter().find(|a| a.id == "streak_3")
        });
        if day < 2 {
            backdate(&db, 1);
        }
    }

    let stats = db.read_user_stats().unwrap().unwrap();
    assert_eq!(stats.current_streak, 3);
    assert_eq!(stats.max_streak, 3);
    assert!(streak_unlock.is_some(), "streak_3 should unlock on day 3");
}

#[test]
fn test_missed_day_resets_streak_but_keeps_best() {
    let (db, manager) = setup();

    for day in 0..3 {
        let task = add_task(&manager, &format!("Day {}", day), Priority::Medium);
        manager.complete_task(task.id).unwrap();
        if day < 2 {
            backdate(&db, 1);
        }
    }
    assert_eq!(db.read_user_stats().unwrap().unwrap().current_streak, 3);

    // Two idle days
    backdate(&db, 2);
    let task = add_task(&manager, "Back again", Priority::Medium);
    manager.complete_task(task.id).unwrap();

    let stats = db.read_user_stats().unwrap().unwrap();
    assert_eq!(stats.current_streak, 1);
    assert_eq!(stats.max_streak, 3);
}

#[test]
fn test_fresh_day_after_idle_start() {
    // Stats created on day N with no activity; both completions land on
    // day N+1. The first starts the streak at 1, the second only bumps
    // the daily count.
    let (db, manager) = setup();
    backdate(&db, 1);

    let first = add_task(&manager, "One", Priority::Low);
    manager.complete_task(first.id).unwrap();

    let stats = db.read_user_stats().unwrap().unwrap();
    assert_eq!(stats.current_streak, 1);
    assert_eq!(stats.daily_task_count, 1);

    let second = add_task(&manager, "Two", Priority::Low);
    manager.complete_task(second.id).unwrap();

    let stats = db.read_user_stats().unwrap().unwrap();
    assert_eq!(stats.current_streak, 1);
    assert_eq!(stats.daily_task_count, 2);
}

#[test]
fn test_tier_advances_with_points() {
    let (db, manager) = setup();

    assert_eq!(manager.engine().current_status().unwrap().name, "Newcomer");

    // 5 high-priority tasks: 100 base points plus unlock bonuses
    for i in 0..5 {
        let task = add_task(&manager, &format!("Big {}", i), Priority::High);
        manager.complete_task(task.id).unwrap();
    }

    let stats = db.read_user_stats().unwrap().unwrap();
    assert!(stats.total_points >= 100);
    assert_eq!(manager.engine().current_status().unwrap().name, "Apprentice");
}

#[test]
fn test_unlocked_achievements_survive_further_activity() {
    let (_db, manager) = setup();

    let task = add_task(&manager, "First", Priority::Medium);
    manager.complete_task(task.id).unwrap();

    let catalog = manager.engine().achievements().unwrap();
    let first = catalog.iter().find(|a| a.id == "first_task").unwrap();
    assert!(first.is_unlocked);
    let unlocked_at = first.unlocked_at.unwrap();

    // More completions never re-unlock or restamp
    for i in 0..3 {
        let task = add_task(&manager, &format!("More {}", i), Priority::Medium);
        let unlocked = manager.complete_task(task.id).unwrap();
        assert!(unlocked.iter().all(|a| a.id != "first_task"));
    }

    let catalog = manager.engine().achievements().unwrap();
    let first = catalog.iter().find(|a| a.id == "first_task").unwrap();
    assert_eq!(first.unlocked_at.unwrap(), unlocked_at);
}
