//! TaskQuest - Local-first to-do tracker with gamification.
//!
//! A to-do/task-management core with a lightweight gamification layer:
//! completing tasks accrues points, maintains a daily streak, and unlocks
//! achievements with one-time point bonuses. Cumulative points map to
//! status tiers and gate a set of UI themes. All data lives in a local
//! SQLite database.

pub mod gamification;
pub mod storage;
pub mod tasks;

// Re-export commonly used types
pub use gamification::engine::AccrualEngine;
pub use gamification::status::{status_for, unlocked_themes};
pub use gamification::types::{Achievement, UserStats};
pub use storage::{AppConfig, Database};
pub use tasks::manager::TaskManager;
pub use tasks::types::{Category, Priority, Task};
