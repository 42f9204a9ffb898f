//! Points and achievement accrual.
//!
//! Applies task-completion events to the user stats row and reports which
//! achievements each event unlocked.

use chrono::Utc;
use std::sync::Arc;

use super::status::{status_for, StatusTier};
use super::types::{default_achievements, Achievement, UserStats};
use crate::storage::{Database, DatabaseError};

/// Accrual engine over the stats row and the achievement catalog.
pub struct AccrualEngine {
    db: Arc<Database>,
}

impl AccrualEngine {
    /// Create a new accrual engine.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Seed the default achievement catalog if not present.
    pub fn initialize_catalog(&self) -> Result<(), AccrualError> {
        self.db.seed_achievements(&default_achievements())?;
        Ok(())
    }

    /// Apply one task-completion event and return newly unlocked achievements.
    ///
    /// Updates the counters (including the day/streak rollover), persists the
    /// stats, then evaluates every locked achievement against the before and
    /// after snapshots. Each achievement that crossed its threshold is marked
    /// unlocked and its bonus accumulated; the bonus lands on the stored
    /// point total in a second write, separate from the base award.
    ///
    /// If the stats row is missing it is re-created with zeroed counters and
    /// the call reports no unlocks.
    pub fn record_task_completion(
        &self,
        points_awarded: u32,
    ) -> Result<Vec<Achievement>, AccrualError> {
        let before = match self.db.read_user_stats()? {
            Some(stats) => stats,
            None => {
                tracing::warn!("user stats row missing, reinitializing with defaults");
                let stats = UserStats::new(Utc::now());
                self.db.write_user_stats(&stats)?;
                return Ok(Vec::new());
            }
        };

        let now = Utc::now();
        let mut after = before.clone();
        after.apply_completion(points_awarded, now);
        self.db.write_user_stats(&after)?;

        tracing::debug!(
            points_awarded,
            total_points = after.total_points,
            streak = after.current_streak,
            "recorded task completion"
        );

        self.evaluate_and_unlock(&before, after)
    }

    /// Unlock every locked achievement whose metric crossed its threshold
    /// between the two snapshots, then apply the accumulated bonus to the
    /// stored point total as a separate write.
    fn evaluate_and_unlock(
        &self,
        before: &UserStats,
        mut after: UserStats,
    ) -> Result<Vec<Achievement>, AccrualError> {
        let now = Utc::now();
        let mut newly_unlocked = Vec::new();
        let mut bonus = 0u32;

        for mut achievement in self.db.list_achievements()? {
            if achievement.is_unlocked {
                continue;
            }

            let was_completed = achievement.is_satisfied(before);
            let is_now_completed = achievement.is_satisfied(&after);

            if !was_completed && is_now_completed {
                // Best-effort: a failed mark is skipped, earlier marks stand.
                if let Err(e) = self.db.mark_achievement_unlocked(&achievement.id, now) {
                    tracing::warn!(
                        achievement = %achievement.id,
                        error = %e,
                        "failed to persist achievement unlock, skipping"
                    );
                    continue;
                }

                achievement.is_unlocked = true;
                achievement.unlocked_at = Some(now);
                bonus += achievement.points_reward;

                tracing::info!(
                    achievement = %achievement.id,
                    reward = achievement.points_reward,
                    "achievement unlocked"
                );

                newly_unlocked.push(achievement);
            }
        }

        if bonus > 0 {
            after.total_points += bonus;
            self.db.write_user_stats(&after)?;
        }

        Ok(newly_unlocked)
    }

    /// List the full achievement catalog, locked and unlocked.
    pub fn achievements(&self) -> Result<Vec<Achievement>, AccrualError> {
        Ok(self.db.list_achievements()?)
    }

    /// Read the current stats snapshot for display. Never mutates.
    pub fn user_stats(&self) -> Result<Option<UserStats>, AccrualError> {
        Ok(self.db.read_user_stats()?)
    }

    /// Current value of the metric an achievement tracks, without mutation.
    pub fn current_progress(&self, achievement_id: &str) -> Result<u32, AccrualError> {
        let achievement = self
            .db
            .get_achievement(achievement_id)?
            .ok_or_else(|| AccrualError::AchievementNotFound(achievement_id.to_string()))?;

        let stats = self.db.read_user_stats()?;
        Ok(stats
            .map(|stats| achievement.progress(&stats))
            .unwrap_or(0))
    }

    /// Status tier for the current point total.
    pub fn current_status(&self) -> Result<&'static StatusTier, AccrualError> {
        let points = self
            .db
            .read_user_stats()?
            .map(|stats| stats.total_points)
            .unwrap_or(0);
        Ok(status_for(points))
    }

    /// Record a friend invitation and unlock any invite achievement the new
    /// count satisfies. The engine otherwise treats this counter as
    /// read-only; completion events never move it.
    pub fn record_friend_invited(&self) -> Result<Vec<Achievement>, AccrualError> {
        let before = self.stats_or_default()?;
        let mut after = before.clone();
        after.friends_invited += 1;
        self.db.write_user_stats(&after)?;

        self.evaluate_and_unlock(&before, after)
    }

    /// Set the premium flag and unlock the premium achievement when the
    /// flag turns on.
    pub fn set_premium(&self, is_premium: bool) -> Result<Vec<Achievement>, AccrualError> {
        let before = self.stats_or_default()?;
        let mut after = before.clone();
        after.is_premium = is_premium;
        self.db.write_user_stats(&after)?;

        self.evaluate_and_unlock(&before, after)
    }

    fn stats_or_default(&self) -> Result<UserStats, AccrualError> {
        Ok(self
            .db
            .read_user_stats()?
            .unwrap_or_else(|| UserStats::new(Utc::now())))
    }
}

/// Accrual errors.
#[derive(Debug, thiserror::Error)]
pub enum AccrualError {
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("Achievement not found: {0}")]
    AchievementNotFound(String),
}
