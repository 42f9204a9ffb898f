//! Core types for the gamification layer.
//!
//! Defines the user stats counters, achievements, and related enums.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cumulative user statistics. A single row, owned by the accrual engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStats {
    /// Tasks completed over the lifetime of the profile
    pub total_tasks_completed: u32,
    /// Points accrued from completions and achievement bonuses
    pub total_points: u32,
    /// Consecutive active days, counting today if active
    pub current_streak: u32,
    /// Longest streak ever reached
    pub max_streak: u32,
    /// Tasks completed on the day marked by `current_date`
    pub daily_task_count: u32,
    /// Day marker of the last recorded activity day
    pub current_date: DateTime<Utc>,
    /// Timestamp of the most recent completion
    pub last_active_date: DateTime<Utc>,
    /// Invite counter, maintained outside the accrual engine
    pub friends_invited: u32,
    /// Premium flag, maintained outside the accrual engine
    pub is_premium: bool,
}

impl UserStats {
    /// Create a zeroed stats row stamped with the given time.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            total_tasks_completed: 0,
            total_points: 0,
            current_streak: 0,
            max_streak: 0,
            daily_task_count: 0,
            current_date: now,
            last_active_date: now,
            friends_invited: 0,
            is_premium: false,
        }
    }

    /// Apply one task-completion event to the counters.
    ///
    /// Handles the day rollover: a completion on a new calendar day extends
    /// the streak when the day directly follows the stored marker day and
    /// resets it otherwise. Same-day completions only bump the daily count,
    /// except that the very first completion ever recorded also starts the
    /// streak at 1.
    pub fn apply_completion(&mut self, points_awarded: u32, now: DateTime<Utc>) {
        let today = now.date_naive();
        let marker_day = self.current_date.date_naive();

        if today != marker_day {
            let continues = marker_day.succ_opt() == Some(today);
            self.current_streak = if continues { self.current_streak + 1 } else { 1 };
            self.max_streak = self.max_streak.max(self.current_streak);
            self.daily_task_count = 1;
            self.current_date = now;
        } else {
            self.daily_task_count += 1;
            if self.current_streak == 0 {
                self.current_streak = 1;
                self.max_streak = self.max_streak.max(1);
            }
        }

        self.last_active_date = now;
        self.total_tasks_completed += 1;
        self.total_points += points_awarded;
    }
}

/// Metric an achievement's requirement is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementType {
    /// Consecutive active days
    StreakDays,
    /// Tasks completed within a single day
    DailyTasks,
    /// Lifetime task count
    TotalTasks,
    /// Friends invited
    InviteFriends,
    /// Premium purchase flag (requirement ignored)
    PremiumPurchase,
}

impl AchievementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementType::StreakDays => "streak_days",
            AchievementType::DailyTasks => "daily_tasks",
            AchievementType::TotalTasks => "total_tasks",
            AchievementType::InviteFriends => "invite_friends",
            AchievementType::PremiumPurchase => "premium_purchase",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "streak_days" => Some(AchievementType::StreakDays),
            "daily_tasks" => Some(AchievementType::DailyTasks),
            "total_tasks" => Some(AchievementType::TotalTasks),
            "invite_friends" => Some(AchievementType::InviteFriends),
            "premium_purchase" => Some(AchievementType::PremiumPurchase),
            _ => None,
        }
    }
}

/// Achievement definition with its unlock state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub points_reward: u32,
    pub achievement_type: AchievementType,
    pub requirement: u32,
    pub is_unlocked: bool,
    pub unlocked_at: Option<DateTime<Utc>>,
}

impl Achievement {
    /// Check whether the relevant stats metric satisfies the requirement.
    pub fn is_satisfied(&self, stats: &UserStats) -> bool {
        match self.achievement_type {
            AchievementType::StreakDays => stats.current_streak >= self.requirement,
            AchievementType::DailyTasks => stats.daily_task_count >= self.requirement,
            AchievementType::TotalTasks => stats.total_tasks_completed >= self.requirement,
            AchievementType::InviteFriends => stats.friends_invited >= self.requirement,
            AchievementType::PremiumPurchase => stats.is_premium,
        }
    }

    /// Current value of the metric this achievement tracks.
    pub fn progress(&self, stats: &UserStats) -> u32 {
        match self.achievement_type {
            AchievementType::StreakDays => stats.current_streak,
            AchievementType::DailyTasks => stats.daily_task_count,
            AchievementType::TotalTasks => stats.total_tasks_completed,
            AchievementType::InviteFriends => stats.friends_invited,
            AchievementType::PremiumPurchase => u32::from(stats.is_premium),
        }
    }
}

/// Default achievement catalog, seeded once into the database.
pub fn default_achievements() -> Vec<Achievement> {
    fn achievement(
        id: &str,
        name: &str,
        description: &str,
        icon: &str,
        points_reward: u32,
        achievement_type: AchievementType,
        requirement: u32,
    ) -> Achievement {
        Achievement {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            points_reward,
            achievement_type,
            requirement,
            is_unlocked: false,
            unlocked_at: None,
        }
    }

    vec![
        achievement(
            "first_task",
            "First Step",
            "Complete your first task",
            "✅",
            10,
            AchievementType::TotalTasks,
            1,
        ),
        achievement(
            "tasks_10",
            "Getting Things Done",
            "Complete 10 tasks",
            "📋",
            25,
            AchievementType::TotalTasks,
            10,
        ),
        achievement(
            "tasks_100",
            "Centurion",
            "Complete 100 tasks",
            "💯",
            100,
            AchievementType::TotalTasks,
            100,
        ),
        achievement(
            "tasks_1000",
            "Task Machine",
            "Complete 1000 tasks",
            "🏆",
            500,
            AchievementType::TotalTasks,
            1000,
        ),
        achievement(
            "daily_5",
            "Productive Day",
            "Complete 5 tasks in one day",
            "☀️",
            20,
            AchievementType::DailyTasks,
            5,
        ),
        achievement(
            "daily_10",
            "Unstoppable",
            "Complete 10 tasks in one day",
            "🚀",
            50,
            AchievementType::DailyTasks,
            10,
        ),
        achievement(
            "streak_3",
            "Warming Up",
            "Stay active 3 days in a row",
            "🔥",
            15,
            AchievementType::StreakDays,
            3,
        ),
        achievement(
            "streak_7",
            "Week Warrior",
            "Stay active 7 days in a row",
            "📅",
            50,
            AchievementType::StreakDays,
            7,
        ),
        achievement(
            "streak_30",
            "Habit Master",
            "Stay active 30 days in a row",
            "🌟",
            200,
            AchievementType::StreakDays,
            30,
        ),
        achievement(
            "invite_1",
            "Spread the Word",
            "Invite a friend",
            "✉️",
            25,
            AchievementType::InviteFriends,
            1,
        ),
        achievement(
            "invite_5",
            "Recruiter",
            "Invite 5 friends",
            "🤝",
            100,
            AchievementType::InviteFriends,
            5,
        ),
        achievement(
            "premium",
            "Supporter",
            "Go premium",
            "👑",
            50,
            AchievementType::PremiumPurchase,
            1,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at_day(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_same_day_increments_daily_count() {
        let start = at_day(10);
        let mut stats = UserStats::new(start);

        stats.apply_completion(5, start);
        assert_eq!(stats.daily_task_count, 1);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.total_points, 5);
        assert_eq!(stats.total_tasks_completed, 1);

        stats.apply_completion(10, start + Duration::hours(2));
        assert_eq!(stats.daily_task_count, 2);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.total_points, 15);
        assert_eq!(stats.total_tasks_completed, 2);
    }

    #[test]
    fn test_next_day_extends_streak() {
        let mut stats = UserStats::new(at_day(10));
        stats.apply_completion(5, at_day(10));
        stats.apply_completion(5, at_day(11));

        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.daily_task_count, 1);
    }

    #[test]
    fn test_gap_resets_streak() {
        let mut stats = UserStats::new(at_day(1));
        stats.apply_completion(5, at_day(1));
        stats.apply_completion(5, at_day(2));
        stats.apply_completion(5, at_day(3));
        assert_eq!(stats.current_streak, 3);

        stats.apply_completion(5, at_day(10));
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 3);
    }

    #[test]
    fn test_year_boundary_continues_streak() {
        let dec_31 = Utc.with_ymd_and_hms(2024, 12, 31, 23, 0, 0).unwrap();
        let jan_1 = Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap();

        let mut stats = UserStats::new(dec_31);
        stats.apply_completion(5, dec_31);
        stats.apply_completion(5, jan_1);

        assert_eq!(stats.current_streak, 2);
    }

    #[test]
    fn test_backwards_clock_resets_streak() {
        let mut stats = UserStats::new(at_day(10));
        stats.apply_completion(5, at_day(10));
        stats.apply_completion(5, at_day(11));
        assert_eq!(stats.current_streak, 2);

        stats.apply_completion(5, at_day(9));
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 2);
    }

    #[test]
    fn test_max_streak_never_below_current() {
        let mut stats = UserStats::new(at_day(1));
        for day in 1..=20 {
            stats.apply_completion(1, at_day(day));
            assert!(stats.max_streak >= stats.current_streak);
        }
        assert_eq!(stats.current_streak, 20);
        assert_eq!(stats.max_streak, 20);
    }

    #[test]
    fn test_satisfied_dispatch() {
        let mut stats = UserStats::new(at_day(1));
        stats.current_streak = 7;
        stats.daily_task_count = 3;
        stats.total_tasks_completed = 42;
        stats.friends_invited = 1;

        let catalog = default_achievements();

        let streak = &catalog[7]; // streak_7
        assert_eq!(streak.achievement_type, AchievementType::StreakDays);
        assert!(streak.is_satisfied(&stats));

        let daily = &catalog[4]; // daily_5
        assert!(!daily.is_satisfied(&stats));
        assert_eq!(daily.progress(&stats), 3);

        let premium = catalog.last().unwrap();
        assert_eq!(premium.achievement_type, AchievementType::PremiumPurchase);
        assert!(!premium.is_satisfied(&stats));
        stats.is_premium = true;
        assert!(premium.is_satisfied(&stats));
        assert_eq!(premium.progress(&stats), 1);
    }

    #[test]
    fn test_type_round_trip() {
        for ty in [
            AchievementType::StreakDays,
            AchievementType::DailyTasks,
            AchievementType::TotalTasks,
            AchievementType::InviteFriends,
            AchievementType::PremiumPurchase,
        ] {
            assert_eq!(AchievementType::from_str(ty.as_str()), Some(ty));
        }
        assert_eq!(AchievementType::from_str("nope"), None);
    }

    #[test]
    fn test_default_catalog_ids_unique() {
        let catalog = default_achievements();
        let mut ids: Vec<_> = catalog.iter().map(|a| a.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
        assert!(catalog.iter().all(|a| !a.is_unlocked && a.unlocked_at.is_none()));
    }
}
