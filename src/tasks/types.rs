//! Task and category type definitions.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task priority. Determines the base points awarded on completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Low effort, low reward
    Low,
    /// Default priority
    #[default]
    Medium,
    /// High effort, high reward
    High,
}

impl Priority {
    /// Base points credited when a task of this priority is completed.
    pub fn points(&self) -> u32 {
        match self {
            Priority::Low => 5,
            Priority::Medium => 10,
            Priority::High => 20,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "Low"),
            Priority::Medium => write!(f, "Medium"),
            Priority::High => write!(f, "High"),
        }
    }
}

/// A to-do item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: Uuid,
    /// Display title
    pub title: String,
    /// Optional free-form notes
    pub notes: Option<String>,
    /// Owning category, if any
    pub category_id: Option<Uuid>,
    /// Priority, drives the completion reward
    pub priority: Priority,
    /// Optional due day
    pub due_date: Option<NaiveDate>,
    /// Completion state
    pub is_completed: bool,
    /// When the task was completed
    pub completed_at: Option<DateTime<Utc>>,
    /// When the task was created
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a new pending task with default priority.
    pub fn new(title: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            notes: None,
            category_id: None,
            priority: Priority::default(),
            due_date: None,
            is_completed: false,
            completed_at: None,
            created_at: Utc::now(),
        }
    }

    /// Check whether the task is past its due date.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.is_completed && self.due_date.map(|due| due < today).unwrap_or(false)
    }
}

/// A user-defined task category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: Uuid,
    /// Display name, unique per database
    pub name: String,
    /// Display color as a #RRGGBB hex string
    pub color: String,
    /// When the category was created
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// Create a new category.
    pub fn new(name: String, color: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            color,
            created_at: Utc::now(),
        }
    }

    /// Validate a #RRGGBB hex color string.
    pub fn validate_color(color: &str) -> bool {
        color.len() == 7
            && color.starts_with('#')
            && color[1..].chars().all(|c| c.is_ascii_hexdigit())
    }
}
