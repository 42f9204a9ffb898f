//! Database operations using rusqlite.
//!
//! Wraps a single SQLite connection and exposes CRUD for tasks and
//! categories, the singleton user-stats row, and the achievement catalog.

use crate::gamification::types::{Achievement, AchievementType, UserStats};
use crate::storage::schema::{CURRENT_VERSION, SCHEMA, SCHEMA_VERSION_TABLE};
use crate::tasks::types::{Category, Priority, Task};
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection, Result as SqliteResult};
use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

/// Database wrapper for SQLite operations.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create a database at the given path.
    pub fn open(path: &PathBuf) -> Result<Self, DatabaseError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| DatabaseError::IoError(e.to_string()))?;
        }

        let conn =
            Connection::open(path).map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

        let db = Self { conn };
        db.initialize()?;

        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, DatabaseError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

        let db = Self { conn };
        db.initialize()?;

        Ok(db)
    }

    /// Initialize the database schema.
    fn initialize(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(SCHEMA_VERSION_TABLE)
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;

        let current_version = self.get_schema_version()?;

        if current_version < CURRENT_VERSION {
            self.migrate(current_version)?;
        }

        Ok(())
    }

    /// Get the current schema version.
    fn get_schema_version(&self) -> Result<i32, DatabaseError> {
        let result: SqliteResult<i32> = self.conn.query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_version",
            [],
            |row| row.get(0),
        );

        match result {
            Ok(version) => Ok(version),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
            Err(e) => Err(DatabaseError::QueryFailed(e.to_string())),
        }
    }

    /// Run database migrations.
    fn migrate(&self, from_version: i32) -> Result<(), DatabaseError> {
        if from_version < 1 {
            self.conn
                .execute_batch(SCHEMA)
                .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;

            self.conn
                .execute(
                    "INSERT INTO schema_version (version, applied_at) VALUES (?, datetime('now'))",
                    [CURRENT_VERSION],
                )
                .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;

            tracing::info!("Database migrated to version {}", CURRENT_VERSION);
        }

        Ok(())
    }

    /// Get a reference to the underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    // ========== Category CRUD Operations ==========

    /// Insert a new category into the database.
    pub fn insert_category(&self, category: &Category) -> Result<(), DatabaseError> {
        self.conn
            .execute(
                "INSERT INTO categories (id, name, color, created_at) VALUES (?1, ?2, ?3, ?4)",
                params![
                    category.id.to_string(),
                    category.name,
                    category.color,
                    category.created_at.to_rfc3339(),
                ],
            )
            .map_err(|e| match e {
                rusqlite::Error::SqliteFailure(err, _)
                    if err.code == rusqlite::ErrorCode::ConstraintViolation =>
                {
                    DatabaseError::ConstraintViolation(format!(
                        "Category name '{}' already exists",
                        category.name
                    ))
                }
                _ => DatabaseError::QueryFailed(e.to_string()),
            })?;

        Ok(())
    }

    /// Get a category by ID.
    pub fn get_category(&self, id: &Uuid) -> Result<Option<Category>, DatabaseError> {
        let result = self.conn.query_row(
            "SELECT id, name, color, created_at FROM categories WHERE id = ?1",
            params![id.to_string()],
            |row| {
                Ok(CategoryRow {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    color: row.get(2)?,
                    created_at: row.get(3)?,
                })
            },
        );

        match result {
            Ok(row) => Ok(Some(row.into_category()?)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(DatabaseError::QueryFailed(e.to_string())),
        }
    }

    /// Get all categories ordered by name.
    pub fn list_categories(&self) -> Result<Vec<Category>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, color, created_at FROM categories ORDER BY name ASC")
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| {
                Ok(CategoryRow {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    color: row.get(2)?,
                    created_at: row.get(3)?,
                })
            })
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let mut categories = Vec::new();
        for row in rows {
            let row = row.map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
            categories.push(row.into_category()?);
        }

        Ok(categories)
    }

    /// Update an existing category.
    pub fn update_category(&self, category: &Category) -> Result<(), DatabaseError> {
        let rows_affected = self
            .conn
            .execute(
                "UPDATE categories SET name = ?2, color = ?3 WHERE id = ?1",
                params![category.id.to_string(), category.name, category.color],
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        if rows_affected == 0 {
            return Err(DatabaseError::NotFound(format!(
                "Category {}",
                category.id
            )));
        }

        Ok(())
    }

    /// Delete a category by ID. Tasks keep existing with no category.
    pub fn delete_category(&self, id: &Uuid) -> Result<(), DatabaseError> {
        // ON DELETE SET NULL only fires with foreign keys enforced
        self.conn
            .execute(
                "UPDATE tasks SET category_id = NULL WHERE category_id = ?1",
                params![id.to_string()],
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let rows_affected = self
            .conn
            .execute(
                "DELETE FROM categories WHERE id = ?1",
                params![id.to_string()],
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        if rows_affected == 0 {
            return Err(DatabaseError::NotFound(format!("Category {}", id)));
        }

        Ok(())
    }

    // ========== Task CRUD Operations ==========

    /// Insert a new task into the database.
    pub fn insert_task(&self, task: &Task) -> Result<(), DatabaseError> {
        self.conn
            .execute(
                "INSERT INTO tasks (id, title, notes, category_id, priority, due_date,
                 is_completed, completed_at, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    task.id.to_string(),
                    task.title,
                    task.notes,
                    task.category_id.map(|id| id.to_string()),
                    task.priority.as_str(),
                    task.due_date.map(|d| d.to_string()),
                    task.is_completed as i32,
                    task.completed_at.map(|dt| dt.to_rfc3339()),
                    task.created_at.to_rfc3339(),
                ],
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        Ok(())
    }

    /// Get a task by ID.
    pub fn get_task(&self, id: &Uuid) -> Result<Option<Task>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, title, notes, category_id, priority, due_date,
                 is_completed, completed_at, created_at FROM tasks WHERE id = ?1",
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let result = stmt.query_row(params![id.to_string()], map_task_row);

        match result {
            Ok(row) => Ok(Some(row.into_task()?)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(DatabaseError::QueryFailed(e.to_string())),
        }
    }

    /// List tasks, optionally filtered by completion state.
    ///
    /// Pending tasks sort by due date (soonest first, undated last), then
    /// creation time; completed tasks sort by completion time descending.
    pub fn list_tasks(&self, completed: Option<bool>) -> Result<Vec<Task>, DatabaseError> {
        let sql = match completed {
            Some(false) => {
                "SELECT id, title, notes, category_id, priority, due_date,
                 is_completed, completed_at, created_at FROM tasks
                 WHERE is_completed = 0
                 ORDER BY due_date IS NULL, due_date ASC, created_at ASC"
            }
            Some(true) => {
                "SELECT id, title, notes, category_id, priority, due_date,
                 is_completed, completed_at, created_at FROM tasks
                 WHERE is_completed = 1
                 ORDER BY completed_at DESC"
            }
            None => {
                "SELECT id, title, notes, category_id, priority, due_date,
                 is_completed, completed_at, created_at FROM tasks
                 ORDER BY is_completed ASC, created_at ASC"
            }
        };

        let mut stmt = self
            .conn
            .prepare(sql)
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let rows = stmt
            .query_map([], map_task_row)
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let mut tasks = Vec::new();
        for row in rows {
            let row = row.map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
            tasks.push(row.into_task()?);
        }

        Ok(tasks)
    }

    /// List tasks belonging to a category.
    pub fn list_tasks_in_category(&self, category_id: &Uuid) -> Result<Vec<Task>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, title, notes, category_id, priority, due_date,
                 is_completed, completed_at, created_at FROM tasks
                 WHERE category_id = ?1
                 ORDER BY is_completed ASC, created_at ASC",
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let rows = stmt
            .query_map(params![category_id.to_string()], map_task_row)
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let mut tasks = Vec::new();
        for row in rows {
            let row = row.map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
            tasks.push(row.into_task()?);
        }

        Ok(tasks)
    }

    /// List tasks due on a specific calendar day.
    pub fn list_tasks_due_on(&self, day: NaiveDate) -> Result<Vec<Task>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, title, notes, category_id, priority, due_date,
                 is_completed, completed_at, created_at FROM tasks
                 WHERE due_date = ?1
                 ORDER BY is_completed ASC, created_at ASC",
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let rows = stmt
            .query_map(params![day.to_string()], map_task_row)
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let mut tasks = Vec::new();
        for row in rows {
            let row = row.map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
            tasks.push(row.into_task()?);
        }

        Ok(tasks)
    }

    /// Update an existing task.
    pub fn update_task(&self, task: &Task) -> Result<(), DatabaseError> {
        let rows_affected = self
            .conn
            .execute(
                "UPDATE tasks SET title = ?2, notes = ?3, category_id = ?4, priority = ?5,
                 due_date = ?6, is_completed = ?7, completed_at = ?8 WHERE id = ?1",
                params![
                    task.id.to_string(),
                    task.title,
                    task.notes,
                    task.category_id.map(|id| id.to_string()),
                    task.priority.as_str(),
                    task.due_date.map(|d| d.to_string()),
                    task.is_completed as i32,
                    task.completed_at.map(|dt| dt.to_rfc3339()),
                ],
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        if rows_affected == 0 {
            return Err(DatabaseError::NotFound(format!("Task {}", task.id)));
        }

        Ok(())
    }

    /// Delete a task by ID.
    pub fn delete_task(&self, id: &Uuid) -> Result<(), DatabaseError> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM tasks WHERE id = ?1", params![id.to_string()])
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        if rows_affected == 0 {
            return Err(DatabaseError::NotFound(format!("Task {}", id)));
        }

        Ok(())
    }

    /// Count tasks, optionally filtered by completion state.
    pub fn count_tasks(&self, completed: Option<bool>) -> Result<usize, DatabaseError> {
        let count: i64 = match completed {
            Some(flag) => self
                .conn
                .query_row(
                    "SELECT COUNT(*) FROM tasks WHERE is_completed = ?1",
                    params![flag as i32],
                    |row| row.get(0),
                )
                .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?,
            None => self
                .conn
                .query_row("SELECT COUNT(*) FROM tasks", [], |row| row.get(0))
                .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?,
        };

        Ok(count as usize)
    }

    // ========== User Stats Operations ==========

    /// Read the singleton user-stats row.
    pub fn read_user_stats(&self) -> Result<Option<UserStats>, DatabaseError> {
        let result = self.conn.query_row(
            "SELECT total_tasks_completed, total_points, current_streak, max_streak,
             daily_task_count, active_day, last_active_at, friends_invited, is_premium
             FROM user_stats WHERE id = 1",
            [],
            |row| {
                Ok(UserStatsRow {
                    total_tasks_completed: row.get(0)?,
                    total_points: row.get(1)?,
                    current_streak: row.get(2)?,
                    max_streak: row.get(3)?,
                    daily_task_count: row.get(4)?,
                    active_day: row.get(5)?,
                    last_active_at: row.get(6)?,
                    friends_invited: row.get(7)?,
                    is_premium: row.get(8)?,
                })
            },
        );

        match result {
            Ok(row) => Ok(Some(row.into_user_stats()?)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(DatabaseError::QueryFailed(e.to_string())),
        }
    }

    /// Write the singleton user-stats row, replacing any existing snapshot.
    ///
    /// A single statement, so concurrent readers observe either the old or
    /// the new snapshot, never a partial one.
    pub fn write_user_stats(&self, stats: &UserStats) -> Result<(), DatabaseError> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO user_stats
                 (id, total_tasks_completed, total_points, current_streak, max_streak,
                  daily_task_count, active_day, last_active_at, friends_invited, is_premium)
                 VALUES (1, ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    stats.total_tasks_completed,
                    stats.total_points,
                    stats.current_streak,
                    stats.max_streak,
                    stats.daily_task_count,
                    stats.current_date.to_rfc3339(),
                    stats.last_active_date.to_rfc3339(),
                    stats.friends_invited,
                    stats.is_premium as i32,
                ],
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        Ok(())
    }

    // ========== Achievement Operations ==========

    /// Seed achievement definitions if not present.
    pub fn seed_achievements(&self, achievements: &[Achievement]) -> Result<(), DatabaseError> {
        for achievement in achievements {
            self.conn
                .execute(
                    "INSERT OR IGNORE INTO achievements
                     (id, name, description, icon, points_reward, achievement_type, requirement,
                      is_unlocked, unlocked_at)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                    params![
                        achievement.id,
                        achievement.name,
                        achievement.description,
                        achievement.icon,
                        achievement.points_reward,
                        achievement.achievement_type.as_str(),
                        achievement.requirement,
                        achievement.is_unlocked as i32,
                        achievement.unlocked_at.map(|dt| dt.to_rfc3339()),
                    ],
                )
                .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
        }

        Ok(())
    }

    /// Get all achievements, locked and unlocked.
    pub fn list_achievements(&self) -> Result<Vec<Achievement>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, name, description, icon, points_reward, achievement_type,
                 requirement, is_unlocked, unlocked_at FROM achievements",
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let rows = stmt
            .query_map([], map_achievement_row)
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let mut achievements = Vec::new();
        for row in rows {
            let row = row.map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
            achievements.push(row.into_achievement()?);
        }

        Ok(achievements)
    }

    /// Get a single achievement by ID.
    pub fn get_achievement(&self, id: &str) -> Result<Option<Achievement>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, name, description, icon, points_reward, achievement_type,
                 requirement, is_unlocked, unlocked_at FROM achievements WHERE id = ?1",
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let result = stmt.query_row(params![id], map_achievement_row);

        match result {
            Ok(row) => Ok(Some(row.into_achievement()?)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(DatabaseError::QueryFailed(e.to_string())),
        }
    }

    /// Flip an achievement to unlocked. The transition is one-way.
    pub fn mark_achievement_unlocked(
        &self,
        id: &str,
        unlocked_at: DateTime<Utc>,
    ) -> Result<(), DatabaseError> {
        let rows_affected = self
            .conn
            .execute(
                "UPDATE achievements SET is_unlocked = 1, unlocked_at = ?2
                 WHERE id = ?1 AND is_unlocked = 0",
                params![id, unlocked_at.to_rfc3339()],
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        if rows_affected == 0 {
            return Err(DatabaseError::NotFound(format!("Achievement {}", id)));
        }

        Ok(())
    }
}

/// Map a task row without consuming the statement helpers.
fn map_task_row(row: &rusqlite::Row) -> rusqlite::Result<TaskRow> {
    Ok(TaskRow {
        id: row.get(0)?,
        title: row.get(1)?,
        notes: row.get(2)?,
        category_id: row.get(3)?,
        priority: row.get(4)?,
        due_date: row.get(5)?,
        is_completed: row.get(6)?,
        completed_at: row.get(7)?,
        created_at: row.get(8)?,
    })
}

/// Map an achievement row.
fn map_achievement_row(row: &rusqlite::Row) -> rusqlite::Result<AchievementRow> {
    Ok(AchievementRow {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        icon: row.get(3)?,
        points_reward: row.get(4)?,
        achievement_type: row.get(5)?,
        requirement: row.get(6)?,
        is_unlocked: row.get(7)?,
        unlocked_at: row.get(8)?,
    })
}

/// Intermediate struct for reading category rows from database.
struct CategoryRow {
    id: String,
    name: String,
    color: String,
    created_at: String,
}

impl CategoryRow {
    fn into_category(self) -> Result<Category, DatabaseError> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| DatabaseError::DeserializationError(format!("Invalid UUID: {}", e)))?;

        let created_at = parse_timestamp(&self.created_at, "created_at")?;

        Ok(Category {
            id,
            name: self.name,
            color: self.color,
            created_at,
        })
    }
}

/// Intermediate struct for reading task rows from database.
struct TaskRow {
    id: String,
    title: String,
    notes: Option<String>,
    category_id: Option<String>,
    priority: String,
    due_date: Option<String>,
    is_completed: i32,
    completed_at: Option<String>,
    created_at: String,
}

impl TaskRow {
    fn into_task(self) -> Result<Task, DatabaseError> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| DatabaseError::DeserializationError(format!("Invalid UUID: {}", e)))?;

        let category_id = self
            .category_id
            .map(|s| Uuid::parse_str(&s))
            .transpose()
            .map_err(|e| {
                DatabaseError::DeserializationError(format!("Invalid category UUID: {}", e))
            })?;

        let priority = Priority::from_str(&self.priority).ok_or_else(|| {
            DatabaseError::DeserializationError(format!("Unknown priority: {}", self.priority))
        })?;

        let due_date = self
            .due_date
            .map(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d"))
            .transpose()
            .map_err(|e| DatabaseError::DeserializationError(format!("Invalid due date: {}", e)))?;

        let completed_at = self
            .completed_at
            .map(|s| parse_timestamp(&s, "completed_at"))
            .transpose()?;

        let created_at = parse_timestamp(&self.created_at, "created_at")?;

        Ok(Task {
            id,
            title: self.title,
            notes: self.notes,
            category_id,
            priority,
            due_date,
            is_completed: self.is_completed != 0,
            completed_at,
            created_at,
        })
    }
}

/// Intermediate struct for reading the user-stats row from database.
struct UserStatsRow {
    total_tasks_completed: u32,
    total_points: u32,
    current_streak: u32,
    max_streak: u32,
    daily_task_count: u32,
    active_day: String,
    last_active_at: String,
    friends_invited: u32,
    is_premium: i32,
}

impl UserStatsRow {
    fn into_user_stats(self) -> Result<UserStats, DatabaseError> {
        let current_date = parse_timestamp(&self.active_day, "active_day")?;
        let last_active_date = parse_timestamp(&self.last_active_at, "last_active_at")?;

        Ok(UserStats {
            total_tasks_completed: self.total_tasks_completed,
            total_points: self.total_points,
            current_streak: self.current_streak,
            max_streak: self.max_streak,
            daily_task_count: self.daily_task_count,
            current_date,
            last_active_date,
            friends_invited: self.friends_invited,
            is_premium: self.is_premium != 0,
        })
    }
}

/// Intermediate struct for reading achievement rows from database.
struct AchievementRow {
    id: String,
    name: String,
    description: String,
    icon: String,
    points_reward: u32,
    achievement_type: String,
    requirement: u32,
    is_unlocked: i32,
    unlocked_at: Option<String>,
}

impl AchievementRow {
    fn into_achievement(self) -> Result<Achievement, DatabaseError> {
        let achievement_type =
            AchievementType::from_str(&self.achievement_type).ok_or_else(|| {
                DatabaseError::DeserializationError(format!(
                    "Unknown achievement type: {}",
                    self.achievement_type
                ))
            })?;

        let unlocked_at = self
            .unlocked_at
            .map(|s| parse_timestamp(&s, "unlocked_at"))
            .transpose()?;

        Ok(Achievement {
            id: self.id,
            name: self.name,
            description: self.description,
            icon: self.icon,
            points_reward: self.points_reward,
            achievement_type,
            requirement: self.requirement,
            is_unlocked: self.is_unlocked != 0,
            unlocked_at,
        })
    }
}

/// Parse an RFC 3339 timestamp column.
fn parse_timestamp(value: &str, column: &str) -> Result<DateTime<Utc>, DatabaseError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DatabaseError::DeserializationError(format!("Invalid {}: {}", column, e)))
}

/// Database errors.
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}
