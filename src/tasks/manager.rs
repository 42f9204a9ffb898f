//! Task and category management.
//!
//! CRUD over the task store plus the completion flow that feeds the
//! accrual engine.

use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use super::types::{Category, Task};
use crate::gamification::engine::{AccrualEngine, AccrualError};
use crate::gamification::types::Achievement;
use crate::storage::{Database, DatabaseError};

/// Manager for tasks and categories.
pub struct TaskManager {
    db: Arc<Database>,
    engine: AccrualEngine,
}

impl TaskManager {
    /// Create a new task manager sharing the accrual engine's database.
    pub fn new(db: Arc<Database>) -> Self {
        let engine = AccrualEngine::new(Arc::clone(&db));
        Self { db, engine }
    }

    /// Access the accrual engine backing this manager.
    pub fn engine(&self) -> &AccrualEngine {
        &self.engine
    }

    // ========== Tasks ==========

    /// Create a new task.
    pub fn create_task(&self, task: &Task) -> Result<(), TaskError> {
        if task.title.trim().is_empty() {
            return Err(TaskError::ValidationError(
                "Task title must not be empty".to_string(),
            ));
        }

        if let Some(category_id) = task.category_id {
            if self.db.get_category(&category_id)?.is_none() {
                return Err(TaskError::ValidationError(format!(
                    "Category {} does not exist",
                    category_id
                )));
            }
        }

        self.db.insert_task(task)?;
        tracing::debug!(task = %task.id, title = %task.title, "created task");
        Ok(())
    }

    /// Get a task by ID.
    pub fn get_task(&self, id: Uuid) -> Result<Option<Task>, TaskError> {
        Ok(self.db.get_task(&id)?)
    }

    /// List tasks, optionally filtered by completion state.
    pub fn list_tasks(&self, completed: Option<bool>) -> Result<Vec<Task>, TaskError> {
        Ok(self.db.list_tasks(completed)?)
    }

    /// Update a task's editable fields.
    pub fn update_task(&self, task: &Task) -> Result<(), TaskError> {
        if task.title.trim().is_empty() {
            return Err(TaskError::ValidationError(
                "Task title must not be empty".to_string(),
            ));
        }

        self.db.update_task(task)?;
        Ok(())
    }

    /// Delete a task.
    pub fn delete_task(&self, id: Uuid) -> Result<(), TaskError> {
        self.db.delete_task(&id)?;
        Ok(())
    }

    /// Complete a task and run the accrual engine.
    ///
    /// Returns the achievements this completion unlocked. Completing an
    /// already-completed task is a no-op that returns no unlocks, so a
    /// task can never be accrued twice.
    pub fn complete_task(&self, id: Uuid) -> Result<Vec<Achievement>, TaskError> {
        let mut task = self.db.get_task(&id)?.ok_or(TaskError::NotFound(id))?;

        if task.is_completed {
            return Ok(Vec::new());
        }

        task.is_completed = true;
        task.completed_at = Some(Utc::now());
        self.db.update_task(&task)?;

        let unlocked = self.engine.record_task_completion(task.priority.points())?;
        Ok(unlocked)
    }

    /// Reopen a completed task.
    ///
    /// Clears the completion state only; accrued points and stats are kept,
    /// and completing the task again accrues again.
    pub fn reopen_task(&self, id: Uuid) -> Result<(), TaskError> {
        let mut task = self.db.get_task(&id)?.ok_or(TaskError::NotFound(id))?;

        if !task.is_completed {
            return Ok(());
        }

        task.is_completed = false;
        task.completed_at = None;
        self.db.update_task(&task)?;
        Ok(())
    }

    // ========== Categories ==========

    /// Create a new category.
    pub fn create_category(&self, category: &Category) -> Result<(), TaskError> {
        if category.name.trim().is_empty() {
            return Err(TaskError::ValidationError(
                "Category name must not be empty".to_string(),
            ));
        }

        if !Category::validate_color(&category.color) {
            return Err(TaskError::ValidationError(format!(
                "Invalid color '{}', expected #RRGGBB",
                category.color
            )));
        }

        self.db.insert_category(category)?;
        Ok(())
    }

    /// List all categories.
    pub fn list_categories(&self) -> Result<Vec<Category>, TaskError> {
        Ok(self.db.list_categories()?)
    }

    /// Update a category.
    pub fn update_category(&self, category: &Category) -> Result<(), TaskError> {
        if !Category::validate_color(&category.color) {
            return Err(TaskError::ValidationError(format!(
                "Invalid color '{}', expected #RRGGBB",
                category.color
            )));
        }

        self.db.update_category(category)?;
        Ok(())
    }

    /// Delete a category, leaving its tasks uncategorized.
    pub fn delete_category(&self, id: Uuid) -> Result<(), TaskError> {
        self.db.delete_category(&id)?;
        Ok(())
    }

    /// List the tasks in a category.
    pub fn list_tasks_in_category(&self, category_id: Uuid) -> Result<Vec<Task>, TaskError> {
        Ok(self.db.list_tasks_in_category(&category_id)?)
    }
}

/// Task management errors.
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("Accrual error: {0}")]
    Accrual(#[from] AccrualError),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Task not found: {0}")]
    NotFound(Uuid),
}
