use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::models::owner::OwnerId;

/// Represents the status of a task.
/// Corresponds to the `task_status` SQL enum.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, sqlx::Type)]
#[sqlx(type_name = "task_status", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Task is yet to be started.
    #[default]
    Todo,
    /// Task is currently being worked on.
    InProgress,
    /// Task is completed.
    Completed,
}

/// Input structure for creating a task.
#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct TaskInput {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,

    #[validate(required, length(min = 1))]
    pub description: Option<String>,

    /// The project the task belongs to. Not checked for existence.
    #[validate(required)]
    pub project: Option<Uuid>,

    /// Defaults to `todo` when absent.
    pub status: Option<TaskStatus>,
}

/// Partial update for a task. Absent fields are left untouched and present
/// text fields must not be empty; there is no way to change the owning user.
#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct TaskPatch {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub project: Option<Uuid>,
}

/// Represents a task entity as stored in the database and returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    #[sqlx(rename = "project_id")]
    pub project: Uuid,
    /// The owning user. Authorization is decided on this field alone.
    #[sqlx(rename = "user_id")]
    pub user: Uuid,
    /// Set when the task enters `completed`, cleared when it leaves it.
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new `Task` owned by `owner`, stamped with the current time.
    pub fn new(
        title: String,
        description: String,
        project: Uuid,
        status: TaskStatus,
        owner: Uuid,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            status,
            project,
            user: owner,
            completed_at: (status == TaskStatus::Completed).then_some(now),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn owner_id(&self) -> OwnerId {
        OwnerId::from(self.user)
    }

    /// Overwrites the fields present in `patch` and keeps `completed_at`
    /// consistent with the resulting status.
    pub fn apply(&mut self, patch: TaskPatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(project) = patch.project {
            self.project = project;
        }
        if let Some(status) = patch.status {
            match (self.status, status) {
                (TaskStatus::Completed, TaskStatus::Completed) => {}
                (_, TaskStatus::Completed) => self.completed_at = Some(now),
                _ => self.completed_at = None,
            }
            self.status = status;
        }
        self.updated_at = now;
    }
}
