//! Persistence seam for users, projects and tasks.
//!
//! Controllers only talk to [`Store`]. [`PgStore`] is the production backend;
//! [`MemoryStore`] keeps the same semantics in process and backs the test suite
//! and `DATABASE_URL=memory://` runs.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{NewUser, Project, Task, User};

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[async_trait]
pub trait Store: Send + Sync {
    /// Persists a new account. A taken email yields `AppError::Conflict`.
    async fn insert_user(&self, user: NewUser) -> Result<User, AppError>;
    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, AppError>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    async fn insert_project(&self, project: Project) -> Result<Project, AppError>;
    async fn find_project(&self, id: Uuid) -> Result<Option<Project>, AppError>;
    /// Projects owned by `owner`, oldest first.
    async fn list_projects(&self, owner: Uuid) -> Result<Vec<Project>, AppError>;
    /// Overwrites the stored record with the same id. `None` if it vanished.
    async fn save_project(&self, project: &Project) -> Result<Option<Project>, AppError>;
    /// Removes and returns the record, `None` if it did not exist.
    async fn delete_project(&self, id: Uuid) -> Result<Option<Project>, AppError>;

    async fn insert_task(&self, task: Task) -> Result<Task, AppError>;
    async fn find_task(&self, id: Uuid) -> Result<Option<Task>, AppError>;
    /// Tasks owned by `owner`, oldest first.
    async fn list_tasks(&self, owner: Uuid) -> Result<Vec<Task>, AppError>;
    async fn save_task(&self, task: &Task) -> Result<Option<Task>, AppError>;
    async fn delete_task(&self, id: Uuid) -> Result<Option<Task>, AppError>;
}

/// Message for a sign-up whose email is taken.
pub const DUPLICATE_USER_MESSAGE: &str = "User already exists";
