use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Store, DUPLICATE_USER_MESSAGE};
use crate::error::AppError;
use crate::models::{NewUser, Project, Task, User};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    projects: Vec<Project>,
    tasks: Vec<Task>,
}

/// An in-process store. Records keep insertion order.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn replace<T: Clone>(rows: &mut [T], updated: &T, same: impl Fn(&T) -> bool) -> Option<T> {
    let slot = rows.iter_mut().find(|row| same(row))?;
    *slot = updated.clone();
    Some(updated.clone())
}

fn take<T>(rows: &mut Vec<T>, same: impl Fn(&T) -> bool) -> Option<T> {
    let index = rows.iter().position(same)?;
    Some(rows.remove(index))
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_user(&self, user: NewUser) -> Result<User, AppError> {
        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|u| u.email == user.email()) {
            return Err(AppError::Conflict(DUPLICATE_USER_MESSAGE.into()));
        }
        let user = user.into_user(Utc::now());
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }

    async fn insert_project(&self, project: Project) -> Result<Project, AppError> {
        self.tables.write().await.projects.push(project.clone());
        Ok(project)
    }

    async fn find_project(&self, id: Uuid) -> Result<Option<Project>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.projects.iter().find(|p| p.id == id).cloned())
    }

    async fn list_projects(&self, owner: Uuid) -> Result<Vec<Project>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables
            .projects
            .iter()
            .filter(|p| p.user == owner)
            .cloned()
            .collect())
    }

    async fn save_project(&self, project: &Project) -> Result<Option<Project>, AppError> {
        let mut tables = self.tables.write().await;
        Ok(replace(&mut tables.projects, project, |p| p.id == project.id))
    }

    async fn delete_project(&self, id: Uuid) -> Result<Option<Project>, AppError> {
        let mut tables = self.tables.write().await;
        Ok(take(&mut tables.projects, |p| p.id == id))
    }

    async fn insert_task(&self, task: Task) -> Result<Task, AppError> {
        self.tables.write().await.tasks.push(task.clone());
        Ok(task)
    }

    async fn find_task(&self, id: Uuid) -> Result<Option<Task>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.tasks.iter().find(|t| t.id == id).cloned())
    }

    async fn list_tasks(&self, owner: Uuid) -> Result<Vec<Task>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables
            .tasks
            .iter()
            .filter(|t| t.user == owner)
            .cloned()
            .collect())
    }

    async fn save_task(&self, task: &Task) -> Result<Option<Task>, AppError> {
        let mut tables = self.tables.write().await;
        Ok(replace(&mut tables.tasks, task, |t| t.id == task.id))
    }

    async fn delete_task(&self, id: Uuid) -> Result<Option<Task>, AppError> {
        let mut tables = self.tables.write().await;
        Ok(take(&mut tables.tasks, |t| t.id == id))
    }
}
