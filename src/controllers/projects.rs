use chrono::Utc;
use validator::Validate;

use super::{ensure_owner, not_found, parse_id, Action};
use crate::error::AppError;
use crate::models::{Project, ProjectInput, ProjectPatch, User};
use crate::store::Store;

/// Creates a project owned by `caller`.
pub async fn create_project(
    store: &dyn Store,
    caller: &User,
    mut input: ProjectInput,
) -> Result<Project, AppError> {
    input.normalize();
    input.validate()?;
    let (Some(title), Some(description)) = (input.title, input.description) else {
        return Err(AppError::ValidationError("Please add all fields".into()));
    };

    let project = store
        .insert_project(Project::new(title, description, caller.id))
        .await?;
    log::info!("User {} created project {}", caller.id, project.id);
    Ok(project)
}

/// Projects owned by `caller`. Possibly empty.
pub async fn list_projects(store: &dyn Store, caller: &User) -> Result<Vec<Project>, AppError> {
    store.list_projects(caller.id).await
}

/// Reads any project by id. No ownership check.
pub async fn get_project(store: &dyn Store, raw_id: &str) -> Result<Project, AppError> {
    let id = parse_id::<Project>(raw_id)?;
    store
        .find_project(id)
        .await?
        .ok_or_else(not_found::<Project>)
}

/// Applies `patch` to a project owned by `caller`.
pub async fn update_project(
    store: &dyn Store,
    caller: &User,
    raw_id: &str,
    mut patch: ProjectPatch,
) -> Result<Project, AppError> {
    let mut project = get_project(store, raw_id).await?;
    ensure_owner(&project, &caller.owner_id(), Action::Update)?;
    patch.normalize();
    patch.validate()?;

    project.apply(patch, Utc::now());
    store
        .save_project(&project)
        .await?
        .ok_or_else(not_found::<Project>)
}

/// Deletes a project owned by `caller` and returns what was removed.
pub async fn delete_project(
    store: &dyn Store,
    caller: &User,
    raw_id: &str,
) -> Result<Project, AppError> {
    let project = get_project(store, raw_id).await?;
    ensure_owner(&project, &caller.owner_id(), Action::Delete)?;

    let removed = store
        .delete_project(project.id)
        .await?
        .ok_or_else(not_found::<Project>)?;
    log::info!("User {} deleted project {}", caller.id, removed.id);
    Ok(removed)
}
