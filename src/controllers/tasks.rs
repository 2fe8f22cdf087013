use chrono::Utc;
use validator::Validate;

use super::{ensure_owner, not_found, parse_id, Action};
use crate::error::AppError;
use crate::models::{Task, TaskInput, TaskPatch, User};
use crate::store::Store;

/// Creates a task owned by `caller`.
///
/// The referenced project is taken as given: it is neither required to exist
/// nor to belong to the caller.
pub async fn create_task(
    store: &dyn Store,
    caller: &User,
    input: TaskInput,
) -> Result<Task, AppError> {
    input.validate()?;
    let (Some(title), Some(description), Some(project)) =
        (input.title, input.description, input.project)
    else {
        return Err(AppError::ValidationError("Please add all fields".into()));
    };

    let task = Task::new(
        title,
        description,
        project,
        input.status.unwrap_or_default(),
        caller.id,
    );
    let task = store.insert_task(task).await?;
    log::info!("User {} created task {}", caller.id, task.id);
    Ok(task)
}

pub async fn list_tasks(store: &dyn Store, caller: &User) -> Result<Vec<Task>, AppError> {
    store.list_tasks(caller.id).await
}

pub async fn get_task(store: &dyn Store, raw_id: &str) -> Result<Task, AppError> {
    let id = parse_id::<Task>(raw_id)?;
    store.find_task(id).await?.ok_or_else(not_found::<Task>)
}

/// Applies `patch` to a task whose stored `user` is `caller`.
pub async fn update_task(
    store: &dyn Store,
    caller: &User,
    raw_id: &str,
    patch: TaskPatch,
) -> Result<Task, AppError> {
    let mut task = get_task(store, raw_id).await?;
    ensure_owner(&task, &caller.owner_id(), Action::Update)?;
    patch.validate()?;

    task.apply(patch, Utc::now());
    store.save_task(&task).await?.ok_or_else(not_found::<Task>)
}

pub async fn delete_task(store: &dyn Store, caller: &User, raw_id: &str) -> Result<Task, AppError> {
    let task = get_task(store, raw_id).await?;
    ensure_owner(&task, &caller.owner_id(), Action::Delete)?;

    let removed = store
        .delete_task(task.id)
        .await?
        .ok_or_else(not_found::<Task>)?;
    log::info!("User {} deleted task {}", caller.id, removed.id);
    Ok(removed)
}
