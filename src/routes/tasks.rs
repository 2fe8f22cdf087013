use crate::{
    auth::AuthenticatedUser,
    controllers::tasks as controller,
    error::AppError,
    models::{TaskInput, TaskPatch},
    response::ApiResponse,
    state::AppState,
};
use actix_web::{delete, get, post, put, web, HttpResponse};

/// Creates a new task for the authenticated user.
///
/// The task's `user` is always the caller; a `user` key in the body is ignored.
///
/// ## Request Body:
/// - `title`, `description`: required.
/// - `project`: required, the id of the project the task belongs to.
/// - `status` (optional): `todo`, `in-progress` or `completed`. Defaults to `todo`.
///
/// ## Responses:
/// - `201 Created`: the new task.
/// - `400 Bad Request`: a required field is missing or malformed.
/// - `401 Unauthorized`: no valid token.
#[post("/create-task")]
pub async fn create_task(
    state: web::Data<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    input: web::Json<TaskInput>,
) -> Result<HttpResponse, AppError> {
    let task = controller::create_task(state.store.as_ref(), &user, input.into_inner()).await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok(task).with_message("Task created")))
}

/// Retrieves the tasks owned by the authenticated user.
#[get("/get-tasks")]
pub async fn get_tasks(
    state: web::Data<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let tasks = controller::list_tasks(state.store.as_ref(), &user).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(tasks)))
}

/// Retrieves a specific task by its id. Does not require a token.
#[get("/get-task/{id}")]
pub async fn get_task(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let task = controller::get_task(state.store.as_ref(), &id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(task)))
}

/// Updates the fields present in the body of a task the caller owns.
///
/// Moving the status into `completed` stamps `completedAt`; moving it out clears it.
///
/// ## Responses:
/// - `200 OK`: the updated task.
/// - `401 Unauthorized`: no valid token, or the task's `user` is someone else.
/// - `404 Not Found`: no task with that id.
#[put("/update-tasks/{id}")]
pub async fn update_task(
    state: web::Data<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    id: web::Path<String>,
    patch: web::Json<TaskPatch>,
) -> Result<HttpResponse, AppError> {
    let task = controller::update_task(state.store.as_ref(), &user, &id, patch.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(task).with_message("Task updated")))
}

/// Deletes a task the caller owns and returns the removed task.
#[delete("/delete-tasks/{id}")]
pub async fn delete_task(
    state: web::Data<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let task = controller::delete_task(state.store.as_ref(), &user, &id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(task).with_message("Task deleted")))
}
