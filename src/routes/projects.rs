use crate::{
    auth::AuthenticatedUser,
    controllers::projects as controller,
    error::AppError,
    models::{ProjectInput, ProjectPatch},
    response::ApiResponse,
    state::AppState,
};
use actix_web::{delete, get, post, put, web, HttpResponse};

/// Creates a project owned by the caller.
///
/// ## Responses:
/// - `201 Created`: the new project.
/// - `400 Bad Request`: `title` or `description` missing.
/// - `401 Unauthorized`: no valid token.
#[post("/create-project")]
pub async fn create_project(
    state: web::Data<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    input: web::Json<ProjectInput>,
) -> Result<HttpResponse, AppError> {
    let project = controller::create_project(state.store.as_ref(), &user, input.into_inner()).await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok(project).with_message("Project created")))
}

/// Lists the caller's projects. An empty list is a success.
#[get("/get-projects")]
pub async fn get_projects(
    state: web::Data<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let projects = controller::list_projects(state.store.as_ref(), &user).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(projects)))
}

/// Fetches a project by id. Does not require a token.
#[get("/get-project/{id}")]
pub async fn get_project(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let project = controller::get_project(state.store.as_ref(), &id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(project)))
}

/// Partially updates a project the caller owns.
///
/// ## Responses:
/// - `200 OK`: the updated project.
/// - `401 Unauthorized`: no valid token, or the caller is not the owner.
/// - `404 Not Found`: no project with that id.
#[put("/update-project/{id}")]
pub async fn update_project(
    state: web::Data<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    id: web::Path<String>,
    patch: web::Json<ProjectPatch>,
) -> Result<HttpResponse, AppError> {
    let project =
        controller::update_project(state.store.as_ref(), &user, &id, patch.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(project).with_message("Project updated")))
}

/// Deletes a project the caller owns and returns it.
#[delete("/delete-project/{id}")]
pub async fn delete_project(
    state: web::Data<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let project = controller::delete_project(state.store.as_ref(), &user, &id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(project).with_message("Project deleted")))
}
