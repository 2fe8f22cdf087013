pub mod auth;
pub mod health;
pub mod projects;
pub mod tasks;

use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::error::AppError;

/// Prefix shared by every API route.
pub const API_PREFIX: &str = "/api/v1";

/// Registers the API under [`API_PREFIX`].
///
/// Authentication is declared per handler by taking an `AuthenticatedUser`
/// argument, so open and protected routes can share a scope.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(
        web::scope(API_PREFIX)
            .service(
                web::scope("/auth")
                    .service(auth::sign_up)
                    .service(auth::login)
                    .service(auth::get_me),
            )
            .service(
                web::scope("/projects")
                    .service(projects::create_project)
                    .service(projects::get_projects)
                    .service(projects::get_project)
                    .service(projects::update_project)
                    .service(projects::delete_project),
            )
            .service(
                web::scope("/tasks")
                    .service(tasks::create_task)
                    .service(tasks::get_tasks)
                    .service(tasks::get_task)
                    .service(tasks::update_task)
                    .service(tasks::delete_task),
            ),
    );
}

/// Renders unreadable JSON bodies through the common error envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        log::debug!("Rejected request body: {}", err);
        AppError::ValidationError(format!("Invalid request body: {}", err)).into()
    })
}
