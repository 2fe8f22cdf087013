//!
//! # Custom Error Handling
//!
//! This module defines the custom error type `AppError` used throughout the application.
//! Every controller returns `Result<_, AppError>`, and the `ResponseError` implementation
//! below is the single place where an error becomes an HTTP response.
//!
//! All error bodies use the `ApiResponse` envelope with `success: false`. Store and
//! internal failures are logged with their details and answered with a generic message.
//! `From` implementations for `sqlx::Error`, `validator::ValidationErrors`,
//! `bcrypt::BcryptError` and `CredentialError` allow conversion with the `?` operator.

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use std::fmt;
use validator::ValidationErrors;

use crate::auth::token::CredentialError;
use crate::response::ApiResponse;

/// Body sent for every 5xx response.
const SERVER_ERROR_MESSAGE: &str = "Server Error";

/// Represents all possible errors that can occur within the application.
#[derive(Debug)]
pub enum AppError {
    /// Missing, invalid or expired credential, or failed login (HTTP 401).
    Unauthorized(String),
    /// Valid credential, but the caller does not own the resource (HTTP 401).
    Forbidden(String),
    /// A malformed request that is not a field validation failure (HTTP 400).
    BadRequest(String),
    /// A unique field such as the email is already taken (HTTP 400).
    Conflict(String),
    /// The identifier does not resolve to a stored entity (HTTP 404).
    NotFound(String),
    /// Required input is missing or malformed (HTTP 400).
    ValidationError(String),
    /// The backing store failed (HTTP 500).
    DatabaseError(String),
    /// Hashing, signing or another unexpected failure (HTTP 500).
    InternalServerError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database Error: {}", msg),
            AppError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

impl AppError {
    /// The message placed in the `error` member of the response body.
    fn public_message(&self) -> &str {
        match self {
            AppError::Unauthorized(msg)
            | AppError::Forbidden(msg)
            | AppError::BadRequest(msg)
            | AppError::Conflict(msg)
            | AppError::NotFound(msg)
            | AppError::ValidationError(msg) => msg,
            AppError::DatabaseError(_) | AppError::InternalServerError(_) => SERVER_ERROR_MESSAGE,
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) | AppError::Forbidden(_) => StatusCode::UNAUTHORIZED,
            AppError::BadRequest(_) | AppError::Conflict(_) | AppError::ValidationError(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) | AppError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("{}", self);
        }
        HttpResponse::build(status).json(ApiResponse::failure(self.public_message()))
    }
}

/// Converts `sqlx::Error` into `AppError`.
///
/// Unique violations become `Conflict`; every other failure is a `DatabaseError`.
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> AppError {
        match &error {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict("Resource already exists".into())
            }
            _ => AppError::DatabaseError(error.to_string()),
        }
    }
}

/// Converts `validator::ValidationErrors` into `AppError::ValidationError`.
///
/// The message names every field that failed, with the rule's message when it
/// carries one.
impl From<ValidationErrors> for AppError {
    fn from(error: ValidationErrors) -> AppError {
        let mut fields: Vec<String> = error
            .field_errors()
            .into_iter()
            .map(|(field, errors)| {
                match errors.iter().find_map(|e| e.message.as_deref()) {
                    Some(message) => format!("{} ({})", field, message),
                    None => field.to_string(),
                }
            })
            .collect();
        fields.sort_unstable();
        AppError::ValidationError(format!("Invalid or missing fields: {}", fields.join(", ")))
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::InternalServerError(error.to_string())
    }
}

/// Token failures all collapse into the same public 401.
impl From<CredentialError> for AppError {
    fn from(_: CredentialError) -> AppError {
        AppError::Unauthorized("Not authorized, token failed".into())
    }
}
