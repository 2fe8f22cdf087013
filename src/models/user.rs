use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::auth::password::hash_password;
use crate::error::AppError;
use crate::models::owner::OwnerId;

lazy_static! {
    // Basic address shape: something@something.tld, no whitespace.
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// A stored user account.
///
/// The password digest is never serialized, so a `User` can be returned from any
/// endpoint without leaking it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    pub country: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn owner_id(&self) -> OwnerId {
        OwnerId::from(self.id)
    }
}

/// The subset of a user returned alongside a freshly issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub country: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            country: user.country.clone(),
        }
    }
}

/// Sign-up payload.
///
/// Every field is optional at the serde level so that a missing field is
/// reported by validation, naming the field, instead of as a parse failure.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UserInput {
    #[validate(required, length(min = 5, max = 50))]
    pub name: Option<String>,
    #[validate(
        required,
        regex(path = "EMAIL_REGEX", message = "Please add a valid email")
    )]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
    #[validate(required, length(min = 1))]
    pub country: Option<String>,
}

impl UserInput {
    /// Trims every field and lowercases the email.
    fn normalize(&mut self) {
        for field in [&mut self.name, &mut self.country] {
            if let Some(value) = field {
                *value = value.trim().to_string();
            }
        }
        if let Some(email) = &mut self.email {
            *email = normalize_email(email);
        }
    }
}

/// Login payload.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct LoginInput {
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

impl LoginInput {
    /// Validates presence and returns `(email, password)` with the email normalized.
    pub fn into_credentials(self) -> Result<(String, String), AppError> {
        self.validate()?;
        match (self.email, self.password) {
            (Some(email), Some(password)) => Ok((normalize_email(&email), password)),
            _ => Err(AppError::ValidationError("Please add all fields".into())),
        }
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// A validated account ready to be written.
///
/// The only way to build one is [`NewUser::new`], which hashes the plaintext
/// secret, so the store never receives a plaintext or partially hashed password.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub(crate) id: Uuid,
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) password_hash: String,
    pub(crate) country: String,
}

impl NewUser {
    pub fn new(mut input: UserInput) -> Result<Self, AppError> {
        input.normalize();
        input.validate()?;

        let (Some(name), Some(email), Some(password), Some(country)) =
            (input.name, input.email, input.password, input.country)
        else {
            return Err(AppError::ValidationError("Please add all fields".into()));
        };

        let password_hash = hash_password(&password)?;

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            country,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// The record as it will be stored at `now`.
    pub fn into_user(self, now: DateTime<Utc>) -> User {
        User {
            id: self.id,
            name: self.name,
            email: self.email,
            password: self.password_hash,
            country: self.country,
            created_at: now,
            updated_at: now,
        }
    }
}
