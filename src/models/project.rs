use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::models::owner::OwnerId;

/// A project owned by exactly one user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// The owning user. Set at creation, never changed.
    #[sqlx(rename = "user_id")]
    pub user: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a project.
///
/// Any `user` key in the payload is ignored; the owner always comes from the
/// resolved identity.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ProjectInput {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,
    #[validate(required, length(min = 1))]
    pub description: Option<String>,
}

/// Partial update for a project. Absent fields are left untouched; present
/// ones must not be empty.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ProjectPatch {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
}

impl Project {
    pub fn new(title: String, description: String, owner: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.trim().to_string(),
            description,
            user: owner,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn owner_id(&self) -> OwnerId {
        OwnerId::from(self.user)
    }

    /// Overwrites the fields present in `patch`, which is expected to be
    /// normalized and validated already.
    pub fn apply(&mut self, patch: ProjectPatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        self.updated_at = now;
    }
}

impl ProjectInput {
    /// Trims the title so that a whitespace-only title fails validation.
    pub fn normalize(&mut self) {
        trim_title(&mut self.title);
    }
}

impl ProjectPatch {
    pub fn normalize(&mut self) {
        trim_title(&mut self.title);
    }
}

fn trim_title(title: &mut Option<String>) {
    if let Some(title) = title {
        *title = title.trim().to_string();
    }
}
