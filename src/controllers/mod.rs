//! Business rules behind the HTTP handlers.
//!
//! Every operation takes the resolved caller explicitly and returns a single
//! `Result`; the route layer renders exactly one response from it. Projects
//! and tasks share the ownership rules defined here.

pub mod auth;
pub mod projects;
pub mod tasks;

use std::fmt;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{OwnerId, Project, Task};

/// An entity that belongs to exactly one user.
pub trait OwnedResource {
    /// Lowercase name used in messages, e.g. `"project"`.
    const KIND: &'static str;
    /// Capitalized name used at the start of messages.
    const LABEL: &'static str;

    fn owner_id(&self) -> OwnerId;
}

impl OwnedResource for Project {
    const KIND: &'static str = "project";
    const LABEL: &'static str = "Project";

    fn owner_id(&self) -> OwnerId {
        Project::owner_id(self)
    }
}

impl OwnedResource for Task {
    const KIND: &'static str = "task";
    const LABEL: &'static str = "Task";

    fn owner_id(&self) -> OwnerId {
        Task::owner_id(self)
    }
}

/// Owner-only operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Update,
    Delete,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Action::Update => f.write_str("update"),
            Action::Delete => f.write_str("delete"),
        }
    }
}

/// Parses a path identifier.
///
/// A blank id is a 400. Anything that cannot name a stored entity, including
/// text that is not a UUID, is a 404.
pub fn parse_id<R: OwnedResource>(raw: &str) -> Result<Uuid, AppError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AppError::BadRequest(format!("{} id is required", R::LABEL)));
    }
    Uuid::parse_str(raw).map_err(|_| not_found::<R>())
}

pub fn not_found<R: OwnedResource>() -> AppError {
    AppError::NotFound(format!("{} not found", R::LABEL))
}

/// Rejects `caller` unless it owns `resource`.
pub fn ensure_owner<R: OwnedResource>(
    resource: &R,
    caller: &OwnerId,
    action: Action,
) -> Result<(), AppError> {
    let owner = resource.owner_id();
    if &owner == caller {
        return Ok(());
    }
    log::warn!(
        "User {} tried to {} a {} owned by {}",
        caller,
        action,
        R::KIND,
        owner
    );
    Err(AppError::Forbidden(format!(
        "User not authorised to {} the {}.",
        action,
        R::KIND
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id::<Project>(&id.to_string()).unwrap(), id);
        assert!(matches!(
            parse_id::<Project>("  "),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            parse_id::<Task>("not-an-id"),
            Err(AppError::NotFound(msg)) if msg == "Task not found"
        ));
    }

    #[test]
    fn test_ensure_owner_compares_canonical_ids() {
        let owner = Uuid::new_v4();
        let project = Project::new("t".into(), "d".into(), owner);

        // The caller's id arrives as text in a different encoding.
        let caller = OwnerId::parse(&owner.simple().to_string().to_uppercase());
        assert!(ensure_owner(&project, &caller, Action::Update).is_ok());

        let stranger = OwnerId::from(Uuid::new_v4());
        match ensure_owner(&project, &stranger, Action::Update) {
            Err(AppError::Forbidden(msg)) => {
                assert_eq!(msg, "User not authorised to update the project.")
            }
            other => panic!("expected Forbidden, got {:?}", other),
        }
    }
}
