//! Runs `PgStore` against a real database.
//!
//! `DATABASE_URL=postgres://... cargo test --test postgres -- --ignored`

use pretty_assertions::assert_eq;
use taskledger::models::{NewUser, Project, Task, TaskPatch, TaskStatus, UserInput};
use taskledger::store::{PgStore, Store, DUPLICATE_USER_MESSAGE};
use taskledger::AppError;
use uuid::Uuid;

async fn connect() -> PgStore {
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");
    PgStore::connect(&database_url)
        .await
        .expect("Failed to connect to Postgres")
}

fn new_user(email: &str) -> NewUser {
    NewUser::new(UserInput {
        name: Some("Postgres User".into()),
        email: Some(email.into()),
        password: Some("secret1".into()),
        country: Some("DE".into()),
    })
    .unwrap()
}

#[actix_rt::test]
#[ignore = "needs DATABASE_URL pointing at Postgres"]
async fn test_duplicate_email_is_a_conflict() {
    let store = connect().await;
    let email = format!("{}@example.com", Uuid::new_v4());

    let user = store.insert_user(new_user(&email)).await.unwrap();
    assert_eq!(store.find_user_by_id(user.id).await.unwrap().unwrap().email, email);

    match store.insert_user(new_user(&email.to_uppercase())).await {
        Err(AppError::Conflict(msg)) => assert_eq!(msg, DUPLICATE_USER_MESSAGE),
        other => panic!("expected conflict, got {:?}", other),
    }
}

#[actix_rt::test]
#[ignore = "needs DATABASE_URL pointing at Postgres"]
async fn test_task_round_trip() {
    let store = connect().await;
    let owner = Uuid::new_v4();

    let project = store
        .insert_project(Project::new("Pg project".into(), "d".into(), owner))
        .await
        .unwrap();
    assert_eq!(project.user, owner);
    let projects = store.list_projects(owner).await.unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].id, project.id);

    let task = store
        .insert_task(Task::new(
            "Pg task".into(),
            "d".into(),
            project.id,
            TaskStatus::InProgress,
            owner,
        ))
        .await
        .unwrap();
    assert_eq!(task.status, TaskStatus::InProgress);
    assert_eq!(task.project, project.id);
    assert_eq!(task.user, owner);

    let mut completed = task.clone();
    completed.apply(
        TaskPatch {
            status: Some(TaskStatus::Completed),
            ..Default::default()
        },
        chrono::Utc::now(),
    );
    let saved = store.save_task(&completed).await.unwrap().unwrap();
    assert_eq!(saved.status, TaskStatus::Completed);
    assert!(saved.completed_at.is_some());
    assert_eq!(saved.user, owner);

    let listed = store.list_tasks(owner).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].status, TaskStatus::Completed);

    let removed = store.delete_task(task.id).await.unwrap().unwrap();
    assert_eq!(removed.id, task.id);
    assert!(store.find_task(task.id).await.unwrap().is_none());
    assert!(store.delete_project(project.id).await.unwrap().is_some());
}
