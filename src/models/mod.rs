pub mod owner;
pub mod project;
pub mod task;
pub mod user;

pub use owner::OwnerId;
pub use project::{Project, ProjectInput, ProjectPatch};
pub use task::{Task, TaskInput, TaskPatch, TaskStatus};
pub use user::{LoginInput, NewUser, User, UserInput, UserSummary};
