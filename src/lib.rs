#![doc = "The `taskledger` library crate."]
#![doc = ""]
#![doc = "Users sign up and log in for a bearer token, then manage projects and tasks"]
#![doc = "that only they may list, update or delete. The binary (`main.rs`) loads the"]
#![doc = "configuration, picks a store and serves the routes registered by `routes::config`."]

pub mod auth;
pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use crate::error::AppError;
pub use crate::state::AppState;
