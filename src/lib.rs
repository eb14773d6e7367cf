pub mod app;
pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod hierarchy;
pub mod middleware;
pub mod services;
pub mod types;
pub mod validation;

pub use app::{app, AppState};
