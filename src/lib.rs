pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod observability;
pub mod query;
pub mod routes;
pub mod shopping_list;

pub use db::{create_pool, migrate};
pub use routes::{AppState, router};
