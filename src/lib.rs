pub mod auth;
pub mod db;
pub mod error;
pub mod github;
pub mod handlers;
pub mod models;
pub mod registry;
pub mod services;

pub use db::create_pool;
