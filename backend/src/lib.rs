pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod repository;
mod schema;
pub mod storage;

pub use app::create_app;
pub use config::Config;
pub use storage::{Session, Storage, StorageError};
