// Storage module for persistent data
pub mod backend;
pub mod file_storage;
pub mod history_store;

pub use backend::*;
pub use file_storage::*;
pub use history_store::*;
