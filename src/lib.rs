// Galaxy Atlas visitation history library
// Tracks viewed galaxies, systems and planets in persisted key-value storage

pub mod models;
pub mod storage;
pub mod operations;
pub mod config;
pub mod verbosity;

// Re-export commonly used types
pub use models::{
    location::Location,
    visitation::{GalaxyEntry, VisitationRecord},
    coordinates::{GalaxyCoordinates, MAX_COORDINATE},
};

pub use storage::{FileStorage, MemoryStorage, StorageBackend, VisitedLocationStore, HISTORY_SLOT};
pub use operations::{Indicator, PageContext};
pub use config::AtlasConfig;

// Constants
pub const CONFIG_FILE: &str = "config/atlas.toml";
