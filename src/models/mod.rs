// Models module - atlas locations, coordinates and the visitation record

pub mod location;
pub mod visitation;
pub mod coordinates;

// Re-export all models for easier imports
pub use location::*;
pub use visitation::*;
pub use coordinates::*;
