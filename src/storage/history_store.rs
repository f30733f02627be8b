// Persistent visited-location history
use std::error::Error;
use crate::models::{Location, VisitationRecord};
use crate::storage::StorageBackend;
use crate::{v_debug, v_error};

/// Slot the history is stored under
pub const HISTORY_SLOT: &str = "atlasHistoricalData";

/// Tracks which galaxies, systems and planets have been viewed.
///
/// The store holds no copy of the record. Every query reads the slot afresh
/// and every mark rewrites the whole slot, so the last writer wins.
pub struct VisitedLocationStore<S: StorageBackend> {
    backend: S,
    slot: String,
}

impl<S: StorageBackend> VisitedLocationStore<S> {
    pub fn new(backend: S) -> Self {
        Self::with_slot(backend, HISTORY_SLOT)
    }

    pub fn with_slot(backend: S, slot: &str) -> Self {
        Self {
            backend,
            slot: slot.to_string(),
        }
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Current record; absent or corrupt data reads as empty
    pub fn record(&self) -> VisitationRecord {
        match self.backend.get(&self.slot) {
            Some(text) => VisitationRecord::parse(&text),
            None => VisitationRecord::new(),
        }
    }

    pub fn is_galaxy_visited(&self, coordinates: &str) -> bool {
        self.record().contains_galaxy(coordinates)
    }

    pub fn is_system_visited(&self, coordinates: &str, system: &str) -> bool {
        self.record().contains_system(coordinates, system)
    }

    pub fn is_planet_visited(&self, coordinates: &str, system: &str, planet: &str) -> bool {
        self.record().contains_planet(coordinates, system, planet)
    }

    pub fn is_visited(&self, location: &Location) -> bool {
        let record = self.record();
        match location {
            Location::Galaxy { coordinates } => record.contains_galaxy(coordinates),
            Location::System {
                coordinates,
                system,
            } => record.contains_system(coordinates, system),
            Location::Planet {
                coordinates,
                system,
                planet,
            } => record.contains_planet(coordinates, system, planet),
        }
    }

    /// Mark a location as visited. Storage failures are logged, never raised.
    pub fn mark_visited(&mut self, location: &Location) {
        if let Err(e) = self.try_mark_visited(location) {
            v_error!("❌ Failed to persist visit to {}: {}", location, e);
        }
    }

    /// Mark a location as visited, reporting storage failures to the caller
    pub fn try_mark_visited(&mut self, location: &Location) -> Result<(), Box<dyn Error>> {
        let mut record = self.record();
        let changed = record.insert(location);

        // The whole record is rewritten on every mark, changed or not
        let content = record.to_json()?;
        self.backend.set(&self.slot, &content)?;

        if changed {
            v_debug!("💾 Marked {} as visited", location);
        } else {
            v_debug!("📋 {} was already visited", location);
        }
        Ok(())
    }
}
