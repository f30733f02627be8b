// Visitation record - the persisted galaxy -> system -> planets mapping
use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::models::Location;
use crate::v_info;

/// System index key -> planet names visited in that system
pub type GalaxyEntry = BTreeMap<String, Vec<String>>;

/// The entire persisted history, keyed by galaxy coordinate key.
///
/// Serializes transparently to the stored layout:
/// `{"<coords>": {"<system>": ["<planet>", ...]}}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisitationRecord {
    galaxies: BTreeMap<String, GalaxyEntry>,
}

impl VisitationRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a stored blob.
    ///
    /// Text that is not a JSON object (including a stored `null`) decodes to
    /// an empty record. Inside an object, well-formed entries are kept: a
    /// galaxy or system whose value has the wrong shape stays visited with
    /// no children, and non-string planet names are dropped.
    pub fn parse(text: &str) -> Self {
        let value = match serde_json::from_str::<Value>(text) {
            Ok(value) => value,
            Err(e) => {
                v_info!("⚠️ Discarding malformed visitation data: {}", e);
                return Self::default();
            }
        };

        let galaxies = match value {
            Value::Object(galaxies) => galaxies,
            Value::Null => return Self::default(),
            _ => {
                v_info!("⚠️ Discarding visitation data that is not an object");
                return Self::default();
            }
        };

        let mut record = Self::default();
        let mut repaired = 0usize;
        for (coordinates, entry) in galaxies {
            let systems = record.galaxies.entry(coordinates).or_default();
            let Value::Object(entry) = entry else {
                repaired += 1;
                continue;
            };

            for (system, planets) in entry {
                let names = systems.entry(system).or_default();
                let Value::Array(planets) = planets else {
                    repaired += 1;
                    continue;
                };

                for planet in planets {
                    match planet {
                        Value::String(name) => {
                            if !name.is_empty() && !names.contains(&name) {
                                names.push(name);
                            }
                        }
                        _ => repaired += 1,
                    }
                }
            }
        }

        if repaired > 0 {
            v_info!("🔧 Repaired {} malformed entries in visitation data", repaired);
        }
        record
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn is_empty(&self) -> bool {
        self.galaxies.is_empty()
    }

    pub fn galaxy(&self, coordinates: &str) -> Option<&GalaxyEntry> {
        self.galaxies.get(coordinates)
    }

    pub fn contains_galaxy(&self, coordinates: &str) -> bool {
        self.galaxies.contains_key(coordinates)
    }

    pub fn contains_system(&self, coordinates: &str, system: &str) -> bool {
        self.galaxies
            .get(coordinates)
            .is_some_and(|entry| entry.contains_key(system))
    }

    pub fn contains_planet(&self, coordinates: &str, system: &str, planet: &str) -> bool {
        self.galaxies
            .get(coordinates)
            .and_then(|entry| entry.get(system))
            .is_some_and(|planets| planets.iter().any(|p| p == planet))
    }

    /// Apply a visit. Each level is created if absent; planets keep set
    /// semantics. Returns true if the record changed.
    pub fn insert(&mut self, location: &Location) -> bool {
        let mut changed = false;

        let coordinates = location.coordinates();
        if !self.galaxies.contains_key(coordinates) {
            self.galaxies.insert(coordinates.to_string(), GalaxyEntry::new());
            changed = true;
        }

        let Some(system) = location.system() else {
            return changed;
        };

        let entry = self.galaxies.entry(coordinates.to_string()).or_default();
        if !entry.contains_key(system) {
            entry.insert(system.to_string(), Vec::new());
            changed = true;
        }

        if let Some(planet) = location.planet() {
            let planets = entry.entry(system.to_string()).or_default();
            if !planet.is_empty() && !planets.iter().any(|p| p == planet) {
                planets.push(planet.to_string());
                changed = true;
            }
        }

        changed
    }

    pub fn galaxy_count(&self) -> usize {
        self.galaxies.len()
    }

    pub fn system_count(&self) -> usize {
        self.galaxies.values().map(|entry| entry.len()).sum()
    }

    pub fn planet_count(&self) -> usize {
        self.galaxies
            .values()
            .flat_map(|entry| entry.values())
            .map(|planets| planets.len())
            .sum()
    }
}
