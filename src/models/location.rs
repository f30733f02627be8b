// Location call shapes for visitation tracking
use serde::{Deserialize, Serialize};

/// A place in the atlas that can be marked as visited.
///
/// A planet is only addressable through its system, so there is no way to
/// build a planet location without an explicit system context.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Location {
    Galaxy {
        coordinates: String,
    },
    System {
        coordinates: String,
        system: String,
    },
    Planet {
        coordinates: String,
        system: String,
        planet: String,
    },
}

impl Location {
    pub fn at_galaxy(coordinates: impl Into<String>) -> Self {
        Location::Galaxy {
            coordinates: coordinates.into(),
        }
    }

    pub fn at_system(coordinates: impl Into<String>, system: impl Into<String>) -> Self {
        Location::System {
            coordinates: coordinates.into(),
            system: system.into(),
        }
    }

    pub fn at_planet(
        coordinates: impl Into<String>,
        system: impl Into<String>,
        planet: impl Into<String>,
    ) -> Self {
        Location::Planet {
            coordinates: coordinates.into(),
            system: system.into(),
            planet: planet.into(),
        }
    }

    /// Build a location from loosely supplied page fields.
    ///
    /// Returns `None` when there are no coordinates. Blank fields count as
    /// absent, and a planet without a system is dropped rather than attached
    /// to an implicit system.
    pub fn from_parts(
        coordinates: &str,
        system: Option<&str>,
        planet: Option<&str>,
    ) -> Option<Self> {
        if coordinates.is_empty() {
            return None;
        }

        let system = system.filter(|s| !s.is_empty());
        let planet = planet.filter(|p| !p.is_empty());

        let location = match (system, planet) {
            (Some(system), Some(planet)) => Location::at_planet(coordinates, system, planet),
            (Some(system), None) => Location::at_system(coordinates, system),
            (None, _) => Location::at_galaxy(coordinates),
        };
        Some(location)
    }

    pub fn coordinates(&self) -> &str {
        match self {
            Location::Galaxy { coordinates }
            | Location::System { coordinates, .. }
            | Location::Planet { coordinates, .. } => coordinates.as_str(),
        }
    }

    pub fn system(&self) -> Option<&str> {
        match self {
            Location::Galaxy { .. } => None,
            Location::System { system, .. } | Location::Planet { system, .. } => {
                Some(system.as_str())
            }
        }
    }

    pub fn planet(&self) -> Option<&str> {
        match self {
            Location::Planet { planet, .. } => Some(planet.as_str()),
            _ => None,
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Galaxy { coordinates } => write!(f, "galaxy {}", coordinates),
            Location::System {
                coordinates,
                system,
            } => write!(f, "system {} in galaxy {}", system, coordinates),
            Location::Planet {
                coordinates,
                system,
                planet,
            } => write!(
                f,
                "planet {} in system {} of galaxy {}",
                planet, system, coordinates
            ),
        }
    }
}
