// Page-load visit protocol: record the current location, reveal seen markers
use std::error::Error;
use serde::{Deserialize, Serialize};
use crate::models::Location;
use crate::storage::{StorageBackend, VisitedLocationStore};
use crate::{v_debug, v_info};

/// Location attributes a page carries, read once on load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContext {
    pub coordinates: Option<String>,
    pub system_index: Option<String>,
    pub planet_name: Option<String>,
}

impl PageContext {
    pub fn new(
        coordinates: Option<&str>,
        system_index: Option<&str>,
        planet_name: Option<&str>,
    ) -> Self {
        Self {
            coordinates: coordinates.map(str::to_string),
            system_index: system_index.map(str::to_string),
            planet_name: planet_name.map(str::to_string),
        }
    }

    /// The most specific location this page represents
    pub fn location(&self) -> Option<Location> {
        Location::from_parts(
            self.coordinates.as_deref()?,
            self.system_index.as_deref(),
            self.planet_name.as_deref(),
        )
    }

    fn coordinates(&self) -> Option<&str> {
        self.coordinates.as_deref().filter(|c| !c.is_empty())
    }

    fn system_index(&self) -> Option<&str> {
        self.system_index.as_deref().filter(|s| !s.is_empty())
    }

    fn planet_name(&self) -> Option<&str> {
        self.planet_name.as_deref().filter(|p| !p.is_empty())
    }
}

/// A "seen" marker on the page, tagged with what it stands for
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Indicator {
    System(String),
    Planet(String),
}

/// Record the page's location. Pages without coordinates record nothing
/// and yield `Ok(None)`.
pub fn record_page_visit<S: StorageBackend>(
    store: &mut VisitedLocationStore<S>,
    context: &PageContext,
) -> Result<Option<Location>, Box<dyn Error>> {
    let Some(location) = context.location() else {
        v_debug!("📋 Page has no coordinates, nothing to record");
        return Ok(None);
    };

    store.try_mark_visited(&location)?;
    Ok(Some(location))
}

/// Which indicators should be shown for this page.
///
/// System markers refer to systems of the page's galaxy, planet markers to
/// planets of the page's system.
pub fn revealed_indicators<S: StorageBackend>(
    store: &VisitedLocationStore<S>,
    context: &PageContext,
    indicators: &[Indicator],
) -> Vec<Indicator> {
    let Some(coordinates) = context.coordinates() else {
        return Vec::new();
    };

    let record = store.record();
    indicators
        .iter()
        .filter(|indicator| match indicator {
            Indicator::System(system) => record.contains_system(coordinates, system),
            Indicator::Planet(planet) => context
                .system_index()
                .is_some_and(|system| record.contains_planet(coordinates, system, planet)),
        })
        .cloned()
        .collect()
}

/// Visitation status lines for the page, most general first
pub fn visitation_report<S: StorageBackend>(
    store: &VisitedLocationStore<S>,
    context: &PageContext,
) -> Vec<String> {
    let mut lines = Vec::new();
    let Some(coordinates) = context.coordinates() else {
        return lines;
    };

    let record = store.record();
    lines.push(format!(
        "Galaxy with coordinates {} has been visited: {}",
        coordinates,
        record.contains_galaxy(coordinates)
    ));

    if let Some(system) = context.system_index() {
        lines.push(format!(
            "System {} in galaxy with coordinates {} has been visited: {}",
            system,
            coordinates,
            record.contains_system(coordinates, system)
        ));

        if let Some(planet) = context.planet_name() {
            lines.push(format!(
                "Planet {} in system {} of galaxy with coordinates {} has been visited: {}",
                planet,
                system,
                coordinates,
                record.contains_planet(coordinates, system, planet)
            ));
        }
    }

    for line in &lines {
        v_info!("🔭 {}", line);
    }
    lines
}
