//! Tiered venue resolution.
//!
//! Lookups run in a fixed order and the first hit wins:
//!
//! 1. `circuit` in the circuit table
//! 2. `location` in the circuit table
//! 3. `country` in the country table
//! 4. [`Coordinate::WORLD_CENTER`]
//!
//! Keys are matched exactly and case-sensitively. Resolution never fails: an
//! unmapped venue gets a marker in the wrong place rather than no marker.

use std::fmt;
use std::sync::Arc;

use paddock_core::models::RaceDescriptor;
use serde::{Deserialize, Serialize};

use crate::models::Coordinate;
use crate::venues::CoordinateTable;

/// Which lookup produced a coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionTier {
    Circuit,
    Location,
    Country,
    Default,
}

impl ResolutionTier {
    /// Whether the coordinate points at the venue itself rather than a country or the globe
    pub fn is_precise(&self) -> bool {
        matches!(self, ResolutionTier::Circuit | ResolutionTier::Location)
    }
}

impl fmt::Display for ResolutionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResolutionTier::Circuit => "circuit",
            ResolutionTier::Location => "location",
            ResolutionTier::Country => "country",
            ResolutionTier::Default => "default",
        };
        f.write_str(name)
    }
}

/// A resolved coordinate together with the tier that matched
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub coordinate: Coordinate,
    pub tier: ResolutionTier,
}

/// Maps race descriptors onto coordinates
#[derive(Debug, Clone)]
pub struct CoordinateResolver {
    table: Arc<CoordinateTable>,
}

impl Default for CoordinateResolver {
    fn default() -> Self {
        Self::new(CoordinateTable::reference())
    }
}

impl CoordinateResolver {
    pub fn new(table: Arc<CoordinateTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &CoordinateTable {
        &self.table
    }

    /// Coordinate for a race
    pub fn resolve(&self, race: &RaceDescriptor) -> Coordinate {
        self.resolve_with_tier(race).coordinate
    }

    /// Coordinate for a race, with the tier that produced it
    pub fn resolve_with_tier(&self, race: &RaceDescriptor) -> Resolution {
        let resolution = self.resolve_venue(&race.circuit, &race.location, &race.country);
        if resolution.tier == ResolutionTier::Default {
            tracing::debug!(
                race_id = %race.race_id,
                circuit = %race.circuit,
                location = %race.location,
                country = %race.country,
                "Venue not mapped, using world center"
            );
        }
        resolution
    }

    /// Resolve loose venue fields without a full race record
    pub fn resolve_venue(&self, circuit: &str, location: &str, country: &str) -> Resolution {
        if let Some(coordinate) = self.table.circuit(circuit) {
            return Resolution { coordinate, tier: ResolutionTier::Circuit };
        }

        if let Some(coordinate) = self.table.circuit(location) {
            return Resolution { coordinate, tier: ResolutionTier::Location };
        }

        if let Some(coordinate) = self.table.country(country) {
            return Resolution { coordinate, tier: ResolutionTier::Country };
        }

        Resolution { coordinate: Coordinate::WORLD_CENTER, tier: ResolutionTier::Default }
    }
}
