//! Venue coordinate reference tables.
//!
//! The circuit table is keyed by circuit or city/region name and is consulted
//! for both the `circuit` and `location` fields. The country table is only a
//! fallback. The two are never merged, so lookup order stays explicit.

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use crate::models::Coordinate;

const CIRCUITS: &[(&str, f64, f64)] = &[
    ("Bahrain", 26.0325, 50.5106),
    ("Saudi Arabia", 21.6319, 39.1044),
    ("Australia", -37.8497, 144.9680),
    ("China", 31.3389, 121.2200),
    ("Japan", 34.8431, 136.5412),
    ("Miami", 25.9581, -80.2389),
    ("Italy", 44.3439, 11.7167),
    ("Monaco", 43.7347, 7.4206),
    ("Spain", 41.5700, 2.2611),
    ("Canada", 45.5017, -73.5228),
    ("Austria", 47.2197, 14.7647),
    ("United Kingdom", 52.0786, -1.0169),
    ("Hungary", 47.5789, 19.2486),
    ("Belgium", 50.4372, 5.9714),
    ("Netherlands", 52.3788, 4.5402),
    ("Italy (Monza)", 45.6156, 9.2811),
    ("Azerbaijan", 40.3725, 49.8533),
    ("Singapore", 1.2914, 103.8640),
    ("United States", 30.1327, -97.6351),
    ("Mexico", 19.4042, -99.0907),
    ("Brazil", -23.7036, -46.6997),
    ("Qatar", 25.4901, 51.4542),
    ("Abu Dhabi", 24.4672, 54.6031),
];

const COUNTRIES: &[(&str, f64, f64)] = &[
    ("Bahrain", 26.0325, 50.5106),
    ("Saudi Arabia", 21.6319, 39.1044),
    ("Australia", -37.8497, 144.9680),
    ("China", 31.3389, 121.2200),
    ("Japan", 34.8431, 136.5412),
    ("United States", 39.8283, -98.5795),
    ("Italy", 44.3439, 11.7167),
    ("Monaco", 43.7347, 7.4206),
    ("Spain", 41.5700, 2.2611),
    ("Canada", 45.5017, -73.5228),
    ("Austria", 47.2197, 14.7647),
    ("United Kingdom", 52.0786, -1.0169),
    ("Hungary", 47.5789, 19.2486),
    ("Belgium", 50.4372, 5.9714),
    ("Netherlands", 52.3788, 4.5402),
    ("Azerbaijan", 40.3725, 49.8533),
    ("Singapore", 1.2914, 103.8640),
    ("Mexico", 19.4042, -99.0907),
    ("Brazil", -23.7036, -46.6997),
    ("Qatar", 25.4901, 51.4542),
    ("United Arab Emirates", 24.4672, 54.6031),
];

/// Immutable circuit and country lookup tables
#[derive(Debug, Clone, Default)]
pub struct CoordinateTable {
    circuits: BTreeMap<String, Coordinate>,
    countries: BTreeMap<String, Coordinate>,
}

impl CoordinateTable {
    /// Build a table, dropping entries that are not valid WGS 84 positions
    pub fn new<C, K, N, L>(circuits: C, countries: N) -> Self
    where
        C: IntoIterator<Item = (K, Coordinate)>,
        K: Into<String>,
        N: IntoIterator<Item = (L, Coordinate)>,
        L: Into<String>,
    {
        Self {
            circuits: collect_valid("circuit", circuits),
            countries: collect_valid("country", countries),
        }
    }

    /// The process-wide reference table shipped with this release
    pub fn reference() -> Arc<CoordinateTable> {
        static REFERENCE: OnceLock<Arc<CoordinateTable>> = OnceLock::new();
        REFERENCE
            .get_or_init(|| {
                Arc::new(CoordinateTable::new(
                    CIRCUITS.iter().map(|&(k, lat, lng)| (k, Coordinate::new(lat, lng))),
                    COUNTRIES.iter().map(|&(k, lat, lng)| (k, Coordinate::new(lat, lng))),
                ))
            })
            .clone()
    }

    /// Look up a circuit or location name
    pub fn circuit(&self, key: &str) -> Option<Coordinate> {
        self.circuits.get(key).copied()
    }

    /// Look up a country name
    pub fn country(&self, key: &str) -> Option<Coordinate> {
        self.countries.get(key).copied()
    }

    pub fn circuits(&self) -> impl Iterator<Item = (&str, Coordinate)> {
        self.circuits.iter().map(|(k, c)| (k.as_str(), *c))
    }

    pub fn countries(&self) -> impl Iterator<Item = (&str, Coordinate)> {
        self.countries.iter().map(|(k, c)| (k.as_str(), *c))
    }
}

fn collect_valid<I, K>(kind: &str, entries: I) -> BTreeMap<String, Coordinate>
where
    I: IntoIterator<Item = (K, Coordinate)>,
    K: Into<String>,
{
    entries
        .into_iter()
        .filter_map(|(key, coord)| {
            let key: String = key.into();
            if coord.is_valid() {
                Some((key, coord))
            } else {
                tracing::warn!(
                    kind,
                    key = %key,
                    lat = coord.lat,
                    lng = coord.lng,
                    "Dropping out-of-range venue"
                );
                None
            }
        })
        .collect()
}
