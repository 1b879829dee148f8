use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::PaddockError;

/// Driver statistics as listed by the prediction service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    #[serde(rename = "driverRef")]
    pub driver_ref: String,

    pub driver_name: String,

    #[serde(default)]
    pub total_races: u32,

    #[serde(default)]
    pub predicted_wins: u32,

    #[serde(default)]
    pub current_team: Option<String>,
}

/// Ordering for driver listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriverSort {
    /// Most predicted wins first
    #[default]
    Wins,
    /// Most races first
    Races,
    /// Alphabetical by name
    Name,
}

impl FromStr for DriverSort {
    type Err = PaddockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wins" => Ok(DriverSort::Wins),
            "races" => Ok(DriverSort::Races),
            "name" => Ok(DriverSort::Name),
            _ => Err(PaddockError::InvalidRequest {
                reason: format!("Invalid driver sort: {}. Use wins, races, or name", s),
            }),
        }
    }
}

/// Filter drivers by a case-insensitive substring of name or ref, then sort.
///
/// An empty search term keeps every driver. Sorting is stable, so drivers that
/// tie keep the service's order.
pub fn filter_and_sort_drivers(drivers: &[Driver], search: &str, sort: DriverSort) -> Vec<Driver> {
    let needle = search.to_lowercase();
    let mut selected: Vec<Driver> = drivers
        .iter()
        .filter(|d| {
            d.driver_name.to_lowercase().contains(&needle)
                || d.driver_ref.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();

    match sort {
        DriverSort::Wins => selected.sort_by(|a, b| b.predicted_wins.cmp(&a.predicted_wins)),
        DriverSort::Races => selected.sort_by(|a, b| b.total_races.cmp(&a.total_races)),
        DriverSort::Name => selected.sort_by_cached_key(|d| d.driver_name.to_lowercase()),
    }

    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver(driver_ref: &str, name: &str, races: u32, wins: u32) -> Driver {
        Driver {
            driver_ref: driver_ref.to_string(),
            driver_name: name.to_string(),
            total_races: races,
            predicted_wins: wins,
            current_team: None,
        }
    }

    fn grid() -> Vec<Driver> {
        vec![
            driver("norris", "Lando Norris", 130, 6),
            driver("max_verstappen", "Max Verstappen", 210, 9),
            driver("hamilton", "Lewis Hamilton", 360, 2),
        ]
    }

    #[test]
    fn test_sort_by_wins() {
        let sorted = filter_and_sort_drivers(&grid(), "", DriverSort::Wins);
        let refs: Vec<&str> = sorted.iter().map(|d| d.driver_ref.as_str()).collect();
        assert_eq!(refs, ["max_verstappen", "norris", "hamilton"]);
    }

    #[test]
    fn test_sort_by_races_and_name() {
        let by_races = filter_and_sort_drivers(&grid(), "", DriverSort::Races);
        assert_eq!(by_races[0].driver_ref, "hamilton");

        let by_name = filter_and_sort_drivers(&grid(), "", DriverSort::Name);
        assert_eq!(by_name[0].driver_name, "Lando Norris");
        assert_eq!(by_name[2].driver_name, "Max Verstappen");
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let drivers = vec![
            driver("zhou", "Zhou Guanyu", 60, 0),
            driver("devries", "de Vries", 11, 0),
            driver("albon", "Alexander Albon", 100, 0),
        ];

        let sorted = filter_and_sort_drivers(&drivers, "", DriverSort::Name);
        let names: Vec<&str> = sorted.iter().map(|d| d.driver_name.as_str()).collect();
        assert_eq!(names, ["Alexander Albon", "de Vries", "Zhou Guanyu"]);
    }

    #[test]
    fn test_search_matches_name_or_ref() {
        let hits = filter_and_sort_drivers(&grid(), "VERST", DriverSort::Wins);
        assert_eq!(hits.len(), 1);

        let hits = filter_and_sort_drivers(&grid(), "max_", DriverSort::Wins);
        assert_eq!(hits[0].driver_name, "Max Verstappen");

        assert!(filter_and_sort_drivers(&grid(), "senna", DriverSort::Wins).is_empty());
    }

    #[test]
    fn test_parse_sort() {
        assert_eq!("WINS".parse::<DriverSort>().unwrap(), DriverSort::Wins);
        assert_eq!("name".parse::<DriverSort>().unwrap(), DriverSort::Name);
        assert!("points".parse::<DriverSort>().is_err());
    }

    #[test]
    fn test_deserialize_driver() {
        let json = r#"{"driverRef": "leclerc", "driver_name": "Charles Leclerc",
            "total_races": 150, "predicted_wins": 4, "current_team": null}"#;
        let d: Driver = serde_json::from_str(json).unwrap();
        assert_eq!(d.driver_ref, "leclerc");
        assert_eq!(d.current_team, None);
    }
}
