use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a race, as issued by the prediction service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RaceId(pub i64);

impl fmt::Display for RaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RaceId {
    fn from(id: i64) -> Self {
        RaceId(id)
    }
}

/// A race as listed by the prediction service.
///
/// `circuit`, `location` and `country` are free text and overlap freely: some
/// schedules put the city in `circuit`, others the country. Venue resolution
/// treats them as progressively coarser keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceDescriptor {
    #[serde(rename = "raceId")]
    pub race_id: RaceId,

    /// Display label used by pickers (e.g. "Round 8 - Monaco Grand Prix")
    #[serde(default)]
    pub label: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub circuit: String,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub country: String,

    #[serde(default)]
    pub round: u32,

    #[serde(default)]
    pub year: i32,

    /// ISO date as sent by the service; kept verbatim
    #[serde(default)]
    pub date: String,
}

impl RaceDescriptor {
    /// Parse the leading `YYYY-MM-DD` part of `date`, if any
    pub fn race_date(&self) -> Option<NaiveDate> {
        let day = self.date.get(..10).unwrap_or(&self.date);
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }

    /// "location, country", skipping whichever part is blank
    pub fn venue_line(&self) -> String {
        [self.location.as_str(), self.country.as_str()]
            .iter()
            .filter(|part| !part.trim().is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// "Round N • date" line shown under a race
    pub fn schedule_line(&self) -> String {
        match self.race_date() {
            Some(date) => format!("Round {} • {}", self.round, date.format("%-d %b %Y")),
            None if self.date.is_empty() => format!("Round {}", self.round),
            None => format!("Round {} • {}", self.round, self.date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monaco() -> RaceDescriptor {
        RaceDescriptor {
            race_id: RaceId(1130),
            label: "Round 8 - Monaco Grand Prix".to_string(),
            name: "Monaco Grand Prix".to_string(),
            circuit: "Monaco".to_string(),
            location: "Monte-Carlo".to_string(),
            country: "Monaco".to_string(),
            round: 8,
            year: 2025,
            date: "2025-05-25".to_string(),
        }
    }

    #[test]
    fn test_deserialize_service_payload() {
        let json = r#"{
            "raceId": 1130,
            "label": "Round 8 - Monaco Grand Prix",
            "name": "Monaco Grand Prix",
            "circuit": "Monaco",
            "location": "Monte-Carlo",
            "country": "Monaco",
            "round": 8,
            "date": "2025-05-25",
            "year": 2025
        }"#;

        let race: RaceDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(race, monaco());
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let race: RaceDescriptor = serde_json::from_str(r#"{"raceId": 7}"#).unwrap();
        assert_eq!(race.race_id, RaceId(7));
        assert!(race.circuit.is_empty());
        assert_eq!(race.round, 0);
    }

    #[test]
    fn test_race_date_accepts_timestamps() {
        let mut race = monaco();
        race.date = "2025-05-25T13:00:00Z".to_string();
        assert_eq!(race.race_date(), NaiveDate::from_ymd_opt(2025, 5, 25));

        race.date = "TBC".to_string();
        assert_eq!(race.race_date(), None);
    }

    #[test]
    fn test_display_lines() {
        let race = monaco();
        assert_eq!(race.venue_line(), "Monte-Carlo, Monaco");
        assert_eq!(race.schedule_line(), "Round 8 • 25 May 2025");

        let mut bare = monaco();
        bare.location.clear();
        bare.date.clear();
        assert_eq!(bare.venue_line(), "Monaco");
        assert_eq!(bare.schedule_line(), "Round 8");
    }
}
