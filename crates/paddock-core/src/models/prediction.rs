use serde::{Deserialize, Serialize};
use std::fmt;

use super::RaceId;
use crate::error::{PaddockError, Result};

/// Podium slot; the service sends either a number or a label like "P1"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PodiumPosition {
    Number(u32),
    Label(String),
}

impl fmt::Display for PodiumPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PodiumPosition::Number(n) => write!(f, "{}", n),
            PodiumPosition::Label(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PodiumEntry {
    pub driver: String,
    pub team: String,
    pub position: PodiumPosition,
}

/// One row of the predicted finishing order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverPrediction {
    #[serde(rename = "driverRef")]
    pub driver_ref: String,
    pub driver_name: String,
    pub team: String,
    pub predicted_position: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_position: Option<u32>,
}

/// Prediction returned by the service for a single race
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub race_name: String,
    pub race_id: RaceId,
    pub predicted_winner: String,
    pub predicted_winner_team: String,
    #[serde(default)]
    pub top_3: Vec<PodiumEntry>,
    #[serde(default)]
    pub full_predictions: Vec<DriverPrediction>,
    /// Model confidence in `[0, 1]`
    #[serde(default)]
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub race_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub circuit_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl PredictionResult {
    /// Confidence as a whole percentage, as shown next to the winner
    pub fn confidence_percent(&self) -> u32 {
        (self.confidence.clamp(0.0, 1.0) * 100.0).round() as u32
    }
}

/// Body of a free-form prediction search; absent fields are omitted on the wire
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub race_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub circuit_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub race_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub race_id: Option<RaceId>,
}

/// How a prediction should be fetched
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionQuery {
    /// A race picked from the schedule
    ById(RaceId),
    /// A race described by hand
    Search(PredictionRequest),
}

/// The manual prediction form. Selecting a race fills it in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionForm {
    pub race_name: String,
    pub circuit_name: String,
    pub race_date: String,
}

impl PredictionForm {
    /// Build the query for the current form state.
    ///
    /// A selected race always wins. Without one, the race name is required.
    pub fn to_query(&self, selected: Option<RaceId>) -> Result<PredictionQuery> {
        if let Some(id) = selected {
            return Ok(PredictionQuery::ById(id));
        }

        if self.race_name.trim().is_empty() {
            return Err(PaddockError::InvalidRequest {
                reason: "Please enter a race name or select a race".to_string(),
            });
        }

        Ok(PredictionQuery::Search(PredictionRequest {
            race_name: non_blank(&self.race_name),
            circuit_name: non_blank(&self.circuit_name),
            race_date: non_blank(&self.race_date),
            race_id: None,
        }))
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
