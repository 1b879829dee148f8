use async_trait::async_trait;

use crate::error::Result;
use crate::models::{
    Driver, PredictionQuery, PredictionRequest, PredictionResult, RaceDescriptor, RaceId,
};

/// Port for the remote race prediction service
#[async_trait]
pub trait PredictionService: Send + Sync {
    /// List the races scheduled for a season
    async fn list_races(&self, year: i32) -> Result<Vec<RaceDescriptor>>;

    /// List drivers with their career and prediction statistics
    async fn list_drivers(&self) -> Result<Vec<Driver>>;

    /// Predict the finishing order of a scheduled race
    async fn predict_race(&self, race_id: RaceId) -> Result<PredictionResult>;

    /// Predict a race described by name, circuit and date
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult>;

    /// Run whichever prediction the dashboard asked for
    async fn run_query(&self, query: &PredictionQuery) -> Result<PredictionResult> {
        match query {
            PredictionQuery::ById(race_id) => self.predict_race(*race_id).await,
            PredictionQuery::Search(request) => self.predict(request).await,
        }
    }
}
