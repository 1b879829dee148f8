pub mod driver;
pub mod prediction;
pub mod race;

pub use driver::{filter_and_sort_drivers, Driver, DriverSort};
pub use prediction::{
    DriverPrediction, PodiumEntry, PodiumPosition, PredictionForm, PredictionQuery,
    PredictionRequest, PredictionResult,
};
pub use race::{RaceDescriptor, RaceId};
