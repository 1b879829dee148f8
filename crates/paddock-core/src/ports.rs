//! Port trait definitions
//!
//! These traits define the interfaces that adapters must implement.

pub mod prediction;

pub use prediction::PredictionService;
