//! Paddock Client - HTTP adapter for the race prediction service
//!
//! Implements the `PredictionService` port from `paddock-core` against the
//! service's JSON API.

pub mod http;

pub use http::HttpPredictionService;
