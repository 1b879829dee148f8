//! Paddock Core - Domain models, configuration and ports
//!
//! This crate contains the race dashboard's domain types and the port through
//! which adapters talk to the remote prediction service.

pub mod config;
pub mod error;
pub mod models;
pub mod ports;

pub use error::{PaddockError, Result};
