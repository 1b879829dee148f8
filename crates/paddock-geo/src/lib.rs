//! Paddock Geo - Venue geocoding and map viewport synchronization
//!
//! This crate maps race descriptors onto coordinates through a tiered lookup,
//! derives the map camera target from the current selection, and carries the
//! selection between the dashboard and the map.

pub mod camera;
pub mod markers;
pub mod models;
pub mod resolver;
pub mod session;
pub mod venues;
pub mod viewport;

pub use camera::{CameraState, MapCamera, Transition};
pub use markers::{marker_style, Marker, MarkerLayer, MarkerStyle};
pub use models::Coordinate;
pub use resolver::{CoordinateResolver, Resolution, ResolutionTier};
pub use session::{DashboardSession, MapInputs, MapView};
pub use venues::CoordinateTable;
pub use viewport::{CameraMode, ViewportController, ViewportTarget};
