//! Camera targeting for the race map.
//!
//! The controller is a pure responder. It derives a target from the race list
//! and the selection it is handed, and it reports marker clicks back to the
//! owner of the selection instead of changing the selection itself.

use paddock_core::models::{RaceDescriptor, RaceId};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::UnboundedSender;

use crate::models::{centroid, Coordinate};
use crate::resolver::CoordinateResolver;

/// Zoom used when a single race is framed
pub const FOCUSED_ZOOM: u8 = 6;

/// Zoom used for the whole-season overview
pub const OVERVIEW_ZOOM: u8 = 2;

/// Camera framing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraMode {
    /// No selection; framed on the centroid of every race
    Overview,
    /// One race selected; framed on its venue
    Focused,
}

/// Where the camera should go next
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportTarget {
    pub center: Coordinate,
    pub zoom: u8,
    pub animate: bool,
    pub mode: CameraMode,
}

/// Derives camera targets and forwards marker activations to the selection owner
#[derive(Debug, Clone)]
pub struct ViewportController {
    resolver: CoordinateResolver,
    activations: Option<UnboundedSender<RaceId>>,
}

impl ViewportController {
    /// Controller that reports marker activations on `activations`
    pub fn new(resolver: CoordinateResolver, activations: UnboundedSender<RaceId>) -> Self {
        Self { resolver, activations: Some(activations) }
    }

    /// Controller with no selection owner; marker activations are dropped
    pub fn detached(resolver: CoordinateResolver) -> Self {
        Self { resolver, activations: None }
    }

    pub fn resolver(&self) -> &CoordinateResolver {
        &self.resolver
    }

    /// Compute the camera target for a race list and selection.
    ///
    /// A selection that is not in `races` is treated as no selection. Returns
    /// `None` when there is nothing to frame, in which case the camera keeps
    /// whatever it was showing.
    pub fn compute_target(
        &self,
        races: &[RaceDescriptor],
        selected: Option<RaceId>,
    ) -> Option<ViewportTarget> {
        if let Some(race) = selected.and_then(|id| races.iter().find(|r| r.race_id == id)) {
            return Some(ViewportTarget {
                center: self.resolver.resolve(race),
                zoom: FOCUSED_ZOOM,
                animate: true,
                mode: CameraMode::Focused,
            });
        }

        let coords: Vec<Coordinate> = races.iter().map(|r| self.resolver.resolve(r)).collect();
        centroid(&coords).map(|center| ViewportTarget {
            center,
            zoom: OVERVIEW_ZOOM,
            animate: true,
            mode: CameraMode::Overview,
        })
    }

    /// View the map is created with, before any selection has been applied.
    ///
    /// Centered on the first race, or on the world center for an empty list.
    pub fn initial_view(&self, races: &[RaceDescriptor]) -> ViewportTarget {
        let center = races
            .first()
            .map(|r| self.resolver.resolve(r))
            .unwrap_or(Coordinate::WORLD_CENTER);

        ViewportTarget { center, zoom: OVERVIEW_ZOOM, animate: false, mode: CameraMode::Overview }
    }

    /// Report that the user activated the marker for `race_id`.
    ///
    /// Returns whether the notice reached the selection owner.
    pub fn on_marker_activate(&self, race_id: RaceId) -> bool {
        let Some(activations) = &self.activations else {
            tracing::debug!(race_id = %race_id, "Marker activated with no selection owner");
            return false;
        };

        match activations.send(race_id) {
            Ok(()) => {
                tracing::debug!(race_id = %race_id, "Marker activated");
                true
            }
            Err(_) => {
                tracing::debug!(race_id = %race_id, "Selection owner gone, marker activation dropped");
                false
            }
        }
    }
}
