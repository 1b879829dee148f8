//! Map camera state machine.
//!
//! The camera holds its logical state (center, zoom, mode) and at most one
//! in-flight animated transition. Applying a new target replaces any transition
//! still running; completions for replaced transitions are ignored.

use serde::Serialize;

use crate::models::Coordinate;
use crate::viewport::{CameraMode, ViewportTarget};

/// Logical camera position
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraState {
    pub center: Coordinate,
    pub zoom: u8,
    pub mode: CameraMode,
}

impl From<ViewportTarget> for CameraState {
    fn from(target: ViewportTarget) -> Self {
        Self { center: target.center, zoom: target.zoom, mode: target.mode }
    }
}

/// An animated move between two camera states
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transition {
    pub id: u64,
    pub from: CameraState,
    pub to: CameraState,
}

#[derive(Debug, Clone)]
pub struct MapCamera {
    state: CameraState,
    in_flight: Option<Transition>,
    generation: u64,
}

impl MapCamera {
    /// Camera placed at `initial` without animation
    pub fn new(initial: ViewportTarget) -> Self {
        Self { state: initial.into(), in_flight: None, generation: 0 }
    }

    pub fn state(&self) -> CameraState {
        self.state
    }

    pub fn mode(&self) -> CameraMode {
        self.state.mode
    }

    pub fn in_flight(&self) -> Option<&Transition> {
        self.in_flight.as_ref()
    }

    /// Number of targets applied so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Move toward `target`.
    ///
    /// `None` leaves the camera untouched. A target is always applied, even if
    /// it equals the current state, so re-selecting a race re-centers it.
    /// Returns the transition started, if the target asked for animation.
    pub fn apply(&mut self, target: Option<ViewportTarget>) -> Option<Transition> {
        let target = target?;
        self.generation += 1;

        if let Some(stale) = self.in_flight.take() {
            tracing::debug!(superseded = stale.id, by = self.generation, "Camera transition superseded");
        }

        let from = self.state;
        self.state = target.into();

        if target.animate {
            let transition = Transition { id: self.generation, from, to: self.state };
            self.in_flight = Some(transition);
            Some(transition)
        } else {
            None
        }
    }

    /// Mark transition `id` as finished. Returns false for a superseded transition.
    ///
    /// A rendering surface calls this when its animation ends; headless callers
    /// go through `MapView::settle`.
    pub fn complete(&mut self, id: u64) -> bool {
        match self.in_flight {
            Some(t) if t.id == id => {
                self.in_flight = None;
                true
            }
            _ => false,
        }
    }
}
