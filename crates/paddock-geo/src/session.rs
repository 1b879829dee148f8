//! Selection ownership and the two channels between the dashboard and the map.
//!
//! `DashboardSession` is the only writer of the selection. It publishes the race
//! list and selection on a watch channel that `MapView` follows, and it drains
//! marker activations that the map sends back on an unbounded queue.

use std::sync::Arc;

use paddock_core::models::{PredictionForm, PredictionQuery, RaceDescriptor, RaceId};
use paddock_core::Result;
use tokio::sync::{mpsc, watch};

use crate::camera::MapCamera;
use crate::markers::{Marker, MarkerLayer};
use crate::resolver::CoordinateResolver;
use crate::viewport::{ViewportController, ViewportTarget};

/// What the map needs to know about the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct MapInputs {
    pub races: Arc<[RaceDescriptor]>,
    pub selected: Option<RaceId>,
}

impl Default for MapInputs {
    fn default() -> Self {
        Self { races: Arc::from(Vec::new()), selected: None }
    }
}

/// Owner of the race list, the selection and the prediction form
#[derive(Debug)]
pub struct DashboardSession {
    races: Arc<[RaceDescriptor]>,
    selected: Option<RaceId>,
    form: PredictionForm,
    inputs: watch::Sender<MapInputs>,
    activations_tx: mpsc::UnboundedSender<RaceId>,
    activations_rx: mpsc::UnboundedReceiver<RaceId>,
}

impl Default for DashboardSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardSession {
    pub fn new() -> Self {
        let (inputs, _) = watch::channel(MapInputs::default());
        let (activations_tx, activations_rx) = mpsc::unbounded_channel();
        Self {
            races: Arc::from(Vec::new()),
            selected: None,
            form: PredictionForm::default(),
            inputs,
            activations_tx,
            activations_rx,
        }
    }

    pub fn races(&self) -> &[RaceDescriptor] {
        &self.races
    }

    pub fn selected(&self) -> Option<RaceId> {
        self.selected
    }

    pub fn selected_race(&self) -> Option<&RaceDescriptor> {
        let id = self.selected?;
        self.races.iter().find(|r| r.race_id == id)
    }

    pub fn form(&self) -> &PredictionForm {
        &self.form
    }

    /// Edit the manual prediction form
    pub fn form_mut(&mut self) -> &mut PredictionForm {
        &mut self.form
    }

    /// Replace the race list, e.g. after the schedule finished loading.
    ///
    /// The selection is kept even if the new list no longer contains it; the
    /// map then shows the overview until a listed race is selected.
    pub fn set_races(&mut self, races: Vec<RaceDescriptor>) {
        tracing::debug!(count = races.len(), "Race list updated");
        self.races = Arc::from(races);
        self.publish();
    }

    /// Apply a selection from the race picker or a marker.
    ///
    /// Selecting a listed race copies its name, circuit and date into the form.
    pub fn select(&mut self, race_id: Option<RaceId>) {
        self.selected = race_id;

        if let Some(race) = self.selected_race() {
            let form = PredictionForm {
                race_name: race.name.clone(),
                circuit_name: race.circuit.clone(),
                race_date: race.date.clone(),
            };
            tracing::debug!(race_id = %race.race_id, race = %race.name, "Race selected");
            self.form = form;
        }

        self.publish();
    }

    /// Sender a map controller reports marker activations on
    pub fn marker_sender(&self) -> mpsc::UnboundedSender<RaceId> {
        self.activations_tx.clone()
    }

    /// Receiver of the race list and selection as they change
    pub fn subscribe(&self) -> watch::Receiver<MapInputs> {
        self.inputs.subscribe()
    }

    /// Build a map view that follows this session
    pub fn map_view(&self, resolver: CoordinateResolver) -> MapView {
        let controller = ViewportController::new(resolver, self.marker_sender());
        MapView::new(controller, self.subscribe())
    }

    /// Apply every marker activation received since the last call.
    ///
    /// Returns how many were applied; the last one determines the selection.
    pub fn process_marker_activations(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(race_id) = self.activations_rx.try_recv() {
            self.select(Some(race_id));
            applied += 1;
        }
        applied
    }

    /// Query for the prediction button in the current state
    pub fn prediction_query(&self) -> Result<PredictionQuery> {
        self.form.to_query(self.selected)
    }

    fn publish(&self) {
        self.inputs.send_replace(MapInputs {
            races: Arc::clone(&self.races),
            selected: self.selected,
        });
    }
}

/// Map half of the dashboard: camera plus marker activation
#[derive(Debug)]
pub struct MapView {
    controller: ViewportController,
    camera: MapCamera,
    inputs: watch::Receiver<MapInputs>,
}

impl MapView {
    /// Create the view at its initial position, then apply the current selection
    pub fn new(controller: ViewportController, inputs: watch::Receiver<MapInputs>) -> Self {
        let camera = MapCamera::new(controller.initial_view(&inputs.borrow().races));
        let mut view = Self { controller, camera, inputs };
        view.sync();
        view
    }

    pub fn camera(&self) -> &MapCamera {
        &self.camera
    }

    pub fn controller(&self) -> &ViewportController {
        &self.controller
    }

    /// Recompute the target if the dashboard published anything new
    pub fn refresh(&mut self) -> Option<ViewportTarget> {
        match self.inputs.has_changed() {
            Ok(true) => self.sync(),
            _ => None,
        }
    }

    /// Recompute the target from the latest inputs and move the camera
    pub fn sync(&mut self) -> Option<ViewportTarget> {
        let inputs = self.inputs.borrow_and_update().clone();
        let target = self.controller.compute_target(&inputs.races, inputs.selected);
        self.camera.apply(target);
        target
    }

    /// Finish the in-flight transition at once, for callers with no animation.
    ///
    /// Returns whether a transition was running.
    pub fn settle(&mut self) -> bool {
        match self.camera.in_flight().map(|t| t.id) {
            Some(id) => self.camera.complete(id),
            None => false,
        }
    }

    /// Markers for the latest inputs this view has seen
    pub fn markers(&self, base_size: f64) -> Vec<Marker> {
        let inputs = self.inputs.borrow();
        MarkerLayer::build(self.controller.resolver(), &inputs.races, inputs.selected, base_size)
    }

    /// The user clicked the marker (or its popup button) for `race_id`
    pub fn activate_marker(&self, race_id: RaceId) -> bool {
        self.controller.on_marker_activate(race_id)
    }
}
