//! Viewport command implementation

use anyhow::Result;
use paddock_core::models::RaceId;
use paddock_geo::{CameraMode, DashboardSession};

use super::CommandContext;
use crate::cli::ViewportArgs;
use crate::output::OutputWriter;
use crate::output_types::ViewportOutput;

pub async fn execute(args: ViewportArgs, ctx: &CommandContext, output: &OutputWriter) -> Result<()> {
    let season = ctx.season();

    let mut session = DashboardSession::new();
    session.set_races(ctx.load_races().await?);

    let mut map = session.map_view(ctx.resolver.clone());
    let initial = map.controller().initial_view(session.races());

    let selected = args.select.map(RaceId);
    session.select(selected);
    let target = map.refresh();
    map.settle();
    let camera = map.camera().state();

    if output.is_json() {
        return output.result(ViewportOutput {
            season,
            selected,
            race_count: session.races().len(),
            mode: camera.mode,
            target,
            initial,
        });
    }

    output.section("Map Viewport");
    output.kv("Season", season);
    output.kv("Races", session.races().len());

    match (camera.mode, session.selected_race()) {
        (CameraMode::Focused, Some(race)) => output.kv("Focused On", &race.name),
        _ => output.kv("Mode", "Season overview"),
    }
    output.kv("Center", format!("{:.4}, {:.4}", camera.center.lat, camera.center.lng));
    output.kv("Zoom", camera.zoom);

    if let Some(id) = selected {
        if session.selected_race().is_none() {
            output.warning(format!("Race {} is not in the {} season; showing the overview", id, season));
        }
    }
    if session.races().is_empty() {
        output.warning(format!("No races found for season {}; the map stays at its initial view", season));
    }

    Ok(())
}
