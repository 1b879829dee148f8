//! Markers command implementation

use anyhow::{bail, Result};
use geojson::FeatureCollection;
use paddock_core::models::RaceId;
use paddock_geo::{DashboardSession, MarkerLayer};

use super::CommandContext;
use crate::cli::MarkersArgs;
use crate::output::OutputWriter;
use crate::output_types::{MarkerRow, MarkersOutput};

pub async fn execute(args: MarkersArgs, ctx: &CommandContext, output: &OutputWriter) -> Result<()> {
    let base_size = args.base_size.unwrap_or(ctx.config.marker_size.value);
    if !base_size.is_finite() || base_size <= 0.0 {
        bail!("Marker size must be a positive number, got {}", base_size);
    }

    let mut session = DashboardSession::new();
    session.set_races(ctx.load_races().await?);
    let selected = args.select.map(RaceId);
    session.select(selected);

    let map = session.map_view(ctx.resolver.clone());
    let markers = map.markers(base_size);

    if args.geojson {
        let collection: FeatureCollection = MarkerLayer::to_feature_collection(&markers);
        return if output.is_json() { output.result(collection) } else { output.data(&collection) };
    }

    if output.is_json() {
        return output.result(MarkersOutput { season: ctx.season(), selected, base_size, markers });
    }

    output.section(format!("{} Season Markers", ctx.season()));
    let rows: Vec<MarkerRow> = markers.iter().map(MarkerRow::from).collect();
    output.table(rows)?;

    Ok(())
}
