//! Races command implementation

use anyhow::Result;
use paddock_geo::ResolutionTier;

use super::CommandContext;
use crate::cli::RacesArgs;
use crate::output::OutputWriter;
use crate::output_types::{RaceRow, RacesOutput};

pub async fn execute(args: RacesArgs, ctx: &CommandContext, output: &OutputWriter) -> Result<()> {
    let season = ctx.season();
    let races = ctx.load_races().await?;

    let all: Vec<RaceRow> =
        races.iter().map(|race| RaceRow::new(race, ctx.resolver.resolve_with_tier(race))).collect();
    let total = all.len();
    let unmapped = all.iter().filter(|row| row.tier == ResolutionTier::Default).count();

    let rows: Vec<RaceRow> = if args.unmapped {
        all.into_iter().filter(|row| row.tier == ResolutionTier::Default).collect()
    } else {
        all
    };

    if output.is_json() {
        return output.result(RacesOutput { season, total, unmapped, races: rows });
    }

    output.section(format!("{} Season", season));
    if total == 0 {
        output.warning(format!("No races found for season {}", season));
        return Ok(());
    }

    output.table(rows)?;

    if unmapped > 0 {
        output.warning(format!(
            "{} of {} races could not be mapped and are placed at the world center",
            unmapped, total
        ));
    }
    output.info("Run 'paddock predict <ID>' for a race prediction");

    Ok(())
}
