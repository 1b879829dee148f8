//! Locate command implementation

use anyhow::Result;

use super::CommandContext;
use crate::cli::LocateArgs;
use crate::output::OutputWriter;
use crate::output_types::LocateOutput;

pub fn execute(args: LocateArgs, ctx: &CommandContext, output: &OutputWriter) -> Result<()> {
    let resolution = ctx.resolver.resolve_venue(&args.circuit, &args.location, &args.country);

    if output.is_json() {
        return output.result(LocateOutput {
            circuit: args.circuit,
            location: args.location,
            country: args.country,
            coordinate: resolution.coordinate,
            tier: resolution.tier,
            precise: resolution.tier.is_precise(),
        });
    }

    output.section("Venue");
    output.kv("Coordinate", format!("{:.4}, {:.4}", resolution.coordinate.lat, resolution.coordinate.lng));
    output.kv("Matched By", resolution.tier);

    if !resolution.tier.is_precise() {
        output.warning("No circuit match; the marker will not sit on the track");
    }

    Ok(())
}
