//! Drivers command implementation

use anyhow::{Context, Result};
use paddock_core::models::filter_and_sort_drivers;

use super::CommandContext;
use crate::cli::DriversArgs;
use crate::output::OutputWriter;
use crate::output_types::{DriverRow, DriversOutput};

pub async fn execute(args: DriversArgs, ctx: &CommandContext, output: &OutputWriter) -> Result<()> {
    let drivers = ctx.service.list_drivers().await.context("Failed to load drivers")?;
    let total = drivers.len();
    let shown = filter_and_sort_drivers(&drivers, &args.search, args.sort);

    if output.is_json() {
        return output.result(DriversOutput { total, shown: shown.len(), drivers: shown });
    }

    output.section("Drivers");
    let rows: Vec<DriverRow> = shown.iter().map(DriverRow::from).collect();
    let count = rows.len();
    output.table(rows)?;

    if !args.search.is_empty() {
        output.info(format!("{} of {} drivers match '{}'", count, total, args.search));
    }

    Ok(())
}
