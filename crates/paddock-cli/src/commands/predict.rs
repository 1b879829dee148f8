//! Predict command implementation

use anyhow::Result;
use paddock_core::models::{PredictionForm, PredictionResult, RaceId};

use super::CommandContext;
use crate::cli::PredictArgs;
use crate::output::OutputWriter;
use crate::output_types::{PositionRow, PredictOutput};

pub async fn execute(args: PredictArgs, ctx: &CommandContext, output: &OutputWriter) -> Result<()> {
    let form = PredictionForm {
        race_name: args.name.unwrap_or_default(),
        circuit_name: args.circuit.unwrap_or_default(),
        race_date: args.date.unwrap_or_default(),
    };
    let query = form.to_query(args.race_id.map(RaceId))?;
    tracing::debug!(query = ?query, "Requesting prediction");

    let prediction = ctx.service.run_query(&query).await?;

    if output.is_json() {
        return output.result(PredictOutput {
            confidence_percent: prediction.confidence_percent(),
            prediction,
        });
    }

    print_prediction(&prediction, args.full, output)
}

fn print_prediction(prediction: &PredictionResult, full: bool, output: &OutputWriter) -> Result<()> {
    output.section(format!("Prediction: {}", prediction.race_name));

    if let Some(circuit) = &prediction.circuit_name {
        output.kv("Circuit", circuit);
    }
    let venue: Vec<&str> = [&prediction.location, &prediction.country]
        .into_iter()
        .flatten()
        .map(String::as_str)
        .filter(|s| !s.is_empty())
        .collect();
    if !venue.is_empty() {
        output.kv("Venue", venue.join(", "));
    }
    if let Some(date) = &prediction.race_date {
        output.kv("Date", date);
    }

    output.kv(
        "Predicted Winner",
        format!("{} ({})", prediction.predicted_winner, prediction.predicted_winner_team),
    );
    output.kv("Confidence", format!("{}%", prediction.confidence_percent()));

    output.section("Podium");
    let podium: Vec<PositionRow> = prediction
        .top_3
        .iter()
        .map(|entry| PositionRow {
            position: entry.position.to_string(),
            driver: entry.driver.clone(),
            team: entry.team.clone(),
            grid: "-".to_string(),
        })
        .collect();
    output.table(podium)?;

    if full {
        output.section("Full Order");
        let rows: Vec<PositionRow> = prediction
            .full_predictions
            .iter()
            .map(|p| PositionRow {
                position: p.predicted_position.to_string(),
                driver: p.driver_name.clone(),
                team: p.team.clone(),
                grid: p.grid_position.map(|g| g.to_string()).unwrap_or_else(|| "-".to_string()),
            })
            .collect();
        output.table(rows)?;
    } else if !prediction.full_predictions.is_empty() {
        output.info("Run with --full for the complete predicted order");
    }

    Ok(())
}
