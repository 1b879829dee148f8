//! Config command implementation

use anyhow::Result;
use console::style;
use paddock_core::config::ConfigSource;

use super::CommandContext;
use crate::output::OutputWriter;
use crate::output_types::{ConfigEntry, ConfigOutput};

/// Display order of the configuration keys
const KEYS: [&str; 5] = ["api_url", "season", "marker_size", "port", "cors_origin"];

pub fn execute(ctx: &CommandContext, output: &OutputWriter) -> Result<()> {
    let map = ctx.config.to_inspection_map();
    let values: Vec<ConfigEntry> = KEYS
        .iter()
        .filter_map(|key| {
            map.get(*key).map(|(value, source)| ConfigEntry {
                key: key.to_string(),
                value: value.clone(),
                source: *source,
            })
        })
        .collect();

    let config_file = ctx.config_file.as_ref().map(|p| p.display().to_string());

    if output.is_json() {
        return output.result(ConfigOutput { config_file, values });
    }

    output.section("Configuration");
    for entry in &values {
        output.kv(&entry.key, format!("{} {}", entry.value, style(source_label(entry.source)).dim()));
    }

    match config_file {
        Some(path) => output.kv("Config File", path),
        None => output.info("No paddock.toml found; using defaults and PADDOCK_* variables"),
    }

    Ok(())
}

fn source_label(source: ConfigSource) -> &'static str {
    match source {
        ConfigSource::Default => "(default)",
        ConfigSource::File => "(file)",
        ConfigSource::Environment => "(env)",
        ConfigSource::Cli => "(cli)",
    }
}
