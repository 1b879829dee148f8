use console::style;
use paddock_core::PaddockError;
use std::fmt;
use std::path::Path;

/// Enhanced error type with suggestions
pub struct CliError {
    pub message: String,
    pub context: Option<String>,
    pub suggestions: Vec<String>,
    pub help_command: Option<String>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            suggestions: Vec::new(),
            help_command: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_help(mut self, command: impl Into<String>) -> Self {
        self.help_command = Some(command.into());
        self
    }

    pub fn display(&self) {
        eprintln!("{} {}\n", style("✗").red().bold(), style(&self.message).red().bold());

        if let Some(ref context) = self.context {
            eprintln!("{}", context);
            eprintln!();
        }

        if !self.suggestions.is_empty() {
            eprintln!("{}", style("To fix this:").yellow().bold());
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, suggestion);
            }
            eprintln!();
        }

        if let Some(ref help_cmd) = self.help_command {
            eprintln!("{} {}", style("Need help?").cyan(), style(help_cmd).cyan().bold());
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Create error for an unreachable prediction service
pub fn service_unavailable(reason: &str, remediation: &str) -> CliError {
    CliError::new("Cannot reach the prediction service")
        .with_context(format!("Error: {}", reason))
        .with_suggestion(remediation.to_string())
        .with_suggestion("Point at another service: paddock --api-url http://host:8000 ...")
        .with_help("Run: paddock config")
}

/// Create error for a race ID the service does not know
pub fn race_not_found(race_id: i64) -> CliError {
    CliError::new(format!("Race not found: {}", race_id))
        .with_context("The prediction service has no race with this ID.")
        .with_suggestion("List the season's races: paddock races")
        .with_suggestion("Or pick another season: paddock --season 2024 races")
        .with_help("Run: paddock predict --help")
}

/// Create error for a manual prediction without a race name
pub fn missing_race_name(reason: &str) -> CliError {
    CliError::new(reason.to_string())
        .with_suggestion("Predict a scheduled race: paddock predict <RACE_ID>")
        .with_suggestion("Or describe one: paddock predict --name \"Monaco Grand Prix\"")
        .with_help("Run: paddock predict --help")
}

/// Create error for a missing configuration file
pub fn config_file_not_found(path: &Path) -> CliError {
    CliError::new("Configuration file not found")
        .with_context(format!("Path: {}", path.display()))
        .with_suggestion("Check the --config path")
        .with_suggestion("Or drop --config to use ./paddock.toml and PADDOCK_* variables")
        .with_help("Run: paddock config")
}

/// Create error for invalid configuration
pub fn invalid_config(key: &str, reason: &str) -> CliError {
    CliError::new(format!("Invalid configuration: {}", key))
        .with_context(format!("Configuration value is invalid.\n\nReason: {}", reason))
        .with_suggestion("Check paddock.toml for syntax errors")
        .with_suggestion("Check PADDOCK_* environment variables and command-line overrides")
        .with_help("Run: paddock config")
}

/// Convert anyhow::Error to CliError with context
pub fn from_anyhow(error: anyhow::Error) -> CliError {
    let error = match error.downcast::<CliError>() {
        Ok(cli_error) => return cli_error,
        Err(error) => error,
    };

    match error.downcast_ref::<PaddockError>() {
        Some(PaddockError::ServiceUnavailable { reason, remediation }) => {
            service_unavailable(reason, remediation)
        }
        Some(PaddockError::RaceNotFound { race_id }) => race_not_found(*race_id),
        Some(PaddockError::InvalidRequest { reason }) => missing_race_name(reason),
        Some(PaddockError::ConfigInvalid { key, reason }) => invalid_config(key, reason),
        Some(PaddockError::Upstream { status, detail }) => CliError::new(detail.clone())
            .with_context(format!("The prediction service answered with status {}.", status)),
        _ => CliError::new(format!("{:#}", error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_gets_suggestions() {
        let err = anyhow::Error::new(PaddockError::ServiceUnavailable {
            reason: "connection refused".to_string(),
            remediation: "Start the service".to_string(),
        });
        let cli = from_anyhow(err);
        assert_eq!(cli.message, "Cannot reach the prediction service");
        assert_eq!(cli.suggestions[0], "Start the service");
    }

    #[test]
    fn test_context_is_kept_for_unknown_errors() {
        let err = anyhow::anyhow!("disk full").context("Failed to write");
        assert_eq!(from_anyhow(err).message, "Failed to write: disk full");
    }

    #[test]
    fn test_cli_error_passes_through() {
        let err = anyhow::Error::new(race_not_found(9));
        assert_eq!(from_anyhow(err).message, "Race not found: 9");
    }

    #[test]
    fn test_upstream_detail_is_message() {
        let err = anyhow::Error::new(PaddockError::Upstream {
            status: 500,
            detail: "Failed to get prediction".to_string(),
        });
        assert_eq!(from_anyhow(err).message, "Failed to get prediction");
    }
}
