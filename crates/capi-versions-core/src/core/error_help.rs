//! Human-facing hints attached to errors before they are printed.

use crate::core::error::VersionsError;

/// An error message paired with an optional suggestion for the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorHelp {
    pub message: String,
    pub suggestion: Option<String>,
}

impl ErrorHelp {
    pub fn from_error(error: &VersionsError) -> Self {
        Self {
            message: error.to_string(),
            suggestion: suggestion_for(error).map(str::to_string),
        }
    }
}

fn suggestion_for(error: &VersionsError) -> Option<&'static str> {
    match error {
        VersionsError::Changelog(msg) if msg.contains("rate limit") || msg.contains("403") => {
            Some("Set TOKEN to a GitHub token to raise the API rate limit.")
        }
        VersionsError::Changelog(_) => {
            Some("Check CHANGELOG_REPOSITORY and GITHUB_API_URL, then wait for the next run.")
        }
        VersionsError::Http(_) => Some("Check network connectivity to the upstream endpoint."),
        VersionsError::Provider(_) => {
            Some("Check PROVIDERS_FILE / PROVIDERS_DASHBOARD_URL or the bundled providers.json.")
        }
        VersionsError::Config(_) => {
            Some("Check the environment variables and the --config file for invalid values.")
        }
        VersionsError::Publish(_) | VersionsError::Io(_) => {
            Some("Make sure the static directory exists and is writable.")
        }
        VersionsError::Server(_) => Some("Set PORT to a free port."),
        VersionsError::Json(_)
        | VersionsError::Yaml(_)
        | VersionsError::Version(_) => None,
    }
}

/// Render an error with its suggestion (if any) for terminal output.
pub fn format_error_with_help(error: &VersionsError) -> String {
    let help = ErrorHelp::from_error(error);
    match help.suggestion {
        Some(suggestion) => format!("error: {}\n  help: {}", help.message, suggestion),
        None => format!("error: {}", help.message),
    }
}
