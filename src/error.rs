//! Error types with fix suggestions
//!
//! Building a request never fails. Errors only come from catalogue lookups,
//! untyped parameter names, configuration, and sending a call.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AxtError>;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

#[derive(Error, Debug)]
pub enum AxtError {
    // ─────────────────────────────────────────────────────────────
    // Catalogue lookups (AXT-010 to AXT-014)
    // ─────────────────────────────────────────────────────────────
    #[error("AXT-010: Unknown action '{action}'")]
    UnknownAction { action: String },

    #[error("AXT-011: Action '{action}' is not available in API version '{version}'")]
    UnknownVersion { action: String, version: String },

    #[error("AXT-012: Action '{action}' has no parameter '{param}'")]
    UnknownParameter { action: String, param: String },

    #[error("AXT-013: Invalid parameter '{input}': expected KEY=VALUE")]
    InvalidParam { input: String },

    #[error("AXT-014: Unknown API version '{version}' (available: {available})")]
    UnknownApiVersion { version: String, available: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration (AXT-020 to AXT-021)
    // ─────────────────────────────────────────────────────────────
    #[error("AXT-020: Config error: {reason}")]
    Config { reason: String },

    #[error("AXT-021: Invalid region id '{region_id}'")]
    InvalidRegion { region_id: String },

    // ─────────────────────────────────────────────────────────────
    // Sending (AXT-030 to AXT-031)
    // ─────────────────────────────────────────────────────────────
    #[error("AXT-030: Transport error: {0}")]
    Transport(String),

    #[error("AXT-031: {action} failed ({code}): {message}")]
    Remote {
        action: String,
        code: String,
        message: String,
        request_id: Option<String>,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FixSuggestion for AxtError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            AxtError::UnknownAction { .. } => {
                Some("Run `axt-request list` to see the available actions")
            }
            AxtError::UnknownVersion { .. } => {
                Some("Drop --api-version or pick a version listed for the action")
            }
            AxtError::UnknownParameter { .. } => {
                Some("Parameter names are case-sensitive; copy them from `axt-request list`")
            }
            AxtError::InvalidParam { .. } => Some("Use -p Name=value"),
            AxtError::UnknownApiVersion { .. } => {
                Some("Pass one of the listed versions to --api-version, or drop the flag")
            }
            AxtError::Config { .. } => Some("Check the YAML config file syntax and field names"),
            AxtError::InvalidRegion { .. } => Some("Use a region id such as cn-hangzhou"),
            AxtError::Transport(_) => Some("Check network access to the AXT endpoint"),
            AxtError::Remote { .. } => None,
            AxtError::Json(_) => Some("Check the response body is valid JSON"),
            AxtError::YamlParse(_) => Some("Check YAML syntax: indentation and quoting"),
            AxtError::Io(_) => Some("Check file path and permissions"),
        }
    }
}
