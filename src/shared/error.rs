use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Identity formulated (or listing rendered) successfully
    Success = 0,
    /// Application error (catalog, resolution, file I/O, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// A component id that could not be found in its catalog collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingComponent {
    pub category: &'static str,
    pub id: String,
}

impl fmt::Display for MissingComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.category, self.id)
    }
}

fn join_missing(missing: &[MissingComponent]) -> String {
    missing
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Application-specific errors for identity formulation.
#[derive(Debug, Error)]
pub enum FormulationError {
    #[error("Hardware database unavailable: {path}\nDetails: {details}\n\n💡 Hint: Check the --database path or the `database` entry of your config file")]
    CatalogUnavailable { path: PathBuf, details: String },

    #[error("Hardware database failed validation:\n{details}\n\n💡 Hint: Fix the listed catalog entries and try again")]
    CatalogValidation { details: String },

    #[error("Preset '{name}' not found\n\n💡 Hint: Available presets: {}", .available.join(", "))]
    UnknownPreset { name: String, available: Vec<String> },

    #[error("Component id(s) not found in the hardware database: {}\n\n💡 Hint: Run the `list` command to see valid ids", join_missing(.missing))]
    UnknownComponentId { missing: Vec<MissingComponent> },

    #[error("Invalid MAC OUI '{value}': expected three colon-separated hex octets (e.g. 00:1b:21)")]
    InvalidOui { value: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
