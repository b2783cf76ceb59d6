//! Unified error type definition

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// A single credential property that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum FieldError {
    /// The property is absent from the credentials file.
    Missing {
        /// Physical (mapped) property name.
        field: String,
        /// Human-readable description of the property.
        label: String,
    },
    /// The property is present but empty or whitespace-only.
    Empty {
        /// Physical (mapped) property name.
        field: String,
        /// Human-readable description of the property.
        label: String,
    },
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing { field, label } => {
                write!(f, "Property \"{field}\" not found (should be {label}).")
            }
            Self::Empty { field, label } => {
                write!(f, "Property \"{field}\" not set (should be {label}).")
            }
        }
    }
}

/// Aggregate validation failure for a credentials file.
///
/// Every missing or empty property is collected before the error is raised,
/// so one run surfaces everything the user has to fix.
#[derive(Debug, Clone, Serialize)]
pub struct CredentialValidationError {
    /// Path of the credentials file that failed validation.
    pub path: PathBuf,
    /// Each property that was missing or empty.
    pub errors: Vec<FieldError>,
}

impl std::fmt::Display for CredentialValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let noun = if self.errors.len() == 1 {
            "property"
        } else {
            "properties"
        };
        write!(
            f,
            "Missing {noun} in credentials configuration file {}:",
            self.path.display()
        )?;
        for error in &self.errors {
            write!(f, "\n * {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for CredentialValidationError {}

/// Plugin-level error type
///
/// One user-facing error kind carrying a human-readable message; the
/// variants distinguish the underlying cause.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum PluginError {
    /// Credentials file does not exist.
    #[error("File not found: {}", path.display())]
    FileNotFound {
        /// Path that was checked.
        path: PathBuf,
    },

    /// Path exists but is not a regular file.
    #[error("Path is not a file: {}", path.display())]
    NotAFile {
        /// Path that was checked.
        path: PathBuf,
    },

    /// Credentials file exists but could not be parsed.
    #[error("Error parsing credentials configuration file {}: {detail}", path.display())]
    MalformedCredentialsFile {
        /// Path of the unparseable file.
        path: PathBuf,
        /// Parser error details.
        detail: String,
    },

    /// One or more required credential properties are missing or empty.
    #[error("{0}")]
    CredentialValidation(#[from] CredentialValidationError),

    /// Interactive input rejected by a validator.
    #[error("{0}")]
    InvalidInput(String),

    /// The user declined an interactive prompt.
    #[error("{label} required to proceed.")]
    PromptCancelled {
        /// Label of the piece of information that was being collected.
        label: String,
    },

    /// A provider binding rejected a record operation.
    #[error("{detail}")]
    Provider {
        /// Binding-specific failure description.
        detail: String,
    },
}

/// Convenience type alias for `Result<T, PluginError>`.
pub type Result<T> = std::result::Result<T, PluginError>;
