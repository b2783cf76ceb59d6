//! Credentials file loading and validation.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use ini::Ini;

use crate::error::{CredentialValidationError, FieldError, PluginError, Result};
use crate::utils::fs::validate_file_permissions;

/// Pure key-mapper applied to logical property names before file lookup.
///
/// Lets a binding address properties by short logical names while the file
/// carries namespaced ones (e.g. `api_token` -> `dns_myprovider_api_token`).
pub type KeyMapper = Box<dyn Fn(&str) -> String + Send + Sync>;

/// A user-supplied key-value file holding provider API credentials.
///
/// Loading validates that the file exists and is a regular file, and warns
/// (without failing) when its mode bits grant any access to "others". The
/// parsed entries are immutable for the lifetime of the value; the file is
/// read exactly once.
pub struct CredentialsConfiguration {
    path: PathBuf,
    entries: HashMap<String, String>,
    mapper: KeyMapper,
}

impl std::fmt::Debug for CredentialsConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfiguration")
            .field("path", &self.path)
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

impl CredentialsConfiguration {
    /// Load a credentials file with the identity key-mapper.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open_with_mapper(path, Box::new(|key: &str| key.to_string()))
    }

    /// Load a credentials file, mapping logical property names through
    /// `mapper` on every lookup.
    pub fn open_with_mapper(path: impl Into<PathBuf>, mapper: KeyMapper) -> Result<Self> {
        let path = path.into();
        validate_file_permissions(&path)?;

        let ini = Ini::load_from_file(&path).map_err(|e| PluginError::MalformedCredentialsFile {
            path: path.clone(),
            detail: e.to_string(),
        })?;

        // The file is treated as one flat namespace; section headers only
        // group entries visually.
        let mut entries = HashMap::new();
        for (_section, properties) in ini.iter() {
            for (key, value) in properties.iter() {
                entries.insert(key.to_string(), value.to_string());
            }
        }

        Ok(Self {
            path,
            entries,
            mapper,
        })
    }

    /// Ensure that every `(key, label)` pair in `required` names a present,
    /// non-empty property.
    ///
    /// Failures are collected across all properties and raised as one
    /// aggregate error, so the user fixes the whole file in a single run
    /// instead of discovering problems one at a time.
    pub fn require(&self, required: &[(&str, &str)]) -> Result<()> {
        let mut errors = Vec::new();

        for (key, label) in required {
            let field = (self.mapper)(key);
            match self.entries.get(&field) {
                None => errors.push(FieldError::Missing {
                    field,
                    label: (*label).to_string(),
                }),
                Some(value) if value.trim().is_empty() => errors.push(FieldError::Empty {
                    field,
                    label: (*label).to_string(),
                }),
                Some(_) => {}
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CredentialValidationError {
                path: self.path.clone(),
                errors,
            }
            .into())
        }
    }

    /// Look up a property value by logical name, as transformed by the
    /// key-mapper.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(&(self.mapper)(key))
            .map(String::as_str)
    }

    /// Path the credentials were loaded from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_credentials(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn open_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = CredentialsConfiguration::open(dir.path().join("absent.ini"));
        assert!(matches!(result, Err(PluginError::FileNotFound { .. })));
    }

    #[test]
    fn open_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = CredentialsConfiguration::open(dir.path());
        assert!(matches!(result, Err(PluginError::NotAFile { .. })));
    }

    #[test]
    fn get_returns_parsed_values() {
        let file = write_credentials("api_token = abc123\nemail = admin@example.com\n");
        let creds = CredentialsConfiguration::open(file.path()).unwrap();

        assert_eq!(creds.get("api_token"), Some("abc123"));
        assert_eq!(creds.get("email"), Some("admin@example.com"));
        assert_eq!(creds.get("missing"), None);
    }

    #[test]
    fn sections_are_flattened() {
        let file = write_credentials("[default]\napi_token = abc123\n");
        let creds = CredentialsConfiguration::open(file.path()).unwrap();

        assert_eq!(creds.get("api_token"), Some("abc123"));
    }

    #[test]
    fn mapper_is_applied_on_lookup() {
        let file = write_credentials("dns_acme_api_token = abc123\n");
        let creds = CredentialsConfiguration::open_with_mapper(
            file.path(),
            Box::new(|key: &str| format!("dns_acme_{key}")),
        )
        .unwrap();

        assert_eq!(creds.get("api_token"), Some("abc123"));
        assert!(creds.require(&[("api_token", "API token")]).is_ok());
    }

    #[test]
    fn require_passes_when_all_present() {
        let file = write_credentials("api_token = abc123\n");
        let creds = CredentialsConfiguration::open(file.path()).unwrap();

        assert!(creds.require(&[("api_token", "API token")]).is_ok());
    }

    #[test]
    fn require_reports_missing_key_with_label() {
        let file = write_credentials("other = x\n");
        let creds = CredentialsConfiguration::open(file.path()).unwrap();

        let err = creds
            .require(&[("api_token", "API token for the account")])
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("api_token"));
        assert!(message.contains("API token for the account"));
        assert!(message.contains("not found"));
    }

    #[test]
    fn require_reports_empty_key_with_label() {
        let file = write_credentials("api_token =\n");
        let creds = CredentialsConfiguration::open(file.path()).unwrap();

        let err = creds.require(&[("api_token", "API token")]).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("api_token"));
        assert!(message.contains("not set"));
    }

    #[test]
    fn require_aggregates_all_failures_into_one_error() {
        let file = write_credentials("key_secret =\n");
        let creds = CredentialsConfiguration::open(file.path()).unwrap();

        let err = creds
            .require(&[
                ("key_id", "access key ID"),
                ("key_secret", "access key secret"),
                ("region", "account region"),
            ])
            .unwrap_err();

        let PluginError::CredentialValidation(validation) = err else {
            panic!("expected CredentialValidation, got {err:?}");
        };
        assert_eq!(validation.errors.len(), 3);
        // Input order is preserved in the report.
        assert!(matches!(validation.errors[0], FieldError::Missing { .. }));
        assert!(matches!(validation.errors[1], FieldError::Empty { .. }));
        assert!(matches!(validation.errors[2], FieldError::Missing { .. }));
        assert!(validation.to_string().contains("properties"));
    }
}
