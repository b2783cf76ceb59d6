//! Generic DNS-01 challenge orchestration.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use log::warn;

use crate::credentials::CredentialsConfiguration;
use crate::error::{PluginError, Result};
use crate::traits::{Dns01Challenge, DnsProvider, PluginConfig, PromptOutcome, UserInput};
use crate::utils::fs::validate_file;

/// Default wait for authoritative DNS changes to become visible.
const DEFAULT_PROPAGATION: Duration = Duration::from_secs(10);

/// Drives the DNS-01 challenge lifecycle for a provider binding.
///
/// One authenticator serves one certificate-issuance attempt: it sets up
/// credentials, creates a TXT record per pending challenge, waits for DNS
/// propagation, hands the proof responses back to the ACME layer, and later
/// removes the records on cleanup.
///
/// The execution model is single-threaded and blocking; the propagation
/// wait suspends the calling thread and is not cancellable. Instances are
/// not meant to be shared across threads or invoked concurrently.
pub struct DnsAuthenticator {
    provider: Box<dyn DnsProvider>,
    config: Box<dyn PluginConfig>,
    input: Box<dyn UserInput>,
    propagation: Duration,
    /// Set once the first create has been attempted; gates `cleanup_all`
    /// so records are never deleted when no create ever ran here.
    attempt_cleanup: bool,
}

impl DnsAuthenticator {
    /// Build an authenticator around a provider binding and its
    /// configuration/prompt collaborators. Propagation defaults to 10
    /// seconds.
    #[must_use]
    pub fn new(
        provider: Box<dyn DnsProvider>,
        config: Box<dyn PluginConfig>,
        input: Box<dyn UserInput>,
    ) -> Self {
        Self {
            provider,
            config,
            input,
            propagation: DEFAULT_PROPAGATION,
            attempt_cleanup: false,
        }
    }

    /// Override the propagation wait, in whole seconds.
    #[must_use]
    pub fn with_propagation_seconds(mut self, seconds: u64) -> Self {
        self.propagation = Duration::from_secs(seconds);
        self
    }

    /// Perform every challenge in input order and return one response per
    /// challenge, 1:1 and order-preserving.
    ///
    /// The first record-creation failure aborts the remaining loop and
    /// propagates; records created before the failure stay eligible for
    /// [`cleanup_all`](Self::cleanup_all) because the cleanup flag is set
    /// before the loop starts.
    pub fn perform_all<C: Dns01Challenge>(&mut self, challenges: &[C]) -> Result<Vec<C::Response>> {
        let mut setup = CredentialSetup {
            config: self.config.as_mut(),
            input: self.input.as_ref(),
        };
        self.provider.setup_credentials(&mut setup)?;

        self.attempt_cleanup = true;

        let mut responses = Vec::with_capacity(challenges.len());
        for challenge in challenges {
            self.provider.create_txt_record(
                challenge.domain(),
                challenge.validation_domain_name(),
                challenge.validation_value(),
            )?;
            responses.push(challenge.response());
        }

        // DNS updates take time to propagate, and probing for them locally
        // is unreliable (this machine may see the update before the ACME
        // server does), so wait a fixed interval believed to be enough.
        thread::sleep(self.propagation);

        Ok(responses)
    }

    /// Remove the TXT records created by [`perform_all`](Self::perform_all).
    ///
    /// No-op when `perform_all` never ran on this instance. Deletion
    /// failures are logged and skipped: cleanup runs on teardown paths
    /// where an error would mask the primary outcome.
    pub fn cleanup_all<C: Dns01Challenge>(&mut self, challenges: &[C]) {
        if !self.attempt_cleanup {
            return;
        }

        for challenge in challenges {
            if let Err(err) = self.provider.delete_txt_record(
                challenge.domain(),
                challenge.validation_domain_name(),
                challenge.validation_value(),
            ) {
                warn!(
                    "Failed to delete TXT record {}: {err}",
                    challenge.validation_domain_name()
                );
            }
        }
    }
}

/// Configuration and prompting handle passed to
/// [`DnsProvider::setup_credentials`].
///
/// Borrows the authenticator's configuration and prompt collaborators for
/// the duration of one setup call.
pub struct CredentialSetup<'a> {
    pub(crate) config: &'a mut dyn PluginConfig,
    pub(crate) input: &'a dyn UserInput,
}

impl CredentialSetup<'_> {
    /// Ensure a scalar configuration value is present, prompting the user
    /// for a non-empty answer when it is absent.
    pub fn configure_value(&mut self, key: &str, label: &str) -> Result<()> {
        if self.config.conf(key).is_none_or(|v| v.is_empty()) {
            let value = self.prompt_for_data(label)?;
            self.config.set_conf(key, value);
        }
        Ok(())
    }

    /// Ensure a filesystem path is configured, prompting when absent.
    ///
    /// Prompted values must name an existing regular file. The stored path
    /// is tilde-expanded and absolute so later renewals are immune to
    /// working-directory changes.
    pub fn configure_file_path(&mut self, key: &str, label: &str) -> Result<()> {
        if self.config.conf(key).is_none_or(|v| v.is_empty()) {
            let value = self.prompt_for_file(label)?;
            let expanded = expand_user(&value);
            let absolute = std::path::absolute(&expanded).unwrap_or_else(|_| expanded.clone());
            self.config
                .set_conf(key, absolute.to_string_lossy().into_owned());
        }
        Ok(())
    }

    /// Ensure a credentials file is configured, load it, and when
    /// `required` is non-empty validate that every `(key, label)` pair
    /// names a present, non-empty property.
    pub fn configure_credentials(
        &mut self,
        key: &str,
        label: &str,
        required: &[(&str, &str)],
    ) -> Result<CredentialsConfiguration> {
        self.configure_file_path(key, label)?;

        let path = self.config.conf(key).unwrap_or_default();
        let credentials = CredentialsConfiguration::open(path)?;
        if !required.is_empty() {
            credentials.require(required)?;
        }
        Ok(credentials)
    }

    fn prompt_for_data(&self, label: &str) -> Result<String> {
        let validator = |value: &str| {
            if value.trim().is_empty() {
                return Err(PluginError::InvalidInput(format!(
                    "Please enter your {label}."
                )));
            }
            Ok(())
        };

        match self
            .input
            .prompt_value(&format!("Input your {label}"), &validator)
        {
            PromptOutcome::Ok(value) => Ok(value),
            PromptOutcome::Cancelled => Err(PluginError::PromptCancelled {
                label: label.to_string(),
            }),
        }
    }

    fn prompt_for_file(&self, label: &str) -> Result<String> {
        let validator = |value: &str| {
            if value.trim().is_empty() {
                return Err(PluginError::InvalidInput(format!(
                    "Please enter a valid path to your {label}."
                )));
            }
            validate_file(&expand_user(value))
        };

        match self
            .input
            .prompt_path(&format!("Input the path to your {label}"), &validator)
        {
            PromptOutcome::Ok(value) => Ok(value),
            PromptOutcome::Cancelled => Err(PluginError::PromptCancelled {
                label: label.to_string(),
            }),
        }
    }
}

/// Expand a leading `~` to the user's home directory.
fn expand_user(path: &str) -> PathBuf {
    if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return home;
    }
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
