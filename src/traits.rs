//! Capability contracts between the orchestrator and its collaborators.

use crate::authenticator::CredentialSetup;
use crate::error::Result;

/// Validation callback applied to interactive input before it is accepted.
///
/// Returns `Err` with a user-facing message when the input is unacceptable;
/// the display layer is expected to show the message and re-prompt.
pub type Validator<'a> = &'a dyn Fn(&str) -> Result<()>;

/// Outcome of an interactive prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// The user supplied a value that passed validation.
    Ok(String),
    /// The user declined to answer.
    Cancelled,
}

/// Interactive prompt collaborator.
///
/// Implemented by the embedding display subsystem. Both methods take a
/// validator; implementations re-prompt until the validator accepts the
/// input or the user gives up.
pub trait UserInput {
    /// Prompt for a line of text.
    fn prompt_value(&self, message: &str, validator: Validator<'_>) -> PromptOutcome;

    /// Prompt for a filesystem path.
    fn prompt_path(&self, message: &str, validator: Validator<'_>) -> PromptOutcome;
}

/// Shared configuration collaborator.
///
/// The embedding configuration system owns key namespacing and persistence;
/// this crate only reads and writes through it.
pub trait PluginConfig {
    /// Look up a configured value.
    fn conf(&self, key: &str) -> Option<String>;

    /// Store a newly collected value.
    fn set_conf(&mut self, key: &str, value: String);
}

/// One ACME DNS-01 challenge, owned by the external ACME layer.
///
/// Supplies the three strings the orchestrator needs and produces the proof
/// response returned to the ACME server. Cryptographic content is opaque to
/// this crate.
pub trait Dns01Challenge {
    /// Proof object returned per challenge after the propagation wait.
    type Response;

    /// The base domain being validated.
    fn domain(&self) -> &str;

    /// Fully-qualified name where the TXT record must be created,
    /// normally `_acme-challenge.<domain>`.
    fn validation_domain_name(&self) -> &str;

    /// TXT record content (an opaque token).
    fn validation_value(&self) -> &str;

    /// Build the proof response for this challenge.
    fn response(&self) -> Self::Response;
}

/// DNS provider binding.
///
/// One implementation per DNS provider; the orchestrator holds it as a
/// trait object and drives the whole challenge lifecycle through it.
pub trait DnsProvider {
    /// Establish credentials, prompting through `setup` where necessary.
    ///
    /// Called once per [`perform_all`](crate::DnsAuthenticator::perform_all)
    /// invocation and must therefore be idempotent.
    fn setup_credentials(&mut self, setup: &mut CredentialSetup<'_>) -> Result<()>;

    /// Create a TXT record so that a DNS lookup of `record_name` returns
    /// `record_value`.
    ///
    /// Must fail with a descriptive error if credentials are invalid, the
    /// zone owning `domain` cannot be located, or the provider API rejects
    /// the request. Bindings typically probe
    /// [`base_domain_guesses`](crate::utils::domain::base_domain_guesses)
    /// to find the zone the account actually manages.
    fn create_txt_record(&self, domain: &str, record_name: &str, record_value: &str)
    -> Result<()>;

    /// Delete the TXT record created by
    /// [`create_txt_record`](Self::create_txt_record).
    ///
    /// Must treat an already-absent record as success; cleanup must never
    /// fail merely because the record is gone.
    fn delete_txt_record(&self, domain: &str, record_name: &str, record_value: &str)
    -> Result<()>;
}
