//! # acme-dns01
//!
//! Generic DNS-01 challenge orchestration for ACME certificate agents.
//!
//! An ACME server proves domain ownership for the DNS-01 challenge by
//! looking up a TXT record at `_acme-challenge.<domain>`. This crate
//! provides the provider-independent half of that workflow:
//!
//! - [`DnsAuthenticator`] — drives the per-authorization lifecycle: set up
//!   credentials once, create one TXT record per pending challenge, wait a
//!   configurable propagation delay, return the proof responses, and later
//!   delete the records on cleanup.
//! - [`DnsProvider`] — the capability contract a concrete DNS provider
//!   binding implements (`setup_credentials` / `create_txt_record` /
//!   `delete_txt_record`).
//! - [`CredentialsConfiguration`] — loads a key-value credentials file,
//!   warns about unsafe permissions, and validates required properties with
//!   a single aggregate error listing everything that is missing or empty.
//! - [`utils`] — file validation and the zone-guessing helper bindings use
//!   to find which domain suffix is a zone their account manages.
//!
//! The ACME object model, the interactive display subsystem, and the shared
//! configuration store are external collaborators, abstracted by the
//! [`Dns01Challenge`], [`UserInput`] and [`PluginConfig`] traits.
//!
//! Execution is single-threaded and blocking; the propagation wait suspends
//! the calling thread (10 seconds by default) and is not cancellable.
//!
//! ## Implementing a provider binding
//!
//! ```no_run
//! use acme_dns01::utils::domain::base_domain_guesses;
//! use acme_dns01::{CredentialSetup, DnsProvider, PluginError, Result};
//!
//! struct ExampleDns {
//!     api_token: Option<String>,
//! }
//!
//! impl DnsProvider for ExampleDns {
//!     fn setup_credentials(&mut self, setup: &mut CredentialSetup<'_>) -> Result<()> {
//!         let credentials = setup.configure_credentials(
//!             "credentials",
//!             "Example DNS credentials file",
//!             &[("api_token", "API token for the Example DNS account")],
//!         )?;
//!         self.api_token = credentials.get("api_token").map(str::to_owned);
//!         Ok(())
//!     }
//!
//!     fn create_txt_record(
//!         &self,
//!         domain: &str,
//!         record_name: &str,
//!         record_value: &str,
//!     ) -> Result<()> {
//!         for _zone in base_domain_guesses(domain) {
//!             // Probe the account for this zone, then create `record_name`
//!             // = `record_value` through the provider API.
//!         }
//!         Err(PluginError::Provider {
//!             detail: format!("no zone found for {domain}"),
//!         })
//!     }
//!
//!     fn delete_txt_record(
//!         &self,
//!         _domain: &str,
//!         _record_name: &str,
//!         _record_value: &str,
//!     ) -> Result<()> {
//!         // Deleting an already-absent record is a success.
//!         Ok(())
//!     }
//! }
//! ```
//!
//! ## Error handling
//!
//! Every operation returns [`Result<T, PluginError>`](PluginError), a single
//! user-facing error kind whose variants name the cause: missing or invalid
//! credentials file, aggregated missing/empty required properties, a
//! declined prompt, or a provider-binding failure. The permission advisory
//! on world-accessible credential files is the sole non-fatal diagnostic
//! and goes through the `log` channel instead.

mod authenticator;
mod credentials;
mod error;
mod traits;
pub mod utils;

// Re-export the public surface
pub use authenticator::{CredentialSetup, DnsAuthenticator};
pub use credentials::{CredentialsConfiguration, KeyMapper};
pub use error::{CredentialValidationError, FieldError, PluginError, Result};
pub use traits::{Dns01Challenge, DnsProvider, PluginConfig, PromptOutcome, UserInput, Validator};
