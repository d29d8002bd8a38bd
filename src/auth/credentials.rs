//! Credential management for LakeBTC authentication.

use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;

use crate::error::LakeBtcError;

/// Environment variable holding the access key.
pub const ACCESS_KEY_VAR: &str = "LAKEBTC_ACCESS_KEY";
/// Environment variable holding the secret key.
pub const SECRET_KEY_VAR: &str = "LAKEBTC_SECRET_KEY";

/// API credentials: the account identifier and the shared signing secret.
///
/// LakeBTC identifies accounts by the e-mail address registered with the
/// exchange. It is sent in clear as `accesskey` and inside the
/// `Authorization` header.
#[derive(Clone)]
pub struct Credentials {
    /// The account identifier (public)
    pub account_id: String,
    /// The shared secret (private, used for signing)
    shared_secret: SecretString,
}

impl Credentials {
    /// Create new credentials from an account identifier and secret.
    pub fn new(account_id: impl Into<String>, shared_secret: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            shared_secret: SecretString::from(shared_secret.into()),
        }
    }

    /// Get the shared secret for signing.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.shared_secret.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("account_id", &self.account_id)
            .field("shared_secret", &"[REDACTED]")
            .finish()
    }
}

/// Trait for providing API credentials.
///
/// Implement this trait to customize how credentials are retrieved,
/// for example from a secrets manager.
pub trait CredentialsProvider: Send + Sync {
    /// Get the credentials.
    fn get_credentials(&self) -> &Credentials;
}

impl CredentialsProvider for Credentials {
    fn get_credentials(&self) -> &Credentials {
        self
    }
}

/// Static credentials provider that holds credentials directly.
#[derive(Clone, Debug)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Create a new static credentials provider.
    pub fn new(account_id: impl Into<String>, shared_secret: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(account_id, shared_secret),
        }
    }
}

impl CredentialsProvider for StaticCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

impl CredentialsProvider for Arc<StaticCredentials> {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// Credentials provider that reads from environment variables.
///
/// By default, reads from `LAKEBTC_ACCESS_KEY` and `LAKEBTC_SECRET_KEY`.
#[derive(Debug)]
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Create credentials from the default environment variables.
    pub fn from_env() -> Result<Self, LakeBtcError> {
        Self::from_env_vars(ACCESS_KEY_VAR, SECRET_KEY_VAR)
    }

    /// Create credentials from custom environment variable names.
    pub fn from_env_vars(key_var: &str, secret_var: &str) -> Result<Self, LakeBtcError> {
        Self::try_from_env_vars(key_var, secret_var).ok_or(LakeBtcError::MissingCredentials)
    }

    /// Try to create credentials from the default environment variables.
    ///
    /// Returns `None` if either variable is unset.
    pub fn try_from_env() -> Option<Self> {
        Self::try_from_env_vars(ACCESS_KEY_VAR, SECRET_KEY_VAR)
    }

    /// Try to create credentials from custom environment variable names.
    pub fn try_from_env_vars(key_var: &str, secret_var: &str) -> Option<Self> {
        let account_id = std::env::var(key_var).ok()?;
        let shared_secret = std::env::var(secret_var).ok()?;

        Some(Self {
            credentials: Credentials::new(account_id, shared_secret),
        })
    }
}

impl CredentialsProvider for EnvCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}
