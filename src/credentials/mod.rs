//! Subaccount credential records and the store they come from.
//!
//! Credentials live outside this service (per-user encrypted storage); the
//! gateway only sees them through the [`CredentialStore`] trait and fetches
//! them fresh on every request. Secrets are never logged and never echoed
//! back to callers.

use crate::error::CredentialError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Supported exchanges.
///
/// Stored as a structured field rather than inferred from free text; the
/// display-name heuristic survives only as a fallback for legacy entries
/// that never declared their exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Exchange {
    Bybit,
}

impl Exchange {
    /// Legacy fallback: infer the exchange from a user-editable display
    /// name. Case-insensitive substring match.
    pub fn from_display_name(name: &str) -> Option<Self> {
        if name.to_lowercase().contains("bybit") {
            Some(Exchange::Bybit)
        } else {
            None
        }
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exchange::Bybit => write!(f, "Bybit"),
        }
    }
}

/// Decrypted API credentials for one subaccount.
#[derive(Debug, Clone)]
pub struct SubaccountCredentials {
    pub api_key: String,
    pub secret_key: String,
    pub display_name: String,
    /// `None` when the entry predates the structured field and the
    /// display name gave no hint either.
    pub exchange: Option<Exchange>,
    /// Demo (paper-trading) account; routes to the demo API host.
    pub is_demo: bool,
}

/// Source of subaccount credentials.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Fetch the decrypted credentials for a subaccount id.
    async fn lookup(&self, subaccount_id: &str) -> Result<SubaccountCredentials, CredentialError>;
}

/// One credential entry as declared in the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubaccountEntry {
    pub id: String,
    pub api_key: String,
    pub secret_key: String,
    #[serde(default)]
    pub display_name: String,
    /// Structured exchange field; falls back to the display-name heuristic
    /// when absent.
    #[serde(default)]
    pub exchange: Option<Exchange>,
    #[serde(default)]
    pub demo: bool,
}

/// Config-backed store: the whole credential table is loaded at startup.
pub struct StaticCredentialStore {
    entries: HashMap<String, SubaccountCredentials>,
}

impl StaticCredentialStore {
    pub fn new(entries: &[SubaccountEntry]) -> Self {
        let entries = entries
            .iter()
            .map(|e| {
                let exchange = e
                    .exchange
                    .or_else(|| Exchange::from_display_name(&e.display_name));
                (
                    e.id.clone(),
                    SubaccountCredentials {
                        api_key: e.api_key.clone(),
                        secret_key: e.secret_key.clone(),
                        display_name: e.display_name.clone(),
                        exchange,
                        is_demo: e.demo,
                    },
                )
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl CredentialStore for StaticCredentialStore {
    async fn lookup(&self, subaccount_id: &str) -> Result<SubaccountCredentials, CredentialError> {
        self.entries
            .get(subaccount_id)
            .cloned()
            .ok_or_else(|| CredentialError::NotFound(subaccount_id.to_string()))
    }
}
