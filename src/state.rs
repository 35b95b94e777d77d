//! Shared application state.

use crate::balance::BalanceService;
use crate::config::Config;
use crate::credentials::StaticCredentialStore;
use crate::exchange::BybitClient;
use anyhow::Result;
use std::sync::Arc;

/// State shared across request handlers.
pub struct AppState {
    pub balance: BalanceService,
}

impl AppState {
    /// Wire the credential store and exchange client from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let store = Arc::new(StaticCredentialStore::new(&config.subaccounts));
        let client = BybitClient::new(&config.bybit)?;
        Ok(Self {
            balance: BalanceService::new(store, client),
        })
    }
}
