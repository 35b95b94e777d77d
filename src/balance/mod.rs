//! The balance pipeline: credential lookup, exchange guard, signed fetch,
//! normalization.

use crate::credentials::{CredentialStore, Exchange};
use crate::error::GatewayError;
use crate::exchange::{normalize, BalanceReport, BybitClient};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Stateless per-request orchestrator. Credentials are fetched fresh on
/// every call; concurrent requests for different subaccounts are fully
/// independent.
pub struct BalanceService {
    store: Arc<dyn CredentialStore>,
    client: BybitClient,
}

impl BalanceService {
    pub fn new(store: Arc<dyn CredentialStore>, client: BybitClient) -> Self {
        Self { store, client }
    }

    /// Resolve a subaccount's credentials and fetch its normalized
    /// unified-account balance.
    ///
    /// Credentials that do not belong to Bybit are rejected before any
    /// outbound call is made, so a mismatched key never reaches the
    /// exchange.
    #[instrument(skip(self))]
    pub async fn wallet_balance(&self, subaccount_id: &str) -> Result<BalanceReport, GatewayError> {
        let creds = self.store.lookup(subaccount_id).await?;

        if creds.exchange != Some(Exchange::Bybit) {
            return Err(GatewayError::UnsupportedExchange {
                display_name: creds.display_name,
            });
        }

        debug!(
            demo = creds.is_demo,
            display_name = %creds.display_name,
            "Fetching wallet balance"
        );

        let raw = self
            .client
            .wallet_balance(&creds.api_key, &creds.secret_key, creds.is_demo)
            .await?;

        Ok(normalize(&raw))
    }
}
