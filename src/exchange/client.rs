//! Bybit REST API client.

use crate::config::BybitConfig;
use crate::error::GatewayError;
use crate::exchange::types::{WalletBalanceResponse, WalletBalanceResult};
use anyhow::{Context, Result};
use hmac::{Hmac, Mac};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use sha2::Sha256;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, instrument, warn};

pub const MAINNET_BASE_URL: &str = "https://api.bybit.com";
pub const DEMO_BASE_URL: &str = "https://api-demo.bybit.com";

const WALLET_BALANCE_PATH: &str = "/v5/account/wallet-balance";
const WALLET_BALANCE_QUERY: &str = "accountType=UNIFIED";

/// Generate the HMAC-SHA256 signature Bybit expects.
///
/// The payload is `timestamp + api_key + query_string` concatenated with
/// no separators; output is lowercase hex. Pure and deterministic for a
/// fixed timestamp.
pub fn sign(payload: &str, secret: &str) -> String {
    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(payload.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Bybit API client for the unified-account wallet endpoint.
///
/// Credentials are passed per call rather than held on the client, since
/// one gateway process serves many subaccounts.
pub struct BybitClient {
    http: Client,
    mainnet_base_url: String,
    demo_base_url: String,
}

impl BybitClient {
    /// Create a new Bybit client from configuration.
    ///
    /// A proxy URL that fails to parse is logged and skipped; the client
    /// proceeds without a proxy rather than failing hard.
    pub fn new(config: &BybitConfig) -> Result<Self> {
        let mut builder =
            Client::builder().timeout(std::time::Duration::from_secs(config.timeout_secs));

        if let Some(proxy_url) = &config.proxy_url {
            match reqwest::Proxy::all(proxy_url) {
                Ok(proxy) => {
                    debug!("Routing exchange calls through forward proxy");
                    builder = builder.proxy(proxy);
                }
                Err(err) => {
                    warn!(error = %err, "Invalid proxy URL, continuing without proxy");
                }
            }
        }

        let http = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            mainnet_base_url: config.mainnet_url.clone(),
            demo_base_url: config.demo_url.clone(),
        })
    }

    /// Get current timestamp in milliseconds.
    fn timestamp() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards")
            .as_millis() as u64
    }

    /// Fetch the unified-account wallet balance for one credential pair.
    ///
    /// Demo credentials route to the demo host; the hosts reject each
    /// other's keys. A fresh timestamp is taken per call since the
    /// exchange rejects stale signatures after a few seconds. Single
    /// attempt, no retry.
    #[instrument(skip(self, api_key, secret_key))]
    pub async fn wallet_balance(
        &self,
        api_key: &str,
        secret_key: &str,
        demo: bool,
    ) -> Result<WalletBalanceResult, GatewayError> {
        let base_url = if demo {
            &self.demo_base_url
        } else {
            &self.mainnet_base_url
        };

        let timestamp = Self::timestamp();
        let payload = format!("{timestamp}{api_key}{WALLET_BALANCE_QUERY}");
        let signature = sign(&payload, secret_key);

        let url = format!("{base_url}{WALLET_BALANCE_PATH}?{WALLET_BALANCE_QUERY}");

        let response = self
            .http
            .get(&url)
            .header("X-BAPI-API-KEY", api_key)
            .header("X-BAPI-TIMESTAMP", timestamp.to_string())
            .header("X-BAPI-SIGN", signature)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(GatewayError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            // Pull retMsg out of the error body when the exchange sent one
            let message = match response.json::<serde_json::Value>().await {
                Ok(body) => body
                    .get("retMsg")
                    .and_then(|m| m.as_str())
                    .unwrap_or("no error message from exchange")
                    .to_string(),
                Err(_) => "no error message from exchange".to_string(),
            };
            return Err(GatewayError::ExchangeHttp {
                status: status.as_u16(),
                message,
            });
        }

        let body: WalletBalanceResponse = response.json().await.map_err(GatewayError::Transport)?;

        if body.ret_code != 0 {
            return Err(GatewayError::ExchangeApi {
                code: body.ret_code,
                message: body.ret_msg,
            });
        }

        Ok(body.result)
    }
}
