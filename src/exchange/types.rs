//! Type definitions for Bybit API responses and the normalized report.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Top-level envelope of every Bybit v5 response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletBalanceResponse {
    pub ret_code: i64,
    #[serde(default)]
    pub ret_msg: String,
    #[serde(default)]
    pub result: WalletBalanceResult,
}

/// `result` payload of the wallet-balance endpoint. The API returns a
/// list even though a unified account yields exactly one element.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WalletBalanceResult {
    #[serde(default)]
    pub list: Vec<UnifiedAccount>,
}

/// One unified account with its aggregates and per-coin balances.
///
/// All numeric fields arrive as strings and may be empty; parsing and
/// zero-defaulting happens in the normalizer, not here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedAccount {
    #[serde(default)]
    pub total_equity: String,
    #[serde(default)]
    pub total_wallet_balance: String,
    #[serde(default)]
    pub total_margin_balance: String,
    #[serde(default)]
    pub total_available_balance: String,
    #[serde(rename = "totalPerpUPL", default)]
    pub total_perp_upl: String,
    #[serde(default)]
    pub total_initial_margin: String,
    #[serde(default)]
    pub coin: Vec<RawCoinBalance>,
}

/// Per-coin balance entry as the exchange sends it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCoinBalance {
    pub coin: String,
    #[serde(default)]
    pub wallet_balance: String,
    #[serde(default)]
    pub usd_value: String,
    #[serde(default)]
    pub equity: String,
    #[serde(default)]
    pub unrealised_pnl: String,
    #[serde(default)]
    pub available_to_withdraw: String,
}

/// Normalized per-asset balance. Only coins with a positive wallet
/// balance make it into a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetBalance {
    pub coin: String,
    pub wallet_balance: Decimal,
    pub usd_value: Decimal,
    pub equity: Decimal,
    pub unrealized_pnl: Decimal,
    pub available_to_withdraw: Decimal,
}

/// Account-level aggregates as reported by the exchange. Surfaced
/// alongside the recomputed total so callers can cross-check.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub total_margin_balance: Decimal,
    pub total_available_balance: Decimal,
    pub total_wallet_balance: Decimal,
    pub total_equity: Decimal,
    #[serde(rename = "totalPerpUPL")]
    pub total_perp_upl: Decimal,
    pub total_initial_margin: Decimal,
}

/// Normalized wallet-balance report.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BalanceReport {
    /// Recomputed sum of the included assets' USD values, independent of
    /// the exchange-reported aggregates.
    #[serde(rename = "balanceUsd")]
    pub total_usd: Decimal,
    pub assets: Vec<AssetBalance>,
    #[serde(rename = "accountInfo")]
    pub account_info: AccountSummary,
}
