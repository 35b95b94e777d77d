//! Bybit exchange integration.
//!
//! - `client`: signed REST client (HMAC-SHA256, demo/production hosts)
//! - `normalize`: raw payload → normalized balance report
//! - `types`: wire types and the normalized report model

pub mod client;
pub mod normalize;
pub mod types;

pub use client::{sign, BybitClient, DEMO_BASE_URL, MAINNET_BASE_URL};
pub use normalize::normalize;
pub use types::{AccountSummary, AssetBalance, BalanceReport, WalletBalanceResult};
