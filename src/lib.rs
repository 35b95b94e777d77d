//! # Bybit Balance Gateway
//!
//! A small HTTP service that resolves stored exchange subaccount
//! credentials, issues signed wallet-balance requests to Bybit's v5
//! unified-account endpoint, and returns normalized balance reports.
//!
//! ## Architecture
//!
//! - `config`: Configuration management and validation
//! - `credentials`: Subaccount credential records and store
//! - `exchange`: Bybit REST client (HMAC-SHA256 signing) and normalizer
//! - `balance`: The lookup → guard → fetch → normalize pipeline
//! - `api`: HTTP routes, handlers, and request/response models
//! - `error`: Error taxonomy and response-envelope mapping
//! - `state`: Shared application state

pub mod api;
pub mod balance;
pub mod config;
pub mod credentials;
pub mod error;
pub mod exchange;
pub mod state;

pub use config::Config;
