//! Request and response models for the HTTP API.

use crate::exchange::BalanceReport;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/subaccount/balance`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceRequest {
    pub subaccount_id: String,
}

/// Success envelope wrapping a normalized balance report.
#[derive(Debug, Serialize)]
pub struct BalanceEnvelope {
    pub success: bool,
    pub data: BalanceReport,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
