//! API request handlers.

use crate::api::models::{BalanceEnvelope, BalanceRequest, HealthResponse};
use crate::error::GatewayError;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;
use tracing::{error, info};

/// Health check endpoint.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `POST /api/subaccount/balance` — fetch the normalized wallet balance
/// for one stored subaccount.
///
/// A missing or malformed body maps to 400 with the same failure envelope
/// as every other error; the exchange secret never appears in any log or
/// response.
pub async fn subaccount_balance(
    State(state): State<Arc<AppState>>,
    body: Result<Json<BalanceRequest>, JsonRejection>,
) -> Result<Json<BalanceEnvelope>, GatewayError> {
    let Json(request) = body.map_err(|rejection| {
        GatewayError::InvalidRequest(format!("expected {{\"subaccountId\"}}: {rejection}"))
    })?;

    let subaccount_id = request.subaccount_id.trim();
    if subaccount_id.is_empty() {
        return Err(GatewayError::InvalidRequest(
            "subaccountId must not be empty".to_string(),
        ));
    }

    match state.balance.wallet_balance(subaccount_id).await {
        Ok(report) => {
            info!(
                subaccount_id,
                assets = report.assets.len(),
                "Balance request served"
            );
            Ok(Json(BalanceEnvelope {
                success: true,
                data: report,
            }))
        }
        Err(err) => {
            error!(subaccount_id, error = %err, "Balance request failed");
            Err(err)
        }
    }
}

/// Empty 200 for cross-origin preflight.
pub async fn balance_preflight() -> StatusCode {
    StatusCode::OK
}
