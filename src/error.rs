//! Error taxonomy for the balance gateway.
//!
//! Every failure mode of the credential-lookup → sign → fetch → normalize
//! pipeline is a distinct variant so callers can tell "not Bybit" apart
//! from "Bybit call failed". All variants render as the uniform
//! `{"success": false, "error": ...}` envelope; secrets and stack traces
//! never reach the response body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Failure envelope returned for every error.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: String,
}

/// Credential store failures, kept separate so the store trait does not
/// depend on the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    /// No credentials stored under the given subaccount id.
    #[error("subaccount not found: {0}")]
    NotFound(String),

    /// The store backend itself failed.
    #[error("credential lookup failed: {0}")]
    Backend(String),
}

/// Top-level error for a balance request.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Malformed or missing request input.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Credential retrieval failed before any exchange call was made.
    #[error(transparent)]
    Credential(#[from] CredentialError),

    /// The stored credential does not belong to a supported exchange.
    #[error("unsupported exchange for subaccount \"{display_name}\"")]
    UnsupportedExchange { display_name: String },

    /// Network-level failure talking to the exchange (DNS, timeout,
    /// connection refused). Single attempt, no retry.
    #[error("exchange request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The exchange answered with a non-success HTTP status.
    #[error("exchange returned HTTP {status}: {message}")]
    ExchangeHttp { status: u16, message: String },

    /// HTTP 200 but a non-zero application-level return code in the body.
    #[error("exchange error {code}: {message}")]
    ExchangeApi { code: i64, message: String },
}

impl GatewayError {
    /// HTTP status for the response envelope. Exchange HTTP failures
    /// mirror the upstream status; everything else maps by taxonomy.
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::Credential(CredentialError::NotFound(_)) => StatusCode::NOT_FOUND,
            GatewayError::Credential(CredentialError::Backend(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            GatewayError::UnsupportedExchange { .. } => StatusCode::BAD_REQUEST,
            GatewayError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::ExchangeHttp { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            GatewayError::ExchangeApi { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let body = Json(ErrorEnvelope {
            success: false,
            error: self.to_string(),
        });
        (self.status_code(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exchange_http_status_is_mirrored() {
        let err = GatewayError::ExchangeHttp {
            status: 403,
            message: "ip banned".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn invalid_upstream_status_falls_back_to_500() {
        let err = GatewayError::ExchangeHttp {
            status: 7,
            message: "garbage".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn unknown_subaccount_is_not_found() {
        let err = GatewayError::Credential(CredentialError::NotFound("abc".to_string()));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn unsupported_exchange_names_the_subaccount() {
        let err = GatewayError::UnsupportedExchange {
            display_name: "MyBinance".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("MyBinance"));
    }
}
