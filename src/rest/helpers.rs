use axum::{http::StatusCode, Json};
use serde_json::Value;

use crate::error::{MeteoError, Result};
use crate::validation::{current_year, parse_month, parse_year};

use super::dto::ErrorResponse;

pub(crate) type ApiResult = std::result::Result<Json<Value>, (StatusCode, Json<ErrorResponse>)>;

const INTERNAL_ERROR: &str = "Internal server error";

/// Input problems are 400 with their message; everything else is a 500 whose
/// detail stays in the log.
pub(crate) fn map_error(err: MeteoError) -> (StatusCode, Json<ErrorResponse>) {
    if err.is_client_error() {
        let body = ErrorResponse {
            error: err.to_string(),
            details: None,
        };
        return (StatusCode::BAD_REQUEST, Json(body));
    }

    let body = ErrorResponse {
        error: INTERNAL_ERROR.to_string(),
        details: None,
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body))
}

pub(crate) fn respond(result: Result<Value>, what: &str) -> ApiResult {
    match result {
        Ok(payload) => Ok(Json(payload)),
        Err(err) => {
            tracing::error!("Error getting {}: {}", what, err);
            Err(map_error(err))
        }
    }
}

pub(crate) fn year_param(raw: &str) -> std::result::Result<i32, (StatusCode, Json<ErrorResponse>)> {
    parse_year(raw, current_year()).map_err(map_error)
}

pub(crate) fn month_param(raw: &str) -> std::result::Result<u32, (StatusCode, Json<ErrorResponse>)> {
    parse_month(raw).map_err(map_error)
}
