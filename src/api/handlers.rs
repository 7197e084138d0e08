//! HTTP request handlers for the attendance pay API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{aggregate_period, compose_salary, parse_record, validate_amount};
use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::models::{AttendanceInterval, CalculationResult, PaymentStructure, SalaryInputs};

use super::request::{AmountValidationRequest, CalculationRequest};
use super::response::{AmountValidationResponse, ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/payment-structure/validate", post(validate_amount_handler))
        .with_state(state)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts the attendance of one pay period and returns the classified
/// intervals, the period aggregate and, when a payment structure is supplied,
/// the salary composition.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let interval_count = request.intervals.len();
    match perform_calculation(request, state.config()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = result.employee_id.as_deref().unwrap_or("-"),
                intervals_count = interval_count,
                overtime_amount = %result.aggregate.overtime_amount,
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Runs the full pay period calculation for one request.
fn perform_calculation(
    request: CalculationRequest,
    config: &ConfigLoader,
) -> EngineResult<CalculationResult> {
    let basis = config.rate_basis(request.basic, request.rate_mode, request.divide_by);

    let intervals = request
        .intervals
        .into_iter()
        .map(|interval| parse_record(&interval.into()))
        .collect::<EngineResult<Vec<AttendanceInterval>>>()?;

    let period = aggregate_period(&intervals, &basis)?;

    let salary = match request.payment_structure {
        Some(structure_request) => {
            let structure = PaymentStructure::try_from(structure_request)?;
            let inputs = SalaryInputs {
                basic: request.basic,
                overtime_amount: period.aggregate.overtime_amount,
                no_pay_amount: request
                    .no_pay_amount
                    .unwrap_or(period.aggregate.no_pay_amount),
                advance_amount: request.advance_amount.unwrap_or_default(),
            };
            Some(compose_salary(&inputs, &structure, config.range_policy())?)
        }
        None => None,
    };

    Ok(CalculationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: request.employee_id,
        rate_mode: basis.mode,
        rate: period.rate,
        intervals: period.intervals,
        aggregate: period.aggregate,
        salary,
        audit_trace: period.audit_trace,
    })
}

/// Handler for POST /payment-structure/validate endpoint.
async fn validate_amount_handler(
    payload: Result<Json<AmountValidationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let valid = validate_amount(&request.value, request.is_salary);
    info!(
        correlation_id = %correlation_id,
        is_salary = request.is_salary,
        valid,
        "Validated payment structure amount"
    );
    json_response(StatusCode::OK, AmountValidationResponse { valid })
}
