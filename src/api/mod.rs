//! HTTP API module for the attendance pay engine.
//!
//! This module provides the REST API endpoints for calculating pay for a
//! pay period and for validating payment structure amounts.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AmountValidationRequest, CalculationRequest, IntervalRequest, PaymentLineRequest,
    PaymentStructureRequest,
};
pub use response::{AmountValidationResponse, ApiError, ApiErrorResponse};
pub use state::AppState;
