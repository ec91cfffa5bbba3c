//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{generate_pay_statement, run_monthly_payroll};
use crate::error::PayrollError;
use crate::models::Employee;

use super::request::{PayrollRequest, StatementRequest};
use super::response::{
    ApiError, ApiErrorResponse, ENGINE_VERSION, PayrollRunResponse, StatementResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
///
/// - `POST /pay-statements`: one statement for one employee
/// - `POST /payroll`: a monthly run over the posted employees
/// - `GET /payroll`: a monthly run over the roster loaded at startup
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/pay-statements", post(statement_handler))
        .route("/payroll", post(payroll_handler).get(roster_payroll_handler))
        .with_state(state)
}

/// Handler for POST /pay-statements.
async fn statement_handler(
    payload: Result<Json<StatementRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing pay statement request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let units_worked = request.units_worked;
    let employee: Employee = request.employee.into();

    let start_time = Instant::now();
    match generate_pay_statement(&employee, units_worked) {
        Ok(statement) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = employee.id,
                gross_pay = %statement.gross_pay(),
                net_pay = %statement.net_pay(),
                duration_us = start_time.elapsed().as_micros(),
                "Pay statement generated"
            );
            json_response(
                StatusCode::OK,
                StatementResponse {
                    calculation_id: correlation_id,
                    timestamp: Utc::now(),
                    engine_version: ENGINE_VERSION.to_string(),
                    statement,
                },
            )
        }
        Err(err) => error_response(err, correlation_id),
    }
}

/// Handler for POST /payroll.
async fn payroll_handler(payload: Result<Json<PayrollRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll run request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let employees: Vec<Employee> = request.employees.into_iter().map(Into::into).collect();

    match run_monthly_payroll(&employees, &request.units) {
        Ok(run) => {
            info!(
                correlation_id = %correlation_id,
                employee_count = run.summary.employee_count,
                total_net = %run.summary.total_net,
                "Payroll run completed"
            );
            json_response(
                StatusCode::OK,
                PayrollRunResponse {
                    calculation_id: correlation_id,
                    timestamp: Utc::now(),
                    engine_version: ENGINE_VERSION.to_string(),
                    period: None,
                    run,
                },
            )
        }
        Err(err) => error_response(err, correlation_id),
    }
}

/// Handler for GET /payroll.
async fn roster_payroll_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing roster payroll request");

    let Some(roster) = state.roster() else {
        warn!(correlation_id = %correlation_id, "No roster configured");
        return json_response(StatusCode::NOT_FOUND, ApiError::roster_not_configured());
    };

    match roster.run_payroll() {
        Ok(run) => json_response(
            StatusCode::OK,
            PayrollRunResponse {
                calculation_id: correlation_id,
                timestamp: Utc::now(),
                engine_version: ENGINE_VERSION.to_string(),
                period: Some(roster.config().period_label()),
                run,
            },
        ),
        Err(err) => error_response(err, correlation_id),
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(err: PayrollError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Calculation failed"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") || body_text.contains("unknown variant") {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::EmployeeRequest;
    use crate::models::EmployeeType;
    use axum::{body::Body, http::Request};
    use rust_decimal::Decimal;
    use tower::ServiceExt;

    fn create_valid_request() -> StatementRequest {
        StatementRequest {
            employee: EmployeeRequest {
                id: 103,
                name: "Carol Williams".to_string(),
                employee_type: EmployeeType::FullTime,
                base_rate: Decimal::from(5000),
                retirement_opt_in: true,
                union_member: true,
            },
            units_worked: Decimal::ZERO,
        }
    }

    async fn post(router: Router, uri: &str, body: String) -> Response {
        router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_statement_request_returns_200() {
        let router = create_router(AppState::without_roster());
        let body = serde_json::to_string(&create_valid_request()).unwrap();

        let response = post(router, "/pay-statements", body).await;
        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: StatementResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(result.statement.employee_id(), 103);
        assert_eq!(result.statement.net_pay(), Decimal::from(3950));
        assert_eq!(result.engine_version, ENGINE_VERSION);
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(AppState::without_roster());

        let response = post(router, "/pay-statements", "{invalid json".to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_negative_units_returns_400() {
        let router = create_router(AppState::without_roster());
        let mut request = create_valid_request();
        request.employee.employee_type = EmployeeType::Contractor;
        request.units_worked = Decimal::from(-3);

        let response = post(
            router,
            "/pay-statements",
            serde_json::to_string(&request).unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_UNITS");
    }

    #[tokio::test]
    async fn test_roster_payroll_without_roster_returns_404() {
        let router = create_router(AppState::without_roster());

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/payroll")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "ROSTER_NOT_CONFIGURED");
    }
}
