//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_payout, calculate_payout_traced, price_session, price_sessions,
    summarize_payouts,
};
use crate::error::{EngineError, EngineResult};
use crate::export::{render_csv, render_daily_tally, render_json};
use crate::models::{CalculationResult, Location, PricedSession, SessionRecord};

use super::request::{CalculationRequest, DateQuery, SessionPayload, SummaryRequest};
use super::response::{AddOnCatalogResponse, ApiError, ApiErrorResponse, HealthResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/addons", get(add_ons_handler))
        .route("/calculate", post(calculate_handler))
        .route("/summary", post(summary_handler))
        .route(
            "/sessions",
            get(list_sessions_handler).post(create_session_handler),
        )
        .route("/sessions/:id", delete(delete_session_handler))
        .route("/export/csv", get(export_csv_handler))
        .route("/export/json", get(export_json_handler))
        .route("/export/tally", get(export_tally_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(err: EngineError) -> Response {
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

/// Maps a JSON body rejection to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") || body_text.contains("did not match") {
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

/// Loads all stored sessions (optionally for one day) and prices them.
fn load_priced(state: &AppState, date: Option<NaiveDate>) -> EngineResult<Vec<PricedSession>> {
    let sessions: Vec<SessionRecord> = state
        .store()
        .load_all()?
        .into_iter()
        .filter(|s| date.is_none_or(|d| s.date == d))
        .collect();
    Ok(price_sessions(&sessions, state.pricing()))
}

/// Handler for GET /health.
async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        pricing_version: state.pricing().metadata().version.clone(),
    })
}

/// Handler for GET /addons.
async fn add_ons_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(AddOnCatalogResponse {
        add_ons: state.pricing().catalog().to_vec(),
    })
}

/// Handler for POST /calculate.
///
/// Accepts session inputs and returns the payout breakdown with its audit
/// trace.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let (session_id, inputs) = request.into_parts();
    let calculation = calculate_payout_traced(&inputs, state.pricing());

    for warning in &calculation.audit_trace.warnings {
        warn!(
            correlation_id = %correlation_id,
            code = %warning.code,
            message = %warning.message,
            "Calculation warning"
        );
    }
    info!(
        correlation_id = %correlation_id,
        session_id = session_id.as_deref().unwrap_or("-"),
        services_count = inputs.services.len(),
        add_ons_count = inputs.add_ons.len(),
        grand_total = %calculation.breakdown.grand_total,
        duration_us = calculation.audit_trace.duration_us,
        "Calculation completed successfully"
    );

    let result = CalculationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        session_id,
        breakdown: calculation.breakdown,
        audit_trace: calculation.audit_trace,
    };
    json_response(StatusCode::OK, result)
}

/// Handler for POST /summary.
///
/// Totals the payouts of several sessions.
async fn summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing summary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let breakdowns: Vec<_> = request
        .sessions
        .iter()
        .map(|inputs| calculate_payout(inputs, state.pricing()))
        .collect();
    let summary = summarize_payouts(&breakdowns);

    info!(
        correlation_id = %correlation_id,
        session_count = summary.session_count,
        grand_total = %summary.totals.grand_total,
        "Summary completed"
    );
    json_response(StatusCode::OK, summary)
}

/// Handler for GET /sessions.
///
/// Returns stored sessions, newest first, each with its payout.
async fn list_sessions_handler(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Response {
    match load_priced(&state, query.date) {
        Ok(priced) => json_response(StatusCode::OK, priced),
        Err(err) => {
            warn!(error = %err, "Failed to load sessions");
            error_response(err)
        }
    }
}

/// Handler for POST /sessions.
///
/// Stores a session (current or legacy layout) and returns it priced.
async fn create_session_handler(
    State(state): State<AppState>,
    payload: Result<Json<SessionPayload>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let record: SessionRecord = match payload {
        Ok(Json(payload)) => payload.into(),
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let breakdown = price_session(&record, state.pricing());
    if let Err(err) = state.store().upsert(record.clone()) {
        warn!(correlation_id = %correlation_id, error = %err, "Failed to store session");
        return error_response(err);
    }

    info!(
        correlation_id = %correlation_id,
        session_id = %record.id,
        grand_total = %breakdown.grand_total,
        "Session stored"
    );
    json_response(
        StatusCode::CREATED,
        PricedSession {
            session: record,
            breakdown,
        },
    )
}

/// Handler for DELETE /sessions/:id.
///
/// Only admins may delete sessions.
async fn delete_session_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let result = state
        .identity()
        .current_user()
        .and_then(|user| user.require_admin("delete sessions"))
        .and_then(|_| state.store().delete(&id));

    match result {
        Ok(()) => {
            info!(session_id = %id, "Session deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => {
            warn!(session_id = %id, error = %err, "Session delete refused");
            error_response(err)
        }
    }
}

/// Handler for GET /export/csv.
async fn export_csv_handler(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Response {
    match load_priced(&state, query.date).and_then(|priced| render_csv(&priced)) {
        Ok(csv) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"sessions-export.csv\"",
                ),
            ],
            csv,
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

/// Handler for GET /export/json.
async fn export_json_handler(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Response {
    match load_priced(&state, query.date).and_then(|priced| render_json(&priced, Utc::now())) {
        Ok(json) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "application/json"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"sessions-export.json\"",
                ),
            ],
            json,
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

/// Handler for GET /export/tally.
///
/// Renders the plain-text tally of Halo sessions, oldest first.
async fn export_tally_handler(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Response {
    match load_priced(&state, query.date) {
        Ok(mut priced) => {
            priced.retain(|p| p.session.location == Location::Halo);
            priced.sort_by_key(|p| p.session.date);
            let text = render_daily_tally(query.date, &priced);
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                text,
            )
                .into_response()
        }
        Err(err) => error_response(err),
    }
}
