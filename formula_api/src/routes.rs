//! HTTP handlers.
//!
//! Handlers are thin: decode the request, call into `formula_core`, map the
//! outcome to a status code. No evaluation logic lives here.

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tracing::debug;

use formula_core::adapter::{self, Failure, Reply};
use formula_core::{registry, ErrorKind, FormulaError, ParameterSet};

use crate::state::AppState;

/// Build the service router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/formulas", get(list_formulas))
        .route("/formulas/:id", get(evaluate_query).post(evaluate_body))
        .route("/explanations/:lang", get(list_explanations))
        .route("/explanations/:lang/:subject/:equation_id", get(explanation))
        .with_state(state)
}

fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_REQUEST,
    }
}

fn reply_response(reply: Reply) -> Response {
    let status = reply.failure_kind().map(status_for).unwrap_or(StatusCode::OK);
    (status, Json(reply)).into_response()
}

fn error_response(err: &FormulaError) -> Response {
    (status_for(err.kind()), Json(Failure::from(err))).into_response()
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "formulas": registry::formula_count() }))
}

async fn list_formulas() -> Json<Vec<registry::FormulaSummary>> {
    Json(registry::summaries())
}

async fn evaluate_query(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    debug!(formula = %id, params = query.len(), "GET evaluate");
    let params = ParameterSet::from_pairs(query);
    reply_response(adapter::handle_params(&id, &params, state.echo_inputs))
}

async fn evaluate_body(State(state): State<AppState>, Path(id): Path<String>, body: Bytes) -> Response {
    debug!(formula = %id, bytes = body.len(), "POST evaluate");
    let payload = if body.iter().all(u8::is_ascii_whitespace) {
        Value::Null
    } else {
        match serde_json::from_slice::<Value>(&body) {
            Ok(payload) => payload,
            Err(e) => return error_response(&FormulaError::malformed(format!("invalid JSON body: {}", e))),
        }
    };
    reply_response(adapter::handle(&id, &payload, state.echo_inputs))
}

async fn list_explanations(State(state): State<AppState>, Path(lang): Path<String>) -> Response {
    Json(state.explanations.list(&lang)).into_response()
}

async fn explanation(
    State(state): State<AppState>,
    Path((lang, subject, equation_id)): Path<(String, String, String)>,
) -> Response {
    match state.explanations.find(&lang, &subject, &equation_id) {
        Ok(descriptor) => Json(descriptor).into_response(),
        Err(err) => {
            debug!(lang = %lang, subject = %subject, equation_id = %equation_id, "explanation not found");
            error_response(&err)
        }
    }
}
