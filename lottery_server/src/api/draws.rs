//! Draw session API handlers.
//!
//! This module provides the HTTP REST endpoints for running a draw:
//! - Creating a session from manual entries or an uploaded entry file
//! - Shuffling in random or reproducible mode
//! - Drawing winners one at a time
//! - Exporting results as CSV
//! - Resetting (dropping) a session
//!
//! # Examples
//!
//! Create a draw from manual entries:
//! ```bash
//! curl -X POST http://localhost:8080/api/v1/draws \
//!   -H "Content-Type: application/json" \
//!   -d '{"entries": "REG-1\nREG-2\nREG-3", "winners_to_pick": 2}'
//! ```
//!
//! Upload an entry file (first line is the winner count):
//! ```bash
//! curl -X POST "http://localhost:8080/api/v1/draws/upload?filename=entries.csv" \
//!   --data-binary @entries.csv
//! ```

use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::Local;
use lottery_engine::{
    input::{InputError, parse_entry_list, parse_manual_entries},
    session::{
        DrawOutcome, InputSource, RandomizationMode, SessionError, SessionId, SessionView,
    },
};
use serde::{Deserialize, Serialize};

use super::{AppState, request_id::RequestId};
use crate::{logging, metrics};

/// Filename recorded for uploads that do not name themselves
pub const DEFAULT_UPLOAD_FILENAME: &str = "upload.csv";

#[derive(Debug, Deserialize)]
pub struct CreateDrawRequest {
    /// One registration number per line
    pub entries: String,
    pub winners_to_pick: i64,
}

#[derive(Debug, Deserialize)]
pub struct UploadParams {
    pub filename: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ShuffleRequest {
    #[serde(default)]
    pub mode: RandomizationMode,
    #[serde(default)]
    pub seed: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Map a session error to its HTTP status and client-safe body.
fn api_error(operation: &str, err: SessionError) -> ApiError {
    let status = match &err {
        SessionError::NotFound(_) => StatusCode::NOT_FOUND,
        SessionError::CapacityReached(_) => StatusCode::SERVICE_UNAVAILABLE,
        SessionError::InvalidRequest(_) | SessionError::Input(_) => StatusCode::BAD_REQUEST,
        SessionError::Draw(draw_err) if draw_err.is_protocol_violation() => StatusCode::CONFLICT,
        SessionError::Draw(lottery_engine::DrawError::Export(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        SessionError::Draw(_) => StatusCode::BAD_REQUEST,
    };

    let message = err.client_message();
    logging::log_rejected_request(operation, status.as_u16(), &message);
    (status, Json(ErrorResponse { error: message }))
}

/// Report an unreadable JSON body in the same shape as every other error.
fn body_error(operation: &str, rejection: JsonRejection) -> ApiError {
    let status = match rejection.status() {
        StatusCode::PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
        _ => StatusCode::BAD_REQUEST,
    };

    let message = format!("Invalid request body: {}", rejection.body_text());
    logging::log_rejected_request(operation, status.as_u16(), &message);
    (status, Json(ErrorResponse { error: message }))
}

/// Uploads named by the client must carry a `.csv` extension.
fn upload_filename(requested: Option<String>) -> Result<String, ApiError> {
    let Some(name) = requested else {
        return Ok(DEFAULT_UPLOAD_FILENAME.to_string());
    };
    let name = name.trim();
    if name.is_empty() || !name.to_ascii_lowercase().ends_with(".csv") {
        return Err(api_error(
            "upload_draw",
            SessionError::InvalidRequest("File must be a CSV".to_string()),
        ));
    }
    Ok(name.to_string())
}

async fn register_session(
    state: &AppState,
    request_id: &RequestId,
    parsed: Result<lottery_engine::EntryList, InputError>,
    source: InputSource,
) -> Result<(StatusCode, Json<SessionView>), ApiError> {
    let entry_list = parsed.map_err(|e| api_error("create_draw", e.into()))?;
    let source_kind = match source {
        InputSource::File { .. } => "file",
        InputSource::Manual => "manual",
    };

    let view = state
        .sessions
        .create_session(entry_list, source)
        .await
        .map_err(|e| api_error("create_draw", e))?;

    metrics::draw_sessions_created_total(source_kind);
    metrics::active_draw_sessions(state.sessions.session_count().await);
    logging::log_draw_event(
        "created",
        &view.id.to_string(),
        request_id.as_str(),
        &format!(
            "{} entries, {} winners, {}",
            view.entry_count, view.winners_to_pick, view.input_source
        ),
    );

    Ok((StatusCode::CREATED, Json(view)))
}

/// Create a draw session from manually entered registration numbers.
///
/// # Response
///
/// Returns `201 Created` with the session view, `400 Bad Request` when the
/// entries are invalid, or `503 Service Unavailable` at capacity.
pub async fn create_draw(
    State(state): State<AppState>,
    request_id: RequestId,
    body: Result<Json<CreateDrawRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SessionView>), ApiError> {
    let Json(request) = body.map_err(|e| body_error("create_draw", e))?;
    let parsed = parse_manual_entries(&request.entries, request.winners_to_pick);
    register_session(&state, &request_id, parsed, InputSource::Manual).await
}

/// Create a draw session from an uploaded entry file.
///
/// The body is the raw file: the first non-blank line holds the number of
/// winners and every following non-blank line one registration number.
/// A `filename` query parameter, when given, must end in `.csv`.
pub async fn upload_draw(
    State(state): State<AppState>,
    request_id: RequestId,
    Query(params): Query<UploadParams>,
    body: Bytes,
) -> Result<(StatusCode, Json<SessionView>), ApiError> {
    let parsed = std::str::from_utf8(&body)
        .map_err(|_| InputError::Encoding)
        .and_then(parse_entry_list);
    let filename = upload_filename(params.filename)?;

    register_session(&state, &request_id, parsed, InputSource::File { filename }).await
}

/// Get the current view of a draw session.
pub async fn get_draw(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
) -> Result<Json<SessionView>, ApiError> {
    state
        .sessions
        .view(id)
        .await
        .map(Json)
        .map_err(|e| api_error("get_draw", e))
}

/// Freeze the draw order of a session.
///
/// # Request Body
///
/// ```json
/// { "mode": "reproducible", "seed": "county-fair-2025" }
/// ```
///
/// The body is optional; without one, or without `mode`, the draw is random.
///
/// # Response
///
/// Returns `200 OK` with the session view, `400 Bad Request` when a seed is
/// given in random mode, or `409 Conflict` when already shuffled.
pub async fn shuffle_draw(
    State(state): State<AppState>,
    request_id: RequestId,
    Path(id): Path<SessionId>,
    body: Result<Option<Json<ShuffleRequest>>, JsonRejection>,
) -> Result<Json<SessionView>, ApiError> {
    let request = body
        .map_err(|e| body_error("shuffle_draw", e))?
        .map(|Json(request)| request)
        .unwrap_or_default();
    let view = state
        .sessions
        .shuffle(id, request.mode, request.seed)
        .await
        .map_err(|e| api_error("shuffle_draw", e))?;

    metrics::draw_shuffles_total(&request.mode.to_string());
    logging::log_draw_event(
        "shuffled",
        &id.to_string(),
        request_id.as_str(),
        &format!(
            "{} mode, input hash {}",
            request.mode,
            view.input_hash.as_deref().unwrap_or_default()
        ),
    );

    Ok(Json(view))
}

/// Draw the next winner of a session.
///
/// # Response
///
/// Returns `200 OK` with the winner and the updated draw state, or
/// `409 Conflict` when the draw is not shuffled or already complete.
pub async fn draw_winner(
    State(state): State<AppState>,
    request_id: RequestId,
    Path(id): Path<SessionId>,
) -> Result<Json<DrawOutcome>, ApiError> {
    let outcome = state
        .sessions
        .draw_winner(id)
        .await
        .map_err(|e| api_error("draw_winner", e))?;

    metrics::draw_winners_total();
    logging::log_draw_event(
        "winner",
        &id.to_string(),
        request_id.as_str(),
        &format!(
            "rank {}: {}",
            outcome.winner.rank, outcome.winner.registration_no
        ),
    );
    if outcome.state.is_completed() {
        metrics::draws_completed_total();
        logging::log_draw_event(
            "completed",
            &id.to_string(),
            request_id.as_str(),
            "all winners drawn",
        );
    }

    Ok(Json(outcome))
}

/// Download the results of a session as CSV.
///
/// The attachment is named `lottery_results_YYYYMMDD_HHMMSS.csv` after the
/// server's local time.
pub async fn export_draw(
    State(state): State<AppState>,
    request_id: RequestId,
    Path(id): Path<SessionId>,
) -> Result<Response, ApiError> {
    let csv = state
        .sessions
        .export_csv(id)
        .await
        .map_err(|e| api_error("export_draw", e))?;

    let filename = export_filename(Local::now());
    metrics::draw_exports_total();
    logging::log_draw_event("exported", &id.to_string(), request_id.as_str(), &filename);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        csv,
    )
        .into_response())
}

/// Drop a session so a new draw can start.
///
/// Returns `204 No Content`, or `404 Not Found` for an unknown session.
pub async fn delete_draw(
    State(state): State<AppState>,
    request_id: RequestId,
    Path(id): Path<SessionId>,
) -> Result<StatusCode, ApiError> {
    if !state.sessions.remove(id).await {
        return Err(api_error("delete_draw", SessionError::NotFound(id)));
    }

    metrics::active_draw_sessions(state.sessions.session_count().await);
    logging::log_draw_event("removed", &id.to_string(), request_id.as_str(), "session reset");
    Ok(StatusCode::NO_CONTENT)
}

fn export_filename(now: chrono::DateTime<Local>) -> String {
    format!("lottery_results_{}.csv", now.format("%Y%m%d_%H%M%S"))
}
