//! Request handler for the submit endpoint.

use crate::response::{SubmitResponse, MSG_INTERNAL_ERROR};
use axum::extract::{ConnectInfo, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::net::SocketAddr;
use tracing::error;
use wordvote_core::{RawSubmission, RequestContext, SubmissionRecorder};

/// Slot query parameter.
pub const PARAM_SLOT: &str = "s";
/// Word query parameter.
pub const PARAM_WORD: &str = "i";
/// User id query parameter.
pub const PARAM_USER_ID: &str = "u";

/// Shared state for request handlers.
#[derive(Clone)]
pub struct AppState {
    recorder: SubmissionRecorder,
}

impl AppState {
    /// Creates handler state around a recorder.
    pub fn new(recorder: SubmissionRecorder) -> Self {
        Self { recorder }
    }
}

/// Builds raw parameters from decoded query pairs.
///
/// Missing parameters are empty strings. When a key repeats, the last
/// value wins.
pub fn raw_from_pairs(pairs: &[(String, String)]) -> RawSubmission {
    let last = |key: &str| {
        pairs
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .unwrap_or_default()
    };

    RawSubmission::new(last(PARAM_SLOT), last(PARAM_WORD), last(PARAM_USER_ID))
}

/// Runs one submission and maps the outcome to a response.
///
/// The recorder does blocking file I/O, so it runs on the blocking pool.
pub async fn handle_submit(
    state: &AppState,
    context: RequestContext,
    raw: RawSubmission,
) -> (StatusCode, SubmitResponse) {
    let recorder = state.recorder.clone();
    let outcome = tokio::task::spawn_blocking(move || recorder.submit(&context, &raw)).await;

    match outcome {
        Ok(result) => SubmitResponse::from_result(&result),
        Err(e) => {
            error!(error = %e, "submission task failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                SubmitResponse::failure(MSG_INTERNAL_ERROR),
            )
        }
    }
}

pub(crate) async fn submit(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let context = RequestContext::new(peer.ip());
    let (status, body) = handle_submit(&state, context, raw_from_pairs(&pairs)).await;
    (status, Json(body)).into_response()
}
