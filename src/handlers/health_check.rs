//! # Health Check Handler
//!
//! Liveness probe for load balancers and deployment tooling.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode};
use tracing::{debug, instrument};

use crate::models::AppState;

/// Returns `200 OK` with an empty body while the server is accepting requests.
#[instrument(skip_all)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> StatusCode {
    let mentors = state.registry.mentor_count().await;
    let students = state.registry.student_count().await;
    debug!(mentors, students, "Health check endpoint accessed");
    StatusCode::OK
}
