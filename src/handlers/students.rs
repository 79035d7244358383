use std::sync::Arc;

use axum::extract::State;
use tracing::{debug, instrument};

use crate::error::AppResult;
use crate::models::AppState;

/// Lists every student, one per line, in registration order.
///
/// ANY /students/list
///
/// # Returns
///
/// - `200 OK` - `Student: <name>, School: <school>, Email: <email>` per line
/// - `404 Not Found` - `No students have been registered`
#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn list_students(State(state): State<Arc<AppState>>) -> AppResult<String> {
    let students = state.registry.list_students().await?;
    debug!(count = students.len(), "Listing students");
    Ok(students.iter().map(|s| format!("{s}\n")).collect())
}
