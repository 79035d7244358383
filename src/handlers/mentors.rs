//! # Mentor Handlers
//!
//! Lookup, listing, assignment and newsletter broadcast.

use std::sync::Arc;

use axum::extract::{Path, State};
use serde::Deserialize;
use tracing::{debug, info, instrument};

use crate::error::AppResult;
use crate::models::AppState;
use crate::services::matcher::MatchingService;
use crate::services::newsletter::send_newsletter;
use crate::utils::form::FormValues;

/// Fields accepted by `/mentors/assign`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AssignForm {
    #[serde(rename = "studentID")]
    pub student_id: String,
    #[serde(rename = "mentorID")]
    pub mentor_id: String,
}

/// Gets a single mentor by email.
///
/// ANY /mentors/{id}
///
/// # Returns
///
/// - `200 OK` - `Mentor: <name>, School: <school>, Email: <email>, Newsletter: <bool>`
/// - `404 Not Found` - `Mentor with email <id> not found`
#[instrument(skip_all, fields(email = %id, request_id = %uuid::Uuid::new_v4()))]
pub async fn get_mentor(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<String> {
    find_mentor(&state, &id).await
}

/// Gets the mentor registered with an empty email.
///
/// ANY /mentors/
///
/// The `{id}` segment never matches an empty string, so this route looks up
/// `""` directly.
#[instrument(skip_all, fields(email = "", request_id = %uuid::Uuid::new_v4()))]
pub async fn get_mentor_with_empty_id(State(state): State<Arc<AppState>>) -> AppResult<String> {
    find_mentor(&state, "").await
}

async fn find_mentor(state: &AppState, email: &str) -> AppResult<String> {
    let mentor = state.registry.find_mentor_by_email(email).await?;
    debug!("Mentor found");
    Ok(mentor.to_string())
}

/// Lists every mentor, one per line, in registration order.
///
/// ANY /mentors/list
///
/// # Returns
///
/// - `200 OK` - One mentor line per registration
/// - `404 Not Found` - `No mentors have been registered`
#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn list_mentors(State(state): State<Arc<AppState>>) -> AppResult<String> {
    let mentors = state.registry.list_mentors().await?;
    debug!(count = mentors.len(), "Listing mentors");
    Ok(mentors.iter().map(|m| format!("{m}\n")).collect())
}

/// Assigns a mentor to a student.
///
/// ANY /mentors/assign studentID, mentorID
///
/// The student's name and school are replaced by the mentor's.
///
/// # Returns
///
/// - `200 OK` - `Mentor <mentor> has been assigned to student <student>`
/// - `404 Not Found` - `Student or mentor with specified ID not found`
#[instrument(
    skip_all,
    fields(
        student_id = %form.student_id,
        mentor_id = %form.mentor_id,
        request_id = %uuid::Uuid::new_v4()
    )
)]
pub async fn assign_mentor(
    State(state): State<Arc<AppState>>,
    FormValues(form): FormValues<AssignForm>,
) -> AppResult<String> {
    let pairing =
        MatchingService::assign_mentor(&state.registry, &form.student_id, &form.mentor_id).await?;

    Ok(format!(
        "Mentor {} has been assigned to student {}",
        pairing.mentor.name, pairing.student_name
    ))
}

/// Sends the newsletter to every subscribed mentor.
///
/// ANY /mentors/newsletter
///
/// # Returns
///
/// - `200 OK` - A `Newsletter sent to mentor <name>` line per subscriber, then
///   `Newsletter sent to all subscribed mentors`
/// - `500 Internal Server Error` - The transport rejected a delivery
#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn send_mentor_newsletter(State(state): State<Arc<AppState>>) -> AppResult<String> {
    let mentors = state.registry.mentors().await;
    let report = send_newsletter(state.newsletter.as_ref(), &mentors).await?;
    info!(mentors = mentors.len(), "Newsletter broadcast completed");
    Ok(report)
}
