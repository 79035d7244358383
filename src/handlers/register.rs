//! # Registration Handlers
//!
//! Appends mentors and students to the registry. Registration never fails:
//! missing fields are stored as empty strings and duplicate emails are kept.

use std::sync::Arc;

use axum::extract::State;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::models::{AppState, Mentor, Student};
use crate::utils::form::FormValues;

/// Fields accepted by `/register/mentor`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MentorForm {
    pub name: String,
    pub school: String,
    pub email: String,
    /// Subscribed only when exactly `"true"`.
    pub newsletter: String,
}

/// Fields accepted by `/register/student`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StudentForm {
    pub name: String,
    pub school: String,
    pub email: String,
}

impl From<MentorForm> for Mentor {
    fn from(form: MentorForm) -> Self {
        let newsletter = form.newsletter == "true";
        Mentor::new(form.name, form.school, form.email, newsletter)
    }
}

impl From<StudentForm> for Student {
    fn from(form: StudentForm) -> Self {
        Student::new(form.name, form.school, form.email)
    }
}

/// Registers a mentor.
///
/// ANY /register/mentor name, school, email, newsletter
///
/// # Returns
///
/// - `200 OK` - `Mentor <name> registered successfully`
#[instrument(
    skip_all,
    fields(
        email = %form.email,
        request_id = %uuid::Uuid::new_v4()
    )
)]
pub async fn register_mentor(
    State(state): State<Arc<AppState>>,
    FormValues(form): FormValues<MentorForm>,
) -> String {
    let mentor = state.registry.register_mentor(form.into()).await;
    info!(newsletter = mentor.newsletter, "Mentor registered");
    format!("Mentor {} registered successfully", mentor.name)
}

/// Registers a student.
///
/// ANY /register/student name, school, email
///
/// # Returns
///
/// - `200 OK` - `Student <name> registered successfully`
#[instrument(
    skip_all,
    fields(
        email = %form.email,
        request_id = %uuid::Uuid::new_v4()
    )
)]
pub async fn register_student(
    State(state): State<Arc<AppState>>,
    FormValues(form): FormValues<StudentForm>,
) -> String {
    let student = state.registry.register_student(form.into()).await;
    info!("Student registered");
    format!("Student {} registered successfully", student.name)
}
