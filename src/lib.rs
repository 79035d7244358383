//! # Mentorlink - Mentor/Student Pairing Registry
//!
//! An in-memory registry of mentors and students with an HTTP surface for
//! registration, lookup, pairing and a newsletter broadcast.
//!
//! ## Modules
//!
//! - [`handlers`] - HTTP request handlers for the endpoints
//! - [`models`] - Records, the guarded registry and shared state
//! - [`services`] - Matching and newsletter logic
//! - [`utils`] - Constants and the request field extractor

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod telemetry;
pub mod utils;

use std::sync::Arc;

use axum::{
    Router,
    routing::{any, get},
};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::handlers::{
    assign_mentor, get_mentor, get_mentor_with_empty_id, health_check, list_mentors,
    list_students, register_mentor, register_student, send_mentor_newsletter,
};
use crate::models::AppState;
use crate::services::newsletter::{LogTransport, NewsletterTransport};

/// Creates an Axum router that logs newsletter deliveries instead of sending them.
///
/// This is a convenience function that calls [`app_with_newsletter_transport`] with no custom transport.
#[inline]
pub fn app() -> Router {
    app_with_newsletter_transport(None)
}

/// Creates an Axum router with application routes and a fresh, empty registry.
///
/// # Arguments
///
/// * `transport` - Optional newsletter transport. If None, [`LogTransport`] is used
///
/// Every registry route accepts any HTTP method. Static `/mentors/...` routes
/// take priority over the `/mentors/{id}` lookup.
pub fn app_with_newsletter_transport(transport: Option<Arc<dyn NewsletterTransport>>) -> Router {
    let transport: Arc<dyn NewsletterTransport> = match transport {
        Some(transport) => transport,
        None => {
            info!("Newsletter delivery uses [LogTransport]");
            Arc::new(LogTransport)
        }
    };

    let state = Arc::new(AppState::new(transport));

    Router::new()
        .route("/health-check", get(health_check))
        .route("/register/mentor", any(register_mentor))
        .route("/register/student", any(register_student))
        .route("/mentors/list", any(list_mentors))
        .route("/mentors/assign", any(assign_mentor))
        .route("/mentors/newsletter", any(send_mentor_newsletter))
        .route("/mentors/", any(get_mentor_with_empty_id))
        .route("/mentors/{id}", any(get_mentor))
        .route("/students/list", any(list_students))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
