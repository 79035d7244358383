use std::sync::Arc;

use tracing::info;

use super::Registry;
use crate::services::newsletter::NewsletterTransport;

/// Application state shared across requests. Needs to be thread-safe.
pub struct AppState {
    /// Every registered mentor and student.
    pub registry: Registry,
    /// Delivery capability used by the newsletter broadcast.
    pub newsletter: Arc<dyn NewsletterTransport>,
}

impl AppState {
    /// Creates an empty registry wired to the given newsletter transport.
    pub fn new(newsletter: Arc<dyn NewsletterTransport>) -> Self {
        info!("Initializing application state");

        Self {
            registry: Registry::new(),
            newsletter,
        }
    }
}
