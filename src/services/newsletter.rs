//! # Newsletter Service
//!
//! Picks the mentors who opted into the newsletter and hands each one to a
//! [`NewsletterTransport`]. The transport is the only place delivery could
//! happen; filtering and reporting never depend on it.
//!
//! ## Implementations
//!
//! - [`LogTransport`] - Records the intent to deliver in the log and succeeds

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::models::Mentor;

/// Aggregate line that closes every broadcast, even an empty one.
pub const NEWSLETTER_SENT_TO_ALL: &str = "Newsletter sent to all subscribed mentors";

/// Errors that can occur while delivering a newsletter
#[derive(Debug, Error)]
pub enum NewsletterError {
    #[error("Failed to deliver newsletter: {0}")]
    DeliveryFailed(String),
}

/// Delivery capability for newsletters.
///
/// Lets a real transport replace the logging stub without touching the
/// broadcast logic.
#[async_trait]
pub trait NewsletterTransport: Send + Sync {
    /// Delivers the newsletter to a single subscribed mentor.
    ///
    /// # Errors
    ///
    /// Returns [`NewsletterError::DeliveryFailed`] if the mentor could not be reached.
    async fn deliver(&self, mentor: &Mentor) -> Result<(), NewsletterError>;
}

/// Stub transport that only logs.
pub struct LogTransport;

#[async_trait]
impl NewsletterTransport for LogTransport {
    #[instrument(skip_all, fields(recipient = %mentor.email))]
    async fn deliver(&self, mentor: &Mentor) -> Result<(), NewsletterError> {
        info!(mentor = %mentor.name, "Newsletter delivery recorded (no transport configured)");
        Ok(())
    }
}

/// Mentors with `newsletter == true`, in registration order.
pub fn subscribed(mentors: &[Mentor]) -> impl Iterator<Item = &Mentor> + Clone {
    mentors.iter().filter(|mentor| mentor.newsletter)
}

/// One notice per subscribed mentor. Lazy and restartable via `clone`.
pub fn broadcast_newsletter(mentors: &[Mentor]) -> impl Iterator<Item = String> + Clone + '_ {
    subscribed(mentors).map(|mentor| format!("Newsletter sent to mentor {}", mentor.name))
}

/// Delivers to every subscribed mentor and renders the report.
///
/// Each notice sits on its own line, followed by [`NEWSLETTER_SENT_TO_ALL`].
///
/// # Errors
///
/// Stops at the first transport failure.
pub async fn send_newsletter(
    transport: &dyn NewsletterTransport,
    mentors: &[Mentor],
) -> Result<String, NewsletterError> {
    let mut delivered = 0usize;
    for mentor in subscribed(mentors) {
        transport.deliver(mentor).await?;
        delivered += 1;
    }
    debug!(delivered, total = mentors.len(), "Newsletter broadcast finished");

    let mut report = String::new();
    for notice in broadcast_newsletter(mentors) {
        report.push_str(&notice);
        report.push('\n');
    }
    report.push_str(NEWSLETTER_SENT_TO_ALL);
    Ok(report)
}
