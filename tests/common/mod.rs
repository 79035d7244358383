#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mentorlink::models::Mentor;
use mentorlink::services::newsletter::{NewsletterError, NewsletterTransport};
use tokio::net::TcpListener;

/// A newsletter transport that records every delivery for assertions.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    delivered: Mutex<Vec<Mentor>>,
    fail: bool,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport whose deliveries always fail.
    pub fn failing() -> Self {
        Self {
            delivered: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Names of the mentors delivered to, in delivery order
    pub fn delivered_names(&self) -> Vec<String> {
        self.delivered
            .lock()
            .unwrap()
            .iter()
            .map(|m| m.name.clone())
            .collect()
    }

    pub fn delivered_count(&self) -> usize {
        self.delivered.lock().unwrap().len()
    }
}

#[async_trait]
impl NewsletterTransport for RecordingTransport {
    async fn deliver(&self, mentor: &Mentor) -> Result<(), NewsletterError> {
        if self.fail {
            return Err(NewsletterError::DeliveryFailed(mentor.email.clone()));
        }
        self.delivered.lock().unwrap().push(mentor.clone());
        Ok(())
    }
}

/// Spawns the application and returns its address and recording transport.
pub async fn spawn_app() -> (String, Arc<RecordingTransport>) {
    spawn_app_with(Arc::new(RecordingTransport::new())).await
}

/// Spawns the application with the given transport.
pub async fn spawn_app_with(
    transport: Arc<RecordingTransport>,
) -> (String, Arc<RecordingTransport>) {
    let transport_cloned = transport.clone();

    // Randomly choose an available port
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");

    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        let app = mentorlink::app_with_newsletter_transport(Some(transport_cloned));
        axum::serve(listener, app).await.unwrap();
    });

    let address = format!("http://127.0.0.1:{}", port);
    (address, transport)
}

/// POSTs URL-encoded fields and returns (status, body).
pub async fn post_form(
    client: &reqwest::Client,
    url: &str,
    fields: &[(&str, &str)],
) -> (reqwest::StatusCode, String) {
    let response = client
        .post(url)
        .form(fields)
        .send()
        .await
        .expect("Failed to execute request");
    let status = response.status();
    let body = response.text().await.expect("Failed to read response body");
    (status, body)
}

/// GETs a URL and returns (status, body).
pub async fn get(client: &reqwest::Client, url: &str) -> (reqwest::StatusCode, String) {
    let response = client
        .get(url)
        .send()
        .await
        .expect("Failed to execute request");
    let status = response.status();
    let body = response.text().await.expect("Failed to read response body");
    (status, body)
}

pub async fn register_mentor(
    client: &reqwest::Client,
    address: &str,
    name: &str,
    school: &str,
    email: &str,
    newsletter: &str,
) {
    let (status, _) = post_form(
        client,
        &format!("{address}/register/mentor"),
        &[
            ("name", name),
            ("school", school),
            ("email", email),
            ("newsletter", newsletter),
        ],
    )
    .await;
    assert_eq!(status, reqwest::StatusCode::OK);
}

pub async fn register_student(
    client: &reqwest::Client,
    address: &str,
    name: &str,
    school: &str,
    email: &str,
) {
    let (status, _) = post_form(
        client,
        &format!("{address}/register/student"),
        &[("name", name), ("school", school), ("email", email)],
    )
    .await;
    assert_eq!(status, reqwest::StatusCode::OK);
}
