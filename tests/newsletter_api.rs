mod common;

use std::sync::Arc;

use common::{RecordingTransport, get, register_mentor, spawn_app, spawn_app_with};

#[tokio::test]
async fn newsletter_reaches_only_subscribed_mentors_in_order() {
    let (address, transport) = spawn_app().await;
    let client = reqwest::Client::new();

    register_mentor(&client, &address, "Ana", "MIT", "a@x.com", "true").await;
    register_mentor(&client, &address, "Ben", "CMU", "b@x.com", "false").await;
    register_mentor(&client, &address, "Cy", "UW", "c@x.com", "true").await;

    let (status, body) = get(&client, &format!("{address}/mentors/newsletter")).await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(
        body,
        "Newsletter sent to mentor Ana\n\
         Newsletter sent to mentor Cy\n\
         Newsletter sent to all subscribed mentors"
    );
    assert_eq!(transport.delivered_names(), vec!["Ana", "Cy"]);
}

#[tokio::test]
async fn newsletter_without_subscribers_only_confirms() {
    let (address, transport) = spawn_app().await;
    let client = reqwest::Client::new();

    let (status, body) = get(&client, &format!("{address}/mentors/newsletter")).await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body, "Newsletter sent to all subscribed mentors");

    register_mentor(&client, &address, "Ben", "CMU", "b@x.com", "false").await;

    let (status, body) = get(&client, &format!("{address}/mentors/newsletter")).await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body, "Newsletter sent to all subscribed mentors");
    assert_eq!(transport.delivered_count(), 0);
}

#[tokio::test]
async fn newsletter_transport_failure_returns_500() {
    let (address, _) = spawn_app_with(Arc::new(RecordingTransport::failing())).await;
    let client = reqwest::Client::new();

    register_mentor(&client, &address, "Ana", "MIT", "a@x.com", "true").await;

    let (status, body) = get(&client, &format!("{address}/mentors/newsletter")).await;

    assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Failed to send newsletter");
}
