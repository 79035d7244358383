mod common;

use common::{get, register_mentor, spawn_app};

#[tokio::test]
async fn list_mentors_empty_returns_404() {
    let (address, _) = spawn_app().await;
    let client = reqwest::Client::new();

    let (status, body) = get(&client, &format!("{address}/mentors/list")).await;

    assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
    assert_eq!(body, "No mentors have been registered");
}

#[tokio::test]
async fn list_mentors_preserves_fields_and_order() {
    let (address, _) = spawn_app().await;
    let client = reqwest::Client::new();

    register_mentor(&client, &address, "Ana", "MIT", "a@x.com", "true").await;
    register_mentor(&client, &address, "Ben", "Stanford", "ben@x.com", "false").await;

    let (status, body) = get(&client, &format!("{address}/mentors/list")).await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(
        body,
        "Mentor: Ana, School: MIT, Email: a@x.com, Newsletter: true\n\
         Mentor: Ben, School: Stanford, Email: ben@x.com, Newsletter: false\n"
    );
}

#[tokio::test]
async fn get_mentor_unknown_email_returns_404() {
    let (address, _) = spawn_app().await;
    let client = reqwest::Client::new();

    register_mentor(&client, &address, "Ana", "MIT", "a@x.com", "true").await;

    let (status, body) = get(&client, &format!("{address}/mentors/nobody@x.com")).await;

    assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
    assert_eq!(body, "Mentor with email nobody@x.com not found");
}

#[tokio::test]
async fn get_mentor_returns_first_registered_duplicate() {
    let (address, _) = spawn_app().await;
    let client = reqwest::Client::new();

    register_mentor(&client, &address, "First", "MIT", "dup@x.com", "true").await;
    register_mentor(&client, &address, "Second", "CMU", "dup@x.com", "false").await;

    let (status, body) = get(&client, &format!("{address}/mentors/dup@x.com")).await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(
        body,
        "Mentor: First, School: MIT, Email: dup@x.com, Newsletter: true"
    );

    // Both duplicates are still listed
    let (_, body) = get(&client, &format!("{address}/mentors/list")).await;
    assert_eq!(body.lines().count(), 2);
}

#[tokio::test]
async fn static_routes_win_over_mentor_lookup() {
    let (address, _) = spawn_app().await;
    let client = reqwest::Client::new();

    // A mentor whose email collides with a route segment is only reachable via the list
    register_mentor(&client, &address, "Odd", "MIT", "list", "false").await;

    let (status, body) = get(&client, &format!("{address}/mentors/list")).await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body, "Mentor: Odd, School: MIT, Email: list, Newsletter: false\n");
}

#[tokio::test]
async fn get_mentor_with_empty_id_matches_empty_email() {
    let (address, _) = spawn_app().await;
    let client = reqwest::Client::new();

    let (status, body) = get(&client, &format!("{address}/mentors/")).await;
    assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
    assert_eq!(body, "Mentor with email  not found");

    register_mentor(&client, &address, "Ana", "MIT", "", "true").await;

    let (status, body) = get(&client, &format!("{address}/mentors/")).await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body, "Mentor: Ana, School: MIT, Email: , Newsletter: true");
}
