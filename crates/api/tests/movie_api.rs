//! HTTP-level integration tests for the `/api/v1/movies` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener, over the in-memory repository.

mod common;

use axum::http::StatusCode;
use common::{body_json, body_text, delete, get, in_memory_app, post_json, put_json};
use serde_json::json;

fn matrix() -> serde_json::Value {
    json!({
        "title": "The Matrix",
        "launchDate": "1999-03-31",
        "rank": 8.7,
        "revenue": 463517383
    })
}

/// Create a movie through the API and return its id.
async fn create(app: axum::Router, body: serde_json::Value) -> i64 {
    let response = post_json(app, "/api/v1/movies", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_movie_returns_201_with_full_record() {
    let (app, _) = in_memory_app();
    let response = post_json(app, "/api/v1/movies", matrix()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert_eq!(json["title"], "The Matrix");
    assert_eq!(json["launchDate"], "1999-03-31");
    assert_eq!(json["rank"].as_f64(), Some(8.7));
    assert_eq!(json["revenue"].as_f64(), Some(463_517_383.0));
    assert!(json["createdAt"].is_string());
    assert!(json["updatedAt"].is_string());
}

#[tokio::test]
async fn test_create_invalid_movie_returns_400_with_field_errors() {
    let (app, repo) = in_memory_app();
    let response = post_json(
        app,
        "/api/v1/movies",
        json!({
            "title": "",
            "launchDate": "1999-03-31",
            "rank": 11,
            "revenue": -1
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["status"], 400);
    assert_eq!(json["message"], "Validation failed");
    assert!(json["timestamp"].is_string());
    assert_eq!(
        json["errors"],
        json!([
            {"field": "title", "message": "must not be blank"},
            {"field": "rank", "message": "must be between 0 and 10"},
            {"field": "revenue", "message": "must be greater than or equal to 0"}
        ])
    );
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_create_with_missing_fields_reports_each_field() {
    let (app, _) = in_memory_app();
    let response = post_json(app, "/api/v1/movies", json!({"title": "Untitled"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    let fields: Vec<_> = json["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(fields, ["launchDate", "rank", "revenue"]);
}

#[tokio::test]
async fn test_create_with_malformed_body_returns_400_envelope() {
    let (app, _) = in_memory_app();
    let response = post_json(
        app,
        "/api/v1/movies",
        json!({"title": "The Matrix", "launchDate": "31/03/1999"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["status"], 400);
    assert!(json["message"].is_string());
    assert!(json.get("errors").is_none());
}

#[tokio::test]
async fn test_create_keeps_exact_decimal_amounts() {
    let (app, repo) = in_memory_app();
    let body: serde_json::Value = serde_json::from_str(
        r#"{"title":"Exact","launchDate":"2001-01-01","rank":9.99,"revenue":12345678901234567.89}"#,
    )
    .unwrap();
    let id = create(app, body).await;

    let app = common::build_test_app(repo);
    let response = get(app, &format!("/api/v1/movies/{id}")).await;
    let text = body_text(response).await;
    assert!(text.contains(r#""revenue":12345678901234567.89"#), "{text}");
    assert!(text.contains(r#""rank":9.99"#), "{text}");
}

#[tokio::test]
async fn test_create_rejects_rank_barely_above_ten() {
    let (app, repo) = in_memory_app();
    let body: serde_json::Value = serde_json::from_str(
        r#"{"title":"Edge","launchDate":"2001-01-01","rank":10.00000000000000001,"revenue":0}"#,
    )
    .unwrap();
    let response = post_json(app, "/api/v1/movies", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["errors"][0]["field"], "rank");
    assert!(repo.is_empty().await);
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_get_movie_by_id_omits_id_and_timestamps() {
    let (app, repo) = in_memory_app();
    let id = create(app, matrix()).await;

    let app = common::build_test_app(repo);
    let response = get(app, &format!("/api/v1/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["title"], "The Matrix");
    assert_eq!(json["launchDate"], "1999-03-31");
    assert_eq!(json["rank"].as_f64(), Some(8.7));
    assert!(json.get("id").is_none());
    assert!(json.get("createdAt").is_none());
    assert!(json.get("updatedAt").is_none());
}

#[tokio::test]
async fn test_get_nonexistent_movie_returns_404_with_id_message() {
    let (app, _) = in_memory_app();
    let response = get(app, "/api/v1/movies/999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["status"], 404);
    assert_eq!(json["message"], "Movie not found with id: 999");
    assert!(json.get("errors").is_none());
}

#[tokio::test]
async fn test_get_with_non_numeric_id_returns_400() {
    let (app, _) = in_memory_app();
    let response = get(app, "/api/v1/movies/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["status"], 400);
}

#[tokio::test]
async fn test_list_movies() {
    let (app, repo) = in_memory_app();
    assert_eq!(body_json(get(app, "/api/v1/movies").await).await, json!([]));

    for title in ["M1", "M2"] {
        let app = common::build_test_app(repo.clone());
        create(
            app,
            json!({"title": title, "launchDate": "2000-01-01", "rank": 5, "revenue": 0}),
        )
        .await;
    }

    let app = common::build_test_app(repo);
    let response = get(app, "/api/v1/movies").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let titles: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(titles, ["M1", "M2"]);
}

// ---------------------------------------------------------------------------
// Filter by launch date
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_filter_by_launch_date_range() {
    let (app, repo) = in_memory_app();
    create(app, matrix()).await;
    let app = common::build_test_app(repo.clone());
    create(
        app,
        json!({"title": "Inception", "launchDate": "2010-07-16", "rank": 8.8, "revenue": 836800000}),
    )
    .await;

    let app = common::build_test_app(repo);
    let response = get(
        app,
        "/api/v1/movies/filter?startDate=1999-01-01&endDate=1999-12-31",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let movies = json.as_array().unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0]["title"], "The Matrix");
    assert!(movies[0].get("id").is_none());
}

#[tokio::test]
async fn test_filter_bounds_are_inclusive() {
    let (app, repo) = in_memory_app();
    create(app, matrix()).await;

    let app = common::build_test_app(repo);
    let response = get(
        app,
        "/api/v1/movies/filter?startDate=1999-03-31&endDate=1999-03-31",
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_filter_with_inverted_range_returns_empty_list() {
    let (app, repo) = in_memory_app();
    create(app, matrix()).await;

    let app = common::build_test_app(repo);
    let response = get(
        app,
        "/api/v1/movies/filter?startDate=1999-12-31&endDate=1999-01-01",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_filter_without_end_date_returns_400() {
    let (app, _) = in_memory_app();
    let response = get(app, "/api/v1/movies/filter?startDate=1999-01-01").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["status"], 400);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_update_movie_keeps_id_and_created_at() {
    let (app, repo) = in_memory_app();
    let response = post_json(app, "/api/v1/movies", matrix()).await;
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(repo.clone());
    let response = put_json(
        app,
        &format!("/api/v1/movies/{id}"),
        json!({
            "title": "The Matrix Reloaded",
            "launchDate": "2003-05-15",
            "rank": 7.2,
            "revenue": 741800000
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["title"], "The Matrix Reloaded");
    assert_eq!(json["createdAt"], created["createdAt"]);

    let app = common::build_test_app(repo);
    let json = body_json(get(app, &format!("/api/v1/movies/{id}")).await).await;
    assert_eq!(json["launchDate"], "2003-05-15");
}

#[tokio::test]
async fn test_update_nonexistent_movie_returns_404_with_bare_message() {
    let (app, _) = in_memory_app();
    let response = put_json(app, "/api/v1/movies/1", matrix()).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Movie not found");
}

#[tokio::test]
async fn test_update_with_invalid_body_returns_400() {
    let (app, repo) = in_memory_app();
    let id = create(app, matrix()).await;

    let app = common::build_test_app(repo);
    let response = put_json(
        app,
        &format!("/api/v1/movies/{id}"),
        json!({"title": "  ", "launchDate": "1999-03-31", "rank": 8.7, "revenue": 1}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["errors"][0]["field"], "title");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_delete_movie_returns_200_then_404() {
    let (app, repo) = in_memory_app();
    let id = create(app, matrix()).await;

    let app = common::build_test_app(repo.clone());
    let response = delete(app, &format!("/api/v1/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "Movie deleted successfully.");

    // Subsequent GET should 404.
    let app = common::build_test_app(repo.clone());
    let response = get(app, &format!("/api/v1/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Deleting again is also a 404, with the bare message.
    let app = common::build_test_app(repo);
    let response = delete(app, &format!("/api/v1/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Movie not found");
}
