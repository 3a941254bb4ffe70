use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;

use crate::server::{router::router, startup::seed_genres, state::AppState};


/// Builds the full router over an in-memory database holding the seed genres.
///
/// The returned context owns the database and must outlive the router calls.
async fn test_app() -> (TestContext, Router) {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.clone().unwrap();

    seed_genres(&db).await.unwrap();

    let app = router().with_state(AppState::new(db));

    (test, app)
}

/// Sends one request through the router, with an optional JSON body.
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let request = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

/// Reads a response body as JSON.
async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}

/// Reads a response body as raw bytes.
async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

fn epic_adventure() -> Value {
    json!({
        "name": "Epic Adventure",
        "genreId": 2,
        "price": 59.99,
        "releaseDate": "2024-06-15"
    })
}
