use std::time::Instant;

use axum::extract::Request;
use axum::http::{HeaderValue, StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Serialize;
use tracing::{info, warn};

use crate::generated::{PEOPLE, TEAMS};

/// Routes serving the generated collections.
pub fn router() -> Router {
    Router::new()
        .route("/people", get(list_people))
        .route("/teams", get(list_teams))
        .layer(middleware::from_fn(log_requests))
}

pub async fn list_people() -> Response {
    indented_json(PEOPLE)
}

pub async fn list_teams() -> Response {
    indented_json(TEAMS)
}

fn indented_json<T: Serialize + ?Sized>(value: &T) -> Response {
    match serde_json::to_vec_pretty(value) {
        Ok(body) => (
            [(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            )],
            body,
        )
            .into_response(),
        Err(err) => {
            warn!(event = "encode_failed", error = %err);
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let timer = Instant::now();

    let response = next.run(request).await;

    info!(
        event = "request_served",
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        duration_ms = timer.elapsed().as_millis()
    );
    response
}
