//! Router construction and middleware.

use std::time::Duration;

use axum::body::Body;
use axum::extract::MatchedPath;
use axum::http::{Request, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::handlers;
use crate::state::ServerState;

pub fn build_router(state: ServerState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            let route = req
                .extensions()
                .get::<MatchedPath>()
                .map(MatchedPath::as_str)
                .unwrap_or("unmatched");
            tracing::info_span!("lookup", route, method = %req.method(), query = req.uri().query())
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                status = res.status().as_u16(),
                latency_ms = latency.as_millis() as u64,
                "lookup served"
            );
        });

    // Health probes stay out of the request log.
    let logged_routes = Router::new()
        .route("/predict", post(handlers::predict::predict))
        .layer(trace_layer);

    Router::new()
        .merge(logged_routes)
        .route("/health", get(handlers::health))
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::{header, Method, StatusCode};
    use foodie_core::FoodTable;
    use serde_json::{json, Value};
    use std::sync::LazyLock;
    use tower::ServiceExt;

    async fn send(app: Router, method: Method, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::ORIGIN, "http://localhost:8081")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    async fn predict(food_name: &str) -> Value {
        let app = build_router(ServerState::default());
        let (status, body) = send(app, Method::POST, &format!("/predict?food_name={food_name}")).await;
        assert_eq!(status, StatusCode::OK, "food_name={food_name}");
        body
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(ServerState::default());
        let (status, body) = send(app, Method::GET, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn test_predict_known_foods() {
        assert_eq!(predict("egg").await, json!({ "protein": 13 }));
        assert_eq!(predict("chicken").await, json!({ "protein": 27 }));
        assert_eq!(predict("rice").await, json!({ "protein": 2.7 }));
    }

    #[tokio::test]
    async fn test_predict_ignores_case() {
        assert_eq!(predict("EGG").await, json!({ "protein": 13 }));
        assert_eq!(predict("Egg").await, json!({ "protein": 13 }));
        assert_eq!(predict("ChIcKeN").await, json!({ "protein": 27 }));
    }

    #[tokio::test]
    async fn test_predict_unknown_foods() {
        assert_eq!(predict("tofu").await, json!({ "protein": "unknown" }));
        assert_eq!(predict("").await, json!({ "protein": "unknown" }));
        // Whitespace is matched literally.
        assert_eq!(predict("Egg%20").await, json!({ "protein": "unknown" }));
    }

    #[tokio::test]
    async fn test_predict_repeated_food_name_uses_last() {
        assert_eq!(predict("egg&food_name=rice").await, json!({ "protein": 2.7 }));
        assert_eq!(predict("tofu&food_name=Chicken").await, json!({ "protein": 27 }));
    }

    #[tokio::test]
    async fn test_predict_tolerates_odd_queries() {
        assert_eq!(predict("egg&lang=en").await, json!({ "protein": 13 }));
        assert_eq!(predict("egg+").await, json!({ "protein": "unknown" }));
        assert_eq!(predict("%FF").await, json!({ "protein": "unknown" }));

        let app = build_router(ServerState::default());
        let (status, body) = send(app, Method::POST, "/predict?food_name").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "protein": "unknown" }));
    }

    #[tokio::test]
    async fn test_predict_is_idempotent() {
        let first = predict("rice").await;
        for _ in 0..5 {
            assert_eq!(predict("rice").await, first);
        }
    }

    #[tokio::test]
    async fn test_predict_requires_food_name() {
        let app = build_router(ServerState::default());
        let (status, body) = send(app, Method::POST, "/predict").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].as_str().is_some_and(|e| e.contains("food_name")));
    }

    #[tokio::test]
    async fn test_predict_rejects_get() {
        let app = build_router(ServerState::default());
        let (status, _) = send(app, Method::GET, "/predict?food_name=egg").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_custom_table() {
        static TABLE: LazyLock<FoodTable> =
            LazyLock::new(|| FoodTable::from_entries([("Tofu", 8.0)]).unwrap());

        let app = build_router(ServerState::new(&TABLE));
        let (_, body) = send(app.clone(), Method::POST, "/predict?food_name=TOFU").await;
        assert_eq!(body, json!({ "protein": 8 }));
        let (_, body) = send(app, Method::POST, "/predict?food_name=egg").await;
        assert_eq!(body, json!({ "protein": "unknown" }));
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let app = build_router(ServerState::default());
        let request = Request::builder()
            .uri("/health")
            .header(header::ORIGIN, "http://localhost:8081")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }
}
