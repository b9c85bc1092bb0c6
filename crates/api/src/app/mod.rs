//! HTTP API application wiring (Axum router + shared state).
//!
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: query-string DTOs and plain-text body rendering
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use labkit_inventory::InventoryStore;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
///
/// The store is injected rather than global, so each caller decides what state
/// the server starts with.
pub fn build_app(store: Arc<InventoryStore>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(ServiceBuilder::new().layer(Extension(store)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use labkit_core::Dollars;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;
    use tracing_subscriber::layer::SubscriberExt;

    /// Counts events emitted from this workspace's crates.
    #[derive(Clone, Default)]
    struct WorkspaceEvents(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for WorkspaceEvents {
        fn on_event(
            &self,
            event: &tracing::Event<'_>,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            if event.metadata().target().starts_with("labkit") {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    async fn call(app: Router, method: Method, uri: &str) -> (StatusCode, String, String) {
        let res = app
            .oneshot(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = res.status();
        let content_type = res
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string())
            .unwrap_or_default();
        let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn health_is_ok() {
        let app = build_app(Arc::new(InventoryStore::new()));
        let (status, _, _) = call(app, Method::GET, "/health").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn responses_are_plain_text() {
        let app = build_app(Arc::new(InventoryStore::seeded()));
        let (status, content_type, body) = call(app.clone(), Method::GET, "/price?item=shoes").await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.starts_with("text/plain"), "{content_type}");
        assert_eq!(body, "$50.00\n");

        let (status, content_type, body) = call(app, Method::GET, "/price?item=ghost").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(content_type.starts_with("text/plain"), "{content_type}");
        assert_eq!(body, "Item not found\n");
    }

    #[tokio::test]
    async fn handlers_share_the_injected_store() {
        let store = Arc::new(InventoryStore::new());
        let app = build_app(store.clone());

        let (status, _, _) = call(app, Method::POST, "/create?item=hat&price=12.5").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(store.price("hat").unwrap(), Dollars::new(12.5).unwrap());
    }

    #[tokio::test]
    async fn mutations_accept_get_and_post_but_reads_are_get_only() {
        let app = build_app(Arc::new(InventoryStore::seeded()));

        let (status, _, body) = call(app.clone(), Method::GET, "/update?item=socks&price=6").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Updated socks to price $6.00\n");

        let (status, _, _) = call(app.clone(), Method::POST, "/delete?item=socks").await;
        assert_eq!(status, StatusCode::OK);

        let (status, _, _) = call(app, Method::POST, "/list").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn missing_price_parameter_is_bad_request() {
        let app = build_app(Arc::new(InventoryStore::seeded()));
        let (status, _, body) = call(app, Method::GET, "/create?item=hat").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Invalid price value\n");
    }

    #[tokio::test]
    async fn create_logs_a_single_event() {
        let events = WorkspaceEvents::default();
        let _guard =
            tracing::subscriber::set_default(tracing_subscriber::registry().with(events.clone()));

        let app = build_app(Arc::new(InventoryStore::new()));
        let (status, _, _) = call(app, Method::POST, "/create?item=hat&price=1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(events.0.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn repeated_parameters_use_the_first_value() {
        let app = build_app(Arc::new(InventoryStore::seeded()));

        let (status, _, body) = call(app.clone(), Method::GET, "/price?item=shoes&item=socks").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "$50.00\n");

        let (status, _, body) =
            call(app, Method::POST, "/update?item=socks&price=8&price=-1&item=shoes").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Updated socks to price $8.00\n");
    }
}
