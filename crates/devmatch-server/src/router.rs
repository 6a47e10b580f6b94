use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::Level;

use crate::error::handle_panic;
use crate::handlers;

/// Routes served by the API, without middleware.
///
/// Unknown paths and unsupported methods on known paths both answer 404.
pub fn routes() -> Router {
    Router::new()
        .route("/", get(handlers::welcome))
        .route("/health", get(handlers::health))
        .method_not_allowed_fallback(handlers::not_found)
        .fallback(handlers::not_found)
}

/// Wrap `router` in the middleware stack shared by every request.
///
/// Outermost first: access log, CORS, panic recovery. CORS sits outside the
/// panic handler so recovered 500s carry the same headers. `OPTIONS` requests
/// are answered by the CORS layer and never reach a route.
pub fn with_middleware(router: Router) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                    .on_response(
                        DefaultOnResponse::new()
                            .level(Level::INFO)
                            .latency_unit(LatencyUnit::Millis),
                    ),
            )
            // CORS: allow any origin, method, and header
            .layer(CorsLayer::permissive())
            .layer(CatchPanicLayer::custom(handle_panic)),
    )
}

/// Create the main application router with all routes.
pub fn create_router() -> Router {
    with_middleware(routes())
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn access_log_records_method_path_status_and_latency() {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let request = Request::builder()
            .method("GET")
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let resp = create_router().oneshot(request).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let logs = buffer.contents();
        assert!(logs.contains("method=GET"), "logs: {logs}");
        assert!(logs.contains("uri=/health"), "logs: {logs}");
        assert!(logs.contains("status=200"), "logs: {logs}");
        assert!(logs.contains("latency="), "logs: {logs}");
        assert!(logs.contains(" ms"), "logs: {logs}");
    }

    #[tokio::test]
    async fn access_log_records_not_found() {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let request = Request::builder()
            .method("POST")
            .uri("/missing")
            .body(Body::empty())
            .unwrap();
        let resp = create_router().oneshot(request).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let logs = buffer.contents();
        assert!(logs.contains("method=POST"), "logs: {logs}");
        assert!(logs.contains("uri=/missing"), "logs: {logs}");
        assert!(logs.contains("status=404"), "logs: {logs}");
    }
}
