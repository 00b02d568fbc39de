//! Pull-based HTTP endpoints: Prometheus exposition plus static
//! health/status responses.
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, extract::Extension, routing};
use tokio::net::TcpListener;
use tracing::info;

use crate::error::AppResult;
use crate::metrics::MetricsRecorder;

/// Routes exposing the recorder's registry for scraping.
#[must_use]
pub fn metrics_router(recorder: Arc<MetricsRecorder>) -> Router {
    Router::new()
        .route("/metrics", routing::get(handlers::metrics))
        .layer(Extension(recorder))
}

/// Static health and status routes.
#[must_use]
pub fn status_router() -> Router {
    Router::new()
        .route("/health", routing::get(handlers::health))
        .route("/status", routing::get(handlers::status))
}

/// Bind and serve a router until the process exits.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or serving fails.
pub async fn serve(router: Router, port: u16) -> AppResult<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let tcp = TcpListener::bind(addr).await?;
    info!("Serving HTTP endpoints on {}", addr);
    axum::serve(tcp, router).await?;
    Ok(())
}

mod handlers {
    use std::sync::Arc;

    use axum::{
        Json,
        extract::Extension,
        http::{StatusCode, header},
        response::IntoResponse,
    };
    use serde::Serialize;
    use tracing::error;

    use crate::metrics::MetricsRecorder;

    #[derive(Debug, Serialize)]
    struct HealthBody {
        status: &'static str,
    }

    #[derive(Debug, Serialize)]
    struct StatusBody {
        crawler_status: &'static str,
    }

    pub(super) async fn metrics(
        Extension(recorder): Extension<Arc<MetricsRecorder>>,
    ) -> impl IntoResponse {
        match recorder.encode_text() {
            Ok(body) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, prometheus::TEXT_FORMAT)],
                body,
            )
                .into_response(),
            Err(err) => {
                error!("error text encoding prometheus metrics: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }

    pub(super) async fn health() -> impl IntoResponse {
        Json(HealthBody { status: "healthy" })
    }

    pub(super) async fn status() -> impl IntoResponse {
        Json(StatusBody {
            crawler_status: "running",
        })
    }
}
