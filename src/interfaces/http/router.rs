//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{http::HeaderValue, middleware, routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::common::{ApiResponse, OrderResponse, PageResponse};
use super::modules::health::{self, ComponentHealth, HealthResponse, HealthState};
use super::modules::members::{self, MemberResponse, MemberState};
use super::modules::metrics::{http_metrics_middleware, prometheus_metrics, MetricsState};
use super::modules::request_id::request_id_middleware;
use crate::config::AppConfig;
use crate::domain::RepositoryProvider;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        members::find_member,
        members::find_member2,
        members::list_members,
    ),
    components(
        schemas(
            ApiResponse<String>,
            PageResponse<MemberResponse>,
            OrderResponse,
            MemberResponse,
            HealthResponse,
            ComponentHealth,
        )
    ),
    tags(
        (name = "Health", description = "Service health check"),
        (name = "Members", description = "Member lookup and paged listing"),
    ),
    info(
        title = "Member Service API",
        version = "1.0.0",
        description = "Members, teams and paged member listings"
    )
)]
pub struct ApiDoc;

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let values: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();
        AllowOrigin::list(values)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Create the API router with all routes
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    db: DatabaseConnection,
    app_cfg: &AppConfig,
    prometheus_handle: PrometheusHandle,
) -> Router {
    let member_state = MemberState {
        repos,
        paging: app_cfg.paging.clone(),
    };

    let member_routes = Router::new()
        .route("/members", get(members::list_members))
        .route("/members/{id}", get(members::find_member))
        .route("/members2/{id}", get(members::find_member2))
        .with_state(member_state);

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(HealthState {
            db,
            started_at: Arc::new(Instant::now()),
        });

    let metrics_routes = Router::new()
        .route("/metrics", get(prometheus_metrics))
        .with_state(MetricsState {
            handle: prometheus_handle,
        });

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .merge(health_routes)
        .merge(metrics_routes)
        .merge(member_routes)
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors_layer(&app_cfg.server.cors_origins))
        .layer(TraceLayer::new_for_http())
}
