//! HTTP surface for jasmim: router, application state, and the error-to-status
//! mapping shared by all handlers.

pub mod handlers;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use uuid::Uuid;

use jasmim_core::defaults;
use jasmim_inference::VisionBackend;

// =============================================================================
// REQUEST ID (UUIDv7)
// =============================================================================

/// Generates time-ordered UUIDv7 request correlation IDs.
///
/// UUIDv7 embeds a Unix timestamp, so IDs sort chronologically, which helps
/// log correlation and debugging production incidents.
#[derive(Clone, Default)]
struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

// =============================================================================
// APPLICATION STATE
// =============================================================================

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The vision model client. Stateless and credential-holding; the only
    /// long-lived resource in the process.
    pub backend: Arc<dyn VisionBackend>,
}

/// OpenAPI documentation (utoipa metadata, serves Swagger UI at `/docs`).
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Jasmim API",
        description = "Análise de plantas por foto: identificação, diagnóstico e plano de cuidados"
    ),
    paths(handlers::analyze::analyze_plant, health_check),
    components(schemas(
        handlers::analyze::AnalyzeRequest,
        jasmim_core::AnalysisType,
        jasmim_core::PlantAnalysis,
        jasmim_core::Identificacao,
        jasmim_core::Saude,
        jasmim_core::HealthStatus,
        jasmim_core::Diagnostico,
        jasmim_core::PlanoDeAcao,
        jasmim_core::PassoDeAcao,
    )),
    tags(
        (name = "Plants", description = "Plant photo analysis"),
        (name = "System", description = "Health checks")
    )
)]
pub struct ApiDoc;

// =============================================================================
// ERROR HANDLING
// =============================================================================

/// Localized client message for missing request fields.
pub const MSG_REQUIRED_FIELDS: &str = "Imagem e tipo de análise são obrigatórios.";

/// Localized generic failure message. Upstream detail is logged, never leaked.
pub const MSG_INTERNAL_FAILURE: &str = "Falha interna do servidor.";

#[derive(Debug)]
pub enum ApiError {
    MethodNotAllowed,
    BadRequest(String),
    Internal(jasmim_core::Error),
}

impl From<jasmim_core::Error> for ApiError {
    fn from(err: jasmim_core::Error) -> Self {
        match err {
            jasmim_core::Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            other => ApiError::Internal(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method Not Allowed".to_string(),
            ),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(err) => {
                tracing::error!("Analysis request failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    MSG_INTERNAL_FAILURE.to_string(),
                )
            }
        };

        let body = Json(serde_json::json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

// =============================================================================
// ROUTER
// =============================================================================

/// Parse allowed origins from comma-separated environment variable.
///
/// `ALLOWED_ORIGINS` whitelists CORS origins; defaults to local development.
fn parse_allowed_origins() -> Vec<HeaderValue> {
    let origins_str =
        std::env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| "http://localhost:3000".to_string());

    origins_str
        .split(',')
        .filter_map(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            match trimmed.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(e) => {
                    tracing::warn!("Invalid CORS origin '{}': {}", trimmed, e);
                    None
                }
            }
        })
        .collect()
}

/// Rejected methods answer with a structured body, before the body is read.
async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Liveness plus model-backend reachability.
///
/// Never fails the process: a down provider reports `degraded`.
#[utoipa::path(get, path = "/health", tag = "System",
    responses((status = 200, description = "Service health")))]
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let backend_up = state.backend.health_check().await.unwrap_or(false);

    Json(serde_json::json!({
        "status": if backend_up { "ok" } else { "degraded" },
        "model": state.backend.model_name(),
    }))
}

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // OpenAPI / Swagger UI
        .merge(SwaggerUi::new("/docs").url("/api/openapi.json", ApiDoc::openapi()))
        // Plant analysis
        .route(
            "/api/v1/plants/analyze",
            post(handlers::analyze::analyze_plant).fallback(method_not_allowed),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .layer({
            let allowed_origins = parse_allowed_origins();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(allowed_origins))
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
                .max_age(std::time::Duration::from_secs(3600))
        })
        .layer(RequestBodyLimitLayer::new(defaults::BODY_LIMIT_BYTES))
        .with_state(state)
}
