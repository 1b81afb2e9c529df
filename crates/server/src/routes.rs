pub mod auth;
pub mod crud;

use std::any::Any;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::{error, Level};

use common::types::Health;
use service::resources::{
    BookingResource, CarResource, CustomerResource, InsuranceResource, LocationResource, MaintenanceResource,
    PaymentResource, ReservationResource,
};

use crate::errors::{ApiError, JsonApiError};
use self::auth::ServerState;
use self::crud::mount;

pub async fn root() -> &'static str {
    "Welcome to the Car Rental API"
}

pub async fn health(State(state): State<ServerState>) -> Json<Health> {
    let up = models::db::test_connection(&state.db).await;
    Json(Health::new(up))
}

async fn route_not_found() -> ApiError {
    ApiError::NotFound("Route not found".into())
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    error!(error = %detail, "handler panicked");
    let body = JsonApiError {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        message: "Internal Server Error".into(),
        error: Some(detail),
    };
    (body.status, Json(body)).into_response()
}

/// Build the full application router: every entity's CRUD table plus login,
/// health and the JSON 404 fallback.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let db = &state.db;

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route(
            "/api/customer/login",
            post(auth::login)
                .get(auth::login_method_fallback)
                .put(auth::login_method_fallback)
                .delete(auth::login_method_fallback),
        )
        .merge(mount::<CustomerResource, ServerState>(db))
        .merge(mount::<LocationResource, ServerState>(db))
        .merge(mount::<CarResource, ServerState>(db))
        .merge(mount::<BookingResource, ServerState>(db))
        .merge(mount::<ReservationResource, ServerState>(db))
        .merge(mount::<InsuranceResource, ServerState>(db))
        .merge(mount::<MaintenanceResource, ServerState>(db))
        .merge(mount::<PaymentResource, ServerState>(db))
        .fallback(route_not_found)
        .with_state(state.clone())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
