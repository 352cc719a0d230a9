use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

pub const SERVICE_NAME: &str = "NEXUS SST API";

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub service: String,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct TestResponse {
    pub message: String,
    pub environment: String,
}

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        service: SERVICE_NAME.to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/api/test",
    tag = "Health",
    responses(
        (status = 200, description = "Smoke test with the runtime mode", body = TestResponse)
    )
)]
pub async fn test_route(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(TestResponse {
        message: format!("{} funcionando!", SERVICE_NAME),
        environment: state.config.environment_name().to_string(),
    })
}
