use super::body::RequestBody;
use crate::services::auth_service::{
    self, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
};
use crate::state::AppState;
use crate::utils::{AppError, Claims, ErrorBody};
use actix_web::{web, HttpResponse};

#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "Auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created", body = RegisterResponse),
        (status = 400, description = "Missing fields or store rejected the insert", body = ErrorBody),
        (status = 500, description = "Unexpected error", body = ErrorBody)
    )
)]
pub async fn register(
    state: web::Data<AppState>,
    body: RequestBody<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();
    log::info!(
        "📝 POST /auth/register - email: {}",
        request.email.as_deref().unwrap_or("N/A")
    );

    let response = auth_service::register(&state, &request).await?;
    Ok(HttpResponse::Created().json(response))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorBody),
        (status = 500, description = "Unexpected error", body = ErrorBody)
    )
)]
pub async fn login(
    state: web::Data<AppState>,
    body: RequestBody<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();
    let email = request.email.as_deref().unwrap_or("N/A");
    log::info!("🔐 POST /auth/login - email: {}", email);

    match auth_service::login(&state, &request).await {
        Ok(response) => {
            log::info!("✅ Login successful: {}", email);
            Ok(HttpResponse::Ok().json(response))
        }
        Err(e) => {
            log::warn!("❌ Login failed: {} - {}", email, e);
            Err(e)
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "Auth",
    responses(
        (status = 200, description = "Claims of the bearer token", body = Claims),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorBody)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn me(claims: web::ReqData<Claims>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "user": claims.into_inner()
    }))
}
