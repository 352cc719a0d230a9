use crate::models::DashboardResponse;
use crate::services::dashboard_service;
use crate::state::AppState;
use crate::utils::{AppError, ErrorBody};
use actix_web::{web, HttpResponse};

#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Counters and chart data", body = DashboardResponse),
        (status = 500, description = "A count query failed", body = ErrorBody)
    )
)]
pub async fn get_stats(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let response = dashboard_service::get_stats(&state).await?;
    Ok(HttpResponse::Ok().json(response))
}
