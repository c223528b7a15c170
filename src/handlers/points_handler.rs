use actix_web::{get, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::response::{HealthResponse, PointsResponse},
};

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

#[get("/api/points/{user_id}")]
pub async fn get_points(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user_id = user_id.into_inner();
    let points = state.points_ledger.balance(&user_id).await;
    Ok(HttpResponse::Ok().json(PointsResponse { user_id, points }))
}
