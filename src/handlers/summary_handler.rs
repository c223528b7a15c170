use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::SummarizeRequest, response::SummaryResponse},
    session::CurrentUser,
};

#[post("/api/summaries")]
pub async fn summarize(
    state: web::Data<AppState>,
    request: web::Json<SummarizeRequest>,
    user: CurrentUser,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let run = state
        .summary_service
        .run_summary(&request.text, user.id())
        .await;

    Ok(HttpResponse::Ok().json(SummaryResponse {
        summary: run.summary,
        reduced: run.reduced,
        chunks: run.chunks,
    }))
}
