use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{GenerateQuizRequest, GenerateTopicQuizRequest},
        response::QuizResponse,
    },
    session::CurrentUser,
};

#[post("/api/quizzes/generate")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequest>,
    user: CurrentUser,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let run = state
        .quiz_service
        .run_quiz(&request.text, request.count, user.id())
        .await;

    Ok(HttpResponse::Ok().json(QuizResponse {
        items: run.items,
        chunks: run.chunks,
    }))
}

#[post("/api/quizzes/generate/topic")]
pub async fn generate_topic_quiz(
    state: web::Data<AppState>,
    request: web::Json<GenerateTopicQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let run = state
        .quiz_service
        .run_topic_quiz(&request.text, &request.topic, request.count)
        .await;

    Ok(HttpResponse::Ok().json(QuizResponse {
        items: run.items,
        chunks: run.chunks,
    }))
}
