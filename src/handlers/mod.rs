pub mod points_handler;
pub mod quiz_handler;
pub mod summary_handler;

use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::errors::AppError;

pub use points_handler::{get_points, health_check};
pub use quiz_handler::{generate_quiz, generate_topic_quiz};
pub use summary_handler::summarize;

/// Registers every route on an app or scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(health_check)
        .service(generate_quiz)
        .service(generate_topic_quiz)
        .service(summarize)
        .service(get_points);
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::ValidationError(format!("Invalid request body: {}", err)).into()
}
