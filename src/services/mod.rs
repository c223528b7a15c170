pub mod model_service;
pub mod points_service;
pub mod prompt_composer;
pub mod quiz_service;
pub mod quiz_validator;
pub mod response_decoder;
pub mod summary_service;
