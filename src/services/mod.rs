pub mod model_service;
pub mod prompt_builder;
pub mod study_service;
