pub mod health_handler;
pub mod study_handler;

use actix_web::web;

use crate::errors::AppError;

pub use health_handler::{health_check, health_check_live};
pub use study_handler::{index, study_api, submit_notes};

/// Registers every route along with body limits for forms and JSON.
pub fn configure(max_payload_bytes: usize) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(
            web::FormConfig::default()
                .limit(max_payload_bytes)
                .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
        )
        .app_data(
            web::JsonConfig::default()
                .limit(max_payload_bytes)
                .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
        )
        .service(index)
        .service(submit_notes)
        .service(study_api)
        .service(health_check)
        .service(health_check_live);
    }
}
