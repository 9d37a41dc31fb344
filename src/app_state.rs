use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    services::{
        model_service::{GeminiModelService, ModelService},
        study_service::StudyService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub study_service: Arc<StudyService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let model_service = Arc::new(GeminiModelService::new(&config)?);
        log::info!(
            "Using model '{}' at {}",
            config.gemini_model,
            model_service.endpoint()
        );
        Ok(Self::with_model_service(config, model_service))
    }

    /// Builds state around any model backend.
    pub fn with_model_service(config: Config, model_service: Arc<dyn ModelService>) -> Self {
        let study_service = Arc::new(StudyService::new(model_service, config.response_delay));

        Self {
            study_service,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_from_test_config() {
        let state = AppState::new(Config::test_config()).unwrap();
        assert_eq!(state.config.gemini_model, "gemini-2.5-flash");
    }
}
