use std::{sync::Arc, time::Duration};

use crate::{
    constants::prompts::{EMPTY_NOTES_WARNING, ERROR_MARKER},
    errors::AppError,
    services::{model_service::ModelService, prompt_builder::build_prompt},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudyOutcome {
    Generated(String),
    MissingNotes,
    Failed(String),
}

impl StudyOutcome {
    /// The text shown to the user in place of a result.
    pub fn message(&self) -> String {
        match self {
            StudyOutcome::Generated(text) => text.clone(),
            StudyOutcome::MissingNotes => EMPTY_NOTES_WARNING.to_string(),
            StudyOutcome::Failed(error) => format!("{} {}", ERROR_MARKER, error),
        }
    }
}

pub struct StudyService {
    model_service: Arc<dyn ModelService>,
    response_delay: Duration,
}

impl StudyService {
    pub fn new(model_service: Arc<dyn ModelService>, response_delay: Duration) -> Self {
        Self {
            model_service,
            response_delay,
        }
    }

    /// Runs one button press: waits the configured delay, then generates.
    pub async fn run(&self, action: &str, notes: &str) -> StudyOutcome {
        if !self.response_delay.is_zero() {
            tokio::time::sleep(self.response_delay).await;
        }
        self.generate(action, notes).await
    }

    pub async fn generate(&self, action: &str, notes: &str) -> StudyOutcome {
        let Some(prompt) = build_prompt(action, notes) else {
            log::debug!("Skipping '{}' request with blank notes", action);
            return StudyOutcome::MissingNotes;
        };

        match self.model_service.generate_content(&prompt).await {
            Ok(text) => {
                log::info!("Generated {} characters for '{}'", text.len(), action);
                StudyOutcome::Generated(text.trim().to_string())
            }
            Err(e) => {
                log_model_error(action, &e);
                StudyOutcome::Failed(e.to_string())
            }
        }
    }

    pub async fn generate_response(&self, action: &str, notes: &str) -> String {
        self.generate(action, notes).await.message()
    }
}

fn log_model_error(action: &str, error: &AppError) {
    if error.is_transient() {
        log::warn!("Model call for '{}' failed: {}", action, error);
    } else {
        log::error!("Model call for '{}' was rejected: {}", action, error);
    }
}
