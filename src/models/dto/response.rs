use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::ResultStyle;

#[derive(Debug, Clone, Serialize)]
pub struct StudyResponseDto {
    pub action: String,
    pub style: ResultStyle,
    pub output: String,
    pub generated_at: DateTime<Utc>,
}

impl StudyResponseDto {
    pub fn new(action: &str, output: String) -> Self {
        StudyResponseDto {
            action: action.to_string(),
            style: ResultStyle::for_selector(action),
            output,
            generated_at: Utc::now(),
        }
    }
}
