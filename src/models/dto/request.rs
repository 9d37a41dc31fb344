use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of both the page form and the JSON endpoint.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct StudyRequestDto {
    #[serde(default)]
    #[validate(length(max = 64))]
    pub action: String,

    #[serde(default)]
    #[validate(length(max = 100000, message = "Notes are too long"))]
    pub notes: String,
}

impl StudyRequestDto {
    pub fn new(action: impl Into<String>, notes: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            notes: notes.into(),
        }
    }
}
