pub mod study_action;
pub use study_action::{ResultStyle, StudyAction};
