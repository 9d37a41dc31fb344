use serde::Serialize;

use crate::constants::prompts::{BEGINNER_SUMMARY_PROMPT, KEY_POINTS_PROMPT, QUIZ_PROMPT};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Copy)]
#[serde(rename_all = "kebab-case")]
pub enum StudyAction {
    KeyPoints,    // Bullet-point digest
    Summarize,    // Beginner-level explanation
    GenerateQuiz, // Five multiple-choice questions
}

/// How a result box is styled on the page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Copy)]
#[serde(rename_all = "lowercase")]
pub enum ResultStyle {
    Success,
    Info,
    Warning,
}

impl ResultStyle {
    pub fn css_class(&self) -> &'static str {
        match self {
            ResultStyle::Success => "result-success",
            ResultStyle::Info => "result-info",
            ResultStyle::Warning => "result-warning",
        }
    }

    /// Style for a selector, falling back to `Info` for unknown ones.
    pub fn for_selector(action: &str) -> Self {
        StudyAction::from_selector(action)
            .map(|a| a.result_style())
            .unwrap_or(ResultStyle::Info)
    }
}

impl StudyAction {
    pub const ALL: [StudyAction; 3] = [
        StudyAction::KeyPoints,
        StudyAction::Summarize,
        StudyAction::GenerateQuiz,
    ];

    /// Matches a button label or slug, ignoring case and surrounding whitespace.
    pub fn from_selector(selector: &str) -> Option<Self> {
        let selector = selector.trim();
        Self::ALL
            .into_iter()
            .find(|action| {
                selector.eq_ignore_ascii_case(action.label())
                    || selector.eq_ignore_ascii_case(action.slug())
            })
            .or_else(|| {
                selector
                    .eq_ignore_ascii_case("quiz")
                    .then_some(StudyAction::GenerateQuiz)
            })
    }

    pub fn label(&self) -> &'static str {
        match self {
            StudyAction::KeyPoints => "Key Points",
            StudyAction::Summarize => "Summarize",
            StudyAction::GenerateQuiz => "Generate Quiz",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            StudyAction::KeyPoints => "key-points",
            StudyAction::Summarize => "summarize",
            StudyAction::GenerateQuiz => "generate-quiz",
        }
    }

    pub fn button_text(&self) -> &'static str {
        match self {
            StudyAction::KeyPoints => "✨ Key Points",
            StudyAction::Summarize => "🧠 Summarize",
            StudyAction::GenerateQuiz => "🎯 Generate Quiz",
        }
    }

    pub fn spinner_text(&self) -> &'static str {
        match self {
            StudyAction::KeyPoints => "Generating Key Points...",
            StudyAction::Summarize => "Summarizing...",
            StudyAction::GenerateQuiz => "Generating Quiz...",
        }
    }

    pub fn result_style(&self) -> ResultStyle {
        match self {
            StudyAction::KeyPoints => ResultStyle::Success,
            StudyAction::Summarize => ResultStyle::Info,
            StudyAction::GenerateQuiz => ResultStyle::Warning,
        }
    }

    pub fn instruction(&self) -> &'static str {
        match self {
            StudyAction::KeyPoints => KEY_POINTS_PROMPT,
            StudyAction::Summarize => BEGINNER_SUMMARY_PROMPT,
            StudyAction::GenerateQuiz => QUIZ_PROMPT,
        }
    }
}

impl std::fmt::Display for StudyAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
