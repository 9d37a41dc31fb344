pub const KEY_POINTS_PROMPT: &str =
    "Summarize the following study notes in a few key bullet points:";

pub const BEGINNER_SUMMARY_PROMPT: &str =
    "Explain the key concepts in the following notes as if I am a complete beginner:";

pub const QUIZ_PROMPT: &str = "Create a short 5-question multiple-choice quiz based on these notes. Provide the questions and correct answers:";

/// Shown instead of a result when the notes are blank.
pub const EMPTY_NOTES_WARNING: &str = "⚠️ Please enter some notes first.";

/// Prefix of every model failure rendered to the user.
pub const ERROR_MARKER: &str = "❌ Error:";
