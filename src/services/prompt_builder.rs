use crate::models::domain::StudyAction;

/// Builds the prompt sent to the model for `action`.
///
/// Returns `None` when the notes are blank. Unknown selectors send the
/// notes verbatim.
pub fn build_prompt(action: &str, notes: &str) -> Option<String> {
    if notes.trim().is_empty() {
        return None;
    }

    let prompt = match StudyAction::from_selector(action) {
        Some(action) => format!("{}\n\n{}", action.instruction(), notes),
        None => notes.to_string(),
    };

    Some(prompt)
}
