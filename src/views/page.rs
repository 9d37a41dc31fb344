use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::models::domain::{ResultStyle, StudyAction};

const INDEX_TEMPLATE: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/static/index.html"));

/// A result box rendered under the form.
#[derive(Debug, Clone)]
pub struct RenderedResult<'a> {
    pub style: ResultStyle,
    pub text: &'a str,
}

fn render_buttons() -> String {
    StudyAction::ALL
        .iter()
        .map(|action| {
            format!(
                "        <button type=\"submit\" name=\"action\" value=\"{}\" data-spinner=\"{}\" data-label=\"{}\">{}</button>",
                encode_double_quoted_attribute(action.label()),
                encode_double_quoted_attribute(action.spinner_text()),
                encode_double_quoted_attribute(action.button_text()),
                encode_text(action.button_text()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_result(result: Option<&RenderedResult<'_>>) -> String {
    match result {
        Some(result) => format!(
            "<div class=\"result {}\">{}</div>",
            result.style.css_class(),
            encode_text(result.text)
        ),
        None => String::new(),
    }
}

/// Substitutes `{{key}}` markers in one pass so values are never re-scanned.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        match after.find("}}") {
            Some(end) => {
                let key = &after[..end];
                match values.iter().find(|(k, _)| *k == key) {
                    Some((_, value)) => out.push_str(value),
                    None => out.push_str(&rest[start..start + end + 4]),
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

pub fn render_page(notes: &str, result: Option<&RenderedResult<'_>>) -> String {
    let buttons = render_buttons();
    let result = render_result(result);
    let notes = encode_text(notes);

    fill_template(
        INDEX_TEMPLATE,
        &[
            ("buttons", buttons.as_str()),
            ("result", result.as_str()),
            ("notes", &*notes),
        ],
    )
}
