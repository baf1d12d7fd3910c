//! Server-side HTML for the single page. Every function here is a pure
//! function of its inputs.

use crate::ui::{
    FormState, ViewState, INCOMPLETE_MESSAGE, JOB_LISTING_FIELD, USER_INFO_FIELD,
};

pub const PAGE_TITLE: &str = "CV Creator";
pub const PAGE_DESCRIPTION: &str = "Create a tailored CV based on job listing";
pub const EMPTY_PLACEHOLDER: &str = "LLM output will appear here after submission";
pub const WAITING_PLACEHOLDER: &str = "Waiting for response...";
pub const FAILED_MESSAGE: &str = "The cover letter could not be generated.";
pub const SUBMIT_LABEL: &str = "Submit";
pub const SUBMITTING_LABEL: &str = "Submitting...";

const STYLE: &str = r#"
  * { box-sizing: border-box; }
  body { margin: 0; font-family: system-ui, sans-serif; background: #111827; color: #f3f4f6; }
  main { display: flex; flex-direction: column; min-height: 100vh; }
  @media (min-width: 768px) { main { flex-direction: row; height: 100vh; } }
  form, section { width: 100%; padding: 1rem; }
  @media (min-width: 768px) { form, section { width: 50%; } }
  section { background: #1f2937; overflow: auto; }
  label { display: block; font-size: 0.875rem; font-weight: 500; color: #d1d5db; margin-bottom: 0.5rem; }
  textarea { width: 100%; height: 16rem; padding: 0.5rem; margin-bottom: 1rem; border: 1px solid #374151;
             border-radius: 0.375rem; background: #1f2937; color: #f3f4f6; }
  textarea::placeholder { color: #6b7280; }
  button { background: #2563eb; color: #fff; font-weight: 700; padding: 0.5rem 1rem; border: 0; border-radius: 0.25rem; }
  button:hover:enabled { background: #1d4ed8; }
  button:disabled { opacity: 0.6; }
  h2 { font-size: 1.25rem; margin: 0 0 1rem; }
  .placeholder { color: #6b7280; }
  .output { white-space: pre-wrap; color: #d1d5db; }
  .failed { color: #f87171; }
"#;

// Browser-side `Idle → Submitting` step. Each `__STEP__` marker is filled
// from the guard functions below, in order.
const SCRIPT_TEMPLATE: &str = r#"
(function () {
  var form = document.getElementById("letter-form");
  var button = document.getElementById("submit");
  var output = document.getElementById("output");
  form.addEventListener("submit", function (event) {
    __PENDING_GUARD__
    __BLANK_FIELD_GUARD__
    __ENTER_SUBMITTING__
  });
})();
"#;

/// Escapes text for use in HTML element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders the result pane contents for `view`.
pub fn render_output(view: &ViewState) -> String {
    match view {
        ViewState::Submitting => format!(r#"<div class="placeholder">{WAITING_PLACEHOLDER}</div>"#),
        ViewState::Complete(result) if !result.full_response.is_empty() => format!(
            r#"<div class="output">{}</div>"#,
            escape_html(&result.full_response)
        ),
        ViewState::Failed(_) => format!(r#"<div class="failed">{FAILED_MESSAGE}</div>"#),
        ViewState::Idle | ViewState::Complete(_) => {
            format!(r#"<div class="placeholder">{EMPTY_PLACEHOLDER}</div>"#)
        }
    }
}

fn js_string(text: &str) -> String {
    serde_json::Value::from(text).to_string()
}

/// Cancels a submit while a request is pending.
fn pending_guard() -> String {
    "if (button.disabled) { event.preventDefault(); return; }".to_string()
}

/// Cancels a submit when either trimmed field is empty, with a blocking alert.
fn blank_field_guard() -> String {
    format!(
        "if (!form.elements.{USER_INFO_FIELD}.value.trim() || \
         !form.elements.{JOB_LISTING_FIELD}.value.trim()) \
         {{ event.preventDefault(); alert({}); return; }}",
        js_string(INCOMPLETE_MESSAGE)
    )
}

/// Disables the button and swaps the result pane for the waiting placeholder.
fn enter_submitting() -> String {
    format!(
        "button.disabled = true; button.textContent = {}; output.innerHTML = {};",
        js_string(SUBMITTING_LABEL),
        js_string(&render_output(&ViewState::Submitting))
    )
}

fn script() -> String {
    SCRIPT_TEMPLATE
        .replace("__PENDING_GUARD__", &pending_guard())
        .replace("__BLANK_FIELD_GUARD__", &blank_field_guard())
        .replace("__ENTER_SUBMITTING__", &enter_submitting())
}

/// Renders the whole page for `state`.
pub fn render_page(state: &FormState) -> String {
    let submitting = state.is_submitting();
    let (disabled, label) = if submitting {
        (" disabled", SUBMITTING_LABEL)
    } else {
        ("", SUBMIT_LABEL)
    };

    // The newline after each <textarea> keeps a leading newline in the value
    // from being swallowed by the HTML parser.
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<meta name="description" content="{description}">
<style>{STYLE}</style>
</head>
<body>
<main>
<form id="letter-form" method="post" action="/">
  <label for="{USER_INFO_FIELD}">User Information (qualifications, skills, experience)</label>
  <textarea id="{USER_INFO_FIELD}" name="{USER_INFO_FIELD}" placeholder="Enter your qualifications, skills, and experience here." required>
{user_info}</textarea>
  <label for="{JOB_LISTING_FIELD}">Job Listing</label>
  <textarea id="{JOB_LISTING_FIELD}" name="{JOB_LISTING_FIELD}" placeholder="Enter the job listing here" required>
{job_listing}</textarea>
  <button id="submit" type="submit"{disabled}>{label}</button>
</form>
<section>
  <h2>LLM Output</h2>
  <div id="output">{output}</div>
</section>
</main>
<script>{script}</script>
</body>
</html>
"#,
        title = escape_html(PAGE_TITLE),
        description = escape_html(PAGE_DESCRIPTION),
        user_info = escape_html(&state.user_info),
        job_listing = escape_html(&state.job_listing),
        output = render_output(state.view()),
        script = script(),
    )
}
