//! Axum route handlers for the cover letter page.

use axum::{
    extract::State,
    http::{header::ACCEPT, HeaderMap, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Form, Json,
};

use crate::errors::AppError;
use crate::letter::generator::write_cover_letter;
use crate::models::submission::Submission;
use crate::state::AppState;
use crate::ui::render::render_page;
use crate::ui::{FormState, ViewState};

/// GET /
///
/// Renders the empty form.
pub async fn handle_index() -> Html<String> {
    Html(render_page(&FormState::new()))
}

/// POST /
///
/// Generates a cover letter for the submitted fields. Empty fields are passed
/// through; the page script is the only gate. Returns the re-rendered page, or
/// `{ "fullResponse": ... }` when the client asks for JSON.
pub async fn handle_submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(submission): Form<Submission>,
) -> Result<Response, AppError> {
    let outcome = write_cover_letter(state.completer.as_ref(), &submission).await;

    if wants_json(&headers) {
        return Ok(Json(outcome?).into_response());
    }

    let (status, view) = match outcome {
        Ok(result) => (StatusCode::OK, ViewState::Complete(result)),
        Err(e) => {
            e.log();
            (e.status(), ViewState::Failed(e.to_string()))
        }
    };

    let Submission {
        user_info,
        job_listing,
    } = submission;
    let form = FormState::with_view(user_info, job_listing, view);

    Ok((status, Html(render_page(&form))).into_response())
}

/// Fallback for every unknown path.
pub async fn handle_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("application/json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wants_json() {
        let mut headers = HeaderMap::new();
        assert!(!wants_json(&headers));

        headers.insert(ACCEPT, "text/html,application/xhtml+xml".parse().unwrap());
        assert!(!wants_json(&headers));

        headers.insert(ACCEPT, "application/json".parse().unwrap());
        assert!(wants_json(&headers));
    }

    #[test]
    fn test_failure_status_is_server_error() {
        let err = AppError::from(crate::llm_client::LlmError::EmptyCompletion);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
