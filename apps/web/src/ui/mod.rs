//! Form UI state.
//!
//! `Idle → Submitting → Complete | Failed`. The server renders `Idle` and the
//! settled states; the page script in `render` owns the `Submitting` step,
//! using markup rendered from `ViewState::Submitting`.

pub mod render;

use crate::models::submission::CompletionResult;

pub const INCOMPLETE_MESSAGE: &str =
    "Please fill in both the User Information and Job Listing fields.";

/// Form field names, shared by the page markup, its script, and `Submission`.
pub const USER_INFO_FIELD: &str = "userInfo";
pub const JOB_LISTING_FIELD: &str = "jobListing";

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Idle,
    Submitting,
    Complete(CompletionResult),
    Failed(String),
}

/// The two text inputs plus the current view state.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub user_info: String,
    pub job_listing: String,
    view: ViewState,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::with_view(String::new(), String::new(), ViewState::Idle)
    }

    /// A form showing `view`, with the given field values filled in.
    pub fn with_view(user_info: String, job_listing: String, view: ViewState) -> Self {
        Self {
            user_info,
            job_listing,
            view,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.view, ViewState::Submitting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::submission::Submission;

    #[test]
    fn test_new_form_is_idle_and_empty() {
        let form = FormState::new();
        assert_eq!(form.view(), &ViewState::Idle);
        assert!(form.user_info.is_empty());
        assert!(form.job_listing.is_empty());
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_with_view_keeps_fields() {
        let result = CompletionResult {
            full_response: "Dear Team".to_string(),
        };
        let form = FormState::with_view(
            "me".into(),
            "job".into(),
            ViewState::Complete(result.clone()),
        );
        assert_eq!(form.user_info, "me");
        assert_eq!(form.job_listing, "job");
        assert_eq!(form.view(), &ViewState::Complete(result));
    }

    #[test]
    fn test_only_submitting_is_pending() {
        let form = |view| FormState::with_view(String::new(), String::new(), view);
        assert!(!form(ViewState::Idle).is_submitting());
        assert!(!form(ViewState::Failed("x".into())).is_submitting());
        assert!(form(ViewState::Submitting).is_submitting());
    }

    #[test]
    fn test_field_names_match_submission_decoding() {
        let body = format!("{{\"{USER_INFO_FIELD}\": \"a\", \"{JOB_LISTING_FIELD}\": \"b\"}}");
        let submission: Submission = serde_json::from_str(&body).unwrap();
        assert_eq!(submission.user_info, "a");
        assert_eq!(submission.job_listing, "b");
    }
}
