use serde::{Deserialize, Serialize};

/// One form submission. Missing fields decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[serde(default)]
    pub user_info: String,
    #[serde(default)]
    pub job_listing: String,
}

/// The generated cover letter, serialized as `{ "fullResponse": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionResult {
    pub full_response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_result_uses_camel_case_key() {
        let result = CompletionResult {
            full_response: "Dear Hiring Manager".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            serde_json::json!({"fullResponse": "Dear Hiring Manager"})
        );
    }

    #[test]
    fn test_submission_decodes_camel_case_and_defaults() {
        let s: Submission = serde_json::from_str(r#"{"userInfo": "a"}"#).unwrap();
        assert_eq!(
            s,
            Submission {
                user_info: "a".to_string(),
                job_listing: String::new(),
            }
        );
    }
}
