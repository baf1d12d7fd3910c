//! Cover letter generator — turns a `Submission` into a `CompletionResult`
//! through a pluggable `Completer`.
//!
//! Default backend: `AnthropicCompleter`, which resolves the API key on every
//! call. `AppState` holds an `Arc<dyn Completer>`.

use async_trait::async_trait;
use tracing::debug;

use crate::config::API_KEY_VAR;
use crate::errors::AppError;
use crate::letter::prompts::{build_system_prompt, build_user_message};
use crate::llm_client::{LlmClient, LlmError};
use crate::models::submission::{CompletionResult, Submission};

/// A single non-streaming completion: one system instruction, one user message,
/// one text reply.
#[async_trait]
pub trait Completer: Send + Sync {
    async fn complete(&self, system: &str, message: &str) -> Result<String, LlmError>;
}

/// Completer backed by the Anthropic Messages API.
pub struct AnthropicCompleter {
    llm: LlmClient,
    api_key_var: String,
}

impl AnthropicCompleter {
    pub fn new(llm: LlmClient) -> Self {
        Self::with_key_var(llm, API_KEY_VAR)
    }

    pub fn with_key_var(llm: LlmClient, api_key_var: impl Into<String>) -> Self {
        Self {
            llm,
            api_key_var: api_key_var.into(),
        }
    }

    fn api_key(&self) -> Result<String, LlmError> {
        std::env::var(&self.api_key_var)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(LlmError::MissingApiKey)
    }
}

#[async_trait]
impl Completer for AnthropicCompleter {
    async fn complete(&self, system: &str, message: &str) -> Result<String, LlmError> {
        let api_key = self.api_key()?;
        self.llm.call_text(&api_key, system, message).await
    }
}

/// Builds the prompts for `submission` and issues exactly one completion.
/// Field contents are never logged.
pub async fn write_cover_letter(
    completer: &dyn Completer,
    submission: &Submission,
) -> Result<CompletionResult, AppError> {
    let system = build_system_prompt(&submission.job_listing);
    let message = build_user_message(&submission.user_info);

    debug!(
        user_info_len = submission.user_info.len(),
        job_listing_len = submission.job_listing.len(),
        "Requesting cover letter"
    );

    let full_response = completer.complete(&system, &message).await?;

    Ok(CompletionResult { full_response })
}
