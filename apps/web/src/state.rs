use std::sync::Arc;

use crate::letter::generator::Completer;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable completion backend. Default: AnthropicCompleter.
    pub completer: Arc<dyn Completer>,
}
