use std::sync::Arc;

use formula_core::ExplanationStore;

/// Shared, read-only service state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub explanations: Arc<ExplanationStore>,
    /// Echo resolved inputs alongside results
    pub echo_inputs: bool,
}

impl AppState {
    pub fn new(explanations: ExplanationStore, echo_inputs: bool) -> Self {
        AppState {
            explanations: Arc::new(explanations),
            echo_inputs,
        }
    }
}
