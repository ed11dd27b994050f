use std::sync::Arc;

use pantheon_core::engine::QuizEngine;

/// Shared handler state. The engine holds no per-request data, so no lock
/// is needed.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<QuizEngine>,
}

impl AppState {
    pub fn new(engine: QuizEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}
