use somnus_batch::BatchScorer;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub scorer: BatchScorer,
}
