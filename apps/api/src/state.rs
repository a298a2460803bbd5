use crate::questions::generator::QuestionGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// The generator is stateless after construction and safe to share across
/// in-flight requests.
#[derive(Clone)]
pub struct AppState {
    pub generator: QuestionGenerator,
}
