use crate::generation::gateway::GenerationGateway;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Cheap to clone; the provider sits behind an `Arc`.
    pub gateway: GenerationGateway,
}
