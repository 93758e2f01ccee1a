use std::sync::Arc;

use crate::directory::CandidateDirectory;

/// Shared application state injected into all route handlers via Axum
/// extractors. The directory is built in `main` and handed in explicitly;
/// handlers never reach for globals.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<CandidateDirectory>,
}
