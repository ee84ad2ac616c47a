//! Application state for the web server.

use std::sync::Arc;

use tailor::ResumeTailor;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The generation pipeline. Stateless, so shared without locking.
    pub tailor: Arc<ResumeTailor>,
    /// Allowed CORS origin; any origin when `None`.
    pub cors_origin: Option<String>,
}

impl AppState {
    /// Create new application state with the default pipeline.
    pub fn new(cors_origin: Option<String>) -> Self {
        Self::with_tailor(ResumeTailor::new(), cors_origin)
    }

    pub fn with_tailor(tailor: ResumeTailor, cors_origin: Option<String>) -> Self {
        Self {
            tailor: Arc::new(tailor),
            cors_origin,
        }
    }
}
