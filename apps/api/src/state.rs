use std::sync::Arc;

use crate::config::Config;
use crate::roadmap::ai::RoadmapDrafter;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// AI roadmap drafter. `None` when no API key is configured; every
    /// request then uses the template pipeline.
    pub drafter: Option<Arc<dyn RoadmapDrafter>>,
}
