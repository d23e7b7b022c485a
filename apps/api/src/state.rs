use std::sync::Arc;

use sqlx::PgPool;

use crate::assistant::Assistant;
use crate::pipeline::transition::{StageUpdater, TransitionController};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Single pending drag/drop slot shared by every board client.
    pub transitions: Arc<TransitionController>,
    /// Persists stage edits. Board drops reach it through `transitions`.
    pub stage_updater: Arc<dyn StageUpdater>,
    pub assistant: Assistant,
}
