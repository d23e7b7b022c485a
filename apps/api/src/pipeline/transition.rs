//! Drag/drop stage transitions.
//!
//! `TransitionController` owns the single pending-move slot. Completing a move hands
//! `(candidate_id, stage)` to a `StageChangeSink` and returns immediately; the
//! controller never waits on, retries, or rolls back the resulting update.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::pipeline::stage::RecruitmentStage;

/// Persists a candidate's new stage. May fail; callers decide what to do about it.
#[async_trait]
pub trait StageUpdater: Send + Sync {
    async fn update_stage(&self, candidate_id: Uuid, stage: RecruitmentStage)
        -> Result<(), AppError>;
}

/// Notified once per completed drop.
pub trait StageChangeSink: Send + Sync {
    fn stage_changed(&self, candidate_id: Uuid, stage: RecruitmentStage);
}

/// Holds at most one in-flight candidate. Access is serialised by the mutex so
/// concurrent gestures cannot interleave inside a begin/complete pair.
pub struct TransitionController {
    pending: Mutex<Option<Uuid>>,
    sink: Arc<dyn StageChangeSink>,
}

impl TransitionController {
    pub fn new(sink: Arc<dyn StageChangeSink>) -> Self {
        Self {
            pending: Mutex::new(None),
            sink,
        }
    }

    /// Marks `candidate_id` as the subject of the next drop.
    /// Returns the candidate it displaced, if any.
    pub fn begin_transition(&self, candidate_id: Uuid) -> Option<Uuid> {
        let displaced = self.slot().replace(candidate_id);
        if let Some(previous) = displaced {
            debug!("Pending move of {previous} discarded in favour of {candidate_id}");
        }
        displaced
    }

    /// Drops the pending candidate onto `target`. Returns `false` when nothing was pending.
    pub fn complete_transition(&self, target: RecruitmentStage) -> bool {
        // Release the lock before notifying the sink.
        let taken = self.slot().take();
        match taken {
            Some(candidate_id) => {
                info!("Moving candidate {candidate_id} to {target}");
                self.sink.stage_changed(candidate_id, target);
                true
            }
            None => false,
        }
    }

    /// Clears the pending slot without notifying anyone.
    pub fn cancel_transition(&self) -> Option<Uuid> {
        self.slot().take()
    }

    pub fn pending(&self) -> Option<Uuid> {
        *self.slot()
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<Uuid>> {
        // An Option<Uuid> cannot be left half-written, so a poisoned lock is still usable.
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Sink that runs each update as a detached task and logs failures.
pub struct SpawnedUpdates {
    updater: Arc<dyn StageUpdater>,
}

impl SpawnedUpdates {
    pub fn new(updater: Arc<dyn StageUpdater>) -> Self {
        Self { updater }
    }
}

impl StageChangeSink for SpawnedUpdates {
    fn stage_changed(&self, candidate_id: Uuid, stage: RecruitmentStage) {
        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                warn!("No runtime available; stage update for {candidate_id} dropped");
                return;
            }
        };

        let updater = Arc::clone(&self.updater);
        handle.spawn(async move {
            match updater.update_stage(candidate_id, stage).await {
                Ok(()) => info!("Candidate {candidate_id} persisted at stage {stage}"),
                Err(e) => error!("Failed to update candidate {candidate_id} to {stage}: {e}"),
            }
        });
    }
}
