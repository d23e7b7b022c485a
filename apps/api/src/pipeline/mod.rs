// Candidate pipeline: stage vocabulary, board bucketing, and drag/drop transitions.
// Persistence of a completed transition is delegated to a `StageUpdater`.

pub mod board;
pub mod handlers;
pub mod stage;
pub mod transition;
