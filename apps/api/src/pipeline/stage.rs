//! Recruitment stages and the legacy status vocabulary they are mapped from.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the five fixed pipeline positions a candidate can occupy.
/// Declaration order is pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecruitmentStage {
    Received,
    InterviewPlanned,
    InterviewCompleted,
    ClientWaiting,
    Recruited,
}

impl RecruitmentStage {
    pub const ALL: [RecruitmentStage; 5] = [
        RecruitmentStage::Received,
        RecruitmentStage::InterviewPlanned,
        RecruitmentStage::InterviewCompleted,
        RecruitmentStage::ClientWaiting,
        RecruitmentStage::Recruited,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecruitmentStage::Received => "received",
            RecruitmentStage::InterviewPlanned => "interview_planned",
            RecruitmentStage::InterviewCompleted => "interview_completed",
            RecruitmentStage::ClientWaiting => "client_waiting",
            RecruitmentStage::Recruited => "recruited",
        }
    }

    /// Column heading shown on the board.
    pub fn label(&self) -> &'static str {
        match self {
            RecruitmentStage::Received => "Applications",
            RecruitmentStage::InterviewPlanned => "Interview Scheduled",
            RecruitmentStage::InterviewCompleted => "Interview Completed",
            RecruitmentStage::ClientWaiting => "Client Review",
            RecruitmentStage::Recruited => "Hired",
        }
    }
}

impl fmt::Display for RecruitmentStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status vocabulary stored on the candidate record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    New,
    Interview,
    Offer,
    Waiting,
    Hired,
    Rejected,
}

impl CandidateStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateStatus::New => "new",
            CandidateStatus::Interview => "interview",
            CandidateStatus::Offer => "offer",
            CandidateStatus::Waiting => "waiting",
            CandidateStatus::Hired => "hired",
            CandidateStatus::Rejected => "rejected",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "new" => Some(CandidateStatus::New),
            "interview" => Some(CandidateStatus::Interview),
            "offer" => Some(CandidateStatus::Offer),
            "waiting" => Some(CandidateStatus::Waiting),
            "hired" => Some(CandidateStatus::Hired),
            "rejected" => Some(CandidateStatus::Rejected),
            _ => None,
        }
    }

    /// Pipeline stage for this status. `Rejected` has none and never reaches the board.
    pub fn stage(&self) -> Option<RecruitmentStage> {
        match self {
            CandidateStatus::New => Some(RecruitmentStage::Received),
            CandidateStatus::Interview => Some(RecruitmentStage::InterviewPlanned),
            CandidateStatus::Offer => Some(RecruitmentStage::InterviewCompleted),
            CandidateStatus::Waiting => Some(RecruitmentStage::ClientWaiting),
            CandidateStatus::Hired => Some(RecruitmentStage::Recruited),
            CandidateStatus::Rejected => None,
        }
    }

    /// Status written back when a candidate lands in `stage`.
    pub fn for_stage(stage: RecruitmentStage) -> Self {
        match stage {
            RecruitmentStage::Received => CandidateStatus::New,
            RecruitmentStage::InterviewPlanned => CandidateStatus::Interview,
            RecruitmentStage::InterviewCompleted => CandidateStatus::Offer,
            RecruitmentStage::ClientWaiting => CandidateStatus::Waiting,
            RecruitmentStage::Recruited => CandidateStatus::Hired,
        }
    }
}

impl fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a raw stored status onto the pipeline.
///
/// Returns `None` only for `rejected`. Anything unrecognised lands in `Received`.
pub fn stage_for_status(raw: &str) -> Option<RecruitmentStage> {
    match CandidateStatus::parse(raw) {
        Some(status) => status.stage(),
        None => Some(RecruitmentStage::Received),
    }
}
