//! Board projection: partitions candidates into one bucket per stage.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::candidate::CandidateRow;
use crate::pipeline::stage::{stage_for_status, RecruitmentStage};

/// Anything that sits in exactly one pipeline stage.
pub trait Staged {
    fn stage(&self) -> RecruitmentStage;
}

/// The ordered members of a single stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket<T> {
    pub stage: RecruitmentStage,
    pub members: Vec<T>,
}

/// Groups `candidates` by their current stage.
///
/// One bucket per entry of `stages`, in that order, even when empty. Members keep
/// their relative input order. A candidate whose stage is not requested is dropped;
/// a stage listed twice only fills its first bucket.
pub fn bucketize<T, I>(candidates: I, stages: &[RecruitmentStage]) -> Vec<Bucket<T>>
where
    T: Staged,
    I: IntoIterator<Item = T>,
{
    let mut buckets: Vec<Bucket<T>> = stages
        .iter()
        .map(|&stage| Bucket {
            stage,
            members: Vec::new(),
        })
        .collect();

    for candidate in candidates {
        let stage = candidate.stage();
        if let Some(bucket) = buckets.iter_mut().find(|b| b.stage == stage) {
            bucket.members.push(candidate);
        }
    }

    buckets
}

/// A candidate card as shown on the board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KanbanCandidate {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub stage: RecruitmentStage,
    pub company: Option<String>,
    pub date: DateTime<Utc>,
    pub assigned_to: Option<Uuid>,
    pub tags: Vec<String>,
}

impl KanbanCandidate {
    /// Projects a stored candidate onto the board. Rejected candidates have no card.
    pub fn from_row(row: &CandidateRow) -> Option<Self> {
        let stage = stage_for_status(&row.status)?;
        Some(Self {
            id: row.id,
            first_name: row.first_name.clone(),
            last_name: row.last_name.clone(),
            position: row.position.clone(),
            stage,
            company: None,
            date: row.updated_at,
            assigned_to: row.assigned_to,
            tags: row.tags.clone(),
        })
    }
}

impl Staged for KanbanCandidate {
    fn stage(&self) -> RecruitmentStage {
        self.stage
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardColumn {
    pub stage: RecruitmentStage,
    pub label: &'static str,
    pub count: usize,
    pub candidates: Vec<KanbanCandidate>,
}

/// Builds the five board columns from stored candidates, dropping rejected ones.
pub fn build_board(rows: &[CandidateRow]) -> Vec<BoardColumn> {
    let cards = rows.iter().filter_map(KanbanCandidate::from_row);
    bucketize(cards, &RecruitmentStage::ALL)
        .into_iter()
        .map(|bucket| BoardColumn {
            stage: bucket.stage,
            label: bucket.stage.label(),
            count: bucket.members.len(),
            candidates: bucket.members,
        })
        .collect()
}
