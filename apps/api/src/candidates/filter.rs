//! Client-side style filtering for the candidate list and board views.

use serde::Deserialize;
use uuid::Uuid;

use crate::access::{office_scope, Role};
use crate::errors::AppError;
use crate::models::candidate::CandidateRow;

/// Query string accepted by the candidate list and the pipeline board.
#[derive(Debug, Default, Deserialize)]
pub struct CandidateListQuery {
    pub role: Option<Role>,
    pub office_id: Option<Uuid>,
    pub status: Option<String>,
    pub position: Option<String>,
    pub rating: Option<String>,
    pub search: Option<String>,
}

impl CandidateListQuery {
    pub fn office_scope(&self) -> Result<Option<Uuid>, AppError> {
        office_scope(self.role, self.office_id)
    }

    pub fn filter(&self) -> Result<CandidateFilter, AppError> {
        CandidateFilter::parse(
            self.status.as_deref(),
            self.position.as_deref(),
            self.rating.as_deref(),
            self.search.as_deref(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateFilter {
    pub status: Option<String>,
    pub position: Option<String>,
    pub rating: Option<i16>,
    /// Lower-cased search term.
    pub search: Option<String>,
}

impl CandidateFilter {
    /// Absent, empty, and `all` selections impose no constraint.
    pub fn parse(
        status: Option<&str>,
        position: Option<&str>,
        rating: Option<&str>,
        search: Option<&str>,
    ) -> Result<Self, AppError> {
        let rating = match selection(rating) {
            Some(raw) => Some(raw.parse::<i16>().map_err(|_| {
                AppError::Validation(format!("rating filter must be a number, got '{raw}'"))
            })?),
            None => None,
        };

        Ok(Self {
            status: selection(status).map(str::to_string),
            position: selection(position).map(str::to_string),
            rating,
            search: search
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_lowercase),
        })
    }

    pub fn matches(&self, candidate: &CandidateRow) -> bool {
        if let Some(status) = &self.status {
            if &candidate.status != status {
                return false;
            }
        }
        if let Some(position) = &self.position {
            if &candidate.position != position {
                return false;
            }
        }
        if let Some(rating) = self.rating {
            if candidate.rating != Some(rating) {
                return false;
            }
        }
        if let Some(term) = &self.search {
            let hit = candidate.full_name().to_lowercase().contains(term)
                || candidate.position.to_lowercase().contains(term)
                || candidate.email.to_lowercase().contains(term);
            if !hit {
                return false;
            }
        }
        true
    }

    pub fn apply(&self, candidates: Vec<CandidateRow>) -> Vec<CandidateRow> {
        candidates.into_iter().filter(|c| self.matches(c)).collect()
    }
}

fn selection(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case("all"))
}

/// Unique positions in first-seen order, for the position filter drop-down.
pub fn distinct_positions(candidates: &[CandidateRow]) -> Vec<String> {
    let mut positions: Vec<String> = Vec::new();
    for candidate in candidates {
        if !positions.contains(&candidate.position) {
            positions.push(candidate.position.clone());
        }
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn candidate(first: &str, last: &str, position: &str, status: &str, rating: Option<i16>) -> CandidateRow {
        let now = Utc::now();
        CandidateRow {
            id: Uuid::new_v4(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
            phone: String::new(),
            position: position.to_string(),
            status: status.to_string(),
            cv_url: None,
            tags: vec![],
            rating,
            assigned_to: None,
            office_id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
        }
    }

    fn sample() -> Vec<CandidateRow> {
        vec![
            candidate("Marie", "Curie", "Research Lead", "interview", Some(5)),
            candidate("Alan", "Turing", "Backend Engineer", "new", Some(4)),
            candidate("Grace", "Hopper", "Backend Engineer", "rejected", None),
            candidate("Linus", "Pauling", "Chemist", "hired", Some(4)),
        ]
    }

    fn names(rows: &[CandidateRow]) -> Vec<String> {
        rows.iter().map(|c| c.first_name.clone()).collect()
    }

    #[test]
    fn test_all_selections_are_ignored() {
        let filter = CandidateFilter::parse(Some("all"), Some("ALL"), Some("all"), Some("  ")).unwrap();
        assert_eq!(filter, CandidateFilter::default());
        assert_eq!(filter.apply(sample()).len(), 4);
    }

    #[test]
    fn test_list_view_keeps_rejected() {
        let filter = CandidateFilter::parse(Some("rejected"), None, None, None).unwrap();
        assert_eq!(names(&filter.apply(sample())), vec!["Grace"]);
    }

    #[test]
    fn test_position_and_rating_combine() {
        let filter =
            CandidateFilter::parse(None, Some("Backend Engineer"), Some("4"), None).unwrap();
        assert_eq!(names(&filter.apply(sample())), vec!["Alan"]);
    }

    #[test]
    fn test_unrated_candidate_never_matches_rating_filter() {
        let filter = CandidateFilter::parse(None, None, Some("0"), None).unwrap();
        assert!(filter.apply(sample()).is_empty());
    }

    #[test]
    fn test_non_numeric_rating_is_rejected() {
        let err = CandidateFilter::parse(None, None, Some("five"), None).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_search_covers_name_position_and_email() {
        let by_full_name = CandidateFilter::parse(None, None, None, Some("marie cur")).unwrap();
        assert_eq!(names(&by_full_name.apply(sample())), vec!["Marie"]);

        let by_position = CandidateFilter::parse(None, None, None, Some("CHEM")).unwrap();
        assert_eq!(names(&by_position.apply(sample())), vec!["Linus"]);

        let by_email = CandidateFilter::parse(None, None, None, Some("turing@")).unwrap();
        assert_eq!(names(&by_email.apply(sample())), vec!["Alan"]);
    }

    #[test]
    fn test_distinct_positions_first_seen_order() {
        assert_eq!(
            distinct_positions(&sample()),
            vec!["Research Lead", "Backend Engineer", "Chemist"]
        );
    }
}
