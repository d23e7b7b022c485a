use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::access::{office_scope, Role};
use crate::errors::AppError;
use crate::models::company::CompanyRow;

#[derive(Debug, Default, Deserialize)]
pub struct CompanyListQuery {
    pub role: Option<Role>,
    pub office_id: Option<Uuid>,
    pub industry: Option<String>,
    pub search: Option<String>,
}

impl CompanyListQuery {
    pub fn office_scope(&self) -> Result<Option<Uuid>, AppError> {
        office_scope(self.role, self.office_id)
    }

    pub fn filter(&self) -> CompanyFilter {
        CompanyFilter::parse(self.industry.as_deref(), self.search.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyFilter {
    pub industry: Option<String>,
    pub search: Option<String>,
}

impl CompanyFilter {
    pub fn parse(industry: Option<&str>, search: Option<&str>) -> Self {
        Self {
            industry: industry
                .map(str::trim)
                .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case("all"))
                .map(str::to_string),
            search: search
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_lowercase),
        }
    }

    pub fn matches(&self, company: &CompanyRow) -> bool {
        if let Some(industry) = &self.industry {
            if &company.industry != industry {
                return false;
            }
        }
        match &self.search {
            Some(term) => {
                company.name.to_lowercase().contains(term)
                    || company.industry.to_lowercase().contains(term)
                    || company.contact_person.to_lowercase().contains(term)
            }
            None => true,
        }
    }

    pub fn apply(&self, companies: Vec<CompanyRow>) -> Vec<CompanyRow> {
        companies.into_iter().filter(|c| self.matches(c)).collect()
    }
}

/// Unique industries in first-seen order.
pub fn distinct_industries(companies: &[CompanyRow]) -> Vec<String> {
    let mut industries: Vec<String> = Vec::new();
    for company in companies {
        if !industries.contains(&company.industry) {
            industries.push(company.industry.clone());
        }
    }
    industries
}

/// Headline numbers for the companies dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanySummary {
    pub total_companies: usize,
    pub open_positions: i64,
    /// Companies with at least one open position.
    pub active_clients: usize,
}

pub fn summarize(companies: &[CompanyRow]) -> CompanySummary {
    CompanySummary {
        total_companies: companies.len(),
        open_positions: companies.iter().map(|c| i64::from(c.open_positions)).sum(),
        active_clients: companies.iter().filter(|c| c.open_positions > 0).count(),
    }
}
