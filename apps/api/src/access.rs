//! Advisory office scoping. The caller states who they are; nothing here is enforced
//! beyond choosing which office's records a list query returns.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Admin,
    Employee,
}

/// Caller identity as passed on the query string.
#[derive(Debug, Default, Deserialize)]
pub struct ScopeQuery {
    pub role: Option<Role>,
    pub office_id: Option<Uuid>,
}

impl ScopeQuery {
    pub fn office_scope(&self) -> Result<Option<Uuid>, AppError> {
        office_scope(self.role, self.office_id)
    }
}

/// Which office a list query is restricted to. `None` means every office.
///
/// Super admins always see everything. Other roles must name their office. An
/// anonymous caller that names no office is unscoped.
pub fn office_scope(role: Option<Role>, office_id: Option<Uuid>) -> Result<Option<Uuid>, AppError> {
    match (role, office_id) {
        (Some(Role::SuperAdmin), _) => Ok(None),
        (Some(role), None) => Err(AppError::Validation(format!(
            "office_id is required for role {}",
            role.as_str()
        ))),
        (_, office) => Ok(office),
    }
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::Admin => "admin",
            Role::Employee => "employee",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_super_admin_sees_all_offices() {
        let office = Uuid::new_v4();
        assert_eq!(office_scope(Some(Role::SuperAdmin), Some(office)).unwrap(), None);
        assert_eq!(office_scope(Some(Role::SuperAdmin), None).unwrap(), None);
    }

    #[test]
    fn test_employee_is_scoped_to_own_office() {
        let office = Uuid::new_v4();
        assert_eq!(office_scope(Some(Role::Employee), Some(office)).unwrap(), Some(office));
        assert_eq!(office_scope(Some(Role::Admin), Some(office)).unwrap(), Some(office));
    }

    #[test]
    fn test_scoped_role_without_office_is_rejected() {
        let err = office_scope(Some(Role::Admin), None).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("admin")));
    }

    #[test]
    fn test_anonymous_caller() {
        assert_eq!(office_scope(None, None).unwrap(), None);
        let office = Uuid::new_v4();
        assert_eq!(office_scope(None, Some(office)).unwrap(), Some(office));
    }
}
