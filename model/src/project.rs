use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, sqlx::Type, ToSchema)]
#[sqlx(type_name = "TEXT", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    Planning,
    InProgress,
    OnHold,
    Completed,
    Cancelled,
}

/// The role a user holds within a single project. Unique per
/// (project, user); `Owner` and `Manager` can manage, `Member` can view.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, sqlx::Type, ToSchema)]
#[sqlx(type_name = "TEXT", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectRole {
    Owner,
    Manager,
    Member,
}

impl ProjectRole {
    pub fn can_manage(&self) -> bool {
        matches!(self, ProjectRole::Owner | ProjectRole::Manager)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectRole::Owner => "OWNER",
            ProjectRole::Manager => "MANAGER",
            ProjectRole::Member => "MEMBER",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "OWNER" => Some(ProjectRole::Owner),
            "MANAGER" => Some(ProjectRole::Manager),
            "MEMBER" => Some(ProjectRole::Member),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub budget: Option<i64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

/// A project as listed for the current caller, with that caller's own
/// project role attached (`ADMIN` for global admins, null for non-members
/// an admin can still see).
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    #[serde(flatten)]
    pub project: Project,
    pub my_role: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMember {
    pub user_id: String,
    pub role: ProjectRole,
    pub joined_at: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub image: Option<String>,
}

pub mod request {
    use super::*;

    /// `name` stays optional at the type level so a missing value maps to
    /// `PROJECT_NAME_REQUIRED` instead of a deserialize rejection.
    #[derive(Serialize, Deserialize, Debug, ToSchema)]
    #[serde(rename_all = "camelCase")]
    pub struct CreateProjectRequest {
        pub name: Option<String>,
        pub description: Option<String>,
        pub budget: Option<i64>,
        pub start_date: Option<NaiveDate>,
        pub end_date: Option<NaiveDate>,
    }

    /// Absent fields are left untouched.
    #[derive(Serialize, Deserialize, Debug, Default, ToSchema)]
    #[serde(rename_all = "camelCase")]
    pub struct UpdateProjectRequest {
        pub name: Option<String>,
        pub description: Option<String>,
        pub status: Option<ProjectStatus>,
        pub budget: Option<i64>,
        pub start_date: Option<NaiveDate>,
        pub end_date: Option<NaiveDate>,
    }

    /// `role` stays a plain string here so an unknown value maps to the
    /// `MEMBER_INVALID_ROLE` validation error instead of a deserialize
    /// rejection.
    #[derive(Serialize, Deserialize, Debug, ToSchema)]
    #[serde(rename_all = "camelCase")]
    pub struct AddMemberRequest {
        pub user_id: Option<String>,
        pub email: Option<String>,
        pub role: Option<String>,
    }

    #[derive(Serialize, Deserialize, Debug, ToSchema)]
    #[serde(rename_all = "camelCase")]
    pub struct UpdateMemberRequest {
        pub role: Option<String>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_owner_and_manager_can_manage() {
        assert!(ProjectRole::Owner.can_manage());
        assert!(ProjectRole::Manager.can_manage());
        assert!(!ProjectRole::Member.can_manage());
    }

    #[test]
    fn parse_rejects_unknown_roles() {
        assert_eq!(ProjectRole::parse("MANAGER"), Some(ProjectRole::Manager));
        assert_eq!(ProjectRole::parse("manager"), None);
        assert_eq!(ProjectRole::parse("SUPERVISOR"), None);
    }
}
