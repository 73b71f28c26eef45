use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The global role of a user account. Project-level roles live in
/// [`crate::project::ProjectRole`]; `Admin` bypasses all per-project checks.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, sqlx::Type, ToSchema)]
#[sqlx(type_name = "TEXT", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GlobalRole {
    User,
    Admin,
}

impl GlobalRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            GlobalRole::User => "USER",
            GlobalRole::Admin => "ADMIN",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub role: GlobalRole,
}

/// The authenticated caller, attached to the request by the session
/// middleware.
#[derive(Debug, Clone)]
pub struct UserContext {
    pub user_id: String,
    pub role: GlobalRole,
}

impl UserContext {
    pub fn is_admin(&self) -> bool {
        self.role == GlobalRole::Admin
    }
}

pub mod request {
    use super::*;

    /// Fields stay optional so missing values map to the localized
    /// `REGISTER_FIELDS_REQUIRED` error rather than a deserialize rejection.
    #[derive(Serialize, Deserialize, Debug, ToSchema)]
    #[serde(rename_all = "camelCase")]
    pub struct RegisterRequest {
        pub name: Option<String>,
        pub email: Option<String>,
        pub password: Option<String>,
    }

    #[derive(Serialize, Deserialize, Debug, ToSchema)]
    #[serde(rename_all = "camelCase")]
    pub struct LoginRequest {
        pub email: Option<String>,
        pub password: Option<String>,
    }

    /// Absent fields are left untouched.
    #[derive(Serialize, Deserialize, Debug, Default, ToSchema)]
    #[serde(rename_all = "camelCase")]
    pub struct UpdateUserRequest {
        pub name: Option<String>,
        pub image: Option<String>,
    }
}

pub mod response {
    use super::*;

    #[derive(Serialize, Deserialize, Debug, ToSchema)]
    #[serde(rename_all = "camelCase")]
    pub struct LoginResponse {
        /// Bearer session token for subsequent requests.
        pub token: String,
        pub user: User,
    }
}
