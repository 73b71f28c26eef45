use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, sqlx::Type, ToSchema)]
#[sqlx(type_name = "TEXT", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Review,
    Done,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, sqlx::Type, ToSchema)]
#[sqlx(type_name = "TEXT", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Urgent,
}

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub assigned_to: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

pub mod request {
    use super::*;

    #[derive(Serialize, Deserialize, Debug, ToSchema)]
    #[serde(rename_all = "camelCase")]
    pub struct CreateTaskRequest {
        pub title: Option<String>,
        pub description: Option<String>,
        pub priority: Option<TaskPriority>,
        pub assigned_to: Option<String>,
        pub due_date: Option<NaiveDate>,
    }

    /// Absent fields are left untouched.
    #[derive(Serialize, Deserialize, Debug, Default, ToSchema)]
    #[serde(rename_all = "camelCase")]
    pub struct UpdateTaskRequest {
        pub title: Option<String>,
        pub description: Option<String>,
        pub status: Option<TaskStatus>,
        pub priority: Option<TaskPriority>,
        pub assigned_to: Option<String>,
        pub due_date: Option<NaiveDate>,
    }
}
