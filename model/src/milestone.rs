use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, sqlx::Type, ToSchema)]
#[sqlx(type_name = "TEXT", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MilestoneStatus {
    Pending,
    Completed,
    Overdue,
}

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: MilestoneStatus,
    pub due_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

pub mod request {
    use super::*;

    #[derive(Serialize, Deserialize, Debug, ToSchema)]
    #[serde(rename_all = "camelCase")]
    pub struct CreateMilestoneRequest {
        pub title: Option<String>,
        pub description: Option<String>,
        pub due_date: Option<NaiveDate>,
    }

    #[derive(Serialize, Deserialize, Debug, Default, ToSchema)]
    #[serde(rename_all = "camelCase")]
    pub struct UpdateMilestoneRequest {
        pub title: Option<String>,
        pub description: Option<String>,
        pub status: Option<MilestoneStatus>,
        pub due_date: Option<NaiveDate>,
    }
}
