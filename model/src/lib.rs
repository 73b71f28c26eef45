use serde::{Deserialize, Serialize};

pub mod document;
pub mod milestone;
pub mod project;
pub mod response;
pub mod task;
pub mod transaction;
pub mod user;

/// Simple struct to return a newly created row id
#[derive(Serialize, Deserialize, Debug, utoipa::ToSchema)]
pub struct StringId {
    pub id: String,
}
