use axum::{
    Router,
    routing::{delete, put},
};

use crate::api::context::ApiContext;

pub(in crate::api) mod create_task;
pub(in crate::api) mod delete_task;
pub(in crate::api) mod edit_task;
pub(in crate::api) mod get_tasks;

/// Routes addressing a task directly; listing and creation live under the
/// owning project in the projects router.
pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/:task_id", put(edit_task::edit_task_handler))
        .route("/:task_id", delete(delete_task::delete_task_handler))
}
