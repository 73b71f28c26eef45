use axum::{
    Router,
    routing::{delete, put},
};

use crate::api::context::ApiContext;

pub(in crate::api) mod create_milestone;
pub(in crate::api) mod delete_milestone;
pub(in crate::api) mod edit_milestone;
pub(in crate::api) mod get_milestones;

/// Routes addressing a milestone directly; listing and creation live under
/// the owning project in the projects router.
pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/:milestone_id", put(edit_milestone::edit_milestone_handler))
        .route(
            "/:milestone_id",
            delete(delete_milestone::delete_milestone_handler),
        )
}
