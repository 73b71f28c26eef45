use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::api::context::ApiContext;
use crate::api::{documents, members, milestones, tasks};

pub(in crate::api) mod create_project;
pub(in crate::api) mod delete_project;
pub(in crate::api) mod edit_project;
pub(in crate::api) mod get_projects;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/", get(get_projects::get_projects_handler))
        .route("/", post(create_project::create_project_handler))
        .route("/:project_id", put(edit_project::edit_project_handler))
        .route(
            "/:project_id",
            delete(delete_project::delete_project_handler),
        )
        .route(
            "/:project_id/members",
            get(members::get_members::get_members_handler)
                .post(members::add_member::add_member_handler),
        )
        .route(
            "/:project_id/members/:user_id",
            put(members::update_member::update_member_handler)
                .delete(members::remove_member::remove_member_handler),
        )
        .route(
            "/:project_id/tasks",
            get(tasks::get_tasks::get_tasks_handler).post(tasks::create_task::create_task_handler),
        )
        .route(
            "/:project_id/milestones",
            get(milestones::get_milestones::get_milestones_handler)
                .post(milestones::create_milestone::create_milestone_handler),
        )
        .route(
            "/:project_id/documents",
            get(documents::get_documents::get_documents_handler),
        )
        .route(
            "/:project_id/documents/upload-url",
            post(documents::create_upload_url::create_upload_url_handler),
        )
}
