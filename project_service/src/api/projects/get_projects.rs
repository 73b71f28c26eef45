use axum::{
    Extension, Json,
    extract::State,
    response::{IntoResponse, Response},
};
use client_errors::ApiError;
use db_client::projects::ProjectWithRole;
use model::{project::ProjectSummary, response::ErrorBody, user::UserContext};

use crate::api::{context::ApiContext, extractors::RequestLocale, util::error_response};

/// Lists the caller's projects with their own role attached; global admins
/// see every project.
#[utoipa::path(
        get,
        path = "/projects",
        responses(
            (status = 200, body = Vec<ProjectSummary>),
            (status = 401, body = ErrorBody),
            (status = 500, body = ErrorBody),
        )
    )]
#[tracing::instrument(skip(ctx, user_context), fields(user_id=%user_context.user_id))]
pub async fn get_projects_handler(
    State(ctx): State<ApiContext>,
    RequestLocale(locale): RequestLocale,
    Extension(user_context): Extension<UserContext>,
) -> Result<Response, Response> {
    let is_admin = user_context.is_admin();
    let rows = if is_admin {
        db_client::projects::list_all_projects(&ctx.db, &user_context.user_id).await
    } else {
        db_client::projects::list_projects_for_user(&ctx.db, &user_context.user_id).await
    }
    .map_err(|e| error_response(locale, ApiError::Internal(e)))?;

    Ok(Json(summarize(rows, is_admin)).into_response())
}

/// Global admins report `ADMIN` on every project, regardless of any
/// membership row they happen to hold.
fn summarize(rows: Vec<ProjectWithRole>, is_admin: bool) -> Vec<ProjectSummary> {
    rows.into_iter()
        .map(|row| ProjectSummary {
            my_role: if is_admin {
                Some("ADMIN".to_string())
            } else {
                row.my_role
            },
            project: row.project,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use model::project::{Project, ProjectStatus};

    fn row(my_role: Option<&str>) -> ProjectWithRole {
        ProjectWithRole {
            project: Project {
                id: "proj-1".to_string(),
                name: "Website".to_string(),
                description: None,
                status: ProjectStatus::Planning,
                budget: None,
                start_date: None,
                end_date: None,
                created_by: "user-1".to_string(),
                created_at: Utc::now(),
            },
            my_role: my_role.map(str::to_string),
        }
    }

    #[test]
    fn admins_see_admin_on_every_project() {
        let summaries = summarize(vec![row(Some("MEMBER")), row(None)], true);
        assert!(
            summaries
                .iter()
                .all(|s| s.my_role.as_deref() == Some("ADMIN"))
        );
    }

    #[test]
    fn non_admins_keep_their_membership_role() {
        let summaries = summarize(vec![row(Some("OWNER"))], false);
        assert_eq!(summaries[0].my_role.as_deref(), Some("OWNER"));
    }
}
