use model::project::{request::CreateProjectRequest, request::UpdateProjectRequest, Project};
use sqlx::PgPool;

/// Creates the project and its OWNER membership row in one transaction.
#[tracing::instrument(skip(db, req))]
pub async fn create_project(
    db: &PgPool,
    user_id: &str,
    name: &str,
    req: &CreateProjectRequest,
) -> anyhow::Result<String> {
    let project_id = crate::new_id();

    let mut tx = db.begin().await?;

    sqlx::query(
        r#"
        INSERT INTO projects (id, name, description, status, budget, start_date, end_date, created_by)
        VALUES ($1, $2, $3, 'PLANNING', $4, $5, $6, $7)
        "#,
    )
    .bind(&project_id)
    .bind(name)
    .bind(req.description.as_deref().map(str::trim))
    .bind(req.budget)
    .bind(req.start_date)
    .bind(req.end_date)
    .bind(user_id)
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO project_members (id, project_id, user_id, role)
        VALUES ($1, $2, $3, 'OWNER')
        "#,
    )
    .bind(crate::new_id())
    .bind(&project_id)
    .bind(user_id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(project_id)
}

#[derive(Debug, sqlx::FromRow)]
pub struct ProjectWithRole {
    #[sqlx(flatten)]
    pub project: Project,
    pub my_role: Option<String>,
}

/// Projects the caller belongs to, newest first, with their own role
/// attached.
#[tracing::instrument(skip(db))]
pub async fn list_projects_for_user(
    db: &PgPool,
    user_id: &str,
) -> anyhow::Result<Vec<ProjectWithRole>> {
    let projects = sqlx::query_as::<_, ProjectWithRole>(
        r#"
        SELECT p.id, p.name, p.description, p.status, p.budget,
               p.start_date, p.end_date, p.created_by, p.created_at,
               m.role AS my_role
        FROM projects p
        JOIN project_members m ON m.project_id = p.id AND m.user_id = $1
        ORDER BY p.created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;

    Ok(projects)
}

/// All projects (admin view); `my_role` still reflects any membership the
/// admin happens to hold.
#[tracing::instrument(skip(db))]
pub async fn list_all_projects(db: &PgPool, user_id: &str) -> anyhow::Result<Vec<ProjectWithRole>> {
    let projects = sqlx::query_as::<_, ProjectWithRole>(
        r#"
        SELECT p.id, p.name, p.description, p.status, p.budget,
               p.start_date, p.end_date, p.created_by, p.created_at,
               m.role AS my_role
        FROM projects p
        LEFT JOIN project_members m ON m.project_id = p.id AND m.user_id = $1
        ORDER BY p.created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;

    Ok(projects)
}

#[tracing::instrument(skip(db, req))]
pub async fn update_project(
    db: &PgPool,
    project_id: &str,
    req: &UpdateProjectRequest,
) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        UPDATE projects
        SET name = COALESCE($2, name),
            description = COALESCE($3, description),
            status = COALESCE($4, status),
            budget = COALESCE($5, budget),
            start_date = COALESCE($6, start_date),
            end_date = COALESCE($7, end_date),
            updated_at = now()
        WHERE id = $1
        "#,
    )
    .bind(project_id)
    .bind(req.name.as_deref())
    .bind(req.description.as_deref())
    .bind(req.status)
    .bind(req.budget)
    .bind(req.start_date)
    .bind(req.end_date)
    .execute(db)
    .await?;

    Ok(())
}

/// Cascades to members, tasks, milestones and documents via FK constraints.
#[tracing::instrument(skip(db))]
pub async fn delete_project(db: &PgPool, project_id: &str) -> anyhow::Result<()> {
    sqlx::query(r#"DELETE FROM projects WHERE id = $1"#)
        .bind(project_id)
        .execute(db)
        .await?;

    Ok(())
}
