use model::project::{ProjectMember, ProjectRole};
use sqlx::PgPool;

/// One indexed lookup on (project, user); `None` means no membership.
#[tracing::instrument(skip(db))]
pub async fn get_member_role(
    db: &PgPool,
    project_id: &str,
    user_id: &str,
) -> anyhow::Result<Option<ProjectRole>> {
    let role = sqlx::query_scalar::<_, ProjectRole>(
        r#"
        SELECT role
        FROM project_members
        WHERE project_id = $1 AND user_id = $2
        "#,
    )
    .bind(project_id)
    .bind(user_id)
    .fetch_optional(db)
    .await?;

    Ok(role)
}

#[tracing::instrument(skip(db))]
pub async fn list_members(db: &PgPool, project_id: &str) -> anyhow::Result<Vec<ProjectMember>> {
    let members = sqlx::query_as::<_, ProjectMember>(
        r#"
        SELECT m.user_id, m.role, m.joined_at, u.name, u.email, u.image
        FROM project_members m
        JOIN users u ON u.id = m.user_id
        WHERE m.project_id = $1
        ORDER BY m.joined_at ASC
        "#,
    )
    .bind(project_id)
    .fetch_all(db)
    .await?;

    Ok(members)
}

#[tracing::instrument(skip(db))]
pub async fn add_member(
    db: &PgPool,
    project_id: &str,
    user_id: &str,
    role: ProjectRole,
) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO project_members (id, project_id, user_id, role)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(crate::new_id())
    .bind(project_id)
    .bind(user_id)
    .bind(role)
    .execute(db)
    .await?;

    Ok(())
}

#[tracing::instrument(skip(db))]
pub async fn update_member_role(
    db: &PgPool,
    project_id: &str,
    user_id: &str,
    role: ProjectRole,
) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        UPDATE project_members
        SET role = $3
        WHERE project_id = $1 AND user_id = $2
        "#,
    )
    .bind(project_id)
    .bind(user_id)
    .bind(role)
    .execute(db)
    .await?;

    Ok(())
}

#[tracing::instrument(skip(db))]
pub async fn remove_member(db: &PgPool, project_id: &str, user_id: &str) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        DELETE FROM project_members
        WHERE project_id = $1 AND user_id = $2
        "#,
    )
    .bind(project_id)
    .bind(user_id)
    .execute(db)
    .await?;

    Ok(())
}
