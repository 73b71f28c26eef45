use chrono::NaiveDate;
use model::milestone::{request::UpdateMilestoneRequest, Milestone};
use sqlx::PgPool;

#[tracing::instrument(skip(db))]
pub async fn list_milestones(db: &PgPool, project_id: &str) -> anyhow::Result<Vec<Milestone>> {
    let milestones = sqlx::query_as::<_, Milestone>(
        r#"
        SELECT id, title, description, status, due_date, created_at
        FROM milestones
        WHERE project_id = $1
        ORDER BY due_date ASC
        "#,
    )
    .bind(project_id)
    .fetch_all(db)
    .await?;

    Ok(milestones)
}

#[tracing::instrument(skip(db))]
pub async fn create_milestone(
    db: &PgPool,
    project_id: &str,
    title: &str,
    description: Option<&str>,
    due_date: NaiveDate,
) -> anyhow::Result<String> {
    let milestone_id = crate::new_id();

    sqlx::query(
        r#"
        INSERT INTO milestones (id, project_id, title, description, status, due_date)
        VALUES ($1, $2, $3, $4, 'PENDING', $5)
        "#,
    )
    .bind(&milestone_id)
    .bind(project_id)
    .bind(title)
    .bind(description)
    .bind(due_date)
    .execute(db)
    .await?;

    Ok(milestone_id)
}

#[tracing::instrument(skip(db))]
pub async fn get_milestone_project_id(
    db: &PgPool,
    milestone_id: &str,
) -> anyhow::Result<Option<String>> {
    let project_id =
        sqlx::query_scalar::<_, String>(r#"SELECT project_id FROM milestones WHERE id = $1"#)
            .bind(milestone_id)
            .fetch_optional(db)
            .await?;

    Ok(project_id)
}

#[tracing::instrument(skip(db, req))]
pub async fn update_milestone(
    db: &PgPool,
    milestone_id: &str,
    req: &UpdateMilestoneRequest,
) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        UPDATE milestones
        SET title = COALESCE($2, title),
            description = COALESCE($3, description),
            status = COALESCE($4, status),
            due_date = COALESCE($5, due_date)
        WHERE id = $1
        "#,
    )
    .bind(milestone_id)
    .bind(req.title.as_deref())
    .bind(req.description.as_deref())
    .bind(req.status)
    .bind(req.due_date)
    .execute(db)
    .await?;

    Ok(())
}

#[tracing::instrument(skip(db))]
pub async fn delete_milestone(db: &PgPool, milestone_id: &str) -> anyhow::Result<()> {
    sqlx::query(r#"DELETE FROM milestones WHERE id = $1"#)
        .bind(milestone_id)
        .execute(db)
        .await?;

    Ok(())
}
