use model::task::{request::CreateTaskRequest, request::UpdateTaskRequest, Task, TaskPriority};
use sqlx::PgPool;

#[tracing::instrument(skip(db))]
pub async fn list_tasks(db: &PgPool, project_id: &str) -> anyhow::Result<Vec<Task>> {
    let tasks = sqlx::query_as::<_, Task>(
        r#"
        SELECT id, title, description, status, priority, assigned_to, due_date, created_at
        FROM tasks
        WHERE project_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(project_id)
    .fetch_all(db)
    .await?;

    Ok(tasks)
}

#[tracing::instrument(skip(db, req))]
pub async fn create_task(
    db: &PgPool,
    project_id: &str,
    title: &str,
    req: &CreateTaskRequest,
) -> anyhow::Result<String> {
    let task_id = crate::new_id();

    sqlx::query(
        r#"
        INSERT INTO tasks (id, project_id, title, description, status, priority, assigned_to, due_date)
        VALUES ($1, $2, $3, $4, 'TODO', $5, $6, $7)
        "#,
    )
    .bind(&task_id)
    .bind(project_id)
    .bind(title)
    .bind(req.description.as_deref())
    .bind(req.priority.unwrap_or(TaskPriority::Medium))
    .bind(req.assigned_to.as_deref())
    .bind(req.due_date)
    .execute(db)
    .await?;

    Ok(task_id)
}

/// Used by the /tasks/:id routes to resolve the owning project for the
/// permission check.
#[tracing::instrument(skip(db))]
pub async fn get_task_project_id(db: &PgPool, task_id: &str) -> anyhow::Result<Option<String>> {
    let project_id =
        sqlx::query_scalar::<_, String>(r#"SELECT project_id FROM tasks WHERE id = $1"#)
            .bind(task_id)
            .fetch_optional(db)
            .await?;

    Ok(project_id)
}

#[tracing::instrument(skip(db, req))]
pub async fn update_task(db: &PgPool, task_id: &str, req: &UpdateTaskRequest) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        UPDATE tasks
        SET title = COALESCE($2, title),
            description = COALESCE($3, description),
            status = COALESCE($4, status),
            priority = COALESCE($5, priority),
            assigned_to = COALESCE($6, assigned_to),
            due_date = COALESCE($7, due_date)
        WHERE id = $1
        "#,
    )
    .bind(task_id)
    .bind(req.title.as_deref())
    .bind(req.description.as_deref())
    .bind(req.status)
    .bind(req.priority)
    .bind(req.assigned_to.as_deref())
    .bind(req.due_date)
    .execute(db)
    .await?;

    Ok(())
}

#[tracing::instrument(skip(db))]
pub async fn delete_task(db: &PgPool, task_id: &str) -> anyhow::Result<()> {
    sqlx::query(r#"DELETE FROM tasks WHERE id = $1"#)
        .bind(task_id)
        .execute(db)
        .await?;

    Ok(())
}
