use model::user::{GlobalRole, User};
use sqlx::PgPool;

/// A user row including the bcrypt hash; only the login path should see
/// this shape.
#[derive(Debug, sqlx::FromRow)]
pub struct UserWithPassword {
    pub id: String,
    pub email: String,
    pub name: String,
    pub image: Option<String>,
    pub role: GlobalRole,
    pub password_hash: String,
}

#[tracing::instrument(skip(db))]
pub async fn get_user(db: &PgPool, user_id: &str) -> anyhow::Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, name, image, role
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await?;

    Ok(user)
}

#[tracing::instrument(skip(db))]
pub async fn get_user_by_email(
    db: &PgPool,
    email: &str,
) -> anyhow::Result<Option<UserWithPassword>> {
    let user = sqlx::query_as::<_, UserWithPassword>(
        r#"
        SELECT id, email, name, image, role, password_hash
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(db)
    .await?;

    Ok(user)
}

#[tracing::instrument(skip(db))]
pub async fn email_exists(db: &PgPool, email: &str) -> anyhow::Result<bool> {
    let exists = sqlx::query_scalar::<_, bool>(
        r#"SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)"#,
    )
    .bind(email)
    .fetch_one(db)
    .await?;

    Ok(exists)
}

#[tracing::instrument(skip(db, password_hash))]
pub async fn create_user(
    db: &PgPool,
    name: &str,
    email: &str,
    password_hash: &str,
) -> anyhow::Result<User> {
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, name, email, password_hash, role)
        VALUES ($1, $2, $3, $4, 'USER')
        RETURNING id, email, name, image, role
        "#,
    )
    .bind(crate::new_id())
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .fetch_one(db)
    .await?;

    Ok(user)
}

/// Partial profile update; absent fields are left untouched.
#[tracing::instrument(skip(db))]
pub async fn update_user(
    db: &PgPool,
    user_id: &str,
    name: Option<&str>,
    image: Option<&str>,
) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        UPDATE users
        SET name = COALESCE($2, name),
            image = COALESCE($3, image)
        WHERE id = $1
        "#,
    )
    .bind(user_id)
    .bind(name)
    .bind(image)
    .execute(db)
    .await?;

    Ok(())
}
