use chrono::NaiveDate;
use model::transaction::{Transaction, TransactionType};
use sqlx::PgPool;

const TRANSACTION_COLUMNS: &str = r#"
    t.id, t.amount, t.type, t.category, t.description, t.date,
    t.created_by, t.project_id, p.name AS project_name, t.created_at
"#;

#[tracing::instrument(skip(db))]
pub async fn create_transaction(
    db: &PgPool,
    user_id: &str,
    amount: i64,
    transaction_type: TransactionType,
    category: &str,
    description: Option<&str>,
    date: NaiveDate,
    project_id: Option<&str>,
) -> anyhow::Result<Transaction> {
    let transaction_id = crate::new_id();

    sqlx::query(
        r#"
        INSERT INTO transactions (id, amount, type, category, description, date, created_by, project_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(&transaction_id)
    .bind(amount)
    .bind(transaction_type)
    .bind(category)
    .bind(description)
    .bind(date)
    .bind(user_id)
    .bind(project_id)
    .execute(db)
    .await?;

    let transaction = sqlx::query_as::<_, Transaction>(&format!(
        r#"
        SELECT {TRANSACTION_COLUMNS}
        FROM transactions t
        LEFT JOIN projects p ON p.id = t.project_id
        WHERE t.id = $1
        "#
    ))
    .bind(&transaction_id)
    .fetch_one(db)
    .await?;

    Ok(transaction)
}

/// Paginated listing with optional type/category filters; also returns the
/// filtered total for the pagination block.
#[tracing::instrument(skip(db))]
pub async fn list_transactions(
    db: &PgPool,
    page: i64,
    limit: i64,
    transaction_type: Option<TransactionType>,
    category: Option<&str>,
) -> anyhow::Result<(Vec<Transaction>, i64)> {
    let offset = (page - 1) * limit;

    let transactions = sqlx::query_as::<_, Transaction>(&format!(
        r#"
        SELECT {TRANSACTION_COLUMNS}
        FROM transactions t
        LEFT JOIN projects p ON p.id = t.project_id
        WHERE ($1::TEXT IS NULL OR t.type = $1)
          AND ($2::TEXT IS NULL OR t.category = $2)
        ORDER BY t.date DESC
        LIMIT $3 OFFSET $4
        "#
    ))
    .bind(transaction_type)
    .bind(category)
    .bind(limit)
    .bind(offset)
    .fetch_all(db)
    .await?;

    let total = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM transactions t
        WHERE ($1::TEXT IS NULL OR t.type = $1)
          AND ($2::TEXT IS NULL OR t.category = $2)
        "#,
    )
    .bind(transaction_type)
    .bind(category)
    .fetch_one(db)
    .await?;

    Ok((transactions, total))
}

#[tracing::instrument(skip(db))]
pub async fn recent_transactions(db: &PgPool, limit: i64) -> anyhow::Result<Vec<Transaction>> {
    let transactions = sqlx::query_as::<_, Transaction>(&format!(
        r#"
        SELECT {TRANSACTION_COLUMNS}
        FROM transactions t
        LEFT JOIN projects p ON p.id = t.project_id
        ORDER BY t.date DESC
        LIMIT $1
        "#
    ))
    .bind(limit)
    .fetch_all(db)
    .await?;

    Ok(transactions)
}

/// Signed totals per type. Expenses come back negative because they are
/// stored negative.
#[tracing::instrument(skip(db))]
pub async fn totals_by_type(db: &PgPool) -> anyhow::Result<(i64, i64)> {
    #[derive(sqlx::FromRow)]
    struct Totals {
        total_income: i64,
        total_expense: i64,
    }

    let totals = sqlx::query_as::<_, Totals>(
        r#"
        SELECT
            COALESCE(SUM(amount) FILTER (WHERE type = 'INCOME'), 0)::BIGINT AS total_income,
            COALESCE(SUM(amount) FILTER (WHERE type = 'EXPENSE'), 0)::BIGINT AS total_expense
        FROM transactions
        "#,
    )
    .fetch_one(db)
    .await?;

    Ok((totals.total_income, totals.total_expense))
}
