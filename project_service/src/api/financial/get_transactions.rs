use axum::{
    Extension, Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use client_errors::{ApiError, ErrorCode};
use model::{
    transaction::{Pagination, TransactionType, response::TransactionListResponse},
    user::UserContext,
};
use serde::Deserialize;

use crate::api::{context::ApiContext, extractors::RequestLocale, util::error_response};

#[derive(Deserialize, Debug)]
pub struct TransactionListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    pub category: Option<String>,
}

#[tracing::instrument(skip(ctx, user_context), fields(user_id=%user_context.user_id))]
pub async fn get_transactions_handler(
    State(ctx): State<ApiContext>,
    RequestLocale(locale): RequestLocale,
    Extension(user_context): Extension<UserContext>,
    Query(query): Query<TransactionListQuery>,
) -> Result<Response, Response> {
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(10).clamp(1, 100);

    let transaction_type = match query.transaction_type.as_deref() {
        None => None,
        Some(raw) => Some(TransactionType::parse(raw).ok_or_else(|| {
            error_response(
                locale,
                ApiError::bad_request(ErrorCode::TransactionInvalidType),
            )
        })?),
    };

    let (transactions, total) = db_client::transactions::list_transactions(
        &ctx.db,
        page,
        limit,
        transaction_type,
        query.category.as_deref(),
    )
    .await
    .map_err(|e| error_response(locale, ApiError::Internal(e)))?;

    let pages = if total == 0 { 0 } else { (total + limit - 1) / limit };

    Ok(Json(TransactionListResponse {
        transactions,
        pagination: Pagination {
            page,
            limit,
            total,
            pages,
        },
    })
    .into_response())
}
