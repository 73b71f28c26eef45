use axum::{
    Extension, Json,
    extract::{self, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use client_errors::{ApiError, ErrorCode};
use model::{
    transaction::{TransactionType, request::CreateTransactionRequest},
    user::UserContext,
};

use crate::api::{context::ApiContext, extractors::RequestLocale, util::error_response};

/// Amount, type, category and date are all required. Amounts get their sign
/// normalized from the type before they hit storage.
#[tracing::instrument(skip(ctx, user_context, req), fields(user_id=%user_context.user_id))]
pub async fn create_transaction_handler(
    State(ctx): State<ApiContext>,
    RequestLocale(locale): RequestLocale,
    Extension(user_context): Extension<UserContext>,
    extract::Json(req): extract::Json<CreateTransactionRequest>,
) -> Result<Response, Response> {
    let category = req.category.as_deref().map(str::trim).unwrap_or_default();
    let (amount, raw_type, date) = match (req.amount, req.transaction_type.as_deref(), req.date) {
        (Some(amount), Some(raw_type), Some(date)) if !category.is_empty() => {
            (amount, raw_type, date)
        }
        _ => {
            return Err(error_response(
                locale,
                ApiError::bad_request(ErrorCode::TransactionRequiredFields),
            ));
        }
    };

    let transaction_type = TransactionType::parse(raw_type).ok_or_else(|| {
        error_response(
            locale,
            ApiError::bad_request(ErrorCode::TransactionInvalidType),
        )
    })?;
    let amount = transaction_type.normalize_amount(amount);

    let transaction = db_client::transactions::create_transaction(
        &ctx.db,
        &user_context.user_id,
        amount,
        transaction_type,
        category,
        req.description.as_deref(),
        date,
        req.project_id.as_deref(),
    )
    .await
    .map_err(|e| error_response(locale, ApiError::Internal(e)))?;

    Ok((StatusCode::CREATED, Json(transaction)).into_response())
}
