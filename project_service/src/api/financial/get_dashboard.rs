use axum::{
    Extension, Json,
    extract::State,
    response::{IntoResponse, Response},
};
use client_errors::ApiError;
use model::{
    transaction::{FinancialSummary, response::DashboardResponse},
    user::UserContext,
};

use crate::api::{context::ApiContext, extractors::RequestLocale, util::error_response};

const RECENT_TRANSACTION_COUNT: i64 = 5;

#[tracing::instrument(skip(ctx, user_context), fields(user_id=%user_context.user_id))]
pub async fn get_dashboard_handler(
    State(ctx): State<ApiContext>,
    RequestLocale(locale): RequestLocale,
    Extension(user_context): Extension<UserContext>,
) -> Result<Response, Response> {
    let recent_transactions =
        db_client::transactions::recent_transactions(&ctx.db, RECENT_TRANSACTION_COUNT)
            .await
            .map_err(|e| error_response(locale, ApiError::Internal(e)))?;

    let (total_income, signed_expense) = db_client::transactions::totals_by_type(&ctx.db)
        .await
        .map_err(|e| error_response(locale, ApiError::Internal(e)))?;

    // Expenses are stored negative; report the magnitude and keep the sign
    // for the net figure.
    let summary = FinancialSummary {
        total_income,
        total_expense: -signed_expense,
        net_profit: total_income + signed_expense,
    };

    Ok(Json(DashboardResponse {
        recent_transactions,
        summary,
    })
    .into_response())
}
