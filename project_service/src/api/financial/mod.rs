use axum::{
    Router,
    routing::{get, post},
};

use crate::api::context::ApiContext;

pub(in crate::api) mod create_transaction;
pub(in crate::api) mod get_dashboard;
pub(in crate::api) mod get_transactions;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/transactions", get(get_transactions::get_transactions_handler))
        .route(
            "/transactions",
            post(create_transaction::create_transaction_handler),
        )
        .route("/dashboard", get(get_dashboard::get_dashboard_handler))
}
