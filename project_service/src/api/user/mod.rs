use axum::{
    Router,
    routing::{get, put},
};

use crate::api::context::ApiContext;

pub(in crate::api) mod get_user;
pub(in crate::api) mod update_user;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/", get(get_user::get_user_handler))
        .route("/", put(update_user::update_user_handler))
}
