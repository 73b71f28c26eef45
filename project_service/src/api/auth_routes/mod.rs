use axum::{Router, routing::post};

use crate::api::context::ApiContext;

pub(in crate::api) mod login;
pub(in crate::api) mod register;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/register", post(register::register_handler))
        .route("/login", post(login::login_handler))
}
