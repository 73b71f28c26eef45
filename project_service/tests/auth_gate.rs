use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

use project_service::{
    api::{api_router, context::ApiContext},
    config::Config,
};

/// Builds the full router against a lazy pool and unconfigured AWS clients;
/// nothing here ever reaches the network, so only the middleware paths are
/// exercised.
async fn make_app(oidc_callback_audience: Option<&str>) -> Router {
    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new("us-east-1"))
        .load()
        .await;

    let config = Config {
        database_url: "postgres://127.0.0.1:1/unreachable".to_string(),
        port: 0,
        document_bucket: "documents".to_string(),
        document_process_queue: "http://127.0.0.1:1/queue".to_string(),
        session_jwt_secret: "session-secret".to_string(),
        oidc_callback_secret: "callback-secret".to_string(),
        oidc_callback_audience: oidc_callback_audience.map(str::to_string),
        presigned_url_expiry_seconds: 600,
        environment: project_service::config::Environment::Local,
    };

    let db = PgPoolOptions::new()
        .connect_lazy(&config.database_url)
        .expect("lazy pool");

    api_router(ApiContext {
        db,
        s3_client: Arc::new(s3_client::S3::new(
            aws_sdk_s3::Client::new(&aws_config),
            &config.document_bucket,
        )),
        sqs_client: Arc::new(sqs_client::SQS::new(aws_sdk_sqs::Client::new(&aws_config))),
        textract_client: Arc::new(textract_client::Textract::new(aws_sdk_textract::Client::new(
            &aws_config,
        ))),
        config: Arc::new(config),
    })
}

async fn body_json(res: axum::response::Response) -> serde_json::Value {
    let body = res.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn projects_require_a_session_token() {
    let res = make_app(None)
        .await
        .oneshot(
            Request::builder()
                .uri("/projects")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(res).await;
    assert_eq!(body["error"], "인증이 필요합니다.");
    assert_eq!(body["code"], "AUTH_REQUIRED");
}

#[tokio::test]
async fn error_message_follows_accept_language() {
    let res = make_app(None)
        .await
        .oneshot(
            Request::builder()
                .uri("/projects")
                .header("accept-language", "en-US,en;q=0.9")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(res).await;
    assert_eq!(body["error"], "Authentication required.");
    assert_eq!(body["code"], "AUTH_REQUIRED");
}

#[tokio::test]
async fn garbage_session_token_is_rejected() {
    let res = make_app(None)
        .await
        .oneshot(
            Request::builder()
                .uri("/projects")
                .header("authorization", "Bearer not.a.jwt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn internal_processor_requires_a_bearer_token() {
    let res = make_app(Some("project-service"))
        .await
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/internal/documents/doc-1/process")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(res).await;
    assert_eq!(body["code"], "AUTH_REQUIRED");
}

#[tokio::test]
async fn internal_processor_fails_closed_without_an_audience() {
    // A token that would verify fine if the audience were configured.
    let token =
        auth::callback::encode_callback_token("callback-secret", "worker@local", "project-service")
            .unwrap();

    let res = make_app(None)
        .await
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/internal/documents/doc-1/process")
                .header("authorization", format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn internal_processor_rejects_a_wrong_audience() {
    let token =
        auth::callback::encode_callback_token("callback-secret", "worker@local", "someone-else")
            .unwrap();

    let res = make_app(Some("project-service"))
        .await
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/internal/documents/doc-1/process")
                .header("authorization", format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn valid_session_token_passes_the_gate() {
    // The lazy pool is unreachable, so an authenticated request surfaces a
    // 500 from the handler rather than a 401 from the middleware.
    let token =
        auth::session::encode_session_token("session-secret", "user-1", "u@example.com", "USER")
            .unwrap();

    let res = make_app(None)
        .await
        .oneshot(
            Request::builder()
                .uri("/projects")
                .header("authorization", format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
