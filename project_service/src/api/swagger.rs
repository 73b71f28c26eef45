use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

use model::{
    StringId,
    document::{
        Document, DocumentStatus, DocumentSummary,
        request::UploadUrlRequest,
        response::{
            EnqueueResponse, QueueTaskDescriptor, StorageLocation, UploadTarget, UploadUrlResponse,
        },
    },
    project::{Project, ProjectStatus, ProjectSummary, request::CreateProjectRequest},
    response::{ErrorBody, OkResponse},
    user::{
        GlobalRole, User,
        request::{LoginRequest, RegisterRequest},
        response::LoginResponse,
    },
};

use super::{auth_routes, documents, health, internal, projects};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[derive(OpenApi)]
#[openapi(
        modifiers(&SecurityAddon),
        paths(
            health::health_handler,

            auth_routes::register::register_handler,
            auth_routes::login::login_handler,

            projects::get_projects::get_projects_handler,
            projects::create_project::create_project_handler,

            documents::get_documents::get_documents_handler,
            documents::create_upload_url::create_upload_url_handler,
            documents::enqueue_document::enqueue_document_handler,
            documents::process_document::process_document_handler,
            internal::process_document::process_document_handler,
        ),
        components(
            schemas(
                ErrorBody,
                OkResponse,
                StringId,

                User,
                GlobalRole,
                RegisterRequest,
                LoginRequest,
                LoginResponse,

                Project,
                ProjectStatus,
                ProjectSummary,
                CreateProjectRequest,

                Document,
                DocumentStatus,
                DocumentSummary,
                UploadUrlRequest,
                UploadUrlResponse,
                UploadTarget,
                StorageLocation,
                EnqueueResponse,
                QueueTaskDescriptor,
            ),
        ),
        tags(
            (name = "project service", description = "Project, task and document management")
        )
    )]
pub struct ApiDoc;
