//! The tagged error type every API handler maps to at the boundary, plus
//! the ko/en localization table for its messages.

pub mod locale;

pub use locale::Locale;

/// Machine-readable error codes surfaced in the `code` field of error
/// bodies and used as localization keys.
#[derive(Debug, Clone, Copy, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    AuthRequired,
    Forbidden,
    NotFound,
    BadRequest,
    ServerError,
    InvalidJson,
    ProjectNameRequired,
    TaskTitleRequired,
    TransactionRequiredFields,
    TransactionInvalidType,
    MilestoneRequiredFields,
    MemberRoleRequired,
    MemberInvalidRole,
    MemberIdentifierRequired,
    RegisterFieldsRequired,
    RegisterPasswordMin,
    RegisterEmailInUse,
    DocumentFilenameRequired,
    DocumentContentTypeRequired,
    DocumentNotFound,
    DocumentAlreadyProcessing,
    DocumentProcessFailed,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        use ErrorCode::*;
        match self {
            AuthRequired => "AUTH_REQUIRED",
            Forbidden => "FORBIDDEN",
            NotFound => "NOT_FOUND",
            BadRequest => "BAD_REQUEST",
            ServerError => "SERVER_ERROR",
            InvalidJson => "INVALID_JSON",
            ProjectNameRequired => "PROJECT_NAME_REQUIRED",
            TaskTitleRequired => "TASK_TITLE_REQUIRED",
            TransactionRequiredFields => "TRANSACTION_REQUIRED_FIELDS",
            TransactionInvalidType => "TRANSACTION_INVALID_TYPE",
            MilestoneRequiredFields => "MILESTONE_REQUIRED_FIELDS",
            MemberRoleRequired => "MEMBER_ROLE_REQUIRED",
            MemberInvalidRole => "MEMBER_INVALID_ROLE",
            MemberIdentifierRequired => "MEMBER_IDENTIFIER_REQUIRED",
            RegisterFieldsRequired => "REGISTER_FIELDS_REQUIRED",
            RegisterPasswordMin => "REGISTER_PASSWORD_MIN",
            RegisterEmailInUse => "REGISTER_EMAIL_IN_USE",
            DocumentFilenameRequired => "DOCUMENT_FILENAME_REQUIRED",
            DocumentContentTypeRequired => "DOCUMENT_CONTENT_TYPE_REQUIRED",
            DocumentNotFound => "DOCUMENT_NOT_FOUND",
            DocumentAlreadyProcessing => "DOCUMENT_ALREADY_PROCESSING",
            DocumentProcessFailed => "DOCUMENT_PROCESS_FAILED",
        }
    }
}

/// The error type handlers convert to at the boundary. Carries enough to
/// derive the HTTP status, the machine code, and the localized message.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("authentication required")]
    Unauthorized,
    #[error("permission denied")]
    Forbidden,
    #[error("not found: {code:?}")]
    NotFound { code: ErrorCode },
    #[error("validation failed: {code:?}")]
    Validation { code: ErrorCode },
    #[error("conflict: {code:?}")]
    Conflict { code: ErrorCode },
    /// A 500 that still carries a machine code, e.g. an OCR failure.
    #[error("operation failed: {code:?}")]
    Failed { code: ErrorCode },
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn not_found(code: ErrorCode) -> Self {
        ApiError::NotFound { code }
    }

    pub fn bad_request(code: ErrorCode) -> Self {
        ApiError::Validation { code }
    }

    pub fn conflict(code: ErrorCode) -> Self {
        ApiError::Conflict { code }
    }

    pub fn failed(code: ErrorCode) -> Self {
        ApiError::Failed { code }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Unauthorized => 401,
            ApiError::Forbidden => 403,
            ApiError::NotFound { .. } => 404,
            ApiError::Validation { .. } => 400,
            ApiError::Conflict { .. } => 409,
            ApiError::Failed { .. } => 500,
            ApiError::Internal(_) => 500,
        }
    }

    /// The machine code for the error body; generic 500s carry none.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            ApiError::Unauthorized => Some(ErrorCode::AuthRequired),
            ApiError::Forbidden => Some(ErrorCode::Forbidden),
            ApiError::NotFound { code }
            | ApiError::Validation { code }
            | ApiError::Conflict { code }
            | ApiError::Failed { code } => Some(*code),
            ApiError::Internal(_) => None,
        }
    }

    pub fn localized_message(&self, locale: Locale) -> &'static str {
        match self.code() {
            Some(code) => locale.message(code),
            None => locale.message(ErrorCode::ServerError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_and_code_mapping() {
        let err = ApiError::bad_request(ErrorCode::DocumentFilenameRequired);
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.code(), Some(ErrorCode::DocumentFilenameRequired));

        let err = ApiError::Internal(anyhow::anyhow!("boom"));
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.code(), None);
    }

    #[test]
    fn forbidden_localizes_per_locale() {
        let err = ApiError::Forbidden;
        assert_eq!(err.localized_message(Locale::Ko), "권한이 없습니다.");
        assert_eq!(
            err.localized_message(Locale::En),
            "You do not have permission."
        );
    }
}
