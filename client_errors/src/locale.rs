use crate::ErrorCode;

/// Supported response locales. Korean is the default, matching the
/// product's primary audience.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum Locale {
    #[default]
    Ko,
    En,
}

impl Locale {
    /// Resolves the locale from an `Accept-Language` header value. Only the
    /// highest-priority tag is inspected; anything unrecognized falls back
    /// to Korean.
    pub fn from_accept_language(accept_language: Option<&str>) -> Self {
        let Some(value) = accept_language else {
            return Locale::Ko;
        };
        let first = match value.split(',').next() {
            Some(tag) => tag.trim().to_ascii_lowercase(),
            None => return Locale::Ko,
        };
        if first.starts_with("en") {
            Locale::En
        } else {
            Locale::Ko
        }
    }

    pub fn message(&self, code: ErrorCode) -> &'static str {
        match self {
            Locale::Ko => korean_message(code),
            Locale::En => english_message(code),
        }
    }
}

fn korean_message(code: ErrorCode) -> &'static str {
    use ErrorCode::*;
    match code {
        AuthRequired => "인증이 필요합니다.",
        Forbidden => "권한이 없습니다.",
        NotFound => "리소스를 찾을 수 없습니다.",
        BadRequest => "잘못된 요청입니다.",
        ServerError => "서버 오류가 발생했습니다.",
        InvalidJson => "요청 본문(JSON)이 올바르지 않습니다.",
        ProjectNameRequired => "프로젝트 이름은 필수입니다.",
        TaskTitleRequired => "제목은 필수입니다.",
        TransactionRequiredFields => "필수 항목을 모두 입력해주세요.",
        TransactionInvalidType => "거래 유형이 올바르지 않습니다.",
        MilestoneRequiredFields => "제목과 마감일은 필수입니다.",
        MemberRoleRequired => "role이 필요합니다.",
        MemberInvalidRole => "유효하지 않은 역할입니다.",
        MemberIdentifierRequired => "userId 또는 email이 필요합니다.",
        RegisterFieldsRequired => "모든 필드를 입력해주세요.",
        RegisterPasswordMin => "비밀번호는 최소 8자 이상이어야 합니다.",
        RegisterEmailInUse => "이미 사용 중인 이메일입니다.",
        DocumentFilenameRequired => "파일 이름은 필수입니다.",
        DocumentContentTypeRequired => "contentType은 필수입니다.",
        DocumentNotFound => "문서를 찾을 수 없습니다.",
        DocumentAlreadyProcessing => "이미 처리 중인 문서입니다.",
        DocumentProcessFailed => "문서 OCR 처리에 실패했습니다.",
    }
}

fn english_message(code: ErrorCode) -> &'static str {
    use ErrorCode::*;
    match code {
        AuthRequired => "Authentication required.",
        Forbidden => "You do not have permission.",
        NotFound => "Resource not found.",
        BadRequest => "Bad request.",
        ServerError => "An unexpected server error occurred.",
        InvalidJson => "Invalid JSON body.",
        ProjectNameRequired => "Project name is required.",
        TaskTitleRequired => "Title is required.",
        TransactionRequiredFields => "Please fill in all required fields.",
        TransactionInvalidType => "Transaction type is invalid.",
        MilestoneRequiredFields => "Title and due date are required.",
        MemberRoleRequired => "Role is required.",
        MemberInvalidRole => "Role is invalid.",
        MemberIdentifierRequired => "Either userId or email is required.",
        RegisterFieldsRequired => "Please fill in all fields.",
        RegisterPasswordMin => "Password must be at least 8 characters.",
        RegisterEmailInUse => "This email is already in use.",
        DocumentFilenameRequired => "Filename is required.",
        DocumentContentTypeRequired => "contentType is required.",
        DocumentNotFound => "Document not found.",
        DocumentAlreadyProcessing => "Document is already being processed.",
        DocumentProcessFailed => "Failed to process document OCR.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_highest_priority_tag() {
        assert_eq!(
            Locale::from_accept_language(Some("en-US,en;q=0.9,ko;q=0.8")),
            Locale::En
        );
        assert_eq!(
            Locale::from_accept_language(Some("ko-KR,ko;q=0.9")),
            Locale::Ko
        );
    }

    #[test]
    fn unknown_or_missing_falls_back_to_korean() {
        assert_eq!(Locale::from_accept_language(None), Locale::Ko);
        assert_eq!(Locale::from_accept_language(Some("")), Locale::Ko);
        assert_eq!(Locale::from_accept_language(Some("fr-FR")), Locale::Ko);
    }
}
