use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use client_errors::Locale;

/// The response locale resolved from the `Accept-Language` header. Korean
/// is the default; only the highest-priority tag is inspected.
#[derive(Debug, Clone, Copy)]
pub struct RequestLocale(pub Locale);

#[async_trait]
impl<S> FromRequestParts<S> for RequestLocale
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(RequestLocale(locale_from_headers(&parts.headers)))
    }
}

pub fn locale_from_headers(headers: &axum::http::HeaderMap) -> Locale {
    Locale::from_accept_language(
        headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, HeaderValue};

    #[test]
    fn english_tag_resolves_en_and_absence_resolves_ko() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT_LANGUAGE,
            HeaderValue::from_static("en-US,en;q=0.9"),
        );
        assert_eq!(locale_from_headers(&headers), Locale::En);

        assert_eq!(locale_from_headers(&HeaderMap::new()), Locale::Ko);
    }
}
