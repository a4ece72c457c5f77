//! Flash notifications carried on redirects.
//!
//! Form posts answer with `303 See Other`; the target URL carries
//! `?flash=<level>&message=<code>` so the page being redirected to can
//! show the outcome. Codes are fixed snake_case identifiers, so no URL
//! encoding is needed.

use axum::response::Redirect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Error,
}

impl FlashLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            FlashLevel::Success => "success",
            FlashLevel::Error => "error",
        }
    }
}

/// Build the redirect target for `path` with a flash attached.
pub fn flash_url(path: &str, level: FlashLevel, message: &str) -> String {
    format!("{path}?flash={}&message={message}", level.as_str())
}

/// Redirect to `path` with a success notification.
pub fn success(path: &str, message: &str) -> Redirect {
    Redirect::to(&flash_url(path, FlashLevel::Success, message))
}

/// Redirect to `path` with an error notification.
pub fn error(path: &str, message: &str) -> Redirect {
    Redirect::to(&flash_url(path, FlashLevel::Error, message))
}

#[cfg(test)]
mod tests {
    use axum::http::{header, StatusCode};
    use axum::response::IntoResponse;

    use super::*;

    #[test]
    fn flash_url_appends_level_and_code() {
        assert_eq!(
            flash_url("/admin/projects", FlashLevel::Success, "project_added"),
            "/admin/projects?flash=success&message=project_added"
        );
    }

    #[test]
    fn error_redirect_is_see_other() {
        let response = error("/", "contact_failed").into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers()[header::LOCATION],
            "/?flash=error&message=contact_failed"
        );
    }
}
