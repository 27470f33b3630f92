use askama::Template;
use axum::{
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};

/// Template wrapper that converts Askama templates into HTML responses.
pub struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Failed to render template");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template: {err}"),
                )
                    .into_response()
            }
        }
    }
}

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    active: &'static str,
}

#[derive(Template)]
#[template(path = "landing.html")]
struct LandingTemplate {
    active: &'static str,
}

#[derive(Template)]
#[template(path = "access_denied.html")]
struct AccessDeniedTemplate {
    active: &'static str,
}

#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundTemplate {
    active: &'static str,
    message: String,
}

/// Handler for the home page (GET /).
pub async fn home() -> impl IntoResponse {
    HtmlTemplate(HomeTemplate { active: "home" })
}

/// Handler for the landing page (GET /landing).
pub async fn landing() -> impl IntoResponse {
    HtmlTemplate(LandingTemplate { active: "landing" })
}

/// Handler for the access denied page (GET /access-denied).
pub async fn access_denied() -> impl IntoResponse {
    HtmlTemplate(AccessDeniedTemplate { active: "" })
}

/// Renders the not-found page with a 404 status.
pub fn not_found_page(message: impl Into<String>) -> Response {
    (
        StatusCode::NOT_FOUND,
        HtmlTemplate(NotFoundTemplate {
            active: "",
            message: message.into(),
        }),
    )
        .into_response()
}

/// Router fallback for unknown paths.
pub async fn not_found(uri: Uri) -> Response {
    tracing::debug!(path = %uri.path(), "No route matched");
    not_found_page(format!("Nothing lives at {}.", uri.path()))
}
