use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, StatusCode, Uri},
    middleware::Next,
    response::{Html, IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    NotFound,
}

impl Page {
    pub fn template(self) -> &'static str {
        match self {
            Page::Home => "home.html",
            Page::About => "about.html",
            Page::NotFound => "404.html",
        }
    }
}

/// Render a page template. Templates carry no request data.
pub async fn render(state: &AppState, page: Page) -> ApiResult<Html<String>> {
    let path = state.template_dir.join(page.template());
    let html = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| ApiError::Internal(format!("Failed to render {}: {}", path.display(), e)))?;
    Ok(Html(html))
}

pub async fn home(State(state): State<Arc<AppState>>) -> ApiResult<Html<String>> {
    render(&state, Page::Home).await
}

pub async fn about(State(state): State<Arc<AppState>>) -> ApiResult<Html<String>> {
    render(&state, Page::About).await
}

/// Permanent redirect from `/route` to `/route/`, keeping the query.
pub async fn add_trailing_slash(uri: Uri) -> Response {
    let location = match uri.query() {
        Some(query) => format!("{}/?{}", uri.path(), query),
        None => format!("{}/", uri.path()),
    };
    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response()
}

/// Handles every path no route claims: `/<name>.txt` files, otherwise 404.
pub async fn fallback(State(state): State<Arc<AppState>>, request: Request) -> Response {
    if text_file_name(request.uri().path()).is_some() {
        return ServeDir::new(&state.static_dir)
            .oneshot(request)
            .await
            .map(IntoResponse::into_response)
            .unwrap_or_else(|never| match never {});
    }

    ApiError::NotFound.into_response()
}

/// Replace the body of any 404 with the rendered not-found page.
pub async fn render_not_found(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    if response.status() != StatusCode::NOT_FOUND {
        return response;
    }

    match render(&state, Page::NotFound).await {
        Ok(html) => (StatusCode::NOT_FOUND, html).into_response(),
        Err(e) => {
            tracing::error!("{}", e);
            response
        }
    }
}

/// `/robots.txt` -> `robots.txt`. Only single-segment paths qualify.
fn text_file_name(path: &str) -> Option<&str> {
    let name = path.strip_prefix('/')?;
    if name.contains('/') {
        return None;
    }
    match name.strip_suffix(".txt") {
        Some(stem) if !stem.is_empty() => Some(name),
        _ => None,
    }
}
