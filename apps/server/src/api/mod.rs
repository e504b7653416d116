use std::sync::Arc;

use axum::{
    http::{header, HeaderName, HeaderValue},
    middleware,
    routing::get,
    Router,
};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::main_lib::AppState;

pub mod pages;
pub mod quotes;

pub fn app_router(state: Arc<AppState>) -> Router {
    let compat_header = SetResponseHeaderLayer::overriding(
        HeaderName::from_static("x-ua-compatible"),
        HeaderValue::from_static("IE=Edge,chrome=1"),
    );
    let cache_header =
        SetResponseHeaderLayer::overriding(header::CACHE_CONTROL, state.cache_control.clone());

    Router::new()
        .route("/", get(pages::home))
        .route("/about", get(pages::add_trailing_slash))
        .route("/about/", get(pages::about))
        .route("/quotes/monthly", get(pages::add_trailing_slash))
        .route("/quotes/monthly/", get(quotes::get_monthly_quotes))
        .route("/quotes/{ticker}", get(quotes::get_quote_history))
        .fallback(pages::fallback)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            pages::render_not_found,
        ))
        .with_state(state)
        // Outside the not-found rewrite so error pages get them too.
        .layer(compat_header)
        .layer(cache_header)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
}
