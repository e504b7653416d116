use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use futures::future::try_join_all;
use homepage_market_data::{Frequency, Ticker};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{MonthlyQuotes, QuoteHistory},
};

/// First `s` value, e.g. `vfinx,vbmfx`. Later repeats are ignored.
fn symbols_param(params: &[(String, String)]) -> &str {
    params
        .iter()
        .find(|(key, _)| key == "s")
        .map(|(_, value)| value.as_str())
        .unwrap_or("")
}

/// `GET /quotes/monthly/?s=T1,T2`
///
/// Fails with 404 as soon as any ticker cannot be fetched; partial
/// results are never returned.
pub async fn get_monthly_quotes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> ApiResult<Response> {
    let tickers = Ticker::parse_list(symbols_param(&params));
    tracing::debug!(
        "Fetching monthly quotes for {:?} from {}",
        tickers,
        state.quote_source.id()
    );

    let source = state.quote_source.as_ref();
    let series = try_join_all(
        tickers
            .iter()
            .map(|ticker| source.fetch_series(ticker, Frequency::Monthly)),
    )
    .await?;

    let quotes: Vec<MonthlyQuotes> = tickers
        .into_iter()
        .zip(series)
        .map(|(ticker, series)| MonthlyQuotes::from_feed(ticker, series))
        .collect();

    let body = serde_json::to_string_pretty(&quotes)
        .map_err(|e| ApiError::Internal(format!("Failed to serialize quotes: {}", e)))?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// `GET /quotes/{ticker}`: full daily history for one ticker.
pub async fn get_quote_history(
    State(state): State<Arc<AppState>>,
    Path(ticker): Path<String>,
) -> ApiResult<Json<QuoteHistory>> {
    let ticker = Ticker::new(&ticker);
    let series = state
        .quote_source
        .fetch_series(&ticker, Frequency::Daily)
        .await?;
    Ok(Json(QuoteHistory::from(series)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn symbols_param_takes_first_value() {
        let p = params(&[("x", "1"), ("s", "vfinx"), ("s", "vbmfx")]);
        assert_eq!(symbols_param(&p), "vfinx");
    }

    #[test]
    fn symbols_param_defaults_to_empty() {
        assert_eq!(symbols_param(&params(&[("t", "aapl")])), "");
    }
}
