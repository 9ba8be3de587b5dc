pub mod chart;
pub mod data;
pub mod statistics;

use crate::models::Dataset;
use crate::services::chart_service::IndicatorToggles;
use axum::{http::StatusCode, Json};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub(crate) type RouteError = (StatusCode, Json<ErrorResponse>);

pub(crate) fn bad_request(message: String) -> RouteError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse { error: message }),
    )
}

/// Query parameters shared by the chart, statistics, and raw-data routes.
/// Dates default to the dataset's full span; every indicator defaults off.
#[derive(Deserialize)]
pub struct ChartQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(default)]
    pub bollinger: bool,
    #[serde(default)]
    pub rsi: bool,
    #[serde(default)]
    pub macd: bool,
    #[serde(default)]
    pub atr: bool,
    #[serde(default)]
    pub obv: bool,
    #[serde(default)]
    pub fibonacci: bool,
}

impl ChartQuery {
    pub fn toggles(&self) -> IndicatorToggles {
        IndicatorToggles {
            bollinger: self.bollinger,
            rsi: self.rsi,
            macd: self.macd,
            atr: self.atr,
            obv: self.obv,
            fibonacci: self.fibonacci,
        }
    }
}

/// Resolve the requested range against the dataset, defaulting either end
/// to the data's own span. An unparseable date is the caller's mistake
/// (400); an inverted or out-of-data range is not — it just filters to an
/// empty table downstream.
pub(crate) fn resolve_range(
    dataset: &Dataset,
    query: &ChartQuery,
) -> Result<(NaiveDate, NaiveDate), RouteError> {
    let (data_start, data_end) = dataset
        .date_span()
        .unwrap_or((NaiveDate::MIN, NaiveDate::MAX));

    let start = match &query.start_date {
        Some(s) => parse_date(s)?,
        None => data_start,
    };
    let end = match &query.end_date {
        Some(s) => parse_date(s)?,
        None => data_end,
    };
    Ok((start, end))
}

fn parse_date(s: &str) -> Result<NaiveDate, RouteError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| bad_request(format!("Invalid date '{}', expected YYYY-MM-DD", s)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriceBar;

    fn query(start: Option<&str>, end: Option<&str>) -> ChartQuery {
        ChartQuery {
            start_date: start.map(String::from),
            end_date: end.map(String::from),
            bollinger: false,
            rsi: false,
            macd: false,
            atr: false,
            obv: false,
            fibonacci: false,
        }
    }

    fn dataset() -> Dataset {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let bars = (0..5)
            .map(|i| PriceBar {
                date: start + chrono::Days::new(i),
                open: 100.0,
                high: 101.0,
                low: 99.0,
                close: 100.0,
                volume: 1000.0,
            })
            .collect();
        Dataset::from_sorted_bars(bars)
    }

    #[test]
    fn defaults_to_full_span() {
        let (start, end) = resolve_range(&dataset(), &query(None, None)).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    }

    #[test]
    fn explicit_dates_win() {
        let (start, end) =
            resolve_range(&dataset(), &query(Some("2024-01-02"), Some("2024-01-04"))).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 1, 4).unwrap());
    }

    #[test]
    fn garbage_date_is_a_bad_request() {
        let err = resolve_range(&dataset(), &query(Some("01/02/2024"), None)).unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn inverted_range_is_not_an_error_here() {
        // The filter, not the parser, decides what an inverted range means
        let result = resolve_range(&dataset(), &query(Some("2024-01-04"), Some("2024-01-02")));
        assert!(result.is_ok());
    }
}
