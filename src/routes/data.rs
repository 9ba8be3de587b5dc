use crate::routes::{resolve_range, ChartQuery, RouteError};
use crate::services::chart_service::build_chart_table;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

/// One row of the final filtered table, for the raw-data display:
/// OHLCV plus whatever derived columns the toggles produced.
#[derive(Serialize)]
pub struct RawRow {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    #[serde(flatten)]
    pub derived: HashMap<String, Option<f64>>,
}

#[derive(Serialize)]
pub struct DataResponse {
    pub rows: Vec<RawRow>,
}

pub async fn get_data(
    State(state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> Result<Json<DataResponse>, RouteError> {
    let (start, end) = resolve_range(&state.dataset, &query)?;
    let bars = state.dataset.filter_range(start, end);
    let (table, _) = build_chart_table(bars, query.toggles());

    let rows = table
        .bars()
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            let derived = table
                .columns()
                .iter()
                .map(|column| {
                    let v = column.values[i];
                    let value = if v.is_nan() { None } else { Some(v) };
                    (column.name.to_string(), value)
                })
                .collect();
            RawRow {
                date: bar.date,
                open: bar.open,
                high: bar.high,
                low: bar.low,
                close: bar.close,
                volume: bar.volume,
                derived,
            }
        })
        .collect();

    Ok(Json(DataResponse { rows }))
}

/// Dataset extent, used by the frontend to seed its date pickers.
#[derive(Serialize)]
pub struct RangeResponse {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub rows: usize,
}

pub async fn get_range(State(state): State<AppState>) -> Json<RangeResponse> {
    let span = state.dataset.date_span();
    Json(RangeResponse {
        start_date: span.map(|(start, _)| start),
        end_date: span.map(|(_, end)| end),
        rows: state.dataset.len(),
    })
}
