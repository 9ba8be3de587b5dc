use crate::indicators::FibonacciLevels;
use crate::routes::{resolve_range, ChartQuery, RouteError};
use crate::services::chart_service::{build_chart_table, ChartTable};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

/// Everything the frontend needs to draw one render: the candlestick
/// arrays, one named line series per enabled overlay, and the Fibonacci
/// levels when requested. No further transformation happens client-side.
#[derive(Serialize)]
pub struct ChartResponse {
    pub dates: Vec<NaiveDate>,
    pub open: Vec<f64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub close: Vec<f64>,
    pub volume: Vec<f64>,
    pub overlays: HashMap<String, Vec<Option<f64>>>,
    pub fibonacci: Option<FibonacciLevels>,
}

pub async fn get_chart(
    State(state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> Result<Json<ChartResponse>, RouteError> {
    let (start, end) = resolve_range(&state.dataset, &query)?;
    let bars = state.dataset.filter_range(start, end);
    let (table, fibonacci) = build_chart_table(bars, query.toggles());
    Ok(Json(chart_response(&table, fibonacci)))
}

fn chart_response(table: &ChartTable, fibonacci: Option<FibonacciLevels>) -> ChartResponse {
    let bars = table.bars();

    // Convert NaN to None for JSON serialization
    let overlays: HashMap<String, Vec<Option<f64>>> = table
        .columns()
        .iter()
        .filter(|column| column.overlay)
        .map(|column| {
            let values = column
                .values
                .iter()
                .map(|v| if v.is_nan() { None } else { Some(*v) })
                .collect();
            (column.name.to_string(), values)
        })
        .collect();

    ChartResponse {
        dates: bars.iter().map(|b| b.date).collect(),
        open: bars.iter().map(|b| b.open).collect(),
        high: bars.iter().map(|b| b.high).collect(),
        low: bars.iter().map(|b| b.low).collect(),
        close: bars.iter().map(|b| b.close).collect(),
        volume: bars.iter().map(|b| b.volume).collect(),
        overlays,
        fibonacci,
    }
}
