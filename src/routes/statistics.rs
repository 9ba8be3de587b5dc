use crate::routes::{resolve_range, ChartQuery, RouteError};
use crate::services::chart_service::build_chart_table;
use crate::services::stats_service::{summarize_table, ColumnSummary};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;
use std::collections::HashMap;

/// Summary statistics over every numeric column of the final filtered
/// table, the same table the chart route renders (drop policies included).
#[derive(Serialize)]
pub struct StatisticsResponse {
    pub rows: usize,
    pub statistics: HashMap<String, ColumnSummary>,
}

pub async fn get_statistics(
    State(state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> Result<Json<StatisticsResponse>, RouteError> {
    let (start, end) = resolve_range(&state.dataset, &query)?;
    let bars = state.dataset.filter_range(start, end);
    let (table, _) = build_chart_table(bars, query.toggles());

    Ok(Json(StatisticsResponse {
        rows: table.len(),
        statistics: summarize_table(&table),
    }))
}
