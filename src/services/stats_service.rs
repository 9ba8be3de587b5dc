use crate::services::chart_service::ChartTable;
use serde::Serialize;
use std::collections::HashMap;

/// Summary of one numeric column, matching what pandas' describe() prints:
/// non-NaN count, mean, sample standard deviation, min, quartiles, max.
/// Fields are None when the column has too few values to define them.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    #[serde(rename = "25%")]
    pub q1: Option<f64>,
    #[serde(rename = "50%")]
    pub median: Option<f64>,
    #[serde(rename = "75%")]
    pub q3: Option<f64>,
    pub max: Option<f64>,
}

/// Summarize every numeric column of the final table: OHLCV plus all
/// derived columns, auxiliary ones included.
pub fn summarize_table(table: &ChartTable) -> HashMap<String, ColumnSummary> {
    let bars = table.bars();
    let mut summaries = HashMap::new();

    let base: [(&str, Vec<f64>); 5] = [
        ("Open", bars.iter().map(|b| b.open).collect()),
        ("High", bars.iter().map(|b| b.high).collect()),
        ("Low", bars.iter().map(|b| b.low).collect()),
        ("Close", bars.iter().map(|b| b.close).collect()),
        ("Volume", bars.iter().map(|b| b.volume).collect()),
    ];
    for (name, values) in base {
        summaries.insert(name.to_string(), summarize_column(&values));
    }

    for column in table.columns() {
        summaries.insert(column.name.to_string(), summarize_column(&column.values));
    }

    summaries
}

/// Summarize one series, skipping NaN entries (they never reach the final
/// table in practice, but the count is defined as non-NaN regardless).
pub fn summarize_column(values: &[f64]) -> ColumnSummary {
    let mut finite: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    finite.sort_by(f64::total_cmp);

    let count = finite.len();
    if count == 0 {
        return ColumnSummary {
            count: 0,
            mean: None,
            std: None,
            min: None,
            q1: None,
            median: None,
            q3: None,
            max: None,
        };
    }

    let n = count as f64;
    let mean = finite.iter().sum::<f64>() / n;
    // Sample standard deviation (ddof = 1); undefined for a single value
    let std = if count > 1 {
        let sum_sq: f64 = finite.iter().map(|v| (v - mean) * (v - mean)).sum();
        Some((sum_sq / (n - 1.0)).sqrt())
    } else {
        None
    };

    ColumnSummary {
        count,
        mean: Some(mean),
        std,
        min: Some(finite[0]),
        q1: Some(percentile(&finite, 0.25)),
        median: Some(percentile(&finite, 0.5)),
        q3: Some(percentile(&finite, 0.75)),
        max: Some(finite[count - 1]),
    }
}

/// Percentile with linear interpolation between closest ranks, over an
/// already sorted non-empty slice.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
