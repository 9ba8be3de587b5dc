use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily OHLCV row. Field names match the CSV header so the same
/// struct deserializes straight out of the input file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceBar {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Open")]
    pub open: f64,
    #[serde(rename = "High")]
    pub high: f64,
    #[serde(rename = "Low")]
    pub low: f64,
    #[serde(rename = "Close")]
    pub close: f64,
    #[serde(rename = "Volume")]
    pub volume: f64,
}

/// The full loaded price table: bars sorted ascending by date, dates unique.
/// Built once at startup by the loader and never mutated afterwards; every
/// request works on a filtered copy.
#[derive(Debug, Clone)]
pub struct Dataset {
    bars: Vec<PriceBar>,
}

impl Dataset {
    /// Wrap an already sorted, duplicate-free bar list. The loader is the
    /// only caller and enforces both properties before constructing.
    pub(crate) fn from_sorted_bars(bars: Vec<PriceBar>) -> Self {
        Self { bars }
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// First and last date in the table, if any.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.bars.first(), self.bars.last()) {
            (Some(first), Some(last)) => Some((first.date, last.date)),
            _ => None,
        }
    }

    /// Inclusive date-range filter. An inverted range (start > end) or a
    /// range covering no rows yields an empty vector, not an error; the
    /// chart simply renders empty.
    pub fn filter_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<PriceBar> {
        if start > end {
            return Vec::new();
        }
        self.bars
            .iter()
            .filter(|bar| bar.date >= start && bar.date <= end)
            .cloned()
            .collect()
    }
}
