use crate::models::{Dataset, PriceBar};
use chrono::NaiveDate;
use std::path::Path;

#[derive(Debug)]
pub enum LoadError {
    ReadFailed(String),
    /// A row that did not deserialize: bad date string, non-numeric field,
    /// missing column. `line` is the 1-based line in the file (header = 1).
    ParseError {
        line: usize,
        message: String,
    },
    /// A row that deserialized but violates the table invariants.
    InvalidBar {
        date: NaiveDate,
        reason: String,
    },
    DuplicateDate(NaiveDate),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::ReadFailed(msg) => write!(f, "Failed to read CSV: {}", msg),
            LoadError::ParseError { line, message } => {
                write!(f, "Parse error at line {}: {}", line, message)
            }
            LoadError::InvalidBar { date, reason } => {
                write!(f, "Invalid bar on {}: {}", date, reason)
            }
            LoadError::DuplicateDate(date) => write!(f, "Duplicate date: {}", date),
        }
    }
}

impl std::error::Error for LoadError {}

/// Load the daily OHLCV table from a CSV with header
/// `Date,Open,High,Low,Close,Volume` (dates as `YYYY-MM-DD`).
///
/// Any malformed or invariant-violating row fails the whole load. Skipping
/// bad rows was rejected on purpose: a silently shorter table would shift
/// every rolling window computed from it.
pub fn load_csv(path: &Path) -> Result<Dataset, LoadError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| LoadError::ReadFailed(e.to_string()))?;

    let mut bars: Vec<PriceBar> = Vec::new();
    for (i, record) in reader.deserialize::<PriceBar>().enumerate() {
        let bar = record.map_err(|e| LoadError::ParseError {
            line: i + 2, // header occupies line 1
            message: e.to_string(),
        })?;
        validate_bar(&bar)?;
        bars.push(bar);
    }

    // Input files are usually already chronological, but nothing guarantees
    // it; downstream windows require ascending order.
    bars.sort_by_key(|bar| bar.date);

    for pair in bars.windows(2) {
        if pair[0].date == pair[1].date {
            return Err(LoadError::DuplicateDate(pair[0].date));
        }
    }

    Ok(Dataset::from_sorted_bars(bars))
}

fn validate_bar(bar: &PriceBar) -> Result<(), LoadError> {
    let invalid = |reason: &str| LoadError::InvalidBar {
        date: bar.date,
        reason: reason.to_string(),
    };

    let prices = [bar.open, bar.high, bar.low, bar.close];
    if prices.iter().any(|p| !p.is_finite()) || !bar.volume.is_finite() {
        return Err(invalid("non-finite value"));
    }
    if prices.iter().any(|p| *p <= 0.0) {
        return Err(invalid("non-positive price"));
    }
    if bar.volume < 0.0 {
        return Err(invalid("negative volume"));
    }
    if bar.low > bar.open.min(bar.close) || bar.high < bar.open.max(bar.close) {
        return Err(invalid("open/close outside low/high envelope"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn write_temp_csv(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("btc_dashboard_test_{}.csv", name));
        fs::write(&path, contents).unwrap();
        path
    }

    const HEADER: &str = "Date,Open,High,Low,Close,Volume\n";

    #[test]
    fn loads_and_sorts_valid_rows() {
        let path = write_temp_csv(
            "valid",
            &format!(
                "{}2024-01-03,102,103,101,102.5,1200\n\
                 2024-01-01,100,101,99,100.5,1000\n\
                 2024-01-02,101,102,100,101.5,1100\n",
                HEADER
            ),
        );
        let dataset = load_csv(&path).unwrap();
        assert_eq!(dataset.len(), 3);
        let dates: Vec<String> = dataset
            .bars()
            .iter()
            .map(|b| b.date.to_string())
            .collect();
        assert_eq!(dates, vec!["2024-01-01", "2024-01-02", "2024-01-03"]);
    }

    #[test]
    fn rejects_unparseable_date() {
        let path = write_temp_csv(
            "bad_date",
            &format!("{}not-a-date,100,101,99,100.5,1000\n", HEADER),
        );
        match load_csv(&path) {
            Err(LoadError::ParseError { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected ParseError, got {:?}", other.map(|d| d.len())),
        }
    }

    #[test]
    fn rejects_non_numeric_price() {
        let path = write_temp_csv(
            "bad_price",
            &format!("{}2024-01-01,abc,101,99,100.5,1000\n", HEADER),
        );
        assert!(matches!(
            load_csv(&path),
            Err(LoadError::ParseError { .. })
        ));
    }

    #[test]
    fn rejects_duplicate_dates() {
        let path = write_temp_csv(
            "dup",
            &format!(
                "{}2024-01-01,100,101,99,100.5,1000\n\
                 2024-01-01,101,102,100,101.5,1100\n",
                HEADER
            ),
        );
        assert!(matches!(load_csv(&path), Err(LoadError::DuplicateDate(_))));
    }

    #[test]
    fn rejects_negative_volume() {
        let path = write_temp_csv(
            "neg_vol",
            &format!("{}2024-01-01,100,101,99,100.5,-5\n", HEADER),
        );
        assert!(matches!(load_csv(&path), Err(LoadError::InvalidBar { .. })));
    }

    #[test]
    fn rejects_close_above_high() {
        let path = write_temp_csv(
            "envelope",
            &format!("{}2024-01-01,100,101,99,102,1000\n", HEADER),
        );
        assert!(matches!(load_csv(&path), Err(LoadError::InvalidBar { .. })));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let path = std::env::temp_dir().join("btc_dashboard_test_does_not_exist.csv");
        assert!(matches!(load_csv(&path), Err(LoadError::ReadFailed(_))));
    }

    #[test]
    fn empty_file_with_header_yields_empty_dataset() {
        let path = write_temp_csv("empty", HEADER);
        let dataset = load_csv(&path).unwrap();
        assert!(dataset.is_empty());
    }
}
