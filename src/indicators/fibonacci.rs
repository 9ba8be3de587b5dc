use serde::Serialize;

/// Retracement ratios between the visible range's high and low
pub const RETRACEMENT_RATIOS: [f64; 4] = [0.236, 0.382, 0.5, 0.618];

/// One horizontal retracement line
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FibLevel {
    pub ratio: f64,
    pub price: f64,
}

/// Fibonacci retracement levels for the visible close-price range.
/// Four scalar price lines, not per-row series; recomputed per render from
/// the final filtered table.
#[derive(Debug, Clone, Serialize)]
pub struct FibonacciLevels {
    pub max_price: f64,
    pub min_price: f64,
    pub levels: Vec<FibLevel>,
}

impl FibonacciLevels {
    /// Compute the levels from a close-price series; `None` for an empty
    /// table (nothing visible to retrace).
    pub fn from_closes(closes: &[f64]) -> Option<Self> {
        if closes.is_empty() {
            return None;
        }

        let max_price = closes.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min_price = closes.iter().copied().fold(f64::INFINITY, f64::min);
        let diff = max_price - min_price;

        let levels = RETRACEMENT_RATIOS
            .iter()
            .map(|&ratio| FibLevel {
                ratio,
                price: max_price - diff * ratio,
            })
            .collect();

        Some(Self {
            max_price,
            min_price,
            levels,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_for_known_range() {
        let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        let fib = FibonacciLevels::from_closes(&closes).unwrap();

        assert_eq!(fib.max_price, 129.0);
        assert_eq!(fib.min_price, 100.0);

        // diff = 29
        let expected = [
            129.0 - 29.0 * 0.236,
            129.0 - 29.0 * 0.382,
            129.0 - 29.0 * 0.5,
            129.0 - 29.0 * 0.618,
        ];
        for (level, want) in fib.levels.iter().zip(expected) {
            assert!((level.price - want).abs() < 1e-9);
        }
    }

    #[test]
    fn test_levels_are_ordered_within_the_range() {
        let closes = vec![105.0, 98.0, 112.0, 101.0, 96.5, 108.0];
        let fib = FibonacciLevels::from_closes(&closes).unwrap();

        // min <= 0.618 <= 0.5 <= 0.382 <= 0.236 <= max
        let prices: Vec<f64> = fib.levels.iter().map(|l| l.price).collect();
        assert!(fib.min_price <= prices[3]);
        assert!(prices[3] <= prices[2]);
        assert!(prices[2] <= prices[1]);
        assert!(prices[1] <= prices[0]);
        assert!(prices[0] <= fib.max_price);
    }

    #[test]
    fn test_single_row_collapses_to_one_price() {
        let fib = FibonacciLevels::from_closes(&[250.0]).unwrap();
        for level in &fib.levels {
            assert_eq!(level.price, 250.0);
        }
    }

    #[test]
    fn test_empty_table_has_no_levels() {
        assert!(FibonacciLevels::from_closes(&[]).is_none());
    }
}
