/// On-Balance Volume (OBV)
/// Cumulative sum of volume signed by the day-over-day close direction
pub struct OBV;

/// Per-row direction (+1 / -1) and the running signed-volume total
pub struct ObvResult {
    pub direction: Vec<f64>,
    pub obv: Vec<f64>,
}

impl OBV {
    /// Calculate OBV for aligned close and volume series.
    ///
    /// Direction is +1 only when the close strictly rises; a flat close
    /// counts as a down day, and so does row 0 (no previous close). That
    /// asymmetry is the dashboard's historical behavior and is kept as-is,
    /// which makes OBV[0] = -volume[0]. No rows are ever dropped.
    pub fn calculate(closes: &[f64], volumes: &[f64]) -> ObvResult {
        let n = closes.len();
        let mut direction = Vec::with_capacity(n);
        let mut obv = Vec::with_capacity(n);
        let mut running = 0.0;

        for i in 0..n {
            let up = i > 0 && closes[i] > closes[i - 1];
            let dir = if up { 1.0 } else { -1.0 };
            running += dir * volumes[i];
            direction.push(dir);
            obv.push(running);
        }

        ObvResult { direction, obv }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_row_counts_as_down_day() {
        let result = OBV::calculate(&[100.0], &[500.0]);
        assert_eq!(result.direction[0], -1.0);
        assert_eq!(result.obv[0], -500.0);
    }

    #[test]
    fn test_flat_close_counts_as_down_day() {
        let closes = vec![100.0, 101.0, 101.0];
        let volumes = vec![10.0, 20.0, 30.0];
        let result = OBV::calculate(&closes, &volumes);

        assert_eq!(result.direction, vec![-1.0, 1.0, -1.0]);
        assert_eq!(result.obv, vec![-10.0, 10.0, -20.0]);
    }

    #[test]
    fn test_cumulative_sum_telescopes() {
        let closes = vec![100.0, 102.0, 101.0, 103.0, 103.0, 104.0];
        let volumes = vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0];
        let result = OBV::calculate(&closes, &volumes);

        let mut expected = 0.0;
        for i in 0..closes.len() {
            expected += result.direction[i] * volumes[i];
            assert_eq!(result.obv[i], expected, "obv[{}] should telescope", i);
        }
    }

    #[test]
    fn test_strict_uptrend_is_monotonic_after_first_row() {
        let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        let volumes = vec![1000.0; 30];
        let result = OBV::calculate(&closes, &volumes);

        for i in 1..30 {
            assert!(result.obv[i] > result.obv[i - 1]);
        }
        // 29 up days minus the row-0 contribution
        assert_eq!(result.obv[29], 29.0 * 1000.0 - 1000.0);
    }

    #[test]
    fn test_empty_input() {
        let result = OBV::calculate(&[], &[]);
        assert!(result.direction.is_empty());
        assert!(result.obv.is_empty());
    }
}
