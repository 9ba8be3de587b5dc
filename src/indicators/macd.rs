use super::moving_averages::EMA;

/// Moving Average Convergence Divergence (MACD)
/// Difference between a fast and a slow EMA of the close, paired with an
/// EMA-smoothed signal line
pub struct MACD {
    fast: usize,
    slow: usize,
    signal: usize,
}

/// MACD line and signal line, aligned to the input
pub struct MacdResult {
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
}

impl MACD {
    pub fn new(fast: usize, slow: usize, signal: usize) -> Self {
        Self { fast, slow, signal }
    }

    /// The standard 12/26/9 configuration
    pub fn standard() -> Self {
        Self::new(12, 26, 9)
    }

    /// Calculate MACD and signal line for a close-price series.
    /// The recursive EMA has no warmup gap, so both series are defined for
    /// every row of a non-empty input.
    pub fn calculate(&self, closes: &[f64]) -> MacdResult {
        let ema_fast = EMA::new(self.fast).calculate(closes);
        let ema_slow = EMA::new(self.slow).calculate(closes);

        let macd: Vec<f64> = ema_fast
            .iter()
            .zip(&ema_slow)
            .map(|(fast, slow)| fast - slow)
            .collect();

        let signal = EMA::new(self.signal).calculate(&macd);

        MacdResult { macd, signal }
    }
}
