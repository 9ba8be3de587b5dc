use super::moving_averages::SMA;

/// Average True Range (ATR)
/// Volatility measure: a moving average of the true range, where the true
/// range is the largest of high-low, |high - prev close|, |low - prev close|
pub struct ATR {
    period: usize,
}

/// True-range components plus the averaged result, all aligned to the input.
/// The intermediate columns are kept because the dashboard table (and its
/// summary statistics) carries them alongside the ATR itself.
pub struct AtrResult {
    pub high_low: Vec<f64>,
    pub high_close: Vec<f64>,
    pub low_close: Vec<f64>,
    pub true_range: Vec<f64>,
    pub atr: Vec<f64>,
}

impl ATR {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// The standard 14-period configuration
    pub fn standard() -> Self {
        Self::new(14)
    }

    /// Calculate true range and its simple moving average.
    /// Row 0 has no previous close: both |.| components are NaN there and
    /// the true range falls back to high - low. The ATR column is NaN for
    /// the first (period - 1) rows (warmup period).
    pub fn calculate(&self, highs: &[f64], lows: &[f64], closes: &[f64]) -> AtrResult {
        let n = highs.len();
        let mut high_low = vec![f64::NAN; n];
        let mut high_close = vec![f64::NAN; n];
        let mut low_close = vec![f64::NAN; n];
        let mut true_range = vec![f64::NAN; n];

        for i in 0..n {
            high_low[i] = highs[i] - lows[i];
            if i > 0 {
                high_close[i] = (highs[i] - closes[i - 1]).abs();
                low_close[i] = (lows[i] - closes[i - 1]).abs();
            }
            // f64::max ignores NaN operands, so row 0 reduces to high - low
            true_range[i] = high_low[i].max(high_close[i]).max(low_close[i]);
        }

        let atr = SMA::new(self.period).calculate(&true_range);

        AtrResult {
            high_low,
            high_close,
            low_close,
            true_range,
            atr,
        }
    }
}
