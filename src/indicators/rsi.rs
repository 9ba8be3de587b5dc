use super::moving_averages::SMA;

/// Relative Strength Index (RSI)
/// Measures momentum by comparing magnitude of recent gains to recent losses
/// Returns values between 0-100:
/// - Below 30: Oversold (potentially undervalued)
/// - Above 70: Overbought (potentially overvalued)
pub struct RSI {
    period: usize,
}

impl RSI {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// Calculate RSI for a price series using plain moving averages of
    /// gains and losses (not Wilder's smoothing; the averages are simple
    /// rolling means, which shifts the numbers versus the textbook RSI).
    ///
    /// Returns a vector of the same length as input. The first row has no
    /// previous close and contributes zero gain and zero loss, so values
    /// are defined from index (period - 1) and NaN before that.
    ///
    /// A window with zero average loss saturates: RS goes to infinity and
    /// RSI comes out exactly 100. A completely flat window is 0/0 and stays
    /// NaN; callers drop it together with the warmup rows.
    pub fn calculate(&self, prices: &[f64]) -> Vec<f64> {
        let mut result = vec![f64::NAN; prices.len()];

        if prices.is_empty() {
            return result;
        }

        let mut gains = vec![0.0; prices.len()];
        let mut losses = vec![0.0; prices.len()];
        for i in 1..prices.len() {
            let change = prices[i] - prices[i - 1];
            if change > 0.0 {
                gains[i] = change;
            } else {
                losses[i] = -change;
            }
        }

        let sma = SMA::new(self.period);
        let avg_gain = sma.calculate(&gains);
        let avg_loss = sma.calculate(&losses);

        for i in 0..prices.len() {
            if avg_gain[i].is_nan() || avg_loss[i].is_nan() {
                continue;
            }
            // avg_loss of 0 gives RS = inf and RSI = 100; 0/0 stays NaN
            let rs = avg_gain[i] / avg_loss[i];
            result[i] = 100.0 - (100.0 / (1.0 + rs));
        }

        result
    }
}
