use super::moving_averages::{RollingStd, SMA};

/// Bollinger Bands
/// Volatility envelope around a 20-period SMA of the close, offset by two
/// rolling sample standard deviations
pub struct BollingerBands {
    period: usize,
    num_std: f64,
}

/// Upper and lower band series, aligned to the input
pub struct BollingerResult {
    pub upper: Vec<f64>,
    pub lower: Vec<f64>,
}

impl BollingerBands {
    pub fn new(period: usize, num_std: f64) -> Self {
        Self { period, num_std }
    }

    /// The standard 20-period, 2-sigma configuration
    pub fn standard() -> Self {
        Self::new(20, 2.0)
    }

    /// Calculate both bands for a close-price series
    /// First (period - 1) values of each band will be NaN (warmup period)
    pub fn calculate(&self, closes: &[f64]) -> BollingerResult {
        let sma = SMA::new(self.period).calculate(closes);
        let std = RollingStd::new(self.period).calculate(closes);

        let upper = sma
            .iter()
            .zip(&std)
            .map(|(m, s)| m + self.num_std * s)
            .collect();
        let lower = sma
            .iter()
            .zip(&std)
            .map(|(m, s)| m - self.num_std * s)
            .collect();

        BollingerResult { upper, lower }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands_warmup_and_values() {
        let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        let result = BollingerBands::standard().calculate(&closes);

        assert_eq!(result.upper.len(), 30);
        assert_eq!(result.lower.len(), 30);

        for i in 0..19 {
            assert!(result.upper[i].is_nan(), "upper[{}] should be NaN", i);
            assert!(result.lower[i].is_nan(), "lower[{}] should be NaN", i);
        }

        // At index 19: SMA = 109.5, sample std = sqrt(35)
        let std = 35.0_f64.sqrt();
        assert!((result.upper[19] - (109.5 + 2.0 * std)).abs() < 1e-9);
        assert!((result.lower[19] - (109.5 - 2.0 * std)).abs() < 1e-9);
    }

    #[test]
    fn test_bands_bracket_the_mean() {
        let closes: Vec<f64> = (0..40)
            .map(|i| 100.0 + (i as f64 * 0.7).sin() * 5.0)
            .collect();
        let result = BollingerBands::standard().calculate(&closes);

        for i in 19..closes.len() {
            assert!(result.upper[i] >= result.lower[i]);
        }
    }

    #[test]
    fn test_constant_series_collapses_bands() {
        let closes = vec![250.0; 25];
        let result = BollingerBands::standard().calculate(&closes);

        // Zero spread: both bands sit on the SMA
        for i in 19..25 {
            assert!((result.upper[i] - 250.0).abs() < 1e-9);
            assert!((result.lower[i] - 250.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_short_input_all_nan() {
        let closes = vec![100.0; 10];
        let result = BollingerBands::standard().calculate(&closes);

        for i in 0..10 {
            assert!(result.upper[i].is_nan());
            assert!(result.lower[i].is_nan());
        }
    }
}
