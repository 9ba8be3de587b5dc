/// Simple Moving Average (SMA)
/// Calculates the arithmetic mean of the last N values
pub struct SMA {
    period: usize,
}

impl SMA {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// Calculate SMA for a value series
    /// Returns a vector of the same length as input
    /// First (period - 1) values will be NaN (warmup period)
    pub fn calculate(&self, values: &[f64]) -> Vec<f64> {
        let mut result = vec![f64::NAN; values.len()];

        if values.len() < self.period {
            return result;
        }

        for i in (self.period - 1)..values.len() {
            let window = &values[i + 1 - self.period..=i];
            let sum: f64 = window.iter().sum();
            result[i] = sum / self.period as f64;
        }

        result
    }
}

/// Rolling sample standard deviation over a fixed trailing window
/// (ddof = 1: the divisor is period - 1)
pub struct RollingStd {
    period: usize,
}

impl RollingStd {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// Calculate the rolling standard deviation for a value series
    /// Returns a vector of the same length as input
    /// First (period - 1) values will be NaN (warmup period)
    pub fn calculate(&self, values: &[f64]) -> Vec<f64> {
        let mut result = vec![f64::NAN; values.len()];

        if self.period < 2 || values.len() < self.period {
            return result;
        }

        for i in (self.period - 1)..values.len() {
            let window = &values[i + 1 - self.period..=i];
            let mean: f64 = window.iter().sum::<f64>() / self.period as f64;
            let sum_sq: f64 = window.iter().map(|v| (v - mean) * (v - mean)).sum();
            result[i] = (sum_sq / (self.period - 1) as f64).sqrt();
        }

        result
    }
}

/// Exponential Moving Average (EMA)
/// Recursive smoothing seeded with the first observation, so the value is
/// defined for every row including the first (no warmup gap)
pub struct EMA {
    span: usize,
}

impl EMA {
    pub fn new(span: usize) -> Self {
        Self { span }
    }

    /// Smoothing factor (k) for EMA calculation
    /// k = 2 / (span + 1)
    fn smoothing_factor(&self) -> f64 {
        2.0 / (self.span as f64 + 1.0)
    }

    /// Calculate EMA for a value series
    /// Returns a vector of the same length as input:
    /// EMA[0] = value[0], EMA[i] = value[i] * k + EMA[i-1] * (1 - k)
    pub fn calculate(&self, values: &[f64]) -> Vec<f64> {
        let mut result = Vec::with_capacity(values.len());
        let k = self.smoothing_factor();

        for (i, &value) in values.iter().enumerate() {
            if i == 0 {
                result.push(value);
            } else {
                result.push(value * k + result[i - 1] * (1.0 - k));
            }
        }

        result
    }
}
