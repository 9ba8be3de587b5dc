// Technical indicators module
// Pure column math: each indicator takes slices from the filtered table and
// returns same-length vectors, with NaN marking warmup rows

pub mod atr;
pub mod bollinger;
pub mod fibonacci;
pub mod macd;
pub mod moving_averages;
pub mod obv;
pub mod rsi;

pub use atr::{AtrResult, ATR};
pub use bollinger::{BollingerBands, BollingerResult};
pub use fibonacci::{FibLevel, FibonacciLevels};
pub use macd::{MacdResult, MACD};
pub use moving_averages::{RollingStd, EMA, SMA};
pub use obv::{ObvResult, OBV};
pub use rsi::RSI;
