use crate::indicators::{BollingerBands, FibonacciLevels, ATR, MACD, OBV, RSI};
use crate::models::PriceBar;

/// Which overlays the user toggled on for this render
#[derive(Debug, Clone, Copy, Default)]
pub struct IndicatorToggles {
    pub bollinger: bool,
    pub rsi: bool,
    pub macd: bool,
    pub atr: bool,
    pub obv: bool,
    pub fibonacci: bool,
}

/// A named derived column aligned row-for-row to the table.
/// Overlay columns are drawn on the chart; auxiliary columns (true-range
/// components, OBV direction) only show up in the raw table and statistics.
#[derive(Debug, Clone)]
pub struct DerivedColumn {
    pub name: &'static str,
    pub values: Vec<f64>,
    pub overlay: bool,
}

impl DerivedColumn {
    fn overlay(name: &'static str, values: Vec<f64>) -> Self {
        Self {
            name,
            values,
            overlay: true,
        }
    }

    fn auxiliary(name: &'static str, values: Vec<f64>) -> Self {
        Self {
            name,
            values,
            overlay: false,
        }
    }
}

/// How NaN warmup rows are handled when a transform's columns join the table
#[derive(Debug, Clone, Copy)]
pub enum DropPolicy {
    /// Remove every row holding a NaN in any column of the whole table.
    /// This shrinks what every later computation and the chart itself see.
    AnyColumn,
    /// Remove rows where any of the named columns is NaN.
    Subset(&'static [&'static str]),
    /// Keep all rows.
    Keep,
}

/// The filtered price table plus accumulated derived columns.
/// Transforms never mutate a shared frame; `with_columns` returns the next
/// table value and the caller composes transforms in a fixed order.
#[derive(Debug, Clone)]
pub struct ChartTable {
    bars: Vec<PriceBar>,
    columns: Vec<DerivedColumn>,
}

impl ChartTable {
    pub fn new(bars: Vec<PriceBar>) -> Self {
        Self {
            bars,
            columns: Vec::new(),
        }
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn columns(&self) -> &[DerivedColumn] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&DerivedColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn highs(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.high).collect()
    }

    pub fn lows(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.low).collect()
    }

    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.volume).collect()
    }

    /// Append columns, then apply the transform's drop policy.
    /// Every new column must align with the current rows.
    pub fn with_columns(mut self, new_columns: Vec<DerivedColumn>, policy: DropPolicy) -> Self {
        for column in &new_columns {
            assert_eq!(
                column.values.len(),
                self.bars.len(),
                "column {} not aligned to table",
                column.name
            );
        }
        self.columns.extend(new_columns);

        match policy {
            DropPolicy::Keep => {}
            DropPolicy::AnyColumn => {
                let keep: Vec<bool> = (0..self.bars.len())
                    .map(|i| self.columns.iter().all(|c| !c.values[i].is_nan()))
                    .collect();
                self.retain_rows(&keep);
            }
            DropPolicy::Subset(names) => {
                let keep: Vec<bool> = (0..self.bars.len())
                    .map(|i| {
                        self.columns
                            .iter()
                            .filter(|c| names.contains(&c.name))
                            .all(|c| !c.values[i].is_nan())
                    })
                    .collect();
                self.retain_rows(&keep);
            }
        }
        self
    }

    fn retain_rows(&mut self, keep: &[bool]) {
        if keep.iter().all(|&k| k) {
            return;
        }
        self.bars = self
            .bars
            .iter()
            .zip(keep)
            .filter(|(_, &k)| k)
            .map(|(bar, _)| bar.clone())
            .collect();
        for column in &mut self.columns {
            column.values = column
                .values
                .iter()
                .zip(keep)
                .filter(|(_, &k)| k)
                .map(|(v, _)| *v)
                .collect();
        }
    }
}

/// Run the enabled indicator transforms over the filtered bars.
///
/// The order is fixed (Bollinger, RSI, MACD, ATR, OBV, Fibonacci) so the
/// row-dropping side effects are deterministic: Bollinger trims the table
/// for everything after it, each oscillator then trims its own warmup, and
/// the Fibonacci levels are read off whatever rows remain visible.
pub fn build_chart_table(
    bars: Vec<PriceBar>,
    toggles: IndicatorToggles,
) -> (ChartTable, Option<FibonacciLevels>) {
    let mut table = ChartTable::new(bars);

    if toggles.bollinger {
        let before = table.len();
        let bands = BollingerBands::standard().calculate(&table.closes());
        table = table.with_columns(
            vec![
                DerivedColumn::overlay("Upper Band", bands.upper),
                DerivedColumn::overlay("Lower Band", bands.lower),
            ],
            DropPolicy::AnyColumn,
        );
        tracing::debug!("bollinger bands trimmed {} -> {} rows", before, table.len());
    }

    if toggles.rsi {
        let before = table.len();
        let rsi = RSI::new(14).calculate(&table.closes());
        table = table.with_columns(
            vec![DerivedColumn::overlay("RSI", rsi)],
            DropPolicy::Subset(&["RSI"]),
        );
        tracing::debug!("rsi trimmed {} -> {} rows", before, table.len());
    }

    if toggles.macd {
        let result = MACD::standard().calculate(&table.closes());
        // No warmup gap in the recursive EMA, so this subset drop keeps
        // every row; the policy stays explicit anyway
        table = table.with_columns(
            vec![
                DerivedColumn::overlay("MACD", result.macd),
                DerivedColumn::overlay("Signal Line", result.signal),
            ],
            DropPolicy::Subset(&["MACD", "Signal Line"]),
        );
    }

    if toggles.atr {
        let before = table.len();
        let result = ATR::standard().calculate(&table.highs(), &table.lows(), &table.closes());
        table = table.with_columns(
            vec![
                DerivedColumn::auxiliary("High-Low", result.high_low),
                DerivedColumn::auxiliary("High-Close", result.high_close),
                DerivedColumn::auxiliary("Low-Close", result.low_close),
                DerivedColumn::auxiliary("True Range", result.true_range),
                DerivedColumn::overlay("ATR", result.atr),
            ],
            DropPolicy::Subset(&["ATR"]),
        );
        tracing::debug!("atr trimmed {} -> {} rows", before, table.len());
    }

    if toggles.obv {
        let result = OBV::calculate(&table.closes(), &table.volumes());
        table = table.with_columns(
            vec![
                DerivedColumn::auxiliary("Direction", result.direction),
                DerivedColumn::overlay("OBV", result.obv),
            ],
            DropPolicy::Keep,
        );
    }

    let fibonacci = if toggles.fibonacci {
        FibonacciLevels::from_closes(&table.closes())
    } else {
        None
    };

    (table, fibonacci)
}
