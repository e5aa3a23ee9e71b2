use crate::csv::Tabular;
use indexmap::IndexMap;

/// Memory-access strategy used by one benchmark trial, encoded in the
/// log as a numeric index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Default,
    Madvice,
    Mmap,
    /// Index outside the known set; carried through, not rejected.
    Unknown,
}

impl Mode {
    /// Decode the numeric index captured from a result line. Only an
    /// exact 0, 1 or 2 names a mode; anything else (negative,
    /// fractional, out of range, NaN) is `Unknown`.
    pub fn from_index(idx: f64) -> Self {
        match idx {
            i if i == 0.0 => Mode::Default,
            i if i == 1.0 => Mode::Madvice,
            i if i == 2.0 => Mode::Mmap,
            _ => Mode::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Default => "default",
            Mode::Madvice => "madvice",
            Mode::Mmap => "mmap",
            Mode::Unknown => "",
        }
    }
}

/// One benchmark trial parsed from a result line.
///
/// Numeric fields hold whatever the log carried; a capture that fails to
/// parse is NaN rather than an error (the logs are scraped, not
/// validated).
#[derive(Debug, Clone)]
pub struct ResultRecord {
    /// Dataset announced by the enclosing header line; empty when the
    /// result appeared before any header.
    pub graph: String,
    pub early_madvice: bool,
    pub block_size: f64,
    pub mode: Mode,
    pub time: f64,
    pub sum: f64,
    /// Trailing free-text label, uninterpreted.
    pub technique: String,
}

impl Tabular for ResultRecord {
    const COLUMNS: &'static [&'static str] = &[
        "graph",
        "early_madvice",
        "block_size",
        "mode",
        "time",
        "sum",
        "technique",
    ];

    fn fields(&self) -> Vec<String> {
        vec![
            self.graph.clone(),
            self.early_madvice.to_string(),
            self.block_size.to_string(),
            self.mode.as_str().to_string(),
            self.time.to_string(),
            self.sum.to_string(),
            self.technique.clone(),
        ]
    }
}

/// Dataset name -> records, in first-seen dataset order; each list grows
/// in log order. Built once per parse pass, read-only afterward.
pub type LogTable = IndexMap<String, Vec<ResultRecord>>;

/// Concatenate every dataset's records into one flat sequence:
/// first-seen dataset order, per-dataset order preserved.
pub fn flatten(table: &LogTable) -> Vec<ResultRecord> {
    table.values().flatten().cloned().collect()
}
