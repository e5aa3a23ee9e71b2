use crate::Result;
use crate::log::record::{LogTable, Mode, ResultRecord};
use crate::textio;
use regex::Regex;

/// Compiled patterns for the two recognized line shapes, plus the
/// optional timestamp prefix stripped before either is tried.
///
/// Header example:
/// 2022-10-22 08:53:44 Finding byte sum of file /data/graphs/GAP-road.mtx ...
///
/// Result example:
/// {adv=0, block=4096, mode=2} -> {000241.2ms, sum=345102.0} readBytesSum
pub struct LinePatterns {
    timestamp: Regex,
    header: Regex,
    result: Regex,
}

/// What one normalized line contributes to the table.
#[derive(Debug, Clone, PartialEq)]
pub enum LineEvent {
    /// A header announcing the dataset the following results belong to;
    /// carries the file stem (between the last `/` and `.mtx`).
    Header { graph: String },
    /// One benchmark trial.
    Result {
        early_madvice: bool,
        block_size: f64,
        mode: Mode,
        time: f64,
        sum: f64,
        technique: String,
    },
}

impl LinePatterns {
    pub fn new() -> Result<Self> {
        Ok(Self {
            timestamp: Regex::new(r"^\d+-\d+-\d+ \d+:\d+:\d+\s+")?,
            header: Regex::new(r"^Finding byte sum of file .*/(.*?)\.mtx \.\.\.")?,
            result: Regex::new(
                r"^\{adv=(.+?), block=(.+?), mode=(.+?)\} -> \{(.+?)ms, sum=(.+?)\} (.+)",
            )?,
        })
    }

    /// Classify one line. The header shape is tried first and a match
    /// suppresses the result test; a line matching neither is inert and
    /// yields `None`.
    pub fn classify(&self, line: &str) -> Option<LineEvent> {
        let line = self.timestamp.replace(line, "");

        if let Some(caps) = self.header.captures(&line) {
            return Some(LineEvent::Header {
                graph: caps[1].to_string(),
            });
        }

        if let Some(caps) = self.result.captures(&line) {
            let adv = parse_num(&caps[1]);
            return Some(LineEvent::Result {
                // A NaN flag is as good as absent, not set.
                early_madvice: adv != 0.0 && !adv.is_nan(),
                block_size: parse_num(&caps[2]),
                mode: Mode::from_index(parse_num(&caps[3])),
                time: parse_num(&caps[4]),
                sum: parse_num(&caps[5]),
                technique: caps[6].to_string(),
            });
        }

        None
    }
}

/// Numeric captures parse to NaN rather than an error when malformed;
/// the sentinel flows into the record and, eventually, the CSV.
fn parse_num(s: &str) -> f64 {
    s.trim().parse().unwrap_or(f64::NAN)
}

/// Fold one line into the table, returning the dataset state to carry
/// into the next line.
///
/// A header ensures its dataset has a (possibly pre-existing) list and
/// becomes the new state. A result appends to the current dataset's
/// list; with no header seen yet it lands under the empty dataset name.
/// Inert lines change nothing.
pub fn scan_line(
    patterns: &LinePatterns,
    state: Option<String>,
    line: &str,
    table: &mut LogTable,
) -> Option<String> {
    match patterns.classify(line) {
        Some(LineEvent::Header { graph }) => {
            table.entry(graph.clone()).or_default();
            Some(graph)
        }
        Some(LineEvent::Result {
            early_madvice,
            block_size,
            mode,
            time,
            sum,
            technique,
        }) => {
            let graph = state.clone().unwrap_or_default();
            let record = ResultRecord {
                graph: graph.clone(),
                early_madvice,
                block_size,
                mode,
                time,
                sum,
                technique,
            };
            table.entry(graph).or_default().push(record);
            state
        }
        None => state,
    }
}

/// Parse a whole normalized log in one pass.
pub fn parse_log(text: &str) -> Result<LogTable> {
    let patterns = LinePatterns::new()?;

    let mut table = LogTable::new();
    let mut state = None;
    for line in text.split('\n') {
        state = scan_line(&patterns, state, line, &mut table);
    }

    Ok(table)
}

/// Read, normalize and parse a benchmark log file.
pub fn parse_log_file(path: &str) -> Result<LogTable> {
    let text = textio::read_text(path)?;
    parse_log(&text)
}
