//! CSV serialization for uniformly-shaped rows.
//!
//! Downstream notebooks expect a fixed shape: an unquoted header row,
//! then every value wrapped in double quotes whatever its type.

use crate::Result;
use crate::textio;
use anyhow::bail;
use std::path::Path;

/// Row shape the writer understands: a fixed column set plus the
/// rendered value for each column, in the same order.
pub trait Tabular {
    const COLUMNS: &'static [&'static str];

    fn fields(&self) -> Vec<String>;
}

/// Render rows as CSV text.
///
/// The header comes from the row type, but an empty sequence still has
/// no rows to justify one, so it is an error rather than a silent
/// header-only (or empty) file.
pub fn to_csv<R: Tabular>(rows: &[R]) -> Result<String> {
    if rows.is_empty() {
        bail!("no records to write");
    }

    let mut out = String::new();
    out.push_str(&R::COLUMNS.join(","));
    out.push('\n');
    for row in rows {
        let quoted: Vec<String> = row.fields().iter().map(|v| format!("\"{v}\"")).collect();
        out.push_str(&quoted.join(","));
        out.push('\n');
    }

    Ok(out)
}

/// Render rows and write them, line endings in host form.
pub fn write_csv<R: Tabular>(path: impl AsRef<Path>, rows: &[R]) -> Result<()> {
    textio::write_text(path, &to_csv(rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::{Mode, ResultRecord};
    use pretty_assertions::assert_eq;

    fn record(graph: &str, block: f64) -> ResultRecord {
        ResultRecord {
            graph: graph.to_string(),
            early_madvice: false,
            block_size: block,
            mode: Mode::Madvice,
            time: 241.2,
            sum: 345102.5,
            technique: "readBytesSum".to_string(),
        }
    }

    #[test]
    fn header_is_unquoted_and_values_are_quoted() {
        let text = to_csv(&[record("GAP-road", 4096.0)]).unwrap();
        assert_eq!(
            text,
            "graph,early_madvice,block_size,mode,time,sum,technique\n\
             \"GAP-road\",\"false\",\"4096\",\"madvice\",\"241.2\",\"345102.5\",\"readBytesSum\"\n"
        );
    }

    #[test]
    fn n_records_render_as_n_plus_one_lines_with_matching_fields() {
        let rows = vec![record("A", 1.0), record("A", 2.0), record("B", 3.0)];
        let text = to_csv(&rows).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), rows.len() + 1);
        for (line, row) in lines[1..].iter().zip(&rows) {
            let fields: Vec<String> = line
                .split(',')
                .map(|f| f.trim_matches('"').to_string())
                .collect();
            assert_eq!(fields, row.fields());
        }
    }

    #[test]
    fn nan_and_unknown_mode_render_as_sentinels() {
        let mut row = record("", 1.0);
        row.mode = Mode::Unknown;
        row.sum = f64::NAN;

        let text = to_csv(&[row]).unwrap();
        let data = text.lines().nth(1).unwrap();
        assert_eq!(data, "\"\",\"false\",\"1\",\"\",\"241.2\",\"NaN\",\"readBytesSum\"");
    }

    #[test]
    fn empty_input_is_an_error_not_an_empty_file() {
        let rows: Vec<ResultRecord> = Vec::new();
        let err = to_csv(&rows).unwrap_err();
        assert!(err.to_string().contains("no records"));
    }

    #[test]
    fn write_csv_round_trips_through_the_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        write_csv(&path, &[record("GAP-road", 4096.0)]).unwrap();
        let text = textio::read_text(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.starts_with("graph,"));
    }
}
