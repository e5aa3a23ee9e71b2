//! Whole-file text I/O with line-ending canonicalization.
//!
//! Logs arrive from both Unix and Windows benchmark hosts, so reads fold
//! `\r\n` down to `\n` and everything downstream works on canonical
//! line-feed text. Writes render the platform's native ending back out.

use crate::Result;
use anyhow::Context;
use std::fs;
use std::path::Path;

/// Read a file as text with every line ending canonicalized to `\n`.
pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let text =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    Ok(text.replace("\r\n", "\n"))
}

/// Write canonical `\n`-separated text, rendering the platform's native
/// line ending.
pub fn write_text(path: impl AsRef<Path>, text: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, render_eol(text)).with_context(|| format!("write {}", path.display()))
}

#[cfg(windows)]
fn render_eol(text: &str) -> String {
    text.replace('\n', "\r\n")
}

#[cfg(not(windows))]
fn render_eol(text: &str) -> String {
    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn read_folds_crlf_to_lf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mixed.log");
        fs::write(&path, "a\r\nb\nc\r\n").unwrap();

        assert_eq!(read_text(&path).unwrap(), "a\nb\nc\n");
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        write_text(&path, "one\ntwo\n").unwrap();
        assert_eq!(read_text(&path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn read_reports_the_missing_path() {
        let err = read_text("no/such/file.log").unwrap_err();
        assert!(err.to_string().contains("no/such/file.log"));
    }
}
