//! Process file loading.
//!
//! Reads the comma-separated process format, one record per line:
//!
//! ```text
//! # id, burst, arrival[, priority]
//! 1, 24, 0
//! 2, 3, 0, 2
//! ```
//!
//! The burst column comes before the arrival column. A missing priority
//! defaults to 0. Blank lines and lines starting with `#` are skipped.
//! Loading only checks the syntax; value ranges are checked by
//! [`crate::validation`].

use std::fmt;
use std::io::Read;
use std::num::ParseIntError;
use std::path::Path;

use log::debug;

use crate::models::Process;

const COLUMNS: [&str; 4] = ["id", "burst", "arrival", "priority"];

/// Errors raised while loading a process file.
#[derive(Debug)]
pub enum LoadError {
    /// The source could not be read.
    Io(std::io::Error),
    /// A record has fewer than 3 or more than 4 fields.
    ColumnCount {
        /// 1-based line number.
        line: usize,
        /// Number of fields found.
        found: usize,
    },
    /// A field is not an integer.
    InvalidInteger {
        /// 1-based line number.
        line: usize,
        /// Column name.
        column: &'static str,
        /// Offending text.
        value: String,
        /// Underlying parse error.
        source: ParseIntError,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "cannot read process file: {e}"),
            LoadError::ColumnCount { line, found } => write!(
                f,
                "line {line}: expected 3 or 4 fields \
                 (id, burst, arrival[, priority]), found {found}"
            ),
            LoadError::InvalidInteger {
                line,
                column,
                value,
                ..
            } => write!(f, "line {line}: {column} '{value}' is not an integer"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::InvalidInteger { source, .. } => Some(source),
            LoadError::ColumnCount { .. } => None,
        }
    }
}

/// Parses process records from text.
pub fn parse_processes(input: &str) -> Result<Vec<Process>, LoadError> {
    let mut processes = Vec::new();

    for (index, raw) in input.lines().enumerate() {
        let line = index + 1;
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = text.split(',').map(str::trim).collect();
        if !(3..=4).contains(&fields.len()) {
            return Err(LoadError::ColumnCount {
                line,
                found: fields.len(),
            });
        }

        let mut values = [0i64; 4];
        for (column, field) in fields.iter().enumerate() {
            values[column] = field.parse().map_err(|source| LoadError::InvalidInteger {
                line,
                column: COLUMNS[column],
                value: field.to_string(),
                source,
            })?;
        }

        let [id, burst, arrival, priority] = values;
        processes.push(Process::new(id, arrival, burst).with_priority(priority));
    }

    debug!("loaded {} process record(s)", processes.len());
    Ok(processes)
}

/// Reads process records from any reader.
pub fn read_processes<R: Read>(mut reader: R) -> Result<Vec<Process>, LoadError> {
    let mut input = String::new();
    reader.read_to_string(&mut input).map_err(LoadError::Io)?;
    parse_processes(&input)
}

/// Loads process records from a file.
pub fn load_processes(path: impl AsRef<Path>) -> Result<Vec<Process>, LoadError> {
    let file = std::fs::File::open(path).map_err(LoadError::Io)?;
    read_processes(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let processes = parse_processes("1,24,0\n2,3,0,2\n").unwrap();
        assert_eq!(processes.len(), 2);
        assert_eq!(processes[0], Process::new(1, 0, 24));
        assert_eq!(processes[1], Process::new(2, 0, 3).with_priority(2));
    }

    #[test]
    fn test_burst_before_arrival() {
        let processes = parse_processes("7, 5, 9").unwrap();
        assert_eq!(processes[0].burst, 5);
        assert_eq!(processes[0].arrival, 9);
    }

    #[test]
    fn test_skips_comments_and_blank_lines() {
        let input = "# id,burst,arrival\n\n1,2,3\n   \n# done\n";
        assert_eq!(parse_processes(input).unwrap().len(), 1);
    }

    #[test]
    fn test_column_count_error() {
        let err = parse_processes("1,2,3\n1,2\n").unwrap_err();
        assert!(matches!(err, LoadError::ColumnCount { line: 2, found: 2 }));
    }

    #[test]
    fn test_invalid_integer_error() {
        let err = parse_processes("1,abc,0").unwrap_err();
        match err {
            LoadError::InvalidInteger {
                line,
                column,
                value,
                ..
            } => {
                assert_eq!(line, 1);
                assert_eq!(column, "burst");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_values_parse() {
        // Range checks belong to validation, not loading.
        let processes = parse_processes("1,-3,-1").unwrap();
        assert_eq!(processes[0].burst, -3);
    }

    #[test]
    fn test_read_from_reader() {
        let processes = read_processes("3,1,0\n".as_bytes()).unwrap();
        assert_eq!(processes[0].id, 3);
    }

    #[test]
    fn test_missing_file() {
        let err = load_processes("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
