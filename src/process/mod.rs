// src/process/mod.rs
use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};
use tracing::{debug, info, trace};

use crate::schema::{Header, Record};

pub mod convert;
pub mod tokenize;
pub mod utils;

/// Open the CSV at `path` and load every data row as a [`Record`].
///
/// Fails only when the file cannot be opened or read, or is not valid UTF-8;
/// the underlying `std::io::Error` is kept as the error's root cause.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

    let records = load_records_from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to read CSV file: {}", path.display()))?;

    info!(records = records.len(), "loaded records");
    Ok(records)
}

/// Same pipeline as [`load_records`] over any buffered reader:
/// - The first line is the header; no first line means no records.
/// - Blank (all-whitespace) lines are skipped.
/// - Every other line is tokenized, fitted to the header width, coerced and
///   turned into one record.
pub fn load_records_from_reader<R: BufRead>(mut reader: R) -> Result<Vec<Record>> {
    let mut line = String::new();
    if reader
        .read_line(&mut line)
        .context("Failed to read header line")?
        == 0
    {
        debug!("empty input, no header line");
        return Ok(Vec::new());
    }

    let header = Header::from_line(&line);
    debug!(columns = header.len(), names = ?header.names(), "parsed header");

    let mut records = Vec::new();
    let mut line_no = 1usize;
    loop {
        line.clear();
        let read = reader
            .read_line(&mut line)
            .with_context(|| format!("Failed to read line {}", line_no + 1))?;
        if read == 0 {
            break;
        }
        line_no += 1;

        if line.trim().is_empty() {
            trace!(line_no, "skipping blank line");
            continue;
        }
        records.push(parse_row(&header, &line, line_no));
    }

    Ok(records)
}

/// Turn one data line into a record shaped like `header`.
fn parse_row(header: &Header, line: &str, line_no: usize) -> Record {
    let values = tokenize::parse_csv_line(line);
    if values.len() != header.len() {
        debug!(
            line_no,
            expected = header.len(),
            found = values.len(),
            "ragged row; padding or folding overflow into last column"
        );
    }

    let values = utils::reconcile_fields(values, header.len());
    Record::from_row(header, convert::convert_row(&values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Value;
    use anyhow::Result;
    use std::collections::HashSet;
    use std::io::{self, Write};
    use tempfile::NamedTempFile;
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    fn init_test_logging() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("info,tracklist::process=debug")),
            )
            .with_test_writer()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    fn csv_file(content: &[u8]) -> Result<NamedTempFile> {
        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(content)?;
        tmp.flush()?;
        Ok(tmp)
    }

    fn root_io_kind(err: &anyhow::Error) -> Option<io::ErrorKind> {
        err.root_cause()
            .downcast_ref::<io::Error>()
            .map(io::Error::kind)
    }

    #[test]
    fn test_load_records_example() -> Result<()> {
        init_test_logging();
        let content = "\u{feff}track_name,track_id,duration_ms,album\r\n\
Love Story,1vrd6UOGamcKNGnSHJQlSt,235266,Fearless\r\n\
\"Ronan\",3Xp4p2GVS8BPpjxBdsPuDs,264146,\"Red (Taylor's Version)\"\r\n\
\"The Man, Live\",abc,190.5,\"He said \"\"hi\"\"\"\r\n";
        let tmp = csv_file(content.as_bytes())?;

        let records = load_records(tmp.path())?;
        assert_eq!(records.len(), 3);

        let first = &records[0];
        assert_eq!(
            first.names().collect::<Vec<_>>(),
            ["track_name", "track_id", "duration_ms", "album"]
        );
        assert_eq!(first.title(), Some(&Value::from("Love Story")));
        assert_eq!(first.duration_ms(), Some(&Value::Integer(235266)));
        assert_eq!(first.get("album"), Some(&Value::from("Fearless")));

        assert_eq!(
            records[1].get("album"),
            Some(&Value::from("Red (Taylor's Version)"))
        );
        assert_eq!(records[2].title(), Some(&Value::from("The Man, Live")));
        assert_eq!(records[2].duration_ms(), Some(&Value::Float(190.5)));
        assert_eq!(records[2].get("album"), Some(&Value::from("He said \"hi\"")));
        Ok(())
    }

    #[test]
    fn test_padding_short_row() -> Result<()> {
        let records = load_records_from_reader("a,b,c\n1,2\n".as_bytes())?;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("a"), Some(&Value::Integer(1)));
        assert_eq!(records[0].get("b"), Some(&Value::Integer(2)));
        assert_eq!(records[0].get("c"), Some(&Value::from("")));
        Ok(())
    }

    #[test]
    fn test_overflow_collapses_into_last_column() -> Result<()> {
        let records = load_records_from_reader("a,b\n1,2,3,4\n".as_bytes())?;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("a"), Some(&Value::Integer(1)));
        assert_eq!(records[0].get("b"), Some(&Value::from("2,3,4")));
        Ok(())
    }

    #[test]
    fn test_every_record_matches_header_shape() -> Result<()> {
        let content = "x, y ,z\n1\n1,2\n1,2,3\n1,2,3,4,5\n,,,,,,\n";
        let records = load_records_from_reader(content.as_bytes())?;
        assert_eq!(records.len(), 5);

        let header: HashSet<&str> = ["x", "y", "z"].into_iter().collect();
        for r in &records {
            let names: HashSet<&str> = r.names().collect();
            assert_eq!(names, header);
        }
        Ok(())
    }

    #[test]
    fn test_blank_lines_are_skipped() -> Result<()> {
        let content = "n,v\n\nfirst,1\n   \n\t\r\nsecond,2\n\n";
        let records = load_records_from_reader(content.as_bytes())?;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("n"), Some(&Value::from("first")));
        assert_eq!(records[1].get("n"), Some(&Value::from("second")));
        assert_eq!(records[1].get("v"), Some(&Value::Integer(2)));
        Ok(())
    }

    #[test]
    fn test_last_line_without_terminator() -> Result<()> {
        let records = load_records_from_reader("a,b\n1,two".as_bytes())?;
        assert_eq!(records[0].get("b"), Some(&Value::from("two")));
        Ok(())
    }

    #[test]
    fn test_header_only_yields_no_records() -> Result<()> {
        let records = load_records_from_reader("a,b,c\n".as_bytes())?;
        assert!(records.is_empty());
        Ok(())
    }

    #[test]
    fn test_empty_file() -> Result<()> {
        let tmp = csv_file(b"")?;
        let records = load_records(tmp.path())?;
        assert!(records.is_empty());
        Ok(())
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_records(dir.path().join("nope.csv")).unwrap_err();
        assert_eq!(root_io_kind(&err), Some(io::ErrorKind::NotFound));
        assert!(err.to_string().contains("nope.csv"));
    }

    #[test]
    fn test_invalid_utf8_is_decoding_error() -> Result<()> {
        let tmp = csv_file(b"a,b\n1,\xff\xfe\n")?;
        let err = load_records(tmp.path()).unwrap_err();
        assert_eq!(root_io_kind(&err), Some(io::ErrorKind::InvalidData));
        Ok(())
    }
}
