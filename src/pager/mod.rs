// src/pager/mod.rs
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

use crate::schema::{Record, Value, TITLE_FIELDS, TITLE_PLACEHOLDER};

/// How a paging session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageOutcome {
    /// Nothing to show.
    Empty,
    /// Every record was shown.
    Finished,
    /// The user answered `q…` at a prompt.
    Quit,
    /// Input closed while waiting at a prompt.
    Interrupted,
}

/// Title shown by the pager: the first of `track_name`, `title`, `name` that
/// holds a non-empty, non-zero value, else the placeholder.
pub fn display_title(record: &Record) -> String {
    TITLE_FIELDS
        .iter()
        .filter_map(|key| record.get(key))
        .find(|v| !v.is_zero_or_empty())
        .map(Value::to_string)
        .unwrap_or_else(|| TITLE_PLACEHOLDER.to_string())
}

/// Field names as a bracketed list of single-quoted names, e.g.
/// `['track_name', 'track_id']`. A name containing `'` but no `"` is
/// double-quoted instead; otherwise `'` and `\` are backslash-escaped.
pub fn format_field_names<'a, I>(names: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let quoted: Vec<String> = names
        .into_iter()
        .map(|name| {
            if name.contains('\'') && !name.contains('"') {
                format!("\"{}\"", name.replace('\\', "\\\\"))
            } else {
                format!(
                    "'{}'",
                    name.replace('\\', "\\\\").replace('\'', "\\'")
                )
            }
        })
        .collect();
    format!("[{}]", quoted.join(", "))
}

/// One listing line, `index` being 1-based.
pub fn format_row(index: usize, record: &Record) -> String {
    let track_id = record.track_id().map(Value::to_string).unwrap_or_default();
    let duration = record
        .duration_ms()
        .map(Value::to_string)
        .unwrap_or_default();
    format!(
        "{:4}. {}  |  track_id: {}  |  duration_ms: {}",
        index,
        display_title(record),
        track_id,
        duration
    )
}

/// Write `records` to `output` `page_size` at a time, reading one answer from
/// `input` between pages. An empty answer shows the next page, anything
/// starting with `q` (any case) stops, end of input stops.
pub fn show_paginated<R: BufRead, W: Write>(
    records: &[Record],
    page_size: usize,
    mut input: R,
    mut output: W,
) -> Result<PageOutcome> {
    let total = records.len();
    if total == 0 {
        writeln!(output, "No songs to show.")?;
        return Ok(PageOutcome::Empty);
    }
    let page_size = page_size.max(1);

    let mut idx = 0;
    loop {
        let end = (idx + page_size).min(total);
        for (offset, record) in records[idx..end].iter().enumerate() {
            writeln!(output, "{}", format_row(idx + offset + 1, record))?;
        }
        idx = end;

        if idx >= total {
            writeln!(output, "-- End (shown {}/{})", total, total)?;
            return Ok(PageOutcome::Finished);
        }

        write!(
            output,
            "-- Showing {}/{}. Press Enter to see next {}, or type 'q' to quit: ",
            idx, total, page_size
        )?;
        output.flush()?;

        let mut answer = String::new();
        let read = input
            .read_line(&mut answer)
            .context("Failed to read pager input")?;
        if read == 0 {
            writeln!(output, "\n-- Input interrupted, exiting.")?;
            return Ok(PageOutcome::Interrupted);
        }
        if answer.trim().to_lowercase().starts_with('q') {
            writeln!(output, "-- Quitting pagination.")?;
            return Ok(PageOutcome::Quit);
        }
        debug!(shown = idx, total, "next page");
    }
}
