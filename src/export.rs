use anyhow::{Context, Result};
use std::{
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};
use tracing::{debug, info};

use crate::schema::Record;

/// Write `records` to `path` as a pretty-printed JSON array of objects, field
/// order preserved.
///
/// Written to a hidden temp file next to `path` and renamed over it. On any
/// failure the temp file is removed and `path` is left as it was.
pub fn write_json<P: AsRef<Path>>(records: &[Record], path: P) -> Result<()> {
    let path = path.as_ref();
    let file_name = path
        .file_name()
        .with_context(|| format!("export path has no file name: {}", path.display()))?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let tmp_path = dir.join(format!(".{}.tmp", file_name.to_string_lossy()));

    let written = write_tmp(records, &tmp_path).and_then(|()| {
        fs::rename(&tmp_path, path).with_context(|| {
            format!("renaming {} -> {}", tmp_path.display(), path.display())
        })
    });
    if let Err(e) = written {
        if let Err(rm) = fs::remove_file(&tmp_path) {
            debug!(path = %tmp_path.display(), error = %rm, "temp file not removed");
        }
        return Err(e);
    }

    info!(records = records.len(), path = %path.display(), "exported JSON");
    Ok(())
}

fn write_tmp(records: &[Record], tmp_path: &Path) -> Result<()> {
    let file = fs::File::create(tmp_path)
        .with_context(|| format!("creating {}", tmp_path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records).context("serializing records to JSON")?;
    writer.write_all(b"\n")?;
    writer
        .into_inner()
        .map_err(|e| e.into_error())
        .with_context(|| format!("flushing {}", tmp_path.display()))?;
    Ok(())
}
