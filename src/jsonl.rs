//! JSON Lines export of notices.
//!
//! One notice per line, optionally gzip-compressed (`*.jsonl.gz`), which is
//! the layout downstream indexing consumes.
//!
//! # Examples
//!
//! ```
//! use sudoc_notice::{jsonl, parse_notice, NoticeConfig};
//!
//! let notice = parse_notice("1", "<record/>", &NoticeConfig::default())?;
//! let mut buffer = Vec::new();
//! jsonl::write_notices(&mut buffer, &[notice])?;
//! assert!(buffer.ends_with(b"\n"));
//! # Ok::<(), sudoc_notice::NoticeError>(())
//! ```

use crate::error::Result;
use crate::notice::Notice;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::{BufRead, Write};

/// Write notices as JSON Lines. Returns the number of lines written.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_notices<W: Write>(mut writer: W, notices: &[Notice]) -> Result<usize> {
    for notice in notices {
        serde_json::to_writer(&mut writer, notice)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(notices.len())
}

/// Write notices as gzip-compressed JSON Lines.
///
/// # Errors
///
/// Returns an error if serialization, compression or writing fails.
pub fn write_notices_gz<W: Write>(writer: W, notices: &[Notice]) -> Result<usize> {
    let mut encoder = GzEncoder::new(writer, Compression::default());
    let written = write_notices(&mut encoder, notices)?;
    encoder.finish()?;
    Ok(written)
}

/// Read notices back from JSON Lines, skipping blank lines.
///
/// # Errors
///
/// Returns an error if a line cannot be read or is not a notice.
pub fn read_notices<R: BufRead>(reader: R) -> Result<Vec<Notice>> {
    let mut notices = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        notices.push(serde_json::from_str(&line)?);
    }
    Ok(notices)
}
