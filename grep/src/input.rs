//! Splitting a byte stream into lines.

use crate::error::GrepError;
use std::io::{BufRead, BufReader, Read};

/// Reads `reader` to the end and returns its lines without terminators.
///
/// Both `\n` and `\r\n` endings are stripped, and a last line with no
/// terminator is kept. Invalid UTF-8 is replaced rather than rejected, so a
/// binary-ish file still yields lines to search.
pub fn read_lines(reader: &mut dyn Read, source_name: &str) -> Result<Vec<String>, GrepError> {
    let mut reader = BufReader::new(reader);
    let mut lines = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let bytes_read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| GrepError::Read {
                name: source_name.to_string(),
                source,
            })?;

        if bytes_read == 0 {
            break;
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }

        lines.push(String::from_utf8_lossy(&buf).into_owned());
    }

    Ok(lines)
}
