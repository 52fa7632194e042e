//! Trace file parsing.

use crate::TRACE_HEADER;
use commtrace_types::{Direction, Event, Phase, Rank};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Errors while parsing a trace file.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The file could not be opened or read.
    #[error("failed to read trace file {}: {source}", path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// The file is empty.
    #[error("trace file {} is empty", path.display())]
    MissingHeader {
        /// The file being read.
        path: PathBuf,
    },

    /// The header row does not match the trace schema.
    #[error("trace file {} has unexpected header {found:?}", path.display())]
    BadHeader {
        /// The file being read.
        path: PathBuf,
        /// The header row found instead.
        found: String,
    },

    /// A data row could not be parsed.
    #[error("trace file {} line {line}: {reason}", path.display())]
    BadRow {
        /// The file being read.
        path: PathBuf,
        /// 1-based line number of the offending row.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },
}

/// Parse one rank's trace file back into its event sequence.
///
/// The header is validated and every row parsed strictly; row order in the
/// file is the order of the returned events.
pub fn read_trace_file(path: impl AsRef<Path>) -> Result<Vec<Event>, ReadError> {
    let path = path.as_ref();
    let io_error = |source: io::Error| ReadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    let mut lines = BufReader::new(file).lines();

    let header = match lines.next() {
        Some(line) => line.map_err(io_error)?,
        None => {
            return Err(ReadError::MissingHeader {
                path: path.to_path_buf(),
            })
        }
    };
    if header != TRACE_HEADER {
        return Err(ReadError::BadHeader {
            path: path.to_path_buf(),
            found: header,
        });
    }

    let mut events = Vec::new();
    for (idx, line) in lines.enumerate() {
        let line = line.map_err(io_error)?;
        let event = parse_row(&line).map_err(|reason| ReadError::BadRow {
            path: path.to_path_buf(),
            line: idx + 2,
            reason,
        })?;
        events.push(event);
    }

    Ok(events)
}

fn parse_row(line: &str) -> Result<Event, String> {
    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() != 8 {
        return Err(format!("expected 8 fields, found {}", fields.len()));
    }

    let rank = Rank(parse_field(fields[0], "rank")?);
    let peer = Rank(parse_field(fields[1], "peer")?);
    let timestep = parse_field(fields[2], "timestep")?;
    let phase =
        Phase::from_name(fields[3]).ok_or_else(|| format!("unknown phase {:?}", fields[3]))?;
    let msg_id = parse_field(fields[4], "msg_id")?;
    let code: u8 = parse_field(fields[5], "send_or_recv")?;
    let direction = Direction::from_wire_code(code)
        .ok_or_else(|| format!("unknown send_or_recv code {code}"))?;
    let msg_sz = parse_field(fields[6], "msg_sz")?;
    let timestamp = parse_field(fields[7], "timestamp")?;

    Event::from_parts(
        rank, peer, timestep, phase, msg_id, direction, msg_sz, timestamp,
    )
    .map_err(|e| e.to_string())
}

fn parse_field<T: FromStr>(raw: &str, name: &str) -> Result<T, String> {
    raw.parse()
        .map_err(|_| format!("invalid {name} field {raw:?}"))
}
