//! Trace file serialization for replay tooling.
//!
//! # File Format
//!
//! One file per rank, named `msgs.<rank>.<ext>`. Each file is a
//! pipe-delimited table with a fixed header row and no index column:
//!
//! ```text
//! rank|peer|timestep|phase|msg_id|send_or_recv|msg_sz|timestamp
//! 0|1|0|BoundaryComm|0|0|1024|147001
//! 1|0|0|BoundaryComm|0|1|1024|147001
//! ```
//!
//! `send_or_recv` is `0` for send and `1` for receive. Rows appear in
//! emission order; the replay benchmark depends on both the column order and
//! the file-name pattern.

mod reader;
mod writer;

pub use reader::{read_trace_file, ReadError};
pub use writer::{TraceWriter, WriteError};

use commtrace_types::Rank;

/// Column header row of every trace file.
pub const TRACE_HEADER: &str = "rank|peer|timestep|phase|msg_id|send_or_recv|msg_sz|timestamp";

/// Extension used when the writer is not configured with one.
pub const DEFAULT_FILE_EXT: &str = "csv";

/// File name carrying a rank's trace.
pub fn trace_file_name(rank: Rank, ext: &str) -> String {
    format!("msgs.{rank}.{ext}")
}
