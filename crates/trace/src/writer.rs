//! Trace file writing.

use crate::{trace_file_name, TRACE_HEADER};
use commtrace_types::{Event, Rank, TraceSet};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::info;

/// Errors while writing trace files.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The output directory could not be created.
    #[error("failed to create trace directory {}: {source}", path.display())]
    CreateDir {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// A rank's file could not be written.
    #[error("failed to write trace for rank {rank} at {}: {source}", path.display())]
    RankFile {
        /// The rank whose file failed.
        rank: Rank,
        /// The target path of the failed file.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}

/// Writes one tabular file per rank into an output directory.
///
/// Files are written sequentially, one rank at a time, and atomically: each
/// rank's content goes to a temporary file in the output directory which is
/// then persisted to its final name. A failed run leaves earlier rank files
/// complete and nothing at the failing file's target path.
#[derive(Debug, Clone)]
pub struct TraceWriter {
    output_dir: PathBuf,

    /// Rank-file extension, resolved once when the writer is configured.
    file_ext: String,
}

impl TraceWriter {
    /// Create a writer targeting `output_dir` with the default extension.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            file_ext: crate::DEFAULT_FILE_EXT.to_string(),
        }
    }

    /// Set the rank-file extension.
    pub fn with_file_ext(mut self, ext: impl Into<String>) -> Self {
        self.file_ext = ext.into();
        self
    }

    /// Final path of one rank's file.
    pub fn rank_file_path(&self, rank: Rank) -> PathBuf {
        self.output_dir.join(trace_file_name(rank, &self.file_ext))
    }

    /// Write every rank's log, returning the paths written in rank order.
    ///
    /// The output directory is created if absent. Any failure is fatal and
    /// identifies the failing rank and path; no retries.
    pub fn write(&self, traces: &TraceSet) -> Result<Vec<PathBuf>, WriteError> {
        fs::create_dir_all(&self.output_dir).map_err(|source| WriteError::CreateDir {
            path: self.output_dir.clone(),
            source,
        })?;

        let mut written = Vec::with_capacity(traces.nranks() as usize);
        for (rank, events) in traces.iter() {
            let path = self.rank_file_path(rank);
            info!(
                %rank,
                events = events.len(),
                path = %path.display(),
                "writing rank trace"
            );
            self.write_rank_file(rank, events, &path)?;
            written.push(path);
        }

        Ok(written)
    }

    fn write_rank_file(&self, rank: Rank, events: &[Event], path: &Path) -> Result<(), WriteError> {
        let rank_file_error = |source: io::Error| WriteError::RankFile {
            rank,
            path: path.to_path_buf(),
            source,
        };

        let mut tmp = NamedTempFile::new_in(&self.output_dir).map_err(rank_file_error)?;
        {
            let mut out = BufWriter::new(tmp.as_file_mut());
            writeln!(out, "{TRACE_HEADER}").map_err(rank_file_error)?;
            for event in events {
                writeln!(
                    out,
                    "{}|{}|{}|{}|{}|{}|{}|{}",
                    event.rank,
                    event.peer,
                    event.timestep,
                    event.phase,
                    event.msg_id,
                    event.direction.wire_code(),
                    event.msg_sz,
                    event.timestamp
                )
                .map_err(rank_file_error)?;
            }
            out.flush().map_err(rank_file_error)?;
        }
        tmp.persist(path)
            .map_err(|persist| rank_file_error(persist.error))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commtrace_types::{Direction, Phase};
    use tempfile::TempDir;

    fn sample_traces() -> TraceSet {
        let mut traces = TraceSet::new(2);
        for (rank, peer, msg_id, direction, msg_sz) in [
            (0u32, 1u32, 0u32, Direction::Send, 1024u32),
            (1, 0, 0, Direction::Recv, 1024),
            (1, 0, 1, Direction::Send, 512),
            (0, 1, 1, Direction::Recv, 512),
        ] {
            let event = Event::new(
                Rank(rank),
                Rank(peer),
                0,
                Phase::BoundaryComm,
                msg_id,
                direction,
                msg_sz,
            )
            .unwrap();
            traces.append(event).unwrap();
        }
        traces
    }

    #[test]
    fn test_writes_expected_rows() {
        let dir = TempDir::new().unwrap();
        let writer = TraceWriter::new(dir.path());

        let paths = writer.write(&sample_traces()).unwrap();
        assert_eq!(paths.len(), 2);

        let rank0 = fs::read_to_string(&paths[0]).unwrap();
        assert_eq!(
            rank0,
            "rank|peer|timestep|phase|msg_id|send_or_recv|msg_sz|timestamp\n\
             0|1|0|BoundaryComm|0|0|1024|147001\n\
             0|1|0|BoundaryComm|1|1|512|147001\n"
        );

        let rank1 = fs::read_to_string(&paths[1]).unwrap();
        assert_eq!(
            rank1,
            "rank|peer|timestep|phase|msg_id|send_or_recv|msg_sz|timestamp\n\
             1|0|0|BoundaryComm|0|1|1024|147001\n\
             1|0|0|BoundaryComm|1|0|512|147001\n"
        );
    }

    #[test]
    fn test_file_naming_and_extension() {
        let dir = TempDir::new().unwrap();
        let writer = TraceWriter::new(dir.path()).with_file_ext("tab");

        let paths = writer.write(&sample_traces()).unwrap();
        assert!(paths[0].ends_with("msgs.0.tab"));
        assert!(paths[1].ends_with("msgs.1.tab"));
    }

    #[test]
    fn test_empty_logs_still_get_header_files() {
        let dir = TempDir::new().unwrap();
        let writer = TraceWriter::new(dir.path());

        let paths = writer.write(&TraceSet::new(3)).unwrap();
        assert_eq!(paths.len(), 3);
        for path in &paths {
            let content = fs::read_to_string(path).unwrap();
            assert_eq!(content, format!("{TRACE_HEADER}\n"));
        }
    }

    #[test]
    fn test_creates_missing_output_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("traces").join("ring");
        let writer = TraceWriter::new(&nested);

        writer.write(&sample_traces()).unwrap();
        assert!(nested.join("msgs.0.csv").exists());
    }

    #[test]
    fn test_no_temp_files_left_behind() {
        let dir = TempDir::new().unwrap();
        let writer = TraceWriter::new(dir.path());
        writer.write(&sample_traces()).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 2, "only the rank files should remain");
    }

    #[test]
    fn test_unwritable_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("occupied");
        fs::write(&blocker, b"not a directory").unwrap();

        // The target directory path exists as a regular file.
        let writer = TraceWriter::new(&blocker);
        let result = writer.write(&sample_traces());
        assert!(matches!(result, Err(WriteError::CreateDir { .. })));
    }
}
