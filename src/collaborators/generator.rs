use super::CollabError;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, BufReader, Lines};
use tokio::process::{Child, ChildStdout, Command};

/// Source of destination requests for one airport.
///
/// Opened once per airport with the total airport count and this airport's
/// zero-based index; the resulting stream yields one destination id per line
/// until the collaborator closes it.
#[async_trait]
pub trait DestinationGenerator: Send + Sync {
    async fn open(
        &self,
        airport_count: usize,
        airport_index: usize,
    ) -> Result<Box<dyn DestinationStream>, CollabError>;
}

/// Line stream produced by a [`DestinationGenerator`].
#[async_trait]
pub trait DestinationStream: Send {
    /// Next raw line of the stream, `Ok(None)` once it ends.
    async fn next_line(&mut self) -> Result<Option<String>, CollabError>;
}

/// Generator backed by an external process (the `flight_requests`
/// collaborator), invoked as `<cmd> <airport_count> <airport_index>`.
#[derive(Debug, Clone)]
pub struct ProcessDestinationGenerator {
    cmd: String,
}

impl ProcessDestinationGenerator {
    pub fn new(cmd: String) -> Self { Self { cmd } }
}

#[async_trait]
impl DestinationGenerator for ProcessDestinationGenerator {
    async fn open(
        &self,
        airport_count: usize,
        airport_index: usize,
    ) -> Result<Box<dyn DestinationStream>, CollabError> {
        let mut child = Command::new(&self.cmd)
            .arg(airport_count.to_string())
            .arg(airport_index.to_string())
            .stdout(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(CollabError::Spawn)?;
        let stdout = child.stdout.take().ok_or(CollabError::ClosedEarly)?;
        Ok(Box::new(ProcessStream {
            _child: child,
            lines: BufReader::new(stdout).lines(),
        }))
    }
}

/// Keeps the child alive for as long as its stdout is being read; dropping
/// the stream kills the process.
struct ProcessStream {
    _child: Child,
    lines: Lines<BufReader<ChildStdout>>,
}

#[async_trait]
impl DestinationStream for ProcessStream {
    async fn next_line(&mut self) -> Result<Option<String>, CollabError> {
        self.lines.next_line().await.map_err(CollabError::Io)
    }
}
