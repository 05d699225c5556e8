use super::CollabError;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;

/// Performs the post-landing service step for one plane.
///
/// Produces exactly one human-readable confirmation line on completion.
#[async_trait]
pub trait PlaneServicer: Send + Sync {
    async fn service(&self, airport_id: u32, plane_id: u32) -> Result<String, CollabError>;
}

/// Servicer backed by an external process (the `plane_service`
/// collaborator), invoked as `<cmd> <airport_id> <plane_id>`.
#[derive(Debug, Clone)]
pub struct ProcessPlaneServicer {
    cmd: String,
}

impl ProcessPlaneServicer {
    pub fn new(cmd: String) -> Self { Self { cmd } }
}

#[async_trait]
impl PlaneServicer for ProcessPlaneServicer {
    async fn service(&self, airport_id: u32, plane_id: u32) -> Result<String, CollabError> {
        let mut child = Command::new(&self.cmd)
            .arg(airport_id.to_string())
            .arg(plane_id.to_string())
            .stdout(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(CollabError::Spawn)?;
        let stdout = child.stdout.take().ok_or(CollabError::ClosedEarly)?;
        let mut lines = BufReader::new(stdout).lines();
        let confirmation = lines
            .next_line()
            .await
            .map_err(CollabError::Io)?
            .ok_or(CollabError::ClosedEarly)?;
        let _ = child.wait().await;
        Ok(confirmation)
    }
}
