use crate::fleet::StatsSnapshot;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::watch;

/// Push side of the status observer boundary.
///
/// Counter snapshots go over a watch channel (only the latest value matters,
/// a slow observer just skips intermediate states), free-text progress
/// messages over an unbounded queue. Both are best-effort: send failures are
/// swallowed.
#[derive(Debug, Clone)]
pub struct StatusSink {
    stats_tx: watch::Sender<StatsSnapshot>,
    msg_tx: UnboundedSender<String>,
}

/// Receiving side, owned by the external status display.
#[derive(Debug)]
pub struct StatusFeed {
    pub stats_rx: watch::Receiver<StatsSnapshot>,
    pub msg_rx: UnboundedReceiver<String>,
}

impl StatusSink {
    pub fn channel() -> (Self, StatusFeed) {
        let (stats_tx, stats_rx) = watch::channel(StatsSnapshot::default());
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        (
            Self { stats_tx, msg_tx },
            StatusFeed { stats_rx, msg_rx },
        )
    }

    /// Publishes the latest counter snapshot, overwriting any unread one.
    pub fn publish_stats(&self, snapshot: StatsSnapshot) {
        let _ = self.stats_tx.send(snapshot);
    }

    /// Pushes a free-text progress message.
    pub fn report(&self, message: impl Into<String>) {
        let _ = self.msg_tx.send(message.into());
    }
}
