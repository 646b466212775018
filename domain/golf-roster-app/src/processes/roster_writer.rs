use std::sync::Arc;

use tokio::{
    sync::{mpsc, oneshot},
    task::JoinHandle,
};

use crate::{
    domain::{Team, ghost::GhostPlayer, roster::MatchRoster},
    ports::roster_store::RosterStorePort,
};

/// Persists roster and ghost snapshots in the background.
///
/// Callers hand over a snapshot and return immediately. Snapshots are written
/// one at a time in the order they were queued; when several of a kind are
/// waiting only the newest is written, so an older snapshot never lands after
/// a newer one.
#[async_trait::async_trait]
pub trait RosterWriter {
    fn enqueue_save(&self, roster: MatchRoster);
    fn enqueue_ghosts(&self, ghosts: Vec<GhostPlayer>);
    /// Resolves once every snapshot queued before the call has been written
    /// (or has failed and been logged).
    async fn flush(&self);
}

enum WriterCommand {
    Save(MatchRoster),
    SaveGhosts(Vec<GhostPlayer>),
    Flush(oneshot::Sender<()>),
}

pub struct RosterWriterImpl {
    sender: mpsc::UnboundedSender<WriterCommand>,
}

impl RosterWriterImpl {
    pub fn spawn<S: RosterStorePort + Send + Sync + 'static>(
        store: Arc<S>,
    ) -> (Self, JoinHandle<()>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let handle = tokio::spawn(Self::run(store, receiver));
        (Self { sender }, handle)
    }

    async fn run<S: RosterStorePort + Send + Sync + 'static>(
        store: Arc<S>,
        mut receiver: mpsc::UnboundedReceiver<WriterCommand>,
    ) {
        while let Some(command) = receiver.recv().await {
            let mut pending = None;
            let mut pending_ghosts = None;
            let mut waiters = Vec::new();
            let mut next = Some(command);
            while let Some(command) = next {
                match command {
                    WriterCommand::Save(roster) => pending = Some(roster),
                    WriterCommand::SaveGhosts(ghosts) => pending_ghosts = Some(ghosts),
                    WriterCommand::Flush(waiter) => waiters.push(waiter),
                }
                next = receiver.try_recv().ok();
            }

            // Ghosts go first so a stored roster never names an unknown ghost.
            if let Some(ghosts) = pending_ghosts {
                match store.save_ghosts(&ghosts).await {
                    Ok(()) => log::debug!("Saved {} ghosts", ghosts.len()),
                    Err(e) => log::error!("Failed to save ghosts: {}", e),
                }
            }

            if let Some(roster) = pending {
                match store.save_roster(&roster).await {
                    Ok(()) => log::debug!(
                        "Saved roster ({} red, {} blue)",
                        roster.team(Team::Red).len(),
                        roster.team(Team::Blue).len()
                    ),
                    Err(e) => log::error!("Failed to save roster: {}", e),
                }
            }

            for waiter in waiters {
                let _ = waiter.send(());
            }
        }
        log::debug!("Roster writer stopped");
    }
}

#[async_trait::async_trait]
impl RosterWriter for RosterWriterImpl {
    fn enqueue_save(&self, roster: MatchRoster) {
        if self.sender.send(WriterCommand::Save(roster)).is_err() {
            log::warn!("Roster writer is gone, dropping roster save");
        }
    }

    fn enqueue_ghosts(&self, ghosts: Vec<GhostPlayer>) {
        if self.sender.send(WriterCommand::SaveGhosts(ghosts)).is_err() {
            log::warn!("Roster writer is gone, dropping ghost save");
        }
    }

    async fn flush(&self) {
        let (tx, rx) = oneshot::channel();
        if self.sender.send(WriterCommand::Flush(tx)).is_err() {
            return;
        }
        let _ = rx.await;
    }
}
