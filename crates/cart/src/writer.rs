//! Serialized persistence writes.
//!
//! Every cart write flows through a single background task, so the order of
//! persisted writes always matches the order of mutations. Each queued
//! payload is the full serialized cart; consecutive pending payloads are
//! coalesced to the newest before touching storage.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};

use crate::storage::KeyValueStore;

enum Job {
    Write(String),
    Flush(oneshot::Sender<()>),
}

/// Handle to the background writer task.
#[derive(Debug)]
pub(crate) struct PersistWriter {
    tx: mpsc::UnboundedSender<Job>,
}

impl PersistWriter {
    /// Spawn the writer task for `key` on `store`.
    pub(crate) fn spawn(store: Arc<dyn KeyValueStore>, key: &'static str) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(run(store, key, rx));
        Self { tx }
    }

    /// Queue a payload write. Never blocks, never reports failure.
    pub(crate) fn enqueue(&self, payload: String) {
        if self.tx.send(Job::Write(payload)).is_err() {
            tracing::warn!("cart writer task is gone; dropping persistence write");
        }
    }

    /// Wait until every previously queued write has been attempted.
    pub(crate) async fn flush(&self) {
        let (ack, done) = oneshot::channel();
        if self.tx.send(Job::Flush(ack)).is_ok() {
            let _ = done.await;
        }
    }
}

async fn run(
    store: Arc<dyn KeyValueStore>,
    key: &'static str,
    mut rx: mpsc::UnboundedReceiver<Job>,
) {
    tracing::debug!("cart persistence writer started");

    while let Some(job) = rx.recv().await {
        match job {
            Job::Write(payload) => {
                let mut latest = payload;
                let mut acks = Vec::new();

                // Drain everything already queued; only the newest payload
                // needs to reach storage. Flushes popped here are acked
                // after the write they were queued behind.
                while let Ok(next) = rx.try_recv() {
                    match next {
                        Job::Write(payload) => latest = payload,
                        Job::Flush(ack) => acks.push(ack),
                    }
                }

                if let Err(error) = store.set(key, latest).await {
                    tracing::warn!(
                        "failed to persist cart, in-memory state stays ahead: {error}"
                    );
                }

                for ack in acks {
                    let _ = ack.send(());
                }
            }
            Job::Flush(ack) => {
                // Queue was empty up to this point; nothing to wait for.
                let _ = ack.send(());
            }
        }
    }

    tracing::debug!("cart persistence writer stopped");
}
