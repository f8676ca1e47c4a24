#![cfg(feature = "std")]

//! Async host that owns a [`MatchRegistry`] on its own task.
//!
//! Commands from any number of connections are funnelled through one channel,
//! so each one is fully resolved before the next is looked at. Callers get
//! their [`Reply`] back on a oneshot channel.

use log::debug;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::protocol::{Command, Reply};
use crate::registry::MatchRegistry;

/// Pending commands buffered before senders wait.
const QUEUE_DEPTH: usize = 64;

struct Request {
    command: Command,
    reply: oneshot::Sender<Reply>,
}

/// Cloneable sender side of a running host.
#[derive(Clone)]
pub struct HostHandle {
    tx: mpsc::Sender<Request>,
}

impl HostHandle {
    /// Submit `command` and wait for the engine's reply.
    pub async fn send(&self, command: Command) -> anyhow::Result<Reply> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Request { command, reply })
            .await
            .map_err(|_| anyhow::anyhow!("Host has shut down"))?;
        rx.await
            .map_err(|_| anyhow::anyhow!("Host dropped the request"))
    }
}

/// Start the host task. It runs until every [`HostHandle`] is dropped and then
/// hands the registry back through the join handle.
pub fn spawn(mut registry: MatchRegistry) -> (HostHandle, JoinHandle<MatchRegistry>) {
    let (tx, mut rx) = mpsc::channel::<Request>(QUEUE_DEPTH);
    let task = tokio::spawn(async move {
        while let Some(Request { command, reply }) = rx.recv().await {
            debug!("host received {:?}", command);
            let result = registry.handle(command);
            // The caller may have given up waiting; the command still applied.
            let _ = reply.send(result);
        }
        registry
    });
    (HostHandle { tx }, task)
}
