// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Webhook demultiplexer — spec.md §4.2.
//!
//! Fans a single ingress stream of job-completion events out to every
//! currently-registered Worker. Grounded on the teacher's `EventBus` /
//! `EventReader` split (`daemon/src/event_bus.rs`): a cheaply-`Clone`able
//! handle guarding shared state with `parking_lot::Mutex`, paired with a
//! consumer that drains an `mpsc` channel. Generalized here from one reader
//! to many: each registered listener gets its own dedicated forwarding task,
//! spawned once at `register` time, fed by an unbounded per-listener relay
//! the ingress loop pushes into without blocking. Because the relay has a
//! single producer (the ingress loop) and a single consumer (that listener's
//! forwarding task), events reach each listener strictly in ingress order —
//! the one-`tokio::spawn`-per-event scheme this replaced could race two
//! spawned deliveries to the same listener and reorder them. A slow or
//! stalled listener only backs up its own relay and forwarding task; it
//! never stalls the ingress consumer or any other listener.

use conduit_core::JobEvent;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Per-listener delivery buffer. Small: listeners are expected to keep up;
/// a listener that falls behind starves only itself, never the others.
const LISTENER_BUFFER: usize = 32;

/// Opaque handle returned by [`Demultiplexer::register`], passed back to
/// [`Demultiplexer::unregister`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Per-listener relay: the ingress loop's non-blocking hand-off into that
/// listener's dedicated forwarding task.
type Listeners = Arc<Mutex<Vec<(ListenerId, mpsc::UnboundedSender<JobEvent>)>>>;

/// Fan-out from the single webhook ingress to per-Worker event streams.
pub struct Demultiplexer {
    listeners: Listeners,
    webhook_url: Arc<str>,
    next_listener_id: AtomicU64,
    ingress_rx: Mutex<Option<mpsc::UnboundedReceiver<JobEvent>>>,
}

impl Demultiplexer {
    /// Build a demultiplexer and the ingress sender the webhook HTTP
    /// receiver (out of scope here) pushes decoded job events onto.
    pub fn new(webhook_url: impl Into<String>) -> (Arc<Self>, mpsc::UnboundedSender<JobEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let demux = Arc::new(Self {
            listeners: Arc::new(Mutex::new(Vec::new())),
            webhook_url: Arc::from(webhook_url.into()),
            next_listener_id: AtomicU64::new(1),
            ingress_rx: Mutex::new(Some(rx)),
        });
        (demux, tx)
    }

    /// Atomically register a new output stream; returns its id (for later
    /// `unregister`) and the receiving half of its private channel.
    ///
    /// Spawns the listener's dedicated forwarding task: it drains the
    /// unbounded relay in order and forwards each event to `tx`, blocking
    /// only itself if the listener is slow to read.
    pub fn register(&self) -> (ListenerId, mpsc::Receiver<JobEvent>) {
        let id = ListenerId(self.next_listener_id.fetch_add(1, Ordering::Relaxed));
        let (tx, rx) = mpsc::channel(LISTENER_BUFFER);
        let (relay_tx, mut relay_rx) = mpsc::unbounded_channel();
        self.listeners.lock().push((id, relay_tx));

        tokio::spawn(async move {
            while let Some(event) = relay_rx.recv().await {
                if tx.send(event).await.is_err() {
                    break;
                }
            }
        });

        (id, rx)
    }

    /// Atomically remove an output stream. A no-op if already removed —
    /// matches the "closed stream is equivalent to Unregister" rule.
    ///
    /// Dropping the relay sender here lets that listener's forwarding task
    /// drain whatever is already queued, then exit once `recv` sees the
    /// relay close.
    pub fn unregister(&self, id: ListenerId) {
        self.listeners.lock().retain(|(listener_id, _)| *listener_id != id);
    }

    /// The public URL job creators should attach to launched jobs so the
    /// runner posts completion here.
    pub fn webhook_url(&self) -> &str {
        &self.webhook_url
    }

    /// Begin consuming the ingress stream. Spawns the consumer task; a
    /// second call is a no-op (the receiver has already been taken).
    ///
    /// The loop itself never awaits a listener: it only hands each event off
    /// to every listener's unbounded relay, which is an instant, infallible
    /// push. Ordering per listener falls out of that relay having exactly
    /// one producer (this loop) and one consumer (the listener's forwarding
    /// task spawned in `register`).
    pub fn start(self: Arc<Self>) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ingress = match self.ingress_rx.lock().take() {
                Some(rx) => rx,
                None => return,
            };
            while let Some(event) = ingress.recv().await {
                let snapshot = self.listeners.lock().clone();
                let mut dead = Vec::new();
                for (id, relay_tx) in snapshot {
                    if relay_tx.send(event.clone()).is_err() {
                        // Forwarding task already exited (its listener closed).
                        dead.push(id);
                    }
                }
                for id in dead {
                    self.unregister(id);
                }
            }
        })
    }
}

#[cfg(test)]
#[path = "demultiplexer_tests.rs"]
mod tests;
