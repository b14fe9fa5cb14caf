use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Mutex, PoisonError};

/// Signal that the mirror's contents changed (clone or pull).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MirrorChanged;

/// Fan-out of [`MirrorChanged`] to any number of channel subscribers.
///
/// Each subscriber gets its own queue, so a slow consumer never loses an
/// event. Subscribers whose receiver was dropped are pruned on the next send.
#[derive(Debug, Default)]
pub struct ChangeNotifier {
    subscribers: Mutex<Vec<Sender<MirrorChanged>>>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> Receiver<MirrorChanged> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.lock().unwrap_or_else(PoisonError::into_inner).push(tx);
        rx
    }

    pub fn notify(&self) {
        let mut subscribers = self.subscribers.lock().unwrap_or_else(PoisonError::into_inner);
        subscribers.retain(|tx| tx.send(MirrorChanged).is_ok());
        tracing::debug!(subscribers = subscribers.len(), "mirror change delivered");
    }
}
