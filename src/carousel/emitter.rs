// SPDX-License-Identifier: MPL-2.0
//! Listener registry for carousel events.
//!
//! Each listener owns the receiving half of an unbounded channel. Emitting
//! is synchronous; a listener whose receiver was dropped is pruned on the
//! next emit of an event it subscribed to.

use super::EngineEvent;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Identifier of a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Receiving side of an engine subscription.
#[derive(Debug)]
pub struct Listener {
    id: ListenerId,
    receiver: UnboundedReceiver<EngineEvent>,
}

impl Listener {
    /// Returns the identifier used to unsubscribe.
    #[must_use]
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Takes every event queued since the last drain, oldest first.
    pub fn drain(&mut self) -> Vec<EngineEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.receiver.try_recv() {
            events.push(event);
        }
        events
    }

    /// Stops receiving and discards anything still queued.
    pub fn close(&mut self) {
        self.receiver.close();
        while self.receiver.try_recv().is_ok() {}
    }
}

#[derive(Debug)]
struct Slot {
    id: ListenerId,
    events: Vec<EngineEvent>,
    sender: UnboundedSender<EngineEvent>,
}

/// Registry of listeners owned by an engine.
#[derive(Debug, Default)]
pub struct Emitter {
    next_id: u64,
    slots: Vec<Slot>,
}

impl Emitter {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener for the given event kinds.
    pub fn subscribe(&mut self, events: &[EngineEvent]) -> Listener {
        let id = ListenerId(self.next_id);
        self.next_id += 1;

        let (sender, receiver) = mpsc::unbounded_channel();
        self.slots.push(Slot {
            id,
            events: events.to_vec(),
            sender,
        });

        Listener { id, receiver }
    }

    /// Removes a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.slots.len();
        self.slots.retain(|slot| slot.id != id);
        self.slots.len() != before
    }

    /// Delivers `event` to every listener subscribed to it.
    pub fn emit(&mut self, event: EngineEvent) {
        self.slots
            .retain(|slot| !slot.events.contains(&event) || slot.sender.send(event).is_ok());
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.slots.len()
    }
}
