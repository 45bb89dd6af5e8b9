//! In-memory item implementation.
//!
//! Provides thread-safe item state that can be updated from any thread
//! (simulation tasks, tests) and read by characteristics.
//!
//! Every command sent to the item is recorded so callers can inspect what
//! the bridge asked the item to do.

use super::{Command, Item, ItemKind, State, StateChangeListener};
use parking_lot::RwLock;
use std::sync::Arc;

/// Thread-safe item backed by process memory.
///
/// State changes are pushed to registered listeners only when the new state
/// differs from the old one.
///
/// # Example
/// ```ignore
/// let item = Arc::new(MemoryItem::new("Fan_Speed", ItemKind::Number));
/// item.set_state(State::Decimal(40.0));
/// assert_eq!(item.state(), State::Decimal(40.0));
/// ```
pub struct MemoryItem {
    name: String,
    kind: ItemKind,
    state: RwLock<State>,
    sent: RwLock<Vec<Command>>,
    listeners: RwLock<Vec<Arc<dyn StateChangeListener>>>,
}

impl MemoryItem {
    /// Create a new item with an undefined state.
    pub fn new(name: impl Into<String>, kind: ItemKind) -> Self {
        Self::with_state(name, kind, State::UnDef)
    }

    /// Create a new item with the given initial state.
    pub fn with_state(name: impl Into<String>, kind: ItemKind, state: State) -> Self {
        Self {
            name: name.into(),
            kind,
            state: RwLock::new(state),
            sent: RwLock::new(Vec::new()),
            listeners: RwLock::new(Vec::new()),
        }
    }

    /// Commands sent to this item so far, oldest first.
    pub fn sent_commands(&self) -> Vec<Command> {
        self.sent.read().clone()
    }

    /// Most recent command sent to this item.
    pub fn last_command(&self) -> Option<Command> {
        self.sent.read().last().cloned()
    }
}

impl Item for MemoryItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ItemKind {
        self.kind
    }

    fn state(&self) -> State {
        self.state.read().clone()
    }

    fn set_state(&self, state: State) {
        let old = std::mem::replace(&mut *self.state.write(), state.clone());
        if old == state {
            return;
        }
        // Listeners run outside the state lock so they can read the item.
        let listeners = self.listeners.read().clone();
        for listener in listeners {
            listener.state_changed(&self.name, &old, &state);
        }
    }

    fn send(&self, command: Command) {
        log::debug!("[Item] {} received command {}", self.name, command);
        self.sent.write().push(command);
    }

    fn add_state_listener(&self, listener: Arc<dyn StateChangeListener>) {
        self.listeners.write().push(listener);
    }

    fn remove_state_listener(&self, listener: &Arc<dyn StateChangeListener>) {
        self.listeners
            .write()
            .retain(|registered| !std::ptr::addr_eq(Arc::as_ptr(registered), Arc::as_ptr(listener)));
    }
}
