//! Home-automation item model.
//!
//! The item runtime (registry, persistence, event bus) lives outside this crate.
//! This module defines the narrow interface the bridge needs from it:
//! - read a snapshot of an item's state
//! - send a command to an item
//! - update an item's local state
//! - receive state change notifications
//!
//! [`MemoryItem`] is an in-process implementation used by the demo binary and tests.

pub mod command;
pub mod memory;
pub mod state;

pub use command::Command;
pub use memory::MemoryItem;
pub use state::{Hsb, OnOff, OpenClosed, State};

use std::sync::Arc;
use strum::Display;

/// Item type tag.
///
/// Replaces runtime subtype checks: mutators match on the kind once to decide
/// whether the item accepts the command they would send.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum ItemKind {
    Switch,
    Contact,
    Number,
    Dimmer,
    Color,
    String,
    Rollershutter,
}

impl ItemKind {
    /// Whether the item accepts percent (brightness) commands.
    ///
    /// Color items are dimmers too.
    pub fn is_dimmer(self) -> bool {
        matches!(self, ItemKind::Dimmer | ItemKind::Color)
    }
}

/// Receives state change events from the item runtime.
///
/// Implementations must not block; they are called on whatever thread
/// applied the state update.
pub trait StateChangeListener: Send + Sync {
    fn state_changed(&self, item: &str, old: &State, new: &State);
}

/// An item owned by the home-automation runtime.
pub trait Item: Send + Sync {
    /// Unique item name (the item identity).
    fn name(&self) -> &str;

    fn kind(&self) -> ItemKind;

    /// Snapshot of the current state.
    fn state(&self) -> State;

    /// Update the item's state without issuing a command.
    fn set_state(&self, state: State);

    /// Send a command to the item. Does not wait for the item to react.
    fn send(&self, command: Command);

    /// Register a listener for state changes of this item.
    fn add_state_listener(&self, listener: Arc<dyn StateChangeListener>);

    /// Remove a listener previously added with `add_state_listener`.
    fn remove_state_listener(&self, listener: &Arc<dyn StateChangeListener>);
}
