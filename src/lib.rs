//! HomeKit characteristic bridge library.
//!
//! Turns home-automation items into HomeKit characteristics: item states are
//! coerced into characteristic values on read, characteristic writes are
//! translated into item commands, and item state changes are fanned out to
//! characteristic subscribers.

pub mod characteristic;
pub mod characteristics;
pub mod coercion;
pub mod config;
pub mod error;
pub mod factory;
pub mod item;
pub mod simulation;
pub mod tagged_item;
pub mod translation;
pub mod updater;

pub use characteristic::{Characteristic, CharacteristicType, CharacteristicValue};
pub use error::{BridgeError, Result};
pub use factory::{CharacteristicFactory, create_characteristic};
pub use tagged_item::{AccessoryType, TaggedItem};
pub use updater::AccessoryUpdater;
