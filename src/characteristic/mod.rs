//! Protocol-side characteristic model.
//!
//! A [`Characteristic`] is what the accessory protocol layer talks to. It
//! exposes up to three capabilities:
//! - `read()`: pull the current value
//! - `write(value)`: push a value from the controller to the item
//! - `subscribe(callback)` / `unsubscribe()`: get told when the value changes
//!
//! Builders compose these from closures over a tagged item; the characteristic
//! itself holds no state of its own.

pub mod enums;
pub mod types;

pub use enums::{
    CharacteristicEnum, CurrentFanState, LockPhysicalControls, RotationDirection,
    StatusFault, StatusLowBattery, StatusTampered, SwingMode, TargetFanState,
};
pub use types::CharacteristicType;

use crate::error::{BridgeError, Result};
use crate::updater::{ChangeCallback, ChangeSubscriber, SubscriptionKey};
use std::fmt;
use std::sync::Arc;
use strum::Display;

/// Kind of value a characteristic operates on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum ValueKind {
    Bool,
    Int,
    Double,
    Enum,
    String,
}

/// Value exchanged with the protocol layer.
///
/// Enum values travel as their numeric code.
#[derive(Clone, Debug, PartialEq)]
pub enum CharacteristicValue {
    Bool(bool),
    Int(i32),
    Double(f64),
    Enum(u8),
    String(String),
}

impl CharacteristicValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            CharacteristicValue::Bool(_) => ValueKind::Bool,
            CharacteristicValue::Int(_) => ValueKind::Int,
            CharacteristicValue::Double(_) => ValueKind::Double,
            CharacteristicValue::Enum(_) => ValueKind::Enum,
            CharacteristicValue::String(_) => ValueKind::String,
        }
    }
}

impl fmt::Display for CharacteristicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacteristicValue::Bool(value) => write!(f, "{value}"),
            CharacteristicValue::Int(value) => write!(f, "{value}"),
            CharacteristicValue::Double(value) => write!(f, "{value}"),
            CharacteristicValue::Enum(code) => write!(f, "{code}"),
            CharacteristicValue::String(value) => f.write_str(value),
        }
    }
}

/// Rust types that map onto one [`ValueKind`].
pub trait ValueType: Sized + Send + 'static {
    const KIND: ValueKind;

    fn into_value(self) -> CharacteristicValue;

    /// Typed payload of `value`, or `None` when the value is of another kind
    /// or outside this type's value set.
    fn from_value(value: CharacteristicValue) -> Option<Self>;
}

impl ValueType for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn into_value(self) -> CharacteristicValue {
        CharacteristicValue::Bool(self)
    }

    fn from_value(value: CharacteristicValue) -> Option<Self> {
        match value {
            CharacteristicValue::Bool(value) => Some(value),
            _ => None,
        }
    }
}

impl ValueType for i32 {
    const KIND: ValueKind = ValueKind::Int;

    fn into_value(self) -> CharacteristicValue {
        CharacteristicValue::Int(self)
    }

    fn from_value(value: CharacteristicValue) -> Option<Self> {
        match value {
            CharacteristicValue::Int(value) => Some(value),
            _ => None,
        }
    }
}

impl ValueType for f64 {
    const KIND: ValueKind = ValueKind::Double;

    fn into_value(self) -> CharacteristicValue {
        CharacteristicValue::Double(self)
    }

    fn from_value(value: CharacteristicValue) -> Option<Self> {
        match value {
            CharacteristicValue::Double(value) => Some(value),
            _ => None,
        }
    }
}

impl ValueType for String {
    const KIND: ValueKind = ValueKind::String;

    fn into_value(self) -> CharacteristicValue {
        CharacteristicValue::String(self)
    }

    fn from_value(value: CharacteristicValue) -> Option<Self> {
        match value {
            CharacteristicValue::String(value) => Some(value),
            _ => None,
        }
    }
}

impl<T: CharacteristicEnum> ValueType for T {
    const KIND: ValueKind = ValueKind::Enum;

    fn into_value(self) -> CharacteristicValue {
        CharacteristicValue::Enum(self.code())
    }

    fn from_value(value: CharacteristicValue) -> Option<Self> {
        match value {
            CharacteristicValue::Enum(code) => T::from_code(code),
            _ => None,
        }
    }
}

type Getter = Box<dyn Fn() -> CharacteristicValue + Send + Sync>;
type Setter = Box<dyn Fn(CharacteristicValue) + Send + Sync>;

/// A single characteristic instance backed by one tagged item.
///
/// # Example
/// ```ignore
/// let brightness = Characteristic::new(CharacteristicType::Brightness)
///     .with_getter(move || coercion::brightness_from_state(&item.state()))
///     .with_subscriber(updater.subscriber(&tagged, CharacteristicType::Brightness));
/// ```
pub struct Characteristic {
    characteristic_type: CharacteristicType,
    value_kind: ValueKind,
    getter: Option<Getter>,
    setter: Option<Setter>,
    subscriber: Option<ChangeSubscriber>,
}

impl Characteristic {
    /// Create a characteristic without any capabilities.
    pub fn new(characteristic_type: CharacteristicType) -> Self {
        Self {
            characteristic_type,
            value_kind: characteristic_type.value_kind(),
            getter: None,
            setter: None,
            subscriber: None,
        }
    }

    /// Attach the read accessor.
    pub fn with_getter<V, F>(mut self, getter: F) -> Self
    where
        V: ValueType,
        F: Fn() -> V + Send + Sync + 'static,
    {
        debug_assert_eq!(V::KIND, self.characteristic_type.value_kind());
        self.value_kind = V::KIND;
        self.getter = Some(Box::new(move || getter().into_value()));
        self
    }

    /// Attach the write mutator.
    ///
    /// Values outside the payload type's value set (e.g. an unknown enum code)
    /// are logged and dropped.
    pub fn with_setter<V, F>(mut self, setter: F) -> Self
    where
        V: ValueType,
        F: Fn(V) + Send + Sync + 'static,
    {
        debug_assert_eq!(V::KIND, self.characteristic_type.value_kind());
        self.value_kind = V::KIND;
        let characteristic_type = self.characteristic_type;
        self.setter = Some(Box::new(move |value| {
            match V::from_value(value.clone()) {
                Some(typed) => setter(typed),
                None => log::warn!(
                    "[HomeKit] Value {} is not supported by {}. Ignoring write",
                    value,
                    characteristic_type
                ),
            }
        }));
        self
    }

    /// Attach change notification support.
    pub fn with_subscriber(mut self, subscriber: ChangeSubscriber) -> Self {
        self.subscriber = Some(subscriber);
        self
    }

    pub fn characteristic_type(&self) -> CharacteristicType {
        self.characteristic_type
    }

    pub fn value_kind(&self) -> ValueKind {
        self.value_kind
    }

    pub fn is_readable(&self) -> bool {
        self.getter.is_some()
    }

    pub fn is_writable(&self) -> bool {
        self.setter.is_some()
    }

    pub fn is_observable(&self) -> bool {
        self.subscriber.is_some()
    }

    /// Read the current value.
    pub async fn read(&self) -> Result<CharacteristicValue> {
        let getter = self
            .getter
            .as_ref()
            .ok_or(BridgeError::NotReadable(self.characteristic_type))?;
        Ok(getter())
    }

    /// Write a value coming from the controller.
    ///
    /// Returns once the command has been handed to the item; the item's
    /// acknowledgement is not awaited.
    pub async fn write(&self, value: CharacteristicValue) -> Result<()> {
        let setter = self
            .setter
            .as_ref()
            .ok_or(BridgeError::NotWritable(self.characteristic_type))?;
        if value.kind() != self.value_kind {
            return Err(BridgeError::ValueKindMismatch {
                characteristic_type: self.characteristic_type,
                expected: self.value_kind,
                actual: value.kind(),
            });
        }
        setter(value);
        Ok(())
    }

    /// Register `callback` to be invoked whenever the backing item changes.
    ///
    /// Subscribing again replaces the previous callback.
    pub fn subscribe<F>(&self, callback: F) -> Result<SubscriptionKey>
    where
        F: Fn() + Send + Sync + 'static,
    {
        let subscriber = self
            .subscriber
            .as_ref()
            .ok_or(BridgeError::NotObservable(self.characteristic_type))?;
        let callback: ChangeCallback = Arc::new(callback);
        Ok(subscriber.subscribe(callback))
    }

    /// Remove the change callback. Safe to call when nothing is subscribed.
    pub fn unsubscribe(&self) -> Result<()> {
        let subscriber = self
            .subscriber
            .as_ref()
            .ok_or(BridgeError::NotObservable(self.characteristic_type))?;
        subscriber.unsubscribe();
        Ok(())
    }
}

impl fmt::Debug for Characteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Characteristic")
            .field("characteristic_type", &self.characteristic_type)
            .field("value_kind", &self.value_kind)
            .field("readable", &self.is_readable())
            .field("writable", &self.is_writable())
            .field("observable", &self.is_observable())
            .finish()
    }
}
