//! Items annotated with the accessory role they play.

use crate::characteristic::CharacteristicType;
use crate::item::{Command, Hsb, Item, ItemKind, State};
use log::warn;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use strum::{Display, EnumString};

/// Configuration key holding the default valve duration in seconds.
pub const CONFIG_DEFAULT_DURATION: &str = "homekitDefaultDuration";

/// Accessory the tagged item belongs to. Only used for diagnostics here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString)]
pub enum AccessoryType {
    Lighting,
    Fan,
    Valve,
    WindowCovering,
    Speaker,
    Switch,
    Outlet,
    Lock,
    Thermostat,
    ContactSensor,
    LeakSensor,
    MotionSensor,
    OccupancySensor,
    SmokeSensor,
    CarbonMonoxideSensor,
    CarbonDioxideSensor,
    TemperatureSensor,
    HumiditySensor,
    SecuritySystem,
}

/// One channel of a color command routed through [`TaggedItem::send_command_proxy`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorChannel {
    /// Hue in degrees.
    Hue(f64),
    /// Saturation in percent.
    Saturation(f64),
    /// Brightness in percent.
    Brightness(f64),
}

/// An item plus the characteristic it backs and its extra configuration.
///
/// Cheap to clone: the item and configuration are shared.
#[derive(Clone)]
pub struct TaggedItem {
    item: Arc<dyn Item>,
    accessory_type: AccessoryType,
    characteristic_type: CharacteristicType,
    configuration: Arc<HashMap<String, Value>>,
}

impl TaggedItem {
    pub fn new(
        item: Arc<dyn Item>,
        accessory_type: AccessoryType,
        characteristic_type: CharacteristicType,
    ) -> Self {
        Self {
            item,
            accessory_type,
            characteristic_type,
            configuration: Arc::new(HashMap::new()),
        }
    }

    /// Add a configuration entry.
    pub fn with_configuration(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        Arc::make_mut(&mut self.configuration).insert(key.into(), value.into());
        self
    }

    pub fn item(&self) -> &Arc<dyn Item> {
        &self.item
    }

    pub fn name(&self) -> &str {
        self.item.name()
    }

    pub fn kind(&self) -> ItemKind {
        self.item.kind()
    }

    /// Snapshot of the backing item's state.
    pub fn state(&self) -> State {
        self.item.state()
    }

    pub fn accessory_type(&self) -> AccessoryType {
        self.accessory_type
    }

    pub fn characteristic_type(&self) -> CharacteristicType {
        self.characteristic_type
    }

    /// Named value from the item's configuration map.
    pub fn configuration(&self, key: &str) -> Option<&Value> {
        self.configuration.get(key)
    }

    /// Send one color channel to the item.
    ///
    /// On a color item the channel is merged into the current color so the
    /// other two channels are kept; a plain dimmer only takes brightness.
    pub fn send_command_proxy(&self, channel: ColorChannel) {
        match self.kind() {
            ItemKind::Color => {
                let current = match self.state() {
                    State::Hsb(hsb) => hsb,
                    _ => Hsb::default(),
                };
                let next = match channel {
                    ColorChannel::Hue(hue) => current.with_hue(hue),
                    ColorChannel::Saturation(saturation) => current.with_saturation(saturation),
                    ColorChannel::Brightness(brightness) => current.with_brightness(brightness),
                };
                self.item.send(Command::Hsb(next));
            }
            ItemKind::Dimmer => match channel {
                ColorChannel::Brightness(brightness) => {
                    self.item.send(Command::Percent(brightness))
                }
                other => warn!(
                    "[HomeKit] Dimmer item {} cannot take color command {:?}",
                    self.name(),
                    other
                ),
            },
            kind => warn!(
                "[HomeKit] Item type {} is not supported for color command {:?} on {}",
                kind,
                channel,
                self.name()
            ),
        }
    }
}

impl fmt::Debug for TaggedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaggedItem")
            .field("item", &self.name())
            .field("kind", &self.kind())
            .field("accessory_type", &self.accessory_type)
            .field("characteristic_type", &self.characteristic_type)
            .field("configuration", &self.configuration)
            .finish()
    }
}
