//! Lighting characteristics: hue, saturation, brightness and color temperature.

use super::{int_getter, int_setter, observable};
use crate::characteristic::{Characteristic, CharacteristicType};
use crate::coercion;
use crate::tagged_item::TaggedItem;
use crate::translation;
use crate::updater::AccessoryUpdater;

pub fn create_hue(tagged: &TaggedItem, updater: &AccessoryUpdater) -> Characteristic {
    let getter_item = tagged.clone();
    let setter_item = tagged.clone();
    observable(CharacteristicType::Hue, tagged, updater)
        .with_getter(move || coercion::hue_from_state(&getter_item.state()))
        .with_setter(move |hue: f64| translation::set_hue(&setter_item, hue))
}

pub fn create_saturation(tagged: &TaggedItem, updater: &AccessoryUpdater) -> Characteristic {
    let getter_item = tagged.clone();
    let setter_item = tagged.clone();
    observable(CharacteristicType::Saturation, tagged, updater)
        .with_getter(move || coercion::saturation_from_state(&getter_item.state()))
        .with_setter(move |saturation: f64| translation::set_saturation(&setter_item, saturation))
}

/// Brightness of a color or dimmer item.
pub fn create_brightness(tagged: &TaggedItem, updater: &AccessoryUpdater) -> Characteristic {
    let getter_item = tagged.clone();
    let setter_item = tagged.clone();
    observable(CharacteristicType::Brightness, tagged, updater)
        .with_getter(move || coercion::brightness_from_state(&getter_item.state()))
        .with_setter(move |brightness: i32| translation::set_brightness(&setter_item, brightness))
}

/// Color temperature in mireds, carried by a number item.
pub fn create_color_temperature(
    tagged: &TaggedItem,
    updater: &AccessoryUpdater,
) -> Characteristic {
    observable(CharacteristicType::ColorTemperature, tagged, updater)
        .with_getter(int_getter(tagged))
        .with_setter(int_setter(tagged))
}
