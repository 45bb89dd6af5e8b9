//! Window covering characteristics: hold position and tilt angles.

use super::{int_getter, int_setter, observable};
use crate::characteristic::{Characteristic, CharacteristicType};
use crate::tagged_item::TaggedItem;
use crate::translation;
use crate::updater::AccessoryUpdater;

/// Write-only: `true` asks the covering to stop where it is.
pub fn create_hold_position(tagged: &TaggedItem, _updater: &AccessoryUpdater) -> Characteristic {
    let tagged = tagged.clone();
    Characteristic::new(CharacteristicType::HoldPosition)
        .with_setter(move |hold: bool| translation::set_on_off(&tagged, hold))
}

pub fn create_current_horizontal_tilt_angle(
    tagged: &TaggedItem,
    updater: &AccessoryUpdater,
) -> Characteristic {
    observable(CharacteristicType::CurrentHorizontalTiltAngle, tagged, updater)
        .with_getter(int_getter(tagged))
}

pub fn create_current_vertical_tilt_angle(
    tagged: &TaggedItem,
    updater: &AccessoryUpdater,
) -> Characteristic {
    observable(CharacteristicType::CurrentVerticalTiltAngle, tagged, updater)
        .with_getter(int_getter(tagged))
}

pub fn create_target_horizontal_tilt_angle(
    tagged: &TaggedItem,
    updater: &AccessoryUpdater,
) -> Characteristic {
    observable(CharacteristicType::TargetHorizontalTiltAngle, tagged, updater)
        .with_getter(int_getter(tagged))
        .with_setter(int_setter(tagged))
}

pub fn create_target_vertical_tilt_angle(
    tagged: &TaggedItem,
    updater: &AccessoryUpdater,
) -> Characteristic {
    observable(CharacteristicType::TargetVerticalTiltAngle, tagged, updater)
        .with_getter(int_getter(tagged))
        .with_setter(int_setter(tagged))
}
