//! Fan characteristics.

use super::{enum_getter, enum_setter, int_getter, int_setter, observable};
use crate::characteristic::{
    Characteristic, CharacteristicType, CurrentFanState, LockPhysicalControls, RotationDirection,
    SwingMode, TargetFanState,
};
use crate::coercion;
use crate::tagged_item::TaggedItem;
use crate::translation;
use crate::updater::AccessoryUpdater;

/// Read-only fan state, taken from the numeric code held by the item.
pub fn create_current_fan_state(
    tagged: &TaggedItem,
    updater: &AccessoryUpdater,
) -> Characteristic {
    let tagged_item = tagged.clone();
    observable(CharacteristicType::CurrentFanState, tagged, updater).with_getter(move || {
        coercion::enum_from_code(&tagged_item.state(), CurrentFanState::Inactive)
    })
}

pub fn create_target_fan_state(tagged: &TaggedItem, updater: &AccessoryUpdater) -> Characteristic {
    let getter_item = tagged.clone();
    let setter_item = tagged.clone();
    observable(CharacteristicType::TargetFanState, tagged, updater)
        .with_getter(move || coercion::enum_from_code(&getter_item.state(), TargetFanState::Auto))
        .with_setter(move |state: TargetFanState| translation::set_enum_code(&setter_item, state))
}

pub fn create_rotation_direction(
    tagged: &TaggedItem,
    updater: &AccessoryUpdater,
) -> Characteristic {
    observable(CharacteristicType::RotationDirection, tagged, updater)
        .with_getter(enum_getter(
            tagged,
            RotationDirection::Clockwise,
            RotationDirection::CounterClockwise,
            RotationDirection::Clockwise,
        ))
        .with_setter(enum_setter(
            tagged,
            RotationDirection::Clockwise,
            RotationDirection::CounterClockwise,
        ))
}

pub fn create_rotation_speed(tagged: &TaggedItem, updater: &AccessoryUpdater) -> Characteristic {
    observable(CharacteristicType::RotationSpeed, tagged, updater)
        .with_getter(int_getter(tagged))
        .with_setter(int_setter(tagged))
}

pub fn create_swing_mode(tagged: &TaggedItem, updater: &AccessoryUpdater) -> Characteristic {
    observable(CharacteristicType::SwingMode, tagged, updater)
        .with_getter(enum_getter(
            tagged,
            SwingMode::SwingDisabled,
            SwingMode::SwingEnabled,
            SwingMode::SwingDisabled,
        ))
        .with_setter(enum_setter(
            tagged,
            SwingMode::SwingDisabled,
            SwingMode::SwingEnabled,
        ))
}

pub fn create_lock_physical_controls(
    tagged: &TaggedItem,
    updater: &AccessoryUpdater,
) -> Characteristic {
    observable(CharacteristicType::LockControl, tagged, updater)
        .with_getter(enum_getter(
            tagged,
            LockPhysicalControls::ControlLockDisabled,
            LockPhysicalControls::ControlLockEnabled,
            LockPhysicalControls::ControlLockDisabled,
        ))
        .with_setter(enum_setter(
            tagged,
            LockPhysicalControls::ControlLockDisabled,
            LockPhysicalControls::ControlLockEnabled,
        ))
}
