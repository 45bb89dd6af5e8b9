//! Common status characteristics: name, battery, fault, tamper, active, obstruction.

use super::{active_getter, enum_getter, observable};
use crate::characteristic::{
    Characteristic, CharacteristicType, StatusFault, StatusLowBattery, StatusTampered,
};
use crate::coercion;
use crate::tagged_item::TaggedItem;
use crate::updater::AccessoryUpdater;

/// Read-only name, taken from the item's state text.
pub fn create_name(tagged: &TaggedItem, _updater: &AccessoryUpdater) -> Characteristic {
    let tagged = tagged.clone();
    Characteristic::new(CharacteristicType::Name)
        .with_getter(move || coercion::name_from_state(&tagged.state()))
}

pub fn create_status_low_battery(
    tagged: &TaggedItem,
    updater: &AccessoryUpdater,
) -> Characteristic {
    low_battery(CharacteristicType::BatteryLowStatus, tagged, updater)
}

/// Items still tagged `homekit:BatteryLowStatus`. Notifies under the
/// `BatteryLowStatus` tag.
pub fn create_legacy_status_low_battery(
    tagged: &TaggedItem,
    updater: &AccessoryUpdater,
) -> Characteristic {
    low_battery(CharacteristicType::OldBatteryLowStatus, tagged, updater)
}

fn low_battery(
    characteristic_type: CharacteristicType,
    tagged: &TaggedItem,
    updater: &AccessoryUpdater,
) -> Characteristic {
    Characteristic::new(characteristic_type)
        .with_subscriber(updater.subscriber(tagged, CharacteristicType::BatteryLowStatus))
        .with_getter(enum_getter(
            tagged,
            StatusLowBattery::Normal,
            StatusLowBattery::Low,
            StatusLowBattery::Normal,
        ))
}

pub fn create_status_fault(tagged: &TaggedItem, updater: &AccessoryUpdater) -> Characteristic {
    observable(CharacteristicType::FaultStatus, tagged, updater).with_getter(enum_getter(
        tagged,
        StatusFault::NoFault,
        StatusFault::GeneralFault,
        StatusFault::NoFault,
    ))
}

pub fn create_status_tampered(tagged: &TaggedItem, updater: &AccessoryUpdater) -> Characteristic {
    observable(CharacteristicType::TamperedStatus, tagged, updater).with_getter(enum_getter(
        tagged,
        StatusTampered::NotTampered,
        StatusTampered::Tampered,
        StatusTampered::NotTampered,
    ))
}

pub fn create_obstruction_detected(
    tagged: &TaggedItem,
    updater: &AccessoryUpdater,
) -> Characteristic {
    observable(CharacteristicType::ObstructionStatus, tagged, updater)
        .with_getter(active_getter(tagged))
}

pub fn create_status_active(tagged: &TaggedItem, updater: &AccessoryUpdater) -> Characteristic {
    observable(CharacteristicType::ActiveStatus, tagged, updater)
        .with_getter(active_getter(tagged))
}
