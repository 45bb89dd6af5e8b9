//! Carbon monoxide and carbon dioxide level characteristics.
//!
//! All four are read-only doubles that subscribe under their own tag.

use super::{double_getter, observable};
use crate::characteristic::{Characteristic, CharacteristicType};
use crate::tagged_item::TaggedItem;
use crate::updater::AccessoryUpdater;

fn level(
    characteristic_type: CharacteristicType,
    tagged: &TaggedItem,
    updater: &AccessoryUpdater,
) -> Characteristic {
    observable(characteristic_type, tagged, updater).with_getter(double_getter(tagged))
}

pub fn create_carbon_monoxide_level(
    tagged: &TaggedItem,
    updater: &AccessoryUpdater,
) -> Characteristic {
    level(CharacteristicType::CarbonMonoxideLevel, tagged, updater)
}

pub fn create_carbon_monoxide_peak_level(
    tagged: &TaggedItem,
    updater: &AccessoryUpdater,
) -> Characteristic {
    level(CharacteristicType::CarbonMonoxidePeakLevel, tagged, updater)
}

pub fn create_carbon_dioxide_level(
    tagged: &TaggedItem,
    updater: &AccessoryUpdater,
) -> Characteristic {
    level(CharacteristicType::CarbonDioxideLevel, tagged, updater)
}

pub fn create_carbon_dioxide_peak_level(
    tagged: &TaggedItem,
    updater: &AccessoryUpdater,
) -> Characteristic {
    level(CharacteristicType::CarbonDioxidePeakLevel, tagged, updater)
}
