//! Speaker characteristics.

use super::{int_getter, int_setter, observable};
use crate::characteristic::{Characteristic, CharacteristicType};
use crate::tagged_item::TaggedItem;
use crate::updater::AccessoryUpdater;

/// Volume in percent.
pub fn create_volume(tagged: &TaggedItem, updater: &AccessoryUpdater) -> Characteristic {
    observable(CharacteristicType::Volume, tagged, updater)
        .with_getter(int_getter(tagged))
        .with_setter(int_setter(tagged))
}
