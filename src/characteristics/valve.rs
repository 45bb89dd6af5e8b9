//! Valve timer characteristics.

use super::{int_getter, int_setter, observable};
use crate::characteristic::{Characteristic, CharacteristicType};
use crate::coercion;
use crate::item::{ItemKind, State};
use crate::tagged_item::{CONFIG_DEFAULT_DURATION, TaggedItem};
use crate::updater::AccessoryUpdater;
use log::debug;

/// Set duration in seconds.
///
/// A zero duration falls back to the configured default. When the item is a
/// number item, its local state is updated to that default as well.
pub fn create_duration(tagged: &TaggedItem, updater: &AccessoryUpdater) -> Characteristic {
    let tagged_item = tagged.clone();
    observable(CharacteristicType::Duration, tagged, updater)
        .with_getter(move || duration(&tagged_item))
        .with_setter(int_setter(tagged))
}

pub fn create_remaining_duration(
    tagged: &TaggedItem,
    updater: &AccessoryUpdater,
) -> Characteristic {
    observable(CharacteristicType::RemainingDuration, tagged, updater)
        .with_getter(int_getter(tagged))
}

fn duration(tagged: &TaggedItem) -> i32 {
    let value = coercion::int_from_state(&tagged.state(), tagged.name());
    if value != 0 {
        return value;
    }
    let Some(default_duration) = tagged
        .configuration(CONFIG_DEFAULT_DURATION)
        .and_then(|value| value.as_f64())
        .map(|value| value as i32)
    else {
        return value;
    };
    if tagged.kind() == ItemKind::Number {
        debug!(
            "[HomeKit] Applying default duration {} to {}",
            default_duration,
            tagged.name()
        );
        tagged
            .item()
            .set_state(State::Decimal(f64::from(default_duration)));
    }
    default_duration
}
