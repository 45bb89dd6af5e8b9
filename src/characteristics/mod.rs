//! Characteristic builders.
//!
//! One builder per characteristic kind, grouped by the service family that
//! usually carries it. Every builder has the shape of
//! [`CharacteristicBuilder`](crate::factory::CharacteristicBuilder): it
//! composes a read accessor from [`coercion`](crate::coercion), an optional
//! write mutator from [`translation`](crate::translation) and a
//! subscribe/unsubscribe pair from the [`AccessoryUpdater`] into one
//! [`Characteristic`]. Builders hold no state beyond the closures they return.

pub mod air_quality;
pub mod audio;
pub mod fan;
pub mod lightbulb;
pub mod status;
pub mod valve;
pub mod window_covering;

use crate::characteristic::{Characteristic, CharacteristicEnum, CharacteristicType};
use crate::coercion;
use crate::tagged_item::TaggedItem;
use crate::translation;
use crate::updater::AccessoryUpdater;

/// Characteristic that notifies under its own tag.
fn observable(
    characteristic_type: CharacteristicType,
    tagged: &TaggedItem,
    updater: &AccessoryUpdater,
) -> Characteristic {
    Characteristic::new(characteristic_type)
        .with_subscriber(updater.subscriber(tagged, characteristic_type))
}

fn int_getter(tagged: &TaggedItem) -> impl Fn() -> i32 + Send + Sync + 'static {
    let tagged = tagged.clone();
    move || coercion::int_from_state(&tagged.state(), tagged.name())
}

fn int_setter(tagged: &TaggedItem) -> impl Fn(i32) + Send + Sync + 'static {
    let tagged = tagged.clone();
    move |value| translation::set_int(&tagged, value)
}

fn double_getter(tagged: &TaggedItem) -> impl Fn() -> f64 + Send + Sync + 'static {
    let tagged = tagged.clone();
    move || coercion::double_from_state(&tagged.state())
}

fn enum_getter<T: CharacteristicEnum>(
    tagged: &TaggedItem,
    off_value: T,
    on_value: T,
    default_value: T,
) -> impl Fn() -> T + Send + Sync + 'static {
    let tagged = tagged.clone();
    move || {
        coercion::enum_from_state(
            &tagged.state(),
            tagged.name(),
            off_value,
            on_value,
            default_value,
        )
    }
}

fn enum_setter<T: CharacteristicEnum>(
    tagged: &TaggedItem,
    off_value: T,
    on_value: T,
) -> impl Fn(T) + Send + Sync + 'static {
    let tagged = tagged.clone();
    move |value| translation::set_value_from_enum(&tagged, value, off_value, on_value)
}

fn active_getter(tagged: &TaggedItem) -> impl Fn() -> bool + Send + Sync + 'static {
    let tagged = tagged.clone();
    move || coercion::is_active_state(&tagged.state())
}
