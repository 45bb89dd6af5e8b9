//! Characteristic value to item command translation.
//!
//! Each mutator checks the item kind before sending. A kind that cannot take
//! the command means the accessory was configured with the wrong item type;
//! it is logged and the write is dropped.

use crate::characteristic::CharacteristicEnum;
use crate::item::{Command, ItemKind, OnOff};
use crate::tagged_item::{ColorChannel, TaggedItem};
use log::warn;

/// Send a two-valued enum.
///
/// Switch items receive `OFF`/`ON`, number items receive the enum's code.
/// Values other than `off_value` and `on_value` are not sent.
pub fn set_value_from_enum<T: CharacteristicEnum>(
    tagged: &TaggedItem,
    value: T,
    off_value: T,
    on_value: T,
) {
    if value != off_value && value != on_value {
        warn!(
            "[HomeKit] Enum value {:?} is not supported. Only following values are supported: {:?},{:?}",
            value, off_value, on_value
        );
        return;
    }
    match tagged.kind() {
        ItemKind::Switch => {
            let on_off = if value == off_value {
                OnOff::Off
            } else {
                OnOff::On
            };
            tagged.item().send(Command::OnOff(on_off));
        }
        ItemKind::Number => tagged.item().send(Command::Decimal(f64::from(value.code()))),
        kind => warn!(
            "[HomeKit] Item type {} is not supported. Only Switch and Number item types are supported.",
            kind
        ),
    }
}

/// Send an enum's code to a number item.
pub fn set_enum_code<T: CharacteristicEnum>(tagged: &TaggedItem, value: T) {
    match tagged.kind() {
        ItemKind::Number => tagged.item().send(Command::Decimal(f64::from(value.code()))),
        kind => warn_number_only(tagged, kind),
    }
}

/// Send an integer to a number item.
pub fn set_int(tagged: &TaggedItem, value: i32) {
    match tagged.kind() {
        ItemKind::Number => tagged.item().send(Command::Decimal(f64::from(value))),
        kind => warn_number_only(tagged, kind),
    }
}

/// Send `ON`/`OFF` to a switch item.
pub fn set_on_off(tagged: &TaggedItem, on: bool) {
    match tagged.kind() {
        ItemKind::Switch => tagged.item().send(Command::OnOff(OnOff::from(on))),
        kind => warn!(
            "[HomeKit] Item type {} is not supported for {}. Only Switch type is supported.",
            kind,
            tagged.name()
        ),
    }
}

/// Send a hue to a color item.
pub fn set_hue(tagged: &TaggedItem, hue: f64) {
    match tagged.kind() {
        ItemKind::Color => tagged.send_command_proxy(ColorChannel::Hue(hue)),
        kind => warn_color_only(tagged, kind),
    }
}

/// Send a saturation to a color item. Fractions are truncated.
pub fn set_saturation(tagged: &TaggedItem, saturation: f64) {
    match tagged.kind() {
        ItemKind::Color => {
            tagged.send_command_proxy(ColorChannel::Saturation(saturation.trunc()))
        }
        kind => warn_color_only(tagged, kind),
    }
}

/// Send a brightness to a dimmer or color item.
pub fn set_brightness(tagged: &TaggedItem, brightness: i32) {
    let kind = tagged.kind();
    if kind.is_dimmer() {
        tagged.send_command_proxy(ColorChannel::Brightness(f64::from(brightness)));
    } else {
        warn!(
            "[HomeKit] Item type {} is not supported for {}. Only ColorItem and DimmerItem are supported.",
            kind,
            tagged.name()
        );
    }
}

fn warn_number_only(tagged: &TaggedItem, kind: ItemKind) {
    warn!(
        "[HomeKit] Item type {} is not supported for {}. Only Number type is supported.",
        kind,
        tagged.name()
    );
}

fn warn_color_only(tagged: &TaggedItem, kind: ItemKind) {
    warn!(
        "[HomeKit] Item type {} is not supported for {}. Only Color type is supported.",
        kind,
        tagged.name()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characteristic::{CharacteristicType, RotationDirection, TargetFanState};
    use crate::item::{Hsb, Item, MemoryItem, State};
    use crate::tagged_item::AccessoryType;
    use std::sync::Arc;

    fn make_tagged(kind: ItemKind) -> (Arc<MemoryItem>, TaggedItem) {
        let item = Arc::new(MemoryItem::new("Test_Item", kind));
        let tagged = TaggedItem::new(
            item.clone(),
            AccessoryType::Fan,
            CharacteristicType::RotationDirection,
        );
        (item, tagged)
    }

    #[test]
    fn test_enum_to_switch() {
        let (item, tagged) = make_tagged(ItemKind::Switch);
        set_value_from_enum(
            &tagged,
            RotationDirection::CounterClockwise,
            RotationDirection::Clockwise,
            RotationDirection::CounterClockwise,
        );
        set_value_from_enum(
            &tagged,
            RotationDirection::Clockwise,
            RotationDirection::Clockwise,
            RotationDirection::CounterClockwise,
        );
        assert_eq!(
            item.sent_commands(),
            vec![Command::OnOff(OnOff::On), Command::OnOff(OnOff::Off)]
        );
    }

    #[test]
    fn test_enum_to_number() {
        let (item, tagged) = make_tagged(ItemKind::Number);
        set_value_from_enum(
            &tagged,
            RotationDirection::CounterClockwise,
            RotationDirection::Clockwise,
            RotationDirection::CounterClockwise,
        );
        assert_eq!(item.last_command(), Some(Command::Decimal(1.0)));
    }

    #[test]
    fn test_enum_outside_pair_is_not_sent() {
        let (item, tagged) = make_tagged(ItemKind::Number);
        // Both members of the pair are the same value here, so Auto is foreign.
        set_value_from_enum(
            &tagged,
            TargetFanState::Auto,
            TargetFanState::Manual,
            TargetFanState::Manual,
        );
        assert!(item.sent_commands().is_empty());
    }

    #[test]
    fn test_enum_to_unsupported_kind() {
        let (item, tagged) = make_tagged(ItemKind::Dimmer);
        set_value_from_enum(
            &tagged,
            RotationDirection::Clockwise,
            RotationDirection::Clockwise,
            RotationDirection::CounterClockwise,
        );
        assert!(item.sent_commands().is_empty());
    }

    #[test]
    fn test_set_int_requires_number() {
        let (item, tagged) = make_tagged(ItemKind::Number);
        set_int(&tagged, 45);
        assert_eq!(item.last_command(), Some(Command::Decimal(45.0)));

        let (item, tagged) = make_tagged(ItemKind::Switch);
        set_int(&tagged, 45);
        assert!(item.sent_commands().is_empty());
    }

    #[test]
    fn test_hue_write_to_non_color_item_is_noop() {
        let (item, tagged) = make_tagged(ItemKind::Dimmer);
        set_hue(&tagged, 120.0);
        assert!(item.sent_commands().is_empty());

        let (item, tagged) = make_tagged(ItemKind::Number);
        set_saturation(&tagged, 50.0);
        assert!(item.sent_commands().is_empty());
    }

    #[test]
    fn test_color_writes() {
        let (item, tagged) = make_tagged(ItemKind::Color);
        item.set_state(State::Hsb(Hsb::new(0.0, 0.0, 80.0)));

        set_hue(&tagged, 120.0);
        assert_eq!(
            item.last_command(),
            Some(Command::Hsb(Hsb::new(120.0, 0.0, 80.0)))
        );

        set_saturation(&tagged, 33.7);
        assert_eq!(
            item.last_command(),
            Some(Command::Hsb(Hsb::new(0.0, 33.0, 80.0)))
        );
    }

    #[test]
    fn test_brightness_requires_dimmer() {
        let (item, tagged) = make_tagged(ItemKind::Dimmer);
        set_brightness(&tagged, 40);
        assert_eq!(item.last_command(), Some(Command::Percent(40.0)));

        let (item, tagged) = make_tagged(ItemKind::Switch);
        set_brightness(&tagged, 40);
        assert!(item.sent_commands().is_empty());
    }

    #[test]
    fn test_set_on_off_requires_switch() {
        let (item, tagged) = make_tagged(ItemKind::Switch);
        set_on_off(&tagged, true);
        assert_eq!(item.last_command(), Some(Command::OnOff(OnOff::On)));

        let (item, tagged) = make_tagged(ItemKind::Contact);
        set_on_off(&tagged, true);
        assert!(item.sent_commands().is_empty());
    }

    #[test]
    fn test_set_enum_code() {
        let (item, tagged) = make_tagged(ItemKind::Number);
        set_enum_code(&tagged, TargetFanState::Auto);
        assert_eq!(item.last_command(), Some(Command::Decimal(1.0)));
    }
}
