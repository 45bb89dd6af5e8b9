//! Characteristic factory.
//!
//! Maps every optional characteristic type to the builder that creates it.
//! Types without a builder (those that are mandatory on their service and
//! built by the accessory itself) are rejected with
//! [`BridgeError::UnsupportedCharacteristic`].

use crate::characteristic::{Characteristic, CharacteristicType};
use crate::characteristics::{air_quality, audio, fan, lightbulb, status, valve, window_covering};
use crate::error::{BridgeError, Result};
use crate::tagged_item::TaggedItem;
use crate::updater::AccessoryUpdater;
use log::{trace, warn};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Builds one characteristic for a tagged item.
pub type CharacteristicBuilder = fn(&TaggedItem, &AccessoryUpdater) -> Characteristic;

/// Registry from characteristic type to builder.
pub struct CharacteristicFactory {
    builders: HashMap<CharacteristicType, CharacteristicBuilder>,
}

impl CharacteristicFactory {
    pub fn new() -> Self {
        use CharacteristicType as T;

        let mut factory = Self {
            builders: HashMap::new(),
        };
        factory.register(T::Name, status::create_name);
        factory.register(T::BatteryLowStatus, status::create_status_low_battery);
        factory.register(T::OldBatteryLowStatus, status::create_legacy_status_low_battery);
        factory.register(T::FaultStatus, status::create_status_fault);
        factory.register(T::TamperedStatus, status::create_status_tampered);
        factory.register(T::ActiveStatus, status::create_status_active);
        factory.register(T::ObstructionStatus, status::create_obstruction_detected);
        factory.register(T::CarbonMonoxideLevel, air_quality::create_carbon_monoxide_level);
        factory.register(T::CarbonMonoxidePeakLevel, air_quality::create_carbon_monoxide_peak_level);
        factory.register(T::CarbonDioxideLevel, air_quality::create_carbon_dioxide_level);
        factory.register(T::CarbonDioxidePeakLevel, air_quality::create_carbon_dioxide_peak_level);
        factory.register(T::HoldPosition, window_covering::create_hold_position);
        factory.register(T::CurrentHorizontalTiltAngle, window_covering::create_current_horizontal_tilt_angle);
        factory.register(T::CurrentVerticalTiltAngle, window_covering::create_current_vertical_tilt_angle);
        factory.register(T::TargetHorizontalTiltAngle, window_covering::create_target_horizontal_tilt_angle);
        factory.register(T::TargetVerticalTiltAngle, window_covering::create_target_vertical_tilt_angle);
        factory.register(T::Hue, lightbulb::create_hue);
        factory.register(T::Brightness, lightbulb::create_brightness);
        factory.register(T::Saturation, lightbulb::create_saturation);
        factory.register(T::ColorTemperature, lightbulb::create_color_temperature);
        factory.register(T::CurrentFanState, fan::create_current_fan_state);
        factory.register(T::TargetFanState, fan::create_target_fan_state);
        factory.register(T::RotationDirection, fan::create_rotation_direction);
        factory.register(T::RotationSpeed, fan::create_rotation_speed);
        factory.register(T::SwingMode, fan::create_swing_mode);
        factory.register(T::LockControl, fan::create_lock_physical_controls);
        factory.register(T::Duration, valve::create_duration);
        factory.register(T::RemainingDuration, valve::create_remaining_duration);
        factory.register(T::Volume, audio::create_volume);
        factory
    }

    fn register(&mut self, characteristic_type: CharacteristicType, builder: CharacteristicBuilder) {
        self.builders.insert(characteristic_type, builder);
    }

    /// Process-wide factory instance.
    pub fn global() -> &'static Self {
        static FACTORY: OnceLock<CharacteristicFactory> = OnceLock::new();
        FACTORY.get_or_init(Self::new)
    }

    /// Builder registered for `characteristic_type`.
    pub fn resolve(&self, characteristic_type: CharacteristicType) -> Option<CharacteristicBuilder> {
        self.builders.get(&characteristic_type).copied()
    }

    /// Whether `characteristic_type` can be built by this factory.
    pub fn is_supported(&self, characteristic_type: CharacteristicType) -> bool {
        self.builders.contains_key(&characteristic_type)
    }

    /// All buildable characteristic types, in declaration order.
    pub fn supported_types(&self) -> Vec<CharacteristicType> {
        CharacteristicType::all()
            .filter(|characteristic_type| self.is_supported(*characteristic_type))
            .collect()
    }

    /// Create the characteristic the tagged item is annotated with.
    pub fn create_characteristic(
        &self,
        tagged: &TaggedItem,
        updater: &AccessoryUpdater,
    ) -> Result<Characteristic> {
        let characteristic_type = tagged.characteristic_type();
        match self.resolve(characteristic_type) {
            Some(build) => {
                trace!(
                    "[HomeKit] Creating {} for item {} of {}",
                    characteristic_type,
                    tagged.name(),
                    tagged.accessory_type()
                );
                Ok(build(tagged, updater))
            }
            None => {
                warn!(
                    "[HomeKit] Unsupported optional characteristic. Accessory type {}, characteristic type {}",
                    tagged.accessory_type(),
                    characteristic_type
                );
                Err(BridgeError::UnsupportedCharacteristic {
                    accessory_type: tagged.accessory_type(),
                    characteristic_type,
                })
            }
        }
    }
}

impl Default for CharacteristicFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a characteristic with the process-wide factory.
pub fn create_characteristic(
    tagged: &TaggedItem,
    updater: &AccessoryUpdater,
) -> Result<Characteristic> {
    CharacteristicFactory::global().create_characteristic(tagged, updater)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characteristic::CharacteristicValue;
    use crate::item::{Command, Hsb, Item, ItemKind, MemoryItem, State};
    use crate::tagged_item::AccessoryType;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn tagged(
        kind: ItemKind,
        state: State,
        characteristic_type: CharacteristicType,
    ) -> (Arc<MemoryItem>, TaggedItem) {
        let item = Arc::new(MemoryItem::with_state("Living_Room", kind, state));
        let tagged_item = TaggedItem::new(item.clone(), AccessoryType::Lighting, characteristic_type);
        (item, tagged_item)
    }

    #[test]
    fn test_every_optional_type_is_registered() {
        let factory = CharacteristicFactory::new();
        let supported = factory.supported_types();

        assert_eq!(supported.len(), CharacteristicType::all().count() - 2);
        assert!(!factory.is_supported(CharacteristicType::OnState));
        assert!(!factory.is_supported(CharacteristicType::BatteryLevel));
        for characteristic_type in supported {
            assert!(factory.resolve(characteristic_type).is_some());
        }
    }

    #[test]
    fn test_built_value_kind_matches_type() {
        let factory = CharacteristicFactory::new();
        let updater = AccessoryUpdater::new();

        for characteristic_type in factory.supported_types() {
            let (_item, tagged_item) = tagged(ItemKind::Number, State::UnDef, characteristic_type);
            let characteristic = factory
                .create_characteristic(&tagged_item, &updater)
                .unwrap();
            assert_eq!(characteristic.characteristic_type(), characteristic_type);
            assert_eq!(
                characteristic.value_kind(),
                characteristic_type.value_kind(),
                "{characteristic_type}"
            );
        }
    }

    #[test]
    fn test_unsupported_type_is_rejected() {
        let updater = AccessoryUpdater::new();
        let (_item, tagged_item) = tagged(ItemKind::Switch, State::ON, CharacteristicType::OnState);

        match create_characteristic(&tagged_item, &updater) {
            Err(BridgeError::UnsupportedCharacteristic {
                accessory_type,
                characteristic_type,
            }) => {
                assert_eq!(accessory_type, AccessoryType::Lighting);
                assert_eq!(characteristic_type, CharacteristicType::OnState);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_legacy_battery_tag_notifies_under_battery_low_status() {
        let updater = AccessoryUpdater::new();
        let legacy = CharacteristicType::from_tag("homekit:BatteryLowStatus").unwrap();
        let (_item, tagged_item) = tagged(ItemKind::Switch, State::ON, legacy);

        let characteristic = create_characteristic(&tagged_item, &updater).unwrap();
        assert_eq!(characteristic.characteristic_type(), legacy);
        let key = characteristic.subscribe(|| {}).unwrap();
        assert_eq!(key.tag(), "BatteryLowStatus");
    }

    #[tokio::test]
    async fn test_hue_write_guarded_by_item_kind() {
        let updater = AccessoryUpdater::new();

        let (dimmer, tagged_dimmer) =
            tagged(ItemKind::Dimmer, State::Percent(40.0), CharacteristicType::Hue);
        let hue = create_characteristic(&tagged_dimmer, &updater).unwrap();
        hue.write(CharacteristicValue::Double(120.0)).await.unwrap();
        assert!(dimmer.sent_commands().is_empty());

        let (color, tagged_color) = tagged(
            ItemKind::Color,
            State::Hsb(Hsb::new(0.0, 50.0, 40.0)),
            CharacteristicType::Hue,
        );
        let hue = create_characteristic(&tagged_color, &updater).unwrap();
        hue.write(CharacteristicValue::Double(120.0)).await.unwrap();
        assert_eq!(
            color.last_command(),
            Some(Command::Hsb(Hsb::new(120.0, 50.0, 40.0)))
        );
    }

    #[tokio::test]
    async fn test_unsubscribed_characteristic_is_not_notified() {
        let updater = AccessoryUpdater::new();
        let (item, tagged_item) = tagged(
            ItemKind::Number,
            State::Decimal(10.0),
            CharacteristicType::RotationSpeed,
        );
        let speed = create_characteristic(&tagged_item, &updater).unwrap();

        let count = Arc::new(AtomicU32::new(0));
        let inner = count.clone();
        speed
            .subscribe(move || {
                inner.fetch_add(1, Ordering::SeqCst);
            })
            .unwrap();

        item.set_state(State::Decimal(20.0));
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(speed.read().await.unwrap(), CharacteristicValue::Int(20));

        speed.unsubscribe().unwrap();
        item.set_state(State::Decimal(30.0));
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(updater.subscription_count(), 0);
    }
}
