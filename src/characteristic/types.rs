//! Characteristic type identifiers.

use super::ValueKind;
use crate::error::BridgeError;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Characteristic type a tagged item can back.
///
/// Each type carries a stable string tag (its `Display` form) which is used
/// as the subscription key and in item metadata.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum CharacteristicType {
    // Mandatory characteristics (not created by the optional factory)
    #[strum(to_string = "OnState")]
    OnState,
    #[strum(to_string = "BatteryLevel")]
    BatteryLevel,

    // Optional characteristics
    #[strum(to_string = "Name")]
    Name,
    #[strum(to_string = "BatteryLowStatus")]
    BatteryLowStatus,
    #[strum(to_string = "homekit:BatteryLowStatus")]
    OldBatteryLowStatus,
    #[strum(to_string = "FaultStatus")]
    FaultStatus,
    #[strum(to_string = "TamperedStatus")]
    TamperedStatus,
    #[strum(to_string = "ActiveStatus")]
    ActiveStatus,
    #[strum(to_string = "ObstructionStatus")]
    ObstructionStatus,
    #[strum(to_string = "CarbonMonoxideLevel")]
    CarbonMonoxideLevel,
    #[strum(to_string = "CarbonMonoxidePeakLevel")]
    CarbonMonoxidePeakLevel,
    #[strum(to_string = "CarbonDioxideLevel")]
    CarbonDioxideLevel,
    #[strum(to_string = "CarbonDioxidePeakLevel")]
    CarbonDioxidePeakLevel,
    #[strum(to_string = "HoldPosition")]
    HoldPosition,
    #[strum(to_string = "CurrentHorizontalTiltAngle")]
    CurrentHorizontalTiltAngle,
    #[strum(to_string = "CurrentVerticalTiltAngle")]
    CurrentVerticalTiltAngle,
    #[strum(to_string = "TargetHorizontalTiltAngle")]
    TargetHorizontalTiltAngle,
    #[strum(to_string = "TargetVerticalTiltAngle")]
    TargetVerticalTiltAngle,
    #[strum(to_string = "Hue")]
    Hue,
    #[strum(to_string = "Brightness")]
    Brightness,
    #[strum(to_string = "Saturation")]
    Saturation,
    #[strum(to_string = "ColorTemperature")]
    ColorTemperature,
    #[strum(to_string = "CurrentFanState")]
    CurrentFanState,
    #[strum(to_string = "TargetFanState")]
    TargetFanState,
    #[strum(to_string = "RotationDirection")]
    RotationDirection,
    #[strum(to_string = "RotationSpeed")]
    RotationSpeed,
    #[strum(to_string = "SwingMode")]
    SwingMode,
    #[strum(to_string = "LockControl")]
    LockControl,
    #[strum(to_string = "Duration")]
    Duration,
    #[strum(to_string = "RemainingDuration")]
    RemainingDuration,
    #[strum(to_string = "Volume")]
    Volume,
}

impl CharacteristicType {
    /// Stable tag used for subscription keys.
    pub fn tag(self) -> &'static str {
        self.into()
    }

    /// Parse a characteristic type from its tag.
    pub fn from_tag(tag: &str) -> crate::error::Result<Self> {
        Self::from_str(tag).map_err(|_| BridgeError::UnknownCharacteristicTag(tag.to_string()))
    }

    /// Iterate over every known characteristic type.
    pub fn all() -> impl Iterator<Item = CharacteristicType> {
        Self::iter()
    }

    /// Kind of value a characteristic of this type reads and writes.
    pub const fn value_kind(self) -> ValueKind {
        use CharacteristicType::*;
        match self {
            Name => ValueKind::String,
            OnState | ActiveStatus | ObstructionStatus | HoldPosition => ValueKind::Bool,
            BatteryLowStatus | OldBatteryLowStatus | FaultStatus | TamperedStatus
            | CurrentFanState | TargetFanState | RotationDirection | SwingMode | LockControl => {
                ValueKind::Enum
            }
            CarbonMonoxideLevel | CarbonMonoxidePeakLevel | CarbonDioxideLevel
            | CarbonDioxidePeakLevel | Hue | Saturation => ValueKind::Double,
            BatteryLevel
            | CurrentHorizontalTiltAngle
            | CurrentVerticalTiltAngle
            | TargetHorizontalTiltAngle
            | TargetVerticalTiltAngle
            | Brightness
            | ColorTemperature
            | RotationSpeed
            | Duration
            | RemainingDuration
            | Volume => ValueKind::Int,
        }
    }
}
