//! Closed value sets of enum-valued characteristics.
//!
//! On the wire every enum characteristic carries its numeric code; the
//! [`CharacteristicEnum`] trait maps between codes and typed values.

use strum::{Display, FromRepr};

/// Enum-valued characteristic payload.
pub trait CharacteristicEnum: Copy + PartialEq + std::fmt::Debug + Send + Sync + 'static {
    /// Numeric code of this value.
    fn code(self) -> u8;

    /// Typed value for a numeric code, if the code is part of the set.
    fn from_code(code: u8) -> Option<Self>;
}

macro_rules! characteristic_enum {
    ($($name:ident),* $(,)?) => {
        $(
            impl CharacteristicEnum for $name {
                fn code(self) -> u8 {
                    self as u8
                }

                fn from_code(code: u8) -> Option<Self> {
                    Self::from_repr(code)
                }
            }
        )*
    };
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, FromRepr)]
#[repr(u8)]
pub enum StatusLowBattery {
    Normal = 0,
    Low = 1,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, FromRepr)]
#[repr(u8)]
pub enum StatusFault {
    NoFault = 0,
    GeneralFault = 1,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, FromRepr)]
#[repr(u8)]
pub enum StatusTampered {
    NotTampered = 0,
    Tampered = 1,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, FromRepr)]
#[repr(u8)]
pub enum CurrentFanState {
    Inactive = 0,
    Idle = 1,
    BlowingAir = 2,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, FromRepr)]
#[repr(u8)]
pub enum TargetFanState {
    Manual = 0,
    Auto = 1,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, FromRepr)]
#[repr(u8)]
pub enum RotationDirection {
    Clockwise = 0,
    CounterClockwise = 1,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, FromRepr)]
#[repr(u8)]
pub enum SwingMode {
    SwingDisabled = 0,
    SwingEnabled = 1,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, FromRepr)]
#[repr(u8)]
pub enum LockPhysicalControls {
    ControlLockDisabled = 0,
    ControlLockEnabled = 1,
}

characteristic_enum!(
    StatusLowBattery,
    StatusFault,
    StatusTampered,
    CurrentFanState,
    TargetFanState,
    RotationDirection,
    SwingMode,
    LockPhysicalControls,
);
