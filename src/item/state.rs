//! Item state values.
//!
//! An item holds exactly one [`State`] at a time. The variants mirror the
//! state types of the home-automation runtime: switches report [`OnOff`],
//! contacts report [`OpenClosed`], numbers and dimmers report decimals and
//! percentages, color items report [`Hsb`].

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::Display;

/// Two-valued switch state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "UPPERCASE")]
pub enum OnOff {
    On,
    Off,
}

impl From<bool> for OnOff {
    fn from(on: bool) -> Self {
        if on { OnOff::On } else { OnOff::Off }
    }
}

/// Two-valued contact state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "UPPERCASE")]
pub enum OpenClosed {
    Open,
    Closed,
}

/// Composite color value.
///
/// Hue is in degrees (0..=360), saturation and brightness are percentages (0..=100).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hsb {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
}

impl Hsb {
    pub fn new(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self {
            hue,
            saturation,
            brightness,
        }
    }

    pub fn with_hue(self, hue: f64) -> Self {
        Self { hue, ..self }
    }

    pub fn with_saturation(self, saturation: f64) -> Self {
        Self { saturation, ..self }
    }

    pub fn with_brightness(self, brightness: f64) -> Self {
        Self { brightness, ..self }
    }
}

impl Default for Hsb {
    /// White at full brightness.
    fn default() -> Self {
        Self::new(0.0, 0.0, 100.0)
    }
}

impl fmt::Display for Hsb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.hue, self.saturation, self.brightness)
    }
}

/// Current value of an item.
///
/// `Percent` is a decimal subtype: every rule that accepts a decimal state
/// also accepts a percent state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum State {
    OnOff(OnOff),
    OpenClosed(OpenClosed),
    Decimal(f64),
    Percent(f64),
    Hsb(Hsb),
    Text(String),
    #[default]
    UnDef,
}

impl State {
    pub const ON: State = State::OnOff(OnOff::On);
    pub const OFF: State = State::OnOff(OnOff::Off);
    pub const OPEN: State = State::OpenClosed(OpenClosed::Open);
    pub const CLOSED: State = State::OpenClosed(OpenClosed::Closed);

    /// Numeric value of a decimal (or percent) state.
    pub fn as_decimal(&self) -> Option<f64> {
        match self {
            State::Decimal(value) | State::Percent(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, State::UnDef)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            State::OnOff(value) => write!(f, "{value}"),
            State::OpenClosed(value) => write!(f, "{value}"),
            State::Decimal(value) | State::Percent(value) => write!(f, "{value}"),
            State::Hsb(value) => write!(f, "{value}"),
            State::Text(value) => f.write_str(value),
            State::UnDef => f.write_str("UNDEF"),
        }
    }
}
