//! Item state to characteristic value coercion.
//!
//! Every function here is total: a state of unexpected shape yields the
//! value kind's default and a log line, never an error. Item states are
//! allowed to be transiently undefined and a failed read would destabilize
//! the accessory session.
//!
//! Fractional decimals are truncated toward zero when an integer is needed.

use crate::characteristic::CharacteristicEnum;
use crate::item::{OnOff, OpenClosed, State};
use log::{debug, warn};

/// Two-valued enum from an on/off, open/closed or 0/non-zero decimal state.
///
/// `OFF`, `CLOSED` and `0` map to `off_value`; `ON`, `OPEN` and any other
/// number map to `on_value`; undefined or unsupported states give `default_value`.
pub fn enum_from_state<T: CharacteristicEnum>(
    state: &State,
    item_name: &str,
    off_value: T,
    on_value: T,
    default_value: T,
) -> T {
    match state {
        State::OnOff(value) => {
            if *value == OnOff::Off {
                off_value
            } else {
                on_value
            }
        }
        State::OpenClosed(value) => {
            if *value == OpenClosed::Closed {
                off_value
            } else {
                on_value
            }
        }
        State::Decimal(value) | State::Percent(value) => {
            if truncate(*value) == 0 {
                off_value
            } else {
                on_value
            }
        }
        State::UnDef => default_value,
        other => {
            warn!(
                "[HomeKit] Item state {} is not supported. Only OnOff, OpenClosed and Decimal (0/1) are supported. Ignore item {}",
                other, item_name
            );
            default_value
        }
    }
}

/// Enum from the numeric code held by a decimal state, `default_value` when
/// the state is not a number or the code is not part of the set.
pub fn enum_from_code<T: CharacteristicEnum>(state: &State, default_value: T) -> T {
    state
        .as_decimal()
        .and_then(|value| u8::try_from(truncate(value)).ok())
        .and_then(T::from_code)
        .unwrap_or(default_value)
}

/// Integer value of a percent or decimal state; `0` otherwise.
pub fn int_from_state(state: &State, item_name: &str) -> i32 {
    match state {
        State::Percent(value) | State::Decimal(value) => truncate(*value),
        State::UnDef => {
            debug!("[HomeKit] Item state {} is UNDEF {}.", state, item_name);
            0
        }
        other => {
            warn!(
                "[HomeKit] Item state {} is not supported for {}. Only PercentType and DecimalType (0/100) are supported.",
                other, item_name
            );
            0
        }
    }
}

/// Double value of a decimal state; `0.0` otherwise.
pub fn double_from_state(state: &State) -> f64 {
    state.as_decimal().unwrap_or(0.0)
}

/// Hue of a color state; `0.0` otherwise.
pub fn hue_from_state(state: &State) -> f64 {
    match state {
        State::Hsb(hsb) => hsb.hue,
        _ => 0.0,
    }
}

/// Saturation of a color state; `0.0` otherwise.
pub fn saturation_from_state(state: &State) -> f64 {
    match state {
        State::Hsb(hsb) => hsb.saturation,
        _ => 0.0,
    }
}

/// Brightness of a color state, or the value of a percent state; `0` otherwise.
pub fn brightness_from_state(state: &State) -> i32 {
    match state {
        State::Hsb(hsb) => truncate(hsb.brightness),
        State::Percent(value) => truncate(*value),
        _ => 0,
    }
}

/// `true` iff the state is `ON` or `OPEN`.
pub fn is_active_state(state: &State) -> bool {
    matches!(
        state,
        State::OnOff(OnOff::On) | State::OpenClosed(OpenClosed::Open)
    )
}

/// Textual representation of the state; empty when undefined.
pub fn name_from_state(state: &State) -> String {
    match state {
        State::UnDef => String::new(),
        other => other.to_string(),
    }
}

/// Truncate toward zero. NaN maps to 0, out of range values saturate.
fn truncate(value: f64) -> i32 {
    value as i32
}
