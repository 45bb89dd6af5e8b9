//! Commands sent to items.

use super::state::{Hsb, OnOff};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outbound instruction to an item.
///
/// Sending a command is fire-and-forget: the item runtime decides when (and
/// whether) the item's state follows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Command {
    OnOff(OnOff),
    Decimal(f64),
    Percent(f64),
    Hsb(Hsb),
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::OnOff(value) => write!(f, "{value}"),
            Command::Decimal(value) | Command::Percent(value) => write!(f, "{value}"),
            Command::Hsb(value) => write!(f, "{value}"),
        }
    }
}
