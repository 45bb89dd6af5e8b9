use crate::characteristic::{CharacteristicType, ValueKind};
use crate::tagged_item::AccessoryType;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum BridgeError {
    #[error(
        "Unsupported optional characteristic. Accessory type {accessory_type}, characteristic type \"{characteristic_type}\""
    )]
    UnsupportedCharacteristic {
        accessory_type: AccessoryType,
        characteristic_type: CharacteristicType,
    },

    #[error("Characteristic {0} is not readable")]
    NotReadable(CharacteristicType),

    #[error("Characteristic {0} is not writable")]
    NotWritable(CharacteristicType),

    #[error("Characteristic {0} does not support change notifications")]
    NotObservable(CharacteristicType),

    #[error("Characteristic {characteristic_type} expects {expected} values, got {actual}")]
    ValueKindMismatch {
        characteristic_type: CharacteristicType,
        expected: ValueKind,
        actual: ValueKind,
    },

    #[error("Unknown characteristic tag: {0}")]
    UnknownCharacteristicTag(String),

    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
