//! Error types for EMS device lookup and telegram field access

use crate::core::DeviceClass;
use thiserror::Error;

/// Result type for EMS registry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when consulting the device registry or the telegram constant tables
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No registry row matches the product id for this device class
    #[error("unknown {class} product id {product_id}")]
    UnknownProduct {
        /// Class the caller assumed the device belongs to
        class: DeviceClass,
        /// Product id reported by the device
        product_id: u8,
    },

    /// Type code is not one of the known telegram types
    #[error("unknown telegram type 0x{0:02X}")]
    UnknownMessageType(u8),

    /// Byte is neither the comfort nor the eco encoding
    #[error("invalid warm water comfort value 0x{0:02X}")]
    InvalidComfortValue(u8),

    /// Payload does not reach the field's offset
    #[error("payload of {len} bytes too short for {field}")]
    PayloadTooShort {
        /// Field that was being accessed
        field: String,
        /// Actual payload length
        len: usize,
    },
}

impl Error {
    /// Create a new UnknownProduct error
    pub fn unknown_product(class: DeviceClass, product_id: u8) -> Self {
        Error::UnknownProduct { class, product_id }
    }

    /// Create a new PayloadTooShort error
    pub fn payload_too_short(field: impl Into<String>, len: usize) -> Self {
        Error::PayloadTooShort {
            field: field.into(),
            len,
        }
    }
}
