//! # EMS Devices
//!
//! Known devices and telegram constants for the EMS bus used by Buderus, Bosch
//! and Nefit boilers and thermostats.
//!
//! This crate carries data only, for a telegram decoder and command dispatcher
//! living elsewhere:
//!
//! - Registries of known boiler-class products and thermostats, keyed by the
//!   product id a device reports during discovery
//! - Telegram type codes and payload field offsets
//! - The warm water comfort/eco encoding
//! - Per-model thermostat telegram layouts
//!
//! Bus transport, framing and checksums are out of scope.
//!
//! ## Features
//!
//! - `serde`: Enable serialization of all public data types, and JSON export of the registries
//!
//! ## Example
//!
//! ```
//! use ems_devices::{identify, DeviceClass, DeviceModel};
//!
//! let thermostat = identify(DeviceClass::Thermostat, 86);
//! assert_eq!(thermostat.model, DeviceModel::Rc35);
//! assert!(thermostat.can_write);
//!
//! // Unknown hardware falls back to generic handling
//! let unknown = identify(DeviceClass::Thermostat, 1);
//! assert_eq!(unknown.model, DeviceModel::All);
//! ```

pub mod core;
pub mod error;
pub mod message;
pub mod protocol;
pub mod registry;

pub use crate::core::{device_type_ids, DeviceClass, DeviceModel};
pub use error::{Error, Result};
pub use message::{fields, offsets, types, Field, MessageType, WwComfort};
pub use protocol::ThermostatLayout;
pub use registry::{
    boiler_type, identify, lookup, require, thermostat_type, BoilerType, DeviceEntry,
    Identification, ThermostatType, BOILER_TYPES, THERMOSTAT_TYPES,
};
