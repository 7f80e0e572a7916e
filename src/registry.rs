//! Known EMS devices
//!
//! Two fixed tables: boiler-class products and thermostats. A product id is
//! only meaningful together with the class it was read under, so every lookup
//! takes a [`DeviceClass`]. The tables only grow through code changes as new
//! hardware is recognised.

use crate::core::DeviceModel::{Cw100, Easy, Es73, Rc10, Rc20, Rc20F, Rc30, Rc310, Rc35, Uba};
use crate::core::{device_type_ids as ids, DeviceClass, DeviceModel};
use crate::error::{Error, Result};

/// A boiler-class product (boiler, base controller, accessory module)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BoilerType {
    /// Device family, always `Uba` for this table
    pub model: DeviceModel,
    /// Vendor product id read from the device at startup
    pub product_id: u8,
    /// Bus address the device is reached at
    pub device_type_id: u8,
    /// Human-readable product name
    pub description: &'static str,
    /// The hardware exposes no product id; this one is assigned locally
    pub synthetic_id: bool,
}

/// A thermostat and what has been verified to work with it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ThermostatType {
    /// Thermostat family
    pub model: DeviceModel,
    /// Vendor product id read from the device at startup
    pub product_id: u8,
    /// Bus address the thermostat is reached at
    pub device_type_id: u8,
    /// Human-readable product name
    pub description: &'static str,
    /// Status polling is known to work
    pub can_read: bool,
    /// Setpoint writes are known to work
    pub can_write: bool,
}

const fn boiler(
    model: DeviceModel,
    product_id: u8,
    device_type_id: u8,
    description: &'static str,
) -> BoilerType {
    BoilerType {
        model,
        product_id,
        device_type_id,
        description,
        synthetic_id: false,
    }
}

const fn synthetic(
    model: DeviceModel,
    product_id: u8,
    device_type_id: u8,
    description: &'static str,
) -> BoilerType {
    BoilerType {
        synthetic_id: true,
        ..boiler(model, product_id, device_type_id, description)
    }
}

const fn thermostat(
    model: DeviceModel,
    product_id: u8,
    device_type_id: u8,
    description: &'static str,
    can_read: bool,
    can_write: bool,
) -> ThermostatType {
    ThermostatType {
        model,
        product_id,
        device_type_id,
        description,
        can_read,
        can_write,
    }
}

/// Known boiler-class products
pub static BOILER_TYPES: [BoilerType; 11] = [
    boiler(Uba, 72, ids::BOILER, "MC10"),
    boiler(Uba, 123, ids::BOILER, "Buderus GB172/Nefit Trendline"),
    boiler(Uba, 115, ids::BOILER, "Nefit Topline Compact"),
    boiler(Uba, 64, ids::BOILER, "Sieger BK15 Boiler/Nefit Smartline"),
    boiler(Uba, 190, ids::BASE_CONTROLLER, "BC10 Base Controller"),
    boiler(Uba, 114, ids::BASE_CONTROLLER, "BC10 Base Controller"),
    boiler(Uba, 125, ids::BASE_CONTROLLER, "BC25 Base Controller"),
    boiler(Uba, 68, ids::BASE_CONTROLLER, "RFM20 Receiver"),
    boiler(Uba, 95, ids::BOILER, "Bosch Condens 2500"),
    synthetic(Uba, 251, ids::MIXER_MODULE, "MM10 Mixer Module"),
    synthetic(Uba, 250, ids::SWITCH_MODULE, "WM10 Switch Module"),
];

/// Known thermostats
pub static THERMOSTAT_TYPES: [ThermostatType; 9] = [
    thermostat(Es73, 76, ids::THERMOSTAT, "Sieger ES73", true, true),
    thermostat(Rc10, 79, ids::THERMOSTAT_RC10_RC20, "RC10/Nefit Moduline 100)", true, true),
    thermostat(Rc20, 77, ids::THERMOSTAT_RC10_RC20, "RC20/Nefit Moduline 300)", true, true),
    thermostat(Rc20F, 93, ids::THERMOSTAT_RC20F_EASY, "RC20F", true, true),
    thermostat(Rc30, 78, ids::THERMOSTAT, "RC30/Nefit Moduline 400)", true, true),
    thermostat(Rc35, 86, ids::THERMOSTAT, "RC35", true, true),
    thermostat(Easy, 202, ids::THERMOSTAT_RC20F_EASY, "TC100/Nefit Easy", true, false),
    thermostat(Rc310, 158, ids::THERMOSTAT, "RC310", false, false),
    thermostat(Cw100, 255, ids::THERMOSTAT_RC20F_EASY, "Bosch CW100", false, false),
];

/// A row from either table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DeviceEntry {
    /// Row of [`BOILER_TYPES`]
    Boiler(&'static BoilerType),
    /// Row of [`THERMOSTAT_TYPES`]
    Thermostat(&'static ThermostatType),
}

impl DeviceEntry {
    /// Table the row belongs to
    pub fn class(&self) -> DeviceClass {
        match self {
            DeviceEntry::Boiler(_) => DeviceClass::Boiler,
            DeviceEntry::Thermostat(_) => DeviceClass::Thermostat,
        }
    }

    /// Device family
    pub fn model(&self) -> DeviceModel {
        match self {
            DeviceEntry::Boiler(b) => b.model,
            DeviceEntry::Thermostat(t) => t.model,
        }
    }

    /// Product id of the row
    pub fn product_id(&self) -> u8 {
        match self {
            DeviceEntry::Boiler(b) => b.product_id,
            DeviceEntry::Thermostat(t) => t.product_id,
        }
    }

    /// Bus address of the device
    pub fn device_type_id(&self) -> u8 {
        match self {
            DeviceEntry::Boiler(b) => b.device_type_id,
            DeviceEntry::Thermostat(t) => t.device_type_id,
        }
    }

    /// Human-readable product name
    pub fn description(&self) -> &'static str {
        match self {
            DeviceEntry::Boiler(b) => b.description,
            DeviceEntry::Thermostat(t) => t.description,
        }
    }

    /// Verified read and write capability
    ///
    /// Only thermostat rows record capabilities; boiler rows return `None`.
    pub fn capabilities(&self) -> Option<(bool, bool)> {
        match self {
            DeviceEntry::Boiler(_) => None,
            DeviceEntry::Thermostat(t) => Some((t.can_read, t.can_write)),
        }
    }
}

/// Find a boiler-class product by its product id
pub fn boiler_type(product_id: u8) -> Option<&'static BoilerType> {
    BOILER_TYPES.iter().find(|b| b.product_id == product_id)
}

/// Find a thermostat by its product id
pub fn thermostat_type(product_id: u8) -> Option<&'static ThermostatType> {
    THERMOSTAT_TYPES.iter().find(|t| t.product_id == product_id)
}

/// First thermostat row of a model
pub fn thermostat_for_model(model: DeviceModel) -> Option<&'static ThermostatType> {
    THERMOSTAT_TYPES.iter().find(|t| t.model == model)
}

/// Boiler-class products reached at a bus address
pub fn boilers_at(device_type_id: u8) -> impl Iterator<Item = &'static BoilerType> {
    BOILER_TYPES
        .iter()
        .filter(move |b| b.device_type_id == device_type_id)
}

/// Thermostats reached at a bus address
pub fn thermostats_at(device_type_id: u8) -> impl Iterator<Item = &'static ThermostatType> {
    THERMOSTAT_TYPES
        .iter()
        .filter(move |t| t.device_type_id == device_type_id)
}

/// Find a product under the given device class
pub fn lookup(class: DeviceClass, product_id: u8) -> Option<DeviceEntry> {
    match class {
        DeviceClass::Boiler => boiler_type(product_id).map(DeviceEntry::Boiler),
        DeviceClass::Thermostat => thermostat_type(product_id).map(DeviceEntry::Thermostat),
    }
}

/// Like [`lookup`], but an unknown product is an error
pub fn require(class: DeviceClass, product_id: u8) -> Result<DeviceEntry> {
    lookup(class, product_id).ok_or_else(|| Error::unknown_product(class, product_id))
}

/// Outcome of identifying a device during discovery
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Identification {
    /// Class the device was looked up under
    pub class: DeviceClass,
    /// Product id the device reported
    pub product_id: u8,
    /// `All` when the product is not recognised
    pub model: DeviceModel,
    /// Product name, `None` when not recognised
    pub description: Option<&'static str>,
    /// Status polling is verified; false unless a thermostat row says so
    pub can_read: bool,
    /// Setpoint writes are verified; false unless a thermostat row says so
    pub can_write: bool,
    /// Matching registry row
    pub entry: Option<DeviceEntry>,
}

impl Identification {
    /// Check if the product matched a registry row
    pub fn is_known(&self) -> bool {
        self.entry.is_some()
    }
}

impl std::fmt::Display for Identification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.description {
            Some(description) => write!(
                f,
                "{} {} (product id {}, model {})",
                self.class, description, self.product_id, self.model
            ),
            None => write!(f, "unknown {} (product id {})", self.class, self.product_id),
        }
    }
}

/// Identify a device from its reported product id
///
/// Unknown products are not an error: a warning is logged and the device is
/// handled with `All`-scoped semantics, without read or write capability.
/// Boiler rows carry no capability columns, so they are reported unverified too.
pub fn identify(class: DeviceClass, product_id: u8) -> Identification {
    match lookup(class, product_id) {
        Some(entry) => {
            let (can_read, can_write) = entry.capabilities().unwrap_or((false, false));
            tracing::debug!(
                %class,
                product_id,
                model = %entry.model(),
                description = entry.description(),
                "identified EMS device"
            );
            if let DeviceEntry::Boiler(b) = entry {
                if b.synthetic_id {
                    tracing::debug!(product_id, "product id is locally assigned");
                }
            }
            Identification {
                class,
                product_id,
                model: entry.model(),
                description: Some(entry.description()),
                can_read,
                can_write,
                entry: Some(entry),
            }
        }
        None => {
            tracing::warn!(%class, product_id, "unrecognised EMS device, using generic handling");
            Identification {
                class,
                product_id,
                model: DeviceModel::All,
                description: None,
                can_read: false,
                can_write: false,
                entry: None,
            }
        }
    }
}

/// Render both tables as a JSON document
#[cfg(feature = "serde")]
pub fn to_json() -> std::result::Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serde_json::json!({
        "boilers": &BOILER_TYPES[..],
        "thermostats": &THERMOSTAT_TYPES[..],
    }))
}
