//! Core device identity types for the EMS bus

/// Device class a product id is looked up under
///
/// Product ids are not unique across classes, so every lookup names the class
/// the caller expects the device to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeviceClass {
    /// Boilers, base controllers and the accessory modules hanging off them
    Boiler,
    /// Room controllers
    Thermostat,
}

impl std::fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviceClass::Boiler => write!(f, "boiler"),
            DeviceClass::Thermostat => write!(f, "thermostat"),
        }
    }
}

/// Known EMS device families
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeviceModel {
    /// No device
    None,
    /// Wildcard: applies to every device
    All,
    /// Generic boiler (UBA controller)
    Uba,
    /// Sieger ES73
    Es73,
    /// RC10 / Nefit Moduline 100
    Rc10,
    /// RC20 / Nefit Moduline 300
    Rc20,
    /// RC20F
    Rc20F,
    /// RC30 / Nefit Moduline 400
    Rc30,
    /// RC35
    Rc35,
    /// TC100 / Nefit Easy
    Easy,
    /// RC310
    Rc310,
    /// Bosch CW100
    Cw100,
}

impl DeviceModel {
    /// All thermostat families
    pub const THERMOSTATS: [DeviceModel; 9] = [
        DeviceModel::Es73,
        DeviceModel::Rc10,
        DeviceModel::Rc20,
        DeviceModel::Rc20F,
        DeviceModel::Rc30,
        DeviceModel::Rc35,
        DeviceModel::Easy,
        DeviceModel::Rc310,
        DeviceModel::Cw100,
    ];

    /// Check if this is `None` or `All` rather than a device identity
    pub fn is_sentinel(&self) -> bool {
        matches!(self, DeviceModel::None | DeviceModel::All)
    }

    /// Device class of this family, `None` for the sentinels
    pub fn class(&self) -> Option<DeviceClass> {
        match self {
            DeviceModel::None | DeviceModel::All => None,
            DeviceModel::Uba => Some(DeviceClass::Boiler),
            _ => Some(DeviceClass::Thermostat),
        }
    }

    /// Check if the model matches `other`, treating `All` as a wildcard on either side
    pub fn matches(&self, other: DeviceModel) -> bool {
        *self == DeviceModel::All || other == DeviceModel::All || *self == other
    }
}

impl std::fmt::Display for DeviceModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DeviceModel::None => "none",
            DeviceModel::All => "all",
            DeviceModel::Uba => "UBA",
            DeviceModel::Es73 => "ES73",
            DeviceModel::Rc10 => "RC10",
            DeviceModel::Rc20 => "RC20",
            DeviceModel::Rc20F => "RC20F",
            DeviceModel::Rc30 => "RC30",
            DeviceModel::Rc35 => "RC35",
            DeviceModel::Easy => "Easy",
            DeviceModel::Rc310 => "RC310",
            DeviceModel::Cw100 => "CW100",
        };
        f.write_str(name)
    }
}

/// Bus addresses (device type ids) of the known devices
pub mod device_type_ids {
    /// Boiler (UBA)
    pub const BOILER: u8 = 0x08;
    /// BC10/BC25 base controllers and the RFM20 receiver
    pub const BASE_CONTROLLER: u8 = 0x09;
    /// Main thermostat address (ES73, RC30, RC35, RC310)
    pub const THERMOSTAT: u8 = 0x10;
    /// WM10 switch module
    pub const SWITCH_MODULE: u8 = 0x11;
    /// RC10 and RC20
    pub const THERMOSTAT_RC10_RC20: u8 = 0x17;
    /// RC20F, Nefit Easy and CW100
    pub const THERMOSTAT_RC20F_EASY: u8 = 0x18;
    /// MM10 mixer module
    pub const MIXER_MODULE: u8 = 0x21;
}
