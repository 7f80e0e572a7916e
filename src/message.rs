//! Telegram type codes, payload offsets and field descriptors

use crate::core::DeviceModel;
use crate::error::{Error, Result};

/// Telegram type codes
pub mod types {
    /// Version request/response, common to all devices
    pub const VERSION: u8 = 0x02;

    /// Boiler monitor broadcast, sent automatically
    pub const UBA_MONITOR_FAST: u8 = 0x18;
    /// Boiler monitor broadcast, sent automatically
    pub const UBA_MONITOR_SLOW: u8 = 0x19;
    /// Warm water monitor broadcast, sent automatically
    pub const UBA_MONITOR_WW: u8 = 0x34;
    /// Maintenance status broadcast, sent automatically
    pub const UBA_MAINTENANCE_STATUS: u8 = 0x1C;
    /// Warm water parameters: activation, temperature, comfort mode
    pub const UBA_PARAMETER_WW: u8 = 0x33;
    /// Total boiler uptime
    pub const UBA_TOTAL_UPTIME: u8 = 0x14;
    /// Maintenance interval settings
    pub const UBA_MAINTENANCE_SETTINGS: u8 = 0x15;
    /// General boiler parameters
    pub const UBA_PARAMETERS: u8 = 0x16;
    /// Flow temperature and burner power setpoints
    pub const UBA_SET_POINTS: u8 = 0x1A;
    /// Function test control
    pub const UBA_FUNCTION_TEST: u8 = 0x1D;

    /// Thermostat clock broadcast
    pub const RC_TIME: u8 = 0x06;
    /// Thermostat broadcast of the external outdoor temperature
    pub const RC_OUTDOOR_TEMP: u8 = 0xA3;

    /// RC10 status broadcast with setpoint and room temperature
    pub const RC10_STATUS: u8 = 0xB1;
    /// RC10 setpoint and mode writes
    pub const RC10_SET: u8 = 0xB0;

    /// RC20 status broadcast with setpoint and room temperature
    pub const RC20_STATUS: u8 = 0x91;
    /// RC20 setpoint and mode writes
    pub const RC20_SET: u8 = 0xA8;

    /// RC30 status broadcast with setpoint and room temperature
    pub const RC30_STATUS: u8 = 0x41;
    /// RC30 setpoint and mode writes
    pub const RC30_SET: u8 = 0xA7;

    /// RC35 status broadcast with setpoint, room temperature and day mode flag
    pub const RC35_STATUS: u8 = 0x3E;
    /// Working mode of heating circuit 1
    pub const RC35_SET: u8 = 0x3D;

    /// Nefit Easy status, polled
    pub const EASY_STATUS: u8 = 0x0A;
}

/// Byte offsets into a telegram's data payload, zero-based
pub mod offsets {
    /// Warm water enabled flag in UBAParameterWW
    pub const UBA_PARAMETER_WW_ACTIVATED: u8 = 1;
    /// Warm water temperature in UBAParameterWW
    pub const UBA_PARAMETER_WW_TEMP: u8 = 2;
    /// Comfort or eco mode byte, see [`WwComfort`](super::WwComfort)
    pub const UBA_PARAMETER_WW_COMFORT: u8 = 9;

    /// Setpoint in the RC10 status broadcast
    pub const RC10_STATUS_SETPOINT: u8 = 1;
    /// Room temperature in the RC10 status broadcast
    pub const RC10_STATUS_CURRENT: u8 = 3;
    /// Setpoint in the RC10 set telegram
    pub const RC10_SET_TEMP: u8 = 4;

    /// Setpoint in the RC20 status broadcast
    pub const RC20_STATUS_SETPOINT: u8 = 1;
    /// Room temperature in the RC20 status broadcast
    pub const RC20_STATUS_CURRENT: u8 = 2;
    /// Mode in the RC20 set telegram
    pub const RC20_SET_MODE: u8 = 23;
    /// Setpoint in the RC20 set telegram
    pub const RC20_SET_TEMP: u8 = 28;

    /// Setpoint in the RC30 status broadcast
    pub const RC30_STATUS_SETPOINT: u8 = 1;
    /// Room temperature in the RC30 status broadcast
    pub const RC30_STATUS_CURRENT: u8 = 2;
    /// Mode in the RC30 set telegram
    pub const RC30_SET_MODE: u8 = 23;
    /// Setpoint in the RC30 set telegram
    pub const RC30_SET_TEMP: u8 = 28;

    /// Desired temperature in the RC35 status broadcast
    pub const RC35_STATUS_SETPOINT: u8 = 2;
    /// Room temperature in the RC35 status broadcast
    pub const RC35_STATUS_CURRENT: u8 = 3;
    /// Mode in the RC35 set telegram
    pub const RC35_SET_MODE: u8 = 7;
    /// Day temperature in the RC35 set telegram
    pub const RC35_SET_TEMP_DAY: u8 = 2;
    /// Night temperature in the RC35 set telegram
    pub const RC35_SET_TEMP_NIGHT: u8 = 1;
    /// Day mode flag, bit 1 of this byte in the RC35 status broadcast
    pub const RC35_GET_MODE_DAY: u8 = 1;

    /// Setpoint in the Easy status telegram
    pub const EASY_STATUS_SETPOINT: u8 = 10;
    /// Room temperature in the Easy status telegram
    pub const EASY_STATUS_CURRENT: u8 = 8;
}

/// Known telegram types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MessageType {
    /// Version request/response
    Version,
    /// Boiler fast monitor broadcast
    UbaMonitorFast,
    /// Boiler slow monitor broadcast
    UbaMonitorSlow,
    /// Warm water monitor broadcast
    UbaMonitorWw,
    /// Maintenance status broadcast
    UbaMaintenanceStatus,
    /// Warm water parameters
    UbaParameterWw,
    /// Total boiler uptime
    UbaTotalUptime,
    /// Maintenance settings
    UbaMaintenanceSettings,
    /// General boiler parameters
    UbaParameters,
    /// Boiler setpoints
    UbaSetPoints,
    /// Function test
    UbaFunctionTest,
    /// Thermostat clock broadcast
    RcTime,
    /// Outdoor temperature broadcast
    RcOutdoorTemp,
    /// RC10 status broadcast
    Rc10Status,
    /// RC10 set telegram
    Rc10Set,
    /// RC20 status broadcast
    Rc20Status,
    /// RC20 set telegram
    Rc20Set,
    /// RC30 status broadcast
    Rc30Status,
    /// RC30 set telegram
    Rc30Set,
    /// RC35 status broadcast
    Rc35Status,
    /// RC35 set telegram
    Rc35Set,
    /// Nefit Easy status
    EasyStatus,
}

impl MessageType {
    /// Every known telegram type
    pub const ALL: [MessageType; 22] = [
        MessageType::Version,
        MessageType::UbaMonitorFast,
        MessageType::UbaMonitorSlow,
        MessageType::UbaMonitorWw,
        MessageType::UbaMaintenanceStatus,
        MessageType::UbaParameterWw,
        MessageType::UbaTotalUptime,
        MessageType::UbaMaintenanceSettings,
        MessageType::UbaParameters,
        MessageType::UbaSetPoints,
        MessageType::UbaFunctionTest,
        MessageType::RcTime,
        MessageType::RcOutdoorTemp,
        MessageType::Rc10Status,
        MessageType::Rc10Set,
        MessageType::Rc20Status,
        MessageType::Rc20Set,
        MessageType::Rc30Status,
        MessageType::Rc30Set,
        MessageType::Rc35Status,
        MessageType::Rc35Set,
        MessageType::EasyStatus,
    ];

    /// Type code carried in the telegram header
    pub fn code(&self) -> u8 {
        match self {
            MessageType::Version => types::VERSION,
            MessageType::UbaMonitorFast => types::UBA_MONITOR_FAST,
            MessageType::UbaMonitorSlow => types::UBA_MONITOR_SLOW,
            MessageType::UbaMonitorWw => types::UBA_MONITOR_WW,
            MessageType::UbaMaintenanceStatus => types::UBA_MAINTENANCE_STATUS,
            MessageType::UbaParameterWw => types::UBA_PARAMETER_WW,
            MessageType::UbaTotalUptime => types::UBA_TOTAL_UPTIME,
            MessageType::UbaMaintenanceSettings => types::UBA_MAINTENANCE_SETTINGS,
            MessageType::UbaParameters => types::UBA_PARAMETERS,
            MessageType::UbaSetPoints => types::UBA_SET_POINTS,
            MessageType::UbaFunctionTest => types::UBA_FUNCTION_TEST,
            MessageType::RcTime => types::RC_TIME,
            MessageType::RcOutdoorTemp => types::RC_OUTDOOR_TEMP,
            MessageType::Rc10Status => types::RC10_STATUS,
            MessageType::Rc10Set => types::RC10_SET,
            MessageType::Rc20Status => types::RC20_STATUS,
            MessageType::Rc20Set => types::RC20_SET,
            MessageType::Rc30Status => types::RC30_STATUS,
            MessageType::Rc30Set => types::RC30_SET,
            MessageType::Rc35Status => types::RC35_STATUS,
            MessageType::Rc35Set => types::RC35_SET,
            MessageType::EasyStatus => types::EASY_STATUS,
        }
    }

    /// Device family the telegram belongs to
    ///
    /// `Version` is shared by every device. `RcTime` and `RcOutdoorTemp` are
    /// broadcast by all thermostats, which is also reported as `All`.
    pub fn origin(&self) -> DeviceModel {
        match self {
            MessageType::Version | MessageType::RcTime | MessageType::RcOutdoorTemp => {
                DeviceModel::All
            }
            MessageType::UbaMonitorFast
            | MessageType::UbaMonitorSlow
            | MessageType::UbaMonitorWw
            | MessageType::UbaMaintenanceStatus
            | MessageType::UbaParameterWw
            | MessageType::UbaTotalUptime
            | MessageType::UbaMaintenanceSettings
            | MessageType::UbaParameters
            | MessageType::UbaSetPoints
            | MessageType::UbaFunctionTest => DeviceModel::Uba,
            MessageType::Rc10Status | MessageType::Rc10Set => DeviceModel::Rc10,
            MessageType::Rc20Status | MessageType::Rc20Set => DeviceModel::Rc20,
            MessageType::Rc30Status | MessageType::Rc30Set => DeviceModel::Rc30,
            MessageType::Rc35Status | MessageType::Rc35Set => DeviceModel::Rc35,
            MessageType::EasyStatus => DeviceModel::Easy,
        }
    }

    /// Check if the device broadcasts this telegram without being polled
    pub fn is_broadcast(&self) -> bool {
        matches!(
            self,
            MessageType::UbaMonitorFast
                | MessageType::UbaMonitorSlow
                | MessageType::UbaMonitorWw
                | MessageType::UbaMaintenanceStatus
                | MessageType::RcTime
                | MessageType::RcOutdoorTemp
                | MessageType::Rc10Status
                | MessageType::Rc20Status
                | MessageType::Rc30Status
                | MessageType::Rc35Status
        )
    }
}

impl MessageType {
    /// Check if a device of `model` can send or receive this telegram
    ///
    /// Telegrams shared by all devices apply to every model, and a device
    /// identified only as `All` accepts every telegram.
    pub fn applies_to(&self, model: DeviceModel) -> bool {
        self.origin().matches(model)
    }
}

impl TryFrom<u8> for MessageType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        MessageType::ALL
            .into_iter()
            .find(|t| t.code() == value)
            .ok_or(Error::UnknownMessageType(value))
    }
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}(0x{:02X})", self, self.code())
    }
}

/// Warm water comfort setting, stored at [`offsets::UBA_PARAMETER_WW_COMFORT`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WwComfort {
    /// Comfort mode, water kept hot
    Comfort,
    /// Eco mode
    Eco,
}

impl WwComfort {
    /// Byte value for comfort mode
    pub const COMFORT_VALUE: u8 = 0x00;
    /// Byte value for eco mode
    pub const ECO_VALUE: u8 = 0xD8;

    /// Byte written to the UBAParameterWW telegram
    pub fn as_byte(&self) -> u8 {
        match self {
            WwComfort::Comfort => Self::COMFORT_VALUE,
            WwComfort::Eco => Self::ECO_VALUE,
        }
    }
}

impl TryFrom<u8> for WwComfort {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            Self::COMFORT_VALUE => Ok(WwComfort::Comfort),
            Self::ECO_VALUE => Ok(WwComfort::Eco),
            _ => Err(Error::InvalidComfortValue(value)),
        }
    }
}

/// Location of a single field: the telegram type it lives in and its payload offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Field {
    /// Telegram type code
    pub message: u8,
    /// Zero-based offset into the data payload
    pub offset: u8,
    /// Short name used in diagnostics
    pub name: &'static str,
}

impl Field {
    /// Create a new field descriptor
    pub const fn new(message: u8, offset: u8, name: &'static str) -> Self {
        Field {
            message,
            offset,
            name,
        }
    }

    /// Read the byte at this field's offset
    pub fn read(&self, payload: &[u8]) -> Result<u8> {
        payload
            .get(self.offset as usize)
            .copied()
            .ok_or_else(|| Error::payload_too_short(self.to_string(), payload.len()))
    }

    /// Read a big-endian 16-bit value starting at this field's offset
    pub fn read_u16(&self, payload: &[u8]) -> Result<u16> {
        let start = self.offset as usize;
        payload
            .get(start..start + 2)
            .map(|b| u16::from_be_bytes([b[0], b[1]]))
            .ok_or_else(|| Error::payload_too_short(self.to_string(), payload.len()))
    }

    /// Overwrite the byte at this field's offset
    pub fn write(&self, payload: &mut [u8], value: u8) -> Result<()> {
        let len = payload.len();
        match payload.get_mut(self.offset as usize) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Error::payload_too_short(self.to_string(), len)),
        }
    }

    /// Smallest payload that contains this field
    pub fn min_payload_len(&self) -> usize {
        self.offset as usize + 1
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (0x{:02X}[{}])", self.name, self.message, self.offset)
    }
}

/// Named fields, pairing each offset with the telegram type it indexes
pub mod fields {
    use super::{offsets, types, Field};

    /// Warm water activated
    pub const UBA_WW_ACTIVATED: Field = Field::new(
        types::UBA_PARAMETER_WW,
        offsets::UBA_PARAMETER_WW_ACTIVATED,
        "wwactivated",
    );
    /// Warm water temp
    pub const UBA_WW_TEMP: Field = Field::new(
        types::UBA_PARAMETER_WW,
        offsets::UBA_PARAMETER_WW_TEMP,
        "wwtemp",
    );
    /// Warm water comfort
    pub const UBA_WW_COMFORT: Field = Field::new(
        types::UBA_PARAMETER_WW,
        offsets::UBA_PARAMETER_WW_COMFORT,
        "wwcomfort",
    );

    /// RC10 setpoint
    pub const RC10_SETPOINT: Field = Field::new(
        types::RC10_STATUS,
        offsets::RC10_STATUS_SETPOINT,
        "rc10.setpoint",
    );
    /// RC10 current
    pub const RC10_CURRENT: Field = Field::new(
        types::RC10_STATUS,
        offsets::RC10_STATUS_CURRENT,
        "rc10.current",
    );
    /// RC10 set temp
    pub const RC10_SET_TEMP: Field =
        Field::new(types::RC10_SET, offsets::RC10_SET_TEMP, "rc10.set_temp");

    /// RC20 setpoint
    pub const RC20_SETPOINT: Field = Field::new(
        types::RC20_STATUS,
        offsets::RC20_STATUS_SETPOINT,
        "rc20.setpoint",
    );
    /// RC20 current
    pub const RC20_CURRENT: Field = Field::new(
        types::RC20_STATUS,
        offsets::RC20_STATUS_CURRENT,
        "rc20.current",
    );
    /// RC20 set mode
    pub const RC20_SET_MODE: Field =
        Field::new(types::RC20_SET, offsets::RC20_SET_MODE, "rc20.set_mode");
    /// RC20 set temp
    pub const RC20_SET_TEMP: Field =
        Field::new(types::RC20_SET, offsets::RC20_SET_TEMP, "rc20.set_temp");

    /// RC30 setpoint
    pub const RC30_SETPOINT: Field = Field::new(
        types::RC30_STATUS,
        offsets::RC30_STATUS_SETPOINT,
        "rc30.setpoint",
    );
    /// RC30 current
    pub const RC30_CURRENT: Field = Field::new(
        types::RC30_STATUS,
        offsets::RC30_STATUS_CURRENT,
        "rc30.current",
    );
    /// RC30 set mode
    pub const RC30_SET_MODE: Field =
        Field::new(types::RC30_SET, offsets::RC30_SET_MODE, "rc30.set_mode");
    /// RC30 set temp
    pub const RC30_SET_TEMP: Field =
        Field::new(types::RC30_SET, offsets::RC30_SET_TEMP, "rc30.set_temp");

    /// RC35 setpoint
    pub const RC35_SETPOINT: Field = Field::new(
        types::RC35_STATUS,
        offsets::RC35_STATUS_SETPOINT,
        "rc35.setpoint",
    );
    /// RC35 current
    pub const RC35_CURRENT: Field = Field::new(
        types::RC35_STATUS,
        offsets::RC35_STATUS_CURRENT,
        "rc35.current",
    );
    /// RC35 set mode
    pub const RC35_SET_MODE: Field =
        Field::new(types::RC35_SET, offsets::RC35_SET_MODE, "rc35.set_mode");
    /// RC35 set temp day
    pub const RC35_SET_TEMP_DAY: Field = Field::new(
        types::RC35_SET,
        offsets::RC35_SET_TEMP_DAY,
        "rc35.set_temp_day",
    );
    /// RC35 set temp night
    pub const RC35_SET_TEMP_NIGHT: Field = Field::new(
        types::RC35_SET,
        offsets::RC35_SET_TEMP_NIGHT,
        "rc35.set_temp_night",
    );
    /// Day mode flag, bit 1 of the RC35 status broadcast
    pub const RC35_GET_MODE_DAY: Field = Field::new(
        types::RC35_STATUS,
        offsets::RC35_GET_MODE_DAY,
        "rc35.mode_day",
    );

    /// Easy setpoint
    pub const EASY_SETPOINT: Field = Field::new(
        types::EASY_STATUS,
        offsets::EASY_STATUS_SETPOINT,
        "easy.setpoint",
    );
    /// Easy current
    pub const EASY_CURRENT: Field = Field::new(
        types::EASY_STATUS,
        offsets::EASY_STATUS_CURRENT,
        "easy.current",
    );

    /// Every named field
    pub const ALL: [Field; 22] = [
        UBA_WW_ACTIVATED,
        UBA_WW_TEMP,
        UBA_WW_COMFORT,
        RC10_SETPOINT,
        RC10_CURRENT,
        RC10_SET_TEMP,
        RC20_SETPOINT,
        RC20_CURRENT,
        RC20_SET_MODE,
        RC20_SET_TEMP,
        RC30_SETPOINT,
        RC30_CURRENT,
        RC30_SET_MODE,
        RC30_SET_TEMP,
        RC35_SETPOINT,
        RC35_CURRENT,
        RC35_SET_MODE,
        RC35_SET_TEMP_DAY,
        RC35_SET_TEMP_NIGHT,
        RC35_GET_MODE_DAY,
        EASY_SETPOINT,
        EASY_CURRENT,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_type_conversion() -> Result<()> {
        assert_eq!(MessageType::try_from(0x3E)?, MessageType::Rc35Status);
        assert_eq!(MessageType::try_from(0x33)?, MessageType::UbaParameterWw);
        assert_eq!(
            MessageType::try_from(0xFF),
            Err(Error::UnknownMessageType(0xFF))
        );
        Ok(())
    }

    #[test]
    fn test_message_codes_unique() {
        for (i, a) in MessageType::ALL.iter().enumerate() {
            for b in &MessageType::ALL[i + 1..] {
                assert_ne!(a.code(), b.code(), "{a:?} and {b:?} share a code");
            }
        }
    }

    #[test]
    fn test_message_origin() {
        assert_eq!(MessageType::Version.origin(), DeviceModel::All);
        assert_eq!(MessageType::UbaMonitorFast.origin(), DeviceModel::Uba);
        assert_eq!(MessageType::EasyStatus.origin(), DeviceModel::Easy);
        assert!(MessageType::RcOutdoorTemp.is_broadcast());
        assert!(!MessageType::Rc35Set.is_broadcast());
    }

    #[test]
    fn test_applies_to() {
        assert!(MessageType::Rc35Status.applies_to(DeviceModel::Rc35));
        assert!(!MessageType::Rc35Status.applies_to(DeviceModel::Rc30));
        assert!(MessageType::RcTime.applies_to(DeviceModel::Easy));
        assert!(MessageType::UbaMonitorFast.applies_to(DeviceModel::All));
    }

    #[test]
    fn test_rc35_day_mode_read_from_status() {
        assert_eq!(fields::RC35_GET_MODE_DAY.message, types::RC35_STATUS);
        assert_eq!(fields::RC35_GET_MODE_DAY.offset, 1);
        assert_eq!(fields::RC35_SET_MODE.message, types::RC35_SET);

        // day mode flag is bit 1 of byte 1 in the status broadcast
        let payload = [0x00, 0x02, 0x2A, 0x00, 0xD7];
        let flags = fields::RC35_GET_MODE_DAY.read(&payload).unwrap();
        assert_ne!(flags & 0x02, 0);
    }

    #[test]
    fn test_comfort_values() -> Result<()> {
        assert_eq!(WwComfort::try_from(0x00)?, WwComfort::Comfort);
        assert_eq!(WwComfort::try_from(0xD8)?, WwComfort::Eco);
        assert_eq!(WwComfort::Eco.as_byte(), 0xD8);
        assert!(WwComfort::try_from(0x01).is_err());
        Ok(())
    }

    #[test]
    fn test_field_read_write() -> Result<()> {
        let mut payload = [0u8; 10];
        fields::UBA_WW_COMFORT.write(&mut payload, WwComfort::Eco.as_byte())?;
        assert_eq!(payload[9], 0xD8);
        assert_eq!(
            WwComfort::try_from(fields::UBA_WW_COMFORT.read(&payload)?)?,
            WwComfort::Eco
        );
        Ok(())
    }

    #[test]
    fn test_field_out_of_range() {
        let payload = [0u8; 9];
        let err = fields::UBA_WW_COMFORT.read(&payload).unwrap_err();
        assert!(matches!(err, Error::PayloadTooShort { len: 9, .. }));

        let mut short = [0u8; 3];
        assert!(fields::RC20_SET_TEMP.write(&mut short, 42).is_err());
    }

    #[test]
    fn test_field_read_u16() -> Result<()> {
        // RC35 status: current room temperature 21.5 degrees as 215 in tenths
        let payload = [0x00, 0x00, 0x2A, 0x00, 0xD7];
        assert_eq!(fields::RC35_CURRENT.read_u16(&payload)?, 0x00D7);
        assert!(fields::RC35_CURRENT.read_u16(&payload[..4]).is_err());
        Ok(())
    }

    #[test]
    fn test_field_display() {
        assert_eq!(fields::UBA_WW_COMFORT.to_string(), "wwcomfort (0x33[9])");
    }
}
