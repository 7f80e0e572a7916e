//! Per-model thermostat telegram layouts

use crate::core::DeviceModel;
use crate::message::{fields, Field, MessageType};

/// Where a thermostat model reports and accepts its temperatures
///
/// Status fields live in the model's status broadcast; set fields in the
/// telegram used to write setpoints and mode. Models that cannot be written
/// to have no set fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ThermostatLayout {
    /// Model this layout belongs to
    pub model: DeviceModel,
    /// Status broadcast carrying setpoint and room temperature
    pub status: MessageType,
    /// Setpoint temperature in the status telegram
    pub setpoint: Field,
    /// Current room temperature in the status telegram
    pub current: Field,
    /// Telegram for writing setpoints and mode
    pub set: Option<MessageType>,
    /// Mode byte in the set telegram
    pub set_mode: Option<Field>,
    /// Setpoint temperature in the set telegram (day temperature on the RC35)
    pub set_temp: Option<Field>,
    /// Night temperature in the set telegram
    pub set_temp_night: Option<Field>,
}

/// RC10: setpoint write only, no mode byte
pub const RC10_LAYOUT: ThermostatLayout = ThermostatLayout {
    model: DeviceModel::Rc10,
    status: MessageType::Rc10Status,
    setpoint: fields::RC10_SETPOINT,
    current: fields::RC10_CURRENT,
    set: Some(MessageType::Rc10Set),
    set_mode: None,
    set_temp: Some(fields::RC10_SET_TEMP),
    set_temp_night: None,
};

/// RC20 layout
pub const RC20_LAYOUT: ThermostatLayout = ThermostatLayout {
    model: DeviceModel::Rc20,
    status: MessageType::Rc20Status,
    setpoint: fields::RC20_SETPOINT,
    current: fields::RC20_CURRENT,
    set: Some(MessageType::Rc20Set),
    set_mode: Some(fields::RC20_SET_MODE),
    set_temp: Some(fields::RC20_SET_TEMP),
    set_temp_night: None,
};

/// RC30 layout
pub const RC30_LAYOUT: ThermostatLayout = ThermostatLayout {
    model: DeviceModel::Rc30,
    status: MessageType::Rc30Status,
    setpoint: fields::RC30_SETPOINT,
    current: fields::RC30_CURRENT,
    set: Some(MessageType::Rc30Set),
    set_mode: Some(fields::RC30_SET_MODE),
    set_temp: Some(fields::RC30_SET_TEMP),
    set_temp_night: None,
};

/// RC35: separate day and night setpoints
pub const RC35_LAYOUT: ThermostatLayout = ThermostatLayout {
    model: DeviceModel::Rc35,
    status: MessageType::Rc35Status,
    setpoint: fields::RC35_SETPOINT,
    current: fields::RC35_CURRENT,
    set: Some(MessageType::Rc35Set),
    set_mode: Some(fields::RC35_SET_MODE),
    set_temp: Some(fields::RC35_SET_TEMP_DAY),
    set_temp_night: Some(fields::RC35_SET_TEMP_NIGHT),
};

/// Nefit Easy: status only, not writable
pub const EASY_LAYOUT: ThermostatLayout = ThermostatLayout {
    model: DeviceModel::Easy,
    status: MessageType::EasyStatus,
    setpoint: fields::EASY_SETPOINT,
    current: fields::EASY_CURRENT,
    set: None,
    set_mode: None,
    set_temp: None,
    set_temp_night: None,
};

impl ThermostatLayout {
    /// Check if the model has a telegram for writing setpoints
    pub fn is_writable(&self) -> bool {
        self.set.is_some()
    }
}

impl DeviceModel {
    /// Telegram layout used by this thermostat family
    ///
    /// ES73, RC20F, RC310 and CW100 have no dedicated layout.
    pub fn thermostat_layout(&self) -> Option<&'static ThermostatLayout> {
        match self {
            DeviceModel::Rc10 => Some(&RC10_LAYOUT),
            DeviceModel::Rc20 => Some(&RC20_LAYOUT),
            DeviceModel::Rc30 => Some(&RC30_LAYOUT),
            DeviceModel::Rc35 => Some(&RC35_LAYOUT),
            DeviceModel::Easy => Some(&EASY_LAYOUT),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fields_match_telegrams() {
        for model in DeviceModel::THERMOSTATS {
            let Some(layout) = model.thermostat_layout() else {
                continue;
            };
            assert_eq!(layout.model, model);
            assert_eq!(layout.status.origin(), model);
            assert_eq!(layout.setpoint.message, layout.status.code());
            assert_eq!(layout.current.message, layout.status.code());

            let set_fields = [layout.set_mode, layout.set_temp, layout.set_temp_night];
            for field in set_fields.into_iter().flatten() {
                assert_eq!(Some(field.message), layout.set.map(|s| s.code()));
            }
        }
    }

    #[test]
    fn test_models_without_layout() {
        assert!(DeviceModel::Es73.thermostat_layout().is_none());
        assert!(DeviceModel::Rc310.thermostat_layout().is_none());
        assert!(DeviceModel::Uba.thermostat_layout().is_none());
        assert!(DeviceModel::All.thermostat_layout().is_none());
    }

    #[test]
    fn test_easy_is_read_only() {
        assert!(!EASY_LAYOUT.is_writable());
        assert!(RC35_LAYOUT.is_writable());
        assert_eq!(RC35_LAYOUT.set_temp_night, Some(fields::RC35_SET_TEMP_NIGHT));
    }
}
