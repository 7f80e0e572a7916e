//! Property-based tests for EMS device identification and field offsets.
//!
//! Uses proptest to check, over every possible product id and payload:
//! - lookups never panic and agree with the tables
//! - unknown products fall back to the wildcard model
//! - every named field reads back what was written at it

use std::collections::HashSet;

use ems_devices::{
    fields, identify, lookup, require, DeviceClass, DeviceModel, MessageType, BOILER_TYPES,
    THERMOSTAT_TYPES,
};
use proptest::prelude::*;

#[test]
fn model_product_pairs_are_unique() {
    let mut seen = HashSet::new();
    for b in &BOILER_TYPES {
        assert!(seen.insert((b.model, b.product_id)), "duplicate boiler {b:?}");
    }

    let mut seen = HashSet::new();
    for t in &THERMOSTAT_TYPES {
        assert!(seen.insert((t.model, t.product_id)), "duplicate thermostat {t:?}");
    }
}

#[test]
fn rows_never_use_sentinel_models() {
    assert!(BOILER_TYPES.iter().all(|b| !b.model.is_sentinel()));
    assert!(THERMOSTAT_TYPES.iter().all(|t| !t.model.is_sentinel()));
    assert!(BOILER_TYPES
        .iter()
        .all(|b| b.model.class() == Some(DeviceClass::Boiler)));
    assert!(THERMOSTAT_TYPES
        .iter()
        .all(|t| t.model.class() == Some(DeviceClass::Thermostat)));
}

#[test]
fn rc35_is_fully_supported() {
    let entry = lookup(DeviceClass::Thermostat, 86).expect("RC35 is registered");
    assert_eq!(entry.model(), DeviceModel::Rc35);
    assert_eq!(entry.description(), "RC35");
    assert_eq!(entry.capabilities(), Some((true, true)));
    assert_eq!(entry.device_type_id(), 0x10);
}

#[test]
fn thermostat_capabilities_match_table() {
    let unverified: Vec<DeviceModel> = THERMOSTAT_TYPES
        .iter()
        .filter(|t| !t.can_read && !t.can_write)
        .map(|t| t.model)
        .collect();
    assert_eq!(unverified, vec![DeviceModel::Rc310, DeviceModel::Cw100]);
}

#[test]
fn every_registered_thermostat_with_layout_is_readable() {
    for t in &THERMOSTAT_TYPES {
        if let Some(layout) = t.model.thermostat_layout() {
            assert!(t.can_read, "{} has a layout but is not readable", t.model);
            assert_eq!(layout.is_writable(), t.can_write, "{}", t.model);
        }
    }
}

#[test]
fn fields_index_known_telegrams() {
    for field in fields::ALL {
        assert!(
            MessageType::try_from(field.message).is_ok(),
            "{field} points at an unknown telegram"
        );
    }
}

fn class_strategy() -> impl Strategy<Value = DeviceClass> {
    prop_oneof![Just(DeviceClass::Boiler), Just(DeviceClass::Thermostat)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Lookup agrees with a scan of the matching table for any product id.
    #[test]
    fn prop_lookup_matches_table(class in class_strategy(), product_id in any::<u8>()) {
        let in_table = match class {
            DeviceClass::Boiler => BOILER_TYPES.iter().any(|b| b.product_id == product_id),
            DeviceClass::Thermostat => THERMOSTAT_TYPES.iter().any(|t| t.product_id == product_id),
        };
        let found = lookup(class, product_id);
        prop_assert_eq!(found.is_some(), in_table);
        prop_assert_eq!(require(class, product_id).is_ok(), in_table);
        if let Some(entry) = found {
            prop_assert_eq!(entry.product_id(), product_id);
            prop_assert_eq!(entry.class(), class);
        }
    }

    /// Unknown products identify as the wildcard model with no capabilities.
    #[test]
    fn prop_identify_falls_back(class in class_strategy(), product_id in any::<u8>()) {
        let ident = identify(class, product_id);
        if ident.is_known() {
            prop_assert!(!ident.model.is_sentinel());
            prop_assert!(ident.description.is_some());
        } else {
            prop_assert_eq!(ident.model, DeviceModel::All);
            prop_assert!(ident.description.is_none());
            prop_assert!(!ident.can_read && !ident.can_write);
        }
    }

    /// Boiler-class rows record no capabilities, so none are reported as verified.
    #[test]
    fn prop_boilers_never_verified(product_id in any::<u8>()) {
        let ident = identify(DeviceClass::Boiler, product_id);
        prop_assert!(!ident.can_read && !ident.can_write);
        if let Some(entry) = ident.entry {
            prop_assert_eq!(entry.capabilities(), None);
        }
    }

    /// Unknown type codes are rejected, known ones round-trip through their code.
    #[test]
    fn prop_message_type_codes(code: u8) {
        match MessageType::try_from(code) {
            Ok(t) => {
                prop_assert_eq!(t.code(), code);
            }
            Err(e) => {
                prop_assert_eq!(e, ems_devices::Error::UnknownMessageType(code));
            }
        }
    }

    /// A byte written at a named field reads back unchanged and touches nothing else.
    #[test]
    fn prop_field_write_read(idx in 0usize..fields::ALL.len(), value in any::<u8>(), extra in 0usize..8) {
        let field = fields::ALL[idx];
        let mut payload = vec![0u8; field.min_payload_len() + extra];
        field.write(&mut payload, value).unwrap();
        prop_assert_eq!(field.read(&payload).unwrap(), value);
        for (i, b) in payload.iter().enumerate() {
            if i != field.offset as usize {
                prop_assert_eq!(*b, 0);
            }
        }
    }

    /// Payloads that stop before a field are an error, never a panic.
    #[test]
    fn prop_short_payload_rejected(idx in 0usize..fields::ALL.len()) {
        let field = fields::ALL[idx];
        let mut payload = vec![0u8; field.offset as usize];
        prop_assert!(field.read(&payload).is_err());
        prop_assert!(field.write(&mut payload, 1).is_err());
    }
}
