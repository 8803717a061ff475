//! Board wiring and emergency timing for the beacon firmware
//!
//! This crate holds the hardware configuration every firmware module reads:
//! GPIO numbers for the GPS UART, accelerometer interrupt, button and LED,
//! plus the send retry count and emergency mode delays. It has NO hardware
//! dependencies and builds for the host as well as the target.
//!
//! The values are `const` items and cannot be reassigned:
//!
//! ```compile_fail
//! beacon_core::GPS_TX = 4;
//! ```
//!
//! ```compile_fail
//! beacon_core::SEND_RETRY += 1;
//! ```
//!
//! Enable the `defmt` feature on firmware builds to derive `defmt::Format`
//! and get `config::log_config` for boot logging.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]
#![deny(warnings)]

pub mod config;
pub mod error;
pub mod pins;
pub mod timing;

pub use config::{DeviceConfig, PinConflict, PinMap};
pub use error::ConfigError;
pub use pins::{
    Direction, PinAssignment, PinRole, ACCEL_INT, BUILTIN_LED, BUTTON_PIN, GPS_RX, GPS_TX,
    PIN_TABLE,
};
pub use timing::{EmergencyConfig, EMERGENCY_PACKETDELAY, EMERGENCY_SCANTIMEDELAY, SEND_RETRY};
