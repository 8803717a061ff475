//! Device configuration
//!
//! [`DeviceConfig`] gathers the board wiring and emergency timing into one
//! value the firmware checks once at boot. The defaults are the board
//! constants; a board revision that rewires a line remaps it with
//! [`PinMap::with`] and must pass [`DeviceConfig::validate`].
//!
//! # Usage
//!
//! ```
//! use beacon_core::{DeviceConfig, PinRole};
//!
//! let config = DeviceConfig::default();
//! assert!(config.validate().is_ok());
//! assert_eq!(config.pins.gpio(PinRole::BuiltinLed), 14);
//! ```

use heapless::Vec;

use crate::error::ConfigError;
use crate::pins::{self, PinAssignment, PinRole, PIN_COUNT, PIN_TABLE};
use crate::timing::EmergencyConfig;

/// Upper bound on colliding role pairs (5 choose 2)
pub const MAX_PIN_CONFLICTS: usize = PIN_COUNT * (PIN_COUNT - 1) / 2;

/// Two roles wired to the same GPIO
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConflict {
    pub first: PinRole,
    pub second: PinRole,
    pub gpio: u8,
}

/// GPIO per role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinMap {
    gpios: [u8; PIN_COUNT],
}

impl PinMap {
    /// Board wiring from [`PIN_TABLE`]
    pub const fn new() -> Self {
        let mut gpios = [0u8; PIN_COUNT];
        let mut i = 0;
        while i < PIN_COUNT {
            gpios[i] = PIN_TABLE[i].gpio;
            i += 1;
        }
        Self { gpios }
    }

    /// GPIO currently assigned to `role`
    pub const fn gpio(&self, role: PinRole) -> u8 {
        self.gpios[role.index()]
    }

    /// Copy of this map with `role` moved to `gpio`
    #[must_use]
    pub const fn with(mut self, role: PinRole, gpio: u8) -> Self {
        self.gpios[role.index()] = gpio;
        self
    }

    /// Assignments in [`PinRole::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = PinAssignment> + '_ {
        PinRole::ALL
            .into_iter()
            .map(move |role| PinAssignment::new(role, self.gpio(role)))
    }

    /// Every pair of roles sharing a GPIO, in wiring-table order
    pub fn conflicts(&self) -> Vec<PinConflict, MAX_PIN_CONFLICTS> {
        let mut conflicts = Vec::new();
        for (i, &first) in PinRole::ALL.iter().enumerate() {
            for &second in &PinRole::ALL[i + 1..] {
                let gpio = self.gpio(first);
                if gpio == self.gpio(second) {
                    // Capacity covers every pair
                    if conflicts
                        .push(PinConflict {
                            first,
                            second,
                            gpio,
                        })
                        .is_err()
                    {
                        return conflicts;
                    }
                }
            }
        }
        conflicts
    }

    /// Check range, collisions and input-only pins, in that order
    pub fn validate(&self) -> Result<(), ConfigError> {
        for PinAssignment { role, gpio } in self.iter() {
            if !pins::is_valid_gpio(gpio) {
                return Err(ConfigError::PinOutOfRange { role, gpio });
            }
        }

        if let Some(conflict) = self.conflicts().first() {
            return Err(ConfigError::PinConflict(*conflict));
        }

        for PinAssignment { role, gpio } in self.iter() {
            if role.needs_output() && pins::is_input_only(gpio) {
                return Err(ConfigError::InputOnlyPin { role, gpio });
            }
        }

        Ok(())
    }
}

impl Default for PinMap {
    fn default() -> Self {
        Self::new()
    }
}

/// Board wiring plus emergency timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceConfig {
    pub pins: PinMap,
    pub emergency: EmergencyConfig,
}

impl DeviceConfig {
    pub const fn new() -> Self {
        Self {
            pins: PinMap::new(),
            emergency: EmergencyConfig::new(),
        }
    }

    /// Check the configuration before any peripheral is claimed
    ///
    /// Returns the first problem found: GPIO range, then collisions, then
    /// output roles on input-only pins, then the retry count.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pins.validate()?;
        if self.emergency.send_retry == 0 {
            return Err(ConfigError::ZeroRetries);
        }
        Ok(())
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Log the configuration at boot
#[cfg(feature = "defmt")]
pub fn log_config(config: &DeviceConfig) {
    for PinAssignment { role, gpio } in config.pins.iter() {
        defmt::info!("{=str} -> GPIO{=u8} ({})", role.name(), gpio, role.direction());
    }
    defmt::info!(
        "Emergency: {=u32} retries, scan delay {=u32}s, packet delay {=u32}s",
        config.emergency.send_retry,
        config.emergency.scan_delay_secs,
        config.emergency.packet_delay_secs
    );
    if let Err(e) = config.validate() {
        defmt::error!("Invalid device config: {}", e);
    }
}
