//! Configuration error types

use crate::config::PinConflict;
use crate::pins::PinRole;

/// Reasons a device configuration is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// GPIO number does not exist on the chip
    PinOutOfRange { role: PinRole, gpio: u8 },
    /// Two roles wired to the same GPIO
    PinConflict(PinConflict),
    /// Role needs an output driver but the GPIO is input-only
    InputOnlyPin { role: PinRole, gpio: u8 },
    /// Send retry count is zero
    ZeroRetries,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::PinOutOfRange { role, gpio } => {
                write!(f, "{} on GPIO {} is out of range", role, gpio)
            }
            Self::PinConflict(c) => write!(
                f,
                "{} and {} both wired to GPIO {}",
                c.first, c.second, c.gpio
            ),
            Self::InputOnlyPin { role, gpio } => {
                write!(f, "{} needs an output but GPIO {} is input-only", role, gpio)
            }
            Self::ZeroRetries => write!(f, "Send retry count is zero"),
        }
    }
}

// Implement core::error::Error for no_std compatibility
impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ConfigError::PinConflict(PinConflict {
            first: PinRole::GpsTx,
            second: PinRole::BuiltinLed,
            gpio: 15,
        });
        assert_eq!(
            err.to_string(),
            "GPS_TX and BUILTIN_LED both wired to GPIO 15"
        );

        let err = ConfigError::InputOnlyPin {
            role: PinRole::BuiltinLed,
            gpio: 35,
        };
        assert_eq!(
            err.to_string(),
            "BUILTIN_LED needs an output but GPIO 35 is input-only"
        );

        let err = ConfigError::PinOutOfRange {
            role: PinRole::Button,
            gpio: 40,
        };
        assert_eq!(err.to_string(), "BUTTON_PIN on GPIO 40 is out of range");

        assert_eq!(
            ConfigError::ZeroRetries.to_string(),
            "Send retry count is zero"
        );
    }
}
