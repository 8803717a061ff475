//! Board wiring
//!
//! GPIO numbers for every peripheral line on the beacon board. The numeric
//! constants are the interface other firmware modules read; [`PIN_TABLE`]
//! carries the same wiring with each line's role attached.
//!
//! GPIO numbering follows the ESP32: GPIO 0..=39 exist and GPIO 34..=39 have
//! no output driver.

/// GPS UART, transmit line
pub const GPS_TX: u8 = 15;
/// GPS UART, receive line
pub const GPS_RX: u8 = 12;
/// Accelerometer interrupt line
pub const ACCEL_INT: u8 = 34;
/// User button
pub const BUTTON_PIN: u8 = 38;
/// Onboard LED
pub const BUILTIN_LED: u8 = 14;

/// Highest GPIO number on the ESP32
pub const MAX_GPIO: u8 = 39;

/// First GPIO of the input-only bank (34..=39)
pub const FIRST_INPUT_ONLY_GPIO: u8 = 34;

/// Number of wired roles
pub const PIN_COUNT: usize = 5;

/// Peripheral line a GPIO is wired to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinRole {
    /// GPS UART transmit line (`GPS_TX`)
    GpsTx,
    /// GPS UART receive line (`GPS_RX`)
    GpsRx,
    /// Accelerometer interrupt (`ACCEL_INT`)
    AccelInt,
    /// User button (`BUTTON_PIN`)
    Button,
    /// Onboard LED (`BUILTIN_LED`)
    BuiltinLed,
}

/// How the firmware drives a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Serial line; the pin pair needs an output driver for TX
    Uart,
    /// Read only
    Input,
    /// Driven by the firmware
    Output,
}

impl PinRole {
    /// Every role, in wiring-table order
    pub const ALL: [PinRole; PIN_COUNT] = [
        PinRole::GpsTx,
        PinRole::GpsRx,
        PinRole::AccelInt,
        PinRole::Button,
        PinRole::BuiltinLed,
    ];

    /// GPIO the board wires this role to
    pub const fn gpio(self) -> u8 {
        match self {
            PinRole::GpsTx => GPS_TX,
            PinRole::GpsRx => GPS_RX,
            PinRole::AccelInt => ACCEL_INT,
            PinRole::Button => BUTTON_PIN,
            PinRole::BuiltinLed => BUILTIN_LED,
        }
    }

    /// Name of the constant holding this role's GPIO
    pub const fn name(self) -> &'static str {
        match self {
            PinRole::GpsTx => "GPS_TX",
            PinRole::GpsRx => "GPS_RX",
            PinRole::AccelInt => "ACCEL_INT",
            PinRole::Button => "BUTTON_PIN",
            PinRole::BuiltinLed => "BUILTIN_LED",
        }
    }

    /// How the firmware drives this role
    pub const fn direction(self) -> Direction {
        match self {
            PinRole::GpsTx | PinRole::GpsRx => Direction::Uart,
            PinRole::AccelInt | PinRole::Button => Direction::Input,
            PinRole::BuiltinLed => Direction::Output,
        }
    }

    /// Whether the line needs a pin with an output driver
    pub const fn needs_output(self) -> bool {
        !matches!(self.direction(), Direction::Input)
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            PinRole::GpsTx => 0,
            PinRole::GpsRx => 1,
            PinRole::AccelInt => 2,
            PinRole::Button => 3,
            PinRole::BuiltinLed => 4,
        }
    }
}

impl core::fmt::Display for PinRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// A role bound to a GPIO number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinAssignment {
    pub role: PinRole,
    pub gpio: u8,
}

impl PinAssignment {
    pub const fn new(role: PinRole, gpio: u8) -> Self {
        Self { role, gpio }
    }
}

/// Board wiring, one entry per role in [`PinRole::ALL`] order
pub const PIN_TABLE: [PinAssignment; PIN_COUNT] = [
    PinAssignment::new(PinRole::GpsTx, GPS_TX),
    PinAssignment::new(PinRole::GpsRx, GPS_RX),
    PinAssignment::new(PinRole::AccelInt, ACCEL_INT),
    PinAssignment::new(PinRole::Button, BUTTON_PIN),
    PinAssignment::new(PinRole::BuiltinLed, BUILTIN_LED),
];

/// Check that no two assignments share a GPIO
///
/// `const` so the wiring table can be checked at build time.
pub const fn pins_distinct(table: &[PinAssignment]) -> bool {
    let mut i = 0;
    while i < table.len() {
        let mut j = i + 1;
        while j < table.len() {
            if table[i].gpio == table[j].gpio {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

// A colliding edit to the constants above fails the build here.
const _: () = assert!(pins_distinct(&PIN_TABLE), "board pins must be distinct");

pub const fn is_valid_gpio(gpio: u8) -> bool {
    gpio <= MAX_GPIO
}

/// GPIO 34..=39 can only be read
pub const fn is_input_only(gpio: u8) -> bool {
    gpio >= FIRST_INPUT_ONLY_GPIO && gpio <= MAX_GPIO
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_values() {
        assert_eq!(GPS_TX, 15);
        assert_eq!(GPS_RX, 12);
        assert_eq!(ACCEL_INT, 34);
        assert_eq!(BUTTON_PIN, 38);
        assert_eq!(BUILTIN_LED, 14);
    }

    #[test]
    fn test_pins_pairwise_distinct() {
        let pins = [GPS_TX, GPS_RX, ACCEL_INT, BUTTON_PIN, BUILTIN_LED];
        for (i, a) in pins.iter().enumerate() {
            for b in &pins[i + 1..] {
                assert_ne!(a, b, "GPIO {} wired twice", a);
            }
        }
        assert!(pins_distinct(&PIN_TABLE));
    }

    #[test]
    fn test_pins_distinct_detects_collision() {
        let table = [
            PinAssignment::new(PinRole::GpsTx, 15),
            PinAssignment::new(PinRole::BuiltinLed, 15),
        ];
        assert!(!pins_distinct(&table));
        assert!(pins_distinct(&[]));
    }

    #[test]
    fn test_table_matches_roles() {
        for (entry, role) in PIN_TABLE.iter().zip(PinRole::ALL) {
            assert_eq!(entry.role, role);
            assert_eq!(entry.gpio, role.gpio());
            assert_eq!(PIN_TABLE[role.index()].role, role);
        }
    }

    #[test]
    fn test_role_names() {
        assert_eq!(PinRole::GpsTx.name(), "GPS_TX");
        assert_eq!(PinRole::Button.name(), "BUTTON_PIN");
        assert_eq!(format!("{}", PinRole::BuiltinLed), "BUILTIN_LED");
    }

    #[test]
    fn test_directions() {
        assert_eq!(PinRole::AccelInt.direction(), Direction::Input);
        assert_eq!(PinRole::Button.direction(), Direction::Input);
        assert_eq!(PinRole::BuiltinLed.direction(), Direction::Output);
        assert!(PinRole::GpsTx.needs_output());
        assert!(PinRole::GpsRx.needs_output());
        assert!(!PinRole::Button.needs_output());
    }

    #[test]
    fn test_input_only_bank() {
        assert!(!is_input_only(33));
        assert!(is_input_only(34));
        assert!(is_input_only(39));
        assert!(!is_input_only(40));
        assert!(is_valid_gpio(0));
        assert!(is_valid_gpio(39));
        assert!(!is_valid_gpio(40));
        // Input roles sit in the input-only bank on this board.
        assert!(is_input_only(ACCEL_INT));
        assert!(is_input_only(BUTTON_PIN));
        assert!(!is_input_only(BUILTIN_LED));
    }
}
