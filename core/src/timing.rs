//! Send retry and emergency mode timing

/// Retransmission attempts after a failed send
pub const SEND_RETRY: u32 = 5;

/// Delay during the emergency scan phase, in seconds
pub const EMERGENCY_SCANTIMEDELAY: u32 = 2;

/// Delay between emergency packets, in seconds
pub const EMERGENCY_PACKETDELAY: u32 = 2;

/// [`EMERGENCY_SCANTIMEDELAY`] in milliseconds
pub const EMERGENCY_SCANTIMEDELAY_MS: u64 = EMERGENCY_SCANTIMEDELAY as u64 * 1000;
/// [`EMERGENCY_PACKETDELAY`] in milliseconds
pub const EMERGENCY_PACKETDELAY_MS: u64 = EMERGENCY_PACKETDELAY as u64 * 1000;

/// Emergency mode tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EmergencyConfig {
    /// Retries after the first send attempt
    pub send_retry: u32,
    /// Scan phase delay in seconds
    pub scan_delay_secs: u32,
    /// Inter-packet delay in seconds
    pub packet_delay_secs: u32,
}

impl EmergencyConfig {
    pub const fn new() -> Self {
        Self {
            send_retry: SEND_RETRY,
            scan_delay_secs: EMERGENCY_SCANTIMEDELAY,
            packet_delay_secs: EMERGENCY_PACKETDELAY,
        }
    }

    pub const fn scan_delay_ms(&self) -> u64 {
        self.scan_delay_secs as u64 * 1000
    }

    pub const fn packet_delay_ms(&self) -> u64 {
        self.packet_delay_secs as u64 * 1000
    }

    /// Total sends including the first attempt
    pub const fn send_attempts(&self) -> u32 {
        self.send_retry.saturating_add(1)
    }
}

impl Default for EmergencyConfig {
    fn default() -> Self {
        Self::new()
    }
}
