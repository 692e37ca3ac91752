pub mod error;
pub mod params;
pub mod range;
pub mod settings;

// Re-exports
pub use error::{RandomizeError, SettingsError, TransportError};
pub use params::{ParamGroup, ParamInfo};
pub use range::ParamRange;
pub use settings::Settings;

/// One Control Change message of an NRPN burst.
///
/// Produced by the codec, handed straight to the transport. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NrpnMessage {
    /// CC controller number: 99, 98, 6 or 38.
    pub controller: u8,
    /// 7-bit payload (0-127).
    pub value: u8,
}

/// NRPN parameter number MSB (CC 99)
pub const CC_NRPN_MSB: u8 = 99;
/// NRPN parameter number LSB (CC 98)
pub const CC_NRPN_LSB: u8 = 98;
/// Data Entry MSB (CC 6)
pub const CC_DATA_MSB: u8 = 6;
/// Data Entry LSB (CC 38)
pub const CC_DATA_LSB: u8 = 38;

/// NRPN addresses and values are 14-bit quantities (two 7-bit halves).
pub const NRPN_MAX: u16 = 16383;
