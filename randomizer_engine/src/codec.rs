//! NRPN wire encoding.
//!
//! One parameter change is four Control Change messages in a fixed order:
//! parameter number MSB/LSB (CC 99/98), then Data Entry MSB/LSB (CC 6/38).
//! Receivers latch on exactly this sequence, so it must never be reordered
//! or interleaved with another parameter's burst.

use randomizer_shared::{NrpnMessage, CC_DATA_LSB, CC_DATA_MSB, CC_NRPN_LSB, CC_NRPN_MSB};

/// Encode one (parameter, value) pair as its 4-message CC burst.
///
/// Both inputs are 14-bit quantities; the Parameter Table and range
/// invariants guarantee that upstream, and anything wider is masked here.
pub fn encode(parameter: u16, value: u16) -> [NrpnMessage; 4] {
    [
        NrpnMessage {
            controller: CC_NRPN_MSB,
            value: ((parameter >> 7) & 0x7F) as u8,
        },
        NrpnMessage {
            controller: CC_NRPN_LSB,
            value: (parameter & 0x7F) as u8,
        },
        NrpnMessage {
            controller: CC_DATA_MSB,
            value: ((value >> 7) & 0x7F) as u8,
        },
        NrpnMessage {
            controller: CC_DATA_LSB,
            value: (value & 0x7F) as u8,
        },
    ]
}
