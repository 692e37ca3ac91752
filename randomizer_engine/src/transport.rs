//! Seam between the engine and the platform MIDI layer.

use randomizer_shared::{NrpnMessage, TransportError};

/// Output side of the MIDI device layer.
///
/// The engine calls `send` four times per parameter, one CC at a time, and
/// relies on the implementation to preserve call order per destination.
/// Production uses a midir-backed implementation in the host; tests inject
/// an in-memory mock.
pub trait MidiTransport {
    /// Names of the currently enumerated output destinations, in
    /// enumeration order.
    fn list_output_destinations(&self) -> Vec<String>;

    /// Send one Control Change message to the named destination.
    fn send(&mut self, destination: &str, msg: NrpnMessage) -> Result<(), TransportError>;
}
