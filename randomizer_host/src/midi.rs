//! midir-backed implementation of the engine's transport seam.

use midir::{MidiOutput, MidiOutputConnection};
use randomizer_engine::MidiTransport;
use randomizer_shared::{NrpnMessage, TransportError};

const CLIENT_NAME: &str = "deepmind-randomizer";

/// Control Change status byte, channel 1.
const CC_STATUS: u8 = 0xB0;

/// Real MIDI output via midir.
///
/// The connection to a destination is opened lazily on the first send and
/// kept for the rest of the batch, so a 223-parameter run opens the port
/// once instead of 892 times.
pub struct MidirTransport {
    conn: Option<(String, MidiOutputConnection)>,
}

impl MidirTransport {
    pub fn new() -> Self {
        Self { conn: None }
    }

    fn open(destination: &str) -> Result<MidiOutputConnection, TransportError> {
        let output = MidiOutput::new(CLIENT_NAME).map_err(|e| TransportError(e.to_string()))?;
        let port = output
            .ports()
            .into_iter()
            .find(|p| {
                output
                    .port_name(p)
                    .map(|name| name == destination)
                    .unwrap_or(false)
            })
            .ok_or_else(|| TransportError(format!("output port '{}' is gone", destination)))?;
        output
            .connect(&port, CLIENT_NAME)
            .map_err(|e| TransportError(e.to_string()))
    }
}

impl Default for MidirTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MidiTransport for MidirTransport {
    fn list_output_destinations(&self) -> Vec<String> {
        let output = match MidiOutput::new(CLIENT_NAME) {
            Ok(output) => output,
            Err(_) => return Vec::new(),
        };
        output
            .ports()
            .iter()
            .filter_map(|p| output.port_name(p).ok())
            .collect()
    }

    fn send(&mut self, destination: &str, msg: NrpnMessage) -> Result<(), TransportError> {
        let bytes = [CC_STATUS, msg.controller, msg.value];
        match &mut self.conn {
            Some((name, conn)) if name == destination => conn
                .send(&bytes)
                .map_err(|e| TransportError(e.to_string())),
            _ => {
                let mut conn = Self::open(destination)?;
                let result = conn
                    .send(&bytes)
                    .map_err(|e| TransportError(e.to_string()));
                self.conn = Some((destination.to_string(), conn));
                result
            }
        }
    }
}
