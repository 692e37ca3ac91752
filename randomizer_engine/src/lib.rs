pub mod codec;
pub mod engine;
pub mod settings_io;
pub mod transport;

// Re-exports
pub use engine::{RandomizeReport, Randomizer};
pub use transport::MidiTransport;
