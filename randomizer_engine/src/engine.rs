//! Randomization engine.
//!
//! Owns the per-parameter range and inclusion state, resolves the output
//! destination, draws values and drives the codec + transport one parameter
//! at a time. All failure paths come back as a [`RandomizeReport`]; nothing
//! here terminates the process or pops UI.

use crate::codec;
use crate::settings_io;
use crate::transport::MidiTransport;
use randomizer_shared::params::{self, PARAM_COUNT};
use randomizer_shared::range::{self, ParamRange};
use randomizer_shared::settings::{Settings, DEFAULT_SETTINGS_FILE};
use randomizer_shared::{RandomizeError, SettingsError};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Outcome of one `randomize` call.
#[derive(Debug, Default)]
pub struct RandomizeReport {
    /// Parameters whose full 4-message burst went out.
    pub sent: usize,
    /// Per-parameter failures; the batch continued past each of these.
    pub failures: Vec<(u16, RandomizeError)>,
    /// Set when the batch was aborted before any message was sent
    /// (destination resolution failed).
    pub aborted: Option<RandomizeError>,
}

impl RandomizeReport {
    pub fn is_clean(&self) -> bool {
        self.aborted.is_none() && self.failures.is_empty()
    }
}

/// Engine state: device-name substring, ranges, inclusion flags, busy flag.
///
/// The engine only reads range/inclusion state during a batch; mutation
/// happens through the setters between batches (a single caller thread is
/// assumed, see the busy-flag contract on [`Randomizer::randomize`]).
pub struct Randomizer {
    device_name: String,
    ranges: Vec<ParamRange>,
    included: Vec<bool>,
    busy: Arc<AtomicBool>,
    settings_path: PathBuf,
}

impl Default for Randomizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Randomizer {
    /// Engine with built-in defaults: full ranges, everything included
    /// except the stock exclusion list, settings in `.deepmind_defaults`.
    pub fn new() -> Self {
        let mut ranges = Vec::with_capacity(PARAM_COUNT);
        let mut included = vec![true; PARAM_COUNT];
        for id in params::all_ids() {
            if let Some(info) = params::lookup(id) {
                ranges.push(ParamRange::full(info.max_value));
            }
        }
        for &id in &params::DEFAULT_EXCLUDED {
            included[id as usize] = false;
        }
        Self {
            device_name: randomizer_shared::settings::DEFAULT_DEVICE_NAME.to_string(),
            ranges,
            included,
            busy: Arc::new(AtomicBool::new(false)),
            settings_path: PathBuf::from(DEFAULT_SETTINGS_FILE),
        }
    }

    pub fn with_settings_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings_path = path.into();
        self
    }

    // --- Device / busy state ---

    pub fn device_name(&self) -> &str {
        &self.device_name
    }

    pub fn set_device_name(&mut self, name: impl Into<String>) {
        self.device_name = name.into();
    }

    /// Advisory flag: true while a batch is in flight. Callers use it to
    /// block re-entrant invocation; it is not a lock.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Shared handle to the busy flag, for callers that poll from another
    /// thread (e.g. to disable UI controls).
    pub fn busy_handle(&self) -> Arc<AtomicBool> {
        self.busy.clone()
    }

    // --- Range / inclusion accessors ---

    pub fn get_range(&self, id: u16) -> Option<ParamRange> {
        self.ranges.get(id as usize).copied()
    }

    /// Store a range for `id`, normalized through the validator. Returns
    /// the stored range, or `None` for an unknown id.
    pub fn set_range(&mut self, id: u16, min: i32, max: i32) -> Option<ParamRange> {
        let info = params::lookup(id)?;
        let validated = range::validate(info.max_value, min, max);
        self.ranges[id as usize] = validated;
        Some(validated)
    }

    /// Unknown ids are never included.
    pub fn is_included(&self, id: u16) -> bool {
        self.included.get(id as usize).copied().unwrap_or(false)
    }

    /// Returns false (and does nothing) for an unknown id.
    pub fn set_included(&mut self, id: u16, included: bool) -> bool {
        match self.included.get_mut(id as usize) {
            Some(flag) => {
                *flag = included;
                true
            }
            None => false,
        }
    }

    // --- Randomization ---

    /// Randomize a batch of parameters.
    ///
    /// `targets == None` means every included parameter; otherwise the
    /// supplied ids intersected with the inclusion set, in the supplied
    /// order (excluded ids are silently dropped). The destination is the
    /// first enumerated output whose name contains the configured device
    /// name, case-insensitively; no match aborts the batch with zero sends.
    /// A transport failure or degenerate range on one parameter is recorded
    /// and the batch moves on.
    ///
    /// The busy flag is raised for the duration of the call on every path.
    pub fn randomize(
        &self,
        targets: Option<&[u16]>,
        transport: &mut dyn MidiTransport,
    ) -> RandomizeReport {
        self.busy.store(true, Ordering::SeqCst);
        let report = self.run_batch(targets, transport);
        self.busy.store(false, Ordering::SeqCst);
        report
    }

    fn run_batch(
        &self,
        targets: Option<&[u16]>,
        transport: &mut dyn MidiTransport,
    ) -> RandomizeReport {
        let mut report = RandomizeReport::default();

        let candidates: Vec<u16> = match targets {
            None => params::all_ids().filter(|&id| self.is_included(id)).collect(),
            Some(ids) => ids.iter().copied().filter(|&id| self.is_included(id)).collect(),
        };
        if candidates.is_empty() {
            // Nothing to do; don't even touch the device layer.
            return report;
        }

        let wanted = self.device_name.to_lowercase();
        let destination = transport
            .list_output_destinations()
            .into_iter()
            .find(|port| port.to_lowercase().contains(&wanted));
        let destination = match destination {
            Some(destination) => destination,
            None => {
                report.aborted = Some(RandomizeError::DeviceNotFound(self.device_name.clone()));
                return report;
            }
        };

        for id in candidates {
            let range = self.ranges[id as usize];
            if range.is_empty() {
                report.failures.push((
                    id,
                    RandomizeError::EmptyRange {
                        id,
                        min: range.min,
                        max: range.max,
                    },
                ));
                continue;
            }
            let value = fastrand::i32(range.min..=range.max) as u16;

            // One full burst per parameter; never interleave bursts.
            let mut burst_failed = false;
            for msg in codec::encode(id, value) {
                if let Err(e) = transport.send(&destination, msg) {
                    report.failures.push((id, RandomizeError::Transport(e)));
                    burst_failed = true;
                    break;
                }
            }
            if !burst_failed {
                report.sent += 1;
            }
        }
        report
    }

    // --- Settings boundaries ---

    /// Snapshot of the full persistable state.
    pub fn to_settings(&self) -> Settings {
        let mut settings = Settings::default();
        settings.device_name = self.device_name.clone();
        for id in params::all_ids() {
            settings.skip_params.insert(id, self.is_included(id));
            settings
                .param_ranges
                .insert(id, self.ranges[id as usize]);
        }
        settings
    }

    /// Apply a loaded blob on top of the current state. Unknown parameter
    /// ids are ignored; loaded ranges pass through the validator so a
    /// hand-edited file cannot violate range invariants.
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.device_name = settings.device_name.clone();
        for (&id, &included) in &settings.skip_params {
            self.set_included(id, included);
        }
        for (&id, range) in &settings.param_ranges {
            self.set_range(id, range.min, range.max);
        }
    }

    /// Load the settings blob if present. `Ok(false)` means no file, and
    /// built-in defaults stay in place. A corrupt file reports an error and
    /// also keeps defaults.
    pub fn load_settings(&mut self) -> Result<bool, SettingsError> {
        match settings_io::load(&self.settings_path)? {
            Some(settings) => {
                self.apply_settings(&settings);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Persist the full current state, overwriting any existing blob.
    pub fn save_settings(&self) -> Result<(), SettingsError> {
        settings_io::save(&self.settings_path, &self.to_settings())
    }

    /// Reset everything to built-in defaults and remove the persisted blob.
    pub fn clear_settings(&mut self) -> Result<(), SettingsError> {
        let fresh = Randomizer::new();
        self.device_name = fresh.device_name;
        self.ranges = fresh.ranges;
        self.included = fresh.included;
        settings_io::delete(&self.settings_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use randomizer_shared::{NrpnMessage, TransportError};
    use std::cell::Cell;

    /// In-memory transport that records every send.
    #[derive(Default)]
    struct MockTransport {
        ports: Vec<String>,
        sent: Vec<(String, NrpnMessage)>,
        enumerations: Cell<usize>,
        /// Fail the burst whose NRPN LSB (CC 98) equals this value.
        fail_lsb: Option<u8>,
        /// Observes the engine busy flag from inside sends.
        busy_probe: Option<(Arc<AtomicBool>, Arc<AtomicBool>)>,
    }

    impl MockTransport {
        fn with_deepmind_port() -> Self {
            Self {
                ports: vec!["Deepmind12D MIDI 1".to_string()],
                ..Default::default()
            }
        }

        /// Parameter ids of all complete bursts, decoded from CC 99/98.
        fn burst_param_ids(&self) -> Vec<u16> {
            self.sent
                .chunks(4)
                .filter(|burst| burst.len() == 4)
                .map(|burst| ((burst[0].1.value as u16) << 7) | burst[1].1.value as u16)
                .collect()
        }

        /// Data values of all complete bursts, decoded from CC 6/38.
        fn burst_values(&self) -> Vec<u16> {
            self.sent
                .chunks(4)
                .filter(|burst| burst.len() == 4)
                .map(|burst| ((burst[2].1.value as u16) << 7) | burst[3].1.value as u16)
                .collect()
        }
    }

    impl MidiTransport for MockTransport {
        fn list_output_destinations(&self) -> Vec<String> {
            self.enumerations.set(self.enumerations.get() + 1);
            self.ports.clone()
        }

        fn send(&mut self, destination: &str, msg: NrpnMessage) -> Result<(), TransportError> {
            if let Some((flag, seen)) = &self.busy_probe {
                if flag.load(Ordering::SeqCst) {
                    seen.store(true, Ordering::SeqCst);
                }
            }
            if msg.controller == 98 && Some(msg.value) == self.fail_lsb {
                return Err(TransportError("simulated send failure".to_string()));
            }
            self.sent.push((destination.to_string(), msg));
            Ok(())
        }
    }

    #[test]
    fn empty_candidate_set_skips_destination_resolution() {
        let engine = Randomizer::new();
        let mut transport = MockTransport::with_deepmind_port();

        let report = engine.randomize(Some(&[]), &mut transport);
        assert_eq!(report.sent, 0);
        assert!(report.is_clean());

        // An all-excluded target list is just as empty.
        let report = engine.randomize(Some(&[36, 37]), &mut transport);
        assert!(report.is_clean());

        assert_eq!(transport.enumerations.get(), 0);
        assert!(transport.sent.is_empty());
    }

    #[test]
    fn unknown_device_aborts_with_zero_sends() {
        let engine = Randomizer::new();
        let mut transport = MockTransport {
            ports: vec!["Some Other Synth".to_string()],
            ..Default::default()
        };

        let report = engine.randomize(None, &mut transport);
        assert!(matches!(
            report.aborted,
            Some(RandomizeError::DeviceNotFound(ref name)) if name == "Deepmind12D"
        ));
        assert_eq!(report.sent, 0);
        assert!(transport.sent.is_empty());
    }

    #[test]
    fn first_case_insensitive_substring_match_wins() {
        let engine = Randomizer::new();
        let mut transport = MockTransport {
            ports: vec![
                "Focusrite USB".to_string(),
                "DEEPMIND12D MIDI 1".to_string(),
                "deepmind12d MIDI 2".to_string(),
            ],
            ..Default::default()
        };

        let report = engine.randomize(Some(&[0]), &mut transport);
        assert_eq!(report.sent, 1);
        assert!(transport
            .sent
            .iter()
            .all(|(dest, _)| dest == "DEEPMIND12D MIDI 1"));
    }

    #[test]
    fn excluded_targets_are_silently_dropped() {
        let mut engine = Randomizer::new();
        engine.set_included(5, false);
        engine.set_included(6, true);
        let mut transport = MockTransport::with_deepmind_port();

        let report = engine.randomize(Some(&[5, 6]), &mut transport);
        assert_eq!(report.sent, 1);
        assert!(report.failures.is_empty());
        assert_eq!(transport.burst_param_ids(), vec![6]);

        // Burst ordering is the NRPN convention.
        let controllers: Vec<u8> = transport.sent.iter().map(|(_, m)| m.controller).collect();
        assert_eq!(controllers, vec![99, 98, 6, 38]);
    }

    #[test]
    fn transport_failure_does_not_abort_the_batch() {
        let engine = Randomizer::new();
        let mut transport = MockTransport::with_deepmind_port();
        transport.fail_lsb = Some(2);

        let report = engine.randomize(Some(&[1, 2, 3]), &mut transport);
        assert_eq!(report.sent, 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].0, 2);
        assert!(matches!(
            report.failures[0].1,
            RandomizeError::Transport(_)
        ));
        assert!(report.aborted.is_none());
    }

    #[test]
    fn degenerate_range_is_reported_not_sent() {
        let mut engine = Randomizer::new();
        // Parameter 2 maxes out at 6; a requested min above that survives
        // clamping as min > max.
        let stored = engine.set_range(2, 100, 200).unwrap();
        assert!(stored.is_empty());

        let mut transport = MockTransport::with_deepmind_port();
        let report = engine.randomize(Some(&[2]), &mut transport);
        assert_eq!(report.sent, 0);
        assert!(matches!(
            report.failures[0].1,
            RandomizeError::EmptyRange { id: 2, min: 100, max: 6 }
        ));
        assert!(transport.sent.is_empty());
    }

    #[test]
    fn randomize_all_respects_default_exclusions() {
        let engine = Randomizer::new();
        let mut transport = MockTransport::with_deepmind_port();

        let report = engine.randomize(None, &mut transport);
        assert_eq!(report.sent, PARAM_COUNT - params::DEFAULT_EXCLUDED.len());
        assert!(report.is_clean());

        let ids = transport.burst_param_ids();
        for &excluded in &params::DEFAULT_EXCLUDED {
            assert!(!ids.contains(&excluded));
        }
        assert!(ids.contains(&0));
        // Deterministic ascending order within a batch.
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn draws_are_uniform_over_the_range() {
        fastrand::seed(7);
        let engine = Randomizer::new();
        let mut transport = MockTransport::with_deepmind_port();

        // Parameter 2: legal domain {0..=6}.
        let rounds = 1400;
        for _ in 0..rounds {
            engine.randomize(Some(&[2]), &mut transport);
        }
        let values = transport.burst_values();
        assert_eq!(values.len(), rounds);

        let mut counts = [0usize; 7];
        for v in values {
            assert!(v <= 6);
            counts[v as usize] += 1;
        }
        // Expected 200 per bucket; a uniform draw stays well above half that.
        for (value, &count) in counts.iter().enumerate() {
            assert!(count > 100, "value {} drawn only {} times", value, count);
        }
    }

    #[test]
    fn busy_flag_is_raised_during_sends_and_cleared_after() {
        let engine = Randomizer::new();
        let seen_busy = Arc::new(AtomicBool::new(false));
        let mut transport = MockTransport::with_deepmind_port();
        transport.busy_probe = Some((engine.busy_handle(), seen_busy.clone()));

        engine.randomize(Some(&[0]), &mut transport);
        assert!(seen_busy.load(Ordering::SeqCst));
        assert!(!engine.is_busy());

        // Cleared even when the batch aborts.
        let mut dead_transport = MockTransport::default();
        engine.randomize(None, &mut dead_transport);
        assert!(!engine.is_busy());
    }

    #[test]
    fn range_accessors_route_through_the_validator() {
        let mut engine = Randomizer::new();
        assert_eq!(engine.get_range(2), Some(ParamRange { min: 0, max: 6 }));

        // Inverted input comes back swapped and clamped.
        assert_eq!(
            engine.set_range(2, 5, 1),
            Some(ParamRange { min: 1, max: 5 })
        );
        assert_eq!(engine.get_range(2), Some(ParamRange { min: 1, max: 5 }));

        assert_eq!(engine.set_range(9999, 0, 1), None);
        assert_eq!(engine.get_range(9999), None);
    }

    #[test]
    fn settings_round_trip_reproduces_state() {
        let path = std::env::temp_dir().join(format!(
            ".deepmind_engine_roundtrip_{}",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);

        let mut engine = Randomizer::new().with_settings_path(&path);
        engine.set_device_name("deepmind12");
        engine.set_included(0, false);
        engine.set_included(36, true);
        engine.set_range(39, 30, 99);
        engine.save_settings().unwrap();

        let mut fresh = Randomizer::new().with_settings_path(&path);
        assert!(fresh.load_settings().unwrap());
        assert_eq!(fresh.device_name(), "deepmind12");
        assert!(!fresh.is_included(0));
        assert!(fresh.is_included(36));
        assert_eq!(fresh.get_range(39), Some(ParamRange { min: 30, max: 99 }));
        for id in params::all_ids() {
            assert_eq!(fresh.is_included(id), engine.is_included(id));
            assert_eq!(fresh.get_range(id), engine.get_range(id));
        }

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn loading_without_a_blob_keeps_defaults() {
        let path = std::env::temp_dir().join(format!(
            ".deepmind_engine_noblob_{}",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);

        let mut engine = Randomizer::new().with_settings_path(&path);
        assert_eq!(engine.load_settings().unwrap(), false);
        assert_eq!(engine.device_name(), "Deepmind12D");
        assert!(!engine.is_included(36));
        assert_eq!(engine.get_range(2), Some(ParamRange { min: 0, max: 6 }));
    }

    #[test]
    fn clear_settings_resets_state_and_removes_blob() {
        let path = std::env::temp_dir().join(format!(
            ".deepmind_engine_clear_{}",
            std::process::id()
        ));
        let mut engine = Randomizer::new().with_settings_path(&path);
        engine.set_device_name("something else");
        engine.set_included(36, true);
        engine.set_range(0, 10, 20);
        engine.save_settings().unwrap();
        assert!(path.exists());

        engine.clear_settings().unwrap();
        assert_eq!(engine.device_name(), "Deepmind12D");
        assert!(!engine.is_included(36));
        assert_eq!(engine.get_range(0), Some(ParamRange { min: 0, max: 255 }));
        assert!(!path.exists());
    }

    #[test]
    fn unknown_ids_in_blob_are_ignored() {
        let mut engine = Randomizer::new();
        let mut settings = Settings::default();
        settings.skip_params.insert(9999, false);
        settings.param_ranges.insert(9999, ParamRange { min: 1, max: 2 });
        engine.apply_settings(&settings);
        assert!(!engine.is_included(9999));
        assert_eq!(engine.get_range(9999), None);
    }
}
