//! Static metadata for every NRPN-addressable DeepMind parameter.
//!
//! The table is fixed for the process lifetime: per-parameter maximum value,
//! display name, and logical group membership. Ids run `0..PARAM_COUNT` and
//! double as the 14-bit NRPN parameter number on the wire.

/// Total number of addressable parameters on the DeepMind 12.
pub const PARAM_COUNT: usize = 223;

/// Parameters the panel leaves unchecked by default: the pitch-bend depth
/// pair, VCF HPF, the envelope velocity sensitivities and VCA level.
/// Randomizing these almost always yields an unplayable patch.
pub const DEFAULT_EXCLUDED: [u16; 6] = [36, 37, 40, 43, 80, 82];

/// Largest legal value per parameter, indexed by parameter id.
const PARAM_MAX_VALUES: [u16; PARAM_COUNT] = [
    255, 255, 6, 1, 1, 1, 255, 255, 255, 6, 1, 1, 255, 255, 2, 2,
    5, 5, 1, 1, 1, 255, 6, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    6, 255, 255, 13, 24, 24, 1, 255, 255, 255, 255, 255, 255, 255, 1, 255,
    255, 255, 1, 1, 1, 255, 255, 255, 255, 4, 255, 255, 255, 255, 255, 255,
    255, 255, 4, 255, 255, 255, 255, 255, 255, 255, 255, 4, 255, 255, 255, 255,
    255, 255, 255, 255, 2, 12, 3, 255, 255, 255, 255, 255, 1, 22, 129, 255,
    22, 129, 255, 22, 129, 255, 22, 129, 255, 22, 129, 255, 22, 129, 255, 22,
    129, 255, 22, 129, 255, 1, 15, 31, 25, 2, 255, 255, 255, 255, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 1, 10,
    255, 12, 1, 255, 1, 64, 25, 5, 9, 33, 255, 255, 255, 255, 255, 255,
    255, 255, 255, 255, 255, 255, 33, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    255, 255, 255, 33, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
    33, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 150, 150,
];

/// Display names, indexed by parameter id. Purely descriptive; the id alone
/// identifies the parameter on the wire.
const PARAM_NAMES: [&str; PARAM_COUNT] = [
    "LFO1 Rate", "LFO1 Delay", "LFO1 Shape",
    "LFO1 Key Sync", "LFO1 Arp Sync", "LFO1 Mono Mode",
    "LFO1 Slew", "LFO2 Rate", "LFO2 Delay",
    "LFO2 Shape", "LFO2 Key Sync", "LFO2 Arp Sync",
    "LFO2 Mono Mode", "LFO2 Slew", "OSC1 Range",
    "OSC2 Range", "OSC1 PWM Src", "OSC2 TM Src",
    "OSC1 Pulse", "OSC1 Saw", "OSC Sync",
    "OSC1 PM Depth", "OSC1 PM Select", "OSC1 ATouch>PM Depth",
    "OSC1 MW>PM Depth", "OSC1 PWM Depth", "OSC2 Level",
    "OSC2 Pitch", "OSC2 TM Depth", "OSC2 PM Depth",
    "OSC2 ATouch>PM Depth", "OSC2 MW>PM Depth", "OSC2 PM Select",
    "Noise Level", "Porta Time", "Porta Mode",
    "PB+ Depth", "PB- Depth", "OSC1 PM Mode",
    "VCF Freq", "VCF HPF", "VCF Reso",
    "VCF Env Depth", "VCF Env Velo Sens", "VCF PB>Freq Depth",
    "VCF LFO Depth", "VCF LFO Select", "VCF ATouch>LFO Depth",
    "VCF MW>LFO Depth", "VCF Keytrack", "VCF Env Polarity",
    "VCF 2 Pole", "VCF Boost", "VCA Env Atk",
    "VCA Env Dec", "VCA Env Sust", "VCA Env Rel",
    "VCA Env Trig Mode", "VCA Env Atk Curve", "VCA Env Dec Curve",
    "VCA Env Sust Curve", "VCA Env Rrel Curve", "VCF Env Atk",
    "VCF Env Dec", "VCF Env Sust", "VCF Env Rel",
    "VCF Env Trig Mode", "VCF Env Atk Curve", "VCF Env Dec Curve",
    "VCF Env Sust Curve", "VCF Env Rel Curve", "Mod Env Atk",
    "Mod Env Dec", "Mod Env Sust", "Mod Env Rel",
    "Mod Env Trig Mode", "Mod Env Atk Curve", "Mod Env Dec Curve",
    "Mod Env Sust Curve", "Mod Env Rel Curve", "VCA Level",
    "VCA Env Depth", "VCA Env Velo Sens", "VCA Pan Spread",
    "Voice Priority Mode", "Polyphony Mode", "Env Trigger Mode",
    "Unison Detune", "Voice Drift", "Parameter Drift",
    "Drift Rate", "OSC Porta Balance", "OSC Key Reset",
    "Mod1 Src", "Mod1 Dest", "Mod1 Depth",
    "Mod2 Src", "Mod2 Dest", "Mod2 Depth",
    "Mod3 Src", "Mod3 Dest", "Mod3 Depth",
    "Mod4 Src", "Mod4 Dest", "Mod4 Depth",
    "Mod5 Src", "Mod5 Dest", "Mod5 Depth",
    "Mod6 Src", "Mod6 Dest", "Mod6 Depth",
    "Mod7 Src", "Mod7 Dest", "Mod7 Depth",
    "Mod8 Src", "Mod8 Dest", "Mod8 Depth",
    "Ctrl Seq Enable", "Ctrl Seq Clock", "Sequence Length",
    "Sequencer Swing", "Key Sync & Loop", "Slew",
    "Seq Step 1", "Seq Step 2", "Seq Step 3",
    "Seq Step 4", "Seq Step 5", "Seq Step 6",
    "Seq Step 7", "Seq Step 8", "Seq Step 9",
    "Seq Step 10", "Seq Step 11", "Seq Step 12",
    "Seq Step 13", "Seq Step 14", "Seq Step 15",
    "Seq Step 16", "Seq Step 17", "Seq Step 18",
    "Seq Step 19", "Seq Step 20", "Seq Step 21",
    "Seq Step 22", "Seq Step 23", "Seq Step 24",
    "Seq Step 25", "Seq Step 26", "Seq Step 27",
    "Seq Step 28", "Seq Step 29", "Seq Step 30",
    "Seq Step 31", "Seq Step 32", "Arp On/Off",
    "Arp Mode", "Arp Rate", "Arp Clock",
    "Arp Key Sync", "Arp Gate", "Arp Hold",
    "Arp Pattern", "Arp Swing", "Arp Octaves",
    "FX Routing", "FX1 Type", "FX1 Param 1",
    "FX1 Param 2", "FX1 Param 3", "FX1 Param 4",
    "FX1 Param 5", "FX1 Param 6", "FX1 Param 7",
    "FX1 Param 8", "FX1 Param 9", "FX1 Param 10",
    "FX1 Param 11", "FX1 Param 12", "FX2 Type",
    "FX2 Param 1", "FX2 Param 2", "FX2 Param 3",
    "FX2 Param 4", "FX2 Param 5", "FX2 Param 6",
    "FX2 Param 7", "FX2 Param 8", "FX2 Param 9",
    "FX2 Param 10", "FX2 Param 11", "FX2 Param 12",
    "FX3 Type", "FX3 Param 1", "FX3 Param 2",
    "FX3 Param 3", "FX3 Param 4", "FX3 Param 5",
    "FX3 Param 6", "FX3 Param 7", "FX3 Param 8",
    "FX3 Param 9", "FX3 Param 10", "FX3 Param 11",
    "FX3 Param 12", "FX4 Type", "FX4 Param 1",
    "FX4 Param 2", "FX4 Param 3", "FX4 Param 4",
    "FX4 Param 5", "FX4 Param 6", "FX4 Param 7",
    "FX4 Param 8", "FX4 Param 9", "FX4 Param 10",
    "FX4 Param 11", "FX4 Param 12", "FX1 Gain",
    "FX2 Gain", "FX3 Gain", "FX4 Gain",
    "FX Mode",
];

/// Immutable description of one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamInfo {
    pub id: u16,
    /// Largest legal value (device-specific, at most 16383).
    pub max_value: u16,
    pub name: &'static str,
}

/// Look up a parameter by id. `None` only for ids outside `0..PARAM_COUNT`.
pub fn lookup(id: u16) -> Option<ParamInfo> {
    let idx = id as usize;
    if idx >= PARAM_COUNT {
        return None;
    }
    Some(ParamInfo {
        id,
        max_value: PARAM_MAX_VALUES[idx],
        name: PARAM_NAMES[idx],
    })
}

/// All parameter ids in ascending order.
pub fn all_ids() -> impl Iterator<Item = u16> {
    0..PARAM_COUNT as u16
}

/// Logical panel sections. Groups overlap (e.g. the VCA envelope parameters
/// belong to both VCA and ENV) and carry no protocol meaning; they exist
/// only for bulk selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamGroup {
    Osc,
    Vca,
    Vcf,
    Env,
    ArpSeq,
    Lfo,
    Fx,
    Mod,
    Poly,
}

impl ParamGroup {
    pub fn member_ids(&self) -> &'static [u16] {
        match self {
            ParamGroup::Osc => &[
                14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28,
                29, 30, 31, 32, 33, 38, 91, 92
            ],
            ParamGroup::Vca => &[
                53, 54, 55, 56, 57, 58, 59, 60, 61, 80, 81, 82, 83
            ],
            ParamGroup::Vcf => &[
                39, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 51, 52, 62,
                63, 64, 65, 66, 67, 68, 69, 70
            ],
            ParamGroup::Env => &[
                53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63, 64, 65, 66, 67,
                68, 69, 70, 71, 72, 73, 74, 75, 76, 77, 78, 79
            ],
            ParamGroup::ArpSeq => &[
                117, 118, 119, 120, 121, 122, 123, 124, 125, 126, 127, 128,
                129, 130, 131, 132, 133, 134, 135, 136, 137, 138, 139, 140,
                141, 142, 143, 144, 145, 146, 147, 148, 149, 150, 151, 152,
                153, 154, 155, 156, 157, 158, 159, 160, 161, 162, 163, 164
            ],
            ParamGroup::Lfo => &[
                0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13
            ],
            ParamGroup::Fx => &[
                165, 166, 167, 168, 169, 170, 171, 172, 173, 174, 175, 176,
                177, 178, 179, 180, 181, 182, 183, 184, 185, 186, 187, 188,
                189, 190, 191, 192, 193, 194, 195, 196, 197, 198, 199, 200,
                201, 202, 203, 204, 205, 206, 207, 208, 209, 210, 211, 212,
                213, 214, 215, 216, 217, 218, 219, 220, 221, 222
            ],
            ParamGroup::Mod => &[
                71, 72, 73, 74, 75, 76, 77, 78, 79, 93, 94, 95, 96, 97, 98,
                99, 100, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110,
                111, 112, 113, 114, 115, 116
            ],
            ParamGroup::Poly => &[
                34, 35, 36, 37, 84, 85, 86, 87, 88, 89, 90, 91, 92
            ],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ParamGroup::Osc => "OSC",
            ParamGroup::Vca => "VCA",
            ParamGroup::Vcf => "VCF",
            ParamGroup::Env => "ENV",
            ParamGroup::ArpSeq => "ARP/SEQ",
            ParamGroup::Lfo => "LFO",
            ParamGroup::Fx => "FX",
            ParamGroup::Mod => "MOD",
            ParamGroup::Poly => "POLY",
        }
    }

    /// Parse a group name, case-insensitively. "ARPSEQ" is accepted as an
    /// alias for "ARP/SEQ" since slashes are awkward in shell arguments.
    pub fn from_name(s: &str) -> Option<ParamGroup> {
        let wanted = s.to_ascii_uppercase();
        if wanted == "ARPSEQ" {
            return Some(ParamGroup::ArpSeq);
        }
        Self::iter().find(|g| g.name() == wanted)
    }

    pub fn iter() -> impl Iterator<Item = ParamGroup> {
        [
            ParamGroup::Osc,
            ParamGroup::Vca,
            ParamGroup::Vcf,
            ParamGroup::Env,
            ParamGroup::ArpSeq,
            ParamGroup::Lfo,
            ParamGroup::Fx,
            ParamGroup::Mod,
            ParamGroup::Poly,
        ]
        .into_iter()
    }
}
