use serde::{Deserialize, Serialize};

/// Per-parameter randomization bounds, inclusive on both ends.
///
/// After [`validate`] the invariants are `min >= 0` and `max <= max_value`.
/// `min <= max` is NOT guaranteed: a requested minimum above the parameter's
/// legal maximum survives clamping and leaves `min > max`. That degenerate
/// range means "no legal value" and the engine skips the parameter rather
/// than silently inverting it (which would hide the misconfiguration).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamRange {
    pub min: i32,
    pub max: i32,
}

impl ParamRange {
    /// The default range for a parameter: its full legal domain.
    pub fn full(max_value: u16) -> Self {
        Self {
            min: 0,
            max: max_value as i32,
        }
    }

    /// True when no value can be drawn from this range.
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

/// Normalize a user-supplied (min, max) pair against a parameter's legal
/// domain. Order matters:
///
/// 1. swap if inverted,
/// 2. clamp `min` up to 0,
/// 3. clamp `max` down to `max_value`.
///
/// `min` is deliberately not re-clamped against the lowered `max` afterwards;
/// see [`ParamRange`] for the degenerate case. Pure, never fails.
pub fn validate(max_value: u16, requested_min: i32, requested_max: i32) -> ParamRange {
    let (mut min, mut max) = if requested_min > requested_max {
        (requested_max, requested_min)
    } else {
        (requested_min, requested_max)
    };
    if min < 0 {
        min = 0;
    }
    if max > max_value as i32 {
        max = max_value as i32;
    }
    ParamRange { min, max }
}
