//! # Options
//!
//! Construction and reconstruction settings, with YAML loading for the
//! construction side.
//!
//! ## YAML Format
//! ```yaml
//! min-pitch: 21
//! max-pitch: 108
//! split-repeats: true
//! shift-range: false
//! start-step: 0
//! ```
//! Every key is optional and falls back to [`PianorollOptions::default`].

use crate::error::PianorollError;
use serde::Deserialize;

/// Lowest pitch of an 88-key piano (A0)
pub const MIN_PITCH: u8 = 21;
/// Highest pitch of an 88-key piano (C8)
pub const MAX_PITCH: u8 = 108;
pub const DEFAULT_QUARTERS_PER_MINUTE: f64 = 120.0;
pub const DEFAULT_VELOCITY: u8 = 100;
/// Ticks per quarter written to sequences built from scratch
pub const STANDARD_PPQ: u32 = 220;

/// Settings for building a [`crate::PianorollSequence`]
///
/// # Fields
/// - `min_pitch`, `max_pitch`: inclusive pitch window; index = pitch - min_pitch
/// - `split_repeats`: insert a one-step gap before a same-pitch note that
///   starts exactly where the previous one ends
/// - `shift_range`: treat explicit event values as raw pitches to filter and
///   offset, rather than ready-made indices
/// - `start_step`: offset of the first step on the enclosing timeline
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct PianorollOptions {
    pub min_pitch: u8,
    pub max_pitch: u8,
    pub split_repeats: bool,
    pub shift_range: bool,
    pub start_step: u32,
}

impl Default for PianorollOptions {
    fn default() -> Self {
        Self {
            min_pitch: MIN_PITCH,
            max_pitch: MAX_PITCH,
            split_repeats: false,
            shift_range: false,
            start_step: 0,
        }
    }
}

impl PianorollOptions {
    /// Read options from YAML. Missing keys keep their defaults.
    pub fn from_yaml(content: &str) -> Result<Self, PianorollError> {
        let options: PianorollOptions = serde_yaml::from_str(content)
            .map_err(|e| PianorollError::ConfigError(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), PianorollError> {
        if self.min_pitch > self.max_pitch {
            return Err(PianorollError::InvalidConfiguration(format!(
                "min_pitch ({}) is above max_pitch ({})",
                self.min_pitch, self.max_pitch
            )));
        }
        Ok(())
    }

    pub fn contains_pitch(&self, pitch: u8) -> bool {
        (self.min_pitch..=self.max_pitch).contains(&pitch)
    }
}

/// Settings for turning a pianoroll back into a note sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToSequenceOptions {
    pub qpm: f64,
    pub velocity: u8,
    pub instrument: u32,
    pub program: u32,
}

impl Default for ToSequenceOptions {
    fn default() -> Self {
        Self {
            qpm: DEFAULT_QUARTERS_PER_MINUTE,
            velocity: DEFAULT_VELOCITY,
            instrument: 0,
            program: 0,
        }
    }
}

impl ToSequenceOptions {
    pub fn with_qpm(qpm: f64) -> Self {
        Self {
            qpm,
            ..Default::default()
        }
    }
}
