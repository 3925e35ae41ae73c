//! # Note Sequence Types
//!
//! A minimal score document: notes with pitch, velocity and timing, plus the
//! tempo and quantization metadata the pianoroll conversion needs.
//!
//! ## Type Hierarchy
//! ```text
//! NoteSequence
//!   ├── ticks_per_quarter: u32
//!   ├── tempos: Vec<Tempo> (time, qpm)
//!   ├── total_time: f64 (seconds)
//!   ├── quantization_info: Option<QuantizationInfo> (steps_per_quarter)
//!   └── Vec<Note>
//!         ├── pitch, velocity: u8 (MIDI)
//!         ├── start_time, end_time: f64 (seconds)
//!         ├── quantized_start_step, quantized_end_step: u32
//!         └── instrument, program, is_drum
//! ```
//!
//! ## Quantized vs Unquantized
//! A sequence is quantized when `quantization_info` is present. Only then are
//! the `quantized_*_step` fields of its notes meaningful. Computing those steps
//! is the job of whoever built the sequence, not this crate.
//!
//! ## Related Modules
//! - `pianoroll` - Converts quantized sequences to step events and back

use serde::{Deserialize, Serialize};

/// Tempo change at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tempo {
    #[serde(default)]
    pub time: f64,
    pub qpm: f64,
}

/// Grid resolution of a quantized sequence
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantizationInfo {
    pub steps_per_quarter: u32,
}

/// A single note event
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Note {
    pub pitch: u8,
    pub velocity: u8,
    pub start_time: f64,
    pub end_time: f64,
    pub quantized_start_step: u32,
    pub quantized_end_step: u32,
    pub instrument: u32,
    pub program: u32,
    pub is_drum: bool,
}

impl Note {
    /// Create an unquantized note
    pub fn new(pitch: u8, velocity: u8, start_time: f64, end_time: f64) -> Self {
        Self {
            pitch,
            velocity,
            start_time,
            end_time,
            ..Default::default()
        }
    }

    /// Set the quantized step interval `[start_step, end_step)`
    pub fn with_steps(mut self, start_step: u32, end_step: u32) -> Self {
        self.quantized_start_step = start_step;
        self.quantized_end_step = end_step;
        self
    }
}

/// A score document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NoteSequence {
    pub ticks_per_quarter: u32,
    pub tempos: Vec<Tempo>,
    pub notes: Vec<Note>,
    pub total_time: f64,
    pub quantization_info: Option<QuantizationInfo>,
}

impl NoteSequence {
    /// Create an empty sequence with a single tempo at time zero
    pub fn with_tempo(qpm: f64) -> Self {
        Self {
            tempos: vec![Tempo { time: 0.0, qpm }],
            ..Default::default()
        }
    }

    /// Append a track of `(pitch, velocity, start_time, end_time)` notes.
    /// `total_time` grows to cover the latest note end.
    pub fn add_track(&mut self, instrument: u32, notes: &[(u8, u8, f64, f64)]) {
        for &(pitch, velocity, start_time, end_time) in notes {
            self.notes.push(Note {
                instrument,
                ..Note::new(pitch, velocity, start_time, end_time)
            });
            if end_time > self.total_time {
                self.total_time = end_time;
            }
        }
    }

    /// Steps per quarter note, if this sequence has been quantized
    pub fn steps_per_quarter(&self) -> Option<u32> {
        self.quantization_info.map(|info| info.steps_per_quarter)
    }

    pub fn is_quantized(&self) -> bool {
        self.quantization_info.is_some()
    }

    /// Tempo of the first tempo event
    pub fn qpm(&self) -> Option<f64> {
        self.tempos.first().map(|t| t.qpm)
    }

    /// Order notes by `(start_time, pitch)`
    pub fn sort_notes(&mut self) {
        self.notes.sort_by(|a, b| {
            a.start_time
                .total_cmp(&b.start_time)
                .then(a.pitch.cmp(&b.pitch))
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_track_extends_total_time() {
        let mut seq = NoteSequence::with_tempo(60.0);
        seq.add_track(0, &[(60, 100, 0.0, 4.0), (64, 90, 1.0, 2.0)]);

        assert_eq!(seq.notes.len(), 2);
        assert_eq!(seq.total_time, 4.0);
        assert_eq!(seq.notes[1].velocity, 90);
        assert_eq!(seq.qpm(), Some(60.0));
    }

    #[test]
    fn test_quantization_info() {
        let mut seq = NoteSequence::default();
        assert!(!seq.is_quantized());
        assert_eq!(seq.steps_per_quarter(), None);

        seq.quantization_info = Some(QuantizationInfo { steps_per_quarter: 4 });
        assert!(seq.is_quantized());
        assert_eq!(seq.steps_per_quarter(), Some(4));
    }

    #[test]
    fn test_sort_notes() {
        let mut seq = NoteSequence::default();
        seq.add_track(0, &[(67, 100, 1.0, 2.0), (64, 100, 0.0, 1.0), (60, 100, 0.0, 1.0)]);
        seq.sort_notes();

        let order: Vec<u8> = seq.notes.iter().map(|n| n.pitch).collect();
        assert_eq!(order, vec![60, 64, 67]);
    }

    #[test]
    fn test_deserialize_from_yaml() {
        let yaml = r#"
tempos:
  - qpm: 90
quantization_info:
  steps_per_quarter: 2
notes:
  - pitch: 60
    velocity: 80
    quantized_start_step: 0
    quantized_end_step: 3
"#;
        let seq: NoteSequence = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(seq.qpm(), Some(90.0));
        assert_eq!(seq.steps_per_quarter(), Some(2));
        assert_eq!(seq.notes[0].quantized_end_step, 3);
        assert_eq!(seq.notes[0].end_time, 0.0);
    }
}
