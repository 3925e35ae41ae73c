//! # Pianoroll Module
//!
//! Convert between quantized note sequences and pianoroll step events.
//!
//! ## Purpose
//! A pianoroll is an ordered list of grid steps, each holding the set of
//! pitches sounding during that step. This module:
//! 1. **Extracts** a pianoroll from a quantized [`NoteSequence`](crate::NoteSequence)
//! 2. **Edits** it in place (append steps, grow or truncate)
//! 3. **Reconstructs** a note sequence by merging contiguous runs of activity
//!
//! ## Sub-modules
//! - `types` - [`StepEvent`], the per-step pitch bitset
//! - `sequence` - [`PianorollSequence`] container, construction from explicit events, mutation
//! - `extract` - Quantized note sequence -> pianoroll
//! - `reconstruct` - Pianoroll -> note sequence
//!
//! ## Example
//! ```rust
//! use pianoroll::{NoteSequence, PianorollOptions, PianorollSequence, QuantizationInfo, Note};
//!
//! let mut score = NoteSequence::with_tempo(60.0);
//! score.quantization_info = Some(QuantizationInfo { steps_per_quarter: 1 });
//! score.notes.push(Note::new(60, 100, 0.0, 2.0).with_steps(0, 2));
//!
//! let mut seq = PianorollSequence::from_quantized_sequence(&score, &PianorollOptions::default())?;
//! seq.set_length(4);
//!
//! let rebuilt = seq.to_sequence(60.0, None)?;
//! assert_eq!(rebuilt.notes.len(), 1);
//! assert_eq!(rebuilt.total_time, 4.0);
//! # Ok::<(), pianoroll::PianorollError>(())
//! ```
//!
//! ## Repeated Notes
//!
//! Two notes of the same pitch where the second starts on the step the first
//! ends produce an unbroken run, which reconstructs as a single note. With
//! `split_repeats` the first note gives up its last step so the re-strike
//! survives the round trip. Without it the two notes merge.
//!
//! ## Lossy Fields
//!
//! Velocity, instrument and program are not stored per step. Reconstruction
//! writes the values from [`ToSequenceOptions`](crate::ToSequenceOptions).

mod extract;
mod reconstruct;
mod sequence;
mod types;


pub use sequence::PianorollSequence;
pub use types::StepEvent;
