pub mod error;
pub mod note_sequence;
pub mod options;
pub mod pianoroll;

pub use error::*;
pub use note_sequence::{Note, NoteSequence, QuantizationInfo, Tempo};
pub use options::*;
pub use pianoroll::{PianorollSequence, StepEvent};

/// Extract a pianoroll from a quantized sequence using YAML options.
/// This is the main entry point for configuration-driven callers.
pub fn extract_with_yaml(
    sequence: &NoteSequence,
    options_yaml: &str,
) -> Result<PianorollSequence, PianorollError> {
    let options = PianorollOptions::from_yaml(options_yaml)?;
    PianorollSequence::from_quantized_sequence(sequence, &options)
}
