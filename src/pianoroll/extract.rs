//! Extraction: quantized note sequence -> pianoroll
//!
//! Projects each note's half-open step interval `[start, end)` onto the
//! activity bitsets of the steps it covers.

use std::collections::HashSet;

use log::{debug, trace};

use crate::error::PianorollError;
use crate::note_sequence::{Note, NoteSequence};
use crate::options::PianorollOptions;
use super::sequence::PianorollSequence;

/// A note's step interval relative to the start of the pianoroll
#[derive(Debug, Clone, Copy, PartialEq)]
struct NoteSpan {
    index: usize,
    start: usize,
    end: usize,
}

impl PianorollSequence {
    /// Build a pianoroll from a quantized note sequence
    ///
    /// Notes outside `[min_pitch, max_pitch]` are discarded. The number of
    /// steps is the latest `quantized_end_step` among the kept notes, minus
    /// `options.start_step`. Notes that end at or before `start_step` are
    /// dropped; notes straddling it are clipped to step 0.
    ///
    /// With `options.split_repeats`, wherever a note starts on the step a
    /// same-pitch note ends, that pitch is silent during the preceding step,
    /// even if a third note covers it, so the second onset survives
    /// reconstruction.
    ///
    /// # Example
    /// ```rust
    /// use pianoroll::{Note, NoteSequence, PianorollOptions, PianorollSequence, QuantizationInfo};
    ///
    /// let mut score = NoteSequence::with_tempo(60.0);
    /// score.quantization_info = Some(QuantizationInfo { steps_per_quarter: 1 });
    /// score.notes = vec![
    ///     Note::new(24, 100, 0.0, 1.0).with_steps(0, 1),
    ///     Note::new(26, 100, 0.0, 3.0).with_steps(0, 3),
    ///     Note::new(24, 100, 2.0, 4.0).with_steps(2, 4),
    /// ];
    ///
    /// let seq = PianorollSequence::from_quantized_sequence(&score, &PianorollOptions::default())?;
    /// assert_eq!(seq.to_index_lists(), vec![vec![3, 5], vec![5], vec![3, 5], vec![3]]);
    /// # Ok::<(), pianoroll::PianorollError>(())
    /// ```
    ///
    /// # Errors
    /// - [`PianorollError::NotQuantized`] if the sequence has no usable
    ///   quantization info or a note ends before it starts
    /// - [`PianorollError::InvalidConfiguration`] if the pitch window is inverted
    pub fn from_quantized_sequence(
        sequence: &NoteSequence,
        options: &PianorollOptions,
    ) -> Result<Self, PianorollError> {
        let steps_per_quarter = match sequence.steps_per_quarter() {
            Some(0) => {
                return Err(PianorollError::NotQuantized(
                    "steps_per_quarter is zero".to_string(),
                ))
            }
            Some(steps) => steps,
            None => {
                return Err(PianorollError::NotQuantized(
                    "missing quantization info".to_string(),
                ))
            }
        };

        let mut seq = Self::new(steps_per_quarter, options)?;
        let spans = note_spans(&sequence.notes, options)?;

        let num_steps = spans.iter().map(|span| span.end).max().unwrap_or(0);
        seq.set_length(num_steps);

        for span in &spans {
            for step in span.start..span.end {
                seq.events[step].insert(span.index);
            }
        }

        if options.split_repeats {
            for (index, step) in repeat_gaps(&spans) {
                trace!("Splitting repeat of pitch index {} before step {}", index, step + 1);
                seq.events[step].remove(index);
            }
        }

        debug!(
            "Extracted {} steps from {} of {} notes",
            num_steps,
            spans.len(),
            sequence.notes.len()
        );
        Ok(seq)
    }
}

/// Keep the notes inside the pitch window and the step window, offset to
/// pianoroll-relative steps and pitch indices
fn note_spans(notes: &[Note], options: &PianorollOptions) -> Result<Vec<NoteSpan>, PianorollError> {
    let start_step = options.start_step as usize;
    let mut spans = Vec::with_capacity(notes.len());

    for note in notes {
        let note_start = note.quantized_start_step as usize;
        let note_end = note.quantized_end_step as usize;
        if note_end < note_start {
            return Err(PianorollError::NotQuantized(format!(
                "note with pitch {} ends at step {} before it starts at step {}",
                note.pitch, note_end, note_start
            )));
        }
        if !options.contains_pitch(note.pitch) || note_end <= start_step {
            continue;
        }
        spans.push(NoteSpan {
            index: (note.pitch - options.min_pitch) as usize,
            start: note_start.saturating_sub(start_step),
            end: note_end - start_step,
        });
    }
    Ok(spans)
}

/// Cells `(index, step)` forced silent: the step before every boundary where
/// a sounding span ends and a same-pitch sounding span starts
fn repeat_gaps(spans: &[NoteSpan]) -> Vec<(usize, usize)> {
    let onsets: HashSet<(usize, usize)> = spans
        .iter()
        .filter(|span| span.start < span.end)
        .map(|span| (span.index, span.start))
        .collect();

    let mut gaps: Vec<(usize, usize)> = spans
        .iter()
        .filter(|span| span.start < span.end && onsets.contains(&(span.index, span.end)))
        .map(|span| (span.index, span.end - 1))
        .collect();
    gaps.sort_unstable();
    gaps.dedup();
    gaps
}
