//! Reconstruction: pianoroll -> note sequence
//!
//! Each pitch column is run-length encoded independently: a maximal run of
//! consecutive active steps becomes one note.

use log::debug;

use crate::error::PianorollError;
use crate::note_sequence::{Note, NoteSequence, Tempo};
use crate::options::{ToSequenceOptions, STANDARD_PPQ};
use super::sequence::PianorollSequence;

/// Maximal run of activity for one pitch index, `[start, end)` in steps
#[derive(Debug, Clone, Copy, PartialEq)]
struct PitchRun {
    index: usize,
    start: usize,
    end: usize,
}

impl PianorollSequence {
    /// Convert to a note sequence at the given tempo with default velocity,
    /// instrument and program
    ///
    /// See [`PianorollSequence::to_sequence_with_options`].
    pub fn to_sequence(
        &self,
        qpm: f64,
        base: Option<&NoteSequence>,
    ) -> Result<NoteSequence, PianorollError> {
        self.to_sequence_with_options(&ToSequenceOptions::with_qpm(qpm), base)
    }

    /// Convert to a note sequence
    ///
    /// Every run of consecutive steps holding a pitch index becomes one note
    /// from `(run_start + start_step) * seconds_per_step` to
    /// `(run_end + start_step) * seconds_per_step`, where
    /// `seconds_per_step = 60 / (qpm * steps_per_quarter)`.
    ///
    /// When `base` is given its contents are copied verbatim and the new notes
    /// are appended after its own. Overlapping notes are neither merged nor
    /// deduplicated.
    ///
    /// # Example
    /// ```rust
    /// use pianoroll::{PianorollOptions, PianorollSequence};
    ///
    /// let mut seq = PianorollSequence::new(1, &PianorollOptions::default())?;
    /// seq.append(vec![39])?;
    /// seq.append(vec![39])?;
    ///
    /// let score = seq.to_sequence(60.0, None)?;
    /// assert_eq!(score.notes.len(), 1);
    /// assert_eq!(score.notes[0].pitch, 60);
    /// assert_eq!(score.notes[0].end_time, 2.0);
    /// # Ok::<(), pianoroll::PianorollError>(())
    /// ```
    ///
    /// # Errors
    /// [`PianorollError::InvalidConfiguration`] if `qpm` is not a positive
    /// finite number, or if `base` has a tempo other than `qpm`.
    pub fn to_sequence_with_options(
        &self,
        options: &ToSequenceOptions,
        base: Option<&NoteSequence>,
    ) -> Result<NoteSequence, PianorollError> {
        let qpm = options.qpm;
        if !(qpm.is_finite() && qpm > 0.0) {
            return Err(PianorollError::InvalidConfiguration(format!(
                "qpm must be positive, got {}",
                qpm
            )));
        }

        let seconds_per_step = 60.0 / (qpm * self.steps_per_quarter as f64);
        let step_time = |step: usize| (step as f64 + self.start_step as f64) * seconds_per_step;

        let mut sequence = match base {
            Some(base) => {
                if let Some(base_qpm) = base.qpm() {
                    if base_qpm != qpm {
                        return Err(PianorollError::InvalidConfiguration(format!(
                            "base sequence tempo {} does not match qpm {}",
                            base_qpm, qpm
                        )));
                    }
                }
                let mut sequence = base.clone();
                if sequence.tempos.is_empty() {
                    sequence.tempos.push(Tempo { time: 0.0, qpm });
                }
                sequence
            }
            None => NoteSequence {
                ticks_per_quarter: STANDARD_PPQ,
                ..NoteSequence::with_tempo(qpm)
            },
        };

        let runs = self.pitch_runs();
        for run in &runs {
            sequence.notes.push(Note {
                pitch: self.min_pitch + run.index as u8,
                velocity: options.velocity,
                start_time: step_time(run.start),
                end_time: step_time(run.end),
                instrument: options.instrument,
                program: options.program,
                ..Default::default()
            });
        }

        sequence.total_time = sequence.total_time.max(step_time(self.events.len()));

        debug!(
            "Reconstructed {} notes from {} steps at {} qpm",
            runs.len(),
            self.events.len(),
            qpm
        );
        Ok(sequence)
    }

    /// Run-length encode every pitch column, ordered by `(start, index)`
    fn pitch_runs(&self) -> Vec<PitchRun> {
        let mut runs = Vec::new();

        for index in 0..self.pitch_count() {
            let mut run_start: Option<usize> = None;
            for (step, event) in self.events.iter().enumerate() {
                match (event.contains(index), run_start) {
                    (true, None) => run_start = Some(step),
                    (false, Some(start)) => {
                        runs.push(PitchRun { index, start, end: step });
                        run_start = None;
                    }
                    _ => {}
                }
            }
            if let Some(start) = run_start {
                runs.push(PitchRun {
                    index,
                    start,
                    end: self.events.len(),
                });
            }
        }

        runs.sort_by_key(|run| (run.start, run.index));
        runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::PianorollOptions;

    fn roll(events: Vec<Vec<usize>>) -> PianorollSequence {
        let options = PianorollOptions {
            min_pitch: 0,
            max_pitch: 7,
            ..Default::default()
        };
        PianorollSequence::from_events(events, 1, &options).unwrap()
    }

    #[test]
    fn test_pitch_runs_split_on_gaps() {
        let seq = roll(vec![vec![1], vec![1, 2], vec![2], vec![1, 2]]);
        let runs = seq.pitch_runs();

        assert_eq!(
            runs,
            vec![
                PitchRun { index: 1, start: 0, end: 2 },
                PitchRun { index: 2, start: 1, end: 4 },
                PitchRun { index: 1, start: 3, end: 4 },
            ]
        );
    }

    #[test]
    fn test_pitch_runs_empty() {
        let seq = roll(vec![vec![], vec![]]);
        assert!(seq.pitch_runs().is_empty());
    }
}
