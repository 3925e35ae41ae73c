//! Pianoroll sequence container
//!
//! Owns the ordered step events and the grid/pitch-window metadata. Extraction
//! from a quantized score lives in `extract`, reconstruction in `reconstruct`.

use std::ops::{Index, Range};
use std::slice;

use crate::error::PianorollError;
use crate::options::PianorollOptions;
use super::types::StepEvent;

/// Ordered, step-indexed sequence of active-pitch sets
///
/// # Fields
/// - `steps_per_quarter`: grid resolution, fixed at construction
/// - `start_step`: offset on the enclosing timeline; only affects exported times
/// - `min_pitch`, `max_pitch`: inclusive pitch window, fixed at construction
/// - `events`: one [`StepEvent`] per step, in temporal order
#[derive(Debug, Clone, PartialEq)]
pub struct PianorollSequence {
    pub(super) steps_per_quarter: u32,
    pub(super) start_step: u32,
    pub(super) min_pitch: u8,
    pub(super) max_pitch: u8,
    pub(super) events: Vec<StepEvent>,
}

impl PianorollSequence {
    /// Create an empty sequence
    ///
    /// # Errors
    /// [`PianorollError::InvalidConfiguration`] if `steps_per_quarter` is zero
    /// or the pitch window is inverted.
    pub fn new(steps_per_quarter: u32, options: &PianorollOptions) -> Result<Self, PianorollError> {
        options.validate()?;
        if steps_per_quarter == 0 {
            return Err(PianorollError::InvalidConfiguration(
                "steps_per_quarter must be positive".to_string(),
            ));
        }
        Ok(Self {
            steps_per_quarter,
            start_step: options.start_step,
            min_pitch: options.min_pitch,
            max_pitch: options.max_pitch,
            events: Vec::new(),
        })
    }

    /// Build a sequence from an explicit list of step events
    ///
    /// With `options.shift_range` each value is a raw pitch: values outside
    /// `[min_pitch, max_pitch]` are dropped and the rest become
    /// `pitch - min_pitch`. Otherwise values are pitch indices and must
    /// already lie in `[0, max_pitch - min_pitch]`.
    ///
    /// # Example
    /// ```rust
    /// use pianoroll::{PianorollOptions, PianorollSequence};
    ///
    /// let options = PianorollOptions { min_pitch: 1, max_pitch: 4, shift_range: true, ..Default::default() };
    /// let events: Vec<Vec<usize>> = vec![vec![0, 1], vec![2, 3], vec![4, 5], vec![6]];
    /// let seq = PianorollSequence::from_events(events, 1, &options)?;
    ///
    /// assert_eq!(seq.to_index_lists(), vec![vec![0], vec![1, 2], vec![3], vec![]]);
    /// # Ok::<(), pianoroll::PianorollError>(())
    /// ```
    ///
    /// # Errors
    /// [`PianorollError::ValueRange`] if an unshifted index is out of range.
    pub fn from_events<I, E>(
        events: I,
        steps_per_quarter: u32,
        options: &PianorollOptions,
    ) -> Result<Self, PianorollError>
    where
        I: IntoIterator<Item = E>,
        E: IntoIterator<Item = usize>,
    {
        let mut seq = Self::new(steps_per_quarter, options)?;
        let min_pitch = options.min_pitch as usize;
        let max_pitch = options.max_pitch as usize;

        for event in events {
            if options.shift_range {
                let shifted: Vec<usize> = event
                    .into_iter()
                    .filter(|pitch| (min_pitch..=max_pitch).contains(pitch))
                    .map(|pitch| pitch - min_pitch)
                    .collect();
                seq.append(shifted)?;
            } else {
                seq.append(event)?;
            }
        }
        Ok(seq)
    }

    /// Append one step event given as pitch indices
    ///
    /// # Errors
    /// [`PianorollError::ValueRange`] if an index is outside the pitch window.
    /// The sequence is left unchanged in that case.
    pub fn append<E>(&mut self, indices: E) -> Result<(), PianorollError>
    where
        E: IntoIterator<Item = usize>,
    {
        let mut event = StepEvent::empty(self.pitch_count());
        for index in indices {
            if !event.insert(index) {
                return Err(PianorollError::ValueRange {
                    index,
                    max_index: event.width() - 1,
                });
            }
        }
        self.events.push(event);
        Ok(())
    }

    /// Grow with silent steps or truncate from the tail to exactly `num_steps`
    pub fn set_length(&mut self, num_steps: usize) {
        let width = self.pitch_count();
        self.events.resize_with(num_steps, || StepEvent::empty(width));
    }

    pub fn steps_per_quarter(&self) -> u32 {
        self.steps_per_quarter
    }

    pub fn start_step(&self) -> u32 {
        self.start_step
    }

    /// Step just past the last event on the enclosing timeline
    pub fn end_step(&self) -> u32 {
        self.start_step + self.events.len() as u32
    }

    pub fn min_pitch(&self) -> u8 {
        self.min_pitch
    }

    pub fn max_pitch(&self) -> u8 {
        self.max_pitch
    }

    pub fn pitch_count(&self) -> usize {
        (self.max_pitch - self.min_pitch) as usize + 1
    }

    pub fn num_steps(&self) -> usize {
        self.events.len()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Step indices `0..num_steps`, independent of `start_step`
    pub fn steps(&self) -> Range<usize> {
        0..self.events.len()
    }

    pub fn events(&self) -> &[StepEvent] {
        &self.events
    }

    pub fn get(&self, step: usize) -> Option<&StepEvent> {
        self.events.get(step)
    }

    pub fn iter(&self) -> slice::Iter<'_, StepEvent> {
        self.events.iter()
    }

    /// Active indices of every step, handy for comparisons
    pub fn to_index_lists(&self) -> Vec<Vec<usize>> {
        self.events.iter().map(StepEvent::to_vec).collect()
    }
}

impl Index<usize> for PianorollSequence {
    type Output = StepEvent;

    fn index(&self, step: usize) -> &StepEvent {
        &self.events[step]
    }
}

impl<'a> IntoIterator for &'a PianorollSequence {
    type Item = &'a StepEvent;
    type IntoIter = slice::Iter<'a, StepEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
