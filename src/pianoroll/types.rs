//! Step event type definitions
//!
//! A step event is the set of pitch indices sounding during one grid step,
//! stored as a fixed-width bitset over the pitch window.

use bit_vec::BitVec;
use std::fmt;

/// Pitch indices active during a single step
///
/// The width is fixed at `max_pitch - min_pitch + 1`, so an index outside the
/// window cannot be stored. Index `i` corresponds to pitch `min_pitch + i`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StepEvent {
    active: BitVec,
}

impl StepEvent {
    /// A silent step over a window of `width` pitches
    pub fn empty(width: usize) -> Self {
        Self {
            active: BitVec::from_elem(width, false),
        }
    }

    /// Number of pitches in the window (not the number of active ones)
    pub fn width(&self) -> usize {
        self.active.len()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.active.get(index).unwrap_or(false)
    }

    /// Mark `index` active. Returns false if it lies outside the window.
    pub fn insert(&mut self, index: usize) -> bool {
        if index >= self.active.len() {
            return false;
        }
        self.active.set(index, true);
        true
    }

    pub fn remove(&mut self, index: usize) {
        if index < self.active.len() {
            self.active.set(index, false);
        }
    }

    /// Active indices in ascending order
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.active
            .iter()
            .enumerate()
            .filter_map(|(i, on)| on.then_some(i))
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.indices().collect()
    }

    /// Number of active pitches
    pub fn len(&self) -> usize {
        self.indices().count()
    }

    pub fn is_empty(&self) -> bool {
        self.active.none()
    }
}

impl fmt::Debug for StepEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.indices()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_query() {
        let mut event = StepEvent::empty(88);
        assert!(event.is_empty());

        assert!(event.insert(3));
        assert!(event.insert(5));
        assert!(event.insert(3));

        assert_eq!(event.to_vec(), vec![3, 5]);
        assert_eq!(event.len(), 2);
        assert!(event.contains(5));
        assert!(!event.contains(4));
    }

    #[test]
    fn test_insert_outside_window() {
        let mut event = StepEvent::empty(4);
        assert_eq!(event.width(), 4);
        assert!(!event.insert(4));
        assert!(event.is_empty());
        assert!(!event.contains(100));
    }

    #[test]
    fn test_remove() {
        let mut event = StepEvent::empty(8);
        event.insert(2);
        event.insert(7);
        event.remove(2);
        event.remove(50);
        assert_eq!(event.to_vec(), vec![7]);
    }

    #[test]
    fn test_debug_lists_indices() {
        let mut event = StepEvent::empty(8);
        event.insert(1);
        event.insert(6);
        assert_eq!(format!("{:?}", event), "{1, 6}");
    }
}
