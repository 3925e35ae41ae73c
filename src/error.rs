//! # Error Types
//!
//! This module defines all error types for the pianoroll library.
//!
//! ## Error Types
//! - `ValueRange` - A step event holds a pitch index outside the pitch window
//! - `InvalidConfiguration` - Bad tempo, grid resolution, or pitch window
//! - `NotQuantized` - Extraction input has not been quantized to a step grid
//! - `ConfigError` - Malformed YAML options
//!
//! ## Usage
//! ```rust
//! use pianoroll::{PianorollError, PianorollOptions, PianorollSequence};
//!
//! let seq = PianorollSequence::new(4, &PianorollOptions::default())?;
//! match seq.to_sequence(0.0, None) {
//!     Ok(_) => println!("Success!"),
//!     Err(PianorollError::InvalidConfiguration(message)) => {
//!         eprintln!("Bad configuration: {}", message);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! # Ok::<(), PianorollError>(())
//! ```

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum PianorollError {
    /// A pitch index lies outside `[0, max_pitch - min_pitch]`.
    ///
    /// # Example
    /// ```
    /// # use pianoroll::PianorollError;
    /// let err = PianorollError::ValueRange { index: 90, max_index: 87 };
    /// assert_eq!(err.to_string(), "Pitch index 90 is outside the range 0..=87");
    /// ```
    #[error("Pitch index {index} is outside the range 0..={max_index}")]
    ValueRange { index: usize, max_index: usize },

    /// Configuration error: non-positive tempo, zero steps per quarter,
    /// inverted pitch window, or a base sequence with a different tempo.
    ///
    /// # Example
    /// ```
    /// # use pianoroll::PianorollError;
    /// let err = PianorollError::InvalidConfiguration("qpm must be positive, got 0".to_string());
    /// assert_eq!(err.to_string(), "Invalid configuration: qpm must be positive, got 0");
    /// ```
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The input note sequence is not quantized to a step grid.
    #[error("Sequence is not quantized: {0}")]
    NotQuantized(String),

    /// YAML options could not be read.
    #[error("Invalid options: {0}")]
    ConfigError(String),
}
