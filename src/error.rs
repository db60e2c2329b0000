//! Error types for response matrix construction.
//!
//! Every error is an input-validation failure detected before any output is
//! produced. The build fails fast: no partial tensor is ever returned, and
//! malformed input is never silently coerced.

use thiserror::Error;

/// Errors produced while building a [`ResponseMatrix`](crate::ResponseMatrix).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The stimulus array is not rank-1.
    ///
    /// Only reachable through [`build_dyn`](crate::build_dyn); the typed
    /// [`build`](crate::build) entry point enforces rank-1 inputs at the
    /// type level.
    #[error("stimulus array must be 1-D (got {ndim} dimensions)")]
    StimulusNotVector {
        /// Rank of the offending array.
        ndim: usize,
    },

    /// A response array is not rank-1.
    #[error("response arrays must be 1-D (channel {channel} has {ndim} dimensions)")]
    ResponseNotVector {
        /// Zero-based index of the offending response channel.
        channel: usize,
        /// Rank of the offending array.
        ndim: usize,
    },

    /// A response array's length differs from the stimulus array's length.
    ///
    /// Every response channel must record exactly one value per trial.
    #[error(
        "response array length must match stimulus array length \
         (channel {channel} has {actual} values, expected {expected})"
    )]
    LengthMismatch {
        /// Zero-based index of the offending response channel.
        channel: usize,
        /// Expected length (the number of trials).
        expected: usize,
        /// Actual length of the response array.
        actual: usize,
    },

    /// A discovered stimulus has no associated trials.
    ///
    /// This cannot arise from well-formed input, since the unique stimulus
    /// set is derived from the trials themselves. The counts are computed
    /// independently of the unique-value extraction, so they are verified
    /// before allocation: a zero-count stimulus would leave an entirely
    /// undefined tensor slice.
    #[error("one or more stimuli have no corresponding response (stimulus index {stimulus_index})")]
    EmptyStimulus {
        /// Sorted-order index of the stimulus with zero trials.
        stimulus_index: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = BuildError::StimulusNotVector { ndim: 2 };
        assert_eq!(err.to_string(), "stimulus array must be 1-D (got 2 dimensions)");

        let err = BuildError::ResponseNotVector { channel: 3, ndim: 2 };
        assert!(err.to_string().contains("channel 3"));

        let err = BuildError::LengthMismatch {
            channel: 0,
            expected: 5,
            actual: 4,
        };
        assert!(err.to_string().contains("4 values, expected 5"));
    }

    #[test]
    fn errors_are_comparable() {
        assert_eq!(
            BuildError::EmptyStimulus { stimulus_index: 1 },
            BuildError::EmptyStimulus { stimulus_index: 1 },
        );
        assert_ne!(
            BuildError::EmptyStimulus { stimulus_index: 1 },
            BuildError::EmptyStimulus { stimulus_index: 2 },
        );
    }
}
