//! # response-matrix
//!
//! Build padded response tensors from trial-based experimental recordings.
//!
//! Trial-based experiments record, for each trial, a stimulus label and one
//! or more simultaneously measured response values (spike counts, LFP power,
//! reaction times, ...). Information-theoretic estimators want that data as a
//! dense 3-D tensor indexed by `(channel, trial-within-stimulus, stimulus)`
//! together with a per-stimulus trial-count vector. This crate performs
//! exactly that reshaping: it validates the parallel input sequences,
//! discovers the distinct stimulus labels, partitions trials by stimulus, and
//! emits the zero-padded tensor plus counts.
//!
//! The estimators themselves are out of scope; this crate only prepares
//! their canonical input format.
//!
//! ## Quick Start
//!
//! ```
//! use response_matrix::build;
//!
//! // Five trials: stimulus 1 shown twice, stimulus 2 shown three times,
//! // one response channel recorded in parallel.
//! let stimuli = [1u32, 1, 2, 2, 2];
//! let responses = [vec![10.0, 11.0, 20.0, 21.0, 22.0]];
//!
//! let matrix = build(&stimuli, &responses)?;
//!
//! // Tensor shape is (channels, max trials per stimulus, stimuli).
//! assert_eq!(matrix.tensor().shape(), &[1, 3, 2]);
//! assert_eq!(matrix.counts().as_slice().unwrap(), &[2, 3]);
//!
//! // Stimulus 1 had only two trials, so its slice is zero-padded.
//! assert_eq!(matrix.tensor()[[0, 2, 0]], 0.0);
//! # Ok::<(), response_matrix::BuildError>(())
//! ```
//!
//! ## Padding Semantics
//!
//! Stimuli rarely have equal trial counts, so the tensor is sized for the
//! largest count and shorter slices are zero-filled. Padding entries
//! (`t >= counts[s]`) are *unused slots*, not zero-valued observations;
//! consumers must mask them out using the count vector. The
//! [`ResponseMatrix::trials`] accessor returns only the valid prefix.
//!
//! ## Determinism
//!
//! Stimulus indices are assigned by ascending order of the distinct label
//! values (an explicit sort-and-dedup pass, never hash iteration order), so
//! the label-to-index mapping is reproducible across runs and platforms.
//! Within a stimulus, trials keep their original temporal order.
//!
//! The builder is a pure function of its inputs: no state persists between
//! calls and concurrent calls are safe.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod builder;
mod error;
mod label;
mod result;

pub use builder::{build, build_dyn};
pub use error::BuildError;
pub use label::StimulusLabel;
pub use result::{BuildSummary, ResponseMatrix};
