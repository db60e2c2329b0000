//! Output types: the built response matrix and its diagnostic summary.

use ndarray::{s, Array1, Array3, ArrayView1};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::label::StimulusLabel;

/// A padded response tensor with its per-stimulus trial counts.
///
/// The tensor has shape `(L, maxNt, Ns)`: `tensor[[l, t, s]]` is the value of
/// response channel `l` on the `t`-th trial (original temporal order) of the
/// `s`-th stimulus, valid for `t < counts[s]`. Entries with `t >= counts[s]`
/// are zero padding that equalizes unequal trial counts; they are unused
/// slots, never observations. Use [`trials`](Self::trials) to read a slice
/// without its padding.
///
/// The padded allocation can significantly exceed the raw `(L, totNt)` input
/// size when trial counts are skewed across stimuli; that amplification is
/// inherent to the fixed-shape layout.
#[derive(Debug, Clone)]
pub struct ResponseMatrix<S> {
    tensor: Array3<f64>,
    counts: Array1<usize>,
    labels: Vec<S>,
}

impl<S: StimulusLabel> ResponseMatrix<S> {
    pub(crate) fn new(tensor: Array3<f64>, counts: Array1<usize>, labels: Vec<S>) -> Self {
        debug_assert_eq!(tensor.dim().2, counts.len());
        debug_assert_eq!(counts.len(), labels.len());
        Self {
            tensor,
            counts,
            labels,
        }
    }

    /// The `(L, maxNt, Ns)` response tensor.
    pub fn tensor(&self) -> &Array3<f64> {
        &self.tensor
    }

    /// Per-stimulus trial counts, length `Ns`. Every entry is positive and
    /// the entries sum to the total trial count.
    pub fn counts(&self) -> &Array1<usize> {
        &self.counts
    }

    /// The distinct stimulus labels in ascending order; position is the
    /// stimulus index used in the tensor's third axis.
    pub fn labels(&self) -> &[S] {
        &self.labels
    }

    /// Number of response channels (first tensor dimension).
    pub fn n_channels(&self) -> usize {
        self.tensor.dim().0
    }

    /// Number of distinct stimuli (third tensor dimension).
    pub fn n_stimuli(&self) -> usize {
        self.labels.len()
    }

    /// Largest per-stimulus trial count (second tensor dimension).
    pub fn max_trials(&self) -> usize {
        self.tensor.dim().1
    }

    /// Total number of trials across all stimuli.
    pub fn total_trials(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Stimulus index of `label`, if it occurred in the input.
    pub fn index_of(&self, label: &S) -> Option<usize> {
        self.labels
            .binary_search_by(|probe| probe.total_order(label))
            .ok()
    }

    /// Label of stimulus index `s`, if `s < Ns`.
    pub fn label_of(&self, s: usize) -> Option<&S> {
        self.labels.get(s)
    }

    /// The valid (un-padded) trials of channel `channel` for stimulus `s`:
    /// `tensor[channel, 0..counts[s], s]`.
    ///
    /// # Panics
    ///
    /// Panics if `channel >= L` or `s >= Ns`.
    pub fn trials(&self, channel: usize, s: usize) -> ArrayView1<'_, f64> {
        self.tensor.slice(s![channel, ..self.counts[s], s])
    }

    /// Consume the matrix, returning the tensor and count vector.
    pub fn into_parts(self) -> (Array3<f64>, Array1<usize>) {
        (self.tensor, self.counts)
    }

    /// Diagnostic summary of the build.
    pub fn summary(&self) -> BuildSummary {
        BuildSummary {
            n_stimuli: self.n_stimuli(),
            n_channels: self.n_channels(),
            total_trials: self.total_trials(),
            max_trials: self.counts.iter().copied().max().unwrap_or(0),
            min_trials: self.counts.iter().copied().min().unwrap_or(0),
        }
    }
}

impl<S: StimulusLabel> PartialEq for ResponseMatrix<S> {
    fn eq(&self, other: &Self) -> bool {
        self.tensor == other.tensor
            && self.counts == other.counts
            && self.labels.len() == other.labels.len()
            && self
                .labels
                .iter()
                .zip(&other.labels)
                .all(|(a, b)| a.total_order(b) == Ordering::Equal)
    }
}

/// Diagnostic summary of a built response matrix.
///
/// Advisory output for logging and debugging; no stability guarantees on the
/// `Display` format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSummary {
    /// Number of distinct stimuli (`Ns`).
    pub n_stimuli: usize,
    /// Number of response channels (`L`).
    pub n_channels: usize,
    /// Total number of trials across all stimuli.
    pub total_trials: usize,
    /// Largest per-stimulus trial count.
    pub max_trials: usize,
    /// Smallest per-stimulus trial count.
    pub min_trials: usize,
}

impl BuildSummary {
    /// Serialize the summary to a compact JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails (should not happen for
    /// `BuildSummary`).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl std::fmt::Display for BuildSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} stimuli, {} channels, {} trials ({}..{} per stimulus)",
            self.n_stimuli, self.n_channels, self.total_trials, self.min_trials, self.max_trials,
        )
    }
}
