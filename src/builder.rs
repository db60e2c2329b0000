//! Response matrix construction.
//!
//! Implements the validate-then-compute pipeline: check that the input
//! sequences are parallel, discover the distinct stimulus labels, partition
//! trials by stimulus, and write the responses into a pre-sized zero-filled
//! tensor. Generality is favored over speed; the partition pass is a plain
//! membership scan per stimulus.

use ndarray::{Array1, Array3, ArrayViewD};

use crate::error::BuildError;
use crate::label::{sorted_unique, StimulusLabel};
use crate::result::ResponseMatrix;

/// Build a padded response tensor from a stimulus sequence and parallel
/// response channels.
///
/// `stimuli[i]` is the label of the condition presented on trial `i`, and
/// `responses[l][i]` is the value channel `l` recorded on that trial. The
/// output tensor has shape `(L, maxNt, Ns)` where `L` is the number of
/// channels, `Ns` the number of distinct labels, and `maxNt` the largest
/// per-stimulus trial count; slices of stimuli with fewer trials are
/// zero-padded. See [`ResponseMatrix`] for the padding contract.
///
/// Zero response channels is valid and produces a tensor with first
/// dimension 0 (the counts are still computed normally). An empty stimulus
/// sequence is also valid and produces an `(L, 0, 0)` tensor.
///
/// Inputs are borrowed read-only; the tensor and count vector are freshly
/// allocated on every call. The function is pure: identical inputs yield
/// identical outputs and concurrent calls are safe.
///
/// # Errors
///
/// - [`BuildError::LengthMismatch`] if any response channel's length differs
///   from the stimulus sequence's length.
/// - [`BuildError::EmptyStimulus`] if a discovered stimulus has zero
///   associated trials (unreachable from well-formed input; see the
///   variant docs).
///
/// # Example
///
/// ```
/// use response_matrix::build;
///
/// let stimuli = [1u32, 1, 2, 2, 2];
/// let responses = [vec![10.0, 11.0, 20.0, 21.0, 22.0]];
/// let matrix = build(&stimuli, &responses)?;
///
/// assert_eq!(matrix.counts().as_slice().unwrap(), &[2, 3]);
/// assert_eq!(matrix.tensor()[[0, 0, 1]], 20.0);
/// # Ok::<(), response_matrix::BuildError>(())
/// ```
pub fn build<S, R>(stimuli: &[S], responses: &[R]) -> Result<ResponseMatrix<S>, BuildError>
where
    S: StimulusLabel,
    R: AsRef<[f64]>,
{
    let tot_nt = stimuli.len();
    let n_channels = responses.len();

    // Every channel must record exactly one value per trial.
    for (channel, response) in responses.iter().enumerate() {
        let len = response.as_ref().len();
        if len != tot_nt {
            return Err(BuildError::LengthMismatch {
                channel,
                expected: tot_nt,
                actual: len,
            });
        }
    }

    // Stimulus index = position in ascending order of the distinct labels.
    let labels = sorted_unique(stimuli);
    let n_stimuli = labels.len();

    // Per-stimulus trial counts, from the same membership test used for
    // extraction below so the two can never disagree.
    let mut counts = Array1::<usize>::zeros(n_stimuli);
    for (s, label) in labels.iter().enumerate() {
        counts[s] = stimuli.iter().filter(|&v| matches(v, label)).count();
    }
    for (s, &count) in counts.iter().enumerate() {
        if count == 0 {
            return Err(BuildError::EmptyStimulus { stimulus_index: s });
        }
    }

    let max_trials = counts.iter().copied().max().unwrap_or(0);

    // Pre-sized, zero-initialized allocation; entries beyond counts[s] stay
    // zero and form the padding.
    let mut tensor = Array3::<f64>::zeros((n_channels, max_trials, n_stimuli));
    for (s, label) in labels.iter().enumerate() {
        let mut t = 0;
        for (i, value) in stimuli.iter().enumerate() {
            if matches(value, label) {
                for (l, response) in responses.iter().enumerate() {
                    tensor[[l, t, s]] = response.as_ref()[i];
                }
                t += 1;
            }
        }
        debug_assert_eq!(t, counts[s]);
    }

    let matrix = ResponseMatrix::new(tensor, counts, labels);
    let summary = matrix.summary();
    log::debug!(
        "built response matrix: {} stimuli, {} channels, {} trials ({}..{} per stimulus)",
        summary.n_stimuli,
        summary.n_channels,
        summary.total_trials,
        summary.min_trials,
        summary.max_trials,
    );
    Ok(matrix)
}

/// Build a response matrix from dynamic-rank `ndarray` arrays.
///
/// Front-end for callers holding arrays of unknown rank (e.g. loaded from a
/// numeric container). Both the stimulus array and every response array must
/// be rank-1; higher-rank input is rejected rather than flattened.
///
/// # Errors
///
/// - [`BuildError::StimulusNotVector`] if the stimulus array is not 1-D.
/// - [`BuildError::ResponseNotVector`] if any response array is not 1-D.
/// - Everything [`build`] can return.
pub fn build_dyn(
    stimuli: ArrayViewD<'_, f64>,
    responses: &[ArrayViewD<'_, f64>],
) -> Result<ResponseMatrix<f64>, BuildError> {
    if stimuli.ndim() != 1 {
        return Err(BuildError::StimulusNotVector {
            ndim: stimuli.ndim(),
        });
    }
    for (channel, response) in responses.iter().enumerate() {
        if response.ndim() != 1 {
            return Err(BuildError::ResponseNotVector {
                channel,
                ndim: response.ndim(),
            });
        }
    }

    let stimuli: Vec<f64> = stimuli.iter().copied().collect();
    let responses: Vec<Vec<f64>> = responses
        .iter()
        .map(|r| r.iter().copied().collect())
        .collect();
    build(&stimuli, &responses)
}

#[inline]
fn matches<S: StimulusLabel>(value: &S, label: &S) -> bool {
    value.total_order(label) == std::cmp::Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn concrete_two_stimulus_scenario() {
        let stimuli = [1u32, 1, 2, 2, 2];
        let responses = [vec![10.0, 11.0, 20.0, 21.0, 22.0]];
        let matrix = build(&stimuli, &responses).unwrap();

        assert_eq!(matrix.tensor().shape(), &[1, 3, 2]);
        assert_eq!(matrix.counts().as_slice().unwrap(), &[2, 3]);

        let column0: Vec<f64> = (0..3).map(|t| matrix.tensor()[[0, t, 0]]).collect();
        let column1: Vec<f64> = (0..3).map(|t| matrix.tensor()[[0, t, 1]]).collect();
        assert_eq!(column0, vec![10.0, 11.0, 0.0]);
        assert_eq!(column1, vec![20.0, 21.0, 22.0]);
    }

    #[test]
    fn single_trial_single_channel() {
        let matrix = build(&[7u8], &[vec![3.5]]).unwrap();
        assert_eq!(matrix.tensor().shape(), &[1, 1, 1]);
        assert_eq!(matrix.counts().as_slice().unwrap(), &[1]);
        assert_eq!(matrix.tensor()[[0, 0, 0]], 3.5);
    }

    #[test]
    fn zero_response_channels() {
        let stimuli = [1u32, 2, 2];
        let responses: [Vec<f64>; 0] = [];
        let matrix = build(&stimuli, &responses).unwrap();

        assert_eq!(matrix.tensor().shape(), &[0, 2, 2]);
        assert_eq!(matrix.counts().as_slice().unwrap(), &[1, 2]);
    }

    #[test]
    fn empty_stimulus_sequence() {
        let stimuli: [u32; 0] = [];
        let responses = [Vec::<f64>::new(), Vec::new()];
        let matrix = build(&stimuli, &responses).unwrap();

        assert_eq!(matrix.tensor().shape(), &[2, 0, 0]);
        assert_eq!(matrix.counts().len(), 0);
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let stimuli = [1u32, 1, 2, 2, 3];
        let responses = [vec![10.0, 20.0, 30.0, 40.0]];
        let err = build(&stimuli, &responses).unwrap_err();
        assert_eq!(
            err,
            BuildError::LengthMismatch {
                channel: 0,
                expected: 5,
                actual: 4,
            }
        );
    }

    #[test]
    fn length_mismatch_reports_offending_channel() {
        let stimuli = [1u32, 2];
        let responses = [vec![1.0, 2.0], vec![3.0], vec![4.0, 5.0]];
        let err = build(&stimuli, &responses).unwrap_err();
        assert_eq!(
            err,
            BuildError::LengthMismatch {
                channel: 1,
                expected: 2,
                actual: 1,
            }
        );
    }

    #[test]
    fn dyn_rejects_2d_stimulus_array() {
        let stimuli = array![[1.0, 2.0], [3.0, 4.0]].into_dyn();
        let err = build_dyn(stimuli.view(), &[]).unwrap_err();
        assert_eq!(err, BuildError::StimulusNotVector { ndim: 2 });
    }

    #[test]
    fn dyn_rejects_2d_response_array() {
        let stimuli = array![1.0, 1.0, 2.0, 2.0].into_dyn();
        let good = array![1.0, 2.0, 3.0, 4.0].into_dyn();
        let bad = array![[1.0, 2.0], [3.0, 4.0]].into_dyn();
        let err = build_dyn(stimuli.view(), &[good.view(), bad.view()]).unwrap_err();
        assert_eq!(err, BuildError::ResponseNotVector { channel: 1, ndim: 2 });
    }

    #[test]
    fn dyn_matches_typed_build() {
        let stimuli = array![2.0, 1.0, 2.0, 1.0, 2.0].into_dyn();
        let response = array![20.0, 10.0, 21.0, 11.0, 22.0].into_dyn();
        let matrix = build_dyn(stimuli.view(), &[response.view()]).unwrap();

        assert_eq!(matrix.counts().as_slice().unwrap(), &[2, 3]);
        assert_eq!(matrix.trials(0, 0).to_vec(), vec![10.0, 11.0]);
        assert_eq!(matrix.trials(0, 1).to_vec(), vec![20.0, 21.0, 22.0]);
    }

    #[test]
    fn nan_stimulus_labels_do_not_trigger_empty_stimulus() {
        let stimuli = [f64::NAN, 1.0, f64::NAN, 1.0];
        let responses = [vec![5.0, 6.0, 7.0, 8.0]];
        let matrix = build(&stimuli, &responses).unwrap();

        // NaN sorts after 1.0 under IEEE total order and groups as one label.
        assert_eq!(matrix.counts().as_slice().unwrap(), &[2, 2]);
        assert_eq!(matrix.trials(0, 0).to_vec(), vec![6.0, 8.0]);
        assert_eq!(matrix.trials(0, 1).to_vec(), vec![5.0, 7.0]);
    }
}
