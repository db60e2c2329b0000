//! Stimulus label ordering.
//!
//! Stimulus indices are defined by the ascending order of the distinct label
//! values, so labels need a deterministic total order. Integer and string
//! labels use their natural `Ord`; floating-point labels use IEEE 754 total
//! ordering (`total_cmp`) so that every value, NaN included, sorts to a
//! stable position.

use std::cmp::Ordering;

/// A value usable as a stimulus label.
///
/// The trait supplies the total order that defines the stimulus-index
/// assignment: the s-th unique label in ascending `total_order` is stimulus
/// index `s`. Equality of two labels is `total_order(..) == Ordering::Equal`,
/// which for floats means NaN labels group together as one stimulus rather
/// than producing a phantom zero-trial stimulus.
pub trait StimulusLabel: Clone {
    /// Compare two labels under a total order.
    fn total_order(&self, other: &Self) -> Ordering;
}

macro_rules! impl_label_via_ord {
    ($($t:ty),* $(,)?) => {
        $(
            impl StimulusLabel for $t {
                #[inline]
                fn total_order(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

impl_label_via_ord!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, String,
);

impl StimulusLabel for &str {
    #[inline]
    fn total_order(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl StimulusLabel for f32 {
    #[inline]
    fn total_order(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl StimulusLabel for f64 {
    #[inline]
    fn total_order(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

/// Extract the sorted, deduplicated label values from a stimulus sequence.
///
/// Position in the returned vector is the stimulus index. Sorting is an
/// explicit pass over a copy of the input; no hash iteration order is
/// involved, so the mapping is reproducible across runs and platforms.
pub(crate) fn sorted_unique<S: StimulusLabel>(stimuli: &[S]) -> Vec<S> {
    let mut labels = stimuli.to_vec();
    labels.sort_unstable_by(|a, b| a.total_order(b));
    labels.dedup_by(|a, b| a.total_order(b) == Ordering::Equal);
    labels
}
