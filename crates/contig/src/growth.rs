//! Geometric capacity growth policy.
//!
//! A single pure function decides how much room to add when a vector runs
//! out: [`next_capacity`] multiplies the current capacity by 1.5. Bulk
//! insertions apply it repeatedly via [`capacity_for`] rather than jumping
//! straight to the required count, so a large splice pays the same
//! amortized cost per element as a run of single appends.
//!
//! The factor is deliberately 1.5 rather than 2: doubling leaves previously
//! freed blocks forever too small to be reused by the next growth step,
//! while 1.5 keeps total copy work across N appends at O(N) with bounded
//! wasted space. Fixed increments are ruled out entirely (they degrade
//! appends to O(N²) total).

/// Smallest capacity the policy will grow to.
///
/// Capacities of 0 and 1 jump straight here; `c + c/2` rounds down and
/// would otherwise never leave 0 or 1.
pub(crate) const MIN_GROWN_CAPACITY: usize = 2;

/// Next capacity after `current` under the 1.5x policy.
///
/// Computed as `current + current / 2`, floored at [`MIN_GROWN_CAPACITY`].
/// Saturates at `usize::MAX`; the allocation layer rejects anything over
/// `isize::MAX` bytes long before that matters.
#[inline]
pub(crate) fn next_capacity(current: usize) -> usize {
    current
        .saturating_add(current >> 1)
        .max(MIN_GROWN_CAPACITY)
}

/// Capacity reached by applying [`next_capacity`] until `required` fits.
///
/// Returns `current` unchanged when it is already sufficient. This is the
/// growth rule for insertions: stepping through the policy (instead of a
/// single jump to `required`) keeps multi-element inserts on the same
/// amortized schedule as appends.
pub(crate) fn capacity_for(mut current: usize, required: usize) -> usize {
    while current < required {
        current = next_capacity(current);
    }
    current
}
