//! Vector-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during vector operations.
///
/// Only the fallible API surface produces these: [`Vector::at`] /
/// [`Vector::at_mut`] report [`VecError::OutOfRange`], and
/// [`Vector::try_reserve`] reports [`VecError::AllocationFailed`]. The
/// infallible growth paths follow the platform convention and abort via
/// `handle_alloc_error` instead of returning.
///
/// [`Vector::at`]: crate::Vector::at
/// [`Vector::at_mut`]: crate::Vector::at_mut
/// [`Vector::try_reserve`]: crate::Vector::try_reserve
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VecError {
    /// The backing allocator could not satisfy a size request.
    ///
    /// The vector is left exactly as it was before the failing call.
    AllocationFailed {
        /// Number of bytes requested from the allocator.
        bytes: usize,
    },
    /// A bounds-checked access used an index at or past the live elements.
    OutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of live elements at the time of the access.
        len: usize,
    },
}

impl fmt::Display for VecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { bytes } => {
                write!(f, "allocation of {bytes} bytes failed")
            }
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
        }
    }
}

impl Error for VecError {}
