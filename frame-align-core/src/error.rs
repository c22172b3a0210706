use crate::MIN_CORRESPONDENCES;
use core::fmt;

/// Too few correspondence pairs were supplied for the per-axis regression to be
/// well-posed. This is the only fatal calibration error; everything numeric is
/// handled by regularization instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsufficientCorrespondences {
    /// How many pairs were actually supplied.
    pub provided: usize,
}

impl fmt::Display for InsufficientCorrespondences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} correspondence pairs supplied, but at least {} are required",
            self.provided, MIN_CORRESPONDENCES
        )
    }
}

/// A transform was requested before any calibration sweep completed. Callers
/// that need a value regardless should fall back to the untransformed input
/// position or the identity orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotCalibrated;

impl fmt::Display for NotCalibrated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no frame alignment is active yet")
    }
}
