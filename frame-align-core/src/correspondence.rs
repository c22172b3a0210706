use crate::{InsufficientCorrespondences, ScenePoint, TrackedPoint};
use alloc::vec::Vec;
use core::ops::Index;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// One surveyed point expressed in both frames. The tracked side comes from the
/// localization pipeline and the scene side is measured in the target world;
/// together they act as calibration ground truth.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PointCorrespondence(pub TrackedPoint, pub ScenePoint);

/// The minimum number of correspondences for the per-axis regression to be
/// well-posed. With a single sample the scale of every axis is unconstrained.
pub const MIN_CORRESPONDENCES: usize = 2;

/// An ordered, immutable collection of surveyed correspondence pairs.
///
/// The set is validated at construction and never mutated afterwards, so any
/// alignment estimated from it can always be traced back to exactly the data it
/// was fit against.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CorrespondenceSet {
    pairs: Vec<PointCorrespondence>,
}

impl CorrespondenceSet {
    /// Creates a set from surveyed pairs, preserving their order.
    ///
    /// Fails with [`InsufficientCorrespondences`] when fewer than
    /// [`MIN_CORRESPONDENCES`] pairs are supplied.
    pub fn new(pairs: Vec<PointCorrespondence>) -> Result<Self, InsufficientCorrespondences> {
        if pairs.len() < MIN_CORRESPONDENCES {
            return Err(InsufficientCorrespondences {
                provided: pairs.len(),
            });
        }
        Ok(Self { pairs })
    }

    /// The number of correspondence pairs in the set.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Always `false`: a set cannot be constructed with fewer than
    /// [`MIN_CORRESPONDENCES`] pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterates the pairs in their surveyed order.
    pub fn iter(&self) -> core::slice::Iter<'_, PointCorrespondence> {
        self.pairs.iter()
    }

    /// The pairs as a slice, in their surveyed order.
    pub fn as_slice(&self) -> &[PointCorrespondence] {
        &self.pairs
    }
}

impl Index<usize> for CorrespondenceSet {
    type Output = PointCorrespondence;

    fn index(&self, index: usize) -> &PointCorrespondence {
        &self.pairs[index]
    }
}

impl<'a> IntoIterator for &'a CorrespondenceSet {
    type Item = &'a PointCorrespondence;
    type IntoIter = core::slice::Iter<'a, PointCorrespondence>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
