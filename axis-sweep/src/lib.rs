//! This crate estimates the alignment between a tracked reconstruction frame and
//! a scene frame from surveyed correspondence points.
//!
//! The discrete part of the hypothesis space is tiny: there are only 48 ways to
//! rewire three axes (6 permutations × 8 sign vectors), so instead of solving a
//! general rotation fit the estimator simply sweeps every
//! [`AxisCandidate`], fits the remaining per-axis scale and offset in closed
//! form by ordinary least squares, and keeps the candidate with the lowest mean
//! Euclidean error against the surveyed scene points. The sweep is exhaustive
//! and synchronous — `48 · N` operations for `N` correspondences — and always
//! produces exactly one [`FrameAlignment`].
//!
//! Ties are broken deterministically: the running minimum only moves on a
//! strictly lower score, so the earliest candidate in the fixed enumeration
//! order wins.
//!
//! The [`FrameAligner`] session object wraps the sweep in an explicit
//! uncalibrated/calibrating/calibrated lifecycle with fail-safe transform
//! variants for the pose-update loop.

#![no_std]

extern crate alloc;

mod aligner;

pub use aligner::*;

use alloc::vec::Vec;
use frame_align_core::{
    nalgebra::Vector3, AxisCandidate, AxisScaleOffset, CorrespondenceSet, FrameAlignment,
    PointCorrespondence,
};
use log::{info, trace};
use num_traits::Float;

/// Sweeps all 48 signed axis permutations, fitting each with per-axis least
/// squares and scoring it by mean Euclidean error.
#[derive(Copy, Clone, Debug)]
pub struct AxisSweep {
    /// Regularization added to the regression denominator so that an axis with
    /// no variation across the dataset still yields a finite scale.
    pub epsilon: f64,
}

impl AxisSweep {
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the [`AxisSweep::epsilon`].
    #[must_use]
    pub fn epsilon(self, epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// Runs the full sweep over a correspondence set.
    ///
    /// Every candidate is always evaluated, so given a valid set this cannot
    /// fail to produce an alignment. Ties resolve to the earliest candidate in
    /// the enumeration order of [`AxisCandidate::all`].
    pub fn from_correspondences(&self, correspondences: &CorrespondenceSet) -> FrameAlignment {
        let candidates = AxisCandidate::all();
        let mut best = self.evaluate(0, candidates[0], correspondences);
        for (index, &candidate) in candidates.iter().enumerate().skip(1) {
            let alignment = self.evaluate(index, candidate, correspondences);
            if alignment.mean_error < best.mean_error {
                best = alignment;
            }
        }
        info!(
            "sweep selected candidate {} (axis order {:?}, signs {:?}), scale {:?}, offset {:?}, mean error {}",
            best.candidate_index,
            best.candidate.permutation,
            best.candidate.signs,
            best.scale_offset.scale.as_slice(),
            best.scale_offset.offset.as_slice(),
            best.mean_error,
        );
        best
    }

    /// Fits and scores a single candidate.
    fn evaluate(
        &self,
        candidate_index: usize,
        candidate: AxisCandidate,
        correspondences: &CorrespondenceSet,
    ) -> FrameAlignment {
        let scale_offset = self.fit_axes(candidate, correspondences);
        let (mean_error, residuals) = residual_distances(candidate, scale_offset, correspondences);
        trace!("candidate {}: mean error {}", candidate_index, mean_error);
        FrameAlignment {
            candidate_index,
            candidate,
            scale_offset,
            mean_error,
            residuals,
        }
    }

    /// Ordinary least squares on each output axis independently, mapping the
    /// candidate-induced tracked values to the surveyed scene values:
    ///
    /// ```text
    /// scale  = (n·Σxy − Σx·Σy) / (n·Σxx − (Σx)² + ε)
    /// offset = (Σy − scale·Σx) / n
    /// ```
    fn fit_axes(
        &self,
        candidate: AxisCandidate,
        correspondences: &CorrespondenceSet,
    ) -> AxisScaleOffset {
        let n = correspondences.len() as f64;
        let mut sum_x = Vector3::zeros();
        let mut sum_y = Vector3::zeros();
        let mut sum_xx = Vector3::zeros();
        let mut sum_xy = Vector3::zeros();
        for &PointCorrespondence(tracked, scene) in correspondences {
            let x = candidate.induce(tracked.coords);
            let y = scene.coords;
            sum_x += x;
            sum_y += y;
            sum_xx += x.component_mul(&x);
            sum_xy += x.component_mul(&y);
        }
        let mut scale = Vector3::zeros();
        let mut offset = Vector3::zeros();
        for i in 0..3 {
            scale[i] = (n * sum_xy[i] - sum_x[i] * sum_y[i])
                / (n * sum_xx[i] - sum_x[i] * sum_x[i] + self.epsilon);
            offset[i] = (sum_y[i] - scale[i] * sum_x[i]) / n;
        }
        AxisScaleOffset { scale, offset }
    }
}

impl Default for AxisSweep {
    fn default() -> Self {
        Self { epsilon: 1e-4 }
    }
}

/// Euclidean distance between each predicted and surveyed scene point, in
/// dataset order, along with the arithmetic mean used as the candidate's score.
fn residual_distances(
    candidate: AxisCandidate,
    scale_offset: AxisScaleOffset,
    correspondences: &CorrespondenceSet,
) -> (f64, Vec<f64>) {
    let mut residuals = Vec::with_capacity(correspondences.len());
    let mut total = 0.0;
    for &PointCorrespondence(tracked, scene) in correspondences {
        let predicted = scale_offset.apply(candidate.induce(tracked.coords));
        let distance = Float::sqrt((predicted - scene.coords).norm_squared());
        total += distance;
        residuals.push(distance);
    }
    (total / correspondences.len() as f64, residuals)
}
