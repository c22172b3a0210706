use crate::{AxisCandidate, ScenePoint, ScenePose, TrackedPoint, TrackedPose};
use alloc::vec::Vec;
use nalgebra::{Point3, Quaternion, UnitQuaternion, Vector3};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// The continuous half of an alignment: an independent scale and offset fit for
/// each output axis by least squares.
///
/// Note that this is an anisotropic per-axis affine fit, not a rigid or
/// similarity transform. The three axes are treated independently, which keeps
/// the fit closed-form at the cost of rotation consistency.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct AxisScaleOffset {
    /// Multiplier per output axis.
    pub scale: Vector3<f64>,
    /// Additive offset per output axis.
    pub offset: Vector3<f64>,
}

impl AxisScaleOffset {
    /// Applies the fit elementwise: `v * scale + offset`.
    pub fn apply(&self, v: Vector3<f64>) -> Vector3<f64> {
        self.scale.component_mul(&v) + self.offset
    }
}

/// The tracking frame's heading convention is turned half a revolution about
/// the vertical axis relative to the scene frame, so every mapped orientation
/// is composed with this constant correction. Exactly representable, no trig.
fn heading_correction() -> UnitQuaternion<f64> {
    UnitQuaternion::new_unchecked(Quaternion::new(0.0, 0.0, 1.0, 0.0))
}

/// The immutable result of a calibration sweep: the winning [`AxisCandidate`],
/// its fitted [`AxisScaleOffset`], and the error diagnostics of the fit.
///
/// An alignment is produced exactly once per sweep and never mutated. All of
/// its transform operations take `&self` and are pure, so once calibrated it
/// may be queried from any number of readers without synchronization. Any
/// display or logging surface should read from this one value rather than
/// keeping its own copy of the parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct FrameAlignment {
    /// Position of the winning candidate in the fixed enumeration order.
    pub candidate_index: usize,
    /// The winning axis-reassignment hypothesis.
    pub candidate: AxisCandidate,
    /// The per-axis scale and offset fit for the winning candidate.
    pub scale_offset: AxisScaleOffset,
    /// Mean Euclidean distance between predicted and surveyed scene points.
    pub mean_error: f64,
    /// Per-correspondence residual distances, in dataset order.
    pub residuals: Vec<f64>,
}

impl FrameAlignment {
    /// Re-expresses a tracked position in the scene frame: permutation and sign
    /// flips first, then the per-axis scale and offset.
    pub fn transform_point(&self, point: TrackedPoint) -> ScenePoint {
        let induced = self.candidate.induce(point.coords);
        ScenePoint(Point3::from(self.scale_offset.apply(induced)))
    }

    /// Re-expresses a tracked orientation in the scene frame.
    ///
    /// The quaternion's imaginary components are permuted and sign-flipped with
    /// the same candidate used for positions while the scalar component is kept,
    /// and the result is composed with a constant half-revolution about the
    /// vertical axis that reconciles the heading conventions of the two frames.
    ///
    /// Remapping the imaginary components directly is only a faithful change of
    /// basis for particular symmetric axis configurations; it is kept
    /// component-wise here so orientations stay consistent with the point
    /// mapping actually in use.
    pub fn transform_orientation(&self, orientation: UnitQuaternion<f64>) -> UnitQuaternion<f64> {
        let imag = self.candidate.induce(orientation.imag());
        // Permutation and sign flips preserve the unit norm.
        let mapped = UnitQuaternion::new_unchecked(Quaternion::from_parts(orientation.w, imag));
        mapped * heading_correction()
    }

    /// Re-expresses a full tracked pose in the scene frame.
    pub fn transform_pose(&self, pose: TrackedPose) -> ScenePose {
        ScenePose {
            position: self.transform_point(pose.position),
            orientation: self.transform_orientation(pose.orientation),
        }
    }
}
