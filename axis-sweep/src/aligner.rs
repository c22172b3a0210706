use crate::AxisSweep;
use frame_align_core::{
    nalgebra::UnitQuaternion, CorrespondenceSet, FrameAlignment, NotCalibrated, ScenePoint,
    ScenePose, TrackedPoint, TrackedPose,
};
use log::warn;

/// Where an aligner is in its calibration lifecycle.
#[derive(Debug, Clone, PartialEq)]
enum AlignerState {
    Uncalibrated,
    Calibrating,
    Calibrated(FrameAlignment),
}

/// Session-lifetime owner of the surveyed correspondences and the active
/// [`FrameAlignment`].
///
/// An aligner starts uncalibrated, runs the sweep once at session start, and is
/// then queried by the pose-update loop on every tick. The alignment itself is
/// immutable; [`FrameAligner::recalibrate`] builds a complete replacement off to
/// the side and swaps it in wholesale, so a reader never observes a partially
/// updated transform.
#[derive(Debug, Clone)]
pub struct FrameAligner {
    sweep: AxisSweep,
    correspondences: CorrespondenceSet,
    state: AlignerState,
}

impl FrameAligner {
    /// Creates an uncalibrated aligner over a surveyed correspondence set with
    /// the default sweep configuration.
    pub fn new(correspondences: CorrespondenceSet) -> Self {
        Self::with_sweep(AxisSweep::new(), correspondences)
    }

    /// Creates an uncalibrated aligner with an explicit sweep configuration.
    pub fn with_sweep(sweep: AxisSweep, correspondences: CorrespondenceSet) -> Self {
        Self {
            sweep,
            correspondences,
            state: AlignerState::Uncalibrated,
        }
    }

    /// Runs the sweep and makes the resulting alignment active.
    ///
    /// Idempotent: calling it again re-runs the sweep on the same
    /// correspondences and yields an identical alignment.
    pub fn calibrate(&mut self) -> &FrameAlignment {
        self.state = AlignerState::Calibrating;
        let alignment = self.sweep.from_correspondences(&self.correspondences);
        self.state = AlignerState::Calibrated(alignment);
        match &self.state {
            AlignerState::Calibrated(alignment) => alignment,
            // The calibrated state was assigned on the line above.
            _ => unreachable!(),
        }
    }

    /// Explicitly rebuilds the alignment from the owned correspondences,
    /// replacing the active one wholesale once the new sweep completes.
    pub fn recalibrate(&mut self) -> &FrameAlignment {
        self.calibrate()
    }

    /// The active alignment, if a sweep has completed.
    pub fn alignment(&self) -> Option<&FrameAlignment> {
        match &self.state {
            AlignerState::Calibrated(alignment) => Some(alignment),
            _ => None,
        }
    }

    /// Whether a sweep has completed and transforms are available.
    pub fn is_calibrated(&self) -> bool {
        self.alignment().is_some()
    }

    /// The surveyed correspondences this aligner calibrates against.
    pub fn correspondences(&self) -> &CorrespondenceSet {
        &self.correspondences
    }

    /// Re-expresses a tracked position in the scene frame, or signals
    /// [`NotCalibrated`] if no sweep has completed yet.
    pub fn transform_point(&self, point: TrackedPoint) -> Result<ScenePoint, NotCalibrated> {
        self.alignment()
            .map(|alignment| alignment.transform_point(point))
            .ok_or(NotCalibrated)
    }

    /// Re-expresses a tracked orientation in the scene frame, or signals
    /// [`NotCalibrated`] if no sweep has completed yet.
    pub fn transform_orientation(
        &self,
        orientation: UnitQuaternion<f64>,
    ) -> Result<UnitQuaternion<f64>, NotCalibrated> {
        self.alignment()
            .map(|alignment| alignment.transform_orientation(orientation))
            .ok_or(NotCalibrated)
    }

    /// Re-expresses a full tracked pose in the scene frame, or signals
    /// [`NotCalibrated`] if no sweep has completed yet.
    pub fn transform_pose(&self, pose: TrackedPose) -> Result<ScenePose, NotCalibrated> {
        self.alignment()
            .map(|alignment| alignment.transform_pose(pose))
            .ok_or(NotCalibrated)
    }

    /// Fail-safe point transform for update loops: before calibration the
    /// tracked position is passed through unchanged and a warning is logged.
    pub fn point_or_passthrough(&self, point: TrackedPoint) -> ScenePoint {
        match self.transform_point(point) {
            Ok(scene) => scene,
            Err(NotCalibrated) => {
                warn!("point transform requested before calibration; passing position through");
                ScenePoint(point.0)
            }
        }
    }

    /// Fail-safe orientation transform for update loops: before calibration the
    /// identity orientation is returned and a warning is logged.
    pub fn orientation_or_identity(&self, orientation: UnitQuaternion<f64>) -> UnitQuaternion<f64> {
        match self.transform_orientation(orientation) {
            Ok(mapped) => mapped,
            Err(NotCalibrated) => {
                warn!("orientation transform requested before calibration; returning identity");
                UnitQuaternion::identity()
            }
        }
    }
}
