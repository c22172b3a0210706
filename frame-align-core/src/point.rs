use derive_more::{AsMut, AsRef, Deref, DerefMut, From, Into};
use nalgebra::{Point3, UnitQuaternion};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// A position in the tracking frame, the coordinate system of the external
/// localization pipeline. The axis conventions, handedness, scale, and origin of
/// this frame are arbitrary and generally disagree with the scene frame; the
/// whole point of calibration is to recover that disagreement.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, AsMut, AsRef, Deref, DerefMut, From, Into)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TrackedPoint(pub Point3<f64>);

impl TrackedPoint {
    /// Creates a tracked point from its raw components.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Point3::new(x, y, z))
    }
}

/// A position in the scene frame, the coordinate system used for rendering and
/// navigation. Surveyed correspondence targets and all transformed outputs are
/// expressed in this frame.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, AsMut, AsRef, Deref, DerefMut, From, Into)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ScenePoint(pub Point3<f64>);

impl ScenePoint {
    /// Creates a scene point from its raw components.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Point3::new(x, y, z))
    }
}

/// A live pose reported by the localization pipeline: a position and a unit
/// quaternion orientation, both expressed in the tracking frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TrackedPose {
    pub position: TrackedPoint,
    pub orientation: UnitQuaternion<f64>,
}

/// A pose re-expressed in the scene frame, ready for rendering or navigation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ScenePose {
    pub position: ScenePoint,
    pub orientation: UnitQuaternion<f64>,
}
