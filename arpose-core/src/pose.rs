use derive_more::{AsMut, AsRef, Deref, DerefMut, From, Into};
use nalgebra::{Isometry3, Matrix4, Translation3, Unit, UnitQuaternion, Vector3};
use num_traits::Float;
#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// Contains a Rodrigues rotation vector as reported by vision pose solvers.
///
/// The vector's direction is the rotation axis and its magnitude is the
/// rotation angle in radians. This is the same axis-angle encoding OpenCV's
/// `solvePnP` family writes into `rvec`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, AsMut, AsRef, Deref, DerefMut, From, Into)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct RotationVector(pub Vector3<f64>);

impl RotationVector {
    /// The rotation angle in radians encoded by this vector.
    pub fn angle(self) -> f64 {
        self.0.norm()
    }

    /// Converts the rotation vector into a unit quaternion.
    pub fn rotation(self) -> UnitQuaternion<f64> {
        self.into()
    }
}

/// This is the exponential map.
impl From<RotationVector> for UnitQuaternion<f64> {
    fn from(rvec: RotationVector) -> Self {
        // This check is done to avoid the degenerate case where the angle is near zero.
        let theta2 = rvec.0.norm_squared();
        if theta2 <= f64::epsilon() {
            Self::identity()
        } else {
            let theta = theta2.sqrt();
            let axis = Unit::new_unchecked(rvec.0 / theta);
            Self::from_axis_angle(&axis, theta)
        }
    }
}

/// This is the log map.
impl From<UnitQuaternion<f64>> for RotationVector {
    fn from(rotation: UnitQuaternion<f64>) -> Self {
        Self(rotation.scaled_axis())
    }
}

/// A rigid transform estimated by the vision pipeline for one detected marker
/// or camera, expressed in the vision library's right-handed coordinate
/// convention.
///
/// The position unit is whatever the calibration used, typically meters. A
/// `Pose` is created fresh each frame from the solver's raw output and is not
/// retained, except as the prior a deadband filter compares the next frame
/// against.
///
/// All operations assume finite input. Non-finite positions or rotations
/// produce garbage output rather than errors; keeping them out is the
/// caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Pose {
    pub position: Vector3<f64>,
    pub rotation: UnitQuaternion<f64>,
}

impl Pose {
    /// Creates a pose with no change in position or orientation.
    pub fn identity() -> Self {
        Self {
            position: Vector3::zeros(),
            rotation: UnitQuaternion::identity(),
        }
    }

    pub fn new(position: Vector3<f64>, rotation: UnitQuaternion<f64>) -> Self {
        Self { position, rotation }
    }

    /// Creates the pose from a vision solver's raw rotation and translation
    /// vectors.
    ///
    /// The translation is taken verbatim as the position. A zero-magnitude
    /// rotation vector yields the identity rotation.
    pub fn from_rvec_tvec(rvec: Vector3<f64>, tvec: Vector3<f64>) -> Self {
        Self {
            position: tvec,
            rotation: RotationVector(rvec).into(),
        }
    }

    /// Retrieve the isometry.
    pub fn isometry(self) -> Isometry3<f64> {
        Isometry3::from_parts(Translation3::from(self.position), self.rotation)
    }

    /// Retrieve the homogeneous matrix, with no axis-convention changes
    /// applied.
    pub fn homogeneous(self) -> Matrix4<f64> {
        self.isometry().to_homogeneous()
    }
}

impl From<Isometry3<f64>> for Pose {
    fn from(isometry: Isometry3<f64>) -> Self {
        Self {
            position: isometry.translation.vector,
            rotation: isometry.rotation,
        }
    }
}
