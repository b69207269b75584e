use crate::Pose;
use nalgebra::{Matrix3, Matrix4, Rotation3, UnitQuaternion, Vector3, Vector4};
#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// Axis-convention adjustments applied when converting a [`Pose`] into a
/// rendering transform.
///
/// The defaults suit the common vision-to-rendering path: handedness
/// conversion on, local Z inversion off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ConvertOptions {
    /// Re-express the transform in a left-handed world frame by flipping the
    /// world Y axis. This is the conversion from the vision library's
    /// right-handed convention to a left-handed rendering convention.
    pub convert_handedness: bool,
    /// Flip the object's own local Z axis, for rendering targets whose
    /// forward convention is opposite the vision library's.
    pub invert_z_axis: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            convert_handedness: true,
            invert_z_axis: false,
        }
    }
}

impl ConvertOptions {
    /// Options that leave the transform in the vision convention untouched.
    pub fn raw() -> Self {
        Self {
            convert_handedness: false,
            invert_z_axis: false,
        }
    }

    pub fn convert_handedness(self, convert_handedness: bool) -> Self {
        Self {
            convert_handedness,
            ..self
        }
    }

    pub fn invert_z_axis(self, invert_z_axis: bool) -> Self {
        Self {
            invert_z_axis,
            ..self
        }
    }
}

/// The world-frame Y-axis flip, `diag(1,-1,1,1)`.
///
/// Left-multiplying a transform by this matrix changes the frame the
/// transform is expressed in, which converts between right- and left-handed
/// world conventions. The flip is its own inverse.
pub fn y_flip() -> Matrix4<f64> {
    Matrix4::from_diagonal(&Vector4::new(1.0, -1.0, 1.0, 1.0))
}

/// The object-space Z-axis flip, `diag(1,1,-1,1)`.
///
/// Right-multiplying a transform by this matrix flips the local Z axis of
/// the object the transform positions, leaving the world frame alone.
pub fn z_flip() -> Matrix4<f64> {
    Matrix4::from_diagonal(&Vector4::new(1.0, 1.0, -1.0, 1.0))
}

impl Pose {
    /// Converts the pose into a 4×4 transform for a rendering scene-graph
    /// node, with unit scale.
    ///
    /// The handedness flip is applied on the left (it changes the world frame
    /// the transform is expressed in) and the Z flip on the right (it changes
    /// the object's local axis convention). The two are distinct operations
    /// and the order between them is fixed.
    pub fn to_matrix(self, options: ConvertOptions) -> Matrix4<f64> {
        let mut matrix = self.homogeneous();
        if options.convert_handedness {
            matrix = y_flip() * matrix;
        }
        if options.invert_z_axis {
            matrix *= z_flip();
        }
        matrix
    }
}

/// Extract the translation column from a transform matrix.
pub fn extract_translation(matrix: &Matrix4<f64>) -> Vector3<f64> {
    Vector3::new(matrix[(0, 3)], matrix[(1, 3)], matrix[(2, 3)])
}

/// Extract the per-axis scale from a transform matrix as the magnitude of
/// each column of its linear part.
pub fn extract_scale(matrix: &Matrix4<f64>) -> Vector3<f64> {
    Vector3::new(
        matrix.column(0).norm(),
        matrix.column(1).norm(),
        matrix.column(2).norm(),
    )
}

/// Extract the rotation from a transform matrix as the look-rotation built
/// from its forward (column 2) and up (column 1) vectors.
///
/// The columns are used unnormalized, so the result is only exact when the
/// matrix carries uniform scale and no shear. Under non-uniform scale or
/// shear the rotation is an approximation; this matches the behavior of the
/// rendering-engine decomposition it mirrors and is intentionally not
/// corrected here.
pub fn extract_rotation(matrix: &Matrix4<f64>) -> UnitQuaternion<f64> {
    let forward = Vector3::new(matrix[(0, 2)], matrix[(1, 2)], matrix[(2, 2)]);
    let up = Vector3::new(matrix[(0, 1)], matrix[(1, 1)], matrix[(2, 1)]);
    look_rotation(forward, up)
}

/// The orientation that looks along `forward` with `up` as the reference up
/// direction, following the left-handed look-rotation convention of the
/// rendering engines this crate targets: `right = up × forward`, then up is
/// re-derived as `forward × right`.
///
/// Degenerate input (zero-length `forward`, or `up` parallel to `forward`)
/// produces a non-finite result; callers must avoid it.
pub fn look_rotation(forward: Vector3<f64>, up: Vector3<f64>) -> UnitQuaternion<f64> {
    let forward = forward.normalize();
    let right = up.cross(&forward).normalize();
    let up = forward.cross(&right);
    UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(
        Matrix3::from_columns(&[right, up, forward]),
    ))
}

/// The translation, rotation, and scale extracted from a transform matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Decomposition {
    pub position: Vector3<f64>,
    pub rotation: UnitQuaternion<f64>,
    pub scale: Vector3<f64>,
}

impl Decomposition {
    /// Discards the scale and returns the rigid part as a [`Pose`].
    pub fn pose(&self) -> Pose {
        Pose::new(self.position, self.rotation)
    }
}

/// Extract position, rotation, and scale from a TRS transform matrix.
///
/// See [`extract_rotation`] for the limitation on matrices carrying
/// non-uniform scale or shear.
pub fn decompose(matrix: &Matrix4<f64>) -> Decomposition {
    Decomposition {
        position: extract_translation(matrix),
        rotation: extract_rotation(matrix),
        scale: extract_scale(matrix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Unit;

    const EPSILON_APPROX: f64 = 1e-12;

    fn sample_pose() -> Pose {
        let axis = Unit::new_normalize(Vector3::new(0.2, 1.0, -0.5));
        Pose::new(
            Vector3::new(0.4, -1.2, 2.5),
            UnitQuaternion::from_axis_angle(&axis, 0.7),
        )
    }

    #[test]
    fn identity_pose_is_identity_matrix() {
        let matrix = Pose::identity().to_matrix(ConvertOptions::raw());
        assert_eq!(matrix, Matrix4::identity());
    }

    #[test]
    fn y_flip_is_involutive() {
        assert_eq!(y_flip() * y_flip(), Matrix4::identity());
    }

    #[test]
    fn handedness_flip_negates_world_y() {
        let pose = Pose::new(Vector3::new(1.0, 2.0, 3.0), UnitQuaternion::identity());
        let matrix = pose.to_matrix(ConvertOptions::default());
        assert_relative_eq!(
            extract_translation(&matrix),
            Vector3::new(1.0, -2.0, 3.0),
            epsilon = EPSILON_APPROX
        );
    }

    #[test]
    fn z_flip_negates_local_forward() {
        let matrix = sample_pose().to_matrix(ConvertOptions::raw().invert_z_axis(true));
        let unflipped = sample_pose().to_matrix(ConvertOptions::raw());
        assert_relative_eq!(
            matrix.column(2).into_owned(),
            -unflipped.column(2).into_owned(),
            epsilon = EPSILON_APPROX
        );
        // Right and up columns and the translation are untouched.
        assert_relative_eq!(
            matrix.column(0).into_owned(),
            unflipped.column(0).into_owned(),
            epsilon = EPSILON_APPROX
        );
        assert_relative_eq!(
            matrix.column(3).into_owned(),
            unflipped.column(3).into_owned(),
            epsilon = EPSILON_APPROX
        );
    }

    #[test]
    fn decompose_inverts_to_matrix() {
        let pose = sample_pose();
        let decomposed = decompose(&pose.to_matrix(ConvertOptions::raw()));
        assert_relative_eq!(decomposed.position, pose.position, epsilon = EPSILON_APPROX);
        assert_relative_eq!(
            decomposed.rotation.angle_to(&pose.rotation),
            0.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            decomposed.scale,
            Vector3::new(1.0, 1.0, 1.0),
            epsilon = EPSILON_APPROX
        );
    }

    #[test]
    fn extract_scale_reads_column_magnitudes() {
        let matrix = Matrix4::from_diagonal(&Vector4::new(2.0, 3.0, 4.0, 1.0));
        assert_relative_eq!(
            extract_scale(&matrix),
            Vector3::new(2.0, 3.0, 4.0),
            epsilon = EPSILON_APPROX
        );
    }
}
