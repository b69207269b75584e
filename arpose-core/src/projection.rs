use nalgebra::Matrix4;
use num_traits::Float;

/// Builds an off-center projection matrix from pinhole calibration
/// intrinsics, so a virtual rendering camera images the scene the way the
/// calibrated physical camera does.
///
/// `fx`/`fy` are the focal lengths and `cx`/`cy` the principal point, all in
/// pixels of an image `width`×`height` pixels large. `near` and `far` are the
/// clipping plane distances of the virtual camera. A principal point off the
/// image center yields the corresponding off-center frustum.
#[allow(clippy::too_many_arguments)]
pub fn projection_from_intrinsics(
    fx: f64,
    fy: f64,
    cx: f64,
    cy: f64,
    width: f64,
    height: f64,
    near: f64,
    far: f64,
) -> Matrix4<f64> {
    Matrix4::new(
        2.0 * fx / width,
        0.0,
        1.0 - 2.0 * cx / width,
        0.0,
        0.0,
        2.0 * fy / height,
        -1.0 + 2.0 * cy / height,
        0.0,
        0.0,
        0.0,
        -(far + near) / (far - near),
        -2.0 * far * near / (far - near),
        0.0,
        0.0,
        -1.0,
        0.0,
    )
}

/// The size of one side of the view frustum at `distance` from the camera,
/// given the field of view in degrees along that side's direction.
pub fn frustum_size_at_distance(distance: f64, fov_degrees: f64) -> f64 {
    2.0 * distance * (fov_degrees * 0.5).to_radians().tan()
}

/// The distance at which the view frustum is `frustum_size` large on one
/// side, given the field of view in degrees along that side's direction.
pub fn distance_for_frustum_size(frustum_size: f64, fov_degrees: f64) -> f64 {
    frustum_size * 0.5 / (fov_degrees * 0.5).to_radians().tan()
}

/// The field of view in degrees under which the frustum is `frustum_size`
/// large on one side at `distance` from the camera.
pub fn fov_for_frustum_size(frustum_size: f64, distance: f64) -> f64 {
    (2.0 * (frustum_size * 0.5 / distance).atan()).to_degrees()
}

/// Converts a vertical field of view in degrees to the horizontal one for
/// the given width/height aspect ratio.
pub fn fov_horizontal_from_vertical(fov_vertical_degrees: f64, aspect: f64) -> f64 {
    (2.0 * (aspect * (fov_vertical_degrees * 0.5).to_radians().tan()).atan()).to_degrees()
}
