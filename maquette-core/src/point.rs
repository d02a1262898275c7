//! Point, vector and rotation types

use nalgebra::{Point3, Unit, UnitQuaternion, Vector3};

/// A 3D point with floating point coordinates
pub type Point3f = Point3<f32>;

/// A 3D vector with floating point components
pub type Vector3f = Vector3<f32>;

/// A unit rotation with floating point components
pub type UnitQuaternionf = UnitQuaternion<f32>;

/// Build a rotation from an axis and an angle in radians.
///
/// The axis does not need to be normalized. An axis too short to normalize
/// yields the identity rotation.
pub fn rotation_from_axis_angle(axis: Vector3f, angle: f32) -> UnitQuaternionf {
    match Unit::try_new(axis, 1.0e-6) {
        Some(unit_axis) => UnitQuaternionf::from_axis_angle(&unit_axis, angle),
        None => UnitQuaternionf::identity(),
    }
}

/// Decompose a rotation back into its axis and angle in radians.
///
/// The identity rotation has no distinguished axis and yields `None`.
pub fn rotation_to_axis_angle(rotation: &UnitQuaternionf) -> Option<(Vector3f, f32)> {
    rotation
        .axis_angle()
        .map(|(axis, angle)| (axis.into_inner(), angle))
}
