//! Rigid transformation utilities

use crate::point::{Point3f, UnitQuaternionf, Vector3f};
use nalgebra::{Isometry3, Translation3};
use serde::{Deserialize, Serialize};

/// A rigid 3D transformation: a rotation followed by a translation.
///
/// Points map as `p' = R * p + t`. Composing `a.compose(b)` yields the
/// transform that applies `b` first and then `a`, which is the order used
/// when accumulating a node's transform beneath its ancestors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigidTransform {
    pub isometry: Isometry3<f32>,
}

impl RigidTransform {
    /// Create an identity transformation
    pub fn identity() -> Self {
        Self {
            isometry: Isometry3::identity(),
        }
    }

    /// Create a transformation from a translation and a rotation
    pub fn from_parts(translation: Vector3f, rotation: UnitQuaternionf) -> Self {
        Self {
            isometry: Isometry3::from_parts(Translation3::from(translation), rotation),
        }
    }

    /// Create a pure translation
    pub fn translation(translation: Vector3f) -> Self {
        Self::from_parts(translation, UnitQuaternionf::identity())
    }

    /// Create a pure rotation
    pub fn rotation(rotation: UnitQuaternionf) -> Self {
        Self::from_parts(Vector3f::zeros(), rotation)
    }

    /// The translation component
    pub fn translation_part(&self) -> Vector3f {
        self.isometry.translation.vector
    }

    /// The rotation component
    pub fn rotation_part(&self) -> UnitQuaternionf {
        self.isometry.rotation
    }

    /// Apply the transformation to a point
    pub fn transform_point(&self, point: &Point3f) -> Point3f {
        self.isometry.transform_point(point)
    }

    /// Apply the rotation component to a vector
    pub fn transform_vector(&self, vector: &Vector3f) -> Vector3f {
        self.isometry.transform_vector(vector)
    }

    /// Compose this transformation with another, applying `other` first
    pub fn compose(self, other: Self) -> Self {
        Self {
            isometry: self.isometry * other.isometry,
        }
    }

    /// Get the inverse transformation
    pub fn inverse(self) -> Self {
        Self {
            isometry: self.isometry.inverse(),
        }
    }
}

impl Default for RigidTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for RigidTransform {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.compose(rhs)
    }
}

impl From<Isometry3<f32>> for RigidTransform {
    fn from(isometry: Isometry3<f32>) -> Self {
        Self { isometry }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::rotation_from_axis_angle;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_identity_maps_points_unchanged() {
        let transform = RigidTransform::default();
        let point = Point3f::new(1.0, 2.0, 3.0);
        assert_eq!(transform.transform_point(&point), point);
    }

    #[test]
    fn test_rotate_then_translate() {
        let rotation = rotation_from_axis_angle(Vector3f::new(0.0, 0.0, 1.0), FRAC_PI_2);
        let transform = RigidTransform::from_parts(Vector3f::new(10.0, 0.0, 0.0), rotation);
        let mapped = transform.transform_point(&Point3f::new(1.0, 0.0, 0.0));
        assert_relative_eq!(mapped, Point3f::new(10.0, 1.0, 0.0), epsilon = 1.0e-5);
    }

    #[test]
    fn test_compose_applies_rhs_first() {
        let rotate = RigidTransform::rotation(rotation_from_axis_angle(
            Vector3f::new(0.0, 0.0, 1.0),
            FRAC_PI_2,
        ));
        let translate = RigidTransform::translation(Vector3f::new(5.0, 0.0, 0.0));
        let mapped = translate
            .compose(rotate)
            .transform_point(&Point3f::new(1.0, 0.0, 0.0));
        assert_relative_eq!(mapped, Point3f::new(5.0, 1.0, 0.0), epsilon = 1.0e-5);
    }

    #[test]
    fn test_inverse_round_trip() {
        let transform = RigidTransform::from_parts(
            Vector3f::new(3.0, -2.0, 7.0),
            rotation_from_axis_angle(Vector3f::new(1.0, 1.0, 0.0), 0.8),
        );
        let point = Point3f::new(-4.0, 9.0, 1.5);
        let round_trip = transform
            .inverse()
            .transform_point(&transform.transform_point(&point));
        assert_relative_eq!(round_trip, point, epsilon = 1.0e-4);
    }
}
