//! Axis-aligned bounding extents

use crate::point::{Point3f, Vector3f};
use crate::transform::RigidTransform;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box in 3D space.
///
/// The empty extents carry `+inf` minima and `-inf` maxima, which makes
/// them the identity for [`Extents3::union`] without a separate flag. Every
/// non-empty value keeps `min <= max` componentwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extents3 {
    pub min: Point3f,
    pub max: Point3f,
}

impl Extents3 {
    /// Create the empty extents: no volume, identity for union
    pub fn empty() -> Self {
        Self {
            min: Point3f::new(f32::INFINITY, f32::INFINITY, f32::INFINITY),
            max: Point3f::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
        }
    }

    /// Create extents from two opposite corners, in any order
    pub fn from_corners(a: Point3f, b: Point3f) -> Self {
        Self {
            min: Point3f::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Point3f::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// Create extents from a center point and half-sizes along each axis
    pub fn from_center_half_sizes(center: Point3f, half_sizes: Vector3f) -> Self {
        Self {
            min: center - half_sizes,
            max: center + half_sizes,
        }
    }

    /// Check whether these extents enclose no points at all
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// The smallest extents enclosing both operands.
    ///
    /// The empty extents are the identity: `union(empty, e) == e`.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: Point3f::new(
                self.min.x.min(other.min.x),
                self.min.y.min(other.min.y),
                self.min.z.min(other.min.z),
            ),
            max: Point3f::new(
                self.max.x.max(other.max.x),
                self.max.y.max(other.max.y),
                self.max.z.max(other.max.z),
            ),
        }
    }

    /// Grow the extents to enclose a point
    pub fn expand_to_contain(&mut self, point: Point3f) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    /// The center of the extents. Only meaningful when non-empty.
    pub fn midpoint(&self) -> Point3f {
        Point3f::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
            (self.min.z + self.max.z) / 2.0,
        )
    }

    /// The full size along each axis. Only meaningful when non-empty.
    pub fn size(&self) -> Vector3f {
        self.max - self.min
    }

    /// The half-size along each axis. Only meaningful when non-empty.
    pub fn half_sizes(&self) -> Vector3f {
        self.size() / 2.0
    }

    /// The eight corner points. Only meaningful when non-empty.
    pub fn corners(&self) -> [Point3f; 8] {
        [
            Point3f::new(self.min.x, self.min.y, self.min.z),
            Point3f::new(self.max.x, self.min.y, self.min.z),
            Point3f::new(self.min.x, self.max.y, self.min.z),
            Point3f::new(self.max.x, self.max.y, self.min.z),
            Point3f::new(self.min.x, self.min.y, self.max.z),
            Point3f::new(self.max.x, self.min.y, self.max.z),
            Point3f::new(self.min.x, self.max.y, self.max.z),
            Point3f::new(self.max.x, self.max.y, self.max.z),
        ]
    }

    /// The smallest axis-aligned extents enclosing these extents after a
    /// rigid transformation.
    ///
    /// A rotated box is generally no longer axis-aligned, so the result is
    /// the hull of all eight mapped corners rather than the mapped min/max
    /// pair. Transforming the empty extents yields the empty extents.
    pub fn transformed_by(&self, transform: &RigidTransform) -> Self {
        if self.is_empty() {
            return Self::empty();
        }
        let mut result = Self::empty();
        for corner in self.corners() {
            result.expand_to_contain(transform.transform_point(&corner));
        }
        result
    }
}

impl Default for Extents3 {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::rotation_from_axis_angle;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_empty_is_union_identity() {
        let extents = Extents3::from_corners(
            Point3f::new(-1.0, -2.0, -3.0),
            Point3f::new(4.0, 5.0, 6.0),
        );
        assert_eq!(Extents3::empty().union(&extents), extents);
        assert_eq!(extents.union(&Extents3::empty()), extents);
        assert!(Extents3::empty().union(&Extents3::empty()).is_empty());
    }

    #[test]
    fn test_midpoint() {
        let extents = Extents3::from_corners(
            Point3f::new(-10.0, -10.0, -10.0),
            Point3f::new(10.0, 10.0, 10.0),
        );
        assert_eq!(extents.midpoint(), Point3f::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_from_corners_normalizes_order() {
        let extents = Extents3::from_corners(
            Point3f::new(5.0, -1.0, 3.0),
            Point3f::new(-2.0, 4.0, 0.0),
        );
        assert_eq!(extents.min, Point3f::new(-2.0, -1.0, 0.0));
        assert_eq!(extents.max, Point3f::new(5.0, 4.0, 3.0));
        assert!(!extents.is_empty());
    }

    #[test]
    fn test_union_of_disjoint_boxes() {
        let a = Extents3::from_corners(Point3f::new(0.0, 0.0, 0.0), Point3f::new(1.0, 1.0, 1.0));
        let b = Extents3::from_corners(Point3f::new(2.0, 2.0, 2.0), Point3f::new(3.0, 3.0, 3.0));
        let union = a.union(&b);
        assert_eq!(union.min, Point3f::new(0.0, 0.0, 0.0));
        assert_eq!(union.max, Point3f::new(3.0, 3.0, 3.0));
    }

    #[test]
    fn test_transform_by_translation() {
        let extents = Extents3::from_center_half_sizes(
            Point3f::origin(),
            Vector3f::new(1.0, 2.0, 3.0),
        );
        let moved = extents.transformed_by(&RigidTransform::translation(Vector3f::new(
            10.0, 0.0, 0.0,
        )));
        assert_eq!(moved.min, Point3f::new(9.0, -2.0, -3.0));
        assert_eq!(moved.max, Point3f::new(11.0, 2.0, 3.0));
    }

    #[test]
    fn test_transform_by_rotation_rehulls_corners() {
        // A quarter turn about Z swaps the box's x and y spans.
        let extents = Extents3::from_center_half_sizes(
            Point3f::origin(),
            Vector3f::new(4.0, 1.0, 2.0),
        );
        let rotation = rotation_from_axis_angle(Vector3f::new(0.0, 0.0, 1.0), FRAC_PI_2);
        let rotated = extents.transformed_by(&RigidTransform::rotation(rotation));
        assert_relative_eq!(rotated.min, Point3f::new(-1.0, -4.0, -2.0), epsilon = 1.0e-5);
        assert_relative_eq!(rotated.max, Point3f::new(1.0, 4.0, 2.0), epsilon = 1.0e-5);
    }

    #[test]
    fn test_transform_of_empty_stays_empty() {
        let moved = Extents3::empty()
            .transformed_by(&RigidTransform::translation(Vector3f::new(1.0, 1.0, 1.0)));
        assert!(moved.is_empty());
    }

    #[test]
    fn test_expand_to_contain() {
        let mut extents = Extents3::empty();
        extents.expand_to_contain(Point3f::new(1.0, -1.0, 0.0));
        extents.expand_to_contain(Point3f::new(-2.0, 3.0, 5.0));
        assert_eq!(extents.min, Point3f::new(-2.0, -1.0, 0.0));
        assert_eq!(extents.max, Point3f::new(1.0, 3.0, 5.0));
    }
}
