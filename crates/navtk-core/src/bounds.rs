//! Axis-aligned bounding boxes.

use glam::{Mat4, Vec3};

use crate::error::CoreError;

/// An axis-aligned box given by its minimum and maximum corners.
///
/// A box with `min > max` on any axis is *empty*: it contains nothing and
/// grows to exactly the first point encapsulated into it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Bounds {
    /// The empty box, identity for [`encapsulate`](Self::encapsulate).
    pub const EMPTY: Bounds = Bounds {
        min: Vec3::splat(f32::INFINITY),
        max: Vec3::splat(f32::NEG_INFINITY),
    };

    /// Create a box from corners without validation.
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create a box from corners, rejecting non-finite or inverted input.
    pub fn try_new(min: Vec3, max: Vec3) -> Result<Self, CoreError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(CoreError::InvalidBounds {
                reason: format!("non-finite corner: min {min}, max {max}"),
            });
        }
        if min.cmpgt(max).any() {
            return Err(CoreError::InvalidBounds {
                reason: format!("min {min} exceeds max {max}"),
            });
        }
        Ok(Self { min, max })
    }

    /// Create a box from a center and half-extents.
    pub fn from_center_extents(center: Vec3, extents: Vec3) -> Self {
        Self {
            min: center - extents,
            max: center + extents,
        }
    }

    /// The tightest box around `points`. Empty if `points` is empty.
    pub fn from_points<I: IntoIterator<Item = Vec3>>(points: I) -> Self {
        let mut bounds = Self::EMPTY;
        for p in points {
            bounds.encapsulate(p);
        }
        bounds
    }

    /// Whether this box contains no points.
    pub fn is_empty(&self) -> bool {
        self.min.cmpgt(self.max).any()
    }

    /// Grow the box to include `point`.
    pub fn encapsulate(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Grow the box to include `other`.
    pub fn encapsulate_bounds(&mut self, other: &Bounds) {
        if other.is_empty() {
            return;
        }
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    /// Center point.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Half-size along each axis.
    pub fn extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Full size along each axis.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// The box grown by `margin` on every side.
    pub fn expanded(&self, margin: f32) -> Self {
        Self {
            min: self.min - Vec3::splat(margin),
            max: self.max + Vec3::splat(margin),
        }
    }

    /// Whether `point` lies inside or on the boundary.
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Whether the two boxes overlap, touching included.
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.min.cmple(other.max).all() && self.max.cmpge(other.min).all()
    }

    /// Whether the segment `start..end` passes through the box.
    ///
    /// Slab test over the segment parameter `[0, 1]`. Axes along which the
    /// segment does not move only need the start to lie within the slab.
    pub fn intersects_segment(&self, start: Vec3, end: Vec3) -> bool {
        let dir = end - start;
        let mut t_min = 0.0f32;
        let mut t_max = 1.0f32;
        for axis in 0..3 {
            let (s, d, lo, hi) = (start[axis], dir[axis], self.min[axis], self.max[axis]);
            if d.abs() < f32::EPSILON {
                if s < lo || s > hi {
                    return false;
                }
                continue;
            }
            let inv = 1.0 / d;
            let mut t0 = (lo - s) * inv;
            let mut t1 = (hi - s) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_min > t_max {
                return false;
            }
        }
        true
    }

    /// The axis-aligned box enclosing this box after applying `transform`.
    pub fn transformed(&self, transform: &Mat4) -> Self {
        if self.is_empty() {
            return *self;
        }
        let corners = (0..8).map(|i| {
            let pick = |bit: usize, axis: usize| {
                if i & bit == 0 {
                    self.min[axis]
                } else {
                    self.max[axis]
                }
            };
            transform.transform_point3(Vec3::new(pick(1, 0), pick(2, 1), pick(4, 2)))
        });
        Self::from_points(corners)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn unit() -> Bounds {
        Bounds::new(Vec3::ZERO, Vec3::ONE)
    }

    #[test]
    fn empty_grows_to_first_point() {
        let mut b = Bounds::EMPTY;
        assert!(b.is_empty());
        b.encapsulate(Vec3::new(1.0, 2.0, 3.0));
        assert!(!b.is_empty());
        assert_eq!(b.min, b.max);
    }

    #[test]
    fn try_new_rejects_inverted_and_nan() {
        assert!(Bounds::try_new(Vec3::ONE, Vec3::ZERO).is_err());
        assert!(Bounds::try_new(Vec3::splat(f32::NAN), Vec3::ONE).is_err());
        assert!(Bounds::try_new(Vec3::ZERO, Vec3::ONE).is_ok());
    }

    #[test]
    fn contains_is_boundary_inclusive() {
        let b = unit();
        assert!(b.contains(Vec3::ZERO));
        assert!(b.contains(Vec3::ONE));
        assert!(b.contains(Vec3::splat(0.5)));
        assert!(!b.contains(Vec3::new(1.01, 0.5, 0.5)));
    }

    #[test]
    fn intersects_touching_boxes() {
        let a = unit();
        let b = Bounds::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
        let c = Bounds::new(Vec3::splat(1.5), Vec3::splat(2.0));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn segment_through_box() {
        let b = unit();
        assert!(b.intersects_segment(Vec3::new(-1.0, 0.5, 0.5), Vec3::new(2.0, 0.5, 0.5)));
        assert!(!b.intersects_segment(Vec3::new(-1.0, 2.0, 0.5), Vec3::new(2.0, 2.0, 0.5)));
        // Stops short of the box.
        assert!(!b.intersects_segment(Vec3::new(-2.0, 0.5, 0.5), Vec3::new(-1.0, 0.5, 0.5)));
        // Axis-parallel, entirely inside.
        assert!(b.intersects_segment(Vec3::splat(0.25), Vec3::splat(0.75)));
    }

    #[test]
    fn transformed_by_translation() {
        let moved = unit().transformed(&Mat4::from_translation(Vec3::new(5.0, 0.0, 0.0)));
        assert_eq!(moved.min, Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(moved.max, Vec3::new(6.0, 1.0, 1.0));
    }

    proptest! {
        #[test]
        fn from_points_contains_every_point(
            pts in proptest::collection::vec((-100.0f32..100.0, -100.0f32..100.0, -100.0f32..100.0), 1..20),
        ) {
            let points: Vec<Vec3> = pts.iter().map(|&(x, y, z)| Vec3::new(x, y, z)).collect();
            let b = Bounds::from_points(points.iter().copied());
            for p in points {
                prop_assert!(b.contains(p));
            }
        }
    }
}
