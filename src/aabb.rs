//! Axis-aligned bounding boxes

use crate::float_types::Real;
use nalgebra::Point3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub mins: Point3<Real>,
    pub maxs: Point3<Real>,
}

impl Aabb {
    /// An inverted box that any point will grow. `is_empty()` until something is added.
    #[inline]
    pub fn empty() -> Self {
        Self {
            mins: Point3::new(Real::MAX, Real::MAX, Real::MAX),
            maxs: Point3::new(Real::MIN, Real::MIN, Real::MIN),
        }
    }

    /// Smallest box holding every point of `points`. Empty input yields [`Aabb::empty`].
    pub fn from_points<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = &'a Point3<Real>>,
    {
        points.into_iter().fold(Self::empty(), |aabb, p| Self {
            mins: aabb.mins.inf(p),
            maxs: aabb.maxs.sup(p),
        })
    }

    #[inline]
    pub fn merged(&self, other: &Self) -> Self {
        Self { mins: self.mins.inf(&other.mins), maxs: self.maxs.sup(&other.maxs) }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mins.x > self.maxs.x || self.mins.y > self.maxs.y || self.mins.z > self.maxs.z
    }
}
