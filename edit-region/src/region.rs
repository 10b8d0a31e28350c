use alloc::boxed::Box;
use core::fmt;

use crate::math::GridPoint;

mod cuboid;
pub use cuboid::*;
mod cuboid_iter;
pub use cuboid_iter::*;

/// Iterator over the points of a [`Region`], as returned by [`Region::points()`].
pub type Points<'a> = Box<dyn Iterator<Item = GridPoint> + 'a>;

/// A set of lattice points which world-editing operations act upon.
///
/// Every shape of selection implements this trait. Operations like fill or copy should be
/// written against `&dyn Region` (or a generic `R: Region`) so that they work with any shape,
/// not just [`Cuboid`].
///
/// Implementations must keep [`Region::minimum_point()`] less than or equal to
/// [`Region::maximum_point()`] on every axis, and every point produced by
/// [`Region::points()`] must lie within those bounds.
pub trait Region: fmt::Debug {
    /// Returns the most negative corner of the smallest box enclosing this region.
    fn minimum_point(&self) -> GridPoint;

    /// Returns the most positive corner of the smallest box enclosing this region.
    ///
    /// This point is inclusive: if the region is not empty, some point of the region has
    /// each of its coordinates.
    fn maximum_point(&self) -> GridPoint;

    /// Returns the number of points the region contains.
    ///
    /// Returns an error if the count does not fit in a [`usize`]; callers often use this
    /// number to allocate buffers, so it is never truncated.
    fn size(&self) -> Result<usize, RegionError>;

    /// Returns whether the region contains the given point.
    fn contains(&self, point: GridPoint) -> bool;

    /// Returns an iterator over every point the region contains, each exactly once.
    ///
    /// The order is deterministic: calling this twice on an unchanged region gives identical
    /// sequences, so that bulk operations can report progress and resume after a failure.
    /// Shapes which can do so should visit points with X varying slowest and Z fastest, like
    /// [`Cuboid::points()`].
    ///
    /// The provided implementation returns [`RegionError::Unimplemented`]; a shape that has
    /// no enumeration must not pretend to be empty.
    #[allow(clippy::missing_inline_in_public_items)]
    fn points(&self) -> Result<Points<'_>, RegionError> {
        Err(RegionError::Unimplemented {
            shape: core::any::type_name::<Self>(),
            operation: "points",
        })
    }

    /// Returns the smallest [`Cuboid`] which contains every point of this region.
    #[allow(clippy::missing_inline_in_public_items)]
    fn bounding_cuboid(&self) -> Cuboid {
        Cuboid::new(self.minimum_point(), self.maximum_point())
    }
}

impl<R: ?Sized + Region> Region for &R {
    #[inline]
    fn minimum_point(&self) -> GridPoint {
        (**self).minimum_point()
    }
    #[inline]
    fn maximum_point(&self) -> GridPoint {
        (**self).maximum_point()
    }
    #[inline]
    fn size(&self) -> Result<usize, RegionError> {
        (**self).size()
    }
    #[inline]
    fn contains(&self, point: GridPoint) -> bool {
        (**self).contains(point)
    }
    #[inline]
    fn points(&self) -> Result<Points<'_>, RegionError> {
        (**self).points()
    }
    #[inline]
    fn bounding_cuboid(&self) -> Cuboid {
        (**self).bounding_cuboid()
    }
}

/// Error from an operation on a [`Region`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, displaydoc::Display)]
#[non_exhaustive]
pub enum RegionError {
    /// A count or coordinate did not fit in its numeric type.
    #[displaydoc("{0}")]
    Overflow(GridOverflowError),

    /// The shape does not support the requested operation.
    #[displaydoc("region shape {shape} does not implement {operation}()")]
    Unimplemented {
        /// Name of the type of the region.
        shape: &'static str,
        /// Name of the operation which was requested.
        operation: &'static str,
    },
}

impl core::error::Error for RegionError {
    #[allow(clippy::missing_inline_in_public_items)]
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            RegionError::Overflow(e) => Some(e),
            RegionError::Unimplemented { .. } => None,
        }
    }
}

impl From<GridOverflowError> for RegionError {
    #[inline]
    fn from(value: GridOverflowError) -> Self {
        RegionError::Overflow(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString as _;
    use alloc::vec::Vec;
    use core::error::Error as _;
    use pretty_assertions::assert_eq;

    /// A region shape which only knows its bounds, standing in for shapes
    /// whose enumeration has not been written yet.
    #[derive(Debug)]
    struct BoundsOnly(Cuboid);

    impl Region for BoundsOnly {
        fn minimum_point(&self) -> GridPoint {
            self.0.minimum_point()
        }
        fn maximum_point(&self) -> GridPoint {
            self.0.maximum_point()
        }
        fn size(&self) -> Result<usize, RegionError> {
            Ok(self.0.size()?)
        }
        fn contains(&self, point: GridPoint) -> bool {
            self.0.contains(point)
        }
    }

    #[test]
    fn missing_enumeration_is_not_empty() {
        let region = BoundsOnly(Cuboid::new([0, 0, 0], [1, 1, 1]));
        let error = region.points().err().unwrap();
        assert!(matches!(
            error,
            RegionError::Unimplemented {
                operation: "points",
                ..
            }
        ));
        assert!(error.to_string().ends_with("does not implement points()"));
        assert!(error.to_string().contains("BoundsOnly"));
        assert!(error.source().is_none());
    }

    #[test]
    fn cuboid_through_trait_object() {
        let cuboid = Cuboid::new([3, 0, 1], [2, 1, 0]);
        let region: &dyn Region = &cuboid;

        assert_eq!(region.minimum_point(), GridPoint::new(2, 0, 0));
        assert_eq!(region.maximum_point(), GridPoint::new(3, 1, 1));
        assert_eq!(region.size(), Ok(8));
        assert!(region.contains(GridPoint::new(2, 1, 0)));
        assert!(!region.contains(GridPoint::new(4, 1, 0)));
        assert_eq!(
            region.points().unwrap().collect::<Vec<_>>(),
            cuboid.points().collect::<Vec<_>>()
        );
        assert_eq!(region.bounding_cuboid(), Cuboid::new([2, 0, 0], [3, 1, 1]));
    }

    #[test]
    fn points_is_restartable() {
        let cuboid = Cuboid::new([-1, 5, 2], [1, 3, 0]);
        let region: &dyn Region = &cuboid;
        let first: Vec<GridPoint> = region.points().unwrap().collect();
        let second: Vec<GridPoint> = region.points().unwrap().collect();
        assert_eq!(first.len(), 27);
        assert_eq!(first, second);
    }

    #[test]
    fn size_overflow_through_trait() {
        let region = Cuboid::new([i32::MIN; 3], [i32::MAX; 3]);
        let error = Region::size(&region).unwrap_err();
        assert!(matches!(error, RegionError::Overflow(_)));
        assert!(error.source().is_some());
        assert_eq!(
            error.to_string(),
            "volume of region with extents 4294967296 × 4294967296 × 4294967296 \
                does not fit in usize"
        );
    }

    #[test]
    fn bounding_cuboid_of_bounds_only_shape() {
        let region = BoundsOnly(Cuboid::new([5, 5, 5], [0, 9, 2]));
        assert_eq!(
            region.bounding_cuboid().points().count(),
            region.size().unwrap()
        );
    }
}
