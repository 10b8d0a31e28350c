//! Numeric types used for coordinates and related quantities.

use euclid::{Point3D, Vector3D};

/// Unit marker for [`euclid`] types whose coordinates are counted in blocks of the grid.
///
/// This type has no values; it exists only to keep grid positions from being mixed up with
/// quantities measured in other units.
#[allow(clippy::exhaustive_enums)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Lattice {}

/// Coordinates that are locked to the block grid.
pub type GridCoordinate = i32;

/// Numeric type of the extent of a region along one axis.
///
/// This is wider than [`GridCoordinate`] because the inclusive extent of the entire
/// coordinate range, `GridCoordinate::MIN..=GridCoordinate::MAX`, is 2<sup>32</sup>.
pub type GridSizeCoord = u64;

/// Positions of blocks in the grid.
pub type GridPoint = Point3D<GridCoordinate, Lattice>;

/// Displacements between blocks in the grid.
pub type GridVector = Vector3D<GridCoordinate, Lattice>;

/// Adds `delta` to `point`, returning [`None`] if any component overflows.
///
/// The `+` operator on [`GridPoint`] panics or wraps on overflow depending on the build
/// profile; this is the form to use when the inputs come from a user.
///
/// ```
/// use edit_region::math::{GridPoint, GridVector, checked_add};
///
/// assert_eq!(
///     checked_add(GridPoint::new(1, 2, 3), GridVector::new(10, -20, 0)),
///     Some(GridPoint::new(11, -18, 3)),
/// );
/// assert_eq!(checked_add(GridPoint::new(i32::MAX, 0, 0), GridVector::new(1, 0, 0)), None);
/// ```
#[inline]
pub fn checked_add(point: GridPoint, delta: GridVector) -> Option<GridPoint> {
    Some(GridPoint::new(
        point.x.checked_add(delta.x)?,
        point.y.checked_add(delta.y)?,
        point.z.checked_add(delta.z)?,
    ))
}

/// Returns the number of lattice points from `low` to `high` inclusive.
///
/// The arguments may be given in either order. The result is never zero and cannot overflow.
#[inline]
pub fn inclusive_extent(low: GridCoordinate, high: GridCoordinate) -> GridSizeCoord {
    (i64::from(high) - i64::from(low)).unsigned_abs() + 1
}
