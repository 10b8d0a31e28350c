//! Box-shaped selections ([`Cuboid`]) defined by two corners.

use core::fmt;
use core::ops::RangeInclusive;

use manyfmt::{Fmt, Refmt as _};
use rand::Rng;

use crate::math::{
    Axis, GridCoordinate, GridPoint, GridSizeCoord, GridVector, Lattice, checked_add,
    inclusive_extent, sort_two,
};
use crate::region::{CuboidIter, Points, Region, RegionError};
use crate::util::ConciseDebug;

/// An axis-aligned box of lattice points, defined by two opposite corners.
///
/// The two corners may be given in any order; neither has to be the minimum or maximum on
/// any axis, and they may be equal, in which case the cuboid contains exactly one point.
/// Both corners are *inclusive*: every point whose coordinates lie between the corners'
/// coordinates (including the corners themselves) is in the cuboid, so it is never empty.
///
/// The normalized bounds, [`Cuboid::minimum_point()`] and [`Cuboid::maximum_point()`], are
/// derived from the corners every time they are requested, never stored.
///
/// ```
/// use edit_region::math::GridPoint;
/// use edit_region::region::Cuboid;
///
/// let c = Cuboid::new([10, 0, -4], [8, 2, -4]);
/// assert_eq!(c.minimum_point(), GridPoint::new(8, 0, -4));
/// assert_eq!(c.maximum_point(), GridPoint::new(10, 2, -4));
/// assert_eq!((c.width(), c.height(), c.length()), (3, 3, 1));
/// assert_eq!(c.size(), Ok(9));
/// ```
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Cuboid {
    corner_a: GridPoint,
    corner_b: GridPoint,
}

/// Names one of the two defining corners of a [`Cuboid`].
#[expect(clippy::exhaustive_enums)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, exhaust::Exhaust)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Corner {
    /// The first corner, which wins ties when choosing which corner to move.
    A,
    /// The second corner.
    B,
}

impl Corner {
    /// Returns the corner that is not `self`.
    #[inline]
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Corner::A => Corner::B,
            Corner::B => Corner::A,
        }
    }
}

impl fmt::Display for Corner {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Corner::A => "A",
            Corner::B => "B",
        })
    }
}

/// Which side of the cuboid a resize moves, on one axis.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Bound {
    Lower,
    Upper,
}

impl Cuboid {
    /// Constructs a [`Cuboid`] spanning from one corner to the other, inclusive.
    ///
    /// The corners are stored as given; `a` becomes [`Corner::A`] and `b` becomes
    /// [`Corner::B`].
    #[inline]
    pub fn new(a: impl Into<GridPoint>, b: impl Into<GridPoint>) -> Self {
        Self {
            corner_a: a.into(),
            corner_b: b.into(),
        }
    }

    /// Constructs a [`Cuboid`] containing only the given point.
    ///
    /// Both corners are equal to `point`.
    #[inline]
    pub fn single(point: impl Into<GridPoint>) -> Self {
        let point = point.into();
        Self {
            corner_a: point,
            corner_b: point,
        }
    }

    /// Returns the first defining corner, exactly as it was last set.
    #[inline]
    pub fn corner_a(&self) -> GridPoint {
        self.corner_a
    }

    /// Returns the second defining corner, exactly as it was last set.
    #[inline]
    pub fn corner_b(&self) -> GridPoint {
        self.corner_b
    }

    /// Returns the specified defining corner.
    #[inline]
    pub fn corner(&self, which: Corner) -> GridPoint {
        match which {
            Corner::A => self.corner_a,
            Corner::B => self.corner_b,
        }
    }

    fn corner_mut(&mut self, which: Corner) -> &mut GridPoint {
        match which {
            Corner::A => &mut self.corner_a,
            Corner::B => &mut self.corner_b,
        }
    }

    /// Replaces [`Corner::A`], returning the previous value.
    ///
    /// The new corner may lie on any side of the other corner.
    #[inline]
    pub fn set_corner_a(&mut self, point: impl Into<GridPoint>) -> GridPoint {
        self.set_corner(Corner::A, point)
    }

    /// Replaces [`Corner::B`], returning the previous value.
    ///
    /// The new corner may lie on any side of the other corner.
    #[inline]
    pub fn set_corner_b(&mut self, point: impl Into<GridPoint>) -> GridPoint {
        self.set_corner(Corner::B, point)
    }

    /// Replaces the specified corner, returning the previous value.
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn set_corner(&mut self, which: Corner, point: impl Into<GridPoint>) -> GridPoint {
        core::mem::replace(self.corner_mut(which), point.into())
    }

    /// Returns the most negative point in the cuboid: the component-wise minimum of the
    /// two corners.
    #[inline]
    pub fn minimum_point(&self) -> GridPoint {
        self.corner_a.min(self.corner_b)
    }

    /// Returns the most positive point in the cuboid: the component-wise maximum of the
    /// two corners.
    ///
    /// Unlike the upper bound of a half-open range, this point is inside the cuboid.
    #[inline]
    pub fn maximum_point(&self) -> GridPoint {
        self.corner_a.max(self.corner_b)
    }

    /// Number of points along the X axis.
    #[inline]
    pub fn width(&self) -> GridSizeCoord {
        self.extent(Axis::X)
    }

    /// Number of points along the Y axis.
    #[inline]
    pub fn height(&self) -> GridSizeCoord {
        self.extent(Axis::Y)
    }

    /// Number of points along the Z axis.
    #[inline]
    pub fn length(&self) -> GridSizeCoord {
        self.extent(Axis::Z)
    }

    /// Number of points along the given axis; always at least 1.
    ///
    /// This cannot overflow, since [`GridSizeCoord`] is wider than [`GridCoordinate`].
    #[inline]
    pub fn extent(&self, axis: Axis) -> GridSizeCoord {
        inclusive_extent(self.corner_a[axis], self.corner_b[axis])
    }

    /// The range of X coordinates of points within the cuboid.
    #[inline]
    pub fn x_range(&self) -> RangeInclusive<GridCoordinate> {
        self.axis_range(Axis::X)
    }

    /// The range of Y coordinates of points within the cuboid.
    #[inline]
    pub fn y_range(&self) -> RangeInclusive<GridCoordinate> {
        self.axis_range(Axis::Y)
    }

    /// The range of Z coordinates of points within the cuboid.
    #[inline]
    pub fn z_range(&self) -> RangeInclusive<GridCoordinate> {
        self.axis_range(Axis::Z)
    }

    /// The range of coordinates of points within the cuboid along the given axis.
    /// It is never empty.
    #[inline]
    pub fn axis_range(&self, axis: Axis) -> RangeInclusive<GridCoordinate> {
        let mut low = self.corner_a[axis];
        let mut high = self.corner_b[axis];
        sort_two(&mut low, &mut high);
        low..=high
    }

    /// Computes the number of points in the cuboid, i.e. the product of all extents.
    ///
    /// Returns [`Err`] if the count does not fit in a `usize`. It is never zero.
    ///
    /// ```
    /// use edit_region::region::Cuboid;
    ///
    /// assert_eq!(Cuboid::single([7, 7, 7]).size(), Ok(1));
    /// assert_eq!(Cuboid::new([-10, 3, 7], [89, 202, 306]).size(), Ok(6_000_000));
    /// assert!(Cuboid::new([i32::MIN; 3], [i32::MAX; 3]).size().is_err());
    /// ```
    #[inline]
    pub fn size(&self) -> Result<usize, GridOverflowError> {
        let extents = [self.width(), self.height(), self.length()];
        extents[0]
            .checked_mul(extents[1])
            .and_then(|area| area.checked_mul(extents[2]))
            .and_then(|volume| usize::try_from(volume).ok())
            .ok_or(GridOverflowError(OverflowKind::Volume { extents }))
    }

    /// Returns whether the cuboid contains the given point.
    ///
    /// ```
    /// use edit_region::region::Cuboid;
    ///
    /// let c = Cuboid::new([4, 4, 4], [9, 9, 9]);
    /// assert!(!c.contains([3, 5, 5].into()));
    /// assert!(c.contains([4, 5, 5].into()));
    /// assert!(c.contains([9, 5, 5].into()));
    /// assert!(!c.contains([10, 5, 5].into()));
    /// ```
    #[inline]
    pub fn contains(&self, point: GridPoint) -> bool {
        Axis::ALL
            .into_iter()
            .all(|axis| self.axis_range(axis).contains(&point[axis]))
    }

    /// Returns which corner currently holds the lowest coordinate on `axis`.
    /// If the corners are equal on that axis, this is [`Corner::A`].
    #[inline]
    pub fn corner_holding_minimum(&self, axis: Axis) -> Corner {
        self.corner_holding(axis, Bound::Lower)
    }

    /// Returns which corner currently holds the highest coordinate on `axis`.
    /// If the corners are equal on that axis, this is [`Corner::A`].
    #[inline]
    pub fn corner_holding_maximum(&self, axis: Axis) -> Corner {
        self.corner_holding(axis, Bound::Upper)
    }

    fn corner_holding(&self, axis: Axis, bound: Bound) -> Corner {
        let a = self.corner_a[axis];
        let b = self.corner_b[axis];
        let a_holds = match bound {
            Bound::Lower => a <= b,
            Bound::Upper => a >= b,
        };
        if a_holds { Corner::A } else { Corner::B }
    }

    /// Grows the cuboid by moving one face on each axis outward.
    ///
    /// For each axis, the sign of that component of `delta` picks the face to move:
    /// a positive value moves the upper face in the positive direction, and a zero or
    /// negative value moves the lower face in the negative direction. The amount moved is
    /// the absolute value. The corner that is moved is whichever one currently holds that
    /// face, preferring [`Corner::A`] if they are equal on that axis.
    ///
    /// Returns [`Err`] and leaves `self` unchanged if a coordinate would overflow.
    ///
    /// ```
    /// use edit_region::region::Cuboid;
    ///
    /// let mut c = Cuboid::new([0, 0, 0], [9, 9, 9]);
    /// c.expand([2, -3, 0])?;
    /// assert_eq!(c, Cuboid::new([0, -3, 0], [11, 9, 9]));
    /// # Ok::<(), edit_region::region::GridOverflowError>(())
    /// ```
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn expand(&mut self, delta: impl Into<GridVector>) -> Result<(), GridOverflowError> {
        self.move_faces("expand", delta.into(), |d| {
            if d > 0 { Bound::Upper } else { Bound::Lower }
        })
    }

    /// Shrinks the cuboid by moving one face on each axis inward.
    ///
    /// For each axis, the sign of that component of `delta` picks the face to move:
    /// a negative value moves the upper face in the negative direction, and a zero or
    /// positive value moves the lower face in the positive direction. The amount moved is
    /// the absolute value. The corner that is moved is whichever one currently holds that
    /// face, preferring [`Corner::A`] if they are equal on that axis.
    ///
    /// There is no check that the face stays on its own side of the cuboid. If it is moved
    /// past the opposite face, the cuboid ends up spanning the two faces' new positions,
    /// with the roles of minimum and maximum swapped on that axis.
    ///
    /// Returns [`Err`] and leaves `self` unchanged if a coordinate would overflow.
    ///
    /// ```
    /// use edit_region::math::GridPoint;
    /// use edit_region::region::Cuboid;
    ///
    /// let mut c = Cuboid::new([2, 2, 2], [5, 5, 5]);
    /// c.contract([1, 0, -2])?;
    /// assert_eq!(c.minimum_point(), GridPoint::new(3, 2, 2));
    /// assert_eq!(c.maximum_point(), GridPoint::new(5, 5, 3));
    /// # Ok::<(), edit_region::region::GridOverflowError>(())
    /// ```
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn contract(&mut self, delta: impl Into<GridVector>) -> Result<(), GridOverflowError> {
        self.move_faces("contract", delta.into(), |d| {
            if d < 0 { Bound::Upper } else { Bound::Lower }
        })
    }

    /// Common part of [`Cuboid::expand()`] and [`Cuboid::contract()`]: on each axis, add
    /// that component of `delta` to the corner holding the face `choose_face` picks.
    fn move_faces(
        &mut self,
        operation: &'static str,
        delta: GridVector,
        choose_face: impl Fn(GridCoordinate) -> Bound,
    ) -> Result<(), GridOverflowError> {
        let mut updated = *self;
        for axis in Axis::ALL {
            let amount = delta[axis];
            // The choice depends only on this axis, which no other iteration modifies.
            let corner = self.corner_holding(axis, choose_face(amount));
            let coordinate = self.corner(corner)[axis];
            let Some(moved) = coordinate.checked_add(amount) else {
                let error = GridOverflowError(OverflowKind::Corner {
                    operation,
                    corner,
                    axis,
                    coordinate,
                    delta: amount,
                });
                log::debug!("rejected {operation} of {self}: {error}");
                return Err(error);
            };
            updated.corner_mut(corner)[axis] = moved;
        }

        log::trace!(
            "{operation} {self} by {delta} gives {updated}",
            delta = delta.refmt(&ConciseDebug)
        );
        *self = updated;
        Ok(())
    }

    /// Moves both corners by `delta`, keeping the size of the cuboid unchanged.
    ///
    /// Returns [`Err`] and leaves `self` unchanged if a coordinate would overflow.
    ///
    /// ```
    /// use edit_region::region::Cuboid;
    ///
    /// let mut c = Cuboid::new([0, 0, 0], [1, 2, 3]);
    /// c.shift([10, 0, -10])?;
    /// assert_eq!(c, Cuboid::new([10, 0, -10], [11, 2, -7]));
    /// # Ok::<(), edit_region::region::GridOverflowError>(())
    /// ```
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn shift(&mut self, delta: impl Into<GridVector>) -> Result<(), GridOverflowError> {
        let delta = delta.into();
        let mut updated = *self;
        for corner in [Corner::A, Corner::B] {
            let original = self.corner(corner);
            *updated.corner_mut(corner) = checked_add(original, delta).ok_or_else(|| {
                // Find the axis responsible for the error message.
                let axis = Axis::ALL
                    .into_iter()
                    .find(|&axis| original[axis].checked_add(delta[axis]).is_none())
                    .unwrap_or(Axis::X);
                GridOverflowError(OverflowKind::Corner {
                    operation: "shift",
                    corner,
                    axis,
                    coordinate: original[axis],
                    delta: delta[axis],
                })
            })?;
        }
        log::trace!(
            "shift {self} by {delta} gives {updated}",
            delta = delta.refmt(&ConciseDebug)
        );
        *self = updated;
        Ok(())
    }

    /// Iterate over all points that the cuboid contains.
    ///
    /// Points are produced in ascending order with X varying slowest and Z fastest.
    /// The iterator owns a copy of the bounds, so it is unaffected by later changes to
    /// `self`, and calling this again produces the same sequence.
    ///
    /// ```
    /// use edit_region::math::GridPoint;
    /// use edit_region::region::Cuboid;
    ///
    /// let c = Cuboid::new([10, 21, 30], [10, 20, 32]);
    /// assert_eq!(
    ///     c.points().collect::<Vec<GridPoint>>(),
    ///     &[
    ///         GridPoint::new(10, 20, 30),
    ///         GridPoint::new(10, 20, 31),
    ///         GridPoint::new(10, 20, 32),
    ///         GridPoint::new(10, 21, 30),
    ///         GridPoint::new(10, 21, 31),
    ///         GridPoint::new(10, 21, 32),
    ///     ])
    /// ```
    #[inline]
    pub fn points(&self) -> CuboidIter {
        CuboidIter::new(*self)
    }

    /// Returns a random point contained in the cuboid.
    ///
    /// ```
    /// use edit_region::region::Cuboid;
    /// use rand::SeedableRng;
    ///
    /// let mut rng = rand_xoshiro::Xoshiro256Plus::seed_from_u64(0);
    ///
    /// let c = Cuboid::new([4, 4, 4], [9, 9, 9]);
    /// for _ in 0..50 {
    ///     assert!(c.contains(c.random_point(&mut rng)));
    /// }
    /// ```
    #[allow(clippy::missing_inline_in_public_items)]
    pub fn random_point(&self, rng: &mut impl Rng) -> GridPoint {
        GridPoint::new(
            rng.random_range(self.x_range()),
            rng.random_range(self.y_range()),
            rng.random_range(self.z_range()),
        )
    }
}

impl Region for Cuboid {
    #[inline]
    fn minimum_point(&self) -> GridPoint {
        Cuboid::minimum_point(self)
    }

    #[inline]
    fn maximum_point(&self) -> GridPoint {
        Cuboid::maximum_point(self)
    }

    #[inline]
    fn size(&self) -> Result<usize, RegionError> {
        Ok(Cuboid::size(self)?)
    }

    #[inline]
    fn contains(&self, point: GridPoint) -> bool {
        Cuboid::contains(self, point)
    }

    #[inline]
    fn points(&self) -> Result<Points<'_>, RegionError> {
        Ok(alloc::boxed::Box::new(Cuboid::points(self)))
    }

    #[inline]
    fn bounding_cuboid(&self) -> Cuboid {
        Cuboid::new(self.minimum_point(), self.maximum_point())
    }
}

impl Fmt<ConciseDebug> for Cuboid {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>, fopt: &ConciseDebug) -> fmt::Result {
        write!(
            f,
            "{}..={}",
            self.minimum_point().refmt(fopt),
            self.maximum_point().refmt(fopt)
        )
    }
}

/// Writes the normalized bounds, as `(x, y, z)..=(x, y, z)`.
impl fmt::Display for Cuboid {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fmt::fmt(self, f, &ConciseDebug)
    }
}

/// Writes the two defining corners as they are stored, which may differ from the
/// normalized bounds written by [`fmt::Display`].
impl fmt::Debug for Cuboid {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { corner_a, corner_b } = self;
        f.debug_struct("Cuboid")
            .field("a", &corner_a.refmt(&ConciseDebug))
            .field("b", &corner_b.refmt(&ConciseDebug))
            .finish()
    }
}

/// Converts to a [`euclid::Box3D`] with half-open bounds: `min` is the minimum point and
/// `max` is one past the maximum point on every axis, so that the box contains the same
/// points and has the same volume.
///
/// Returns [`Err`] if the maximum point has a coordinate equal to [`GridCoordinate::MAX`],
/// since the exclusive bound is then not representable.
///
/// ```
/// use edit_region::euclid::Box3D;
/// use edit_region::math::{GridPoint, Lattice};
/// use edit_region::region::Cuboid;
///
/// let b = Box3D::<i32, Lattice>::try_from(Cuboid::single([3, 3, 3]))?;
/// assert_eq!(b.max, GridPoint::new(4, 4, 4));
/// assert_eq!(b.volume(), 1);
/// # Ok::<(), edit_region::region::GridOverflowError>(())
/// ```
impl TryFrom<Cuboid> for euclid::Box3D<GridCoordinate, Lattice> {
    type Error = GridOverflowError;

    #[inline]
    fn try_from(cuboid: Cuboid) -> Result<Self, Self::Error> {
        let max = cuboid.maximum_point();
        let mut exclusive_max = max;
        for axis in Axis::ALL {
            exclusive_max[axis] = max[axis]
                .checked_add(1)
                .ok_or(GridOverflowError(OverflowKind::HalfOpen { axis }))?;
        }
        Ok(Self::new(cuboid.minimum_point(), exclusive_max))
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Cuboid {
    #[allow(clippy::missing_inline_in_public_items)]
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let a: [GridCoordinate; 3] = u.arbitrary()?;
        let b: [GridCoordinate; 3] = u.arbitrary()?;
        Ok(Cuboid::new(a, b))
    }

    #[allow(clippy::missing_inline_in_public_items)]
    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        arbitrary::size_hint::and(
            <[GridCoordinate; 3] as arbitrary::Arbitrary<'a>>::size_hint(depth),
            <[GridCoordinate; 3] as arbitrary::Arbitrary<'a>>::size_hint(depth),
        )
    }
}

/// Error when an operation on a [`Cuboid`] would go outside the range of
/// [`GridCoordinate`] or of [`usize`].
#[derive(Clone, Copy, Debug, displaydoc::Display, Eq, PartialEq)]
#[displaydoc("{0}")]
pub struct GridOverflowError(OverflowKind);

/// Error details for [`GridOverflowError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum OverflowKind {
    Volume {
        extents: [GridSizeCoord; 3],
    },
    Corner {
        operation: &'static str,
        corner: Corner,
        axis: Axis,
        coordinate: GridCoordinate,
        delta: GridCoordinate,
    },
    HalfOpen {
        axis: Axis,
    },
}

impl fmt::Display for OverflowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverflowKind::Volume {
                extents: [width, height, length],
            } => write!(
                f,
                "volume of region with extents {width} × {height} × {length} \
                    does not fit in usize"
            ),
            OverflowKind::Corner {
                operation,
                corner,
                axis,
                coordinate,
                delta,
            } => write!(
                f,
                "{operation} overflowed: corner {corner} {axis:x} coordinate \
                    {coordinate} plus {delta} is out of range"
            ),
            OverflowKind::HalfOpen { axis } => write!(
                f,
                "region reaching {axis:x} = {max} has no exclusive upper bound",
                max = GridCoordinate::MAX
            ),
        }
    }
}

impl core::error::Error for GridOverflowError {}
