use core::cmp::Ordering;
use core::iter::FusedIterator;

use crate::math::{GridPoint, inclusive_extent};
use crate::region::Cuboid;

/// Iterator produced by [`Cuboid::points()`].
///
/// Produces points in ascending order with X varying slowest and Z fastest.
#[derive(Clone, Debug)]
pub struct CuboidIter {
    /// Inclusive lower bounds.
    minimum: GridPoint,
    /// Inclusive upper bounds.
    maximum: GridPoint,
    /// Next point to produce, or [`None`] if iteration has finished.
    next: Option<GridPoint>,
}

impl CuboidIter {
    #[inline]
    pub(in crate::region) fn new(bounds: Cuboid) -> Self {
        let minimum = bounds.minimum_point();
        Self {
            minimum,
            maximum: bounds.maximum_point(),
            // A cuboid is never empty, so there is always a first point.
            next: Some(minimum),
        }
    }

    /// Returns the bounds which this iterator iterates over.
    /// This may be larger than the set of points not yet produced, but it will not be smaller.
    #[inline]
    pub fn bounds(&self) -> Cuboid {
        Cuboid::new(self.minimum, self.maximum)
    }

    /// Returns whether the iterator will produce the given point.
    #[inline]
    pub fn contains_point(&self, point: GridPoint) -> bool {
        let Some(next) = self.next else {
            return false;
        };
        if !self.bounds().contains(point) {
            return false;
        }
        match point.x.cmp(&next.x) {
            Ordering::Greater => true, // in a plane not yet emitted
            Ordering::Less => false,   // in a plane already emitted
            Ordering::Equal => {
                match point.y.cmp(&next.y) {
                    Ordering::Greater => true, // in a row not yet emitted
                    Ordering::Less => false,   // in a row already emitted
                    Ordering::Equal => {
                        // We have now reduced to the single-dimensional case.
                        point.z >= next.z
                    }
                }
            }
        }
    }

    /// Number of points not yet produced. Cannot overflow, unlike a `usize`.
    fn remaining(&self) -> u128 {
        let Some(next) = self.next else {
            return 0;
        };
        let extent = |low, high| u128::from(inclusive_extent(low, high));
        let planes_after = extent(next.x, self.maximum.x) - 1;
        let rows_after = extent(next.y, self.maximum.y) - 1;
        let points_in_row = extent(next.z, self.maximum.z);
        let row_length = extent(self.minimum.z, self.maximum.z);
        let plane_size = extent(self.minimum.y, self.maximum.y) * row_length;

        planes_after * plane_size + rows_after * row_length + points_in_row
    }
}

impl Iterator for CuboidIter {
    type Item = GridPoint;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let result = self.next?;

        // Advance like an odometer, Z fastest. Comparing against the maximum before
        // incrementing keeps this correct when the maximum is `GridCoordinate::MAX`.
        let mut following = result;
        if following.z < self.maximum.z {
            following.z += 1;
            self.next = Some(following);
        } else if following.y < self.maximum.y {
            following.z = self.minimum.z;
            following.y += 1;
            self.next = Some(following);
        } else if following.x < self.maximum.x {
            following.z = self.minimum.z;
            following.y = self.minimum.y;
            following.x += 1;
            self.next = Some(following);
        } else {
            self.next = None;
        }

        Some(result)
    }

    #[allow(clippy::missing_inline_in_public_items, reason = "unclear benefit")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }

    // Override fold() to achieve greater performance via simpler iteration.
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    fn fold<B, F>(mut self, init: B, mut f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        let mut state = init;

        // First, if the iterator has already been partly advanced (this is atypical),
        // advance it until the remaining points form a box.
        #[cold]
        #[inline(never)]
        fn cold_next(i: &mut CuboidIter) -> Option<GridPoint> {
            i.next()
        }
        loop {
            let Some(next) = self.next else {
                return state;
            };
            if next.y == self.minimum.y && next.z == self.minimum.z {
                break;
            }
            let Some(point) = cold_next(&mut self) else {
                return state;
            };
            state = f(state, point);
        }
        let Some(start) = self.next else {
            return state;
        };

        // Now, we can perform iteration over the numeric ranges independently,
        // with no additional checks. Inclusive ranges are correct at the numeric limits.
        for x in start.x..=self.maximum.x {
            for y in self.minimum.y..=self.maximum.y {
                for z in self.minimum.z..=self.maximum.z {
                    state = f(state, GridPoint::new(x, y, z));
                }
            }
        }

        state
    }
}

impl FusedIterator for CuboidIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use itertools::Itertools as _;
    use pretty_assertions::assert_eq;

    #[test]
    fn unit_box_order() {
        let c = Cuboid::new([0, 0, 0], [1, 1, 1]);
        assert_eq!(
            c.points().collect::<Vec<GridPoint>>(),
            [
                GridPoint::new(0, 0, 0),
                GridPoint::new(0, 0, 1),
                GridPoint::new(0, 1, 0),
                GridPoint::new(0, 1, 1),
                GridPoint::new(1, 0, 0),
                GridPoint::new(1, 0, 1),
                GridPoint::new(1, 1, 0),
                GridPoint::new(1, 1, 1),
            ]
        );
    }

    #[test]
    fn order_independent_of_corner_order() {
        let a = GridPoint::new(3, -1, 2);
        let b = GridPoint::new(0, 1, 4);
        let forward: Vec<GridPoint> = Cuboid::new(a, b).points().collect();
        let backward: Vec<GridPoint> = Cuboid::new(b, a).points().collect();
        assert_eq!(forward, backward);
        assert_eq!(forward.first(), Some(&GridPoint::new(0, -1, 2)));
        assert_eq!(forward.last(), Some(&GridPoint::new(3, 1, 4)));
    }

    #[test]
    fn strictly_ascending_and_unique() {
        let c = Cuboid::new([2, 0, -3], [-1, 2, 1]);
        let points: Vec<GridPoint> = c.points().collect();
        assert_eq!(points.len(), c.size().unwrap());
        assert!(
            points
                .iter()
                .tuple_windows()
                .all(|(p, q)| (p.x, p.y, p.z) < (q.x, q.y, q.z))
        );
        assert!(points.iter().all(|&p| c.contains(p)));
    }

    #[test]
    fn size_equals_count() {
        for c in [
            Cuboid::single([0, 0, 0]),
            Cuboid::new([0, 0, 0], [0, 0, 9]),
            Cuboid::new([0, 0, 0], [0, 9, 0]),
            Cuboid::new([0, 0, 0], [9, 0, 0]),
            Cuboid::new([5, -5, 5], [-5, 5, -5]),
            Cuboid::new([100, 3, 7], [89, 20, 30]),
        ] {
            assert_eq!(c.points().count(), c.size().unwrap(), "{c:?}");
        }
    }

    #[test]
    fn size_hint() {
        let c = Cuboid::new([0, 0, 0], [11, 33, 55]);
        let expected_size = c.size().unwrap();
        let mut iter = c.points();

        // Exact at start
        assert_eq!(iter.size_hint(), (expected_size, Some(expected_size)));

        for remaining in (1..=expected_size).rev() {
            assert_eq!(iter.size_hint(), (remaining, Some(remaining)));
            assert!(iter.next().is_some());
        }

        // Exact at end
        assert_eq!(iter.size_hint(), (0, Some(0)));
        assert!(iter.next().is_none());
        assert_eq!(iter.size_hint(), (0, Some(0)));
    }

    #[test]
    fn size_hint_too_large() {
        let iter = Cuboid::new([i32::MIN; 3], [i32::MAX; 3]).points();
        assert_eq!(iter.size_hint(), (usize::MAX, None));
    }

    #[test]
    fn correct_at_min() {
        let c = Cuboid::new(GridPoint::splat(i32::MIN), GridPoint::splat(i32::MIN + 1));
        assert_eq!(c.size(), Ok(8));

        assert_eq!(
            c.points().collect::<Vec<GridPoint>>(),
            [
                GridPoint::new(i32::MIN, i32::MIN, i32::MIN),
                GridPoint::new(i32::MIN, i32::MIN, i32::MIN + 1),
                GridPoint::new(i32::MIN, i32::MIN + 1, i32::MIN),
                GridPoint::new(i32::MIN, i32::MIN + 1, i32::MIN + 1),
                GridPoint::new(i32::MIN + 1, i32::MIN, i32::MIN),
                GridPoint::new(i32::MIN + 1, i32::MIN, i32::MIN + 1),
                GridPoint::new(i32::MIN + 1, i32::MIN + 1, i32::MIN),
                GridPoint::new(i32::MIN + 1, i32::MIN + 1, i32::MIN + 1),
            ]
        );
    }

    #[test]
    fn correct_at_max() {
        let c = Cuboid::new(GridPoint::splat(i32::MAX - 1), GridPoint::splat(i32::MAX));
        assert_eq!(c.size(), Ok(8));

        let expected = [
            GridPoint::new(i32::MAX - 1, i32::MAX - 1, i32::MAX - 1),
            GridPoint::new(i32::MAX - 1, i32::MAX - 1, i32::MAX),
            GridPoint::new(i32::MAX - 1, i32::MAX, i32::MAX - 1),
            GridPoint::new(i32::MAX - 1, i32::MAX, i32::MAX),
            GridPoint::new(i32::MAX, i32::MAX - 1, i32::MAX - 1),
            GridPoint::new(i32::MAX, i32::MAX - 1, i32::MAX),
            GridPoint::new(i32::MAX, i32::MAX, i32::MAX - 1),
            GridPoint::new(i32::MAX, i32::MAX, i32::MAX),
        ];
        assert_eq!(c.points().collect::<Vec<GridPoint>>(), expected);

        // fold() takes a different path through the same bounds.
        let folded = c.points().fold(Vec::new(), |mut v, p| {
            v.push(p);
            v
        });
        assert_eq!(folded, expected);
    }

    #[test]
    fn next_and_fold_are_equivalent() {
        let c = Cuboid::new([0, -1, 7], [2, 1, 9]);
        println!("Cuboid = {c:?}");

        for start_point in 0..=c.size().unwrap() {
            println!("\nSkipping {start_point}:");
            let mut iter_to_next = c.points().skip(start_point);
            let iter_to_fold = c.points().skip(start_point);
            iter_to_fold.fold((), |(), fold_point| {
                let next_point = iter_to_next.next();
                println!("fold={fold_point:?} next={next_point:?}");
                assert_eq!(fold_point, next_point.unwrap());
            });
            assert_eq!(iter_to_next.next(), None, "finish");
        }
    }

    #[test]
    fn contains_point() {
        let c = Cuboid::new([0, 0, 0], [2, 2, 2]);
        let expected_sequence: Vec<GridPoint> = c.points().collect();

        let mut iter = c.points();
        for current in 0..expected_sequence.len() {
            for &point in &expected_sequence[..current] {
                assert!(
                    !iter.contains_point(point),
                    "{point:?} should be absent at {current}"
                );
            }
            for &point in &expected_sequence[current..] {
                assert!(
                    iter.contains_point(point),
                    "{point:?} should be present at {current}"
                );
            }

            let item = iter.next();

            assert_eq!(item, Some(expected_sequence[current])); // sanity check, not what we're testing
        }
        assert!(!iter.contains_point(GridPoint::new(2, 2, 2)));
    }

    #[test]
    fn fused() {
        let mut iter = Cuboid::single([1, 1, 1]).points();
        assert_eq!(iter.next(), Some(GridPoint::new(1, 1, 1)));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn unaffected_by_later_changes() {
        let mut c = Cuboid::new([0, 0, 0], [1, 0, 0]);
        let iter = c.points();
        c.expand([5, 0, 0]).unwrap();
        assert_eq!(iter.count(), 2);
        assert_eq!(c.points().count(), 7);
    }
}
