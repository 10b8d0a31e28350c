use core::fmt;

/// Enumeration of the axes of three-dimensional space.
///
/// Can be used to infallibly index 3-component arrays, points, and vectors.
#[expect(clippy::exhaustive_enums)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, exhaust::Exhaust)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    /// All three axes in the standard order, [X, Y, Z].
    ///
    /// This is also the nesting order of region enumeration: X varies slowest and Z fastest.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Convert the axis to a number for indexing 3-element arrays.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Format the axis as one of the strings "x", "y", or "z" (lowercase).
impl fmt::LowerHex for Axis {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        })
    }
}
/// Format the axis as one of the strings "X", "Y", or "Z" (uppercase).
impl fmt::UpperHex for Axis {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        })
    }
}

impl From<Axis> for usize {
    #[inline]
    fn from(value: Axis) -> Self {
        value as usize
    }
}

mod impl_index_axis {
    use super::Axis;
    use core::ops;

    impl<T> ops::Index<Axis> for [T; 3] {
        type Output = T;

        #[inline]
        fn index(&self, index: Axis) -> &Self::Output {
            &self[index as usize]
        }
    }
    impl<T> ops::IndexMut<Axis> for [T; 3] {
        #[inline]
        fn index_mut(&mut self, index: Axis) -> &mut Self::Output {
            &mut self[index as usize]
        }
    }

    macro_rules! impl_xyz {
        ($($type:tt)*) => {
            impl<T, U> ops::Index<Axis> for $($type)*<T, U> {
                type Output = T;

                #[inline]
                fn index(&self, index: Axis) -> &Self::Output {
                    match index {
                        Axis::X => &self.x,
                        Axis::Y => &self.y,
                        Axis::Z => &self.z,
                    }
                }
            }
            impl<T, U> ops::IndexMut<Axis> for $($type)*<T, U> {
                #[inline]
                fn index_mut(&mut self, index: Axis) -> &mut Self::Output {
                    match index {
                        Axis::X => &mut self.x,
                        Axis::Y => &mut self.y,
                        Axis::Z => &mut self.z,
                    }
                }
            }
        };
    }
    impl_xyz!(euclid::Vector3D);
    impl_xyz!(euclid::Point3D);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{GridPoint, GridVector};
    use exhaust::Exhaust as _;
    use pretty_assertions::assert_eq;

    #[test]
    fn axis_conversion() {
        for axis in Axis::ALL {
            assert_eq!(usize::from(axis), axis.index());
        }
    }

    #[test]
    fn all_is_exhaustive_and_ordered() {
        assert_eq!(Axis::exhaust().collect::<alloc::vec::Vec<_>>(), Axis::ALL);
    }

    #[test]
    fn axis_fmt() {
        use Axis::*;
        assert_eq!(
            format!("{X:x} {Y:x} {Z:x} {X:X} {Y:X} {Z:X}"),
            "x y z X Y Z"
        );
    }

    #[test]
    fn index_point_and_vector() {
        let mut p = GridPoint::new(1, 2, 3);
        let v = GridVector::new(4, 5, 6);
        assert_eq!([p[Axis::X], p[Axis::Y], p[Axis::Z]], [1, 2, 3]);
        assert_eq!([v[Axis::X], v[Axis::Y], v[Axis::Z]], [4, 5, 6]);
        p[Axis::Y] = 20;
        assert_eq!(p, GridPoint::new(1, 20, 3));
        assert_eq!(["w", "h", "l"][Axis::Z], "l");
    }
}
