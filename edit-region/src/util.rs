//! Tools that we could imagine being in the Rust standard library, but aren't.

use core::fmt;

use manyfmt::Fmt;

use crate::math::Lattice;

/// Format type for [`manyfmt::Fmt`] which is similar to [`fmt::Debug`], but uses an
/// alternate concise format.
///
/// Grid points are written as `(x, y, z)` and grid vectors as `<x, y, z>`, on one line
/// regardless of the pretty-printing option. This is the format used in error messages and
/// log output.
///
/// ```
/// use edit_region::math::GridPoint;
/// use edit_region::util::ConciseDebug;
/// use manyfmt::Refmt as _;
///
/// let p = GridPoint::new(1, -2, 3);
/// assert_eq!(format!("{:#}", p.refmt(&ConciseDebug)), "(1, -2, 3)");
/// assert_eq!(format!("{}", p.to_vector().refmt(&ConciseDebug)), "<1, -2, 3>");
/// ```
#[expect(clippy::exhaustive_structs)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ConciseDebug;

impl<T: fmt::Display> Fmt<ConciseDebug> for euclid::Point3D<T, Lattice> {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>, _: &ConciseDebug) -> fmt::Result {
        write!(fmt, "({}, {}, {})", self.x, self.y, self.z)
    }
}
impl<T: fmt::Display> Fmt<ConciseDebug> for euclid::Vector3D<T, Lattice> {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>, _: &ConciseDebug) -> fmt::Result {
        write!(fmt, "<{}, {}, {}>", self.x, self.y, self.z)
    }
}

#[doc(hidden)] // for use in internal tests only
#[allow(clippy::missing_inline_in_public_items)]
pub fn assert_send_sync<T: Send + Sync>() {
    // We don't need to do anything in this function; the call to it having been successfully
    // compiled is the assertion.
}
