//! Coordinates, vectors and axes of the block grid.

mod axis;
pub use axis::*;
mod coord;
pub use coord::*;

// We make an assumption in several places that `usize` is at least 32 bits.
// It's likely that compilation would not succeed anyway, but let's make it explicit.
#[cfg(target_pointer_width = "16")]
compile_error!("edit-region does not support platforms with less than 32-bit `usize`");

/// Sort exactly two items; swap them if `a > b`.
#[inline]
#[doc(hidden)]
pub fn sort_two<T: PartialOrd>(a: &mut T, b: &mut T) {
    if *a > *b {
        core::mem::swap(a, b);
    }
}
