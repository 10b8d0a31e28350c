//! Block selections for world-editing tools.
//!
//! A selection is a [`Region`](region::Region): some set of lattice points (unit blocks) in
//! a three-dimensional integer grid. Editing operations such as fill, replace, copy and paste
//! ask a region for its bounds and its size, and then visit every point it contains.
//!
//! The only shape provided here is the box-shaped [`Cuboid`](region::Cuboid), defined by two
//! corners given in any order.
//!
//! ```
//! use edit_region::math::GridPoint;
//! use edit_region::region::Cuboid;
//!
//! let mut selection = Cuboid::new([0, 64, 0], [-3, 60, 2]);
//! assert_eq!(selection.minimum_point(), GridPoint::new(-3, 60, 0));
//! assert_eq!(selection.size(), Ok(4 * 5 * 3));
//!
//! // Grow upward by two blocks.
//! selection.expand([0, 2, 0])?;
//! assert_eq!(selection.maximum_point(), GridPoint::new(0, 66, 2));
//! # Ok::<(), edit_region::region::GridOverflowError>(())
//! ```

#![no_std]
// Crate-specific lint settings. (General settings can be found in the workspace manifest.)
#![cfg_attr(
    not(any(test, feature = "arbitrary")),
    warn(clippy::std_instead_of_core, clippy::std_instead_of_alloc)
)]
#![warn(clippy::missing_inline_in_public_items)]

#[cfg(test)]
#[macro_use]
extern crate std;
extern crate alloc;

/// Coordinate types and per-axis helpers.
pub mod math;

/// The [`Region`](region::Region) contract and the cuboid shape.
pub mod region;

/// Formatting helpers.
pub mod util;

// reexport for convenience of our tests and callers constructing points
#[doc(hidden)]
pub use euclid;
