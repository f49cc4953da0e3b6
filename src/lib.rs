/*!
linesplit2d
========

**linesplit2d** is a 2-dimensional polyline splitting library written with
the rust programming language.

It splits polylines at points lying on them, computes segment/segment
intersections with a numerical tolerance, and keeps a collection of editable
line and polygon features noded: whenever a cutting feature is drawn or
edited, every feature it crosses (and the cutting feature itself) is split at
the crossings.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![allow(clippy::type_complexity)] // Complains about closures that are fairly simple.

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod interaction;
pub mod query;
pub mod shape;
pub mod store;
pub mod utils;

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use na::{Point2, Vector2};

    /// The scalar type used throughout this crate.
    ///
    /// Map coordinates are projected coordinates that can be large (web-mercator
    /// meters reach 2.0e7), so double precision is always used.
    pub use f64 as Real;

    /// The default tolerance used to decide that two coordinates, or two
    /// ratios along a segment, are equal.
    pub const DEFAULT_TOLERANCE: Real = 1.0e-10;

    /// The dimension of the space.
    pub const DIM: usize = 2;

    /// The point type.
    pub use Point2 as Point;

    /// The vector type.
    pub use Vector2 as Vector;
}
