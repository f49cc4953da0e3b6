//! Point projection on lines.

#[doc(inline)]
pub use self::point_query::{PointProjection, PointQuery, PointQueryWithLocation};

mod point_line_string;
#[doc(hidden)]
pub mod point_query;
mod point_segment;
