//! Non-persistent geometric queries.
//!
//! Point-projection can be achieved by importing traits:
//!
//! * [`query::PointQuery`] for point projection.
//! * [`query::PointQueryWithLocation`] for point projection returning the segment hit.
//!
//! Line splitting is provided by [`LineString::split_at`](crate::shape::LineString::split_at)
//! and [`Geometry::split_at`](crate::shape::Geometry::split_at), implemented in the
//! [`split`] submodule.

pub use self::point::{PointProjection, PointQuery, PointQueryWithLocation};
pub use self::split::point_lies_on_segment;

pub mod point;
pub mod split;
