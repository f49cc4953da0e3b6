//! Shapes supported by linesplit2d.

pub use self::geometry::{Geometry, Polygon};
pub use self::line_string::{GeometryError, LineString};
pub use self::segment::{Segment, SegmentPointLocation};

mod geometry;
mod line_string;
mod segment;
