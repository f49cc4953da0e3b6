//! Splitting of lines at points lying on them.

pub use self::split_line_string::point_lies_on_segment;

mod split_line_string;
