mod line_split;
mod segments_intersection;
