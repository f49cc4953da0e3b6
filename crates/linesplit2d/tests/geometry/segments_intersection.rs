use linesplit2d::math::{Point, DEFAULT_TOLERANCE};
use linesplit2d::shape::{LineString, Segment};

#[test]
fn crossing_lines_intersect_at_their_middle() {
    let a = Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
    let b = Segment::new(Point::new(0.0, 10.0), Point::new(10.0, 0.0));

    assert_eq!(a.intersection(&b, DEFAULT_TOLERANCE), Some(Point::new(5.0, 5.0)));
    assert_eq!(b.intersection(&a, DEFAULT_TOLERANCE), Some(Point::new(5.0, 5.0)));
}

#[test]
fn bowtie_crosses_itself_between_first_and_last_segments() {
    let bowtie: LineString = vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
        Point::new(10.0, 0.0),
    ]
    .into();

    assert_eq!(
        bowtie.segment(0).intersection(&bowtie.segment(2), DEFAULT_TOLERANCE),
        Some(Point::new(5.0, 5.0))
    );
    // Adjacent segments only touch at their shared vertex.
    assert_eq!(
        bowtie.segment(0).intersection(&bowtie.segment(1), DEFAULT_TOLERANCE),
        Some(Point::new(10.0, 10.0))
    );
}

#[test]
fn large_map_coordinates() {
    // Web-mercator meters.
    let a = Segment::new(
        Point::new(-8_238_310.0, 4_970_072.0),
        Point::new(-8_238_210.0, 4_970_172.0),
    );
    let b = Segment::new(
        Point::new(-8_238_310.0, 4_970_172.0),
        Point::new(-8_238_210.0, 4_970_072.0),
    );
    let pt = a.intersection(&b, DEFAULT_TOLERANCE).unwrap();
    approx::assert_relative_eq!(pt, Point::new(-8_238_260.0, 4_970_122.0), epsilon = 1.0e-6);
}
