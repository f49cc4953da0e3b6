use linesplit2d::interaction::self_intersections;
use linesplit2d::math::{Point, Real, DEFAULT_TOLERANCE};
use linesplit2d::shape::LineString;

fn line(pts: &[(Real, Real)]) -> LineString {
    pts.iter().map(|(x, y)| Point::new(*x, *y)).collect()
}

#[test]
fn extremities_never_split() {
    let mut rng = oorandom::Rand64::new(7);

    for _ in 0..100 {
        let n = 2 + rng.rand_range(0..6) as usize;
        let l: LineString = (0..n)
            .map(|_| Point::new(rng.rand_float() * 50.0, rng.rand_float() * 50.0))
            .collect();
        let first = l.first_point().unwrap();
        let last = l.last_point().unwrap();

        assert_eq!(l.split_at(&[first], DEFAULT_TOLERANCE), vec![l.clone()]);
        assert_eq!(l.split_at(&[last], DEFAULT_TOLERANCE), vec![l.clone()]);
    }
}

#[test]
fn split_point_order_does_not_matter() {
    let l = line(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    let p1 = Point::new(4.0, 0.0);
    let p2 = Point::new(10.0, 10.0);
    let p3 = Point::new(3.0, 10.0);

    let expected = vec![
        line(&[(0.0, 0.0), (4.0, 0.0)]),
        line(&[(4.0, 0.0), (10.0, 0.0), (10.0, 10.0)]),
        line(&[(10.0, 10.0), (3.0, 10.0)]),
        line(&[(3.0, 10.0), (0.0, 10.0)]),
    ];
    assert_eq!(l.split_at(&[p1, p2, p3], DEFAULT_TOLERANCE), expected);
    assert_eq!(l.split_at(&[p3, p1, p2], DEFAULT_TOLERANCE), expected);
}

#[test]
fn bowtie_splits_into_simple_pieces() {
    let bowtie = line(&[(0.0, 0.0), (10.0, 10.0), (0.0, 10.0), (10.0, 0.0)]);
    let points = self_intersections(&bowtie, DEFAULT_TOLERANCE);
    assert_eq!(points.as_slice(), &[Point::new(5.0, 5.0)]);

    let pieces = bowtie.split_at(&points, DEFAULT_TOLERANCE);
    assert_eq!(pieces.len(), 3);
    assert_eq!(pieces[0], line(&[(0.0, 0.0), (5.0, 5.0)]));
    assert_eq!(pieces[2], line(&[(5.0, 5.0), (10.0, 0.0)]));

    // No piece crosses itself anymore, except at its closing vertex.
    for piece in &pieces {
        let remaining = self_intersections(piece, DEFAULT_TOLERANCE);
        assert_eq!(piece.split_at(&remaining, DEFAULT_TOLERANCE), vec![piece.clone()]);
    }
}
