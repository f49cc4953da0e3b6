use linesplit2d::interaction::{
    AutoSplitter, InteractiveSplitter, SnapOptions, SplitEvent, SplitOptions,
};
use linesplit2d::math::Point;
use linesplit2d::shape::{Geometry, LineString};
use linesplit2d::store::{Feature, FeatureStore, MemoryStore};
use std::cell::RefCell;
use std::rc::Rc;

fn line(pts: &[(f64, f64)]) -> LineString {
    pts.iter().map(|(x, y)| Point::new(*x, *y)).collect()
}

#[test]
fn click_next_to_a_vertex_splits_exactly_there() {
    let mut store = MemoryStore::new();
    let vertex = Point::new(10.123456789, 3.000000001);
    let _ = store.insert(Feature::new(LineString::new(vec![
        Point::new(0.0, 0.0),
        vertex,
        Point::new(20.0, 0.0),
    ])));
    let mut splitter = InteractiveSplitter::default();

    let hover = splitter
        .pointer_move([&store as &dyn FeatureStore], &Point::new(10.2, 3.1), 0.01)
        .unwrap();
    assert!(hover.snapped_to_vertex);
    assert_eq!(hover.split_point, vertex);

    let pieces = splitter
        .click(&mut [&mut store], &Point::new(10.2, 3.1), 0.01)
        .unwrap();
    assert_eq!(store.get(pieces[0]).unwrap().geometry.line_string().last_point(), Some(vertex));
    assert_eq!(store.get(pieces[1]).unwrap().geometry.line_string().first_point(), Some(vertex));
}

#[test]
fn click_searches_stores_in_order() {
    let mut background = MemoryStore::new();
    let _ = background.insert(Feature::new(line(&[(0.0, 0.2), (10.0, 0.2)])));
    let mut editable = MemoryStore::new();
    let key = editable.insert(Feature::new(line(&[(0.0, 1.0), (10.0, 1.0)])));
    let snap = SnapOptions {
        snap_distance_px: 10.0,
    };
    let mut splitter = InteractiveSplitter::new(SplitOptions::default(), snap);
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    splitter.add_listener(move |e| sink.borrow_mut().push(e.clone()));

    let pieces = splitter
        .click(&mut [&mut editable, &mut background], &Point::new(5.0, 0.0), 0.2)
        .unwrap();

    assert!(editable.get(key).is_none());
    assert_eq!(editable.len(), 2);
    assert_eq!(background.len(), 1);
    assert_eq!(
        editable.get(pieces[0]).unwrap().geometry,
        Geometry::from(line(&[(0.0, 1.0), (5.0, 1.0)]))
    );
    assert!(matches!(events.borrow()[1], SplitEvent::AfterSplit { original, .. } if original == key));
}

#[test]
fn interactive_split_feeds_the_auto_splitter() {
    let mut store = MemoryStore::new();
    let _ = store.insert(Feature::new(line(&[(0.0, 0.0), (10.0, 0.0)])));
    let mut auto = AutoSplitter::default();
    let _ = auto.process_events(&mut store);
    let mut splitter = InteractiveSplitter::default();

    let pieces = splitter
        .click(&mut [&mut store], &Point::new(5.0, 0.1), 0.01)
        .unwrap();

    // The pieces only touch at their shared extremity: nothing more to split.
    let passes = auto.process_events(&mut store);
    assert_eq!(passes.len(), 2);
    assert!(passes.iter().all(|p| p.is_empty()));
    assert_eq!(store.keys(), pieces);
}
