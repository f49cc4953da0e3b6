use linesplit2d::interaction::{AutoSplitter, SplitOptions};
use linesplit2d::math::{Point, Real, DEFAULT_TOLERANCE};
use linesplit2d::shape::{Geometry, LineString, Polygon};
use linesplit2d::store::{Feature, FeatureStore, MemoryStore, PropertyValue};
use linesplit2d::utils::points_equal;

fn line(pts: &[(Real, Real)]) -> LineString {
    pts.iter().map(|(x, y)| Point::new(*x, *y)).collect()
}

#[test]
fn crossing_line_from_another_store() {
    let mut trigger = MemoryStore::new();
    let mut target = MemoryStore::new();
    let b = target.insert(Feature::new(line(&[(0.0, 10.0), (10.0, 0.0)])).with_property("kind", "road"));
    let _ = target.take_events();

    let a = trigger.insert(Feature::new(line(&[(0.0, 0.0), (10.0, 10.0)])));
    let mut splitter = AutoSplitter::default();
    let events = trigger.take_events();
    let pass = splitter
        .handle_trigger_event(&trigger, &mut target, &events[0])
        .unwrap();

    assert_eq!(pass.trigger, Some(a));
    assert_eq!(pass.removed_keys(), vec![b]);
    assert_eq!(pass.features_added.len(), 2);

    let pieces: Vec<_> = pass
        .features_added
        .iter()
        .map(|k| target.get(*k).unwrap().clone())
        .collect();
    assert_eq!(pieces[0].geometry, Geometry::from(line(&[(0.0, 10.0), (5.0, 5.0)])));
    assert_eq!(pieces[1].geometry, Geometry::from(line(&[(5.0, 5.0), (10.0, 0.0)])));
    assert!(pieces.iter().all(|f| f.property("kind") == Some(&PropertyValue::from("road"))));

    // The trigger is left untouched.
    assert_eq!(trigger.len(), 1);
    assert!(!trigger.has_pending_events());
}

#[test]
fn feature_crossed_twice_by_a_foreign_segment() {
    let mut trigger = MemoryStore::new();
    let mut target = MemoryStore::new();
    let z = target.insert(Feature::new(line(&[(0.0, -5.0), (2.0, 5.0), (4.0, -5.0)])));
    let _ = target.take_events();

    let _ = trigger.insert(Feature::new(line(&[(-1.0, 0.0), (6.0, 0.0)])));
    let mut splitter = AutoSplitter::default();
    let events = trigger.take_events();
    let pass = splitter
        .handle_trigger_event(&trigger, &mut target, &events[0])
        .unwrap();

    // The middle piece produced by the first split is split again after the rescan.
    assert_eq!(pass.removed_keys(), vec![z]);
    assert_eq!(pass.features_added, target.keys());
    assert_eq!(
        target.geometries(),
        vec![
            &Geometry::from(line(&[(0.0, -5.0), (1.0, 0.0)])),
            &Geometry::from(line(&[(1.0, 0.0), (2.0, 5.0), (3.0, 0.0)])),
            &Geometry::from(line(&[(3.0, 0.0), (4.0, -5.0)])),
        ]
    );
    assert_eq!(trigger.len(), 1);
}

#[test]
fn drag_in_the_trigger_store_is_coalesced() {
    let mut trigger = MemoryStore::new();
    let mut target = MemoryStore::new();
    let b = target.insert(Feature::new(line(&[(0.0, 10.0), (10.0, 0.0)])));
    let a = trigger.insert(Feature::new(line(&[(20.0, 0.0), (30.0, 10.0)])));
    let _ = target.take_events();
    let _ = trigger.take_events();

    let mut splitter = AutoSplitter::default();
    splitter.begin_interaction();
    for x in [15.0, 10.0, 5.0, 0.0] {
        let _ = trigger
            .set_geometry(a, line(&[(x, 0.0), (x + 10.0, 10.0)]).into())
            .unwrap();
        for event in trigger.take_events() {
            assert!(splitter
                .handle_trigger_event(&trigger, &mut target, &event)
                .is_none());
        }
    }
    assert_eq!(target.len(), 1);
    assert_eq!(splitter.pending_drag(), Some(a));

    let pass = splitter.end_interaction_with(&trigger, &mut target).unwrap();
    assert_eq!(pass.trigger, Some(a));
    assert_eq!(pass.removed_keys(), vec![b]);
    assert_eq!(target.len(), 2);
    assert_eq!(trigger.len(), 1);
    assert!(!splitter.is_interacting());
    assert_eq!(splitter.end_interaction_with(&trigger, &mut target), None);
}

#[test]
fn crossing_at_map_projection_scale() {
    let mut store = MemoryStore::new();
    let b = store.insert(Feature::new(line(&[
        (-8238307.9, 4970177.3),
        (-8238211.6, 4970069.2),
    ])));
    let mut splitter = AutoSplitter::default();
    let _ = splitter.process_events(&mut store);

    let a = store.insert(Feature::new(line(&[
        (-8238310.3, 4970072.7),
        (-8238203.1, 4970181.9),
    ])));
    let passes = splitter.process_events(&mut store);

    assert_eq!(passes.len(), 1);
    assert_eq!(passes[0].removed_keys(), vec![b, a]);
    assert_eq!(passes[0].features_added.len(), 4);
    assert_eq!(store.len(), 4);
}

#[test]
fn foreign_cutter_splits_several_features() {
    let mut target = MemoryStore::new();
    for x in [2.0, 4.0, 6.0] {
        let _ = target.insert(Feature::new(line(&[(x, -5.0), (x, 5.0)])));
    }
    let _ = target.insert(Feature::new(line(&[(20.0, -5.0), (20.0, 5.0)])));
    let cutter = Feature::new(line(&[(0.0, 0.0), (10.0, 0.0)]));

    let mut splitter = AutoSplitter::default();
    let pass = splitter.split_with(&mut target, &cutter).unwrap();

    assert_eq!(pass.trigger, None);
    assert_eq!(pass.features_removed.len(), 3);
    assert_eq!(pass.features_added.len(), 6);
    assert_eq!(target.len(), 7);
}

#[test]
fn self_crossing_trigger_is_split() {
    let mut store = MemoryStore::new();
    let mut splitter = AutoSplitter::default();
    let c = store.insert(Feature::new(line(&[
        (0.0, 0.0),
        (10.0, 10.0),
        (0.0, 10.0),
        (10.0, 0.0),
    ])));

    let passes = splitter.process_events(&mut store);
    assert_eq!(passes.len(), 1);
    assert_eq!(passes[0].removed_keys(), vec![c]);
    assert_eq!(passes[0].features_added.len(), 3);

    // Idempotence: the pieces are already noded.
    for key in store.keys() {
        let pass = splitter.split_feature(&mut store, key).unwrap();
        assert!(pass.is_empty());
    }
    assert_eq!(store.len(), 3);
}

#[test]
fn pieces_split_again_within_a_pass_cancel_out() {
    // The cutter crosses `b` twice: the second piece of `b` is split again, so it is
    // both added and removed during the pass.
    let mut store = MemoryStore::new();
    let b = store.insert(Feature::new(line(&[(0.0, 0.0), (10.0, 0.0)])));
    let mut splitter = AutoSplitter::default();
    let _ = splitter.process_events(&mut store);

    let a = store.insert(Feature::new(line(&[(2.0, -1.0), (2.0, 1.0), (8.0, 1.0), (8.0, -1.0)])));
    let passes = splitter.process_events(&mut store);
    assert_eq!(passes.len(), 1);
    let pass = &passes[0];

    assert_eq!(pass.removed_keys(), vec![b, a]);
    for key in &pass.features_added {
        assert!(store.get(*key).is_some());
    }
    assert_eq!(pass.features_added.len(), store.len());
    assert_eq!(store.len(), 3 + 3);
}

#[test]
fn polygons_cut_lines_without_being_cut() {
    let mut store = MemoryStore::new();
    let square = store.insert(Feature::new(Polygon::new(line(&[
        (0.0, 0.0),
        (4.0, 0.0),
        (4.0, 4.0),
        (0.0, 4.0),
    ]))));
    let mut splitter = AutoSplitter::default();
    let _ = splitter.process_events(&mut store);

    let _ = store.insert(Feature::new(line(&[(-2.0, 2.0), (6.0, 2.0)])));
    let passes = splitter.process_events(&mut store);

    assert_eq!(passes[0].features_added.len(), 3);
    assert!(store.get(square).is_some());

    let options = SplitOptions {
        split_polygons: true,
        ..SplitOptions::default()
    };
    let mut splitter = AutoSplitter::new(options);
    let _ = store.insert(Feature::new(line(&[(2.0, -2.0), (2.0, 6.0)])));
    let passes = splitter.process_events(&mut store);
    assert!(store.get(square).is_none());
    assert!(passes[0].removed_keys().contains(&square));
}

#[test]
fn pieces_only_contain_original_or_crossing_points() {
    let mut rng = oorandom::Rand64::new(2024);

    for _ in 0..20 {
        let mut store = MemoryStore::new();
        let mut splitter = AutoSplitter::default();
        let mut originals: Vec<Point<Real>> = Vec::new();

        for _ in 0..6 {
            let pts: Vec<_> = (0..4)
                .map(|_| Point::new(rng.rand_float() * 100.0, rng.rand_float() * 100.0))
                .collect();
            originals.extend_from_slice(&pts);
            let _ = store.insert(Feature::new(LineString::new(pts)));
            let _ = splitter.process_events(&mut store);
        }

        // Every point of a piece is an original vertex or lies on two original lines.
        let all_lines: Vec<LineString> = store
            .geometries()
            .into_iter()
            .map(|g| g.line_string().clone())
            .collect();
        for line in &all_lines {
            for pt in line.points() {
                if originals.iter().any(|o| points_equal(o, pt, DEFAULT_TOLERANCE)) {
                    continue;
                }
                let touching = all_lines
                    .iter()
                    .filter(|l| l.points().iter().any(|p| points_equal(p, pt, DEFAULT_TOLERANCE)))
                    .count();
                assert!(touching >= 2, "invented point {:?}", pt);
            }
        }

        // Running the splitter again on a noded store is a no-op.
        for key in store.keys() {
            if store.get(key).is_some() {
                let pass = splitter.split_feature(&mut store, key).unwrap();
                assert!(pass.is_empty(), "{:?}", pass);
            }
        }
    }
}
