use proptest::prelude::*;

use super::{classify, PointType};
use super::*;
use crate::error::Error;
use crate::geom::{direction, Point};

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| p(x, y)).collect()
}

/// Monotone-chain upper hull, used as the ground truth for small inputs.
fn brute_upper(points: &[Point]) -> Vec<Point> {
    let mut sorted = points.to_vec();
    sorted.sort_by(Point::cmp_order);
    let mut upper: Vec<Point> = Vec::new();
    for &q in sorted.iter().rev() {
        while upper.len() >= 2 {
            let a = upper[upper.len() - 2];
            let b = upper[upper.len() - 1];
            // Pop b unless it lies strictly above the q→a chord.
            if direction(q, a, b) >= 0.0 {
                upper.pop();
            } else {
                break;
            }
        }
        upper.push(q);
    }
    upper.reverse();
    upper
}

#[test]
fn hull_of_three_points() {
    let hull = upper_hull(&pts(&[(3.0, 3.0), (1.0, 1.0), (5.0, 0.0)]), None).unwrap();
    assert_eq!(hull, pts(&[(1.0, 1.0), (3.0, 3.0), (5.0, 0.0)]));
}

#[test]
fn hull_of_eleven_points() {
    let input = pts(&[
        (3.0, 10.0),
        (6.0, 8.0),
        (3.0, 5.0),
        (2.0, 8.0),
        (4.0, 8.0),
        (5.0, 5.0),
        (3.0, 3.0),
        (7.0, 7.0),
        (5.0, 0.0),
        (0.0, 0.0),
        (10.0, 3.0),
    ]);
    let hull = upper_hull(&input, None).unwrap();
    assert_eq!(
        hull,
        pts(&[
            (0.0, 0.0),
            (2.0, 8.0),
            (3.0, 10.0),
            (6.0, 8.0),
            (7.0, 7.0),
            (10.0, 3.0),
        ])
    );
}

#[test]
fn hull_of_sixteen_points() {
    let input = pts(&[
        (0.0, 26.0),
        (1.0, 2.0),
        (1.0, 23.0),
        (9.0, 29.0),
        (13.0, 32.0),
        (14.0, 26.0),
        (14.0, 32.0),
        (15.0, 27.0),
        (18.0, 11.0),
        (18.0, 20.0),
        (19.0, 7.0),
        (20.0, 35.0),
        (24.0, 4.0),
        (27.0, 25.0),
        (31.0, 2.0),
        (35.0, 12.0),
    ]);
    let hull = upper_hull(&input, None).unwrap();
    assert_eq!(
        hull,
        pts(&[
            (0.0, 26.0),
            (13.0, 32.0),
            (20.0, 35.0),
            (27.0, 25.0),
            (35.0, 12.0),
        ])
    );
}

#[test]
fn vertical_pair_collapses_to_upper_point() {
    let hull = upper_hull(&pts(&[(0.0, 2.0), (0.0, 4.0)]), None).unwrap();
    assert_eq!(hull, pts(&[(0.0, 4.0)]));
}

#[test]
fn vertical_line_collapses_to_upper_point() {
    let input: Vec<Point> = (0..5).map(|i| p(0.0, i as f64)).collect();
    let hull = upper_hull(&input, None).unwrap();
    assert_eq!(hull, pts(&[(0.0, 4.0)]));
}

#[test]
fn horizontal_line_collapses_to_extremes() {
    let input: Vec<Point> = (0..5).map(|i| p(i as f64, 0.0)).collect();
    let hull = upper_hull(&input, None).unwrap();
    assert_eq!(hull, pts(&[(0.0, 0.0), (4.0, 0.0)]));
}

#[test]
fn empty_and_single_inputs() {
    assert_eq!(upper_hull(&[], None).unwrap(), Vec::<Point>::new());
    assert_eq!(upper_hull(&[p(2.0, 1.0)], None).unwrap(), pts(&[(2.0, 1.0)]));
}

#[test]
fn toggle_point_routes_to_the_no_op_extension_points() {
    let input = pts(&[(3.0, 3.0), (1.0, 1.0), (5.0, 0.0)]);
    let base = upper_hull(&input, None).unwrap();
    // Present point routes to remove, absent to insert; both leave the
    // tree untouched.
    assert_eq!(upper_hull(&input, Some(p(3.0, 3.0))).unwrap(), base);
    assert_eq!(upper_hull(&input, Some(p(2.0, 9.0))).unwrap(), base);
}

// Pairwise merge scenarios. Segments are built the same way the engine
// builds them: by merging two single-point leaves.

fn segment(t: &mut HullTree, a: Point, b: Point) -> crate::error::Result<crate::tree::NodeId> {
    let la = t.leaf(a);
    let lb = t.leaf(b);
    t.merge(la, lb)
}

#[test]
fn merge_two_segments_dominated_interior() {
    // Both interior points fall below the outer chord.
    let mut t = HullTree::new();
    let s1 = segment(&mut t, p(0.0, 2.0), p(1.0, 0.0)).unwrap();
    let s2 = segment(&mut t, p(3.0, 1.0), p(4.0, 3.0)).unwrap();
    let joint = t.merge(s1, s2).unwrap();

    let payload = &t.tree().get(joint).data;
    assert_eq!(payload.subhull.chain(), pts(&[(0.0, 2.0), (4.0, 3.0)]));
    assert_eq!(payload.left_supporting_index, 0);
    assert_eq!(payload.point, p(1.0, 0.0));
    assert_eq!(t.tree().left(joint), Some(s1));
    assert_eq!(t.tree().right(joint), Some(s2));
}

#[test]
fn merge_two_segments_keeps_left_peak() {
    let mut t = HullTree::new();
    let s1 = segment(&mut t, p(1.0, 1.0), p(2.0, 4.0)).unwrap();
    let s2 = segment(&mut t, p(3.0, 1.0), p(4.0, 2.0)).unwrap();
    let joint = t.merge(s1, s2).unwrap();

    let payload = &t.tree().get(joint).data;
    assert_eq!(payload.subhull.chain(), pts(&[(1.0, 1.0), (2.0, 4.0), (4.0, 2.0)]));
    assert_eq!(payload.left_supporting_index, 1);
}

#[test]
fn merge_two_segments_keeps_right_peak() {
    let mut t = HullTree::new();
    let s1 = segment(&mut t, p(1.0, 3.0), p(2.0, 1.0)).unwrap();
    let s2 = segment(&mut t, p(3.0, 3.0), p(4.0, 1.0)).unwrap();
    let joint = t.merge(s1, s2).unwrap();

    let payload = &t.tree().get(joint).data;
    assert_eq!(payload.subhull.chain(), pts(&[(1.0, 3.0), (3.0, 3.0), (4.0, 1.0)]));
    assert_eq!(payload.left_supporting_index, 0);
}

#[test]
fn merge_two_segments_keeps_both_peaks() {
    let mut t = HullTree::new();
    let s1 = segment(&mut t, p(1.0, 1.0), p(2.0, 3.0)).unwrap();
    let s2 = segment(&mut t, p(3.0, 3.0), p(4.0, 1.0)).unwrap();
    let joint = t.merge(s1, s2).unwrap();

    let payload = &t.tree().get(joint).data;
    assert_eq!(
        payload.subhull.chain(),
        pts(&[(1.0, 1.0), (2.0, 3.0), (3.0, 3.0), (4.0, 1.0)])
    );
    assert_eq!(payload.left_supporting_index, 1);
}

#[test]
fn merge_segment_with_dominating_point() {
    // The lower segment endpoint is fully dominated by the far point.
    let mut t = HullTree::new();
    let s = segment(&mut t, p(0.0, 1.0), p(2.0, 0.0)).unwrap();
    let single = t.leaf(p(5.0, 5.0));
    let joint = t.merge(s, single).unwrap();

    let payload = &t.tree().get(joint).data;
    assert_eq!(payload.subhull.chain(), pts(&[(0.0, 1.0), (5.0, 5.0)]));
    assert_eq!(payload.left_supporting_index, 0);
    assert_eq!(payload.point, p(2.0, 0.0));
}

#[test]
fn merge_segment_with_low_point() {
    let mut t = HullTree::new();
    let s = segment(&mut t, p(0.0, 1.0), p(2.0, 3.0)).unwrap();
    let single = t.leaf(p(5.0, 0.0));
    let joint = t.merge(s, single).unwrap();

    let payload = &t.tree().get(joint).data;
    assert_eq!(
        payload.subhull.chain(),
        pts(&[(0.0, 1.0), (2.0, 3.0), (5.0, 0.0)])
    );
    assert_eq!(payload.left_supporting_index, 1);
}

#[test]
fn node_shape_flags() {
    let mut t = HullTree::new();
    let single = t.leaf(p(1.0, 1.0));
    assert!(t.is_point(single));
    assert!(!t.is_segment(single));

    let s = segment(&mut t, p(2.0, 2.0), p(3.0, 0.0)).unwrap();
    assert!(!t.is_point(s));
    assert!(t.is_segment(s));
}

#[test]
fn compression_leaves_only_private_points_below_the_root() {
    let input = pts(&[
        (3.0, 10.0),
        (6.0, 8.0),
        (3.0, 5.0),
        (2.0, 8.0),
        (4.0, 8.0),
        (5.0, 5.0),
        (3.0, 3.0),
        (7.0, 7.0),
        (5.0, 0.0),
        (0.0, 0.0),
        (10.0, 3.0),
    ]);
    let t = HullTree::build(&input).unwrap();
    let tree = t.tree();
    let root = t.root().unwrap();
    assert_eq!(t.hull().len(), 6);

    // Every non-root subhull must be disjoint from its parent's subhull.
    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        let own = tree.get(id).data.subhull.chain();
        for child in [tree.left(id), tree.right(id)].into_iter().flatten() {
            let sub = tree.get(child).data.subhull.chain();
            for q in &sub {
                assert!(!own.contains(q), "point {q} stored twice");
            }
            stack.push(child);
        }
    }
}

#[test]
fn walk_failure_surfaces_as_error() {
    // A configuration whose tangent walk runs off the chain; the failure
    // must come back as an error, not a panic or a hang.
    let input = pts(&[
        (0.0, 13.0),
        (1.0, 0.0),
        (8.0, 17.0),
        (13.0, 19.0),
        (14.0, 3.0),
        (17.0, 6.0),
        (18.0, 4.0),
    ]);
    assert!(upper_hull(&input, None).is_err());
}

#[test]
fn gift_wrap_square_with_interior_point() {
    let hull = gift_wrap(&pts(&[
        (0.0, 0.0),
        (2.0, 0.0),
        (1.0, 1.0),
        (2.0, 2.0),
        (0.0, 2.0),
    ]));
    // Clockwise from the lexicographic minimum: upper chain first.
    assert_eq!(
        hull,
        pts(&[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)])
    );
}

#[test]
fn gift_wrap_collinear_and_tiny_inputs() {
    let collinear: Vec<Point> = (0..5).map(|i| p(i as f64, 0.0)).collect();
    assert_eq!(gift_wrap(&collinear), pts(&[(0.0, 0.0), (4.0, 0.0)]));

    let two = pts(&[(0.0, 0.0), (1.0, 1.0)]);
    assert_eq!(gift_wrap(&two), two);
}

#[test]
fn classification_boundary_cases() {
    // First node of a right-hand chain, seen from the left: the single
    // neighbor decides between left-supporting and convex.
    let ty = classify(p(0.0, 0.0), p(2.0, 1.0), None, Some(p(3.0, 0.0))).unwrap();
    assert_eq!(ty, PointType::LeftSupporting);
    let ty = classify(p(0.0, 0.0), p(2.0, 1.0), None, Some(p(3.0, 3.0))).unwrap();
    assert_eq!(ty, PointType::Convex);

    // Last node of a left-hand chain, seen from the right.
    let ty = classify(p(5.0, 0.0), p(2.0, 1.0), Some(p(1.0, 3.0)), None).unwrap();
    assert_eq!(ty, PointType::RightSupporting);
    let ty = classify(p(5.0, 0.0), p(2.0, 1.0), Some(p(1.0, 0.0)), None).unwrap();
    assert_eq!(ty, PointType::Convex);

    assert_eq!(
        classify(p(0.0, 0.0), p(1.0, 1.0), None, None),
        Err(Error::IsolatedChainNode)
    );
}

#[test]
fn classification_interior_cases() {
    // Chain peak with both neighbors below the line to the source: the
    // supporting side depends on where the source is.
    let ty = classify(
        p(6.0, 8.0),
        p(3.0, 10.0),
        Some(p(2.0, 8.0)),
        Some(p(4.0, 8.0)),
    )
    .unwrap();
    assert_eq!(ty, PointType::RightSupporting);

    let ty = classify(
        p(3.0, 10.0),
        p(6.0, 8.0),
        Some(p(5.0, 5.0)),
        Some(p(7.0, 7.0)),
    )
    .unwrap();
    assert_eq!(ty, PointType::LeftSupporting);

    // A dip between its neighbors reads as reflex from across the merge.
    let ty = classify(
        p(6.0, 8.0),
        p(2.0, 8.0),
        Some(p(0.0, 0.0)),
        Some(p(3.0, 10.0)),
    )
    .unwrap();
    assert_eq!(ty, PointType::Reflex);
}

proptest! {
    /// Inputs small enough that every merge is trivial must reproduce the
    /// monotone-chain hull exactly, for any input order. Vertical stacks have
    /// their own collapse convention and their own tests, so x coordinates
    /// are kept apart here.
    #[test]
    fn small_hulls_match_monotone_chain(
        coords in prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 1..=5)
            .prop_filter("x-separated", |v| {
                v.iter().enumerate().all(|(i, a)| {
                    v[..i].iter().all(|b| (a.0 - b.0).abs() > 0.01)
                })
            })
    ) {
        let input = pts(&coords);
        let hull = upper_hull(&input, None).unwrap();
        prop_assert_eq!(hull.clone(), brute_upper(&input));

        let mut reversed = input.clone();
        reversed.reverse();
        prop_assert_eq!(upper_hull(&reversed, None).unwrap(), hull.clone());

        let mut rotated = input;
        rotated.rotate_left(1);
        prop_assert_eq!(upper_hull(&rotated, None).unwrap(), hull);
    }

    /// Small hulls have no dent: every interior vertex sits strictly above
    /// the chord of its neighbors. Near-coincident points would make the
    /// strict inequality meaningless, so the points are kept apart.
    #[test]
    fn small_hulls_are_dent_free(
        coords in prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 1..=5)
            .prop_filter("separated", |v| {
                v.iter().enumerate().all(|(i, a)| {
                    v[..i].iter().all(|b| (a.0 - b.0).abs() > 0.01 || (a.1 - b.1).abs() > 0.01)
                })
            })
    ) {
        let hull = upper_hull(&pts(&coords), None).unwrap();
        for w in hull.windows(3) {
            prop_assert!(direction(w[0], w[2], w[1]) < 0.0);
        }
    }

    /// Arbitrary inputs never panic or hang: either a left-to-right chain
    /// comes back or a domain error does.
    #[test]
    fn construction_is_total(
        coords in prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 0..40)
    ) {
        let input = pts(&coords);
        match upper_hull(&input, None) {
            Ok(hull) => {
                prop_assert_eq!(hull.is_empty(), input.is_empty());
                for w in hull.windows(2) {
                    prop_assert!(w[0].cmp_order(&w[1]) != std::cmp::Ordering::Greater);
                }
            }
            Err(
                Error::Unclassifiable { .. }
                | Error::IsolatedChainNode
                | Error::TangentWalkOverrun
                | Error::TangentWalkDiverged,
            ) => {}
            Err(other) => prop_assert!(false, "unexpected error class: {other}"),
        }
    }
}
