//! Nearest-neighbour ordering behaviour

use pickprobe_camtools::PointOrderer;
use pickprobe_core::DrawingPoint;
use proptest::prelude::*;

fn key(p: &DrawingPoint) -> (u64, u64) {
    (p.x.to_bits(), p.y.to_bits())
}

proptest! {
    #[test]
    fn order_is_a_permutation(
        coords in prop::collection::vec((-500.0f64..500.0, -500.0f64..500.0), 0..40)
    ) {
        let points: Vec<DrawingPoint> = coords.into_iter().map(Into::into).collect();
        let ordered = PointOrderer::order(&points);

        prop_assert_eq!(ordered.len(), points.len());
        let mut a: Vec<_> = points.iter().map(key).collect();
        let mut b: Vec<_> = ordered.iter().map(key).collect();
        a.sort_unstable();
        b.sort_unstable();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn order_starts_at_first_pick(
        coords in prop::collection::vec((-500.0f64..500.0, -500.0f64..500.0), 1..40)
    ) {
        let points: Vec<DrawingPoint> = coords.into_iter().map(Into::into).collect();
        let ordered = PointOrderer::order(&points);
        prop_assert_eq!(ordered[0], points[0]);
    }

    #[test]
    fn each_step_takes_a_nearest_remaining_point(
        coords in prop::collection::vec((-500.0f64..500.0, -500.0f64..500.0), 2..25)
    ) {
        let points: Vec<DrawingPoint> = coords.into_iter().map(Into::into).collect();
        let ordered = PointOrderer::order(&points);
        for i in 1..ordered.len() {
            let step = ordered[i - 1].distance_to(&ordered[i]);
            for later in &ordered[i + 1..] {
                prop_assert!(step <= ordered[i - 1].distance_to(later));
            }
        }
    }
}

#[test]
fn nearest_neighbour_fixture() {
    let points = [
        DrawingPoint::new(0.0, 0.0),
        DrawingPoint::new(10.0, 0.0),
        DrawingPoint::new(1.0, 0.0),
    ];
    assert_eq!(
        PointOrderer::order(&points),
        vec![
            DrawingPoint::new(0.0, 0.0),
            DrawingPoint::new(1.0, 0.0),
            DrawingPoint::new(10.0, 0.0),
        ]
    );
}

#[test]
fn grid_walk_reduces_travel() {
    // Picked in a scattered order across a 3x3 grid.
    let points: Vec<DrawingPoint> = [
        (0.0, 0.0),
        (20.0, 20.0),
        (10.0, 0.0),
        (0.0, 20.0),
        (20.0, 0.0),
        (10.0, 10.0),
        (0.0, 10.0),
        (20.0, 10.0),
        (10.0, 20.0),
    ]
    .into_iter()
    .map(Into::into)
    .collect();

    let ordered = PointOrderer::order(&points);
    assert!(PointOrderer::path_length(&ordered) < PointOrderer::path_length(&points));
    assert_eq!(
        &ordered[..3],
        &[
            DrawingPoint::new(0.0, 0.0),
            DrawingPoint::new(10.0, 0.0),
            DrawingPoint::new(20.0, 0.0),
        ]
    );
}
