//! Proximity-based line selection between dot centers.

use crate::types::{Connection, Point};

/// Selects which dot pairs get a connecting line this frame.
///
/// Pairs `(i, j)` with `i < j` are visited in ascending order. A pair is
/// skipped once either endpoint already has `max_degree` lines, and accepted
/// when the centers are at most `max_distance` apart. The greedy order favors
/// lower indices; the result depends only on the order of `centers`.
///
/// # Arguments
///
/// * `centers` - Dot centers, indexed like the dots themselves
/// * `max_distance` - Longest allowed line, inclusive
/// * `max_degree` - Most lines any single dot may take part in
///
/// # Returns
///
/// The accepted pairs in the order they were accepted.
pub fn select_connections(
    centers: &[Point],
    max_distance: f32,
    max_degree: usize,
) -> Vec<Connection> {
    let mut degree = vec![0usize; centers.len()];
    let mut selected = Vec::new();

    if max_degree == 0 {
        return selected;
    }

    for i in 0..centers.len() {
        for j in (i + 1)..centers.len() {
            if degree[i] >= max_degree {
                break;
            }
            if degree[j] >= max_degree {
                continue;
            }
            if centers[i].distance(centers[j]) <= max_distance {
                selected.push(Connection::new(i, j));
                degree[i] += 1;
                degree[j] += 1;
            }
        }
    }

    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_two_close_dots_connect_once() {
        let centers = [Point::new(0.0, 0.0), Point::new(30.0, 40.0)];
        let selected = select_connections(&centers, 100.0, 1);
        assert_eq!(selected, vec![Connection::new(0, 1)]);
    }

    #[test]
    fn test_distance_limit_is_inclusive() {
        let centers = [Point::new(0.0, 0.0), Point::new(100.0, 0.0)];
        assert_eq!(select_connections(&centers, 100.0, 1).len(), 1);
        assert!(select_connections(&centers, 99.9, 1).is_empty());
    }

    #[test]
    fn test_greedy_order_prefers_low_indices() {
        // All three mutually close; degree cap 1 lets only (0, 1) through.
        let centers = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(5.0, 5.0),
        ];
        assert_eq!(
            select_connections(&centers, 50.0, 1),
            vec![Connection::new(0, 1)]
        );
        assert_eq!(
            select_connections(&centers, 50.0, 2),
            vec![
                Connection::new(0, 1),
                Connection::new(0, 2),
                Connection::new(1, 2)
            ]
        );
    }

    #[test]
    fn test_saturated_partner_is_skipped() {
        // 0-1 saturates dot 1; dot 2 then pairs with 3 instead of 1.
        let centers = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(20.0, 0.0),
            Point::new(30.0, 0.0),
        ];
        assert_eq!(
            select_connections(&centers, 15.0, 1),
            vec![Connection::new(0, 1), Connection::new(2, 3)]
        );
    }

    #[test]
    fn test_zero_degree_or_empty_input() {
        let centers = [Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        assert!(select_connections(&centers, 10.0, 0).is_empty());
        assert!(select_connections(&[], 10.0, 3).is_empty());
    }

    fn arb_centers() -> impl Strategy<Value = Vec<Point>> {
        prop::collection::vec(
            (0.0f32..400.0, 0.0f32..300.0).prop_map(|(x, y)| Point::new(x, y)),
            0..60,
        )
    }

    proptest! {
        #[test]
        fn degree_cap_is_respected(
            centers in arb_centers(),
            max_distance in 0.0f32..300.0,
            max_degree in 0usize..5,
        ) {
            let selected = select_connections(&centers, max_distance, max_degree);
            for index in 0..centers.len() {
                let degree = selected.iter().filter(|c| c.involves(index)).count();
                prop_assert!(degree <= max_degree);
            }
            for c in &selected {
                prop_assert!(c.a < c.b);
                prop_assert!(centers[c.a].distance(centers[c.b]) <= max_distance);
            }
        }

        #[test]
        fn selection_is_pure(
            centers in arb_centers(),
            max_distance in 0.0f32..300.0,
            max_degree in 1usize..5,
        ) {
            let copy = centers.clone();
            prop_assert_eq!(
                select_connections(&centers, max_distance, max_degree),
                select_connections(&copy, max_distance, max_degree)
            );
        }
    }
}
