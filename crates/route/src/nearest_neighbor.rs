use tracing::{trace, Level};
use crate::{permutation, Waypoint};

/// Reorders `items` in place into a short open route.
///
/// The first item stays first.  From there the route always steps to the closest item not yet
/// visited; when several are equally close the one appearing earliest in the input wins, so the
/// result only depends on the input.  Empty and single item slices are left as they are.
#[tracing::instrument(level = Level::DEBUG, skip(items), fields(count = items.len()))]
pub fn optimize_route<T: Waypoint>(items: &mut [T]) {
    let order = visiting_order(items);
    permutation::apply(items, &order);
}

/// Indices of `items` in visiting order.
pub fn visiting_order<T: Waypoint>(items: &[T]) -> Vec<usize> {
    let mut order = Vec::with_capacity(items.len());
    if items.is_empty() {
        return order;
    }

    // kept in input order, the tie-break relies on it.
    let mut unvisited: Vec<usize> = (1..items.len()).collect();

    let mut current = items[0].position();
    order.push(0);

    while !unvisited.is_empty() {
        let mut nearest = 0;
        let mut nearest_distance = current.distance_to(&items[unvisited[0]].position());

        for (candidate, &index) in unvisited.iter().enumerate().skip(1) {
            let distance = current.distance_to(&items[index].position());
            if distance < nearest_distance {
                nearest = candidate;
                nearest_distance = distance;
            }
        }

        let index = unvisited.remove(nearest);
        current = items[index].position();
        trace!("Next waypoint. index: {}, position: {}, distance: {:.3}", index, current, nearest_distance);

        order.push(index);
    }

    order
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use pads::{Pad, Point};
    use crate::route_length;
    use super::*;

    fn points(coordinates: &[(f64, f64)]) -> Vec<Point> {
        coordinates.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    /// Pseudo random but repeatable coordinates, on a coarse grid so that equal distances occur.
    fn scattered_pads(count: usize) -> Vec<Pad> {
        let mut seed: u64 = 0x2545_f491;
        (0..count).map(|index| {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let x = ((seed >> 33) % 40) as f64 * 0.5;
            let y = ((seed >> 17) % 40) as f64 * 0.5;
            Pad::new(x, y, index as f64)
        }).collect()
    }

    #[rstest]
    #[case::closer_point_first(
        &[(0.0, 0.0), (10.0, 0.0), (1.0, 0.0)],
        &[(0.0, 0.0), (1.0, 0.0), (10.0, 0.0)]
    )]
    #[case::tie_keeps_input_order(
        &[(0.0, 0.0), (5.0, 5.0), (5.0, -5.0)],
        &[(0.0, 0.0), (5.0, 5.0), (5.0, -5.0)]
    )]
    #[case::single_point(
        &[(3.0, 3.0)],
        &[(3.0, 3.0)]
    )]
    #[case::line_sweep(
        &[(0.0, 0.0), (30.0, 0.0), (10.0, 0.0), (20.0, 0.0)],
        &[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0), (30.0, 0.0)]
    )]
    #[case::start_is_anchored(
        &[(20.0, 0.0), (0.0, 0.0), (10.0, 0.0), (30.0, 0.0)],
        &[(20.0, 0.0), (10.0, 0.0), (0.0, 0.0), (30.0, 0.0)]
    )]
    pub fn optimize(#[case] input: &[(f64, f64)], #[case] expected: &[(f64, f64)]) {
        // given
        let mut items = points(input);

        // when
        optimize_route(&mut items);

        // then
        assert_eq!(items, points(expected));
    }

    #[test]
    pub fn empty() {
        // given
        let mut items: Vec<Pad> = vec![];

        // when
        optimize_route(&mut items);

        // then
        assert!(items.is_empty());
    }

    #[test]
    pub fn pad_fields_are_untouched() {
        // given
        let mut pads = vec![
            Pad { x: 0.0, y: 0.0, drill: 0.0, area: 1.0 },
            Pad { x: 10.0, y: 0.0, drill: 0.0, area: 2.0 },
            Pad { x: 1.0, y: 0.0, drill: 0.0, area: 3.0 },
        ];

        // when
        optimize_route(&mut pads);

        // then
        assert_eq!(pads, vec![
            Pad { x: 0.0, y: 0.0, drill: 0.0, area: 1.0 },
            Pad { x: 1.0, y: 0.0, drill: 0.0, area: 3.0 },
            Pad { x: 10.0, y: 0.0, drill: 0.0, area: 2.0 },
        ]);
    }

    #[test]
    pub fn duplicate_positions_keep_input_order() {
        // given
        let mut pads = vec![
            Pad::new(0.0, 0.0, 1.0),
            Pad::new(2.0, 0.0, 2.0),
            Pad::new(2.0, 0.0, 3.0),
            Pad::new(0.0, 0.0, 4.0),
        ];

        // when
        optimize_route(&mut pads);

        // then
        let areas: Vec<f64> = pads.iter().map(|pad| pad.area).collect();
        assert_eq!(areas, vec![1.0, 4.0, 2.0, 3.0]);
    }

    #[rstest]
    #[case(2)]
    #[case(17)]
    #[case(150)]
    pub fn is_a_permutation(#[case] count: usize) {
        // given
        let input = scattered_pads(count);
        let mut pads = input.clone();

        // when
        optimize_route(&mut pads);

        // then
        assert_eq!(pads.len(), input.len());
        assert_eq!(pads[0], input[0]);

        // the area is the input index, so it identifies each pad
        let mut areas: Vec<usize> = pads.iter().map(|pad| pad.area as usize).collect();
        areas.sort_unstable();
        assert_eq!(areas, (0..count).collect::<Vec<_>>());

        for pad in pads.iter() {
            assert_eq!(pad, &input[pad.area as usize]);
        }
    }

    #[rstest]
    #[case(17)]
    #[case(150)]
    pub fn every_step_goes_to_the_nearest_remaining_pad(#[case] count: usize) {
        // given
        let input = scattered_pads(count);
        let mut pads = input.clone();

        // when
        optimize_route(&mut pads);

        // then
        for i in 1..pads.len() {
            let previous = pads[i - 1].position();
            let chosen = &pads[i];
            let chosen_distance = previous.distance_to(&chosen.position());

            for remaining in pads[i + 1..].iter() {
                let distance = previous.distance_to(&remaining.position());
                assert!(chosen_distance <= distance);
                if distance == chosen_distance {
                    // area holds the input index
                    assert!(chosen.area < remaining.area);
                }
            }
        }
    }

    #[test]
    pub fn deterministic() {
        // given
        let input = scattered_pads(100);
        let mut first = input.clone();
        let mut second = input.clone();

        // when
        optimize_route(&mut first);
        optimize_route(&mut second);

        // then
        assert_eq!(first, second);
    }

    #[test]
    pub fn shortens_scattered_route() {
        // given
        let input = scattered_pads(150);
        let mut pads = input.clone();

        // when
        optimize_route(&mut pads);

        // then
        assert!(route_length(&pads) < route_length(&input));
    }

    #[test]
    pub fn visiting_order_indices() {
        // given
        let items = points(&[(0.0, 0.0), (30.0, 0.0), (10.0, 0.0), (20.0, 0.0)]);

        // expect
        assert_eq!(visiting_order(&items), vec![0, 2, 3, 1]);
    }
}
