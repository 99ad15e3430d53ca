//! Visiting order for the dispensing head.
//!
//! Finding the shortest route through all pads is the travelling salesman problem; a greedy
//! nearest-neighbor walk is a good enough approximation and keeps the result deterministic.

pub mod nearest_neighbor;
mod permutation;

use pads::{Pad, Point};

pub use nearest_neighbor::optimize_route;

/// Anything with a position on the board that can be put on a route.
pub trait Waypoint {
    fn position(&self) -> Point;
}

impl Waypoint for Pad {
    fn position(&self) -> Point {
        Pad::position(self)
    }
}

impl Waypoint for Point {
    fn position(&self) -> Point {
        *self
    }
}

/// Length of the open path visiting the items in their current order.
pub fn route_length<T: Waypoint>(items: &[T]) -> f64 {
    items.windows(2)
        .map(|pair| pair[0].position().distance_to(&pair[1].position()))
        .sum()
}
