use crate::point::Point;

/// A paste dispensing target.
///
/// Coordinates are absolute and in millimeters, `area` is in mm² and only used to derive
/// the amount of paste to dispense.  A non-zero `drill` marks a through-hole pad.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Pad {
    pub x: f64,
    pub y: f64,
    pub drill: f64,
    pub area: f64,
}

impl Pad {
    pub fn new(x: f64, y: f64, area: f64) -> Self {
        Self { x, y, drill: 0.0, area }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn is_through_hole(&self) -> bool {
        self.drill != 0.0
    }
}
