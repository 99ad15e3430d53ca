use crate::pad::Pad;

/// Axis aligned bounding box of a set of pads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    /// Returns `None` when there are no pads, an empty set has no extent.
    pub fn from_pads(pads: &[Pad]) -> Option<Self> {
        let (first, remainder) = pads.split_first()?;

        let bounds = remainder.iter().fold(Bounds::new(first.x, first.y, first.x, first.y), |bounds, pad| {
            Bounds {
                min_x: bounds.min_x.min(pad.x),
                min_y: bounds.min_y.min(pad.y),
                max_x: bounds.max_x.max(pad.x),
                max_y: bounds.max_y.max(pad.y),
            }
        });

        Some(bounds)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}
