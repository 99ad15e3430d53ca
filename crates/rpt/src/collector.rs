use std::f64::consts::PI;
use tracing::{trace, warn};
use pads::Pad;
use crate::parser::ParseEventHandler;

/// Reports use inches, pads are in millimeters.
pub const MM_PER_INCH: f64 = 25.4;

#[derive(Debug, Default, PartialEq)]
pub struct CollectedPads {
    /// Surface-mount pads, in report order.
    pub pads: Vec<Pad>,
    /// Number of through-hole pads that were skipped.
    pub through_hole: usize,
}

/// Builds absolute pad coordinates from parse events.
///
/// Pad positions in a report are relative to their component, which has its own origin and
/// orientation.  Through-hole pads are dropped, they don't get paste.
#[derive(Debug, Default)]
pub struct PadCollector {
    origin_x: f64,
    origin_y: f64,
    /// Component rotation in radians.
    angle: f64,

    /// The pad being read, if between `$PAD` and `$EndPAD`.
    current: Option<Pad>,

    collected: CollectedPads,
}

impl PadCollector {
    pub fn finish(self) -> CollectedPads {
        if self.current.is_some() {
            warn!("Report ended inside a pad, pad discarded");
        }
        self.collected
    }

    fn rotate(&self, x: f64, y: f64) -> (f64, f64) {
        let (sin, cos) = self.angle.sin_cos();
        (x * cos - y * sin, x * sin + y * cos)
    }
}

impl ParseEventHandler for PadCollector {
    fn start_component(&mut self) {
        if self.current.take().is_some() {
            warn!("Component started inside a pad, pad discarded");
        }
        self.origin_x = 0.0;
        self.origin_y = 0.0;
        self.angle = 0.0;
    }

    fn end_component(&mut self) {}

    fn start_pad(&mut self) {
        if self.current.replace(Pad::default()).is_some() {
            warn!("Pad started inside a pad, previous pad discarded");
        }
    }

    fn end_pad(&mut self) {
        match self.current.take() {
            Some(pad) if pad.is_through_hole() => {
                trace!("Skipping through-hole pad. pad: {:?}", pad);
                self.collected.through_hole += 1;
            },
            Some(pad) => {
                trace!("Collected pad. pad: {:?}", pad);
                self.collected.pads.push(pad);
            },
            None => warn!("Pad end without pad start, ignored"),
        }
    }

    fn position(&mut self, x: f64, y: f64) {
        if self.current.is_none() {
            self.origin_x = x;
            self.origin_y = y;
            return;
        }

        let (x, y) = self.rotate(x, y);
        if let Some(pad) = self.current.as_mut() {
            pad.x = (self.origin_x + x) * MM_PER_INCH;
            pad.y = (self.origin_y + y) * MM_PER_INCH;
        }
    }

    fn size(&mut self, width: f64, height: f64) {
        if let Some(pad) = self.current.as_mut() {
            pad.area = width * MM_PER_INCH * MM_PER_INCH * height;
        }
    }

    fn drill(&mut self, diameter: f64) {
        match self.current.as_mut() {
            Some(pad) => pad.drill = diameter,
            None => warn!("Drill outside of a pad, ignored. diameter: {}", diameter),
        }
    }

    fn orientation(&mut self, angle: f64) {
        // pad orientation doesn't change the pad position
        if self.current.is_none() {
            // the report turns the other way round
            self.angle = -PI * angle / 180.0;
        }
    }
}
