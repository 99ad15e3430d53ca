use std::f64::consts::PI;
use std::io::Write;
use pads::Bounds;
use crate::PadRenderer;

const MM_TO_POINT: f64 = 1.0 / 25.4 * 72.0;

/// Margin around the pads (mm)
const MARGIN: f64 = 3.0;

/// A preview of the route: a circle for each pad, connected by thin lines in visiting order.
pub struct PostScriptRenderer;

impl PadRenderer for PostScriptRenderer {
    fn begin(&self, out: &mut dyn Write, bounds: &Bounds) -> std::io::Result<()> {
        writeln!(out, "%!PS-Adobe-3.0")?;
        writeln!(out, "%%BoundingBox: {:.0} {:.0} {:.0} {:.0}",
            (bounds.min_x - MARGIN) * MM_TO_POINT,
            (bounds.min_y - MARGIN) * MM_TO_POINT,
            (bounds.max_x + MARGIN) * MM_TO_POINT,
            (bounds.max_y + MARGIN) * MM_TO_POINT,
        )?;
        writeln!(out, "% PastePad. Stack: <diameter>")?;
        writeln!(out, "/pp {{ 1 setlinewidth 0 360 arc stroke }} def")?;
        writeln!(out, "% Move. Stack: <x> <y>")?;
        writeln!(out, "/m {{ 0.1 setlinewidth lineto currentpoint stroke }} def")?;
        write!(out, "0 0 moveto ")
    }

    fn pad(&self, out: &mut dyn Write, x: f64, y: f64, area: f64) -> std::io::Result<()> {
        let x = x * MM_TO_POINT;
        let y = y * MM_TO_POINT;
        let radius = (area / PI).sqrt();

        writeln!(out, "{:.3} {:.3} m {:.3} pp ", x, y, radius)?;
        writeln!(out, "{:.3} {:.3} moveto", x, y)
    }

    fn finish(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, "showpage")
    }
}
