//! Turns an ordered list of pads into dispenser output.

pub mod gcode;
pub mod postscript;
pub mod settings;

use std::fmt::{Display, Formatter};
use std::io::Write;
use thiserror::Error;
use tracing::{debug, Level};
use pads::{Bounds, Pad};

pub use gcode::GCodeRenderer;
pub use postscript::PostScriptRenderer;
pub use settings::DispenserSettings;

/// Writes one kind of output.  Coordinates passed in are machine coordinates in millimeters.
pub trait PadRenderer {
    fn begin(&self, out: &mut dyn Write, bounds: &Bounds) -> std::io::Result<()>;
    fn pad(&self, out: &mut dyn Write, x: f64, y: f64, area: f64) -> std::io::Result<()>;
    fn finish(&self, out: &mut dyn Write) -> std::io::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    GCode,
    PostScript,
}

impl OutputFormat {
    pub fn renderer(&self, settings: &DispenserSettings) -> Box<dyn PadRenderer> {
        match self {
            OutputFormat::GCode => Box::new(GCodeRenderer::new(settings.clone())),
            OutputFormat::PostScript => Box::new(PostScriptRenderer),
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GCode => write!(f, "G-code"),
            Self::PostScript => write!(f, "PostScript"),
        }
    }
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("No pads to dispense")]
    NoPads,

    #[error("Unable to write output. cause: {0}")]
    Io(#[from] std::io::Error),
}

/// Renders the pads in the given order.
///
/// The board is moved so that its smallest x coordinate lands on `offset_x`.  Report
/// coordinates have y pointing down, so y is mirrored at the largest y, which then lands on
/// `offset_y`.
#[tracing::instrument(level = Level::DEBUG, skip_all, fields(count = pads.len()))]
pub fn render(pads: &[Pad], renderer: &dyn PadRenderer, settings: &DispenserSettings, out: &mut dyn Write) -> Result<(), RenderError> {
    let bounds = Bounds::from_pads(pads).ok_or(RenderError::NoPads)?;
    debug!("Board bounds. bounds: {:?}", bounds);

    let machine_bounds = Bounds::new(
        settings.offset_x,
        settings.offset_y,
        bounds.width() + settings.offset_x,
        bounds.height() + settings.offset_y,
    );

    renderer.begin(out, &machine_bounds)?;

    for pad in pads {
        renderer.pad(
            out,
            pad.x + settings.offset_x - bounds.min_x,
            bounds.max_y - pad.y + settings.offset_y,
            pad.area,
        )?;
    }

    renderer.finish(out)?;
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use super::*;

    fn render_to_string(pads: &[Pad], format: OutputFormat, settings: &DispenserSettings) -> Result<String, RenderError> {
        let mut buffer: Vec<u8> = vec![];
        let renderer = format.renderer(settings);
        render(pads, renderer.as_ref(), settings, &mut buffer)?;

        Ok(String::from_utf8(buffer).expect("utf8"))
    }

    fn pads() -> Vec<Pad> {
        vec![
            Pad::new(10.0, 20.0, 1.0),
            Pad::new(12.0, 25.0, 0.5),
        ]
    }

    #[test]
    pub fn gcode() {
        // given
        let settings = DispenserSettings::default();

        // and
        let expected_output = indoc! {"
            G21
            G0 F20000
            G1 F4000
            G0 Z4
            G0 X50.000 Y55.000 Z2
            G1 Z0.6
            M106
            G4 P75.0
            M107
            G1 Z4
            G0 X52.000 Y50.000 Z2
            G1 Z0.6
            M106
            G4 P62.5
            M107
            G1 Z4
            ;done
        "};

        // when
        let output = render_to_string(&pads(), OutputFormat::GCode, &settings).expect("ok");

        // then
        assert_eq!(output, expected_output);
    }

    #[test]
    pub fn postscript() {
        // given
        let settings = DispenserSettings::default();

        // and
        let expected_output = indoc! {"
            %!PS-Adobe-3.0
            %%BoundingBox: 133 133 156 164
            % PastePad. Stack: <diameter>
            /pp { 1 setlinewidth 0 360 arc stroke } def
            % Move. Stack: <x> <y>
            /m { 0.1 setlinewidth lineto currentpoint stroke } def
            0 0 moveto 141.732 155.906 m 0.564 pp 
            141.732 155.906 moveto
            147.402 141.732 m 0.399 pp 
            147.402 141.732 moveto
            showpage
        "};

        // when
        let output = render_to_string(&pads(), OutputFormat::PostScript, &settings).expect("ok");

        // then
        assert_eq!(output, expected_output);
    }

    #[test]
    pub fn offsets() {
        // given
        let settings = DispenserSettings { offset_x: 0.0, offset_y: 10.0, ..DispenserSettings::default() };

        // when
        let output = render_to_string(&pads(), OutputFormat::GCode, &settings).expect("ok");

        // then
        assert!(output.contains("G0 X0.000 Y15.000 Z2\n"));
        assert!(output.contains("G0 X2.000 Y10.000 Z2\n"));
    }

    #[test]
    pub fn no_pads() {
        // given
        let settings = DispenserSettings::default();

        // when
        let result = render_to_string(&[], OutputFormat::GCode, &settings);

        // then
        assert!(matches!(result, Err(RenderError::NoPads)));
    }
}
