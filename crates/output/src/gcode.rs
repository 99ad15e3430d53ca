use std::io::Write;
use pads::Bounds;
use crate::{DispenserSettings, PadRenderer};

/// G-code for a dispenser driven by the fan output: `M106` opens the valve, `M107` closes it.
pub struct GCodeRenderer {
    settings: DispenserSettings,
}

impl GCodeRenderer {
    pub fn new(settings: DispenserSettings) -> Self {
        Self { settings }
    }
}

impl PadRenderer for GCodeRenderer {
    fn begin(&self, out: &mut dyn Write, _bounds: &Bounds) -> std::io::Result<()> {
        let s = &self.settings;

        // the machine is expected to be homed already, X0 Y0 may not even be reachable.
        writeln!(out, "G21")?;
        writeln!(out, "G0 F{}", s.travel_feed_rate)?;
        writeln!(out, "G1 F{}", s.dispense_feed_rate)?;
        writeln!(out, "G0 Z{}", s.z_high_up)
    }

    fn pad(&self, out: &mut dyn Write, x: f64, y: f64, area: f64) -> std::io::Result<()> {
        let s = &self.settings;

        writeln!(out, "G0 X{:.3} Y{:.3} Z{}", x, y, s.z_hover)?;
        writeln!(out, "G1 Z{}", s.z_dispensing)?;
        writeln!(out, "M106")?;
        writeln!(out, "G4 P{:.1}", s.dwell_ms(area))?;
        writeln!(out, "M107")?;
        writeln!(out, "G1 Z{}", s.z_high_up)
    }

    fn finish(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, ";done")
    }
}
