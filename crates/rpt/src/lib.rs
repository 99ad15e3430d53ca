//! KiCad footprint report (`.rpt`) reading.

pub mod collector;
pub mod parser;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use anyhow::Context;
use tracing::{info, Level};

pub use collector::{CollectedPads, PadCollector};
pub use parser::{parse, ParseError, ParseEventHandler};

/// Loads the surface-mount pads of a report file.
#[tracing::instrument(level = Level::DEBUG)]
pub fn load_pads(report_path: &Path) -> anyhow::Result<CollectedPads> {
    info!("Loading report. file: '{}'", report_path.display());

    let file = File::open(report_path)
        .with_context(|| format!("Error reading report. file: {}", report_path.display()))?;

    let mut collector = PadCollector::default();
    parse(BufReader::new(file), &mut collector)
        .with_context(|| format!("Error parsing report. file: {}", report_path.display()))?;

    Ok(collector.finish())
}
