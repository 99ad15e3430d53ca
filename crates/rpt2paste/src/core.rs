use std::fs::File;
use std::io::{BufWriter, Write};
use anyhow::Context;
use tracing::{debug, info};
use output::{DispenserSettings, RenderError};
use crate::opts::Opts;

pub(crate) fn run(opts: &Opts) -> anyhow::Result<()> {
    let settings = match &opts.settings {
        Some(settings_path) => output::settings::load(settings_path)?,
        None => DispenserSettings::default(),
    };
    debug!("Settings: {:?}", settings);

    let collected = rpt::load_pads(&opts.rpt_file)?;
    let mut pads = collected.pads;

    info!("Loaded {} pads", pads.len());
    if collected.through_hole > 0 {
        info!("Skipped {} through-hole pads", collected.through_hole);
    }

    // fail before an output file gets created or truncated
    if pads.is_empty() {
        return Err(RenderError::NoPads.into());
    }

    if opts.keep_order {
        info!("Keeping report order. route length: {:.1}mm", route::route_length(&pads));
    } else {
        let original_length = route::route_length(&pads);
        route::optimize_route(&mut pads);
        info!("Optimized route. route length: {:.1}mm, was: {:.1}mm", route::route_length(&pads), original_length);
    }

    let format = opts.output_format();
    let renderer = format.renderer(&settings);

    let mut out: Box<dyn Write> = match &opts.output {
        Some(output_path) => {
            info!("Writing {}. file: '{}'", format, output_path.display());
            let file = File::create(output_path)
                .with_context(|| format!("Error creating output. file: {}", output_path.display()))?;
            Box::new(BufWriter::new(file))
        },
        None => Box::new(std::io::stdout().lock()),
    };

    output::render(&pads, renderer.as_ref(), &settings, &mut out)?;

    info!("Dispensed {} pads.", pads.len());

    Ok(())
}
