use std::path::PathBuf;
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use cli::args::OutputFormatArg;
use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "rpt2paste")]
#[command(bin_name = "rpt2paste")]
#[command(version, about, long_about = None)]
pub(crate) struct Opts {
    /// KiCad footprint report
    #[arg(value_name = "RPT_FILE")]
    pub(crate) rpt_file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "gcode", value_name = "FORMAT")]
    pub(crate) format: OutputFormatArg,

    /// Output as PostScript, same as '--format postscript'
    #[arg(short = 'p', long, conflicts_with = "format")]
    pub(crate) postscript: bool,

    /// Output file, defaults to stdout
    #[arg(long, value_name = "FILE")]
    pub(crate) output: Option<PathBuf>,

    /// Dispenser settings file (JSON)
    #[arg(long, value_name = "FILE")]
    pub(crate) settings: Option<PathBuf>,

    /// Dispense in report order instead of optimizing the route
    #[arg(long)]
    pub(crate) keep_order: bool,

    /// Trace log file
    #[arg(long, num_args = 0..=1, default_missing_value = "trace.log")]
    pub(crate) trace: Option<PathBuf>,

    #[command(flatten)]
    pub(crate) verbose: Verbosity<InfoLevel>,
}

impl Opts {
    pub(crate) fn output_format(&self) -> OutputFormat {
        if self.postscript {
            OutputFormat::PostScript
        } else {
            self.format.clone().into()
        }
    }
}
