use clap::ValueEnum;
use output::OutputFormat;

/// Args decouple of CLI arg handling requirements from the internal data structures

#[derive(Debug, Clone, PartialEq)]
#[derive(ValueEnum)]
pub enum OutputFormatArg {
    #[value(name("gcode"))]
    GCode,
    #[value(name("postscript"))]
    PostScript,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(value: OutputFormatArg) -> Self {
        match value {
            OutputFormatArg::GCode => Self::GCode,
            OutputFormatArg::PostScript => Self::PostScript,
        }
    }
}
