//! Command line of the `gradientgen` tool.

use std::path::PathBuf;
use clap::Parser;
use crate::{Error, Options};
use crate::color::parse_hex;
use crate::gradient::{GradientTable, Keypoint};

/// Generate heatmap colorschemes (C tables and PNG previews) from the
/// keypoints of a color gradient.
#[derive(Debug, Parser)]
#[command(name = "gradientgen", version, allow_negative_numbers = true)]
pub struct Args {
    /// The name of the colorscheme.
    #[arg(long, default_value = "unnamed")]
    pub name: String,

    /// Width of the pictures of the colorscheme.
    #[arg(long = "w", value_name = "UINT", default_value_t = 40,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Height (number of levels) of the colorscheme.
    #[arg(long = "h", value_name = "UINT", default_value_t = 1024,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Directory receiving the generated files.
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Log every generated file.
    #[arg(short, long)]
    pub verbose: bool,

    /// Gradient keypoints, as pairs of a color and a position in
    /// [0, 1]: `#000000 0.0 #ffffff 1.0`.
    #[arg(value_name = "HEX POS")]
    pub keypoints: Vec<String>,
}

impl Args {
    /// Parse and check the positional keypoints.
    pub fn gradient_table(&self) -> Result<GradientTable, Error> {
        GradientTable::new(parse_keypoints(&self.keypoints)?)
    }

    pub fn options(&self) -> Options {
        Options {
            name: self.name.clone(),
            width: self.width,
            height: self.height,
            out_dir: self.out_dir.clone(),
        }
    }
}

/// Parse a keypoint position, a decimal number in \[0, 1\].
pub fn parse_position(s: &str) -> Result<f64, Error> {
    let invalid = |reason: String| Error::InvalidPosition {
        input: s.to_string(), reason };
    let pos: f64 = s.trim().parse().map_err(|e| invalid(format!("{e}")))?;
    if !(0. ..= 1.).contains(&pos) {
        return Err(invalid("keypoints must lie within 0.0 and 1.0".to_string()))
    }
    Ok(pos)
}

/// Pair up `#RRGGBB position` arguments.  There must be an even number
/// of them, at least four.
pub fn parse_keypoints<S: AsRef<str>>(args: &[S]) -> Result<Vec<Keypoint>, Error> {
    if args.len() < 2 * 2 || args.len() % 2 != 0 {
        return Err(Error::InvalidKeypointCount(args.len()))
    }
    args.chunks(2)
        .map(|kp| Ok(Keypoint::new(parse_hex(kp[0].as_ref())?,
                                   parse_position(kp[1].as_ref())?)))
        .collect()
}
