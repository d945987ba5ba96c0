//! Color schemes for heatmaps, generated from gradient keypoints.
//!
//! A [`GradientTable`] of `(color, position)` keypoints is sampled into
//! four lookup tables (see [`Sampler`]):
//!
//! - `discrete`: the keypoint colors only;
//! - `soft`: a smooth HCL gradient through the keypoints;
//! - `mixed`: the soft gradient with the nearest keypoint mixed in;
//! - `mixed_exp`: the mixed gradient, compressed towards the high end.
//!
//! [`create_colorschemes`] writes them as a C header and source for
//! the heatmap library, together with one PNG preview per table.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

pub mod cli;
pub mod color;
pub mod emit;
mod error;
pub mod gradient;
pub mod preview;
pub mod sampler;

pub use color::{Color, RGBColor};
pub use error::Error;
pub use gradient::{GradientTable, Keypoint};
pub use sampler::{ColorSchemeTable, Sampler};

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn rgb(&self, t: f64) -> Color;
}

/// What to generate and where.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Name of the scheme, used in file names and C identifiers.
    pub name: String,
    /// Width of the PNG previews.
    pub width: u32,
    /// Number of rows of the non-discrete tables.
    pub height: u32,
    /// Directory receiving the files.
    pub out_dir: PathBuf,
}

impl Default for Options {
    fn default() -> Self {
        Options { name: "unnamed".to_string(), width: 40, height: 1024,
                  out_dir: PathBuf::from(".") }
    }
}

/// Compute the four tables of `table` in emission order.
pub fn colorschemes(table: &GradientTable, height: usize)
                    -> Vec<(Sampler, ColorSchemeTable)> {
    Sampler::ALL.iter().map(|&s| (s, s.table(table, height))).collect()
}

fn create(path: &Path) -> Result<BufWriter<File>, Error> {
    Ok(BufWriter::new(File::create(path).map_err(Error::io(path))?))
}

fn write_text(path: &Path,
              write: impl FnOnce(&mut BufWriter<File>) -> std::io::Result<()>)
              -> Result<(), Error> {
    let mut fh = create(path)?;
    write(&mut fh).and_then(|()| fh.flush()).map_err(Error::io(path))?;
    info!(path = %path.display(), "Wrote");
    Ok(())
}

/// Write `<name>.h`, `<name>.c` and `<name>_<sampler>.png` for the four
/// samplers into `options.out_dir`, and return the paths written.
///
/// Nothing is written when the name or the dimensions are invalid.  On
/// an I/O error, the files written so far stay on disk.
pub fn create_colorschemes(table: &GradientTable, options: &Options)
                           -> Result<Vec<PathBuf>, Error> {
    let name = options.name.as_str();
    emit::check_name(name)?;
    if options.width == 0 || options.height == 0 {
        return Err(Error::InvalidDimensions {
            width: options.width, height: options.height })
    }
    let tables = colorschemes(table, options.height as usize);
    let mut written = Vec::with_capacity(2 + tables.len());

    let h_path = options.out_dir.join(format!("{name}.h"));
    write_text(&h_path, |fh| emit::write_header(fh, name))?;
    written.push(h_path);

    let c_path = options.out_dir.join(format!("{name}.c"));
    write_text(&c_path, |fh| emit::write_source(fh, name, &tables))?;
    written.push(c_path);

    for (s, t) in &tables {
        let path = options.out_dir.join(format!("{name}_{}.png", s.name()));
        let mut fh = create(&path)?;
        preview::write_png(&mut fh, t, options.width)
            .map_err(|source| Error::Png { path: path.clone(), source })?;
        fh.flush().map_err(Error::io(&path))?;
        info!(path = %path.display(), rows = t.data().len(), "Wrote");
        written.push(path);
    }
    Ok(written)
}
