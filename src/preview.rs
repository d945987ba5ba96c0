//! PNG previews of the generated tables.

use std::io::Write;
use crate::sampler::ColorSchemeTable;

/// Encode `table` as a `width` × rows RGB image, one row per data
/// sample (the sentinel is skipped and alpha is dropped).
pub fn write_png<W: Write>(w: W, table: &ColorSchemeTable, width: u32)
                           -> Result<(), png::EncodingError> {
    let data = table.data();
    let mut pixels = Vec::with_capacity(3 * width as usize * data.len());
    for c in data {
        for _ in 0 .. width {
            pixels.extend_from_slice(&[c.r, c.g, c.b]);
        }
    }
    let mut encoder = png::Encoder::new(w, width, data.len() as u32);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&pixels)?;
    writer.finish()
}
