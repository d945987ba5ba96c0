//! The four lookup tables generated for each color scheme.
//!
//! Every table starts with a transparent sentinel, which the heatmap
//! library uses for "below threshold", followed by one sample per row.
//! Rows map to `t = y / h`.  The alpha channel ramps up from 0 in the
//! first few percent of the table so that faint heat fades out.

use rgb::RGBA8;
use crate::ColorRange;
use crate::color::{Color, RGBColor, to_rgb255};
use crate::gradient::GradientTable;

/// Share of the nearest-keypoint color in the mixed tables.
pub const STAIRS_WEIGHT: f64 = 0.2;
/// Alpha reaches 255 at `t = 1 / SOFT_ALPHA_RAMP`.
pub const SOFT_ALPHA_RAMP: f64 = 30.;
/// Alpha ramp of the exponential table.
pub const EXP_ALPHA_RAMP: f64 = 100.;

/// RGB blend of a smooth range with a stepped one.
#[derive(Clone, Copy)]
pub struct Mixed<A, B> {
    smooth: A,
    steps: B,
    weight: f64,
}

impl<A, B> Mixed<A, B> {
    /// `weight` is the share of `steps` in the result.
    pub fn new(smooth: A, steps: B, weight: f64) -> Self {
        Mixed { smooth, steps, weight }
    }
}

impl<A: ColorRange, B: ColorRange> ColorRange for Mixed<A, B> {
    fn rgb(&self, t: f64) -> Color {
        self.smooth.rgb(t).blend_rgb(&self.steps.rgb(t), self.weight)
    }
}

/// Reparametrization `t ↦ 1 - (1 - t)¹⁰` of a range, which spends most
/// of the colors on the high end.  Meant for heatmaps whose maximum is
/// very "spiked".
#[derive(Clone, Copy)]
pub struct Exp<R>(pub R);

impl<R: ColorRange> ColorRange for Exp<R> {
    fn rgb(&self, t: f64) -> Color {
        let p = 1. - t;
        // Ten plain products, evaluated left to right.
        self.0.rgb(1. - p * p * p * p * p * p * p * p * p * p)
    }
}

/// Alpha of a ramp reaching 255 at `t = 1 / ramp`.  Truncates.
#[inline]
fn alpha(t: f64, ramp: f64) -> u8 { ((t * ramp).min(1.) * 255.) as u8 }

#[inline]
fn with_alpha(c: Color, a: u8) -> RGBA8 {
    let c = to_rgb255(c);
    RGBA8 { r: c.r, g: c.g, b: c.b, a }
}

/// The kinds of tables generated for a color scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sampler {
    /// One opaque sample per keypoint.
    Discrete,
    /// Smooth HCL gradient along the keypoints.
    Soft,
    /// The soft gradient with 20% of the nearest keypoint mixed in.
    Mixed,
    /// [`Sampler::Mixed`] after an order 10 reparametrization; the
    /// alpha ramp is steeper and uses the original `t`.
    MixedExp,
}

impl Sampler {
    /// All samplers, in the order they are emitted.
    pub const ALL: [Sampler; 4] =
        [Sampler::Discrete, Sampler::Soft, Sampler::Mixed, Sampler::MixedExp];

    /// Name used in generated identifiers and file names.
    pub fn name(self) -> &'static str {
        match self {
            Sampler::Discrete => "discrete",
            Sampler::Soft => "soft",
            Sampler::Mixed => "mixed",
            Sampler::MixedExp => "mixed_exp",
        }
    }

    /// Number of data rows (without the sentinel) for a table of
    /// height `h`.
    pub fn rows(self, table: &GradientTable, h: usize) -> usize {
        match self {
            Sampler::Discrete => table.len(),
            _ => h,
        }
    }

    /// Sample of row `y` (keypoint `y` for [`Sampler::Discrete`]).
    ///
    /// # Panics
    ///
    /// If `y` is not smaller than [`Self::rows`].
    pub fn sample(self, table: &GradientTable, h: usize, y: usize) -> RGBA8 {
        assert!(y < self.rows(table, h), "row {y} out of range");
        let t = y as f64 / h as f64;
        let mixed = Mixed::new(table.soft(), table.stairs(), STAIRS_WEIGHT);
        match self {
            Sampler::Discrete => with_alpha(table.keypoints()[y].color, 255),
            Sampler::Soft =>
                with_alpha(table.soft().rgb(t), alpha(t, SOFT_ALPHA_RAMP)),
            Sampler::Mixed =>
                with_alpha(mixed.rgb(t), alpha(t, SOFT_ALPHA_RAMP)),
            Sampler::MixedExp =>
                with_alpha(Exp(mixed).rgb(t), alpha(t, EXP_ALPHA_RAMP)),
        }
    }

    /// Compute the whole table for height `h`.
    pub fn table(self, table: &GradientTable, h: usize) -> ColorSchemeTable {
        let rows = self.rows(table, h);
        let mut samples = Vec::with_capacity(rows + 1);
        samples.push(ColorSchemeTable::SENTINEL);
        samples.extend((0 .. rows).map(|y| self.sample(table, h, y)));
        tracing::debug!(sampler = self.name(), rows, "Sampled table");
        ColorSchemeTable { samples }
    }
}

/// A lookup table as consumed by the heatmap library.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorSchemeTable {
    samples: Vec<RGBA8>, // Invariant: starts with SENTINEL
}

impl ColorSchemeTable {
    /// Transparent black, stored at index 0.
    pub const SENTINEL: RGBA8 = RGBA8 { r: 0, g: 0, b: 0, a: 0 };

    /// All samples, sentinel included.
    pub fn samples(&self) -> &[RGBA8] { &self.samples }

    /// The samples after the sentinel, one per row.
    pub fn data(&self) -> &[RGBA8] { &self.samples[1 ..] }
}
