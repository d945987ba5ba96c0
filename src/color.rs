//! Colors of the sRGB cube and their cylindrical HCL form.
//!
//! A [`Color`] carries gamma-encoded sRGB channels in \[0, 1\].  Blending
//! happens in [`Hcl`], the polar form of CIE L\*a\*b\* with a D65 white
//! point, which gives much smoother ramps than blending the channels.

use rgb::{RGB, RGB8};
use crate::{ColorRange, Error};

/// A color of the RGB unit cube (gamma-encoded sRGB).
pub type Color = RGB<f64>;

/// Parse a color literal `#RRGGBB` (hex digits in either case).
///
/// # Example
///
/// ```
/// use gradientgen::color::{parse_hex, to_rgb255};
/// let c = parse_hex("#ff8000").unwrap();
/// assert_eq!(to_rgb255(c), rgb::RGB8::new(255, 128, 0));
/// ```
pub fn parse_hex(s: &str) -> Result<Color, Error> {
    let digits = s.strip_prefix('#')
        .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
        .ok_or_else(|| Error::InvalidColor(s.to_string()))?;
    let channel = |i: usize| u8::from_str_radix(&digits[i .. i + 2], 16)
        .map_err(|_| Error::InvalidColor(s.to_string()));
    let c = RGB8 { r: channel(0)?, g: channel(2)?, b: channel(4)? };
    Ok(Color::from_rgb8(c))
}

/// Convert to 24-bit sRGB, rounding each channel to the nearest byte.
#[inline]
pub fn to_rgb255(c: Color) -> RGB8 { RGB8::from_rgb(c) }

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green and blue components of the color (in
    /// \[0, 1\], possibly outside for out-of-gamut colors).
    fn to_rgb(&self) -> Color;

    /// Create a color from its RGB components (in \[0, 1\]).
    fn from_rgb(rgb: Color) -> Self;

    /// Create a color from 24-bit sRGB.
    fn from_rgb8(c: RGB8) -> Self {
        const F: f64 = 1. / 255.;
        Self::from_rgb(RGB { r: c.r as f64 * F, g: c.g as f64 * F,
                             b: c.b as f64 * F })
    }

    /// Cylindrical HCL coordinates of the color.
    fn to_hcl(&self) -> Hcl { Hcl::from_rgb(self.to_rgb()) }

    /// Return the HCL gradient from this color to `c1`, turning along
    /// the shorter arc of the hue circle.
    ///
    /// # Example
    ///
    /// ```
    /// use gradientgen::{ColorRange, color::{RGBColor, parse_hex}};
    /// let red = parse_hex("#ff0000").unwrap();
    /// let blue = parse_hex("#0000ff").unwrap();
    /// let c = red.gradient(&blue).rgb(0.5);
    /// ```
    fn gradient(&self, c1: &Self) -> Gradient {
        Gradient::new(self.to_hcl(), c1.to_hcl())
    }

    /// Blend towards `c1` in HCL space; `t == 0.` gives `self`.
    /// The result is clamped to the RGB cube.
    fn blend_hcl(&self, c1: &Self, t: f64) -> Self {
        Self::from_rgb(self.gradient(c1).rgb(t))
    }

    /// Blend towards `c1` channel by channel.
    fn blend_rgb(&self, c1: &Self, t: f64) -> Self {
        let a = self.to_rgb();
        let b = c1.to_rgb();
        Self::from_rgb(RGB { r: a.r + t * (b.r - a.r),
                             g: a.g + t * (b.g - a.g),
                             b: a.b + t * (b.b - a.b) })
    }

    /// Clamp every channel to \[0, 1\].
    fn clamped(&self) -> Self {
        let c = self.to_rgb();
        Self::from_rgb(RGB { r: c.r.clamp(0., 1.), g: c.g.clamp(0., 1.),
                             b: c.b.clamp(0., 1.) })
    }
}

impl RGBColor for Color {
    #[inline]
    fn to_rgb(&self) -> Color { *self }

    #[inline]
    fn from_rgb(c: Color) -> Self { c }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgb(&self) -> Color { Color::from_rgb8(*self) }

    #[inline]
    fn from_rgb(c: Color) -> Self {
        let byte = |v: f64| (v.clamp(0., 1.) * 255. + 0.5) as u8;
        RGB8 { r: byte(c.r), g: byte(c.g), b: byte(c.b) }
    }
}

/// D65 reference white.
const WHITE: [f64; 3] = [0.95047, 1.00000, 1.08883];
const EPS0: f64 = 6. / 29.;
const EPS: f64 = EPS0 * EPS0 * EPS0;
/// Below this chroma the hue is meaningless and set to 0.
const ACHROMATIC: f64 = 1e-4;

/// A color in cylindrical CIE L\*a\*b\* coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hcl {
    /// Hue in degrees, in \[0, 360).
    pub h: f64,
    /// Chroma, ≥ 0.
    pub c: f64,
    /// Luminance, 0 (black) to 1 (white).
    pub l: f64,
}

fn linearize(v: f64) -> f64 {
    if v <= 0.04045 { v / 12.92 } else { ((v + 0.055) / 1.055).powf(2.4) }
}

fn delinearize(v: f64) -> f64 {
    if v <= 0.0031308 { 12.92 * v } else { 1.055 * v.powf(1. / 2.4) - 0.055 }
}

fn lab_f(t: f64) -> f64 {
    if t > EPS { t.cbrt() } else { t / 3. * 29. / 6. * 29. / 6. + 4. / 29. }
}

fn lab_finv(t: f64) -> f64 {
    if t > EPS0 { t * t * t } else { 3. * EPS0 * EPS0 * (t - 4. / 29.) }
}

impl Hcl {
    pub fn from_rgb(c: Color) -> Hcl {
        let (r, g, b) = (linearize(c.r), linearize(c.g), linearize(c.b));
        let x = 0.4124564 * r + 0.3575761 * g + 0.1804375 * b;
        let y = 0.2126729 * r + 0.7151522 * g + 0.0721750 * b;
        let z = 0.0193339 * r + 0.1191920 * g + 0.9503041 * b;
        let fy = lab_f(y / WHITE[1]);
        let l = 1.16 * fy - 0.16;
        let a = 5. * (lab_f(x / WHITE[0]) - fy);
        let b = 2. * (fy - lab_f(z / WHITE[2]));
        let c = a.hypot(b);
        let h = if c > ACHROMATIC {
            (b.atan2(a).to_degrees() + 360.) % 360.
        } else { 0. };
        Hcl { h, c, l }
    }

    /// Convert back to RGB.  The result may lie outside of the unit
    /// cube; see [`RGBColor::clamped`].
    pub fn to_rgb(&self) -> Color {
        let h = self.h.to_radians();
        let a = self.c * h.cos();
        let b = self.c * h.sin();
        let l = (self.l + 0.16) / 1.16;
        let x = WHITE[0] * lab_finv(l + a / 5.);
        let y = WHITE[1] * lab_finv(l);
        let z = WHITE[2] * lab_finv(l - b / 2.);
        let r = 3.2404542 * x - 1.5371385 * y - 0.4985314 * z;
        let g = -0.9692660 * x + 1.8760108 * y + 0.0415560 * z;
        let b = 0.0556434 * x - 0.2040259 * y + 1.0572252 * z;
        RGB { r: delinearize(r), g: delinearize(g), b: delinearize(b) }
    }
}

/// Gradient between two colors in HCL space.
///
/// Created by [`RGBColor::gradient`].  See the [`ColorRange`] trait
/// for methods.
#[derive(Clone, Copy, Debug)]
pub struct Gradient {
    c0: Hcl, // first color
    dc: Hcl, // last - first color, hue along the shorter arc
}

impl Gradient {
    pub fn new(c0: Hcl, c1: Hcl) -> Self {
        // Signed hue difference in [-180, 180); a half turn goes up.
        let dh = ((c1.h - c0.h) % 360. + 540.) % 360. - 180.;
        let dh = if dh == -180. { 180. } else { dh };
        Gradient { c0, dc: Hcl { h: dh, c: c1.c - c0.c, l: c1.l - c0.l } }
    }

    /// HCL coordinates at `t` ∈ \[0, 1\] (not checked).
    pub fn hcl(&self, t: f64) -> Hcl {
        Hcl { h: (self.c0.h + t * self.dc.h + 360.) % 360.,
              c: self.c0.c + t * self.dc.c,
              l: self.c0.l + t * self.dc.l }
    }
}

impl ColorRange for Gradient {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\], clamped to
    /// the RGB cube.  `t == 0.` gives the first color and `t == 1.`
    /// the second.
    fn rgb(&self, t: f64) -> Color { self.hcl(t).to_rgb().clamped() }
}
