//! Gradient keypoints and the two lookups the samplers build on.

use crate::{ColorRange, Error};
use crate::color::{Color, RGBColor};

/// A color anchored at a position in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keypoint {
    pub color: Color,
    pub pos: f64,
}

impl Keypoint {
    pub const fn new(color: Color, pos: f64) -> Self { Keypoint { color, pos } }
}

/// The keypoints of a color gradient, sorted by position.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientTable {
    // Invariant: length ≥ 2, positions in [0, 1] and non-decreasing.
    keypoints: Vec<Keypoint>,
}

impl GradientTable {
    /// Check the keypoints and build the table.
    ///
    /// A table needs at least two keypoints, every position in \[0, 1\]
    /// and positions that never decrease.  A short table is reported
    /// as [`Error::InvalidKeypointCount`] counting two arguments per
    /// keypoint, as on the command line.
    pub fn new(keypoints: Vec<Keypoint>) -> Result<Self, Error> {
        if keypoints.len() < 2 {
            return Err(Error::InvalidKeypointCount(2 * keypoints.len()))
        }
        for (index, k) in keypoints.iter().enumerate() {
            if !(0. ..= 1.).contains(&k.pos) {
                return Err(Error::InvalidPosition {
                    input: k.pos.to_string(),
                    reason: "keypoints must lie within 0.0 and 1.0".to_string(),
                })
            }
            if index > 0 && k.pos < keypoints[index - 1].pos {
                return Err(Error::UnsortedPositions {
                    index, pos: k.pos, prev: keypoints[index - 1].pos })
            }
        }
        Ok(GradientTable { keypoints })
    }

    /// Returns the keypoints, in order.
    pub fn keypoints(&self) -> &[Keypoint] { &self.keypoints }

    /// Returns the number of keypoints (at least 2).
    pub fn len(&self) -> usize { self.keypoints.len() }

    /// Always `false`: a table has at least two keypoints.
    pub fn is_empty(&self) -> bool { self.keypoints.is_empty() }

    fn last(&self) -> Color { self.keypoints[self.keypoints.len() - 1].color }

    /// HCL blend of the two keypoints around `t`.
    ///
    /// The first interval `[pos[i], pos[i+1]]` containing `t` wins, so
    /// for repeated positions the earlier keypoint is used.  At or past
    /// the last keypoint, and also before the first one, this returns
    /// the last keypoint color.
    pub fn interpolated(&self, t: f64) -> Color {
        for k in self.keypoints.windows(2) {
            let (k0, k1) = (&k[0], &k[1]);
            if k0.pos <= t && t <= k1.pos {
                let span = k1.pos - k0.pos;
                if span == 0. { return k0.color }
                return k0.color.blend_hcl(&k1.color, (t - k0.pos) / span)
            }
        }
        self.last()
    }

    /// Color of the keypoint closest to `t`.  The value switches to the
    /// next keypoint at the midpoint between two positions.
    pub fn nearest(&self, t: f64) -> Color {
        self.keypoints.windows(2)
            .find(|k| t < (k[0].pos + k[1].pos) * 0.5)
            .map_or_else(|| self.last(), |k| k[0].color)
    }

    /// The smooth gradient through the keypoints, see [`Self::interpolated`].
    pub fn soft(&self) -> Soft<'_> { Soft(self) }

    /// The stairs-like gradient, see [`Self::nearest`].
    pub fn stairs(&self) -> Stairs<'_> { Stairs(self) }
}

/// Smooth gradient view of a [`GradientTable`].
#[derive(Clone, Copy)]
pub struct Soft<'a>(&'a GradientTable);

impl ColorRange for Soft<'_> {
    fn rgb(&self, t: f64) -> Color { self.0.interpolated(t) }
}

/// Nearest-keypoint view of a [`GradientTable`].
#[derive(Clone, Copy)]
pub struct Stairs<'a>(&'a GradientTable);

impl ColorRange for Stairs<'_> {
    fn rgb(&self, t: f64) -> Color { self.0.nearest(t) }
}
