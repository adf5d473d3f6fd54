//! Average and contrast colour probes.
//!
//! The contrast colour is the reconstructed colour furthest in chroma from
//! the average. It is found by brute force over an `N x N` lattice of point
//! samples, projected onto an opponent-colour plane:
//!
//! ```text
//! U = R - 0.5 G - 0.5 B
//! V = 0.866 G - 0.866 B
//! ```
//!
//! The lattice is scanned row by row (y outer, x inner) and the first probe
//! reaching a new maximum distance wins, so the result is deterministic.

use glam::Vec2;
use tracing::trace;

use crate::grid::CoefficientGrid;
use crate::rgb::Rgb;

/// Lattice size used by [`CoefficientGrid::contrast_linear`].
pub const DEFAULT_PROBES: usize = 10;

/// Projects a colour onto the `(U, V)` chroma plane.
#[inline]
pub fn chroma(rgb: Rgb) -> Vec2 {
    Vec2::new(
        rgb.r - 0.5 * rgb.g - 0.5 * rgb.b,
        0.866 * rgb.g - 0.866 * rgb.b,
    )
}

impl CoefficientGrid {
    /// Average colour, sRGB encoded.
    pub fn average_srgb(&self) -> [f32; 3] {
        self.average().to_srgb()
    }

    /// Contrast colour in linear light, using a 10x10 probe lattice.
    pub fn contrast_linear(&self) -> Rgb {
        self.contrast_linear_with(DEFAULT_PROBES)
    }

    /// Contrast colour in linear light, using a `probes x probes` lattice.
    ///
    /// With fewer than two probes per axis the lattice is undefined and the
    /// average colour is returned.
    pub fn contrast_linear_with(&self, probes: usize) -> Rgb {
        let average = self.average();
        if probes < 2 {
            return average;
        }

        let centre = chroma(average);
        let step = 1.0 / (probes - 1) as f32;
        let mut best = average;
        let mut best_distance = 0.0;

        for py in 0..probes {
            let y = py as f32 * step;
            for px in 0..probes {
                let x = px as f32 * step;
                let probe = self.point_sample(x, y);
                let distance = chroma(probe).distance(centre);
                if distance > best_distance {
                    best_distance = distance;
                    best = probe;
                }
            }
        }

        trace!(probes, best_distance, "contrast probe");
        best
    }

    /// Contrast colour, sRGB encoded.
    pub fn contrast_srgb(&self) -> [f32; 3] {
        self.contrast_linear().to_srgb()
    }
}
