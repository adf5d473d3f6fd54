//! Algebraic properties that must hold for every coefficient grid.
//!
//! Grids are generated deterministically across all shapes from 1x1 to 9x9
//! with DC terms inside the unit cube and AC terms of decaying magnitude,
//! which is what decoded placeholders look like in practice.

use approx::assert_abs_diff_eq;
use blurkit_core::metrics::DEFAULT_MIDPOINT;
use blurkit_core::prelude::*;
use rand::{Rng, SeedableRng, rngs::StdRng};

fn grid(h: usize, v: usize, seed: u64) -> CoefficientGrid {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut coefficients = Vec::with_capacity(h * v);
    for row in 0..v {
        for col in 0..h {
            let c = if row == 0 && col == 0 {
                Rgb::new(
                    rng.gen_range(0.15..0.85),
                    rng.gen_range(0.15..0.85),
                    rng.gen_range(0.15..0.85),
                )
            } else {
                let scale = 0.2 / (1 + row + col) as f32;
                Rgb::new(
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..1.0),
                ) * scale
            };
            coefficients.push(c);
        }
    }
    CoefficientGrid::new(h, v, coefficients).unwrap()
}

fn all_grids() -> impl Iterator<Item = CoefficientGrid> {
    (1..=MAX_COMPONENTS).flat_map(|h| {
        (1..=MAX_COMPONENTS).map(move |v| grid(h, v, (h * 31 + v) as u64))
    })
}

const POSITIONS: [(f32, f32); 6] = [
    (0.0, 0.0),
    (1.0, 1.0),
    (0.5, 0.5),
    (0.13, 0.87),
    (0.91, 0.27),
    (0.0, 0.66),
];

#[test]
fn zero_extent_area_equals_point() {
    for g in all_grids() {
        for &(x, y) in &POSITIONS {
            assert_abs_diff_eq!(g.area_sample((x, y), (x, y)), g.point_sample(x, y), epsilon = 1e-5);
        }
    }
}

#[test]
fn full_area_equals_dc() {
    for g in all_grids() {
        assert_abs_diff_eq!(g.area_sample((0.0, 0.0), (1.0, 1.0)), g.average(), epsilon = 1e-5);
    }
}

#[test]
fn involutions() {
    for g in all_grids() {
        assert_eq!(g.transposed().transposed(), g);
        assert_eq!(g.mirrored_horizontally().mirrored_horizontally(), g);
        assert_eq!(g.mirrored_vertically().mirrored_vertically(), g);
    }
}

#[test]
fn dc_plus_ac_is_identity() {
    for g in all_grids() {
        assert_eq!(g.dc() + g.ac(), g);
    }
}

#[test]
fn identity_edits() {
    for g in all_grids() {
        assert_abs_diff_eq!(g.darken(0.0), g, epsilon = 1e-6);
        assert_abs_diff_eq!(g.lighten(0.0), g, epsilon = 1e-6);
        assert_eq!(g.punch(1.0), g);
    }
}

#[test]
fn pure_red_scenario() {
    let red = CoefficientGrid::from_colour(Rgb::new(1.0, 0.0, 0.0));
    assert_eq!(red.average(), Rgb::new(1.0, 0.0, 0.0));
    assert_abs_diff_eq!(red.luminance(), 0.299);
}

#[test]
fn red_to_blue_scenario() {
    let red = CoefficientGrid::from_colour(Rgb::new(1.0, 0.0, 0.0));
    let blue = CoefficientGrid::from_colour(Rgb::new(0.0, 0.0, 1.0));
    let g = CoefficientGrid::blending_top(&red, &blue).unwrap();
    assert_eq!(g.vertical_components(), 2);
    assert_eq!(g[(0, 0)], Rgb::new(0.5, 0.0, 0.5));
    assert_eq!(g[(1, 0)], Rgb::new(0.5, 0.0, -0.5));
    assert_abs_diff_eq!(g.point_sample(0.0, 0.0), Rgb::new(1.0, 0.0, 0.0), epsilon = 1e-6);
    assert_abs_diff_eq!(g.point_sample(0.0, 1.0), Rgb::new(0.0, 0.0, 1.0), epsilon = 1e-6);
}

#[test]
fn set_brightness_converges() {
    let m = DEFAULT_MIDPOINT;
    for g in all_grids() {
        for target in [0.05, 0.25, 0.5, 0.75, 0.95] {
            let once = g.set_brightness(target, m);
            let again = g.set_brightness(once.brightness(m), m);
            assert_abs_diff_eq!(again, once, epsilon = 1e-4);
        }
    }
}

#[test]
fn mismatched_subtraction_keeps_extra_detail() {
    // Subtracting a finer grid from a coarser one is not the same as
    // subtracting the coarse approximation: the finer grid's high
    // frequencies survive, negated.
    let coarse = grid(1, 1, 7);
    let fine = grid(4, 3, 11);
    let diff = &coarse - &fine;
    assert_eq!(diff.dimensions(), (4, 3));
    assert_eq!(diff.ac(), -fine.ac());
    assert_eq!(diff.simplify(1, 1).unwrap(), &coarse - &fine.simplify(1, 1).unwrap());
}

#[test]
fn srgb_roundtrip() {
    for i in 0..=1000 {
        let v = i as f32 / 1000.0;
        let back = Rgb::from_srgb([v; 3]).to_srgb();
        assert_abs_diff_eq!(back[0], v, epsilon = 1e-5);
    }
}

#[cfg(feature = "serde")]
#[test]
fn json_roundtrip_preserves_grid() {
    for g in all_grids() {
        let json = serde_json::to_string(&g).unwrap();
        let back: CoefficientGrid = serde_json::from_str(&json).unwrap();
        assert_abs_diff_eq!(back, g, epsilon = 1e-7);
    }
}
