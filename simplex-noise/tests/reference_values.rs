//! Regression tests for the public noise API.
//!
//! Reference values were produced by evaluating the canonical algorithm (Perlin's
//! permutation, the cube/tesseract edge gradients) in single precision.

use std::thread;

use simplex_noise::{
    octave_noise_2d, octave_noise_3d, octave_noise_4d, raw_noise_2d, raw_noise_3d, raw_noise_4d,
    scaled_octave_noise_2d, scaled_raw_noise_2d,
};

const TOLERANCE: f32 = 1e-5;

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

/// Deterministic pseudo-random coordinates spread over a few hundred units.
fn sample_points(count: usize) -> impl Iterator<Item = [f32; 4]> {
    let mut state: u32 = 0x9E37_79B9;
    (0..count).map(move |_| {
        let mut next = || {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state as f32 / u32::MAX as f32) * 600.0 - 300.0
        };
        [next(), next(), next(), next()]
    })
}

#[test]
fn scenario_values() {
    assert_close(raw_noise_2d(0.0, 0.0), 0.0);
    assert_close(raw_noise_2d(0.5, 0.5), -0.307_156_5);
    assert_close(raw_noise_3d(0.0, 0.0, 0.0), 0.0);
    assert_close(raw_noise_3d(1.0, 2.0, 3.0), 0.0);
    assert_close(raw_noise_4d(0.0, 0.0, 0.0, 0.0), 0.0);
    assert_close(scaled_raw_noise_2d(0.0, 1.0, 0.0, 0.0), 0.5);
    assert_close(octave_noise_2d(4.0, 0.5, 1.0, 0.0, 0.0), 0.0);
    assert_close(scaled_octave_noise_2d(4.0, 0.5, 1.0, 10.0, 20.0, 0.0, 0.0), 15.0);
}

#[test]
fn output_is_bounded() {
    for [x, y, z, w] in sample_points(20_000) {
        for v in [
            raw_noise_2d(x, y),
            raw_noise_3d(x, y, z),
            raw_noise_4d(x, y, z, w),
        ] {
            assert!(v.abs() < 1.01, "{v} out of bounds at ({x}, {y}, {z}, {w})");
        }
    }
}

#[test]
fn output_varies_across_space() {
    let values: Vec<f32> = sample_points(200).map(|[x, y, _, _]| raw_noise_2d(x, y)).collect();
    let min = values.iter().copied().fold(f32::INFINITY, f32::min);
    let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    assert!(max - min > 0.5, "2D simplex should have spatial variation");
}

#[test]
fn small_steps_give_small_changes() {
    const DELTA: f32 = 1e-3;
    // The field's gradient magnitude stays well below this bound.
    const LIPSCHITZ: f32 = 20.0;

    for [x, y, z, w] in sample_points(2_000) {
        let pairs = [
            (raw_noise_2d(x, y), raw_noise_2d(x + DELTA, y)),
            (raw_noise_3d(x, y, z), raw_noise_3d(x, y + DELTA, z)),
            (raw_noise_4d(x, y, z, w), raw_noise_4d(x, y, z, w + DELTA)),
        ];
        for (a, b) in pairs {
            assert!(
                (a - b).abs() < LIPSCHITZ * DELTA,
                "jump from {a} to {b} at ({x}, {y}, {z}, {w})"
            );
        }
    }
}

#[test]
fn identical_across_threads() {
    let points: Vec<[f32; 4]> = sample_points(1_000).collect();
    let evaluate = |points: &[[f32; 4]]| -> Vec<u32> {
        points
            .iter()
            .flat_map(|&[x, y, z, w]| {
                [
                    raw_noise_2d(x, y).to_bits(),
                    raw_noise_3d(x, y, z).to_bits(),
                    raw_noise_4d(x, y, z, w).to_bits(),
                    octave_noise_3d(4.0, 0.5, 0.05, x, y, z).to_bits(),
                    octave_noise_4d(3.0, 0.7, 0.02, x, y, z, w).to_bits(),
                ]
            })
            .collect()
    };

    let expected = evaluate(&points);
    thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| evaluate(&points))).collect();
        for handle in handles {
            assert_eq!(handle.join().expect("noise thread panicked"), expected);
        }
    });
}
