//! Raw simplex noise in two, three and four dimensions.
//!
//! Each evaluator skews the input into simplex-lattice space, picks the simplex that
//! contains it, sums a radially windowed gradient contribution from every corner and
//! scales the sum so the output lands in roughly `(-1, 1)`.
//!
//! All arithmetic is single precision, and the `r^4` falloff is computed as two
//! squarings rather than `powi`, so results are reproducible across platforms.

use crate::math::fast_floor;
use crate::noise::tables::{PERMUTATION, SIMPLEX_4D, simplex_4d_mask};
use crate::noise::{GRADIENT_3D, GRADIENT_4D, dot_2d, dot_3d, dot_4d};

#[allow(clippy::unreadable_literal, clippy::excessive_precision)]
const SQRT_3: f64 = 1.7320508075688772;
#[allow(clippy::unreadable_literal, clippy::excessive_precision)]
const SQRT_5: f64 = 2.23606797749979;

/// Skewing factor for 2D simplex: `(sqrt(3) - 1) / 2`
const F2: f32 = (0.5 * (SQRT_3 - 1.0)) as f32;
/// Unskewing factor for 2D simplex: `(3 - sqrt(3)) / 6`
const G2: f32 = ((3.0 - SQRT_3) / 6.0) as f32;
/// Skewing factor for 3D simplex: `1/3`
const F3: f32 = 1.0 / 3.0;
/// Unskewing factor for 3D simplex: `1/6`
const G3: f32 = 1.0 / 6.0;
/// Skewing factor for 4D simplex: `(sqrt(5) - 1) / 4`
const F4: f32 = ((SQRT_5 - 1.0) / 4.0) as f32;
/// Unskewing factor for 4D simplex: `(5 - sqrt(5)) / 20`
const G4: f32 = ((5.0 - SQRT_5) / 20.0) as f32;

/// Squared radius of the 2D corner kernel.
const RADIUS_2D: f32 = 0.5;
/// Squared radius of the 3D and 4D corner kernels.
const RADIUS_3D_4D: f32 = 0.6;

const SCALE_2D: f32 = 70.0;
const SCALE_3D: f32 = 32.0;
const SCALE_4D: f32 = 27.0;

#[inline]
fn perm(index: usize) -> usize {
    usize::from(PERMUTATION[index])
}

/// Lattice coordinate wrapped into the permutation period.
#[inline]
const fn wrap(cell: i32) -> usize {
    (cell & 0xFF) as usize
}

/// Radial falloff `max(0, r)^4` applied to a corner's gradient term.
#[inline]
fn falloff(r: f32, gradient_dot: impl FnOnce() -> f32) -> f32 {
    if r < 0.0 {
        0.0
    } else {
        let r = r * r;
        r * r * gradient_dot()
    }
}

#[inline]
fn corner_2d(gi: usize, x: f32, y: f32) -> f32 {
    falloff(RADIUS_2D - x * x - y * y, || dot_2d(&GRADIENT_3D[gi], x, y))
}

#[inline]
fn corner_3d(gi: usize, x: f32, y: f32, z: f32) -> f32 {
    falloff(RADIUS_3D_4D - x * x - y * y - z * z, || {
        dot_3d(&GRADIENT_3D[gi], x, y, z)
    })
}

#[inline]
fn corner_4d(gi: usize, x: f32, y: f32, z: f32, w: f32) -> f32 {
    falloff(RADIUS_3D_4D - x * x - y * y - z * z - w * w, || {
        dot_4d(&GRADIENT_4D[gi], x, y, z, w)
    })
}

/// Sample 2D simplex noise at the given coordinates.
///
/// Returns a value in roughly `(-1, 1)` (the corner sum scaled by 70). The value is
/// exactly zero at every vertex of the simplex lattice, including the origin.
#[must_use]
#[allow(clippy::many_single_char_names, clippy::similar_names)]
pub fn raw_noise_2d(x: f32, y: f32) -> f32 {
    let s = (x + y) * F2;
    let i = fast_floor(x + s);
    let j = fast_floor(y + s);
    let t = i.wrapping_add(j) as f32 * G2;
    let x0 = x - (i as f32 - t);
    let y0 = y - (j as f32 - t);

    // Determine which simplex triangle we're in
    let (i1, j1) = if x0 > y0 { (1u8, 0u8) } else { (0, 1) };

    let x1 = x0 - f32::from(i1) + G2;
    let y1 = y0 - f32::from(j1) + G2;
    let x2 = x0 - 1.0 + 2.0 * G2;
    let y2 = y0 - 1.0 + 2.0 * G2;

    let ii = wrap(i);
    let jj = wrap(j);
    let gi0 = perm(ii + perm(jj)) % 12;
    let gi1 = perm(ii + usize::from(i1) + perm(jj + usize::from(j1))) % 12;
    let gi2 = perm(ii + 1 + perm(jj + 1)) % 12;

    let n0 = corner_2d(gi0, x0, y0);
    let n1 = corner_2d(gi1, x1, y1);
    let n2 = corner_2d(gi2, x2, y2);

    SCALE_2D * (n0 + n1 + n2)
}

/// Sample 3D simplex noise at the given coordinates.
///
/// Returns a value in roughly `(-1, 1)` (the corner sum scaled by 32).
#[must_use]
#[allow(clippy::many_single_char_names, clippy::similar_names)]
pub fn raw_noise_3d(x: f32, y: f32, z: f32) -> f32 {
    let s = (x + y + z) * F3;
    let i = fast_floor(x + s);
    let j = fast_floor(y + s);
    let k = fast_floor(z + s);
    let t = i.wrapping_add(j).wrapping_add(k) as f32 * G3;
    let x0 = x - (i as f32 - t);
    let y0 = y - (j as f32 - t);
    let z0 = z - (k as f32 - t);

    // Determine which simplex tetrahedron we're in
    let ([i1, j1, k1], [i2, j2, k2]): ([u8; 3], [u8; 3]) = if x0 >= y0 {
        if y0 >= z0 {
            ([1, 0, 0], [1, 1, 0])
        } else if x0 >= z0 {
            ([1, 0, 0], [1, 0, 1])
        } else {
            ([0, 0, 1], [1, 0, 1])
        }
    } else if y0 < z0 {
        ([0, 0, 1], [0, 1, 1])
    } else if x0 < z0 {
        ([0, 1, 0], [0, 1, 1])
    } else {
        ([0, 1, 0], [1, 1, 0])
    };

    let x1 = x0 - f32::from(i1) + G3;
    let y1 = y0 - f32::from(j1) + G3;
    let z1 = z0 - f32::from(k1) + G3;
    let x2 = x0 - f32::from(i2) + 2.0 * G3;
    let y2 = y0 - f32::from(j2) + 2.0 * G3;
    let z2 = z0 - f32::from(k2) + 2.0 * G3;
    let x3 = x0 - 1.0 + 3.0 * G3;
    let y3 = y0 - 1.0 + 3.0 * G3;
    let z3 = z0 - 1.0 + 3.0 * G3;

    let ii = wrap(i);
    let jj = wrap(j);
    let kk = wrap(k);
    let hash = |di: u8, dj: u8, dk: u8| {
        perm(
            ii + usize::from(di)
                + perm(jj + usize::from(dj) + perm(kk + usize::from(dk))),
        ) % 12
    };
    let gi0 = hash(0, 0, 0);
    let gi1 = hash(i1, j1, k1);
    let gi2 = hash(i2, j2, k2);
    let gi3 = hash(1, 1, 1);

    let n0 = corner_3d(gi0, x0, y0, z0);
    let n1 = corner_3d(gi1, x1, y1, z1);
    let n2 = corner_3d(gi2, x2, y2, z2);
    let n3 = corner_3d(gi3, x3, y3, z3);

    SCALE_3D * (n0 + n1 + n2 + n3)
}

/// Sample 4D simplex noise at the given coordinates.
///
/// Returns a value in roughly `(-1, 1)` (the corner sum scaled by 27).
///
/// The corner walk comes from [`SIMPLEX_4D`]: each axis steps to the next lattice
/// cell once the walk has passed as many corners as there are axes with a larger
/// offset. Gradients are picked with `% 32` on the byte-valued permutation output.
#[must_use]
#[allow(clippy::many_single_char_names, clippy::similar_names)]
pub fn raw_noise_4d(x: f32, y: f32, z: f32, w: f32) -> f32 {
    let s = (x + y + z + w) * F4;
    let i = fast_floor(x + s);
    let j = fast_floor(y + s);
    let k = fast_floor(z + s);
    let l = fast_floor(w + s);
    let t = i.wrapping_add(j).wrapping_add(k).wrapping_add(l) as f32 * G4;
    let x0 = x - (i as f32 - t);
    let y0 = y - (j as f32 - t);
    let z0 = z - (k as f32 - t);
    let w0 = w - (l as f32 - t);

    let rank = SIMPLEX_4D[simplex_4d_mask(x0, y0, z0, w0)];
    let step = |threshold: u8| rank.map(|r| u8::from(r >= threshold));
    let [i1, j1, k1, l1] = step(3);
    let [i2, j2, k2, l2] = step(2);
    let [i3, j3, k3, l3] = step(1);

    let x1 = x0 - f32::from(i1) + G4;
    let y1 = y0 - f32::from(j1) + G4;
    let z1 = z0 - f32::from(k1) + G4;
    let w1 = w0 - f32::from(l1) + G4;
    let x2 = x0 - f32::from(i2) + 2.0 * G4;
    let y2 = y0 - f32::from(j2) + 2.0 * G4;
    let z2 = z0 - f32::from(k2) + 2.0 * G4;
    let w2 = w0 - f32::from(l2) + 2.0 * G4;
    let x3 = x0 - f32::from(i3) + 3.0 * G4;
    let y3 = y0 - f32::from(j3) + 3.0 * G4;
    let z3 = z0 - f32::from(k3) + 3.0 * G4;
    let w3 = w0 - f32::from(l3) + 3.0 * G4;
    let x4 = x0 - 1.0 + 4.0 * G4;
    let y4 = y0 - 1.0 + 4.0 * G4;
    let z4 = z0 - 1.0 + 4.0 * G4;
    let w4 = w0 - 1.0 + 4.0 * G4;

    let ii = wrap(i);
    let jj = wrap(j);
    let kk = wrap(k);
    let ll = wrap(l);
    let hash = |di: u8, dj: u8, dk: u8, dl: u8| {
        perm(
            ii + usize::from(di)
                + perm(
                    jj + usize::from(dj)
                        + perm(kk + usize::from(dk) + perm(ll + usize::from(dl))),
                ),
        ) % 32
    };
    let gi0 = hash(0, 0, 0, 0);
    let gi1 = hash(i1, j1, k1, l1);
    let gi2 = hash(i2, j2, k2, l2);
    let gi3 = hash(i3, j3, k3, l3);
    let gi4 = hash(1, 1, 1, 1);

    let n0 = corner_4d(gi0, x0, y0, z0, w0);
    let n1 = corner_4d(gi1, x1, y1, z1, w1);
    let n2 = corner_4d(gi2, x2, y2, z2, w2);
    let n3 = corner_4d(gi3, x3, y3, z3, w3);
    let n4 = corner_4d(gi4, x4, y4, z4, w4);

    SCALE_4D * (n0 + n1 + n2 + n3 + n4)
}
