//! RGB ↔ XYZ conversions
//!
//! Both directions take an optional transfer-function gamma (defaulting to
//! the sRGB piecewise curve) and an optional 3x3 matrix (defaulting to the
//! sRGB D65 matrices). Output is clamped to [0, 1] on the XYZ → RGB
//! direction only.

use crate::color::Xyz;
use crate::error::Result;
use crate::math::matrix::{Matrix3x3, SRGB_TO_XYZ, XYZ_TO_SRGB};

/// An RGB triple, nominal range [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    /// Create a new RGB color
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Check if approximately equal to another RGB color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

/// sRGB transfer function, encoded → linear (IEC 61966-2-1)
#[inline]
pub fn srgb_decode(encoded: f64) -> f64 {
    if encoded > 0.04045 {
        ((encoded + 0.055) / 1.055).powf(2.4)
    } else {
        encoded / 12.92
    }
}

/// sRGB transfer function, linear → encoded (IEC 61966-2-1)
#[inline]
pub fn srgb_encode(linear: f64) -> f64 {
    if linear > 0.0031308 {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * linear
    }
}

/// Convert RGB to XYZ
///
/// `gamma` of `None` selects the sRGB piecewise transfer function; a value
/// applies a plain power curve. `matrix` of `None` selects the built-in
/// sRGB D65 matrix. Input is expected in [0, 1]; output is not clamped.
pub fn rgb_to_xyz(rgb: Rgb, gamma: Option<f64>, matrix: Option<&Matrix3x3>) -> Xyz {
    let linear = match gamma {
        None => [
            srgb_decode(rgb.r),
            srgb_decode(rgb.g),
            srgb_decode(rgb.b),
        ],
        Some(g) => [rgb.r.powf(g), rgb.g.powf(g), rgb.b.powf(g)],
    };
    let m = matrix.unwrap_or(&SRGB_TO_XYZ);
    Xyz::from_array(m.multiply_vec(linear))
}

/// Convert XYZ to RGB, clamped to [0, 1]
///
/// `gamma` and `matrix` mirror [`rgb_to_xyz`]; the matrix here is the
/// XYZ → RGB direction (defaulting to the built-in sRGB inverse).
pub fn xyz_to_rgb(xyz: Xyz, gamma: Option<f64>, matrix: Option<&Matrix3x3>) -> Rgb {
    let m = matrix.unwrap_or(&XYZ_TO_SRGB);
    let linear = m.multiply_vec(xyz.to_array());
    let encode = |v: f64| -> f64 {
        let encoded = match gamma {
            None => srgb_encode(v),
            Some(g) => v.powf(1.0 / g),
        };
        encoded.clamp(0.0, 1.0)
    };
    Rgb::new(encode(linear[0]), encode(linear[1]), encode(linear[2]))
}

/// Build an RGB → XYZ matrix from chromaticity primaries and a white point
///
/// `primaries` are the (x, y) chromaticities of red, green, and blue;
/// `white` is the working-space white as XYZ. Fails with `SingularMatrix`
/// for degenerate primaries.
pub fn rgb_matrix(primaries: [(f64, f64); 3], white: Xyz) -> Result<Matrix3x3> {
    let cols: Vec<Xyz> = primaries
        .iter()
        .map(|&(x, y)| Xyz::from_xyy(x, y, 1.0))
        .collect();
    let p = Matrix3x3::new([
        [cols[0].x, cols[1].x, cols[2].x],
        [cols[0].y, cols[1].y, cols[2].y],
        [cols[0].z, cols[1].z, cols[2].z],
    ]);
    let s = p.inverse()?.multiply_vec(white.to_array());
    let mut m = p;
    for i in 0..3 {
        for j in 0..3 {
            m.m[i][j] *= s[j];
        }
    }
    Ok(m)
}
