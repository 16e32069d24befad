//! CIELAB (L*a*b*) Color Space
//!
//! CIE 1976 formulas with the standard 0.008856 / 903.3 breakpoints.
//! Conversions accept any [`ReferenceWhite`]; the default is D50, matching
//! the ICC profile connection space.

use crate::color::{D50, ReferenceWhite, Xyz};

const E: f64 = 0.008856;
const K: f64 = 903.3;

/// CIELAB color coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lab {
    /// Lightness (0 to 100)
    pub l: f64,
    /// Green-red axis
    pub a: f64,
    /// Blue-yellow axis
    pub b: f64,
}

impl Lab {
    /// Create a new Lab color
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Convert from XYZ relative to D50 (the ICC PCS white)
    pub fn from_xyz(xyz: Xyz) -> Self {
        Self::from_xyz_raw(xyz, D50)
    }

    /// Convert from XYZ with an explicit reference white
    ///
    /// `None` when the white is a CCT outside the daylight locus.
    pub fn from_xyz_with_white(xyz: Xyz, white: ReferenceWhite) -> Option<Self> {
        Some(Self::from_xyz_raw(xyz, white.resolve()?))
    }

    fn from_xyz_raw(xyz: Xyz, white: Xyz) -> Self {
        let xr = xyz.x / white.x;
        let yr = xyz.y / white.y;
        let zr = xyz.z / white.z;

        let f = |r: f64| if r > E { r.cbrt() } else { (K * r + 16.0) / 116.0 };
        let (fx, fy, fz) = (f(xr), f(yr), f(zr));

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// Convert to XYZ relative to D50 (the ICC PCS white)
    pub fn to_xyz(&self) -> Xyz {
        self.to_xyz_raw(D50)
    }

    /// Convert to XYZ with an explicit reference white
    ///
    /// `None` when the white is a CCT outside the daylight locus.
    pub fn to_xyz_with_white(&self, white: ReferenceWhite) -> Option<Xyz> {
        Some(self.to_xyz_raw(white.resolve()?))
    }

    fn to_xyz_raw(&self, white: Xyz) -> Xyz {
        let fy = (self.l + 16.0) / 116.0;
        let fx = self.a / 500.0 + fy;
        let fz = fy - self.b / 200.0;

        let xr = if fx.powi(3) > E {
            fx.powi(3)
        } else {
            (116.0 * fx - 16.0) / K
        };
        let yr = if self.l > K * E {
            ((self.l + 16.0) / 116.0).powi(3)
        } else {
            self.l / K
        };
        let zr = if fz.powi(3) > E {
            fz.powi(3)
        } else {
            (116.0 * fz - 16.0) / K
        };

        Xyz::new(xr * white.x, yr * white.y, zr * white.z)
    }

    /// Check if approximately equal to another Lab color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::CieIlluminant;

    const EPSILON: f64 = 1e-6;

    #[test]
    fn test_white_is_100() {
        let lab = Lab::from_xyz(D50);
        assert!((lab.l - 100.0).abs() < EPSILON);
        assert!(lab.a.abs() < EPSILON);
        assert!(lab.b.abs() < EPSILON);
    }

    #[test]
    fn test_black_is_0() {
        let lab = Lab::from_xyz(Xyz::new(0.0, 0.0, 0.0));
        assert!(lab.l.abs() < EPSILON);
        assert!(lab.a.abs() < EPSILON);
        assert!(lab.b.abs() < EPSILON);
    }

    #[test]
    fn test_roundtrip() {
        for lab in [
            Lab::new(50.0, 25.0, -30.0),
            Lab::new(3.0, 1.0, -1.0), // below the linear-toe breakpoint
            Lab::new(97.0, -40.0, 60.0),
        ] {
            let roundtrip = Lab::from_xyz(lab.to_xyz());
            assert!(
                lab.approx_eq(&roundtrip, 1e-9),
                "roundtrip failed: {lab:?} vs {roundtrip:?}"
            );
        }
    }

    #[test]
    fn test_named_white() {
        let white = CieIlluminant::D65.xyz();
        let lab = Lab::from_xyz_with_white(white, CieIlluminant::D65.into()).unwrap();
        assert!((lab.l - 100.0).abs() < EPSILON);
        assert!(lab.a.abs() < EPSILON);
    }

    #[test]
    fn test_cct_white_out_of_range() {
        let xyz = Xyz::new(0.5, 0.5, 0.5);
        assert!(Lab::from_xyz_with_white(xyz, ReferenceWhite::Cct(1000.0)).is_none());
    }
}
