//! Correlated color temperature
//!
//! Robertson's iso-temperature-line method for XYZ → CCT, plus the CIE
//! daylight and Planckian locus fits for the reverse direction.
//!
//! References:
//! - Wyszecki & Stiles, "Color Science", 2nd ed., pp. 227-228
//! - Lindbloom: http://www.brucelindbloom.com/

use crate::color::Xyz;

/// Linear interpolation: `a` when t = 0, `b` when t = 1
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (b - a) * t + a
}

/// Reciprocal temperatures (K⁻¹) for the Robertson table rows
const ROBERTSON_RT: [f64; 31] = [
    f64::MIN_POSITIVE,
    10.0e-6,
    20.0e-6,
    30.0e-6,
    40.0e-6,
    50.0e-6,
    60.0e-6,
    70.0e-6,
    80.0e-6,
    90.0e-6,
    100.0e-6,
    125.0e-6,
    150.0e-6,
    175.0e-6,
    200.0e-6,
    225.0e-6,
    250.0e-6,
    275.0e-6,
    300.0e-6,
    325.0e-6,
    350.0e-6,
    375.0e-6,
    400.0e-6,
    425.0e-6,
    450.0e-6,
    475.0e-6,
    500.0e-6,
    525.0e-6,
    550.0e-6,
    575.0e-6,
    600.0e-6,
];

/// (u, v, iso-temperature-line slope) per Robertson table row.
/// Row 19's u is the corrected 0.24792 (W&S print 0.24702 in error).
const ROBERTSON_UVT: [(f64, f64, f64); 31] = [
    (0.18006, 0.26352, -0.24341),
    (0.18066, 0.26589, -0.25479),
    (0.18133, 0.26846, -0.26876),
    (0.18208, 0.27119, -0.28539),
    (0.18293, 0.27407, -0.30470),
    (0.18388, 0.27709, -0.32675),
    (0.18494, 0.28021, -0.35156),
    (0.18611, 0.28342, -0.37915),
    (0.18740, 0.28668, -0.40955),
    (0.18880, 0.28997, -0.44278),
    (0.19032, 0.29326, -0.47888),
    (0.19462, 0.30141, -0.58204),
    (0.19962, 0.30921, -0.70471),
    (0.20525, 0.31647, -0.84901),
    (0.21142, 0.32312, -1.0182),
    (0.21807, 0.32909, -1.2168),
    (0.22511, 0.33439, -1.4512),
    (0.23247, 0.33904, -1.7298),
    (0.24010, 0.34308, -2.0637),
    (0.24792, 0.34655, -2.4681),
    (0.25591, 0.34951, -2.9641),
    (0.26400, 0.35200, -3.5814),
    (0.27218, 0.35407, -4.3633),
    (0.28039, 0.35577, -5.3762),
    (0.28863, 0.35714, -6.7262),
    (0.29685, 0.35823, -8.5955),
    (0.30505, 0.35907, -11.324),
    (0.31320, 0.35968, -15.628),
    (0.32129, 0.36011, -23.325),
    (0.32931, 0.36038, -40.770),
    (0.33724, 0.36051, -116.45),
];

/// Correlated color temperature of an XYZ color via Robertson's method
///
/// Returns `None` for input at or near the origin, and for chromaticities
/// with no bounding pair of iso-temperature lines (below ~1667 K, or too
/// far off the locus toward blue).
pub fn xyz_to_cct(xyz: Xyz) -> Option<f64> {
    let (x, y, z) = (xyz.x, xyz.y, xyz.z);
    if x < 1.0e-20 && y < 1.0e-20 && z < 1.0e-20 {
        return None;
    }

    let denom = x + 15.0 * y + 3.0 * z;
    let us = (4.0 * x) / denom;
    let vs = (6.0 * y) / denom;

    let mut dm = 0.0;
    let mut di = 0.0;
    let mut i = 0;
    while i < 31 {
        let (u, v, t) = ROBERTSON_UVT[i];
        di = (vs - v) - t * (us - u);
        if i > 0 && ((di < 0.0 && dm >= 0.0) || (di >= 0.0 && dm < 0.0)) {
            // found lines bounding (us, vs): i-1 and i
            break;
        }
        dm = di;
        i += 1;
    }
    if i == 31 {
        return None;
    }

    let di = di / (1.0 + ROBERTSON_UVT[i].2 * ROBERTSON_UVT[i].2).sqrt();
    let dm = dm / (1.0 + ROBERTSON_UVT[i - 1].2 * ROBERTSON_UVT[i - 1].2).sqrt();
    let p = dm / (dm - di);
    Some(1.0 / lerp(ROBERTSON_RT[i - 1], ROBERTSON_RT[i], p))
}

/// Correlated color temperature of an xyY chromaticity
pub fn xyy_to_cct(x: f64, y: f64, big_y: f64) -> Option<f64> {
    xyz_to_cct(Xyz::from_xyy(x, y, big_y))
}

/// Chromaticity of the CIE daylight locus at T Kelvin, as (x, y, Y = 1)
///
/// Judd/Kelly polynomial fit, valid for 4000 K to 25000 K; out-of-range
/// temperatures yield `None`.
pub fn daylight_xyy(t: f64) -> Option<(f64, f64, f64)> {
    let x = if (4000.0..=7000.0).contains(&t) {
        -4.607e9 / t.powi(3) + 2.9678e6 / t.powi(2) + 0.09911e3 / t + 0.244063
    } else if t > 7000.0 && t <= 25000.0 {
        -2.0064e9 / t.powi(3) + 1.9018e6 / t.powi(2) + 0.24748e3 / t + 0.237040
    } else {
        return None;
    };
    let y = -3.0 * x * x + 2.87 * x - 0.275;
    Some((x, y, 1.0))
}

/// Daylight locus at T Kelvin as XYZ
pub fn daylight_xyz(t: f64) -> Option<Xyz> {
    daylight_xyy(t).map(|(x, y, big_y)| Xyz::from_xyy(x, y, big_y))
}

/// Chromaticity of the Planckian (blackbody) locus at T Kelvin
///
/// Cubic fit valid for 1667 K to 25000 K; `None` outside that range.
pub fn planckian_xyy(t: f64) -> Option<(f64, f64, f64)> {
    let x = if (1667.0..=4000.0).contains(&t) {
        -0.2661239 * (1e9 / t.powi(3)) - 0.2343580 * (1e6 / t.powi(2)) + 0.8776956 * (1e3 / t)
            + 0.179910
    } else if t > 4000.0 && t <= 25000.0 {
        -3.0258469 * (1e9 / t.powi(3)) + 2.1070379 * (1e6 / t.powi(2)) + 0.2226347 * (1e3 / t)
            + 0.24039
    } else {
        return None;
    };
    let y = if (1667.0..=2222.0).contains(&t) {
        -1.1063814 * x.powi(3) - 1.34811020 * x * x + 2.18555832 * x - 0.20219683
    } else if t > 2222.0 && t <= 4000.0 {
        -0.9549476 * x.powi(3) - 1.37418593 * x * x + 2.09137015 * x - 0.16748867
    } else {
        3.0817580 * x.powi(3) - 5.87338670 * x * x + 3.75112997 * x - 0.37001483
    };
    Some((x, y, 1.0))
}

/// Planckian locus at T Kelvin as XYZ
pub fn planckian_xyz(t: f64) -> Option<Xyz> {
    planckian_xyy(t).map(|(x, y, big_y)| Xyz::from_xyy(x, y, big_y))
}
