//! Chromatic Adaptation Transforms
//!
//! Re-expresses colors under a different reference white by scaling in a
//! cone-response (LMS) space. Bradford is the ICC default; the other named
//! transforms are selectable, and `guess_cat` identifies which one produced
//! a profile's `chad` matrix.
//!
//! References:
//! - Lindbloom: http://www.brucelindbloom.com/Eqn_ChromAdapt.html
//! - CAT02 / CAT97s / HPE: Wikipedia, LMS color space
//! - CMCCAT97, CMCCAT2000, Sharp: "Computational colour science using MATLAB"

use crate::color::{ReferenceWhite, Xyz};
use crate::math::Matrix3x3;

/// A named chromatic adaptation transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatMethod {
    /// Bradford adaptation (ICC default)
    #[default]
    Bradford,
    /// CIECAM02 transform
    Cat02,
    /// CIECAM97s transform
    Cat97s,
    /// CMC CAT97
    CmcCat97,
    /// CMC CAT2000
    CmcCat2000,
    /// Hunt-Pointer-Estevez normalized to equal-energy illuminant
    Hpe,
    /// Hunt-Pointer-Estevez normalized to D65 ("Von Kries")
    VonKries,
    /// Sharpened sensor matrix (Süsstrunk et al.)
    Sharp,
    /// RLAB transform
    Rlab,
    /// Plain XYZ scaling (identity cone space)
    XyzScaling,
}

const BRADFORD: Matrix3x3 = Matrix3x3::new([
    [0.89510, 0.26640, -0.16140],
    [-0.75020, 1.71350, 0.03670],
    [0.03890, -0.06850, 1.02960],
]);

const CAT02: Matrix3x3 = Matrix3x3::new([
    [0.7328, 0.4296, -0.1624],
    [-0.7036, 1.6975, 0.0061],
    [0.0030, 0.0136, 0.9834],
]);

const CAT97S: Matrix3x3 = Matrix3x3::new([
    [0.8562, 0.3372, -0.1934],
    [-0.8360, 1.8327, 0.0033],
    [0.0357, -0.0469, 1.0112],
]);

const CMCCAT97: Matrix3x3 = Matrix3x3::new([
    [0.8951, -0.7502, 0.0389],
    [0.2664, 1.7135, 0.0685],
    [-0.1614, 0.0367, 1.0296],
]);

const CMCCAT2000: Matrix3x3 = Matrix3x3::new([
    [0.7982, 0.3389, -0.1371],
    [-0.5918, 1.5512, 0.0406],
    [0.0008, 0.0239, 0.9753],
]);

const HPE: Matrix3x3 = Matrix3x3::new([
    [0.38971, 0.68898, -0.07868],
    [-0.22981, 1.18340, 0.04641],
    [0.00000, 0.00000, 1.00000],
]);

const VON_KRIES: Matrix3x3 = Matrix3x3::new([
    [0.40024, 0.70760, -0.08081],
    [-0.22630, 1.16532, 0.04570],
    [0.00000, 0.00000, 0.91822],
]);

const SHARP: Matrix3x3 = Matrix3x3::new([
    [1.2694, -0.0988, -0.1706],
    [-0.8364, 1.8006, 0.0357],
    [0.0297, -0.0315, 1.0018],
]);

/// Inverse of [[1.9569, -1.1882, 0.2313], [0.3612, 0.6388, 0], [0, 0, 1]]
const RLAB: Matrix3x3 = Matrix3x3::new([
    [0.380409, 0.707580, -0.087988],
    [-0.215096, 1.165345, 0.049752],
    [0.000000, 0.000000, 1.000000],
]);

impl CatMethod {
    /// Every named transform, in the order `guess_cat` tries them
    pub const ALL: [Self; 10] = [
        Self::Bradford,
        Self::Cat02,
        Self::Cat97s,
        Self::CmcCat97,
        Self::CmcCat2000,
        Self::Hpe,
        Self::VonKries,
        Self::Sharp,
        Self::Rlab,
        Self::XyzScaling,
    ];

    /// The XYZ → cone-response matrix for this transform
    pub fn matrix(self) -> Matrix3x3 {
        match self {
            Self::Bradford => BRADFORD,
            Self::Cat02 => CAT02,
            Self::Cat97s => CAT97S,
            Self::CmcCat97 => CMCCAT97,
            Self::CmcCat2000 => CMCCAT2000,
            Self::Hpe => HPE,
            Self::VonKries => VON_KRIES,
            Self::Sharp => SHARP,
            Self::Rlab => RLAB,
            Self::XyzScaling => Matrix3x3::identity(),
        }
    }
}

/// Project an XYZ color into the transform's cone-response space
#[inline]
pub fn xyz_to_lms(xyz: Xyz, cat: CatMethod) -> [f64; 3] {
    cat.matrix().multiply_vec(xyz.to_array())
}

/// Diagonal LMS gain matrix between two white points
///
/// When exactly one white is on the 0..100 scale, the other is scaled up to
/// match before the ratio is taken.
pub fn lms_gain_matrix(
    src: ReferenceWhite,
    dst: ReferenceWhite,
    cat: CatMethod,
) -> Option<Matrix3x3> {
    let mut ws = src.resolve()?;
    let mut wd = dst.resolve()?;
    if ws.y <= 1.0 && wd.y > 1.0 {
        ws = ws.scale(100.0);
    }
    if wd.y <= 1.0 && ws.y > 1.0 {
        wd = wd.scale(100.0);
    }

    let s = xyz_to_lms(ws, cat);
    let d = xyz_to_lms(wd, cat);
    let ratio = |num: f64, den: f64| if den.abs() > 1e-10 { num / den } else { 1.0 };
    Some(Matrix3x3::diagonal(
        ratio(d[0], s[0]),
        ratio(d[1], s[1]),
        ratio(d[2], s[2]),
    ))
}

/// Full chromatic adaptation matrix: cat⁻¹ · gain · cat
///
/// The result maps source-relative XYZ to destination-relative XYZ.
/// `None` when a white point cannot be resolved (CCT outside the daylight
/// locus).
pub fn adaptation_matrix(
    src: ReferenceWhite,
    dst: ReferenceWhite,
    cat: CatMethod,
) -> Option<Matrix3x3> {
    let m = cat.matrix();
    let m_inv = m.inverse().ok()?;
    let gain = lms_gain_matrix(src, dst, cat)?;
    Some(m_inv.multiply(&gain).multiply(&m))
}

/// Adapt a single XYZ color between white points
pub fn adapt(xyz: Xyz, src: ReferenceWhite, dst: ReferenceWhite, cat: CatMethod) -> Option<Xyz> {
    let matrix = adaptation_matrix(src, dst, cat)?;
    Some(Xyz::from_array(matrix.multiply_vec(xyz.to_array())))
}

/// Guess which named transform produced a profile's `chad` matrix
///
/// An identity `chad` means no adaptation was applied and yields `None`;
/// otherwise each known transform is reconstructed from the given white
/// points and the first whose matrices agree to 2 decimal digits wins.
/// `None` also means no transform matched.
pub fn guess_cat(
    chad: &Matrix3x3,
    src: ReferenceWhite,
    dst: ReferenceWhite,
) -> Option<CatMethod> {
    if chad.rounded_eq(&Matrix3x3::identity(), 4) {
        return None;
    }
    for cat in CatMethod::ALL {
        let m = cat.matrix();
        let Ok(m_inv) = m.inverse() else { continue };
        let Some(gain) = lms_gain_matrix(dst, src, cat) else {
            continue;
        };
        let Ok(reconstructed) = chad.multiply(&m_inv).multiply(&gain).inverse() else {
            continue;
        };
        if reconstructed.rounded_eq(&m, 2) {
            return Some(cat);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::CieIlluminant;

    const EPSILON: f64 = 1e-6;

    fn d65() -> ReferenceWhite {
        CieIlluminant::D65.into()
    }

    fn d50() -> ReferenceWhite {
        ReferenceWhite::default()
    }

    #[test]
    fn test_identity_adaptation() {
        let matrix = adaptation_matrix(d65(), d65(), CatMethod::Bradford).unwrap();
        assert!(matrix.is_identity(EPSILON));
    }

    #[test]
    fn test_d65_to_d50_bradford() {
        // Lindbloom's published D65 → D50 Bradford matrix
        let expected = Matrix3x3::new([
            [1.0478112, 0.0228866, -0.0501270],
            [0.0295424, 0.9904844, -0.0170491],
            [-0.0092345, 0.0150436, 0.7521316],
        ]);
        let computed = adaptation_matrix(d65(), d50(), CatMethod::Bradford).unwrap();
        assert!(
            computed.approx_eq(&expected, 1e-2),
            "D65→D50 mismatch: {computed:?}"
        );
    }

    #[test]
    fn test_adaptation_roundtrip() {
        let m1 = adaptation_matrix(d65(), d50(), CatMethod::Bradford).unwrap();
        let m2 = adaptation_matrix(d50(), d65(), CatMethod::Bradford).unwrap();
        assert!(m1.multiply(&m2).is_identity(1e-5));
    }

    #[test]
    fn test_white_point_maps_to_destination_white() {
        let src = CieIlluminant::D65.xyz();
        let adapted = adapt(src, d65(), d50(), CatMethod::Bradford).unwrap();
        let dst = d50().resolve().unwrap();
        assert!(adapted.approx_eq(&dst, 1e-4));
    }

    #[test]
    fn test_xyz_scaling_is_diagonal() {
        let m = adaptation_matrix(d65(), d50(), CatMethod::XyzScaling).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                if i != j {
                    assert!(m.m[i][j].abs() < EPSILON);
                }
            }
        }
    }

    #[test]
    fn test_cct_white_resolution() {
        // Out-of-locus temperature propagates as "no result"
        assert!(adaptation_matrix(ReferenceWhite::Cct(500.0), d50(), CatMethod::Bradford).is_none());
        assert!(adaptation_matrix(ReferenceWhite::Cct(6504.0), d50(), CatMethod::Bradford).is_some());
    }

    #[test]
    fn test_guess_cat_identity() {
        assert_eq!(guess_cat(&Matrix3x3::identity(), d65(), d50()), None);
    }

    #[test]
    fn test_guess_cat_recovers_method() {
        for cat in [CatMethod::Bradford, CatMethod::Cat02, CatMethod::VonKries] {
            let chad = adaptation_matrix(d65(), d50(), cat).unwrap();
            assert_eq!(guess_cat(&chad, d65(), d50()), Some(cat), "{cat:?}");
        }
    }

    #[test]
    fn test_rlab_constant_is_inverse_of_base() {
        let base = Matrix3x3::new([
            [1.9569, -1.1882, 0.2313],
            [0.3612, 0.6388, 0.0],
            [0.0, 0.0, 1.0],
        ]);
        assert!(RLAB.multiply(&base).is_identity(1e-4));
    }
}
