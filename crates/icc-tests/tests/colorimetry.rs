//! Colorimetric properties
//!
//! Matrix algebra sanity over random invertible matrices, CCT behavior on
//! and off the locus, Lab/RGB round trips, and chad interpretation on a
//! full profile.

use anyhow::Result;
use icc_tests::corpus;
use oxicc_core::color::{CieIlluminant, Lab, ReferenceWhite, Rgb, rgb_to_xyz, xyz_to_rgb};
use oxicc_core::icc::IccProfile;
use oxicc_core::math::{
    CatMethod, Matrix3x3, adaptation_matrix, daylight_xyz, guess_cat, xyz_to_cct,
};
use oxicc_core::Xyz;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[test]
fn random_invertible_matrices_invert() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x1CC);
    let mut tested = 0;
    while tested < 100 {
        let m = Matrix3x3::new(std::array::from_fn(|_| {
            std::array::from_fn(|_| rng.gen_range(-2.0..2.0))
        }));
        if m.determinant().abs() < 1e-3 {
            continue;
        }
        tested += 1;
        let inv = m.inverse().expect("determinant checked above");
        assert!(
            inv.multiply(&m).is_identity(1e-6),
            "M⁻¹·M != I for {m:?}"
        );
        assert!(m.multiply(&inv).is_identity(1e-6));
    }
}

#[test]
fn cct_of_d65_daylight() {
    let white = daylight_xyz(6504.0).unwrap();
    let cct = xyz_to_cct(white).unwrap();
    assert!((cct - 6504.0).abs() < 10.0, "got {cct:.1} K");
}

#[test]
fn cct_of_origin_is_none() {
    assert!(xyz_to_cct(Xyz::new(0.0, 0.0, 0.0)).is_none());
}

#[test]
fn cct_of_named_illuminants_is_plausible() {
    for (illuminant, tolerance) in [
        (CieIlluminant::A, 60.0),
        (CieIlluminant::D50, 40.0),
        (CieIlluminant::D65, 40.0),
        (CieIlluminant::D75, 50.0),
    ] {
        let cct = xyz_to_cct(illuminant.xyz()).unwrap();
        let nominal = illuminant.cct();
        assert!(
            (cct - nominal).abs() < tolerance,
            "{}: got {cct:.1} K, nominal {nominal} K",
            illuminant.name()
        );
    }
}

#[test]
fn lab_round_trip_under_named_whites() {
    for white in [
        ReferenceWhite::default(),
        CieIlluminant::D65.into(),
        CieIlluminant::A.into(),
    ] {
        let lab = Lab::new(62.0, -18.5, 44.0);
        let xyz = lab.to_xyz_with_white(white).unwrap();
        let back = Lab::from_xyz_with_white(xyz, white).unwrap();
        assert!(lab.approx_eq(&back, 1e-9), "white {white:?}");
    }
}

#[test]
fn rgb_xyz_rgb_is_identity_in_gamut() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x5EED);
    for _ in 0..200 {
        let rgb = Rgb::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0));
        let back = xyz_to_rgb(rgb_to_xyz(rgb, None, None), None, None);
        assert!(rgb.approx_eq(&back, 1e-6), "{rgb:?} vs {back:?}");
    }
}

#[test]
fn adaptation_round_trip_through_d50() {
    let d65: ReferenceWhite = CieIlluminant::D65.into();
    let d50 = ReferenceWhite::default();
    let forward = adaptation_matrix(d65, d50, CatMethod::Bradford).unwrap();
    let back = adaptation_matrix(d50, d65, CatMethod::Bradford).unwrap();
    assert!(forward.multiply(&back).is_identity(1e-5));
}

#[test]
fn profile_chad_is_recognized_as_bradford() -> Result<()> {
    let mut profile = IccProfile::from_bytes(&corpus::display_profile())?;
    let chad = profile.chromatic_adaptation()?.expect("chad present");

    let d65: ReferenceWhite = CieIlluminant::D65.into();
    let d50 = ReferenceWhite::default();
    assert_eq!(guess_cat(&chad, d65, d50), Some(CatMethod::Bradford));
    Ok(())
}

#[test]
fn profile_white_point_analysis() -> Result<()> {
    let mut profile = IccProfile::from_bytes(&corpus::display_profile())?;

    // stored media white is the PCS-adapted D50
    let white = profile.media_white_point()?.unwrap();
    assert!((white.y - 1.0).abs() < 1e-3);
    assert!((white.x - 0.9642).abs() < 1e-3);

    // undoing the chad recovers a D65-ish device white
    let device_white = profile.adapted_white_point()?.unwrap();
    assert!((device_white.x - 0.9505).abs() < 5e-3);
    assert!((device_white.z - 1.089).abs() < 8e-3);

    let cct = profile.white_point_cct()?.unwrap();
    assert!(
        (6350.0..6650.0).contains(&cct),
        "device white CCT {cct:.0} K not near D65"
    );
    Ok(())
}

#[test]
fn luminance_tag_reads_y() -> Result<()> {
    use icc_tests::corpus::{CorpusTag, profile_with_tags, xyz_tag};
    let data = profile_with_tags(&[CorpusTag::new(*b"lumi", xyz_tag(0.0, 120.0, 0.0))]);
    let mut profile = IccProfile::from_bytes(&data)?;
    assert!((profile.luminance()?.unwrap() - 120.0).abs() < 1e-3);
    Ok(())
}
