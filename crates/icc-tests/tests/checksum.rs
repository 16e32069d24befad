//! Profile ID checksum properties
//!
//! The ID is an MD5 over the serialized profile with the flags,
//! rendering-intent, and ID fields zeroed, so it must be deterministic,
//! sensitive to tag mutation, and insensitive to exactly those three
//! fields.

use anyhow::Result;
use icc_tests::corpus::{self, CorpusTag, profile_with_tags, text_tag};
use oxicc_core::icc::{IccProfile, TagData, TagSignature};

#[test]
fn id_is_deterministic() -> Result<()> {
    let data = corpus::display_profile();
    let mut profile = IccProfile::from_bytes(&data)?;
    let first = profile.calculate_id()?;
    let second = profile.calculate_id()?;
    assert_ne!(first, [0u8; 16]);
    assert_eq!(first, second);

    // an independently parsed copy agrees
    let mut other = IccProfile::from_bytes(&data)?;
    assert_eq!(other.calculate_id()?, first);
    Ok(())
}

#[test]
fn mutation_changes_id() -> Result<()> {
    let data = corpus::display_profile();
    let mut profile = IccProfile::from_bytes(&data)?;
    let before = profile.calculate_id()?;

    profile.set_tag(
        TagSignature::COPYRIGHT,
        TagData::Text("All rights reserved".to_string()),
    )?;
    assert_eq!(profile.id(), [0u8; 16], "mutation must invalidate the ID");
    let after = profile.calculate_id()?;
    assert_ne!(before, after);
    Ok(())
}

#[test]
fn id_ignores_flags_intent_and_id_fields() -> Result<()> {
    let base = corpus::display_profile();

    let mut variant = base.clone();
    variant[44..48].copy_from_slice(&1u32.to_be_bytes()); // flags
    variant[64..68].copy_from_slice(&3u32.to_be_bytes()); // rendering intent
    variant[84..100].copy_from_slice(&[0x11; 16]); // stored ID

    let mut a = IccProfile::from_bytes(&base)?;
    let mut b = IccProfile::from_bytes(&variant)?;
    assert_eq!(a.calculate_id()?, b.calculate_id()?);
    Ok(())
}

#[test]
fn id_sees_other_header_fields() -> Result<()> {
    let base = corpus::display_profile();
    let mut variant = base.clone();
    variant[80..84].copy_from_slice(b"nwcr"); // creator

    let mut a = IccProfile::from_bytes(&base)?;
    let mut b = IccProfile::from_bytes(&variant)?;
    assert_ne!(a.calculate_id()?, b.calculate_id()?);
    Ok(())
}

#[test]
fn serialized_profile_embeds_computed_id() -> Result<()> {
    let mut profile = IccProfile::from_bytes(&corpus::display_profile())?;
    let id = profile.calculate_id()?;
    let out = profile.serialize()?;
    assert_eq!(&out[84..100], &id);

    let reparsed = IccProfile::from_bytes(&out)?;
    assert_eq!(reparsed.header().profile_id, id);
    assert!(reparsed.header().has_id());
    Ok(())
}

#[test]
fn id_base64_is_stable() -> Result<()> {
    let mut a = IccProfile::from_bytes(&corpus::display_profile())?;
    let mut b = IccProfile::from_bytes(&corpus::display_profile())?;
    let encoded = a.id_base64()?;
    assert_eq!(encoded.len(), 24);
    assert_eq!(encoded, b.id_base64()?);
    Ok(())
}

#[test]
fn is_same_compares_by_id() -> Result<()> {
    let mut a = IccProfile::from_bytes(&corpus::display_profile())?;
    let mut b = IccProfile::from_bytes(&corpus::display_profile())?;
    assert!(a.is_same(&mut b, false)?);

    let mut c = IccProfile::from_bytes(&profile_with_tags(&[CorpusTag::new(
        *b"cprt",
        text_tag("Different"),
    )]))?;
    assert!(!a.is_same(&mut c, false)?);

    // forcing recomputation is consistent
    assert!(a.is_same(&mut b, true)?);
    Ok(())
}
