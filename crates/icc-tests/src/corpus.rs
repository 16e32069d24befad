//! Synthetic profile corpus
//!
//! Byte-level builders for test profiles. Offsets, sizes, and padding are
//! computed the same way a conforming encoder would, so round-trip tests
//! compare against realistic input.

use oxicc_core::icc::header::PROFILE_SIGNATURE;
use oxicc_core::icc::tags::TextDescription;
use oxicc_core::icc::HEADER_SIZE;

/// A tag destined for the tag table: signature plus full body bytes
#[derive(Debug, Clone)]
pub struct CorpusTag {
    pub signature: [u8; 4],
    pub body: Vec<u8>,
    /// Alias this entry to the previous tag's body instead of emitting its
    /// own copy
    pub alias_previous: bool,
}

impl CorpusTag {
    pub fn new(signature: [u8; 4], body: Vec<u8>) -> Self {
        Self {
            signature,
            body,
            alias_previous: false,
        }
    }

    pub fn aliased(signature: [u8; 4]) -> Self {
        Self {
            signature,
            body: Vec::new(),
            alias_previous: true,
        }
    }
}

/// A header-only v4 display profile with a zero tag count
pub fn minimal_profile() -> Vec<u8> {
    let mut data = vec![0u8; HEADER_SIZE + 4];
    let data_len = data.len() as u32;
    data[0..4].copy_from_slice(&data_len.to_be_bytes());
    data[4..8].copy_from_slice(b"oxic");
    data[8] = 4;
    data[9] = 0x30;
    data[12..16].copy_from_slice(b"mntr");
    data[16..20].copy_from_slice(b"RGB ");
    data[20..24].copy_from_slice(b"XYZ ");
    // creation date 2011-07-04 12:30:00
    for (i, v) in [2011u16, 7, 4, 12, 30, 0].iter().enumerate() {
        data[24 + i * 2..26 + i * 2].copy_from_slice(&v.to_be_bytes());
    }
    data[36..40].copy_from_slice(&PROFILE_SIGNATURE.to_be_bytes());
    data[40..44].copy_from_slice(b"APPL");
    // PCS illuminant: D50
    data[68..72].copy_from_slice(&[0x00, 0x00, 0xF6, 0xD6]);
    data[72..76].copy_from_slice(&[0x00, 0x01, 0x00, 0x00]);
    data[76..80].copy_from_slice(&[0x00, 0x00, 0xD3, 0x2D]);
    data
}

/// Assemble a full profile from tag bodies, computing the table and padding
pub fn profile_with_tags(tags: &[CorpusTag]) -> Vec<u8> {
    let mut data = minimal_profile();
    data[128..132].copy_from_slice(&(tags.len() as u32).to_be_bytes());

    let mut offset = (HEADER_SIZE + 4 + tags.len() * 12) as u32;
    let mut bodies = Vec::new();
    let mut previous: Option<(u32, u32)> = None;
    for tag in tags {
        let (tag_offset, tag_size) = if tag.alias_previous {
            previous.expect("aliased tag requires a predecessor")
        } else {
            let size = tag.body.len() as u32;
            let padded = tag.body.len().div_ceil(4) * 4;
            let this_offset = offset;
            bodies.extend_from_slice(&tag.body);
            bodies.extend(std::iter::repeat_n(0u8, padded - tag.body.len()));
            offset += padded as u32;
            (this_offset, size)
        };
        previous = Some((tag_offset, tag_size));
        data.extend_from_slice(&tag.signature);
        data.extend_from_slice(&tag_offset.to_be_bytes());
        data.extend_from_slice(&tag_size.to_be_bytes());
    }
    data.extend_from_slice(&bodies);
    let total = data.len() as u32;
    data[0..4].copy_from_slice(&total.to_be_bytes());
    data
}

/// 'text' tag body
pub fn text_tag(text: &str) -> Vec<u8> {
    let mut body = b"text\0\0\0\0".to_vec();
    body.extend_from_slice(text.as_bytes());
    body.push(0);
    body
}

/// v2 'desc' tag body with only the ASCII block populated
pub fn desc_tag(text: &str) -> Vec<u8> {
    TextDescription {
        ascii: text.to_string(),
        ..Default::default()
    }
    .encode()
}

/// 'XYZ ' tag body holding a single value
pub fn xyz_tag(x: f64, y: f64, z: f64) -> Vec<u8> {
    let mut body = b"XYZ \0\0\0\0".to_vec();
    for v in [x, y, z] {
        body.extend_from_slice(&(((v * 65536.0).round()) as i32).to_be_bytes());
    }
    body
}

/// 'sf32' chad tag body from a row-major 3x3 matrix
pub fn chad_tag(matrix: [[f64; 3]; 3]) -> Vec<u8> {
    let mut body = b"sf32\0\0\0\0".to_vec();
    for row in matrix {
        for v in row {
            body.extend_from_slice(&(((v * 65536.0).round()) as i32).to_be_bytes());
        }
    }
    body
}

/// 'curv' tag body with a u16 lookup table
pub fn curve_tag(entries: &[u16]) -> Vec<u8> {
    let mut body = b"curv\0\0\0\0".to_vec();
    body.extend_from_slice(&(entries.len() as u32).to_be_bytes());
    for v in entries {
        body.extend_from_slice(&v.to_be_bytes());
    }
    body
}

/// 'vcgt' formula tag body with one gamma/min/max triple per channel
pub fn vcgt_formula_tag(gamma: f64, min: f64, max: f64) -> Vec<u8> {
    let mut body = b"vcgt\0\0\0\0".to_vec();
    body.extend_from_slice(&1u32.to_be_bytes());
    for _ in 0..3 {
        for v in [gamma, min, max] {
            body.extend_from_slice(&(((v * 65536.0).round()) as u32).to_be_bytes());
        }
    }
    body
}

/// A tag body with a type signature no decoder knows
pub fn unknown_tag(payload: &[u8]) -> Vec<u8> {
    let mut body = b"zx51\0\0\0\0".to_vec();
    body.extend_from_slice(payload);
    body
}

/// A display profile touching every decoder the corpus tests rely on:
/// desc, cprt, wtpt + bkpt (aliased), chad, rTRC, vcgt, and an unknown tag
pub fn display_profile() -> Vec<u8> {
    // the D65 → D50 Bradford adaptation a real display profile carries
    let bradford_d65_to_d50 = oxicc_core::math::adaptation_matrix(
        oxicc_core::color::CieIlluminant::D65.into(),
        oxicc_core::color::ReferenceWhite::default(),
        oxicc_core::math::CatMethod::Bradford,
    )
    .expect("named whites always resolve")
    .m;
    profile_with_tags(&[
        CorpusTag::new(*b"desc", desc_tag("Corpus Display Profile")),
        CorpusTag::new(*b"cprt", text_tag("Public domain")),
        CorpusTag::new(*b"wtpt", xyz_tag(0.96422, 1.0, 0.82521)),
        CorpusTag::aliased(*b"bkpt"),
        CorpusTag::new(*b"chad", chad_tag(bradford_d65_to_d50)),
        CorpusTag::new(*b"rTRC", curve_tag(&[0, 13107, 26214, 39321, 52428, 65535])),
        CorpusTag::new(*b"vcgt", vcgt_formula_tag(2.2, 0.0, 1.0)),
        CorpusTag::new(*b"zxzx", unknown_tag(&[7, 6, 5, 4, 3, 2, 1])),
    ])
}
