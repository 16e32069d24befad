//! ICC Profile Tag Parsing
//!
//! Each tag body starts with a 4-byte type signature and 4 reserved bytes,
//! followed by type-specific data. The set of known types is closed at
//! compile time; anything else is preserved opaquely as raw bytes and
//! round-trips exactly.
//!
//! The one exception to type-driven dispatch is the `chad` tag, which ICC
//! stores as a bare s15Fixed16 array: it is keyed on the tag signature and
//! decoded as a 3x3 matrix.
//!
//! See ICC.1:2022 Section 9.

mod curve;
mod meta;
mod text;
mod vcgt;
mod xyz;

pub use curve::CurveData;
pub use meta::{
    ChromaticityData, Geometry, MeasurementData, Observer, StandardIlluminant,
    ViewingConditionsData, colorant_info, technology_description,
};
pub use text::{
    MlucRecord, MultiLocalizedUnicode, TextDescription, mac_roman_decode, mac_roman_encode,
    mac_script_name,
};
pub use vcgt::{VcgtChannel, VcgtFormula, VcgtTable, VideoCardGamma};
pub use xyz::XyzTagData;

use crate::error::{Error, Result};
use crate::icc::primitives::{
    DateTimeNumber, TagSignature, TypeSignature, s15fixed16_bytes, s15fixed16_number, uint32_number,
};
use crate::math::Matrix3x3;

use thiserror::Error as ThisError;

/// A recoverable malformation found while decoding a tag
///
/// Warnings accompany the decoded value instead of aborting the decode; the
/// affected localized string is omitted when it cannot be recovered.
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeWarning {
    /// desc Unicode length was declared in bytes instead of UTF-16 units
    #[error("'{tag}' Unicode length given in bytes, assuming code units")]
    UnicodeLengthInBytes { tag: TagSignature },
    /// desc Unicode BOM contradicts the payload's actual byte order
    #[error("'{tag}' Unicode BOM contradicts payload byte order")]
    UnicodeEndianMismatch { tag: TagSignature },
    /// desc Unicode block is single-byte text disguised as double-byte
    #[error("'{tag}' Unicode part is a single-byte string")]
    UnicodeSingleByte { tag: TagSignature },
    /// desc Unicode text contained stray NUL bytes and was dropped
    #[error("'{tag}' Unicode part contains null bytes")]
    UnicodeNullBytes { tag: TagSignature },
    /// desc Macintosh block offset pointed at null padding
    #[error("'{tag}' Macintosh part offset points to null bytes")]
    MacOffsetNullPadding { tag: TagSignature },
    /// desc Macintosh block uses a script this decoder does not transcode
    #[error("'{tag}' Macintosh part uses unsupported script code {script}")]
    MacScriptUnsupported { tag: TagSignature, script: u16 },
}

/// A decoded tag body
#[derive(Debug, Clone, PartialEq)]
pub enum TagData {
    /// chrm: device chromaticities
    Chromaticity(ChromaticityData),
    /// curv: tone reproduction curve
    Curve(CurveData),
    /// dtim: date and time
    DateTime(DateTimeNumber),
    /// meas: measurement conditions
    Measurement(MeasurementData),
    /// mluc: v4 localized text
    MultiLocalizedUnicode(MultiLocalizedUnicode),
    /// sf32: s15Fixed16 array
    S15Fixed16Array(Vec<f64>),
    /// sig: a 4-byte signature
    Signature(TagSignature),
    /// text: plain ASCII
    Text(String),
    /// desc: v2 profile description
    TextDescription(TextDescription),
    /// vcgt: video card gamma table or formula
    VideoCardGamma(VideoCardGamma),
    /// view: viewing conditions
    ViewingConditions(ViewingConditionsData),
    /// XYZ: one or more XYZ numbers
    Xyz(XyzTagData),
    /// chad: chromatic adaptation matrix (tag-signature keyed)
    ChromaticAdaptation(Matrix3x3),
    /// Anything else, preserved byte-exactly
    Unknown { type_sig: TypeSignature, data: Vec<u8> },
}

impl TagData {
    /// Decode a tag body
    ///
    /// `data` is the full body including the type signature and reserved
    /// bytes; `tag_sig` drives the `chad` exception. Unknown type signatures
    /// are not an error. Recoverable malformations are returned alongside
    /// the decoded tag.
    pub fn decode(tag_sig: TagSignature, data: &[u8]) -> Result<(Self, Vec<DecodeWarning>)> {
        if data.len() < 8 {
            return Err(Error::Truncated {
                expected: 8,
                actual: data.len(),
            });
        }
        let type_sig = TypeSignature(uint32_number(data)?);

        if tag_sig == TagSignature::CHAD {
            return Ok((Self::ChromaticAdaptation(parse_chad(data)?), Vec::new()));
        }

        let tag = match type_sig {
            TypeSignature::CHRM => Self::Chromaticity(ChromaticityData::parse(data)?),
            TypeSignature::CURV => Self::Curve(CurveData::parse(data)?),
            TypeSignature::DESC => {
                let (desc, warnings) = TextDescription::parse(data, tag_sig)?;
                return Ok((Self::TextDescription(desc), warnings));
            }
            TypeSignature::DTIM => Self::DateTime(DateTimeNumber::from_bytes(
                data.get(8..).ok_or(Error::Truncated {
                    expected: 20,
                    actual: data.len(),
                })?,
            )?),
            TypeSignature::MEAS => Self::Measurement(MeasurementData::parse(data)?),
            TypeSignature::MLUC => {
                Self::MultiLocalizedUnicode(MultiLocalizedUnicode::parse(data)?)
            }
            TypeSignature::SF32 => Self::S15Fixed16Array(parse_sf32(data)?),
            TypeSignature::SIG => Self::Signature(TagSignature(uint32_number(
                data.get(8..).ok_or(Error::Truncated {
                    expected: 12,
                    actual: data.len(),
                })?,
            )?)),
            TypeSignature::TEXT => Self::Text(text::parse_text(data)?),
            TypeSignature::VCGT => Self::VideoCardGamma(VideoCardGamma::parse(data)?),
            TypeSignature::VIEW => Self::ViewingConditions(ViewingConditionsData::parse(data)?),
            TypeSignature::XYZ => Self::Xyz(XyzTagData::parse(data)?),
            _ => Self::Unknown {
                type_sig,
                data: data.to_vec(),
            },
        };
        Ok((tag, Vec::new()))
    }

    /// Re-encode to full tag bytes (type signature + reserved + payload)
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::Chromaticity(v) => v.encode(),
            Self::Curve(v) => v.encode(),
            Self::DateTime(v) => {
                let mut out = Vec::with_capacity(20);
                out.extend_from_slice(&TypeSignature::DTIM.to_bytes());
                out.extend_from_slice(&[0u8; 4]);
                out.extend_from_slice(&v.to_bytes());
                out
            }
            Self::Measurement(v) => v.encode(),
            Self::MultiLocalizedUnicode(v) => v.encode(),
            Self::S15Fixed16Array(values) => {
                let mut out = Vec::with_capacity(8 + values.len() * 4);
                out.extend_from_slice(&TypeSignature::SF32.to_bytes());
                out.extend_from_slice(&[0u8; 4]);
                for &v in values {
                    out.extend_from_slice(&s15fixed16_bytes(v));
                }
                out
            }
            Self::Signature(sig) => {
                let mut out = Vec::with_capacity(12);
                out.extend_from_slice(&TypeSignature::SIG.to_bytes());
                out.extend_from_slice(&[0u8; 4]);
                out.extend_from_slice(&sig.to_bytes());
                out
            }
            Self::Text(v) => text::encode_text(v),
            Self::TextDescription(v) => v.encode(),
            Self::VideoCardGamma(v) => v.encode(),
            Self::ViewingConditions(v) => v.encode(),
            Self::Xyz(v) => v.encode(),
            Self::ChromaticAdaptation(matrix) => {
                let mut out = Vec::with_capacity(44);
                out.extend_from_slice(&TypeSignature::SF32.to_bytes());
                out.extend_from_slice(&[0u8; 4]);
                for row in matrix.m {
                    for v in row {
                        out.extend_from_slice(&s15fixed16_bytes(v));
                    }
                }
                out
            }
            Self::Unknown { data, .. } => data.clone(),
        }
    }

    /// The best human-readable text of this tag, when it has one
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::TextDescription(d) => d.best(),
            Self::MultiLocalizedUnicode(m) => m.preferred(),
            _ => None,
        }
    }

    /// The tag's XYZ value, when it is an XYZ tag
    pub fn as_xyz(&self) -> Option<crate::color::Xyz> {
        match self {
            Self::Xyz(x) => x.to_xyz(),
            _ => None,
        }
    }
}

fn parse_sf32(data: &[u8]) -> Result<Vec<f64>> {
    let payload = data.get(8..).ok_or(Error::Truncated {
        expected: 8,
        actual: data.len(),
    })?;
    payload
        .chunks_exact(4)
        .map(s15fixed16_number)
        .collect()
}

fn parse_chad(data: &[u8]) -> Result<Matrix3x3> {
    let values = parse_sf32(data)?;
    if values.len() < 9 {
        return Err(Error::CorruptedData(format!(
            "chad matrix needs 9 values, found {}",
            values.len()
        )));
    }
    Ok(Matrix3x3::new([
        [values[0], values[1], values[2]],
        [values[3], values[4], values[5]],
        [values[6], values[7], values[8]],
    ]))
}
