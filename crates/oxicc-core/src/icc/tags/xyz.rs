//! XYZ Tag Type
//!
//! Holds one or more XYZNumbers. Used for colorants, white point, black
//! point, and luminance.
//!
//! See ICC.1:2022 Section 10.31.

use crate::color::Xyz;
use crate::error::{Error, Result};
use crate::icc::primitives::{TypeSignature, XyzNumber};

/// XYZ tag data - one or more XYZ values
#[derive(Debug, Clone, PartialEq)]
pub struct XyzTagData {
    /// XYZ values stored in the tag
    pub values: Vec<XyzNumber>,
}

impl XyzTagData {
    /// Parse a full XYZ tag, including its 8-byte type header
    pub fn parse(data: &[u8]) -> Result<Self> {
        let payload = data.get(8..).ok_or(Error::Truncated {
            expected: 8,
            actual: data.len(),
        })?;
        if payload.len() < 12 {
            return Err(Error::CorruptedData("XYZ tag too small".to_string()));
        }

        let mut values = Vec::with_capacity(payload.len() / 12);
        for chunk in payload.chunks_exact(12) {
            values.push(XyzNumber::from_bytes(chunk)?);
        }
        Ok(Self { values })
    }

    /// Re-encode to full tag bytes
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&TypeSignature::XYZ.to_bytes());
        out.extend_from_slice(&[0u8; 4]);
        for v in &self.values {
            out.extend_from_slice(&v.to_bytes());
        }
        out
    }

    /// Get the first XYZ value (the common single-value case)
    pub fn first(&self) -> Option<&XyzNumber> {
        self.values.first()
    }

    /// Get the first value as the Xyz color type
    pub fn to_xyz(&self) -> Option<Xyz> {
        self.values.first().map(|v| v.to_xyz())
    }
}
