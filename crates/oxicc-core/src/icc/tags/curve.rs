//! Curve Tag Type (curv)
//!
//! A count of 0 is the identity curve, a count of 1 is a single u8Fixed8
//! gamma value, and anything larger is a u16 lookup table.
//!
//! See ICC.1:2022 Section 10.6.

use crate::error::{Error, Result};
use crate::icc::primitives::{
    TypeSignature, u8fixed8_bytes, u8fixed8_number, uint16_number, uint32_number,
};

/// Curve tag data (curv type)
#[derive(Debug, Clone, PartialEq)]
pub enum CurveData {
    /// Identity curve (count = 0)
    Identity,
    /// Simple gamma (count = 1, value is u8Fixed8)
    Gamma(f64),
    /// Lookup table (count > 1, values are u16)
    Table(Vec<u16>),
}

impl CurveData {
    /// Parse a full curv tag, including its 8-byte type header
    pub fn parse(data: &[u8]) -> Result<Self> {
        let payload = data.get(8..).ok_or(Error::Truncated {
            expected: 8,
            actual: data.len(),
        })?;
        let count = uint32_number(payload)? as usize;

        match count {
            0 => Ok(Self::Identity),
            1 => Ok(Self::Gamma(u8fixed8_number(&payload[4..])?)),
            _ => {
                let entries = payload.get(4..4 + count * 2).ok_or(Error::Truncated {
                    expected: 4 + count * 2,
                    actual: payload.len(),
                })?;
                let mut table = Vec::with_capacity(count);
                for chunk in entries.chunks_exact(2) {
                    table.push(uint16_number(chunk)?);
                }
                Ok(Self::Table(table))
            }
        }
    }

    /// Re-encode to full tag bytes
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&TypeSignature::CURV.to_bytes());
        out.extend_from_slice(&[0u8; 4]);
        match self {
            Self::Identity => out.extend_from_slice(&0u32.to_be_bytes()),
            Self::Gamma(g) => {
                out.extend_from_slice(&1u32.to_be_bytes());
                out.extend_from_slice(&u8fixed8_bytes(*g));
            }
            Self::Table(table) => {
                out.extend_from_slice(&(table.len() as u32).to_be_bytes());
                for v in table {
                    out.extend_from_slice(&v.to_be_bytes());
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curv_bytes(entries: &[u8]) -> Vec<u8> {
        let mut data = b"curv\0\0\0\0".to_vec();
        data.extend_from_slice(entries);
        data
    }

    #[test]
    fn test_identity() {
        let data = curv_bytes(&[0, 0, 0, 0]);
        assert_eq!(CurveData::parse(&data).unwrap(), CurveData::Identity);
    }

    #[test]
    fn test_gamma() {
        // count = 1, gamma 2.2 as u8Fixed8 (2.2 * 256 = 563.2 -> 0x0233)
        let data = curv_bytes(&[0, 0, 0, 1, 0x02, 0x33]);
        match CurveData::parse(&data).unwrap() {
            CurveData::Gamma(g) => assert!((g - 2.19921875).abs() < 1e-9),
            other => panic!("expected gamma, got {other:?}"),
        }
    }

    #[test]
    fn test_table_roundtrip() {
        let curve = CurveData::Table(vec![0, 16384, 32768, 49152, 65535]);
        let bytes = curve.encode();
        assert_eq!(CurveData::parse(&bytes).unwrap(), curve);
    }

    #[test]
    fn test_truncated_table() {
        // declares 4 entries but carries only 2
        let data = curv_bytes(&[0, 0, 0, 4, 0, 1, 0, 2]);
        assert!(CurveData::parse(&data).is_err());
    }
}
