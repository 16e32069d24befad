//! ICC Primitive Data Types
//!
//! Fixed-width big-endian fields as defined in ICC.1:2022 Section 4.
//! Every primitive has a decode and an encode direction; decoding a buffer
//! shorter than the field width is a [`Error::Truncated`] condition.

use crate::color::Xyz;
use crate::error::{Error, Result};

fn require(data: &[u8], width: usize) -> Result<&[u8]> {
    data.get(..width).ok_or(Error::Truncated {
        expected: width,
        actual: data.len(),
    })
}

/// uInt8Number
pub fn uint8_number(data: &[u8]) -> Result<u8> {
    Ok(require(data, 1)?[0])
}

/// uInt16Number
pub fn uint16_number(data: &[u8]) -> Result<u16> {
    let b = require(data, 2)?;
    Ok(u16::from_be_bytes([b[0], b[1]]))
}

/// uInt32Number
pub fn uint32_number(data: &[u8]) -> Result<u32> {
    let b = require(data, 4)?;
    Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
}

/// uInt64Number
pub fn uint64_number(data: &[u8]) -> Result<u64> {
    let b = require(data, 8)?;
    Ok(u64::from_be_bytes([
        b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7],
    ]))
}

/// s15Fixed16Number - signed 16.16 fixed point
pub fn s15fixed16_number(data: &[u8]) -> Result<f64> {
    let b = require(data, 4)?;
    Ok(i32::from_be_bytes([b[0], b[1], b[2], b[3]]) as f64 / 65536.0)
}

/// u16Fixed16Number - unsigned 16.16 fixed point
pub fn u16fixed16_number(data: &[u8]) -> Result<f64> {
    let b = require(data, 4)?;
    Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]) as f64 / 65536.0)
}

/// u8Fixed8Number - unsigned 8.8 fixed point
pub fn u8fixed8_number(data: &[u8]) -> Result<f64> {
    let b = require(data, 2)?;
    Ok(u16::from_be_bytes([b[0], b[1]]) as f64 / 256.0)
}

/// uInt8Number encoder
pub fn uint8_bytes(value: u8) -> [u8; 1] {
    [value]
}

/// uInt16Number encoder
pub fn uint16_bytes(value: u16) -> [u8; 2] {
    value.to_be_bytes()
}

/// uInt32Number encoder
pub fn uint32_bytes(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}

/// uInt64Number encoder
pub fn uint64_bytes(value: u64) -> [u8; 8] {
    value.to_be_bytes()
}

/// s15Fixed16Number encoder
pub fn s15fixed16_bytes(value: f64) -> [u8; 4] {
    (((value * 65536.0).round()) as i32).to_be_bytes()
}

/// u16Fixed16Number encoder
pub fn u16fixed16_bytes(value: f64) -> [u8; 4] {
    (((value * 65536.0).round()) as u32).to_be_bytes()
}

/// u8Fixed8Number encoder
pub fn u8fixed8_bytes(value: f64) -> [u8; 2] {
    (((value * 256.0).round()) as u16).to_be_bytes()
}

/// Render a 4-byte code as printable text, trimming NULs and whitespace.
pub fn fourcc_str(value: u32) -> String {
    let bytes = value.to_be_bytes();
    String::from_utf8_lossy(&bytes)
        .trim_matches(['\0', '\n', '\r', ' '])
        .to_string()
}

/// ICC Tag Signature (4-byte ASCII code)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagSignature(pub u32);

impl TagSignature {
    /// Create from 4 ASCII characters
    pub const fn from_bytes(b: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(b))
    }

    /// The signature's raw bytes
    pub const fn to_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    // Common tag signatures
    pub const CHAD: Self = Self::from_bytes(*b"chad");
    pub const COPYRIGHT: Self = Self::from_bytes(*b"cprt");
    pub const DESC: Self = Self::from_bytes(*b"desc");
    pub const DMDD: Self = Self::from_bytes(*b"dmdd");
    pub const DMND: Self = Self::from_bytes(*b"dmnd");
    pub const LUMINANCE: Self = Self::from_bytes(*b"lumi");
    pub const MEAS: Self = Self::from_bytes(*b"meas");
    pub const MEDIA_BLACK: Self = Self::from_bytes(*b"bkpt");
    pub const MEDIA_WHITE: Self = Self::from_bytes(*b"wtpt");
    pub const TECH: Self = Self::from_bytes(*b"tech");
    pub const VCGT: Self = Self::from_bytes(*b"vcgt");
    pub const VIEW_COND: Self = Self::from_bytes(*b"view");
    pub const VIEW_COND_DESC: Self = Self::from_bytes(*b"vued");
}

impl std::fmt::Display for TagSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.to_bytes()))
    }
}

/// Type signatures for ICC tag data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeSignature(pub u32);

impl TypeSignature {
    pub const fn from_bytes(b: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(b))
    }

    pub const fn to_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    // Known type signatures
    pub const CHRM: Self = Self::from_bytes(*b"chrm");
    pub const CURV: Self = Self::from_bytes(*b"curv");
    pub const DESC: Self = Self::from_bytes(*b"desc");
    pub const DTIM: Self = Self::from_bytes(*b"dtim");
    pub const MEAS: Self = Self::from_bytes(*b"meas");
    pub const MLUC: Self = Self::from_bytes(*b"mluc");
    pub const SF32: Self = Self::from_bytes(*b"sf32");
    pub const SIG: Self = Self::from_bytes(*b"sig ");
    pub const TEXT: Self = Self::from_bytes(*b"text");
    pub const VCGT: Self = Self::from_bytes(*b"vcgt");
    pub const VIEW: Self = Self::from_bytes(*b"view");
    pub const XYZ: Self = Self::from_bytes(*b"XYZ ");
}

impl std::fmt::Display for TypeSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.to_bytes()))
    }
}

/// XYZNumber - ICC XYZ value (3 x s15Fixed16, 12 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct XyzNumber {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl XyzNumber {
    /// Parse from 12 big-endian bytes
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let b = require(data, 12)?;
        Ok(Self {
            x: s15fixed16_number(&b[0..4])?,
            y: s15fixed16_number(&b[4..8])?,
            z: s15fixed16_number(&b[8..12])?,
        })
    }

    /// Encode back to 12 big-endian bytes
    pub fn to_bytes(&self) -> [u8; 12] {
        let mut out = [0u8; 12];
        out[0..4].copy_from_slice(&s15fixed16_bytes(self.x));
        out[4..8].copy_from_slice(&s15fixed16_bytes(self.y));
        out[8..12].copy_from_slice(&s15fixed16_bytes(self.z));
        out
    }

    /// Convert to the Xyz color type
    pub fn to_xyz(&self) -> Xyz {
        Xyz::new(self.x, self.y, self.z)
    }
}

/// dateTimeNumber - ICC date/time (6 x uInt16, 12 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateTimeNumber {
    pub year: u16,
    pub month: u16,
    pub day: u16,
    pub hour: u16,
    pub minute: u16,
    pub second: u16,
}

impl DateTimeNumber {
    /// Parse from 12 big-endian bytes
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let b = require(data, 12)?;
        Ok(Self {
            year: uint16_number(&b[0..2])?,
            month: uint16_number(&b[2..4])?,
            day: uint16_number(&b[4..6])?,
            hour: uint16_number(&b[6..8])?,
            minute: uint16_number(&b[8..10])?,
            second: uint16_number(&b[10..12])?,
        })
    }

    /// Encode back to 12 big-endian bytes
    pub fn to_bytes(&self) -> [u8; 12] {
        let mut out = [0u8; 12];
        for (i, v) in [
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        ]
        .iter()
        .enumerate()
        {
            out[i * 2..i * 2 + 2].copy_from_slice(&v.to_be_bytes());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uint_decode() {
        assert_eq!(uint8_number(&[0xAB]).unwrap(), 0xAB);
        assert_eq!(uint16_number(&[0x12, 0x34]).unwrap(), 0x1234);
        assert_eq!(uint32_number(&[0, 0, 0x12, 0x34]).unwrap(), 0x1234);
        assert_eq!(
            uint64_number(&[0, 0, 0, 0, 0, 0, 0x12, 0x34]).unwrap(),
            0x1234
        );
    }

    #[test]
    fn test_truncated_is_fatal() {
        let err = uint32_number(&[0x12, 0x34]).unwrap_err();
        match err {
            Error::Truncated { expected, actual } => {
                assert_eq!(expected, 4);
                assert_eq!(actual, 2);
            }
            other => panic!("expected Truncated, got {other:?}"),
        }
    }

    #[test]
    fn test_s15fixed16() {
        assert!((s15fixed16_number(&[0, 1, 0, 0]).unwrap() - 1.0).abs() < 1e-9);
        assert!((s15fixed16_number(&[0, 0, 0x80, 0]).unwrap() - 0.5).abs() < 1e-9);

        // -1.5 = 0xFFFE8000
        let neg = s15fixed16_number(&[0xFF, 0xFE, 0x80, 0x00]).unwrap();
        assert!((neg - (-1.5)).abs() < 1e-9);
        assert_eq!(s15fixed16_bytes(-1.5), [0xFF, 0xFE, 0x80, 0x00]);
    }

    #[test]
    fn test_fixed_point_roundtrip() {
        for raw in [0i32, 1, -1, 65536, -65536, 0x7FFF_FFFF, 12345678] {
            let decoded = s15fixed16_number(&raw.to_be_bytes()).unwrap();
            assert_eq!(s15fixed16_bytes(decoded), raw.to_be_bytes());
        }
        for raw in [0u32, 1, 65536, 0xFFFF_FFFF] {
            let decoded = u16fixed16_number(&raw.to_be_bytes()).unwrap();
            assert_eq!(u16fixed16_bytes(decoded), raw.to_be_bytes());
        }
        for raw in [0u16, 1, 256, 0x0266, 0xFFFF] {
            let decoded = u8fixed8_number(&raw.to_be_bytes()).unwrap();
            assert_eq!(u8fixed8_bytes(decoded), raw.to_be_bytes());
        }
    }

    #[test]
    fn test_xyz_number() {
        // D50 white point in ICC encoding
        let bytes: [u8; 12] = [
            0x00, 0x00, 0xF6, 0xD6, // X = 0.9642
            0x00, 0x01, 0x00, 0x00, // Y = 1.0
            0x00, 0x00, 0xD3, 0x2D, // Z = 0.8249
        ];
        let xyz = XyzNumber::from_bytes(&bytes).unwrap();
        assert!((xyz.x - 0.9642).abs() < 0.001);
        assert!((xyz.y - 1.0).abs() < 0.001);
        assert!((xyz.z - 0.8249).abs() < 0.001);
        assert_eq!(xyz.to_bytes(), bytes);
    }

    #[test]
    fn test_date_time_number() {
        let dt = DateTimeNumber {
            year: 2009,
            month: 3,
            day: 27,
            hour: 21,
            minute: 36,
            second: 31,
        };
        let bytes = dt.to_bytes();
        assert_eq!(DateTimeNumber::from_bytes(&bytes).unwrap(), dt);
    }

    #[test]
    fn test_signatures() {
        assert_eq!(TagSignature::DESC.to_string(), "desc");
        assert_eq!(TypeSignature::XYZ.to_string(), "XYZ ");
        assert_eq!(fourcc_str(u32::from_be_bytes(*b"ADBE")), "ADBE");
        assert_eq!(fourcc_str(u32::from_be_bytes(*b"XYZ ")), "XYZ");
    }
}
