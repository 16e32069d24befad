//! ICC Profile Header
//!
//! The profile header is exactly 128 bytes. Only the 'acsp' signature is
//! validated; every other field decodes leniently so that exotic but
//! well-formed profiles survive a round trip. The raw header bytes are kept
//! by the container and re-emitted verbatim on the write path.
//!
//! See ICC.1:2022 Section 7.2.

use crate::error::{Error, Result};
use crate::icc::primitives::{DateTimeNumber, XyzNumber, uint32_number, uint64_number};

/// Profile file signature - must be 'acsp' (0x61637370)
pub const PROFILE_SIGNATURE: u32 = 0x61637370;

/// Header length; also the minimum valid profile size
pub const HEADER_SIZE: usize = 128;

/// ICC Profile Version
///
/// Byte 8 is the major version; byte 9 packs the minor version and bugfix
/// level into its high and low nibbles. Displays as the two nibble digits
/// concatenated after the major version, e.g. `2.40`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProfileVersion {
    pub major: u8,
    pub minor: u8,
    pub bugfix: u8,
}

impl ProfileVersion {
    /// Check if this is a v4 profile
    pub fn is_v4(&self) -> bool {
        self.major == 4
    }

    /// Check if this is a v2 profile
    pub fn is_v2(&self) -> bool {
        self.major == 2
    }
}

impl std::fmt::Display for ProfileVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}{}", self.major, self.minor, self.bugfix)
    }
}

/// ICC Profile Class (Device Class)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileClass {
    /// Input device (scanner, camera)
    Input,
    /// Display device (monitor)
    Display,
    /// Output device (printer)
    Output,
    /// Device link
    DeviceLink,
    /// Color space conversion
    ColorSpace,
    /// Abstract profile
    Abstract,
    /// Named color profile
    NamedColor,
    /// Anything else, preserved as-is
    Other(u32),
}

impl ProfileClass {
    pub fn from_u32(val: u32) -> Self {
        match &val.to_be_bytes() {
            b"scnr" => Self::Input,
            b"mntr" => Self::Display,
            b"prtr" => Self::Output,
            b"link" => Self::DeviceLink,
            b"spac" => Self::ColorSpace,
            b"abst" => Self::Abstract,
            b"nmcl" => Self::NamedColor,
            _ => Self::Other(val),
        }
    }

    pub fn to_u32(self) -> u32 {
        match self {
            Self::Input => u32::from_be_bytes(*b"scnr"),
            Self::Display => u32::from_be_bytes(*b"mntr"),
            Self::Output => u32::from_be_bytes(*b"prtr"),
            Self::DeviceLink => u32::from_be_bytes(*b"link"),
            Self::ColorSpace => u32::from_be_bytes(*b"spac"),
            Self::Abstract => u32::from_be_bytes(*b"abst"),
            Self::NamedColor => u32::from_be_bytes(*b"nmcl"),
            Self::Other(val) => val,
        }
    }
}

/// ICC Color Space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    Xyz,
    Lab,
    Luv,
    YCbCr,
    Yxy,
    Rgb,
    Gray,
    Hsv,
    Hls,
    Cmyk,
    Cmy,
    /// N-component color (2..=15)
    Color(u8),
    /// Anything else, preserved as-is
    Other(u32),
}

impl ColorSpace {
    pub fn from_u32(val: u32) -> Self {
        match &val.to_be_bytes() {
            b"XYZ " => Self::Xyz,
            b"Lab " => Self::Lab,
            b"Luv " => Self::Luv,
            b"YCbr" => Self::YCbCr,
            b"Yxy " => Self::Yxy,
            b"RGB " => Self::Rgb,
            b"GRAY" => Self::Gray,
            b"HSV " => Self::Hsv,
            b"HLS " => Self::Hls,
            b"CMYK" => Self::Cmyk,
            b"CMY " => Self::Cmy,
            [c @ b'2'..=b'9', b'C', b'L', b'R'] => Self::Color(c - b'0'),
            [c @ b'A'..=b'F', b'C', b'L', b'R'] => Self::Color(c - b'A' + 10),
            _ => Self::Other(val),
        }
    }

    pub fn to_u32(self) -> u32 {
        match self {
            Self::Xyz => u32::from_be_bytes(*b"XYZ "),
            Self::Lab => u32::from_be_bytes(*b"Lab "),
            Self::Luv => u32::from_be_bytes(*b"Luv "),
            Self::YCbCr => u32::from_be_bytes(*b"YCbr"),
            Self::Yxy => u32::from_be_bytes(*b"Yxy "),
            Self::Rgb => u32::from_be_bytes(*b"RGB "),
            Self::Gray => u32::from_be_bytes(*b"GRAY"),
            Self::Hsv => u32::from_be_bytes(*b"HSV "),
            Self::Hls => u32::from_be_bytes(*b"HLS "),
            Self::Cmyk => u32::from_be_bytes(*b"CMYK"),
            Self::Cmy => u32::from_be_bytes(*b"CMY "),
            Self::Color(n) => {
                let c = if n < 10 { b'0' + n } else { b'A' + n - 10 };
                u32::from_be_bytes([c, b'C', b'L', b'R'])
            }
            Self::Other(val) => val,
        }
    }

    /// Number of channels, when known
    pub fn channels(self) -> Option<usize> {
        match self {
            Self::Gray => Some(1),
            Self::Xyz
            | Self::Lab
            | Self::Luv
            | Self::YCbCr
            | Self::Yxy
            | Self::Rgb
            | Self::Hsv
            | Self::Hls
            | Self::Cmy => Some(3),
            Self::Cmyk => Some(4),
            Self::Color(n) => Some(n as usize),
            Self::Other(_) => None,
        }
    }
}

/// ICC Rendering Intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderingIntent {
    /// Perceptual - best for photographs
    #[default]
    Perceptual,
    /// Relative colorimetric - preserves in-gamut colors
    RelativeColorimetric,
    /// Saturation - maintains saturation
    Saturation,
    /// Absolute colorimetric - preserves white point
    AbsoluteColorimetric,
    /// Out-of-range value, preserved as-is
    Other(u32),
}

impl RenderingIntent {
    pub fn from_u32(val: u32) -> Self {
        match val {
            0 => Self::Perceptual,
            1 => Self::RelativeColorimetric,
            2 => Self::Saturation,
            3 => Self::AbsoluteColorimetric,
            other => Self::Other(other),
        }
    }

    pub fn to_u32(self) -> u32 {
        match self {
            Self::Perceptual => 0,
            Self::RelativeColorimetric => 1,
            Self::Saturation => 2,
            Self::AbsoluteColorimetric => 3,
            Self::Other(val) => val,
        }
    }
}

/// Profile flags (header bytes 44-47)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProfileFlags {
    /// Bit 0: profile is embedded in a file
    pub embedded: bool,
    /// Bit 1 clear: profile may be used independently of the embedded
    /// color data
    pub independent: bool,
}

impl ProfileFlags {
    pub fn from_u32(flags: u32) -> Self {
        Self {
            embedded: flags | 1 == flags,
            independent: flags | 2 != flags,
        }
    }
}

/// Device attributes (header bytes 56-63)
///
/// Per the ICC convention a set bit means the negative state, so each field
/// here is true when its bit is unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceAttributes {
    /// Bit 0 clear: reflective media (set: transparency)
    pub reflective: bool,
    /// Bit 1 clear: glossy media (set: matte)
    pub glossy: bool,
    /// Bit 2 clear: positive media polarity (set: negative)
    pub positive: bool,
    /// Bit 3 clear: color media (set: black & white)
    pub color: bool,
}

impl DeviceAttributes {
    pub fn from_u64(attrs: u64) -> Self {
        Self {
            reflective: attrs | 1 != attrs,
            glossy: attrs | 2 != attrs,
            positive: attrs | 4 != attrs,
            color: attrs | 8 != attrs,
        }
    }
}

/// ICC Profile Header (128 bytes)
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileHeader {
    /// Declared profile size in bytes
    pub size: u32,
    /// Preferred CMM type signature
    pub cmm_type: u32,
    /// Profile version
    pub version: ProfileVersion,
    /// Device class
    pub profile_class: ProfileClass,
    /// Color space of device data
    pub color_space: ColorSpace,
    /// Profile connection space (XYZ or Lab)
    pub pcs: ColorSpace,
    /// Creation date and time
    pub creation_date: DateTimeNumber,
    /// Primary platform signature
    pub platform: u32,
    /// Profile flags
    pub flags: ProfileFlags,
    /// Raw flags word, preserved for diagnostics
    pub flags_raw: u32,
    /// Device manufacturer signature
    pub manufacturer: u32,
    /// Device model signature
    pub model: u32,
    /// Device attributes
    pub attributes: DeviceAttributes,
    /// Raw attributes word
    pub attributes_raw: u64,
    /// Rendering intent
    pub rendering_intent: RenderingIntent,
    /// PCS illuminant (nominally D50)
    pub illuminant: XyzNumber,
    /// Profile creator signature
    pub creator: u32,
    /// Profile ID (MD5 checksum), all-zero when never computed
    pub profile_id: [u8; 16],
}

impl ProfileHeader {
    /// Parse the 128-byte header
    ///
    /// Fails with [`Error::ProfileInvalid`] when the buffer is too short or
    /// the signature field is not 'acsp'.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_SIZE {
            return Err(Error::ProfileInvalid(format!(
                "not enough data: {} bytes",
                data.len()
            )));
        }

        let signature = uint32_number(&data[36..40])?;
        if signature != PROFILE_SIGNATURE {
            return Err(Error::ProfileInvalid(format!(
                "signature mismatch - expected 'acsp', found '{}'",
                String::from_utf8_lossy(&data[36..40])
            )));
        }

        let flags_raw = uint32_number(&data[44..48])?;
        let attributes_raw = uint64_number(&data[56..64])?;

        let mut profile_id = [0u8; 16];
        profile_id.copy_from_slice(&data[84..100]);

        Ok(Self {
            size: uint32_number(&data[0..4])?,
            cmm_type: uint32_number(&data[4..8])?,
            version: ProfileVersion {
                major: data[8],
                minor: data[9] >> 4,
                bugfix: data[9] & 0x0F,
            },
            profile_class: ProfileClass::from_u32(uint32_number(&data[12..16])?),
            color_space: ColorSpace::from_u32(uint32_number(&data[16..20])?),
            pcs: ColorSpace::from_u32(uint32_number(&data[20..24])?),
            creation_date: DateTimeNumber::from_bytes(&data[24..36])?,
            platform: uint32_number(&data[40..44])?,
            flags: ProfileFlags::from_u32(flags_raw),
            flags_raw,
            manufacturer: uint32_number(&data[48..52])?,
            model: uint32_number(&data[52..56])?,
            attributes: DeviceAttributes::from_u64(attributes_raw),
            attributes_raw,
            rendering_intent: RenderingIntent::from_u32(uint32_number(&data[64..68])?),
            illuminant: XyzNumber::from_bytes(&data[68..80])?,
            creator: uint32_number(&data[80..84])?,
            profile_id,
        })
    }

    /// Whether the profile ID field carried a checksum
    pub fn has_id(&self) -> bool {
        self.profile_id != [0u8; 16]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_header() -> Vec<u8> {
        let mut data = vec![0u8; HEADER_SIZE];
        data[0..4].copy_from_slice(&(HEADER_SIZE as u32).to_be_bytes());
        data[8] = 2;
        data[9] = 0x40;
        data[12..16].copy_from_slice(b"mntr");
        data[16..20].copy_from_slice(b"RGB ");
        data[20..24].copy_from_slice(b"XYZ ");
        data[36..40].copy_from_slice(&PROFILE_SIGNATURE.to_be_bytes());
        data
    }

    #[test]
    fn test_parse_minimal() {
        let header = ProfileHeader::parse(&minimal_header()).unwrap();
        assert_eq!(header.version.to_string(), "2.40");
        assert_eq!(header.profile_class, ProfileClass::Display);
        assert_eq!(header.color_space, ColorSpace::Rgb);
        assert_eq!(header.pcs, ColorSpace::Xyz);
        assert!(!header.has_id());
    }

    #[test]
    fn test_too_short() {
        assert!(matches!(
            ProfileHeader::parse(&[0u8; 100]),
            Err(Error::ProfileInvalid(_))
        ));
    }

    #[test]
    fn test_bad_signature() {
        let mut data = minimal_header();
        data[36..40].copy_from_slice(b"nope");
        assert!(matches!(
            ProfileHeader::parse(&data),
            Err(Error::ProfileInvalid(_))
        ));
    }

    #[test]
    fn test_unknown_class_is_not_fatal() {
        let mut data = minimal_header();
        data[12..16].copy_from_slice(b"wxyz");
        let header = ProfileHeader::parse(&data).unwrap();
        assert_eq!(
            header.profile_class,
            ProfileClass::Other(u32::from_be_bytes(*b"wxyz"))
        );
        assert_eq!(header.profile_class.to_u32(), u32::from_be_bytes(*b"wxyz"));
    }

    #[test]
    fn test_flags_and_attributes() {
        let mut data = minimal_header();
        data[44..48].copy_from_slice(&1u32.to_be_bytes()); // embedded
        data[56..64].copy_from_slice(&0b1010u64.to_be_bytes());
        let header = ProfileHeader::parse(&data).unwrap();

        assert!(header.flags.embedded);
        assert!(header.flags.independent);

        // set bits mean the negative state
        assert!(header.attributes.reflective);
        assert!(!header.attributes.glossy);
        assert!(header.attributes.positive);
        assert!(!header.attributes.color);
    }

    #[test]
    fn test_color_space_codes() {
        assert_eq!(
            ColorSpace::from_u32(u32::from_be_bytes(*b"5CLR")),
            ColorSpace::Color(5)
        );
        assert_eq!(
            ColorSpace::from_u32(u32::from_be_bytes(*b"FCLR")),
            ColorSpace::Color(15)
        );
        assert_eq!(ColorSpace::Color(11).to_u32(), u32::from_be_bytes(*b"BCLR"));
        assert_eq!(ColorSpace::Cmyk.channels(), Some(4));
        assert_eq!(ColorSpace::Color(7).channels(), Some(7));
    }

    #[test]
    fn test_rendering_intent_lenient() {
        assert_eq!(RenderingIntent::from_u32(2), RenderingIntent::Saturation);
        assert_eq!(RenderingIntent::from_u32(9), RenderingIntent::Other(9));
        assert_eq!(RenderingIntent::Other(9).to_u32(), 9);
    }
}
