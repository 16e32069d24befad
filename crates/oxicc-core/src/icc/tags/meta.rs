//! Measurement-related Tag Types
//!
//! chrm, meas, and view tags, plus the small fixed lookup tables they
//! reference (observer, standard illuminant, measurement geometry, phosphor
//! colorant) and the technology-signature table used by the `tech` tag.
//! An index outside one of these tables is a decode error, not a silent
//! default.

use crate::error::{Error, Result};
use crate::icc::primitives::{
    TagSignature, TypeSignature, XyzNumber, u16fixed16_bytes, u16fixed16_number, uint16_number,
    uint32_number,
};

/// Standard observer referenced by measurement data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observer {
    Unknown,
    Cie1931,
    Cie1964,
}

impl Observer {
    pub fn from_index(index: u32) -> Result<Self> {
        match index {
            0 => Ok(Self::Unknown),
            1 => Ok(Self::Cie1931),
            2 => Ok(Self::Cie1964),
            _ => Err(Error::UnknownIndex {
                table: "observer",
                index,
            }),
        }
    }

    pub fn index(self) -> u32 {
        match self {
            Self::Unknown => 0,
            Self::Cie1931 => 1,
            Self::Cie1964 => 2,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Cie1931 => "CIE 1931",
            Self::Cie1964 => "CIE 1964",
        }
    }
}

/// Standard illuminant referenced by measurement and viewing conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardIlluminant {
    Unknown,
    D50,
    D65,
    D93,
    F2,
    D55,
    A,
    E,
    F8,
}

impl StandardIlluminant {
    pub fn from_index(index: u32) -> Result<Self> {
        match index {
            0 => Ok(Self::Unknown),
            1 => Ok(Self::D50),
            2 => Ok(Self::D65),
            3 => Ok(Self::D93),
            4 => Ok(Self::F2),
            5 => Ok(Self::D55),
            6 => Ok(Self::A),
            7 => Ok(Self::E),
            8 => Ok(Self::F8),
            _ => Err(Error::UnknownIndex {
                table: "illuminant",
                index,
            }),
        }
    }

    pub fn index(self) -> u32 {
        match self {
            Self::Unknown => 0,
            Self::D50 => 1,
            Self::D65 => 2,
            Self::D93 => 3,
            Self::F2 => 4,
            Self::D55 => 5,
            Self::A => 6,
            Self::E => 7,
            Self::F8 => 8,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::D50 => "D50",
            Self::D65 => "D65",
            Self::D93 => "D93",
            Self::F2 => "F2",
            Self::D55 => "D55",
            Self::A => "A",
            Self::E => "E",
            Self::F8 => "F8",
        }
    }
}

/// Measurement geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    Unknown,
    /// 0°:45° or 45°:0°
    G045,
    /// 0°:diffuse or diffuse:0°
    G0d,
}

impl Geometry {
    pub fn from_index(index: u32) -> Result<Self> {
        match index {
            0 => Ok(Self::Unknown),
            1 => Ok(Self::G045),
            2 => Ok(Self::G0d),
            _ => Err(Error::UnknownIndex {
                table: "geometry",
                index,
            }),
        }
    }

    pub fn index(self) -> u32 {
        match self {
            Self::Unknown => 0,
            Self::G045 => 1,
            Self::G0d => 2,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::G045 => "0/45 or 45/0",
            Self::G0d => "0/d or d/0",
        }
    }
}

/// Known phosphor/colorant sets for the chrm tag, as
/// (description, [(x, y); 3])
pub fn colorant_info(index: u16) -> Option<(&'static str, [(f64, f64); 3])> {
    match index {
        1 => Some((
            "ITU-R BT.709",
            [(0.64, 0.33), (0.3, 0.6), (0.15, 0.06)],
        )),
        2 => Some((
            "SMPTE RP145-1994",
            [(0.63, 0.34), (0.31, 0.595), (0.155, 0.07)],
        )),
        3 => Some((
            "EBU Tech.3213-E",
            [(0.64, 0.33), (0.29, 0.6), (0.15, 0.06)],
        )),
        4 => Some(("P22", [(0.625, 0.34), (0.28, 0.605), (0.155, 0.07)])),
        _ => None,
    }
}

/// Device technology descriptions for the `tech` tag's signature
pub fn technology_description(sig: TagSignature) -> Option<&'static str> {
    match &sig.to_bytes() {
        b"AMD " => Some("Active Matrix Display"),
        b"CRT " => Some("Cathode Ray Tube Display"),
        b"KPCD" => Some("Photo CD"),
        b"PMD " => Some("Passive Matrix Display"),
        b"dcam" => Some("Digital Camera"),
        b"dcpj" => Some("Digital Cinema Projector"),
        b"dmpc" => Some("Digital Motion Picture Camera"),
        b"dsub" => Some("Dye Sublimation Printer"),
        b"epho" => Some("Electrophotographic Printer"),
        b"esta" => Some("Electrostatic Printer"),
        b"flex" => Some("Flexography"),
        b"fprn" => Some("Film Writer"),
        b"fscn" => Some("Film Scanner"),
        b"grav" => Some("Gravure"),
        b"ijet" => Some("Ink Jet Printer"),
        b"imgs" => Some("Photo Image Setter"),
        b"mpfr" => Some("Motion Picture Film Recorder"),
        b"mpfs" => Some("Motion Picture Film Scanner"),
        b"offs" => Some("Offset Lithography"),
        b"pjtv" => Some("Projection Television"),
        b"rpho" => Some("Photographic Paper Printer"),
        b"rscn" => Some("Reflective Scanner"),
        b"silk" => Some("Silkscreen"),
        b"twax" => Some("Thermal Wax Printer"),
        b"vidc" => Some("Video Camera"),
        b"vidm" => Some("Video Monitor"),
        _ => None,
    }
}

/// Chromaticity tag data (chrm)
#[derive(Debug, Clone, PartialEq)]
pub struct ChromaticityData {
    /// Number of device channels
    pub channel_count: u16,
    /// Phosphor/colorant index; resolve with [`colorant_info`]
    pub colorant: u16,
    /// Per-channel (x, y) chromaticities
    pub channels: Vec<(f64, f64)>,
}

impl ChromaticityData {
    /// Parse a full chrm tag, including its 8-byte type header
    pub fn parse(data: &[u8]) -> Result<Self> {
        let payload = data.get(8..).ok_or(Error::Truncated {
            expected: 8,
            actual: data.len(),
        })?;
        let channel_count = uint16_number(payload)?;
        let colorant = uint16_number(&payload[2..])?;

        let mut channels = Vec::new();
        let mut rest = &payload[4..];
        while rest.len() >= 8 {
            channels.push((
                u16fixed16_number(&rest[0..4])?,
                u16fixed16_number(&rest[4..8])?,
            ));
            rest = &rest[8..];
        }

        Ok(Self {
            channel_count,
            colorant,
            channels,
        })
    }

    /// Re-encode to full tag bytes
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&TypeSignature::CHRM.to_bytes());
        out.extend_from_slice(&[0u8; 4]);
        out.extend_from_slice(&self.channel_count.to_be_bytes());
        out.extend_from_slice(&self.colorant.to_be_bytes());
        for &(x, y) in &self.channels {
            out.extend_from_slice(&u16fixed16_bytes(x));
            out.extend_from_slice(&u16fixed16_bytes(y));
        }
        out
    }

    /// Description of the colorant set, when the index is a known one
    pub fn colorant_description(&self) -> Option<&'static str> {
        colorant_info(self.colorant).map(|(desc, _)| desc)
    }
}

/// Measurement tag data (meas)
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementData {
    pub observer: Observer,
    pub backing: XyzNumber,
    pub geometry: Geometry,
    pub flare: f64,
    pub illuminant: StandardIlluminant,
}

impl MeasurementData {
    /// Parse a full meas tag, including its 8-byte type header
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < 36 {
            return Err(Error::Truncated {
                expected: 36,
                actual: data.len(),
            });
        }
        Ok(Self {
            observer: Observer::from_index(uint32_number(&data[8..12])?)?,
            backing: XyzNumber::from_bytes(&data[12..24])?,
            geometry: Geometry::from_index(uint32_number(&data[24..28])?)?,
            flare: u16fixed16_number(&data[28..32])?,
            illuminant: StandardIlluminant::from_index(uint32_number(&data[32..36])?)?,
        })
    }

    /// Re-encode to full tag bytes
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&TypeSignature::MEAS.to_bytes());
        out.extend_from_slice(&[0u8; 4]);
        out.extend_from_slice(&self.observer.index().to_be_bytes());
        out.extend_from_slice(&self.backing.to_bytes());
        out.extend_from_slice(&self.geometry.index().to_be_bytes());
        out.extend_from_slice(&u16fixed16_bytes(self.flare));
        out.extend_from_slice(&self.illuminant.index().to_be_bytes());
        out
    }
}

/// Viewing conditions tag data (view)
#[derive(Debug, Clone, PartialEq)]
pub struct ViewingConditionsData {
    pub illuminant: XyzNumber,
    pub surround: XyzNumber,
    pub illuminant_type: StandardIlluminant,
}

impl ViewingConditionsData {
    /// Parse a full view tag, including its 8-byte type header
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < 36 {
            return Err(Error::Truncated {
                expected: 36,
                actual: data.len(),
            });
        }
        Ok(Self {
            illuminant: XyzNumber::from_bytes(&data[8..20])?,
            surround: XyzNumber::from_bytes(&data[20..32])?,
            illuminant_type: StandardIlluminant::from_index(uint32_number(&data[32..36])?)?,
        })
    }

    /// Re-encode to full tag bytes
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&TypeSignature::VIEW.to_bytes());
        out.extend_from_slice(&[0u8; 4]);
        out.extend_from_slice(&self.illuminant.to_bytes());
        out.extend_from_slice(&self.surround.to_bytes());
        out.extend_from_slice(&self.illuminant_type.index().to_be_bytes());
        out
    }
}
