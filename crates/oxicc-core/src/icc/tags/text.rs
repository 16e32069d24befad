//! Text Tag Types
//!
//! Three generations of ICC text storage:
//! - text: NUL-terminated ASCII
//! - desc: the v2 profile description with ASCII + UTF-16 + Mac-script
//!   blocks, each independently present
//! - mluc: the v4 multi-localized Unicode record table
//!
//! The desc decoder tolerates the malformations produced by well-known
//! broken encoders; each repair surfaces as a [`DecodeWarning`] rather than
//! a fatal error, and the affected string is omitted when it cannot be
//! recovered.
//!
//! See ICC.1:2022 Sections 10.24 (text) and 10.15 (mluc); desc is from the
//! v2 specification (ICC.1:2001-04 Section 6.5.17).

use crate::error::{Error, Result};
use crate::icc::primitives::{TagSignature, TypeSignature, uint16_number, uint32_number};
use crate::icc::tags::DecodeWarning;

const STRIP: [char; 4] = ['\0', '\n', '\r', ' '];

/// Decode ISO-8859-1-ish bytes (each byte one char)
fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

fn encode_ascii(s: &str) -> Vec<u8> {
    s.chars().map(|c| if c.is_ascii() { c as u8 } else { b'?' }).collect()
}

fn decode_utf16_be(bytes: &[u8]) -> String {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|c| u16::from_be_bytes([c[0], c[1]]))
        .collect();
    String::from_utf16_lossy(&units)
}

fn decode_utf16_le(bytes: &[u8]) -> String {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|c| u16::from_le_bytes([c[0], c[1]]))
        .collect();
    String::from_utf16_lossy(&units)
}

/// Parse a 'text' type tag (NUL-terminated ASCII after the type header)
pub fn parse_text(data: &[u8]) -> Result<String> {
    let payload = data.get(8..).ok_or(Error::Truncated {
        expected: 8,
        actual: data.len(),
    })?;
    let end = payload.len() - payload.iter().rev().take_while(|&&b| b == 0).count();
    Ok(latin1(&payload[..end]))
}

/// Re-encode a 'text' type tag
pub fn encode_text(text: &str) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&TypeSignature::TEXT.to_bytes());
    out.extend_from_slice(&[0u8; 4]);
    out.extend_from_slice(&encode_ascii(text));
    out.push(0);
    out
}

/// The v2 'desc' tag: ASCII plus optional Unicode and Mac-script variants
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextDescription {
    /// ASCII description (may be empty)
    pub ascii: String,
    /// Unicode language code preceding the UTF-16 block
    pub unicode_language_code: u32,
    /// Unicode description, when present and decodable
    pub unicode: Option<String>,
    /// Macintosh script code for the Mac block
    pub mac_script_code: u16,
    /// Macintosh description, when present and decodable
    pub mac: Option<String>,
}

/// Detect a UTF-16 block whose BOM says big-endian while the payload is
/// little-endian, by checking whether splitting the raw bytes on ASCII
/// spaces yields the declared unit count.
///
/// This is a best-effort repair for output of known-bad encoders, not an
/// ICC requirement; it applies only to desc tags.
fn utf16_wrong_endian_heuristic(content: &[u8], declared_units: usize) -> bool {
    declared_units > 0 && content.split(|&b| b == b' ').count() == declared_units - 1
}

impl TextDescription {
    /// Parse a full desc tag, including its 8-byte type header
    ///
    /// Recoverable malformations are reported alongside the decoded value.
    pub fn parse(data: &[u8], tag: TagSignature) -> Result<(Self, Vec<DecodeWarning>)> {
        let mut warnings = Vec::new();
        let mut desc = Self::default();

        let ascii_len = uint32_number(data.get(8..).ok_or(Error::Truncated {
            expected: 12,
            actual: data.len(),
        })?)? as usize;
        if ascii_len > 0 {
            let start = 12.min(data.len());
            let end = (12 + ascii_len).min(data.len());
            desc.ascii = latin1(&data[start..end]).trim_matches(STRIP).to_string();
        }

        let uo = 12 + ascii_len;
        desc.unicode_language_code = uint32_number(data.get(uo..).ok_or(Error::Truncated {
            expected: uo + 4,
            actual: data.len(),
        })?)?;
        let mut unicode_len = uint32_number(data.get(uo + 4..).ok_or(Error::Truncated {
            expected: uo + 8,
            actual: data.len(),
        })?)? as usize;

        let mut char_bytes = 1usize;
        if unicode_len > 0 {
            if uo + 8 + unicode_len * 2 > data.len() {
                // length was given in bytes instead of UTF-16 code units
                warnings.push(DecodeWarning::UnicodeLengthInBytes { tag });
                unicode_len /= 2;
            }
            char_bytes = match data.get(uo + 8 + unicode_len..uo + 8 + unicode_len + 2) {
                Some([0, 0]) => {
                    // single-byte data disguised as double-byte
                    warnings.push(DecodeWarning::UnicodeSingleByte { tag });
                    1
                }
                _ => 2,
            };

            let start = (uo + 8).min(data.len());
            let end = (uo + 8 + unicode_len * char_bytes).min(data.len());
            let block = &data[start..end];

            let decoded = if char_bytes == 1 {
                String::from_utf8_lossy(block).into_owned()
            } else if block.starts_with(&[0xFE, 0xFF]) {
                let content = &block[2..];
                if utf16_wrong_endian_heuristic(content, unicode_len) {
                    warnings.push(DecodeWarning::UnicodeEndianMismatch { tag });
                    decode_utf16_le(content)
                } else {
                    decode_utf16_be(content)
                }
            } else if block.starts_with(&[0xFF, 0xFE]) {
                let content = &block[2..];
                if content.first() == Some(&0) {
                    warnings.push(DecodeWarning::UnicodeEndianMismatch { tag });
                    decode_utf16_be(content)
                } else {
                    decode_utf16_le(content)
                }
            } else {
                decode_utf16_be(block)
            };

            let trimmed = decoded.trim_matches(STRIP);
            if !trimmed.is_empty() {
                if trimmed.contains('\0') {
                    warnings.push(DecodeWarning::UnicodeNullBytes { tag });
                } else {
                    desc.unicode = Some(trimmed.to_string());
                }
            }
        }

        let mut mac_offset = uo + 8 + unicode_len * char_bytes;
        let shifted = data.get(mac_offset..mac_offset + 5) == Some(&[0u8; 5][..]);
        if shifted {
            mac_offset += 5;
        }
        if data.len() > mac_offset + 2 {
            desc.mac_script_code = uint16_number(&data[mac_offset..])?;
            let mac_len = data[mac_offset + 2] as usize;
            if mac_len > 0 {
                if shifted {
                    warnings.push(DecodeWarning::MacOffsetNullPadding { tag });
                }
                let start = (mac_offset + 3).min(data.len());
                let end = (mac_offset + 3 + mac_len).min(data.len());
                if desc.mac_script_code == 0 {
                    let decoded = mac_roman_decode(&data[start..end]);
                    let trimmed = decoded.trim_matches(STRIP);
                    if !trimmed.is_empty() {
                        desc.mac = Some(trimmed.to_string());
                    }
                } else {
                    warnings.push(DecodeWarning::MacScriptUnsupported {
                        tag,
                        script: desc.mac_script_code,
                    });
                }
            }
        }

        Ok((desc, warnings))
    }

    /// Re-encode to full tag bytes in the canonical v2 layout
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&TypeSignature::DESC.to_bytes());
        out.extend_from_slice(&[0u8; 4]);

        let ascii = encode_ascii(&self.ascii);
        out.extend_from_slice(&((ascii.len() + 1) as u32).to_be_bytes());
        out.extend_from_slice(&ascii);
        out.push(0);

        out.extend_from_slice(&self.unicode_language_code.to_be_bytes());
        match &self.unicode {
            Some(text) => {
                let units: Vec<u16> = text.encode_utf16().collect();
                // length counts BOM + characters + terminator
                out.extend_from_slice(&((units.len() + 2) as u32).to_be_bytes());
                out.extend_from_slice(&[0xFE, 0xFF]);
                for unit in units {
                    out.extend_from_slice(&unit.to_be_bytes());
                }
                out.extend_from_slice(&[0, 0]);
            }
            None => out.extend_from_slice(&0u32.to_be_bytes()),
        }

        out.extend_from_slice(&self.mac_script_code.to_be_bytes());
        match &self.mac {
            Some(text) => {
                let truncated: String = text.chars().take(66).collect();
                let encoded = mac_roman_encode(&truncated);
                out.push((encoded.len() + 1) as u8);
                out.extend_from_slice(&encoded);
                out.push(0);
            }
            None => {
                out.extend_from_slice(&0u32.to_be_bytes());
                out.extend_from_slice(&[0u8; 67]);
            }
        }
        out
    }

    /// The best available description: Unicode, then ASCII, then Macintosh
    pub fn best(&self) -> Option<&str> {
        if let Some(u) = self.unicode.as_deref() {
            return Some(u);
        }
        if !self.ascii.is_empty() {
            return Some(&self.ascii);
        }
        self.mac.as_deref()
    }
}

/// One record of an mluc tag
#[derive(Debug, Clone, PartialEq)]
pub struct MlucRecord {
    /// ISO 639-1 language code ("en")
    pub language: String,
    /// ISO 3166-1 country code ("US")
    pub country: String,
    pub text: String,
}

/// The v4 'mluc' tag: language x country localized strings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiLocalizedUnicode {
    pub records: Vec<MlucRecord>,
}

impl MultiLocalizedUnicode {
    /// Parse a full mluc tag, including its 8-byte type header
    ///
    /// The record stride is read from the tag header rather than assumed to
    /// be 12 bytes.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let count = uint32_number(data.get(8..).ok_or(Error::Truncated {
            expected: 16,
            actual: data.len(),
        })?)? as usize;
        let record_size = uint32_number(&data[12..])? as usize;
        if record_size < 12 {
            return Err(Error::CorruptedData(format!(
                "mluc record size {record_size} is smaller than a record"
            )));
        }

        let mut records = Vec::with_capacity(count);
        for i in 0..count {
            let at = 16 + i * record_size;
            let Some(record) = data.get(at..at + 12) else {
                break;
            };
            let length = uint32_number(&record[4..8])? as usize;
            let offset = uint32_number(&record[8..12])? as usize;
            let start = offset.min(data.len());
            let end = (offset + length).min(data.len());
            records.push(MlucRecord {
                language: latin1(&record[0..2]),
                country: latin1(&record[2..4]),
                text: decode_utf16_be(&data[start..end])
                    .trim_matches('\0')
                    .to_string(),
            });
        }
        Ok(Self { records })
    }

    /// Re-encode to full tag bytes with the canonical 12-byte record stride
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&TypeSignature::MLUC.to_bytes());
        out.extend_from_slice(&[0u8; 4]);
        out.extend_from_slice(&(self.records.len() as u32).to_be_bytes());
        out.extend_from_slice(&12u32.to_be_bytes());

        let two_cc = |code: &str| -> [u8; 2] {
            let bytes = encode_ascii(code);
            [
                bytes.first().copied().unwrap_or(0),
                bytes.get(1).copied().unwrap_or(0),
            ]
        };

        let mut strings = Vec::new();
        let strings_base = 16 + self.records.len() * 12;
        for record in &self.records {
            let encoded: Vec<u8> = record
                .text
                .encode_utf16()
                .flat_map(|u| u.to_be_bytes())
                .collect();
            out.extend_from_slice(&two_cc(&record.language));
            out.extend_from_slice(&two_cc(&record.country));
            out.extend_from_slice(&(encoded.len() as u32).to_be_bytes());
            out.extend_from_slice(&((strings_base + strings.len()) as u32).to_be_bytes());
            strings.extend_from_slice(&encoded);
        }
        out.extend_from_slice(&strings);
        out
    }

    /// Text for an exact language + country pair
    pub fn get(&self, language: &str, country: &str) -> Option<&str> {
        self.records
            .iter()
            .find(|r| r.language == language && r.country == country)
            .map(|r| r.text.as_str())
    }

    /// The preferred record: en-UK, then en-US, then the first record
    pub fn preferred(&self) -> Option<&str> {
        for country in ["UK", "US"] {
            if let Some(text) = self.get("en", country) {
                return Some(text);
            }
        }
        self.records.first().map(|r| r.text.as_str())
    }
}

// ---------------------------------------------------------------------------
// Macintosh script codes and Mac Roman
// ---------------------------------------------------------------------------

/// Name of the Mac encoding for a script code, per the classic Mac OS
/// script-code table
pub fn mac_script_name(code: u16) -> Option<&'static str> {
    MAC_SCRIPTS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Script code → encoding name for the regional Mac encodings
/// (codes 0-94 and 128-148)
const MAC_SCRIPTS: [(u16, &str); 116] = [
    (0, "roman"),
    (1, "french"),
    (2, "german"),
    (3, "italian"),
    (4, "dutch"),
    (5, "swedish"),
    (6, "spanish"),
    (7, "danish"),
    (8, "portuguese"),
    (9, "norwegian"),
    (10, "hebrew"),
    (11, "japanese"),
    (12, "arabic"),
    (13, "finnish"),
    (14, "greek-monotonic"),
    (15, "icelandic"),
    (16, "maltese"),
    (17, "turkish"),
    (18, "croatian"),
    (19, "tradchinese"),
    (20, "urdu"),
    (21, "hindi"),
    (22, "thai"),
    (23, "korean"),
    (24, "lithuanian"),
    (25, "polish"),
    (26, "hungarian"),
    (27, "estonian"),
    (28, "latvian"),
    (29, "sami"),
    (30, "faeroese"),
    (31, "farsi"),
    (32, "russian"),
    (33, "simpchinese"),
    (34, "flemish"),
    (35, "irishgaelic"),
    (36, "albanian"),
    (37, "romanian"),
    (38, "czech"),
    (39, "slovak"),
    (40, "slovenian"),
    (41, "yiddish"),
    (42, "serbian"),
    (43, "macedonian"),
    (44, "bulgarian"),
    (45, "ukrainian"),
    (46, "byelorussian"),
    (47, "uzbek"),
    (48, "kazakh"),
    (49, "azerbaijani-cyrllic"),
    (50, "azerbaijani-arabic"),
    (51, "armenian"),
    (52, "georgian"),
    (53, "moldavian"),
    (54, "kirghiz"),
    (55, "tajiki"),
    (56, "turkmen"),
    (57, "mongolian"),
    (58, "mongolian-cyrillic"),
    (59, "pashto"),
    (60, "kurdish"),
    (61, "kashmiri"),
    (62, "sindhi"),
    (63, "tibetan"),
    (64, "nepali"),
    (65, "sanskrit"),
    (66, "marathi"),
    (67, "bengali"),
    (68, "assamese"),
    (69, "gujarati"),
    (70, "punjabi"),
    (71, "oriya"),
    (72, "malayalam"),
    (73, "kannada"),
    (74, "tamil"),
    (75, "telugu"),
    (76, "sinhalese"),
    (77, "burmese"),
    (78, "khmer"),
    (79, "lao"),
    (80, "vietnamese"),
    (81, "indonesian"),
    (82, "tagalog"),
    (83, "malayroman-latin"),
    (84, "malayroman-arabic"),
    (85, "amharic"),
    (86, "tigrinya"),
    (87, "oromo"),
    (88, "somali"),
    (89, "swahili"),
    (90, "kiryarwanda"),
    (91, "rundi"),
    (92, "chewa"),
    (93, "malagasy"),
    (94, "esperanto"),
    (128, "welsh"),
    (129, "basque"),
    (130, "catalan"),
    (131, "latin"),
    (132, "quechua"),
    (133, "guarani"),
    (134, "aymara"),
    (135, "tatar"),
    (136, "uighur"),
    (137, "dzongkha"),
    (138, "javaneserom"),
    (139, "sundaneserom"),
    (140, "galician"),
    (141, "africaans"),
    (142, "breton"),
    (143, "inuktitut"),
    (144, "scottishgaelic"),
    (145, "manxgaelic"),
    (146, "irishgaelic-dotsabove"),
    (147, "tongan"),
    (148, "greek-polytonic"),
];

/// Mac Roman upper half (0x80..=0xFF)
const MAC_ROMAN_HIGH: [char; 128] = [
    'Ä', 'Å', 'Ç', 'É', 'Ñ', 'Ö', 'Ü', 'á', 'à', 'â', 'ä', 'ã', 'å', 'ç', 'é', 'è', //
    'ê', 'ë', 'í', 'ì', 'î', 'ï', 'ñ', 'ó', 'ò', 'ô', 'ö', 'õ', 'ú', 'ù', 'û', 'ü', //
    '†', '°', '¢', '£', '§', '•', '¶', 'ß', '®', '©', '™', '´', '¨', '≠', 'Æ', 'Ø', //
    '∞', '±', '≤', '≥', '¥', 'µ', '∂', '∑', '∏', 'π', '∫', 'ª', 'º', 'Ω', 'æ', 'ø', //
    '¿', '¡', '¬', '√', 'ƒ', '≈', '∆', '«', '»', '…', '\u{A0}', 'À', 'Ã', 'Õ', 'Œ', 'œ', //
    '–', '—', '“', '”', '‘', '’', '÷', '◊', 'ÿ', 'Ÿ', '⁄', '€', '‹', '›', 'ﬁ', 'ﬂ', //
    '‡', '·', '‚', '„', '‰', 'Â', 'Ê', 'Á', 'Ë', 'È', 'Í', 'Î', 'Ï', 'Ì', 'Ó', 'Ô', //
    '\u{F8FF}', 'Ò', 'Ú', 'Û', 'Ù', 'ı', 'ˆ', '˜', '¯', '˘', '˙', '˚', '¸', '˝', '˛', 'ˇ',
];

/// Decode Mac Roman bytes (script code 0)
pub fn mac_roman_decode(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| {
            if b < 0x80 {
                b as char
            } else {
                MAC_ROMAN_HIGH[(b - 0x80) as usize]
            }
        })
        .collect()
}

/// Encode to Mac Roman, replacing unmappable characters with '?'
pub fn mac_roman_encode(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            if c.is_ascii() {
                c as u8
            } else {
                MAC_ROMAN_HIGH
                    .iter()
                    .position(|&m| m == c)
                    .map(|i| (i + 0x80) as u8)
                    .unwrap_or(b'?')
            }
        })
        .collect()
}
