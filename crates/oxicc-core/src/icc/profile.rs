//! ICC Profile Container
//!
//! An [`IccProfile`] is a two-state machine: construction parses the
//! 128-byte header eagerly (**HeaderOnly**), and the first tag access
//! triggers [`IccProfile::ensure_loaded`], which parses the tag table and
//! decodes every tag body (**TagsLoaded**). Tag table entries sharing one
//! (offset, size) pair decode once and alias the same stored body, and the
//! write path re-emits one physical copy for them.
//!
//! The write path reassembles the profile from the retained raw header
//! bytes and the re-encoded tags; the profile ID is the MD5 digest of the
//! serialized bytes with the flags, rendering-intent, and ID fields zeroed,
//! per ICC.1:2022 Section 7.2.18.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::color::Xyz;
use crate::error::{Error, Result};
use crate::icc::header::{HEADER_SIZE, ProfileHeader};
use crate::icc::primitives::{TagSignature, TypeSignature, uint32_number};
use crate::icc::tags::{DecodeWarning, TagData, technology_description};
use crate::math::Matrix3x3;
use crate::math::cct::xyz_to_cct;

/// A non-fatal condition recorded while loading a profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileWarning {
    /// A tag signature appeared twice in the tag table; the second entry
    /// was skipped
    DuplicateTag(TagSignature),
    /// A tag decoder recovered from a malformation
    Tag {
        tag: TagSignature,
        warning: DecodeWarning,
    },
}

/// The decoded tag table: insertion-ordered signatures over shared bodies
///
/// Signatures map to indices into a body vector so that aliased table
/// entries (same offset and size in the file) share one decoded value.
#[derive(Debug, Clone, Default)]
pub struct TagSet {
    entries: Vec<(TagSignature, usize)>,
    bodies: Vec<TagData>,
}

impl TagSet {
    /// Number of tag table entries (aliases count separately)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, sig: TagSignature) -> bool {
        self.entries.iter().any(|(s, _)| *s == sig)
    }

    /// Get a tag by signature
    pub fn get(&self, sig: TagSignature) -> Option<&TagData> {
        self.entries
            .iter()
            .find(|(s, _)| *s == sig)
            .map(|&(_, idx)| &self.bodies[idx])
    }

    fn get_mut(&mut self, sig: TagSignature) -> Option<&mut TagData> {
        let idx = self.entries.iter().find(|(s, _)| *s == sig)?.1;
        Some(&mut self.bodies[idx])
    }

    /// Iterate over (signature, tag) pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (TagSignature, &TagData)> {
        self.entries.iter().map(|&(sig, idx)| (sig, &self.bodies[idx]))
    }

    /// Signatures in table order
    pub fn signatures(&self) -> impl Iterator<Item = TagSignature> + '_ {
        self.entries.iter().map(|&(sig, _)| sig)
    }

    /// Whether two signatures alias the same stored tag body
    pub fn shares_body(&self, a: TagSignature, b: TagSignature) -> bool {
        let find = |sig| self.entries.iter().find(|(s, _)| *s == sig).map(|e| e.1);
        match (find(a), find(b)) {
            (Some(ia), Some(ib)) => ia == ib,
            _ => false,
        }
    }

    /// Insert or replace a tag under its own body
    pub fn insert(&mut self, sig: TagSignature, tag: TagData) {
        if let Some(pos) = self.entries.iter().position(|(s, _)| *s == sig) {
            let idx = self.bodies.len();
            self.bodies.push(tag);
            self.entries[pos].1 = idx;
        } else {
            self.bodies.push(tag);
            self.entries.push((sig, self.bodies.len() - 1));
        }
    }
}

/// Where the profile body comes from before tags are loaded
#[derive(Debug)]
enum Source {
    /// Full profile bytes in memory
    Memory(Vec<u8>),
    /// A file whose header has been read; the body is read on demand
    File(PathBuf),
    /// Tags are loaded; the body has been dropped
    Drained,
}

/// An ICC profile
#[derive(Debug)]
pub struct IccProfile {
    header: ProfileHeader,
    header_raw: [u8; HEADER_SIZE],
    id: [u8; 16],
    source: Source,
    tags: Option<TagSet>,
    warnings: Vec<ProfileWarning>,
}

impl IccProfile {
    /// Construct from profile bytes; the header is parsed immediately and
    /// tags decode on first access
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let header = ProfileHeader::parse(data)?;
        let mut header_raw = [0u8; HEADER_SIZE];
        header_raw.copy_from_slice(&data[..HEADER_SIZE]);

        let body_len = (header.size as usize).min(data.len());
        Ok(Self {
            id: header.profile_id,
            header,
            header_raw,
            source: Source::Memory(data[..body_len].to_vec()),
            tags: None,
            warnings: Vec::new(),
        })
    }

    /// Construct from a file path
    ///
    /// Only the header is read here; the rest of the file is read when the
    /// tags are first accessed. The file handle is released before this
    /// function returns, on success and on error alike.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut header_raw = [0u8; HEADER_SIZE];
        {
            let mut file = File::open(&path)?;
            file.read_exact(&mut header_raw)
                .map_err(|_| Error::ProfileInvalid("not enough data".to_string()))?;
        }
        let header = ProfileHeader::parse(&header_raw)?;
        Ok(Self {
            id: header.profile_id,
            header,
            header_raw,
            source: Source::File(path),
            tags: None,
            warnings: Vec::new(),
        })
    }

    /// Construct by reading a stream to its end
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    /// The decoded header
    pub fn header(&self) -> &ProfileHeader {
        &self.header
    }

    /// The current profile ID; all-zero when not yet computed
    pub fn id(&self) -> [u8; 16] {
        self.id
    }

    /// Non-fatal conditions recorded while loading
    pub fn warnings(&self) -> &[ProfileWarning] {
        &self.warnings
    }

    /// Whether the tag map has been populated
    pub fn is_loaded(&self) -> bool {
        self.tags.is_some()
    }

    /// Transition from HeaderOnly to TagsLoaded
    ///
    /// Reads the remaining body from the byte source if necessary, parses
    /// the tag table, and decodes every tag. A no-op once loaded.
    pub fn ensure_loaded(&mut self) -> Result<()> {
        if self.tags.is_some() {
            return Ok(());
        }

        let (tags, warnings) = match &self.source {
            Source::Memory(data) => Self::parse_tags(data)?,
            Source::File(path) => {
                let mut data = Vec::new();
                File::open(path)?.read_to_end(&mut data)?;
                let body_len = (self.header.size as usize).min(data.len());
                data.truncate(body_len);
                Self::parse_tags(&data)?
            }
            Source::Drained => (TagSet::default(), Vec::new()),
        };

        self.source = Source::Drained;
        self.tags = Some(tags);
        self.warnings.extend(warnings);
        Ok(())
    }

    fn parse_tags(body: &[u8]) -> Result<(TagSet, Vec<ProfileWarning>)> {
        let mut set = TagSet::default();
        let mut warnings = Vec::new();
        if body.len() <= HEADER_SIZE + 4 {
            return Ok((set, warnings));
        }

        let count = uint32_number(&body[HEADER_SIZE..])? as usize;
        let table_start = HEADER_SIZE + 4;
        // (offset, size) -> body index, for shared-tag aliasing
        let mut seen: HashMap<(u32, u32), usize> = HashMap::new();

        for i in 0..count {
            let at = table_start + i * 12;
            let entry = body.get(at..at + 12).ok_or(Error::TruncatedTagTable {
                expected: table_start + count * 12,
                actual: body.len(),
            })?;
            let signature = TagSignature(uint32_number(&entry[0..4])?);
            let offset = uint32_number(&entry[4..8])?;
            let size = uint32_number(&entry[8..12])?;

            if set.contains(signature) {
                log::warn!("tag '{signature}' already encountered, skipping");
                warnings.push(ProfileWarning::DuplicateTag(signature));
                continue;
            }

            if let Some(&idx) = seen.get(&(offset, size)) {
                set.entries.push((signature, idx));
                continue;
            }

            let tag_data = body
                .get(offset as usize..offset as usize + size as usize)
                .ok_or(Error::TruncatedTagData {
                    signature,
                    offset,
                    size,
                })?;

            let type_sig = TypeSignature(uint32_number(tag_data).unwrap_or(0));
            let (tag, tag_warnings) =
                TagData::decode(signature, tag_data).map_err(|source| Error::TagDecodeFailed {
                    signature,
                    type_sig,
                    offset,
                    size,
                    source: Box::new(source),
                })?;

            let idx = set.bodies.len();
            set.bodies.push(tag);
            set.entries.push((signature, idx));
            seen.insert((offset, size), idx);
            warnings.extend(
                tag_warnings
                    .into_iter()
                    .map(|warning| ProfileWarning::Tag { tag: signature, warning }),
            );
        }

        Ok((set, warnings))
    }

    /// The tag map, loading it on first access
    pub fn tags(&mut self) -> Result<&TagSet> {
        self.ensure_loaded()?;
        Ok(self.tags.as_ref().unwrap_or(&EMPTY_TAGS))
    }

    /// The tag map, if already loaded
    pub fn loaded_tags(&self) -> Option<&TagSet> {
        self.tags.as_ref()
    }

    /// A single tag by signature, loading the map on first access
    pub fn tag(&mut self, sig: TagSignature) -> Result<Option<&TagData>> {
        self.ensure_loaded()?;
        Ok(self.tags.as_ref().and_then(|t| t.get(sig)))
    }

    /// Mutable access to a tag; invalidates the cached profile ID
    pub fn tag_mut(&mut self, sig: TagSignature) -> Result<Option<&mut TagData>> {
        self.ensure_loaded()?;
        self.id = [0u8; 16];
        Ok(self.tags.as_mut().and_then(|t| t.get_mut(sig)))
    }

    /// Insert or replace a tag; invalidates the cached profile ID
    pub fn set_tag(&mut self, sig: TagSignature, tag: TagData) -> Result<()> {
        self.ensure_loaded()?;
        self.id = [0u8; 16];
        if let Some(tags) = self.tags.as_mut() {
            tags.insert(sig, tag);
        }
        Ok(())
    }

    /// Reassemble the profile into bytes
    ///
    /// Each tag is re-encoded and zero-padded to a 4-byte boundary;
    /// identical payloads are written once with multiple table entries
    /// pointing at the shared copy. The header is rebuilt from the
    /// recomputed total size, the original bytes 4..84, the current ID,
    /// and the original bytes 100..128.
    pub fn serialize(&mut self) -> Result<Vec<u8>> {
        self.ensure_loaded()?;
        let tags = self.tags.as_ref().unwrap_or(&EMPTY_TAGS);

        let table_size = tags.len() * 12;
        let mut table = Vec::with_capacity(table_size);
        let mut payloads: Vec<Vec<u8>> = Vec::new();
        let mut offsets: Vec<u32> = Vec::new();
        let mut next_offset = (HEADER_SIZE + 4 + table_size) as u32;

        for (signature, tag) in tags.iter() {
            let mut data = tag.encode();
            let size = data.len() as u32;
            let padding = data.len().div_ceil(4) * 4 - data.len();
            data.extend(std::iter::repeat_n(0u8, padding));

            let offset = match payloads.iter().position(|p| *p == data) {
                Some(pos) => offsets[pos],
                None => {
                    let offset = next_offset;
                    next_offset += data.len() as u32;
                    offsets.push(offset);
                    payloads.push(data);
                    offset
                }
            };

            table.extend_from_slice(&signature.to_bytes());
            table.extend_from_slice(&offset.to_be_bytes());
            table.extend_from_slice(&size.to_be_bytes());
        }

        let bodies_len: usize = payloads.iter().map(Vec::len).sum();
        let total = HEADER_SIZE + 4 + table_size + bodies_len;

        let mut out = Vec::with_capacity(total);
        out.extend_from_slice(&(total as u32).to_be_bytes());
        out.extend_from_slice(&self.header_raw[4..84]);
        out.extend_from_slice(&self.id);
        out.extend_from_slice(&self.header_raw[100..HEADER_SIZE]);
        out.extend_from_slice(&(tags.len() as u32).to_be_bytes());
        out.extend_from_slice(&table);
        for payload in &payloads {
            out.extend_from_slice(payload);
        }
        Ok(out)
    }

    /// Write the serialized profile to a stream
    pub fn write(&mut self, mut writer: impl std::io::Write) -> Result<()> {
        let data = self.serialize()?;
        writer.write_all(&data)?;
        Ok(())
    }

    /// Compute, store, and return the profile ID
    ///
    /// The MD5 digest is taken over the serialized profile with the flags
    /// field (bytes 44-47), the rendering-intent field (bytes 64-67), and
    /// the ID field (bytes 84-99) zeroed.
    pub fn calculate_id(&mut self) -> Result<[u8; 16]> {
        let mut data = self.serialize()?;
        data[44..48].fill(0);
        data[64..68].fill(0);
        data[84..100].fill(0);
        self.id = md5::compute(&data).0;
        Ok(self.id)
    }

    /// The profile ID as standard base64, computing it first
    pub fn id_base64(&mut self) -> Result<String> {
        let id = self.calculate_id()?;
        Ok(BASE64.encode(id))
    }

    /// Compare two profiles by ID
    ///
    /// An all-zero ID is computed before comparison; `force` recomputes
    /// both regardless.
    pub fn is_same(&mut self, other: &mut IccProfile, force: bool) -> Result<bool> {
        if force || self.id == [0u8; 16] {
            self.calculate_id()?;
        }
        if force || other.id == [0u8; 16] {
            other.calculate_id()?;
        }
        Ok(self.id == other.id)
    }

    // -- Convenience accessors over well-known tags --------------------------

    fn tag_text(&mut self, sig: TagSignature) -> Result<Option<String>> {
        Ok(self
            .tag(sig)?
            .and_then(|t| t.as_text())
            .map(str::to_string))
    }

    /// Profile description (desc)
    pub fn description(&mut self) -> Result<Option<String>> {
        self.tag_text(TagSignature::DESC)
    }

    /// Copyright text (cprt)
    pub fn copyright(&mut self) -> Result<Option<String>> {
        self.tag_text(TagSignature::COPYRIGHT)
    }

    /// Device manufacturer description (dmnd)
    pub fn device_manufacturer_description(&mut self) -> Result<Option<String>> {
        self.tag_text(TagSignature::DMND)
    }

    /// Device model description (dmdd)
    pub fn device_model_description(&mut self) -> Result<Option<String>> {
        self.tag_text(TagSignature::DMDD)
    }

    /// Viewing conditions description (vued)
    pub fn viewing_conditions_description(&mut self) -> Result<Option<String>> {
        self.tag_text(TagSignature::VIEW_COND_DESC)
    }

    /// Human-readable device technology (tech)
    pub fn technology_summary(&mut self) -> Result<Option<&'static str>> {
        Ok(self.tag(TagSignature::TECH)?.and_then(|t| match t {
            TagData::Signature(sig) => technology_description(*sig),
            _ => None,
        }))
    }

    /// Target viewing illuminant from the view tag
    pub fn view_target_illuminant(&mut self) -> Result<Option<&'static str>> {
        Ok(self.tag(TagSignature::VIEW_COND)?.and_then(|t| match t {
            TagData::ViewingConditions(v) => Some(v.illuminant_type.description()),
            _ => None,
        }))
    }

    /// Illuminant recorded at measurement time (meas)
    pub fn measured_illuminant(&mut self) -> Result<Option<&'static str>> {
        Ok(self.tag(TagSignature::MEAS)?.and_then(|t| match t {
            TagData::Measurement(m) => Some(m.illuminant.description()),
            _ => None,
        }))
    }

    /// Media white point (wtpt)
    pub fn media_white_point(&mut self) -> Result<Option<Xyz>> {
        Ok(self.tag(TagSignature::MEDIA_WHITE)?.and_then(|t| t.as_xyz()))
    }

    /// Media luminance in cd/m² (lumi, Y component)
    pub fn luminance(&mut self) -> Result<Option<f64>> {
        Ok(self
            .tag(TagSignature::LUMINANCE)?
            .and_then(|t| t.as_xyz())
            .map(|xyz| xyz.y))
    }

    /// The chromatic adaptation matrix (chad)
    pub fn chromatic_adaptation(&mut self) -> Result<Option<Matrix3x3>> {
        Ok(self.tag(TagSignature::CHAD)?.and_then(|t| match t {
            TagData::ChromaticAdaptation(m) => Some(*m),
            _ => None,
        }))
    }

    /// The media white with any chromatic adaptation undone
    ///
    /// When a chad tag is present, its inverse is applied to the media
    /// white and the result renormalized to Y = 1, recovering the device's
    /// pre-adaptation white point.
    pub fn adapted_white_point(&mut self) -> Result<Option<Xyz>> {
        let Some(white) = self.media_white_point()? else {
            return Ok(None);
        };
        match self.chromatic_adaptation()? {
            Some(chad) => {
                let inverse = chad.inverse()?;
                let raw = Xyz::from_array(inverse.multiply_vec(white.to_array()));
                Ok(Some(raw.normalize()))
            }
            None => Ok(Some(white)),
        }
    }

    /// Correlated color temperature of the profile's (unadapted) white
    pub fn white_point_cct(&mut self) -> Result<Option<f64>> {
        Ok(self.adapted_white_point()?.and_then(xyz_to_cct))
    }
}

static EMPTY_TAGS: TagSet = TagSet {
    entries: Vec::new(),
    bodies: Vec::new(),
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icc::header::PROFILE_SIGNATURE;

    /// A header-only profile with a zero tag count
    fn minimal_profile() -> Vec<u8> {
        let mut data = vec![0u8; HEADER_SIZE + 4];
        let data_len = data.len() as u32;
        data[0..4].copy_from_slice(&data_len.to_be_bytes());
        data[8] = 4;
        data[9] = 0x30;
        data[12..16].copy_from_slice(b"mntr");
        data[16..20].copy_from_slice(b"RGB ");
        data[20..24].copy_from_slice(b"XYZ ");
        data[36..40].copy_from_slice(&PROFILE_SIGNATURE.to_be_bytes());
        data
    }

    fn with_tags(tags: &[(&[u8; 4], Vec<u8>)]) -> Vec<u8> {
        let mut data = minimal_profile();
        data[128..132].copy_from_slice(&(tags.len() as u32).to_be_bytes());

        let mut offset = (HEADER_SIZE + 4 + tags.len() * 12) as u32;
        let mut bodies = Vec::new();
        for (sig, body) in tags {
            let padded = body.len().div_ceil(4) * 4;
            data.extend_from_slice(*sig);
            data.extend_from_slice(&offset.to_be_bytes());
            data.extend_from_slice(&(body.len() as u32).to_be_bytes());
            bodies.extend_from_slice(body);
            bodies.extend(std::iter::repeat_n(0u8, padded - body.len()));
            offset += padded as u32;
        }
        data.extend_from_slice(&bodies);
        let total = data.len() as u32;
        data[0..4].copy_from_slice(&total.to_be_bytes());
        data
    }

    fn text_tag(text: &str) -> Vec<u8> {
        let mut body = b"text\0\0\0\0".to_vec();
        body.extend_from_slice(text.as_bytes());
        body.push(0);
        body
    }

    #[test]
    fn test_lazy_state_machine() {
        let mut profile = IccProfile::from_bytes(&minimal_profile()).unwrap();
        assert!(!profile.is_loaded());
        profile.ensure_loaded().unwrap();
        assert!(profile.is_loaded());
        assert_eq!(profile.tags().unwrap().len(), 0);
    }

    #[test]
    fn test_parse_copyright() {
        let data = with_tags(&[(b"cprt", text_tag("Test"))]);
        let mut profile = IccProfile::from_bytes(&data).unwrap();
        assert_eq!(profile.copyright().unwrap().as_deref(), Some("Test"));
    }

    #[test]
    fn test_shared_offsets_alias() {
        let body = text_tag("Shared body");
        let mut data = minimal_profile();
        data[128..132].copy_from_slice(&2u32.to_be_bytes());
        let offset = (HEADER_SIZE + 4 + 2 * 12) as u32;
        for sig in [b"cprt", b"dmdd"] {
            data.extend_from_slice(sig);
            data.extend_from_slice(&offset.to_be_bytes());
            data.extend_from_slice(&(body.len() as u32).to_be_bytes());
        }
        data.extend_from_slice(&body);
        let total = data.len() as u32;
        data[0..4].copy_from_slice(&total.to_be_bytes());

        let mut profile = IccProfile::from_bytes(&data).unwrap();
        let tags = profile.tags().unwrap();
        assert_eq!(tags.len(), 2);
        assert!(tags.shares_body(
            TagSignature::COPYRIGHT,
            TagSignature::DMDD
        ));
    }

    #[test]
    fn test_duplicate_signature_skipped() {
        let data = with_tags(&[
            (b"cprt", text_tag("First")),
            (b"cprt", text_tag("Second")),
        ]);
        let mut profile = IccProfile::from_bytes(&data).unwrap();
        assert_eq!(profile.copyright().unwrap().as_deref(), Some("First"));
        assert!(profile
            .warnings()
            .iter()
            .any(|w| matches!(w, ProfileWarning::DuplicateTag(_))));
    }

    #[test]
    fn test_truncated_tag_data() {
        let mut data = minimal_profile();
        data[128..132].copy_from_slice(&1u32.to_be_bytes());
        data.extend_from_slice(b"cprt");
        data.extend_from_slice(&144u32.to_be_bytes());
        data.extend_from_slice(&100u32.to_be_bytes()); // size runs past the end
        data.extend_from_slice(b"text\0\0\0\0hi\0");
        let total = data.len() as u32;
        data[0..4].copy_from_slice(&total.to_be_bytes());

        let mut profile = IccProfile::from_bytes(&data).unwrap();
        assert!(matches!(
            profile.ensure_loaded(),
            Err(Error::TruncatedTagData { .. })
        ));
    }

    #[test]
    fn test_serialize_reparse() {
        let data = with_tags(&[
            (b"desc", {
                let desc = crate::icc::tags::TextDescription {
                    ascii: "Test Profile".to_string(),
                    ..Default::default()
                };
                desc.encode()
            }),
            (b"cprt", text_tag("Copyright")),
        ]);
        let mut profile = IccProfile::from_bytes(&data).unwrap();
        let out = profile.serialize().unwrap();

        let mut reparsed = IccProfile::from_bytes(&out).unwrap();
        assert_eq!(
            reparsed.description().unwrap().as_deref(),
            Some("Test Profile")
        );
        assert_eq!(
            reparsed.copyright().unwrap().as_deref(),
            Some("Copyright")
        );
        assert_eq!(reparsed.header().size as usize, out.len());
    }

    #[test]
    fn test_checksum_changes_on_mutation() {
        let data = with_tags(&[(b"cprt", text_tag("Original"))]);
        let mut profile = IccProfile::from_bytes(&data).unwrap();
        let id1 = profile.calculate_id().unwrap();
        assert_ne!(id1, [0u8; 16]);
        assert_eq!(profile.calculate_id().unwrap(), id1);

        profile
            .set_tag(
                TagSignature::COPYRIGHT,
                TagData::Text("Changed".to_string()),
            )
            .unwrap();
        assert_eq!(profile.id(), [0u8; 16]);
        assert_ne!(profile.calculate_id().unwrap(), id1);
    }

    #[test]
    fn test_id_base64() {
        let data = with_tags(&[(b"cprt", text_tag("Anything"))]);
        let mut profile = IccProfile::from_bytes(&data).unwrap();
        let encoded = profile.id_base64().unwrap();
        // 16 bytes -> 24 base64 chars including padding
        assert_eq!(encoded.len(), 24);
        assert!(encoded.ends_with("=="));
    }

    #[test]
    fn test_is_same() {
        let data = with_tags(&[(b"cprt", text_tag("Same"))]);
        let mut a = IccProfile::from_bytes(&data).unwrap();
        let mut b = IccProfile::from_bytes(&data).unwrap();
        assert!(a.is_same(&mut b, false).unwrap());

        b.set_tag(
            TagSignature::COPYRIGHT,
            TagData::Text("Different".to_string()),
        )
        .unwrap();
        assert!(!a.is_same(&mut b, true).unwrap());
    }
}
