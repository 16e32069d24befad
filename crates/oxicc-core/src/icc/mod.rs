//! ICC Profile Codec
//!
//! Native reading and writing of the ICC profile container:
//! 1. A 128-byte header, parsed eagerly
//! 2. A tag table, decoded lazily on first access (shared entries alias)
//! 3. Tag data in more than a dozen type encodings
//!
//! The write path reassembles header + tag table + deduplicated tag bodies,
//! and the profile ID checksum follows the ICC MD5 prescription.
//!
//! # Example
//!
//! ```ignore
//! use oxicc_core::icc::IccProfile;
//!
//! let mut profile = IccProfile::from_path("display.icc")?;
//! println!("{:?}", profile.description()?);
//! println!("white point CCT: {:?}", profile.white_point_cct()?);
//! ```

pub mod header;
pub mod primitives;
pub mod tags;

mod profile;

pub use header::{
    ColorSpace, DeviceAttributes, HEADER_SIZE, PROFILE_SIGNATURE, ProfileClass, ProfileFlags,
    ProfileHeader, ProfileVersion, RenderingIntent,
};
pub use primitives::{DateTimeNumber, TagSignature, TypeSignature, XyzNumber};
pub use profile::{IccProfile, ProfileWarning, TagSet};
pub use tags::{DecodeWarning, TagData};
