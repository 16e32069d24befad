//! # oxicc - Oxidized ICC Profile Codec
//!
//! A pure-Rust codec for the ICC color-profile container format, with the
//! colorimetric arithmetic needed to interpret and compare profiles.
//!
//! ## What it does
//!
//! - **Reads and writes profiles**: 128-byte header, tag table with shared
//!   (aliased) entries, and more than a dozen tag-type encodings, with
//!   unknown tags preserved byte-exactly
//! - **Checksums**: the ICC MD5 profile ID, recomputed with the prescribed
//!   fields zeroed, plus ID-based profile equality
//! - **Interprets**: whitepoint and correlated color temperature analysis,
//!   chromatic adaptation (Bradford and friends, including `chad` matrix
//!   identification), XYZ/Lab/RGB conversions, and video-card gamma
//!   table/formula handling
//!
//! It is not a color-management engine: no rendering-intent transforms
//! through profile LUTs and no device-link application.
//!
//! ## Quick Start
//!
//! ```ignore
//! use oxicc_core::icc::IccProfile;
//!
//! let mut profile = IccProfile::from_path("display.icc")?;
//! println!("{}", profile.description()?.unwrap_or_default());
//!
//! // Verify the embedded checksum
//! let stored = profile.header().profile_id;
//! let computed = profile.calculate_id()?;
//! assert_eq!(stored, computed);
//! ```

pub mod color;
pub mod error;
pub mod icc;
pub mod math;

pub use color::{CieIlluminant, Lab, ReferenceWhite, Rgb, Xyz};
pub use error::{Error, Result};
pub use icc::{IccProfile, TagData, TagSignature};
pub use math::{CatMethod, Matrix3x3};

/// Version of oxicc
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
