//! Color space types and conversions
//!
//! This module provides:
//! - CIE XYZ and xyY coordinates
//! - CIELAB (L*a*b*)
//! - RGB ↔ XYZ with configurable transfer function and matrix
//! - CIE standard illuminants and reference-white handling

pub mod illuminant;
pub mod lab;
pub mod rgb;
pub mod xyz;

pub use illuminant::{CieIlluminant, D50, ReferenceWhite};
pub use lab::Lab;
pub use rgb::{Rgb, rgb_matrix, rgb_to_xyz, srgb_decode, srgb_encode, xyz_to_rgb};
pub use xyz::Xyz;
