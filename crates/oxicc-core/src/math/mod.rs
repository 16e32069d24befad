//! Mathematical operations for profile interpretation
//!
//! This module provides:
//! - 3x3 matrix algebra for RGB↔XYZ transforms and the `chad` tag
//! - Chromatic adaptation (Bradford and friends)
//! - Correlated color temperature (Robertson's method, daylight and
//!   Planckian locus fits)

pub mod adaptation;
pub mod cct;
pub mod matrix;

pub use adaptation::{CatMethod, adapt, adaptation_matrix, guess_cat, lms_gain_matrix};
pub use cct::{daylight_xyy, daylight_xyz, planckian_xyy, planckian_xyz, xyy_to_cct, xyz_to_cct};
pub use matrix::Matrix3x3;
