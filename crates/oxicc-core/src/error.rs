//! Error types for oxicc

use thiserror::Error;

use crate::icc::primitives::{TagSignature, TypeSignature};

/// Result type for oxicc operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in oxicc operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Header is missing, too short, or does not carry the 'acsp' signature
    #[error("invalid profile: {0}")]
    ProfileInvalid(String),

    /// A fixed-width field was decoded from a buffer shorter than its width
    #[error("truncated data: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    /// The tag table extends past the end of the profile
    #[error("tag table is truncated: expected {expected} bytes, got {actual}")]
    TruncatedTagTable { expected: usize, actual: usize },

    /// A tag body is shorter than its table entry declares
    #[error("tag data for '{signature}' (offset {offset}, size {size}) is truncated")]
    TruncatedTagData {
        signature: TagSignature,
        offset: u32,
        size: u32,
    },

    /// A tag decoder failed; carries the offending table entry for diagnostics
    #[error(
        "couldn't parse tag '{signature}' (type '{type_sig}', offset {offset}, size {size}): {source}"
    )]
    TagDecodeFailed {
        signature: TagSignature,
        type_sig: TypeSignature,
        offset: u32,
        size: u32,
        source: Box<Error>,
    },

    /// An index into one of the fixed ICC lookup tables is out of range
    #[error("{table} index {index} is out of range")]
    UnknownIndex { table: &'static str, index: u32 },

    /// Malformed tag contents
    #[error("corrupted tag data: {0}")]
    CorruptedData(String),

    /// 3x3 matrix inversion with a near-zero determinant
    #[error("matrix is singular and cannot be inverted")]
    SingularMatrix,

    /// I/O error from the profile's byte source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
