//! Error kinds for linkmap operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// Callers match on `ErrorKind` to tell a schema mismatch in the input
/// apart from a misconfigured palette or a plain IO failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // Classification errors
    // =========================================================================
    /// A route matched no prefix of the color palette
    NoMatchingPrefix,

    /// A content kind outside the fixed shape vocabulary
    UnknownKind,

    // =========================================================================
    // Catalog errors
    // =========================================================================
    /// Two distinct pages claimed the same route
    RouteCollision,

    // =========================================================================
    // File/IO errors
    // =========================================================================
    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,

    // =========================================================================
    // Serialization errors
    // =========================================================================
    /// Serialization failed
    SerializationFailed,

    /// Deserialization failed
    DeserializationFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}
