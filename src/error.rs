//! Error types for bundle loading.
//!
//! Absence of a bundle is never an error: loaders report it as `Ok(None)` so
//! that remaining formats can still be attempted. The types here cover the
//! remaining outcomes: misconfiguration at construction, decode and I/O
//! failures, and the two kinds of constructor failure a compiled bundle can
//! produce.

use std::error::Error;

use thiserror::Error;

/// Raised when a provider is configured with an unrecognised format
/// identifier.
///
/// This is a programming error in the provider's configuration, surfaced at
/// construction time; it is never produced by a lookup.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unrecognised bundle format `{identifier}`")]
pub struct InvalidFormatError {
    identifier: String,
}

impl InvalidFormatError {
    pub(crate) fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }

    /// The identifier that failed validation.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

/// Raised when a textual bundle resource cannot be opened, read, or decoded.
///
/// Decode failures always propagate to the caller; they are never downgraded
/// to "not found" and never cause the provider to fall through to a later
/// format.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The resource stream could not be opened or read.
    #[error("bundle resource I/O failure")]
    Io(#[from] std::io::Error),

    /// The resource content does not form a valid textual bundle. Truncated
    /// streams surface here as well.
    #[error("malformed bundle resource: {reason}")]
    Malformed {
        /// Description of the syntax failure.
        reason: String,
    },
}

/// Failure reported by a [`BundleConstructor`](crate::scope::BundleConstructor).
///
/// The two variants deliberately separate failures owned by the bundle type
/// from failures owned by the environment; the type-based loader maps them to
/// very different outcomes.
#[derive(Debug, Error)]
pub enum ConstructorFailure {
    /// The bundle type's own construction logic failed. The original error is
    /// forwarded to the caller verbatim.
    #[error(transparent)]
    Raised(Box<dyn Error + Send + Sync>),

    /// The constructor could not be invoked even though access had already
    /// been granted. This indicates a broken environment invariant, not a
    /// recoverable condition.
    #[error("constructor inaccessible after access was granted: {reason}")]
    Inaccessible {
        /// Description of the access failure.
        reason: String,
    },
}

/// Errors surfaced by [`BundleProvider::get_bundle`](crate::provider::BundleProvider::get_bundle).
#[derive(Debug, Error)]
pub enum BundleError {
    /// A textual resource existed but could not be read or decoded.
    #[error("failed to decode textual bundle resource")]
    Decode(#[from] DecodeError),

    /// A compiled bundle's constructor raised its own failure. The error is
    /// the one the constructor produced, not a wrapper around it.
    #[error(transparent)]
    Constructor(Box<dyn Error + Send + Sync>),

    /// Bundle construction failed in a way the environment had promised could
    /// not happen. Callers should treat this as unrecoverable and abort the
    /// lookup rather than retry.
    #[error("bundle construction invariant violated: {reason}")]
    Internal {
        /// Description of the violated invariant.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("properties")]
    #[case("")]
    #[case("COMPILED-TYPE")]
    fn invalid_format_reports_identifier(#[case] identifier: &str) {
        let error = InvalidFormatError::new(identifier);
        assert_eq!(error.identifier(), identifier);
        assert_eq!(
            error.to_string(),
            format!("unrecognised bundle format `{identifier}`"),
        );
    }

    #[test]
    fn constructor_passthrough_preserves_message() {
        let raised: Box<dyn std::error::Error + Send + Sync> =
            "bundle data unavailable".to_string().into();
        let error = BundleError::Constructor(raised);
        assert_eq!(error.to_string(), "bundle data unavailable");
    }

    #[test]
    fn decode_error_wraps_io_failures() {
        let io = std::io::Error::other("stream reset");
        let error = DecodeError::from(io);
        assert!(matches!(error, DecodeError::Io(_)));
    }
}
