//! The bundle abstraction and the textual decoder seam.
//!
//! A bundle is a localized data object keyed by base name and locale. This
//! core constructs bundles; it never inspects their content beyond handing
//! them to the caller, and it never parses the textual representation itself.
//! Decoding is delegated to an injected [`BundleDecoder`].

use std::any::Any;
use std::io::Read;

use crate::error::DecodeError;

/// A localized data object produced by a bundle lookup.
///
/// Every successful lookup yields a freshly constructed instance owned
/// entirely by the caller; the loading core retains no reference after
/// returning. Compiled bundle types may expose richer APIs than the key/value
/// view; [`Bundle::as_any`] lets callers recover the concrete type.
pub trait Bundle: std::fmt::Debug {
    /// Look up the value stored under `key`.
    fn get(&self, key: &str) -> Option<&str>;

    /// The keys this bundle defines.
    fn keys(&self) -> Vec<&str>;

    /// Upcast to [`Any`] so callers can downcast to a concrete bundle type.
    fn as_any(&self) -> &dyn Any;
}

/// Decoder for the textual bundle representation.
///
/// The textual grammar is owned by the decoder, not by this core: the loader
/// opens a byte stream and hands it over whole. Malformed input and truncated
/// streams both fail with [`DecodeError`].
pub trait BundleDecoder {
    /// File extension of the textual representation, without the leading dot.
    fn extension(&self) -> &str {
        "properties"
    }

    /// Decode a complete bundle from `stream`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Io`] when the stream cannot be read and
    /// [`DecodeError::Malformed`] when its content does not form a valid
    /// bundle.
    fn decode(&self, stream: &mut dyn Read) -> Result<Box<dyn Bundle>, DecodeError>;
}
