//! Leaf-level loader for locale-specific resource bundles.
//!
//! A bundle is a named, localized data object keyed by a base name and a
//! locale. Higher-level frameworks own locale fallback chains, caching, and
//! control policy; this crate is the loader they delegate to: given one
//! fully resolved bundle name, find and construct the concrete bundle within
//! an isolated code/resource scope.
//!
//! Three responsibilities are layered inside:
//!
//! - [`provider`] - format negotiation over the configured representations
//!   and the name-mangling hook
//! - [`compiled`] - resolving a bundle name to a constructible type and
//!   instantiating it safely across scope boundaries
//! - [`textual`] - locating a textual resource, with a shared-location
//!   fallback for unmigrated bundles, and decoding it through an injected
//!   decoder
//!
//! ```
//! use bundle_provider::testing::{LineDecoder, MapScope};
//! use bundle_provider::{BundleProvider, StandardNaming};
//!
//! let scope = MapScope::default()
//!     .with_resource("app/Messages_en.properties", "greeting=hello\n");
//! let provider =
//!     BundleProvider::with_formats(scope, StandardNaming, LineDecoder, ["textual"])?;
//!
//! let locale = "en".parse().map_err(|_| "locale tag should parse")?;
//! let bundle = provider
//!     .get_bundle("app.Messages", &locale)?
//!     .ok_or("bundle should be found")?;
//! assert_eq!(bundle.get("greeting"), Some("hello"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod bundle;
pub mod compiled;
pub mod error;
pub mod format;
pub mod provider;
pub mod scope;
pub mod testing;
pub mod textual;

/// Locale identifier accepted by naming policies.
pub use unic_langid::LanguageIdentifier;

pub use bundle::{Bundle, BundleDecoder};
pub use compiled::load_compiled;
pub use error::{BundleError, ConstructorFailure, DecodeError, InvalidFormatError};
pub use format::BundleFormat;
pub use provider::{BundleNaming, BundleProvider, StandardNaming};
pub use scope::{AccessGrant, BundleConstructor, BundleType, ResourceStream, Scope};
pub use textual::load_textual;
