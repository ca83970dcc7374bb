//! Provider orchestration: format negotiation over one resolved bundle name.
//!
//! A provider owns its defining scope, an ordered list of enabled formats,
//! and the naming policy that mangles a base name and locale into a bundle
//! name. Each lookup tries the configured formats in declared order and
//! returns the first non-empty result; exhausting every format is a normal
//! outcome, not an error.

use log::debug;
use unic_langid::LanguageIdentifier;

use crate::bundle::{Bundle, BundleDecoder};
use crate::compiled;
use crate::error::{BundleError, InvalidFormatError};
use crate::format::BundleFormat;
use crate::scope::Scope;
use crate::textual;

/// Naming policy mangling a base name and locale into a bundle name.
///
/// The policy must be pure and deterministic: no I/O, no side effects. The
/// produced name serves both as a type-lookup key and, after path mangling,
/// as a resource path.
pub trait BundleNaming {
    /// Produce the bundle name for `base_name` under `locale`.
    fn bundle_name(&self, base_name: &str, locale: &LanguageIdentifier) -> String;
}

/// Underscore-suffix naming: append the locale's non-empty subtags to the
/// base name.
///
/// `app.Messages` under `en-US` becomes `app.Messages_en_US`; the root
/// locale leaves the base name unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardNaming;

impl BundleNaming for StandardNaming {
    fn bundle_name(&self, base_name: &str, locale: &LanguageIdentifier) -> String {
        let mut subtags: Vec<&str> = Vec::new();
        let language = locale.language.as_str();
        if language != "und" {
            subtags.push(language);
        }
        if let Some(script) = &locale.script {
            subtags.push(script.as_str());
        }
        if let Some(region) = &locale.region {
            subtags.push(region.as_str());
        }
        for variant in locale.variants() {
            subtags.push(variant.as_str());
        }

        if subtags.is_empty() {
            base_name.to_owned()
        } else {
            format!("{base_name}_{}", subtags.join("_"))
        }
    }
}

/// Provider for locale-specific resource bundles within one scope.
///
/// The format list is fixed at construction; lookups share no mutable state,
/// so a provider may be used from independent threads whenever its scope,
/// naming policy, and decoder allow it.
#[derive(Debug)]
pub struct BundleProvider<S, N, D> {
    scope: S,
    naming: N,
    decoder: D,
    formats: Vec<BundleFormat>,
}

impl<S, N, D> BundleProvider<S, N, D>
where
    S: Scope,
    N: BundleNaming,
    D: BundleDecoder,
{
    /// Create a provider attempting the compiled-type format first, then the
    /// textual format.
    #[must_use]
    pub fn new(scope: S, naming: N, decoder: D) -> Self {
        Self {
            scope,
            naming,
            decoder,
            formats: vec![BundleFormat::CompiledType, BundleFormat::Textual],
        }
    }

    /// Create a provider attempting the given format identifiers in declared
    /// order.
    ///
    /// A provider whose bundles are always textual can skip the type-lookup
    /// path entirely by configuring `["textual"]`. An empty list is allowed
    /// and makes every lookup return empty.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidFormatError`] when any identifier is not
    /// `compiled-type` or `textual`.
    pub fn with_formats<I, T>(
        scope: S,
        naming: N,
        decoder: D,
        identifiers: I,
    ) -> Result<Self, InvalidFormatError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let formats = identifiers
            .into_iter()
            .map(|identifier| identifier.as_ref().parse())
            .collect::<Result<Vec<BundleFormat>, InvalidFormatError>>()?;
        Ok(Self {
            scope,
            naming,
            decoder,
            formats,
        })
    }

    /// The formats this provider attempts, in declared order.
    #[must_use]
    pub fn formats(&self) -> &[BundleFormat] {
        &self.formats
    }

    /// Locate and construct the bundle for `base_name` under `locale`.
    ///
    /// The first configured format yielding a bundle wins; `Ok(None)` means
    /// no format could supply one, a normal outcome the caller's fallback
    /// machinery is expected to handle.
    ///
    /// # Errors
    ///
    /// Returns [`BundleError::Decode`] when a textual resource exists but
    /// cannot be read or decoded (this short-circuits the remaining
    /// formats), [`BundleError::Constructor`] with the original failure when
    /// a compiled bundle's constructor raises, and [`BundleError::Internal`]
    /// when construction breaks an environment invariant.
    pub fn get_bundle(
        &self,
        base_name: &str,
        locale: &LanguageIdentifier,
    ) -> Result<Option<Box<dyn Bundle>>, BundleError> {
        let bundle_name = self.naming.bundle_name(base_name, locale);
        debug!(
            target: "bundle_provider",
            "resolving `{base_name}` for `{locale}` as `{bundle_name}`",
        );

        for format in &self.formats {
            debug!(target: "bundle_provider", "trying {format} bundle `{bundle_name}`");
            let bundle = match format {
                BundleFormat::CompiledType => compiled::load_compiled(&self.scope, &bundle_name)?,
                BundleFormat::Textual => {
                    textual::load_textual(&self.scope, &self.decoder, &bundle_name)?
                }
            };
            if let Some(bundle) = bundle {
                return Ok(Some(bundle));
            }
        }

        Ok(None)
    }
}
