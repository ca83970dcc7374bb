//! Reusable test doubles for bundle loading.
//!
//! Shared across this crate's unit and behaviour tests so suites can exercise
//! scope resolution, construction, and decoding without a real module
//! system. The doubles are deliberately small: the textual grammar remains an
//! external collaborator, and [`LineDecoder`] implements only enough of a
//! `key=value` syntax to drive the loader.

use std::any::Any;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::io;
use std::io::{Cursor, Read};
use std::sync::Arc;

use crate::bundle::{Bundle, BundleDecoder};
use crate::error::{ConstructorFailure, DecodeError};
use crate::scope::{AccessGrant, BundleConstructor, BundleType, ResourceStream, Scope};

/// Map-backed bundle returned by the test doubles.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StaticBundle {
    entries: BTreeMap<String, String>,
}

impl StaticBundle {
    /// Construct a bundle from key/value pairs.
    #[must_use]
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl Bundle for StaticBundle {
    fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn keys(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

type ConstructorResult = Result<Box<dyn Bundle>, ConstructorFailure>;

struct FactoryConstructor {
    factory: Box<dyn Fn() -> ConstructorResult + Send + Sync>,
}

impl BundleConstructor for FactoryConstructor {
    fn construct(&self, _grant: &AccessGrant) -> ConstructorResult {
        (self.factory)()
    }
}

/// Resolvable type double, with or without a usable constructor.
pub struct StaticBundleType {
    constructor: Option<FactoryConstructor>,
}

impl std::fmt::Debug for StaticBundleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticBundleType")
            .field("constructible", &self.constructor.is_some())
            .finish()
    }
}

impl StaticBundleType {
    /// A type whose zero-argument constructor runs `factory`.
    #[must_use]
    pub fn constructible(
        factory: impl Fn() -> ConstructorResult + Send + Sync + 'static,
    ) -> Self {
        Self {
            constructor: Some(FactoryConstructor {
                factory: Box::new(factory),
            }),
        }
    }

    /// A resolvable type that is not a constructible bundle.
    #[must_use]
    pub fn opaque() -> Self {
        Self { constructor: None }
    }
}

impl BundleType for StaticBundleType {
    fn zero_arg_constructor(&self) -> Option<&dyn BundleConstructor> {
        self.constructor
            .as_ref()
            .map(|constructor| constructor as &dyn BundleConstructor)
    }
}

/// In-memory scope with registered types, primary and shared resources, and
/// injectable open failures.
#[derive(Debug, Default)]
pub struct MapScope {
    types: HashMap<String, Arc<dyn BundleType>>,
    resources: HashMap<String, Vec<u8>>,
    shared_resources: HashMap<String, Vec<u8>>,
    failing_paths: HashSet<String>,
}

impl MapScope {
    /// Register a resolvable type under `name`.
    #[must_use]
    pub fn with_type(mut self, name: impl Into<String>, bundle_type: StaticBundleType) -> Self {
        self.types.insert(name.into(), Arc::new(bundle_type));
        self
    }

    /// Store a resource at `path` within the scope.
    #[must_use]
    pub fn with_resource(mut self, path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.resources.insert(path.into(), content.into());
        self
    }

    /// Store a resource at `path` in the shared, unscoped location.
    #[must_use]
    pub fn with_shared_resource(
        mut self,
        path: impl Into<String>,
        content: impl Into<Vec<u8>>,
    ) -> Self {
        self.shared_resources.insert(path.into(), content.into());
        self
    }

    /// Make every open of `path` fail with an I/O error.
    #[must_use]
    pub fn with_failing_resource(mut self, path: impl Into<String>) -> Self {
        self.failing_paths.insert(path.into());
        self
    }

    fn open_from(
        &self,
        store: &HashMap<String, Vec<u8>>,
        path: &str,
    ) -> io::Result<Option<ResourceStream>> {
        if self.failing_paths.contains(path) {
            return Err(io::Error::other(format!("injected failure opening `{path}`")));
        }
        Ok(store
            .get(path)
            .map(|content| Box::new(Cursor::new(content.clone())) as ResourceStream))
    }
}

impl Scope for MapScope {
    fn resolve_type(&self, name: &str) -> Option<Arc<dyn BundleType>> {
        self.types.get(name).map(Arc::clone)
    }

    fn open_resource(&self, path: &str) -> io::Result<Option<ResourceStream>> {
        self.open_from(&self.resources, path)
    }

    fn open_shared_resource(&self, path: &str) -> io::Result<Option<ResourceStream>> {
        self.open_from(&self.shared_resources, path)
    }
}

/// Minimal `key=value` decoder double.
///
/// One pair per line; blank lines and `#` comments are ignored. A line
/// without a separator is malformed. The real textual grammar lives with the
/// production decoder, not here.
#[derive(Clone, Copy, Debug, Default)]
pub struct LineDecoder;

impl BundleDecoder for LineDecoder {
    fn decode(&self, stream: &mut dyn Read) -> Result<Box<dyn Bundle>, DecodeError> {
        let mut content = String::new();
        stream.read_to_string(&mut content)?;

        let mut entries: Vec<(String, String)> = Vec::new();
        for (index, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(DecodeError::Malformed {
                    reason: format!("line {}: missing `=` separator", index + 1),
                });
            };
            entries.push((key.trim().to_owned(), value.trim().to_owned()));
        }

        Ok(Box::new(StaticBundle::from_pairs(entries)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_decoder_parses_pairs_and_skips_comments() {
        let mut stream = Cursor::new(b"# header\ngreeting = hello\n\nfarewell=bye\n".to_vec());
        let bundle = LineDecoder
            .decode(&mut stream)
            .expect("well-formed content should decode");
        assert_eq!(bundle.get("greeting"), Some("hello"));
        assert_eq!(bundle.get("farewell"), Some("bye"));
        assert_eq!(bundle.keys(), vec!["farewell", "greeting"]);
    }

    #[test]
    fn line_decoder_rejects_separator_less_lines() {
        let mut stream = Cursor::new(b"greeting hello\n".to_vec());
        let error = LineDecoder
            .decode(&mut stream)
            .expect_err("missing separator should be malformed");
        assert!(matches!(error, DecodeError::Malformed { .. }));
    }

    #[test]
    fn map_scope_keeps_primary_and_shared_stores_apart() {
        let scope = MapScope::default()
            .with_resource("a/b.properties", "k=primary\n")
            .with_shared_resource("a/c.properties", "k=shared\n");

        assert!(scope
            .open_resource("a/b.properties")
            .expect("open should succeed")
            .is_some());
        assert!(scope
            .open_resource("a/c.properties")
            .expect("open should succeed")
            .is_none());
        assert!(scope
            .open_shared_resource("a/c.properties")
            .expect("open should succeed")
            .is_some());
    }
}
