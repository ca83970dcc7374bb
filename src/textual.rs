//! Textual bundle loading.
//!
//! Derives a resource path from a bundle name, opens a byte stream within the
//! scope (falling back to the scope's shared, unscoped location for bundles
//! that have not been migrated yet), and hands the stream to the injected
//! decoder. The stream is released on every exit path; I/O failures always
//! propagate and are never reported as "not found".

use log::{debug, warn};

use crate::bundle::{Bundle, BundleDecoder};
use crate::error::DecodeError;
use crate::scope::Scope;

/// Load a textual bundle named `bundle_name` from `scope`, decoding it with
/// `decoder`.
///
/// Returns `Ok(None)` when the bundle name cannot form a resource path or
/// when neither the scope nor its shared location holds the resource.
///
/// # Errors
///
/// Returns [`DecodeError`] when the resource exists but cannot be opened,
/// read, or decoded.
pub fn load_textual<S, D>(
    scope: &S,
    decoder: &D,
    bundle_name: &str,
) -> Result<Option<Box<dyn Bundle>>, DecodeError>
where
    S: Scope + ?Sized,
    D: BundleDecoder + ?Sized,
{
    let Some(path) = resource_path(bundle_name, decoder.extension()) else {
        warn!(
            target: "bundle_provider::textual",
            "`{bundle_name}` contains a scheme marker and cannot name a resource",
        );
        return Ok(None);
    };

    let stream = match scope.open_resource(&path)? {
        Some(stream) => Some(stream),
        // Migration fallback: bundles not yet moved into an isolated scope
        // remain reachable through the shared location.
        None => {
            debug!(
                target: "bundle_provider::textual",
                "`{path}` not in scope; consulting the shared location",
            );
            scope.open_shared_resource(&path)?
        }
    };

    match stream {
        Some(mut stream) => decoder.decode(stream.as_mut()).map(Some),
        None => Ok(None),
    }
}

/// Derive the resource path for `bundle_name`, or `None` when the name
/// embeds a scheme marker and must not be interpreted as hierarchical.
fn resource_path(bundle_name: &str, extension: &str) -> Option<String> {
    if bundle_name.contains("://") {
        return None;
    }
    let mut path = bundle_name.replace('.', "/");
    path.push('.');
    path.push_str(extension);
    Some(path)
}
