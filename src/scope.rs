//! Scope abstraction over isolated code and resource units.
//!
//! A scope is an opaque handle to an isolated unit of code and resources:
//! types and resource artifacts inside it are visible only through explicit
//! resolution. The loading core is parameterized by exactly one scope per
//! lookup; textual lookups additionally consult the scope's shared, unscoped
//! location, which exists for bundles that have not yet been migrated into an
//! isolated scope.

use std::io;
use std::io::Read;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::bundle::Bundle;
use crate::error::ConstructorFailure;

/// Byte stream yielded by a resource lookup.
pub type ResourceStream = Box<dyn Read>;

/// Resolution capability of an isolated code/resource scope.
///
/// Absence is a value here, not an error: a missing type or resource yields
/// `None`, and only genuine I/O failures surface as `Err`.
#[cfg_attr(test, mockall::automock)]
pub trait Scope {
    /// Resolve `name` to a type visible within this scope.
    fn resolve_type(&self, name: &str) -> Option<Arc<dyn BundleType>>;

    /// Open the resource stored under `path` within this scope.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the resource exists but cannot
    /// be opened.
    fn open_resource(&self, path: &str) -> io::Result<Option<ResourceStream>>;

    /// Open the resource stored under `path` in the shared, unscoped location
    /// reachable from this scope's originating loading context.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the resource exists but cannot
    /// be opened.
    fn open_shared_resource(&self, path: &str) -> io::Result<Option<ResourceStream>>;
}

/// A type resolved within a scope that may be a constructible bundle.
///
/// Type handles are shareable metadata, so implementations must be
/// `Send + Sync`; the instances they construct carry no such bound.
pub trait BundleType: Send + Sync + std::fmt::Debug {
    /// The public zero-argument constructor, when this type is a bundle with
    /// one.
    ///
    /// `None` covers both "not a bundle type" and "no accessible
    /// zero-argument constructor"; the loader treats either as "not found"
    /// because a later format may still succeed.
    fn zero_arg_constructor(&self) -> Option<&dyn BundleConstructor>;
}

/// Constructor for a compiled bundle type.
pub trait BundleConstructor: Send + Sync {
    /// Construct a fresh bundle instance under `grant`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructorFailure::Raised`] when the bundle's own
    /// construction logic fails, and [`ConstructorFailure::Inaccessible`]
    /// when invocation fails despite the granted access.
    fn construct(&self, grant: &AccessGrant) -> Result<Box<dyn Bundle>, ConstructorFailure>;
}

/// Scoped permission token for one cross-scope construction call.
///
/// The loading core may lack read access to a bundle's defining scope, so
/// construction runs under a temporarily widened access context. The grant
/// can only be minted inside this crate, is lent by reference for the
/// duration of a single [`BundleConstructor::construct`] call, and cannot
/// move to another thread.
pub struct AccessGrant {
    _scoped: PhantomData<*const ()>,
}

impl AccessGrant {
    /// Run `operation` under an elevated access context limited to the call.
    pub(crate) fn with_elevated<R>(operation: impl FnOnce(&Self) -> R) -> R {
        let grant = Self {
            _scoped: PhantomData,
        };
        operation(&grant)
    }
}
