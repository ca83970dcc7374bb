//! Type-based bundle loading.
//!
//! Resolves a bundle name to a compiled type within a scope and constructs it
//! through its public zero-argument constructor. Absence at any resolution
//! step is "not found", never an error; only constructor failures surface,
//! and those split into the bundle's own failure (forwarded verbatim) and
//! environment-invariant breaches (unrecoverable).

use crate::bundle::Bundle;
use crate::error::{BundleError, ConstructorFailure};
use crate::scope::{AccessGrant, Scope};

/// Load a compiled bundle named `bundle_name` from `scope`.
///
/// Returns `Ok(None)` when no such type exists in the scope, when the
/// resolved type is not a bundle, or when it has no accessible zero-argument
/// constructor.
///
/// # Errors
///
/// Returns [`BundleError::Constructor`] carrying the original failure when
/// the bundle's own construction logic fails, and [`BundleError::Internal`]
/// when construction fails after access had already been granted.
pub fn load_compiled<S>(scope: &S, bundle_name: &str) -> Result<Option<Box<dyn Bundle>>, BundleError>
where
    S: Scope + ?Sized,
{
    let Some(bundle_type) = scope.resolve_type(bundle_name) else {
        return Ok(None);
    };
    let Some(constructor) = bundle_type.zero_arg_constructor() else {
        return Ok(None);
    };

    AccessGrant::with_elevated(|grant| match constructor.construct(grant) {
        Ok(bundle) => Ok(Some(bundle)),
        Err(ConstructorFailure::Raised(failure)) => Err(BundleError::Constructor(failure)),
        Err(ConstructorFailure::Inaccessible { reason }) => Err(BundleError::Internal { reason }),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::scope::{BundleType, MockScope};
    use crate::testing::{StaticBundle, StaticBundleType};

    fn scope_with_type(bundle_type: StaticBundleType) -> MockScope {
        let handle: Arc<dyn BundleType> = Arc::new(bundle_type);
        let mut scope = MockScope::new();
        scope
            .expect_resolve_type()
            .returning(move |name| (name == "app.Messages_en").then(|| Arc::clone(&handle)));
        scope
    }

    #[test]
    fn absent_type_is_not_found() {
        let mut scope = MockScope::new();
        scope.expect_resolve_type().returning(|_| None);

        let outcome = load_compiled(&scope, "app.Messages_en").expect("absence is not an error");
        assert!(outcome.is_none());
    }

    #[test]
    fn type_without_constructor_is_not_found() {
        let scope = scope_with_type(StaticBundleType::opaque());

        let outcome = load_compiled(&scope, "app.Messages_en").expect("absence is not an error");
        assert!(outcome.is_none());
    }

    #[test]
    fn constructs_a_fresh_instance() {
        let scope = scope_with_type(StaticBundleType::constructible(|| {
            Ok(Box::new(StaticBundle::from_pairs([("greeting", "hello")])))
        }));

        let bundle = load_compiled(&scope, "app.Messages_en")
            .expect("construction should succeed")
            .expect("bundle should be found");
        assert_eq!(bundle.get("greeting"), Some("hello"));
        assert!(bundle.as_any().downcast_ref::<StaticBundle>().is_some());
    }

    #[test]
    fn constructor_failure_is_forwarded_verbatim() {
        let scope = scope_with_type(StaticBundleType::constructible(|| {
            Err(ConstructorFailure::Raised(
                "translation catalogue corrupt".to_string().into(),
            ))
        }));

        let error = load_compiled(&scope, "app.Messages_en")
            .expect_err("constructor failure should propagate");
        match error {
            BundleError::Constructor(failure) => {
                assert_eq!(failure.to_string(), "translation catalogue corrupt");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn access_failure_is_an_invariant_breach() {
        let scope = scope_with_type(StaticBundleType::constructible(|| {
            Err(ConstructorFailure::Inaccessible {
                reason: "constructor visibility revoked".to_string(),
            })
        }));

        let error = load_compiled(&scope, "app.Messages_en")
            .expect_err("invariant breach should propagate");
        assert!(matches!(error, BundleError::Internal { .. }));
    }
}
