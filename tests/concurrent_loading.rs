//! Concurrent lookups against a shared provider.
//!
//! The provider holds no mutable state beyond its construction-time
//! configuration, so independent threads may share one instance without
//! coordination; every successful lookup yields a freshly constructed
//! bundle.

use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use bundle_provider::testing::{LineDecoder, MapScope, StaticBundle, StaticBundleType};
use bundle_provider::{BundleProvider, LanguageIdentifier, StandardNaming};

const THREADS: usize = 8;

#[test]
fn shared_provider_yields_independent_instances() {
    static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

    let scope = MapScope::default()
        .with_type(
            "app.Messages_en",
            StaticBundleType::constructible(|| {
                CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
                Ok(Box::new(StaticBundle::from_pairs([("greeting", "hello")])))
            }),
        )
        .with_resource("app/Messages_fr.properties", "greeting=bonjour\n");
    let provider = BundleProvider::new(scope, StandardNaming, LineDecoder);

    let english = LanguageIdentifier::from_str("en").expect("locale should parse");
    let french = LanguageIdentifier::from_str("fr").expect("locale should parse");

    thread::scope(|threads| {
        for _ in 0..THREADS {
            threads.spawn(|| {
                let compiled = provider
                    .get_bundle("app.Messages", &english)
                    .expect("compiled lookup should succeed")
                    .expect("compiled bundle should be found");
                assert_eq!(compiled.get("greeting"), Some("hello"));

                let textual = provider
                    .get_bundle("app.Messages", &french)
                    .expect("textual lookup should succeed")
                    .expect("textual bundle should be found");
                assert_eq!(textual.get("greeting"), Some("bonjour"));
            });
        }
    });

    // One fresh compiled instance per call; nothing is cached or shared.
    assert_eq!(CONSTRUCTIONS.load(Ordering::SeqCst), THREADS);
}
