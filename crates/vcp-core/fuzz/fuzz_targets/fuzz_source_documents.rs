#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;
use vcp_core::config::Config;
use vcp_core::search::Resolver;
use vcp_core::source::{ProjectManagerDocument, RecentsDocument};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes as either source document must never panic the resolver
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    let recents = RecentsDocument::parse(s).ok();
    let projects = ProjectManagerDocument::parse(s).ok();
    let resolver = Resolver::new(&Config::default(), |_: &Path| true);

    let query: String = s.chars().take(4).collect();
    let _ = resolver.resolve(&query, recents.as_ref(), projects.as_ref());
});
