//! Fuzz target for stored style tags and snapshot documents.
//!
//! Tags and snapshots come from persisted data, so parsing must reject bad
//! input with an error and never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rich_text_engine::{EditorState, Snapshot, StyleRegistry};

fuzz_target!(|data: &str| {
    let registry = StyleRegistry::default();
    if let Ok(token) = registry.from_tag(data) {
        // A parsed tag must serialize back to something that parses to the same token.
        let reparsed = registry.from_tag(&token.tag());
        assert_eq!(reparsed.ok(), Some(token));
    }

    if let Ok(snapshot) = Snapshot::from_json(data) {
        // Restoring may fail on unknown tags, but must not panic on bad bounds.
        let _ = EditorState::new().restore(&snapshot);
    }
});
