//! Common test utilities for tagging tests

use std::sync::Arc;

use metatag::{MemoryTable, TagRecord, Tagger};

/// Install a test-friendly tracing subscriber once per process.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .try_init();
}

/// Create an initialized tagger and keep a handle on its backend
pub fn ready_tagger() -> (Arc<MemoryTable>, Tagger) {
    init_tracing();
    let backend = Arc::new(MemoryTable::new());
    let tagger = Tagger::new(backend.clone());
    tagger.init(&[]).unwrap();
    (backend, tagger)
}

/// Owned argument list from string slices
pub fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// Run `create` and return the id as a string
pub fn create(tagger: &Tagger, document: &str, tag: &str, note: &str) -> String {
    let id = tagger
        .invoke("create", &args(&[document, tag, note]))
        .unwrap();
    String::from_utf8(id).unwrap()
}

/// Run `query` and decode the JSON payload
pub fn query(tagger: &Tagger, document: &str) -> Vec<TagRecord> {
    let payload = tagger.query("query", &args(&[document])).unwrap();
    serde_json::from_slice(&payload).unwrap()
}
