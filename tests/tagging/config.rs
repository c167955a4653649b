//! Configuration loaded from `metatag.toml`.

use std::sync::Arc;

use metatag::{MemoryTable, Table, TaggerConfig, Tagger};
use tempfile::TempDir;

use crate::common::*;

#[test]
fn config_file_drives_table_and_id_length() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(metatag::CONFIG_FILE_NAME);
    std::fs::write(&path, "table_name = \"DocTags\"\nid_length = 12\n").unwrap();

    let config = TaggerConfig::from_file(&path).unwrap();
    let backend = Arc::new(MemoryTable::new());
    let tagger = Tagger::with_config(backend.clone(), &config).unwrap();
    tagger.init(&[]).unwrap();

    assert!(backend.table_exists("DocTags"));
    assert!(!backend.table_exists("MetaTable"));

    let id = create(&tagger, "doc1", "urgent", "n");
    assert_eq!(id.len(), 12);
    assert_eq!(query(&tagger, "doc1")[0].id, id);
}

#[test]
fn default_config_file_matches_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(metatag::CONFIG_FILE_NAME);
    TaggerConfig::write_default_if_missing(&path).unwrap();
    assert_eq!(TaggerConfig::from_file(&path).unwrap(), TaggerConfig::default());
}
