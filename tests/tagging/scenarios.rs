//! Create/query scenarios through the string entry points.

use std::collections::HashSet;

use crate::common::*;
use metatag::{Command, Error, Output, Tagger};

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn tag_then_list_document() {
    let (_, tagger) = ready_tagger();

    let id = create(&tagger, "doc1", "urgent", "needs review");
    let records = query(&tagger, "doc1");

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.id, id);
    assert_eq!(record.document, "doc1");
    assert_eq!(record.tag, "urgent");
    assert_eq!(record.note, "needs review");
}

#[test]
fn fresh_store_lists_nothing() {
    let (_, tagger) = ready_tagger();
    let payload = tagger.query("query", &args(&["unknown-doc"])).unwrap();
    assert_eq!(payload, b"[]");
}

#[test]
fn same_tag_twice_yields_two_records() {
    let (backend, tagger) = ready_tagger();

    let first = create(&tagger, "doc1", "urgent", "first pass");
    let second = create(&tagger, "doc1", "urgent", "second pass");
    assert_ne!(first, second);
    assert_eq!(backend.row_count("MetaTable"), Some(2));

    let notes: HashSet<String> = query(&tagger, "doc1").into_iter().map(|r| r.note).collect();
    let expected: HashSet<String> = ["first pass", "second pass"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(notes, expected);
}

#[test]
fn ids_never_repeat_across_documents() {
    let (_, tagger) = ready_tagger();
    let mut seen = HashSet::new();
    for doc in 0..20 {
        for tag in 0..5 {
            let id = create(&tagger, &format!("doc{}", doc), &format!("t{}", tag), "");
            assert!(seen.insert(id));
        }
    }
}

#[test]
fn empty_strings_are_valid_input() {
    let (_, tagger) = ready_tagger();
    let id = create(&tagger, "", "", "");
    let records = query(&tagger, "");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, id);
}

// ============================================================================
// Rejected invocations
// ============================================================================

#[test]
fn delete_is_not_an_operation() {
    let (backend, tagger) = ready_tagger();
    let err = tagger.invoke("delete", &args(&["doc1"])).unwrap_err();
    assert!(matches!(err, Error::UnknownOperation { ref name } if name == "delete"));
    assert_eq!(backend.row_count("MetaTable"), Some(0));
}

#[test]
fn transfer_is_not_an_operation() {
    let (_, tagger) = ready_tagger();
    let err = tagger
        .invoke("transfer", &args(&["doc1", "someone"]))
        .unwrap_err();
    assert!(matches!(err, Error::UnknownOperation { .. }));
}

#[test]
fn create_with_two_or_four_args_is_rejected() {
    let (backend, tagger) = ready_tagger();
    for bad in [args(&["doc1", "urgent"]), args(&["doc1", "urgent", "n", "extra"])] {
        let err = tagger.invoke("create", &bad).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidArgumentCount {
                operation: "create".into(),
                expected: 3,
                actual: bad.len(),
            }
        );
    }
    assert_eq!(backend.row_count("MetaTable"), Some(0));
}

#[test]
fn read_path_only_knows_query() {
    let (_, tagger) = ready_tagger();
    let err = tagger
        .query("create", &args(&["doc1", "urgent", "n"]))
        .unwrap_err();
    assert!(matches!(err, Error::UnknownQuery { .. }));
}

#[test]
fn second_init_is_rejected() {
    let (_, tagger) = ready_tagger();
    assert!(matches!(
        tagger.init(&[]),
        Err(Error::Initialization { .. })
    ));
}

#[test]
fn uninitialized_service_rejects_everything() {
    init_tracing();
    let tagger = Tagger::in_memory();
    assert_eq!(
        tagger.invoke("create", &args(&["d", "t", "n"])),
        Err(Error::NotInitialized)
    );
    assert_eq!(
        tagger.query("query", &args(&["d"])),
        Err(Error::NotInitialized)
    );
}

// ============================================================================
// Typed entry point
// ============================================================================

#[test]
fn typed_commands_match_string_paths() {
    let (_, tagger) = ready_tagger();

    let out = tagger
        .execute(Command::Create {
            document: "doc1".into(),
            tag: "urgent".into(),
            note: "typed".into(),
        })
        .unwrap();
    let id = match out {
        Output::Created { id } => id,
        other => panic!("Expected Created, got {:?}", other),
    };

    let records = query(&tagger, "doc1");
    assert_eq!(records[0].id, id);

    let out = tagger
        .execute(Command::Query {
            document: "doc1".into(),
        })
        .unwrap();
    assert_eq!(out, Output::Records(records));
}

#[test]
fn error_payloads_serialize() {
    let (_, tagger) = ready_tagger();
    let err = tagger.invoke("create", &args(&["only-one"])).unwrap_err();
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["InvalidArgumentCount"]["actual"], 1);
}
