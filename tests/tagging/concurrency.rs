//! Concurrent callers sharing one service.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use crate::common::*;

#[test]
fn parallel_creates_are_all_retrievable() {
    let (backend, tagger) = ready_tagger();
    let tagger = Arc::new(tagger);

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let tagger = Arc::clone(&tagger);
            thread::spawn(move || {
                (0..100)
                    .map(|i| create(&tagger, "shared", &format!("t{}", t), &format!("{}", i)))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for h in handles {
        for id in h.join().unwrap() {
            assert!(ids.insert(id));
        }
    }

    assert_eq!(ids.len(), 800);
    assert_eq!(backend.row_count("MetaTable"), Some(800));

    let queried: HashSet<String> = query(&tagger, "shared").into_iter().map(|r| r.id).collect();
    assert_eq!(queried, ids);
}

#[test]
fn readers_and_writers_interleave() {
    let (_, tagger) = ready_tagger();
    let tagger = Arc::new(tagger);

    let writer = {
        let tagger = Arc::clone(&tagger);
        thread::spawn(move || {
            for i in 0..200 {
                create(&tagger, "doc", "t", &i.to_string());
            }
        })
    };

    let reader = {
        let tagger = Arc::clone(&tagger);
        thread::spawn(move || {
            let mut last = 0;
            for _ in 0..50 {
                let n = query(&tagger, "doc").len();
                // Records are never removed
                assert!(n >= last);
                last = n;
            }
        })
    };

    writer.join().unwrap();
    reader.join().unwrap();
    assert_eq!(query(&tagger, "doc").len(), 200);
}
