mod helpers;

use helpers::{log, memory_store, sqlite_store};
use std::collections::HashSet;
use std::thread;

const WRITERS: usize = 4;
const PER_WRITER: usize = 25;

#[test]
fn concurrent_appends_to_memory_store_lose_nothing() {
    let store = memory_store();

    thread::scope(|s| {
        for w in 0..WRITERS {
            let store = &store;
            s.spawn(move || {
                for i in 0..PER_WRITER {
                    store.add_log(&log(&format!("w{}-{}", w, i))).unwrap();
                }
            });
        }
    });

    let logs = store.get_logs().unwrap();
    assert_eq!(logs.len(), WRITERS * PER_WRITER);
    let ids: HashSet<_> = logs.iter().map(|l| l.id.clone()).collect();
    assert_eq!(ids.len(), WRITERS * PER_WRITER);
}

#[test]
fn concurrent_appends_through_separate_connections_lose_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("goling.db");
    // Create the schema before the writers race on it.
    drop(sqlite_store(&path));

    thread::scope(|s| {
        for w in 0..WRITERS {
            let path = &path;
            s.spawn(move || {
                let store = sqlite_store(path);
                for i in 0..PER_WRITER {
                    store.add_log(&log(&format!("w{}-{}", w, i))).unwrap();
                }
            });
        }
    });

    let logs = sqlite_store(&path).get_logs().unwrap();
    assert_eq!(logs.len(), WRITERS * PER_WRITER);

    // Each writer's own entries keep their relative order.
    for w in 0..WRITERS {
        let prefix = format!("w{}-", w);
        let mine: Vec<usize> = logs
            .iter()
            .filter_map(|l| l.note.strip_prefix(&prefix))
            .map(|n| n.parse().unwrap())
            .collect();
        assert_eq!(mine, (0..PER_WRITER).collect::<Vec<_>>());
    }
}
