#![allow(dead_code)]

use goling::{Coordinates, Draft, Log, LogStore, MemoryStore, SqliteStore};
use std::path::Path;

/// Fresh in-memory journal.
pub fn memory_store() -> LogStore<MemoryStore> {
    LogStore::open(MemoryStore::new()).unwrap()
}

/// Journal backed by a SQLite file at `path`.
pub fn sqlite_store(path: &Path) -> LogStore<SqliteStore> {
    LogStore::open(SqliteStore::open(path).unwrap()).unwrap()
}

pub fn log(note: &str) -> Log {
    Draft::new(note).into_log(None).unwrap()
}

pub fn located_log(note: &str, latitude: f64, longitude: f64) -> Log {
    Draft::new(note)
        .into_log(Some(Coordinates::new(latitude, longitude)))
        .unwrap()
}

/// Deterministic xorshift64 generator for coordinate fixtures.
pub struct Xorshift(u64);

impl Xorshift {
    pub fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    /// Uniform value in `[lo, hi]` using all 53 mantissa bits.
    pub fn next_in(&mut self, lo: f64, hi: f64) -> f64 {
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        lo + unit * (hi - lo)
    }

    pub fn next_coordinates(&mut self) -> Coordinates {
        Coordinates::new(self.next_in(-90.0, 90.0), self.next_in(-180.0, 180.0))
    }
}
