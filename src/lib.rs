// src/lib.rs

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod kv;
pub mod location;
pub mod models;
pub mod store;

pub use error::{GolingError, Result};
pub use kv::{KeyValueStore, MemoryStore, SqliteStore};
pub use location::{LocationProvider, PositionSource};
pub use models::{Coordinates, Draft, Log};
pub use store::LogStore;
