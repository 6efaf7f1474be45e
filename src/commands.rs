// src/commands.rs

use crate::config::Config;
use crate::error::{GolingError, Result};
use crate::kv::SqliteStore;
use crate::location::{DeniedSource, FixedSource, LocationProvider};
use crate::models::{Coordinates, Draft, Log};
use crate::store::LogStore;
use chrono::{DateTime, Local};
use std::env;
use std::io::Read;
use std::process::Command;

fn open_store(config: &Config) -> Result<LogStore<SqliteStore>> {
    let db_path = config.resolved_db_path()?;
    LogStore::open(SqliteStore::open(&db_path)?)
}

fn format_time(timestamp: &str) -> String {
    // 时间戳无法解析时原样显示
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

fn print_log(log: &Log) {
    let place = if log.place.is_empty() { "Somewhere" } else { log.place.as_str() };
    let tags_display = if log.tags.is_empty() {
        String::new()
    } else {
        format!(" | Tags: {}", log.tags)
    };
    println!("[{}] {} @ {}{}", log.id, format_time(&log.timestamp), place, tags_display);
    println!("{}", log.note.trim_end());
    println!("{}", "─".repeat(40));
}

/// 处理 'init' 命令
pub fn handle_init(config: &Config) -> Result<()> {
    let store = open_store(config)?;
    println!(
        "✓ Journal ready at: {}",
        config.resolved_db_path()?.display()
    );
    match store.get_logs() {
        Ok(logs) => println!("✓ {} moment(s) recorded so far.", logs.len()),
        Err(e) => println!("Warning: existing journal could not be read: {}", e),
    }
    Ok(())
}

fn read_note_from_editor() -> Result<String> {
    let temp_file = tempfile::NamedTempFile::new()?;
    let editor = env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    let status = Command::new(&editor).arg(temp_file.path()).status()?;

    if !status.success() {
        return Err(GolingError::EditorError);
    }
    let mut buf = String::new();
    temp_file.reopen()?.read_to_string(&mut buf)?;
    Ok(buf)
}

/// Explicit coordinates win, then the configured position. Both pass
/// through the provider so out-of-range values are dropped.
fn resolve_position(
    config: &Config,
    explicit: Option<Coordinates>,
    no_location: bool,
) -> Option<Coordinates> {
    if no_location {
        return LocationProvider::new(DeniedSource).current_position();
    }
    match explicit.or_else(|| config.location.position()) {
        Some(coords) => LocationProvider::new(FixedSource::new(coords)).current_position(),
        None => LocationProvider::new(DeniedSource).current_position(),
    }
}

/// 处理 'new' 命令
pub fn handle_new(
    config: &Config,
    message: Option<String>,
    place: String,
    tags: String,
    lat: Option<f64>,
    lon: Option<f64>,
    no_location: bool,
) -> Result<()> {
    let note = match message {
        Some(msg) => msg,
        None => read_note_from_editor()?,
    };

    let explicit = match (lat, lon) {
        (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
        _ => None,
    };
    let position = resolve_position(config, explicit, no_location);

    let log = match Draft::new(note).place(place).tags(tags).into_log(position) {
        Ok(log) => log,
        Err(GolingError::InvalidInput(_)) => {
            eprintln!("Empty note, skipped.");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let store = open_store(config)?;
    store.add_log(&log)?;

    println!("✓ Moment recorded: {}", log.id);
    Ok(())
}

/// 处理 'list' 命令
pub fn handle_list(config: &Config) -> Result<()> {
    let logs = open_store(config)?.get_logs()?;
    if logs.is_empty() {
        println!("No moments recorded yet.");
        return Ok(());
    }
    for log in &logs {
        print_log(log);
    }
    Ok(())
}

/// 处理 'feed' 命令
pub fn handle_feed(config: &Config, num: Option<usize>) -> Result<()> {
    let limit = num.unwrap_or(10);
    let logs = open_store(config)?.feed()?;
    if logs.is_empty() {
        println!("No moments recorded yet.");
        return Ok(());
    }
    for log in logs.iter().take(limit) {
        print_log(log);
    }
    Ok(())
}

/// 处理 'show' 命令
pub fn handle_show(config: &Config, id: &str) -> Result<()> {
    let log = open_store(config)?
        .find_log(id)?
        .ok_or_else(|| GolingError::LogNotFound(id.to_string()))?;

    println!("{}", format_time(&log.timestamp));
    println!("Place: {}", if log.place.is_empty() { "No location" } else { log.place.as_str() });
    println!();
    println!("{}", log.note.trim_end());
    if !log.tags.is_empty() {
        println!();
        println!("{}", log.tags);
    }
    if let Some(c) = log.coordinates {
        println!();
        println!("Coordinates: {:.4}, {:.4}", c.latitude, c.longitude);
    }
    Ok(())
}

/// 处理 'map' 命令
pub fn handle_map(config: &Config) -> Result<()> {
    let markers = open_store(config)?.map_markers()?;
    if markers.is_empty() {
        println!("No moments with a location yet.");
        return Ok(());
    }
    for (id, c) in markers {
        println!("{:>10.4} {:>10.4}  {}", c.latitude, c.longitude, id);
    }
    Ok(())
}

/// 处理 'stats' 命令
pub fn handle_stats(config: &Config) -> Result<()> {
    let summary = open_store(config)?.summary()?;
    println!("Moments recorded: {}", summary.total);
    println!("With a location:  {}", summary.with_location);
    if let Some(ts) = summary.latest_timestamp {
        println!("Latest moment:    {}", format_time(&ts));
    }
    Ok(())
}

/// 处理 'export' 命令
pub fn handle_export(config: &Config) -> Result<()> {
    println!("{}", open_store(config)?.export_raw()?);
    Ok(())
}
