// src/models.rs

use crate::error::{GolingError, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A latitude/longitude pair. Always stored together so that a log never
/// carries one half of a position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Range check used before a position is accepted from a source.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Human readable place text, used when the user leaves `place` blank.
    pub fn describe(&self) -> String {
        format!("Lat: {:.4}, Lon: {:.4}", self.latitude, self.longitude)
    }
}

fn default_anonymous() -> bool {
    true
}

/// A single journal entry, serialized with the same field names as the
/// persisted JSON array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Log {
    pub id: String,
    pub timestamp: String, // RFC3339 string
    pub note: String,
    #[serde(default)]
    pub place: String,
    #[serde(default)]
    pub tags: String,
    // A record holding only one of latitude/longitude reads back as `None`.
    #[serde(flatten)]
    pub coordinates: Option<Coordinates>,
    #[serde(rename = "isAnonymous", default = "default_anonymous")]
    pub is_anonymous: bool,
}

impl Log {
    pub fn latitude(&self) -> Option<f64> {
        self.coordinates.map(|c| c.latitude)
    }

    pub fn longitude(&self) -> Option<f64> {
        self.coordinates.map(|c| c.longitude)
    }
}

/// User input gathered by the composition flow, before an id and timestamp
/// are assigned.
#[derive(Debug, Clone, Default)]
pub struct Draft {
    pub note: String,
    pub place: String,
    pub tags: String,
}

impl Draft {
    pub fn new(note: impl Into<String>) -> Self {
        Self {
            note: note.into(),
            ..Default::default()
        }
    }

    pub fn place(mut self, place: impl Into<String>) -> Self {
        self.place = place.into();
        self
    }

    pub fn tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }

    /// Turns the draft into a `Log` with a fresh id and timestamp.
    ///
    /// Rejects a note that is blank after trimming. A blank place is filled
    /// from the coordinates when they are known.
    pub fn into_log(self, coordinates: Option<Coordinates>) -> Result<Log> {
        if self.note.trim().is_empty() {
            return Err(GolingError::InvalidInput(
                "Note must not be empty.".to_string(),
            ));
        }

        let place = match coordinates {
            Some(c) if self.place.trim().is_empty() => c.describe(),
            _ => self.place,
        };

        Ok(Log {
            id: Uuid::new_v4().to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            note: self.note,
            place,
            tags: self.tags,
            coordinates,
            is_anonymous: true,
        })
    }
}
