// src/location.rs

use crate::error::{GolingError, Result};
use crate::models::Coordinates;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

/// Device positioning capability.
pub trait PositionSource {
    fn request_permission(&self) -> Result<Permission>;

    /// One high-accuracy fix.
    fn read_position(&self) -> Result<Coordinates>;
}

/// Best-effort lookup of the current position for tagging a new log.
pub struct LocationProvider<P> {
    source: P,
}

impl<P: PositionSource> LocationProvider<P> {
    pub fn new(source: P) -> Self {
        Self { source }
    }

    /// One permission check followed by one high-accuracy read. Denial and
    /// every failure come back as `None`.
    pub fn current_position(&self) -> Option<Coordinates> {
        match self.source.request_permission() {
            Ok(Permission::Granted) => {}
            Ok(Permission::Denied) => {
                tracing::info!("location permission denied");
                return None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "location permission check failed");
                return None;
            }
        }

        match self.source.read_position() {
            Ok(coords) => Some(coords),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read position");
                None
            }
        }
    }
}

/// Source that reports a configured position.
#[derive(Debug, Clone, Copy)]
pub struct FixedSource {
    position: Coordinates,
}

impl FixedSource {
    pub fn new(position: Coordinates) -> Self {
        Self { position }
    }
}

impl PositionSource for FixedSource {
    fn request_permission(&self) -> Result<Permission> {
        Ok(Permission::Granted)
    }

    fn read_position(&self) -> Result<Coordinates> {
        if !self.position.is_valid() {
            return Err(GolingError::Position(format!(
                "coordinates out of range: {}, {}",
                self.position.latitude, self.position.longitude
            )));
        }
        Ok(self.position)
    }
}

/// Source for hosts where location is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeniedSource;

impl PositionSource for DeniedSource {
    fn request_permission(&self) -> Result<Permission> {
        Ok(Permission::Denied)
    }

    fn read_position(&self) -> Result<Coordinates> {
        Err(GolingError::Position("location is disabled".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Scripted {
        permission: Result<Permission>,
        reads: Cell<u32>,
        fail_read: bool,
    }

    impl Scripted {
        fn new(permission: Result<Permission>, fail_read: bool) -> Self {
            Self {
                permission,
                reads: Cell::new(0),
                fail_read,
            }
        }
    }

    impl PositionSource for Scripted {
        fn request_permission(&self) -> Result<Permission> {
            match &self.permission {
                Ok(p) => Ok(*p),
                Err(_) => Err(GolingError::Position("permission api".into())),
            }
        }

        fn read_position(&self) -> Result<Coordinates> {
            self.reads.set(self.reads.get() + 1);
            if self.fail_read {
                Err(GolingError::Position("timeout".into()))
            } else {
                Ok(Coordinates::new(37.1, 127.0))
            }
        }
    }

    #[test]
    fn granted_reads_once() {
        let provider = LocationProvider::new(Scripted::new(Ok(Permission::Granted), false));
        assert_eq!(provider.current_position(), Some(Coordinates::new(37.1, 127.0)));
        assert_eq!(provider.source.reads.get(), 1);
    }

    #[test]
    fn denied_skips_the_read() {
        let provider = LocationProvider::new(Scripted::new(Ok(Permission::Denied), false));
        assert_eq!(provider.current_position(), None);
        assert_eq!(provider.source.reads.get(), 0);
    }

    #[test]
    fn errors_become_none() {
        let provider = LocationProvider::new(Scripted::new(
            Err(GolingError::Position("x".into())),
            false,
        ));
        assert_eq!(provider.current_position(), None);

        let provider = LocationProvider::new(Scripted::new(Ok(Permission::Granted), true));
        assert_eq!(provider.current_position(), None);
        assert_eq!(provider.source.reads.get(), 1);
    }

    #[test]
    fn fixed_and_denied_sources() {
        let fixed = LocationProvider::new(FixedSource::new(Coordinates::new(37.4598, 126.9519)));
        assert_eq!(
            fixed.current_position(),
            Some(Coordinates::new(37.4598, 126.9519))
        );

        let bad = LocationProvider::new(FixedSource::new(Coordinates::new(120.0, 0.0)));
        assert_eq!(bad.current_position(), None);

        assert_eq!(LocationProvider::new(DeniedSource).current_position(), None);
    }
}
