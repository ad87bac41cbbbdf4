//! Location resolution
//!
//! The geolocation capability is modeled as an awaitable operation that
//! either yields a coordinate or signals one of four failures. Resolution
//! applies a fixed timeout and degrades to the configured default
//! coordinate on any failure; it never aborts a refresh.

use crate::models::Coordinate;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Failure signals from the geolocation capability
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationError {
    /// The user denied the location permission
    #[error("location permission denied")]
    PermissionDenied,
    /// The capability could not produce a position
    #[error("position unavailable")]
    PositionUnavailable,
    /// The capability reported its own timeout
    #[error("location request timed out")]
    Timeout,
    /// No geolocation capability exists on this host
    #[error("geolocation not supported")]
    Unsupported,
}

/// Geolocation capability boundary
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Resolve the current position, or signal why it cannot be resolved
    async fn current_position(&self) -> Result<Coordinate, LocationError>;
}

/// Capability stub for hosts without geolocation support
pub struct UnsupportedProvider;

#[async_trait]
impl LocationProvider for UnsupportedProvider {
    async fn current_position(&self) -> Result<Coordinate, LocationError> {
        Err(LocationError::Unsupported)
    }
}

/// How the board picks its coordinate on each refresh
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocationChoice {
    /// Ask the geolocation capability (with default-location fallback)
    Auto,
    /// A coordinate picked manually from the location selector
    Fixed(Coordinate),
}

/// Resolve a coordinate from the capability, falling back to `default`
/// on error or after `timeout`. Never fails.
pub async fn resolve(
    provider: &dyn LocationProvider,
    timeout: Duration,
    default: Coordinate,
) -> Coordinate {
    match tokio::time::timeout(timeout, provider.current_position()).await {
        Ok(Ok(coordinate)) => {
            debug!("Resolved position: {}", coordinate.format());
            coordinate
        }
        Ok(Err(error)) => {
            warn!("Geolocation failed ({error}), using default location");
            default
        }
        Err(_) => {
            warn!(
                "Geolocation timed out after {}s, using default location",
                timeout.as_secs()
            );
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProvider(Coordinate);

    #[async_trait]
    impl LocationProvider for FixedProvider {
        async fn current_position(&self) -> Result<Coordinate, LocationError> {
            Ok(self.0)
        }
    }

    struct DeniedProvider;

    #[async_trait]
    impl LocationProvider for DeniedProvider {
        async fn current_position(&self) -> Result<Coordinate, LocationError> {
            Err(LocationError::PermissionDenied)
        }
    }

    struct HangingProvider;

    #[async_trait]
    impl LocationProvider for HangingProvider {
        async fn current_position(&self) -> Result<Coordinate, LocationError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Err(LocationError::Timeout)
        }
    }

    fn seoul() -> Coordinate {
        Coordinate::new(37.5665, 126.978)
    }

    #[tokio::test]
    async fn test_successful_resolution() {
        let provider = FixedProvider(Coordinate::new(35.1796, 129.0756));
        let resolved = resolve(&provider, Duration::from_secs(10), seoul()).await;
        assert_eq!(resolved, Coordinate::new(35.1796, 129.0756));
    }

    #[tokio::test]
    async fn test_denial_falls_back_to_default() {
        let resolved = resolve(&DeniedProvider, Duration::from_secs(10), seoul()).await;
        assert_eq!(resolved, seoul());
    }

    #[tokio::test]
    async fn test_unsupported_falls_back_to_default() {
        let resolved = resolve(&UnsupportedProvider, Duration::from_secs(10), seoul()).await;
        assert_eq!(resolved, seoul());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_falls_back_to_default() {
        let resolved = resolve(&HangingProvider, Duration::from_secs(10), seoul()).await;
        assert_eq!(resolved, seoul());
    }
}
