//! # Location Resolution
//!
//! Optionally attaches a position to history records.
//!
//! ## Degradation Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  resolve(provider)                                                  │
//! │       │                                                             │
//! │       ├── provider answers within 5 s ──► Some(point) / None        │
//! │       │                                                             │
//! │       └── timeout ──► warn! + None                                  │
//! │                                                                     │
//! │  A record without a position is always preferable to no record;     │
//! │  location failures never propagate as errors.                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use tracing::{debug, warn};

use resto_core::GeoPoint;

/// Hard ceiling on a position lookup.
pub const LOCATION_TIMEOUT: Duration = Duration::from_secs(5);

/// A source of the current position.
///
/// The CLI has no GPS, so the implementations here are trivial; the trait
/// is the seam where a platform lookup would plug in.
pub trait LocationProvider {
    async fn current(&self) -> Option<GeoPoint>;
}

/// A position supplied up front, e.g. from command-line flags.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub GeoPoint);

impl LocationProvider for FixedLocation {
    async fn current(&self) -> Option<GeoPoint> {
        Some(self.0)
    }
}

/// No position source at all.
#[derive(Debug, Clone, Copy)]
pub struct NoLocation;

impl LocationProvider for NoLocation {
    async fn current(&self) -> Option<GeoPoint> {
        None
    }
}

/// Resolves the current position, bounded by [`LOCATION_TIMEOUT`].
///
/// Timeouts and unavailable providers both degrade to `None`.
pub async fn resolve<P: LocationProvider>(provider: &P) -> Option<GeoPoint> {
    match tokio::time::timeout(LOCATION_TIMEOUT, provider.current()).await {
        Ok(point) => {
            debug!(?point, "position resolved");
            point
        }
        Err(_) => {
            warn!("position lookup timed out, continuing without it");
            None
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct SlowLocation;

    impl LocationProvider for SlowLocation {
        async fn current(&self) -> Option<GeoPoint> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Some(GeoPoint { lat: 1.0, lng: 2.0 })
        }
    }

    #[tokio::test]
    async fn test_fixed_location_resolves() {
        let point = GeoPoint {
            lat: 42.6977,
            lng: 23.3219,
        };
        assert_eq!(resolve(&FixedLocation(point)).await, Some(point));
    }

    #[tokio::test]
    async fn test_no_location_resolves_to_none() {
        assert_eq!(resolve(&NoLocation).await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_provider_times_out_to_none() {
        assert_eq!(resolve(&SlowLocation).await, None);
    }
}
