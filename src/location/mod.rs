//! Location sources feeding speed samples to the overlay.
//!
//! Sources run off the UI thread and hand samples over through the
//! [`EventBus`](crate::events::EventBus) as
//! [`AppEvent::LocationChanged`](crate::events::AppEvent::LocationChanged).

pub mod filter;
pub mod nmea;
pub mod reader;

pub use filter::UpdateFilter;
pub use reader::NmeaSource;

use crate::events::EventPublisher;

/// One location fix as seen by the overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationSample {
    /// Speed over ground in meters per second.
    pub speed_mps: f32,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl LocationSample {
    /// A sample without position.
    pub fn from_speed(speed_mps: f32) -> Self {
        Self {
            speed_mps,
            latitude: None,
            longitude: None,
        }
    }

    /// `(lat, lon)` when both are known.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}

impl From<nmea::RmcFix> for LocationSample {
    fn from(fix: nmea::RmcFix) -> Self {
        Self {
            speed_mps: fix.speed_mps,
            latitude: fix.latitude,
            longitude: fix.longitude,
        }
    }
}

/// A stream of location samples with explicit subscribe / unsubscribe.
pub trait LocationSource {
    /// Starts delivering samples to `publisher`. Subscribing while already
    /// subscribed replaces the previous subscription.
    fn subscribe(&mut self, publisher: EventPublisher) -> anyhow::Result<()>;

    /// Stops delivery. Idempotent.
    fn unsubscribe(&mut self);
}
