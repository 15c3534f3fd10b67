//! Throttle for location samples: minimum time and displacement.

use std::time::{Duration, Instant};

use super::LocationSample;
use crate::model::constants::{MIN_UPDATE_DISTANCE_M, MIN_UPDATE_INTERVAL};

const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance in meters between two (lat, lon) points in degrees.
pub fn haversine_m(a: (f64, f64), b: (f64, f64)) -> f64 {
    let (lat1, lon1) = (a.0.to_radians(), a.1.to_radians());
    let (lat2, lon2) = (b.0.to_radians(), b.1.to_radians());
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}

/// Passes a sample when at least `min_interval` has elapsed since the last
/// delivered one and, if both carry coordinates, it moved `min_distance_m`.
/// The first sample always passes.
#[derive(Debug, Clone)]
pub struct UpdateFilter {
    min_interval: Duration,
    min_distance_m: f64,
    last: Option<(Instant, Option<(f64, f64)>)>,
}

impl Default for UpdateFilter {
    fn default() -> Self {
        Self::new(MIN_UPDATE_INTERVAL, MIN_UPDATE_DISTANCE_M)
    }
}

impl UpdateFilter {
    pub fn new(min_interval: Duration, min_distance_m: f64) -> Self {
        Self {
            min_interval,
            min_distance_m,
            last: None,
        }
    }

    pub fn accept(&mut self, sample: &LocationSample, now: Instant) -> bool {
        if let Some((at, coords)) = self.last {
            if now.saturating_duration_since(at) < self.min_interval {
                return false;
            }
            if let (Some(prev), Some(cur)) = (coords, sample.coordinates()) {
                if haversine_m(prev, cur) < self.min_distance_m {
                    return false;
                }
            }
        }
        self.last = Some((now, sample.coordinates()));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(lat: f64, lon: f64) -> LocationSample {
        LocationSample {
            speed_mps: 1.0,
            latitude: Some(lat),
            longitude: Some(lon),
        }
    }

    #[test]
    fn first_sample_passes() {
        let mut f = UpdateFilter::default();
        assert!(f.accept(&LocationSample::from_speed(1.0), Instant::now()));
    }

    #[test]
    fn drops_samples_inside_interval() {
        let t0 = Instant::now();
        let mut f = UpdateFilter::default();
        assert!(f.accept(&LocationSample::from_speed(1.0), t0));
        assert!(!f.accept(&LocationSample::from_speed(2.0), t0 + Duration::from_millis(500)));
        assert!(f.accept(&LocationSample::from_speed(3.0), t0 + Duration::from_millis(1000)));
    }

    #[test]
    fn drops_stationary_samples() {
        let t0 = Instant::now();
        let mut f = UpdateFilter::default();
        assert!(f.accept(&at(52.0, 4.0), t0));
        // ~0.1 m north
        assert!(!f.accept(&at(52.000001, 4.0), t0 + Duration::from_secs(2)));
        // ~11 m north
        assert!(f.accept(&at(52.0001, 4.0), t0 + Duration::from_secs(3)));
    }

    #[test]
    fn haversine_one_degree_latitude() {
        let d = haversine_m((0.0, 0.0), (1.0, 0.0));
        assert!((d - 111_195.0).abs() < 10.0);
    }
}
