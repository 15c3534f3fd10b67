//! NMEA stream reader running on a background thread.
//!
//! Reads a serial device, a log file or stdin (`-`) line by line, parses
//! `RMC` sentences and publishes the samples that pass the [`UpdateFilter`].
//! Regular files are replayed at one fix per update interval so a recorded
//! track plays back in real time.
//!
//! One reader thread owns the stream for as long as it delivers data.
//! Unsubscribing only detaches the publisher; the thread keeps draining the
//! stream and a later subscribe reattaches to it instead of opening the
//! stream a second time.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::mem;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{debug, info, trace, warn};

use super::nmea::{parse_rmc, NmeaError};
use super::{LocationSample, LocationSource, UpdateFilter};
use crate::events::{AppEvent, EventPublisher};
use crate::model::constants::MIN_UPDATE_INTERVAL;

/// Path that selects stdin instead of a file.
pub const STDIN_PATH: &str = "-";

/// State shared between an [`NmeaSource`] and its reader thread.
#[derive(Default)]
struct Shared {
    /// Current subscriber; `None` while unsubscribed.
    publisher: Mutex<Option<EventPublisher>>,
    /// Set when the source is dropped.
    closed: AtomicBool,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Option<EventPublisher>> {
        self.publisher.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn replace(&self, publisher: Option<EventPublisher>) -> Option<EventPublisher> {
        mem::replace(&mut *self.lock(), publisher)
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Relaxed)
    }

    /// Hands `event` to the current subscriber, if any. False once the bus
    /// is gone.
    fn publish(&self, event: AppEvent) -> bool {
        match &*self.lock() {
            Some(publisher) => publisher.publish(event),
            None => true,
        }
    }
}

/// Location source backed by an NMEA 0183 byte stream.
pub struct NmeaSource {
    path: PathBuf,
    shared: Arc<Shared>,
    reader: Option<JoinHandle<()>>,
}

impl NmeaSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            shared: Arc::default(),
            reader: None,
        }
    }

    pub fn is_subscribed(&self) -> bool {
        self.shared.lock().is_some()
    }

    fn reader_alive(&self) -> bool {
        self.reader.as_ref().is_some_and(|h| !h.is_finished())
    }

    fn open(&self) -> Result<(Box<dyn BufRead + Send>, Option<Duration>)> {
        if self.path.as_os_str() == STDIN_PATH {
            return Ok((Box::new(BufReader::new(io::stdin())), None));
        }
        let file = File::open(&self.path)
            .with_context(|| format!("open NMEA source {}", self.path.display()))?;
        let pace = file
            .metadata()
            .map(|m| m.is_file())
            .unwrap_or(false)
            .then_some(MIN_UPDATE_INTERVAL);
        Ok((Box::new(BufReader::new(file)), pace))
    }
}

impl LocationSource for NmeaSource {
    fn subscribe(&mut self, publisher: EventPublisher) -> Result<()> {
        if self.reader_alive() {
            self.shared.replace(Some(publisher));
            info!(source = %self.path.display(), "location updates resumed");
            return Ok(());
        }

        let (reader, pace) = self.open()?;
        let shared = Arc::clone(&self.shared);
        let name = self.path.display().to_string();

        let handle = thread::Builder::new()
            .name("nmea-reader".into())
            .spawn(move || {
                pump(reader, &shared, pace);
                if !shared.is_closed() && shared.lock().is_some() {
                    info!(source = %name, "location stream ended");
                    shared.publish(AppEvent::LocationSourceClosed);
                }
            })
            .context("spawn NMEA reader thread")?;

        self.shared.replace(Some(publisher));
        self.reader = Some(handle);
        info!(source = %self.path.display(), "location updates subscribed");
        Ok(())
    }

    fn unsubscribe(&mut self) {
        if self.shared.replace(None).is_some() {
            info!(source = %self.path.display(), "location updates unsubscribed");
        }
    }
}

impl Drop for NmeaSource {
    fn drop(&mut self) {
        // The reader may be blocked in read(); it exits after the next line.
        self.shared.closed.store(true, Ordering::Relaxed);
        self.unsubscribe();
    }
}

/// Reads lines until EOF, a read error, the source being dropped, or the bus
/// going away. Lines that are not UTF-8 or not valid `RMC` are skipped.
fn pump(mut reader: impl BufRead, shared: &Shared, pace: Option<Duration>) {
    let mut filter = UpdateFilter::default();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => return,
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                warn!("NMEA read failed: {e}");
                return;
            }
        }
        if shared.is_closed() {
            return;
        }
        let Ok(line) = std::str::from_utf8(&buf) else {
            trace!("skipping non-UTF-8 line");
            continue;
        };
        let sample = match parse_rmc(line) {
            Ok(fix) => LocationSample::from(fix),
            Err(NmeaError::NotRmc) => continue,
            Err(e) => {
                trace!("skipping sentence: {e}");
                continue;
            }
        };
        if let Some(pace) = pace {
            thread::sleep(pace);
            if shared.is_closed() {
                return;
            }
        }
        if filter.accept(&sample, Instant::now()) {
            debug!(speed_mps = sample.speed_mps, "location sample");
            if !shared.publish(AppEvent::LocationChanged(sample)) {
                return;
            }
        }
    }
}
