//! Overlay lifecycle controller.
//!
//! Owns the overlay state and wires the gesture tracker, the unit converter
//! and the renderer geometry to a [`WindowHost`], a [`PreferenceStore`] and an
//! optional [`LocationSource`]. All methods run on the UI thread.

use std::time::Instant;

use tracing::{debug, info, warn};

use super::host::{LayoutParams, WindowHost};
use crate::events::{AppEvent, EventPublisher};
use crate::input::{Gesture, GestureTracker, PointerEvent};
use crate::location::{LocationSample, LocationSource};
use crate::model::{OverlayState, Preferences, SpeedUnit};
use crate::storage::PreferenceStore;
use crate::ui::overlay::{layout, measure, DrawParams, MeasureSpec};

pub struct OverlayController<H, S> {
    host: H,
    store: S,
    source: Option<Box<dyn LocationSource>>,
    publisher: EventPublisher,
    prefs: Preferences,
    state: OverlayState,
    gesture: GestureTracker,
    last_speed_mps: Option<f32>,
    pixels_per_dp: f32,
    running: bool,
}

impl<H: WindowHost, S: PreferenceStore> OverlayController<H, S> {
    /// Creates a stopped controller with preferences loaded from `store`.
    pub fn new(
        host: H,
        mut store: S,
        source: Option<Box<dyn LocationSource>>,
        publisher: EventPublisher,
    ) -> Self {
        let prefs = store.load();
        let mut controller = Self {
            host,
            store,
            source,
            publisher,
            prefs,
            state: OverlayState::default(),
            gesture: GestureTracker::new(),
            last_speed_mps: None,
            pixels_per_dp: 1.0,
            running: false,
        };
        controller.apply_preferences();
        controller
    }

    /// Sets the pixel density used to size the overlay.
    pub fn with_pixels_per_dp(mut self, pixels_per_dp: f32) -> Self {
        self.pixels_per_dp = pixels_per_dp;
        self
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Starts the overlay again if it was running when the app last exited.
    pub fn restore(&mut self) {
        if self.prefs.is_running() {
            info!("overlay was running at last exit, restarting");
            self.start();
        }
    }

    /// Shows the overlay and subscribes to location updates. When already
    /// running, only re-reads alpha and scale from the store.
    pub fn start(&mut self) {
        if self.running {
            self.prefs = self.store.load();
            self.apply_preferences();
            self.relayout();
            debug!("overlay refreshed");
            return;
        }

        self.prefs = self.store.load();
        self.apply_preferences();
        let params = self.layout_params();
        if let Err(e) = self.host.add_view(params) {
            warn!("could not attach overlay: {e:#}");
            return;
        }

        if let Some(source) = self.source.as_mut() {
            if let Err(e) = source.subscribe(self.publisher.clone()) {
                warn!("location updates unavailable: {e:#}");
            }
        } else {
            warn!("no location source configured, speed stays at 0");
        }

        self.running = true;
        self.prefs.set_running(true);
        self.persist();
        info!(position = ?self.state.position, "overlay started");
    }

    /// Removes the overlay and unsubscribes from location updates.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.gesture.reset();
        if let Err(e) = self.host.remove_view() {
            warn!("overlay already detached: {e:#}");
        }
        if let Some(source) = self.source.as_mut() {
            source.unsubscribe();
        }
        self.running = false;
        self.prefs.set_running(false);
        self.persist();
        info!("overlay stopped");
    }

    pub fn toggle(&mut self) {
        if self.running {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Converts and displays a new location sample.
    pub fn on_location(&mut self, sample: LocationSample) {
        self.last_speed_mps = Some(sample.speed_mps);
        self.state.set_speed(self.prefs.unit().convert(sample.speed_mps));
    }

    /// Fires the long-press timer if due. Call once per frame, before
    /// feeding that frame's pointer events.
    pub fn tick(&mut self, now: Instant) {
        if let Some(gesture) = self.gesture.poll(now) {
            self.apply_gesture(gesture);
        }
    }

    /// Feeds a pointer event on the overlay.
    pub fn on_pointer(&mut self, event: PointerEvent) {
        if !self.running {
            return;
        }
        if let Some(gesture) = self.gesture.handle(event, self.state.position) {
            self.apply_gesture(gesture);
        }
    }

    fn apply_gesture(&mut self, gesture: Gesture) {
        match gesture {
            Gesture::Drag(position) => {
                self.state.position = position;
                self.relayout();
            }
            Gesture::Release { position, tap } => {
                self.state.position = position;
                self.prefs.set_position(position);
                self.persist();
                if tap {
                    self.publisher.publish(AppEvent::OpenSettings);
                }
            }
            Gesture::LongPress => {
                self.publisher.publish(AppEvent::OpenSettings);
            }
        }
    }

    pub fn set_alpha(&mut self, alpha: i32) {
        self.prefs.set_alpha(alpha);
        self.state.set_alpha(self.prefs.alpha());
        self.store.save(&self.prefs);
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.prefs.set_scale(scale);
        self.state.set_scale(self.prefs.scale());
        self.store.save(&self.prefs);
        self.relayout();
    }

    /// Changes the unit and re-converts the last known speed.
    pub fn set_unit(&mut self, unit: SpeedUnit) {
        self.prefs.set_unit(unit);
        self.state.unit = unit;
        if let Some(mps) = self.last_speed_mps {
            self.state.set_speed(unit.convert(mps));
        }
        self.store.save(&self.prefs);
    }

    pub fn set_language(&mut self, code: &str) {
        self.prefs.set_language(code);
        self.store.save(&self.prefs);
    }

    /// Writes buffered preference changes.
    pub fn flush(&mut self) {
        if let Err(e) = self.store.flush() {
            warn!("saving preferences failed: {e:#}");
        }
    }

    /// Placement the overlay window should have right now.
    pub fn layout_params(&self) -> LayoutParams {
        LayoutParams {
            position: self.state.position,
            size: measure(
                &self.state,
                self.pixels_per_dp,
                MeasureSpec::Unspecified,
                MeasureSpec::Unspecified,
            ),
            focusable: false,
        }
    }

    /// Paint parameters for the current state.
    pub fn draw_params(&self) -> DrawParams {
        layout(&self.state, self.layout_params().size, self.pixels_per_dp)
    }

    fn apply_preferences(&mut self) {
        self.state.position = self.prefs.position();
        self.state.set_alpha(self.prefs.alpha());
        self.state.set_scale(self.prefs.scale());
        self.state.unit = self.prefs.unit();
    }

    fn relayout(&mut self) {
        if !self.running {
            return;
        }
        let params = self.layout_params();
        if let Err(e) = self.host.update_view_layout(params) {
            warn!("could not move overlay: {e:#}");
        }
    }

    fn persist(&mut self) {
        self.store.save(&self.prefs);
        self.flush();
    }
}

impl<H, S> Drop for OverlayController<H, S> {
    fn drop(&mut self) {
        if let Some(source) = self.source.as_mut() {
            source.unsubscribe();
        }
    }
}
