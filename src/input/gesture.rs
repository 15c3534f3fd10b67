//! Drag / tap / long-press disambiguation for the overlay.
//!
//! The tracker is a small state machine fed with [`PointerEvent`]s in screen
//! coordinates plus a periodic [`poll`](GestureTracker::poll) for the
//! long-press timer. It never touches the window itself; callers apply the
//! returned [`Gesture`]s.
//!
//! ```text
//!            Down                      Up
//!   Idle ───────────▶ Tracking ───────────────▶ Idle
//!                      │   ▲
//!                 Move │   │ (drag, cancels long-press past threshold)
//!                      └───┘
//!                      │
//!                 poll │ 2000ms without cancel
//!                      ▼
//!                  LongPress (tap suppressed on Up)
//! ```

use std::time::Instant;

use tracing::debug;

use super::timer::DeferredTimer;
use crate::model::constants::{DRAG_THRESHOLD_PX, LONG_PRESS_DURATION};
use crate::model::Position;

/// Pointer input in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { x: f32, y: f32, at: Instant },
    Move { x: f32, y: f32 },
    Up { at: Instant },
}

/// What the overlay should do in response to input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Move the overlay to this position.
    Drag(Position),
    /// Pointer released at `position`; `tap` when it counts as a tap.
    Release { position: Position, tap: bool },
    /// The press was held long enough without moving.
    LongPress,
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    Idle,
    Tracking {
        origin: Position,
        touch_x: f32,
        touch_y: f32,
        down_at: Instant,
        current: Position,
    },
}

/// Gesture state machine for a single pointer.
#[derive(Debug)]
pub struct GestureTracker {
    phase: Phase,
    long_press: DeferredTimer,
    long_press_triggered: bool,
    drag_confirmed: bool,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureTracker {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            long_press: DeferredTimer::new(),
            long_press_triggered: false,
            drag_confirmed: false,
        }
    }

    /// True between a pointer-down and the matching pointer-up.
    pub fn is_tracking(&self) -> bool {
        matches!(self.phase, Phase::Tracking { .. })
    }

    /// True while the long-press timer is armed.
    pub fn long_press_pending(&self) -> bool {
        self.long_press.is_pending()
    }

    /// Feeds one pointer event. `overlay` is the overlay position at the time
    /// of the event and is only read on pointer-down.
    ///
    /// Move and up events while idle are ignored and return `None`.
    pub fn handle(&mut self, event: PointerEvent, overlay: Position) -> Option<Gesture> {
        match (event, self.phase) {
            (PointerEvent::Down { x, y, at }, _) => {
                self.phase = Phase::Tracking {
                    origin: overlay,
                    touch_x: x,
                    touch_y: y,
                    down_at: at,
                    current: overlay,
                };
                self.long_press_triggered = false;
                self.drag_confirmed = false;
                self.long_press.schedule(at, LONG_PRESS_DURATION);
                debug!(?overlay, "gesture: tracking");
                None
            }
            (
                PointerEvent::Move { x, y },
                Phase::Tracking {
                    origin,
                    touch_x,
                    touch_y,
                    down_at,
                    ..
                },
            ) => {
                let dx = (x - touch_x) as i32;
                let dy = (y - touch_y) as i32;
                let current = origin.offset(dx, dy);
                self.phase = Phase::Tracking {
                    origin,
                    touch_x,
                    touch_y,
                    down_at,
                    current,
                };
                if dx.abs() > DRAG_THRESHOLD_PX || dy.abs() > DRAG_THRESHOLD_PX {
                    if !self.drag_confirmed {
                        debug!(dx, dy, "gesture: drag confirmed");
                    }
                    self.drag_confirmed = true;
                    self.long_press.cancel();
                }
                Some(Gesture::Drag(current))
            }
            (PointerEvent::Up { at }, Phase::Tracking { down_at, current, .. }) => {
                self.long_press.cancel();
                self.phase = Phase::Idle;
                let held = at.saturating_duration_since(down_at);
                let tap = !self.long_press_triggered
                    && !self.drag_confirmed
                    && held < LONG_PRESS_DURATION;
                debug!(?current, tap, "gesture: released");
                Some(Gesture::Release {
                    position: current,
                    tap,
                })
            }
            (PointerEvent::Move { .. }, Phase::Idle) | (PointerEvent::Up { .. }, Phase::Idle) => {
                None
            }
        }
    }

    /// Fires the long-press timer if it is due. Returns
    /// `Some(Gesture::LongPress)` at most once per press.
    pub fn poll(&mut self, now: Instant) -> Option<Gesture> {
        if !self.is_tracking() {
            return None;
        }
        if self.long_press.poll(now) {
            self.long_press_triggered = true;
            debug!("gesture: long-press");
            return Some(Gesture::LongPress);
        }
        None
    }

    /// Drops any in-flight press, e.g. when the overlay is torn down.
    pub fn reset(&mut self) {
        self.long_press.cancel();
        self.phase = Phase::Idle;
        self.long_press_triggered = false;
        self.drag_confirmed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn down(t0: Instant) -> PointerEvent {
        PointerEvent::Down {
            x: 100.0,
            y: 100.0,
            at: t0,
        }
    }

    #[test]
    fn move_by_threshold_exactly_keeps_long_press() {
        let t0 = Instant::now();
        let mut g = GestureTracker::new();
        g.handle(down(t0), Position::default());
        g.handle(PointerEvent::Move { x: 110.0, y: 90.0 }, Position::default());
        assert!(g.long_press_pending());
        g.handle(PointerEvent::Move { x: 111.0, y: 100.0 }, Position::default());
        assert!(!g.long_press_pending());
    }

    #[test]
    fn fractional_delta_is_truncated() {
        let t0 = Instant::now();
        let mut g = GestureTracker::new();
        g.handle(down(t0), Position::new(5, 5));
        let moved = g.handle(PointerEvent::Move { x: 103.9, y: 98.5 }, Position::default());
        assert_eq!(moved, Some(Gesture::Drag(Position::new(8, 4))));
    }

    #[test]
    fn idle_move_and_up_are_ignored() {
        let t0 = Instant::now();
        let mut g = GestureTracker::new();
        let moved = g.handle(PointerEvent::Move { x: 1.0, y: 1.0 }, Position::default());
        assert_eq!(moved, None);
        assert_eq!(g.handle(PointerEvent::Up { at: t0 }, Position::default()), None);
        assert!(!g.is_tracking());
    }

    #[test]
    fn poll_while_idle_never_fires() {
        let t0 = Instant::now();
        let mut g = GestureTracker::new();
        assert_eq!(g.poll(t0 + Duration::from_secs(10)), None);
    }

    #[test]
    fn reset_cancels_pending_long_press() {
        let t0 = Instant::now();
        let mut g = GestureTracker::new();
        g.handle(down(t0), Position::default());
        g.reset();
        assert_eq!(g.poll(t0 + LONG_PRESS_DURATION), None);
        assert!(!g.is_tracking());
    }

    #[test]
    fn second_down_restarts_from_new_origin() {
        let t0 = Instant::now();
        let mut g = GestureTracker::new();
        g.handle(down(t0), Position::new(0, 0));
        g.handle(PointerEvent::Move { x: 150.0, y: 100.0 }, Position::default());
        g.handle(
            PointerEvent::Down {
                x: 10.0,
                y: 10.0,
                at: t0 + Duration::from_millis(100),
            },
            Position::new(50, 0),
        );
        let up = g.handle(
            PointerEvent::Up {
                at: t0 + Duration::from_millis(200),
            },
            Position::default(),
        );
        assert_eq!(
            up,
            Some(Gesture::Release {
                position: Position::new(50, 0),
                tap: true
            })
        );
    }
}
