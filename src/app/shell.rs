//! eframe application: settings window in the root viewport, overlay in an
//! immediate secondary viewport.

use std::time::{Duration, Instant};

use eframe::egui::{
    self, Event, PointerButton, Pos2, ViewportBuilder, ViewportCommand, ViewportId,
};
use tracing::debug;

use super::controller::OverlayController;
use super::host::{LayoutParams, ViewportHost};
use crate::events::{AppEvent, EventBus};
use crate::handlers::{apply_settings_action, dispatch_events, Shell};
use crate::input::PointerEvent;
use crate::storage::PreferenceStore;
use crate::ui::{overlay, settings};

/// How often buffered preference edits are written to disk.
const FLUSH_INTERVAL: Duration = Duration::from_secs(1);

/// Repaint period while the overlay is visible, for location updates and the
/// long-press timer.
const OVERLAY_REPAINT: Duration = Duration::from_millis(50);

/// Shell requests collected while dispatching one frame's events.
#[derive(Debug, Default)]
struct ShellRequests {
    open_settings: bool,
    quit: bool,
}

impl Shell for ShellRequests {
    fn open_settings(&mut self) {
        self.open_settings = true;
    }

    fn quit(&mut self) {
        self.quit = true;
    }
}

pub struct SpeedOverlayApp<S: PreferenceStore> {
    bus: EventBus,
    controller: OverlayController<ViewportHost, S>,
    last_flush: Instant,
}

impl<S: PreferenceStore> SpeedOverlayApp<S> {
    /// Wraps a controller whose publisher belongs to `bus`.
    pub fn new(bus: EventBus, controller: OverlayController<ViewportHost, S>) -> Self {
        Self {
            bus,
            controller,
            last_flush: Instant::now(),
        }
    }

    fn show_overlay(&mut self, ctx: &egui::Context, params: LayoutParams, now: Instant) {
        let builder = ViewportBuilder::default()
            .with_title("Speed overlay")
            .with_position([params.position.x as f32, params.position.y as f32])
            .with_inner_size([params.size.x, params.size.y])
            .with_transparent(true)
            .with_decorations(false)
            .with_always_on_top()
            .with_resizable(false)
            .with_taskbar(false)
            .with_active(params.focusable);

        let draw = self.controller.draw_params();
        let pointer = ctx.show_viewport_immediate(
            ViewportId::from_hash_of("speed_overlay"),
            builder,
            |ctx, _class| {
                egui::CentralPanel::default()
                    .frame(egui::Frame::NONE)
                    .show(ctx, |ui| {
                        overlay::paint(ui.painter(), ui.max_rect().min, &draw);
                    });
                pointer_events(ctx, now)
            },
        );

        for event in pointer {
            self.controller.on_pointer(event);
        }
    }
}

/// Primary-button pointer events of this frame, in screen coordinates.
fn pointer_events(ctx: &egui::Context, now: Instant) -> Vec<PointerEvent> {
    ctx.input(|i| {
        let origin = i
            .viewport()
            .inner_rect
            .map(|r| r.min)
            .unwrap_or(Pos2::ZERO);
        i.events
            .iter()
            .filter_map(|event| match event {
                Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed: true,
                    ..
                } => Some(PointerEvent::Down {
                    x: origin.x + pos.x,
                    y: origin.y + pos.y,
                    at: now,
                }),
                Event::PointerButton {
                    button: PointerButton::Primary,
                    pressed: false,
                    ..
                } => Some(PointerEvent::Up { at: now }),
                Event::PointerMoved(pos) => Some(PointerEvent::Move {
                    x: origin.x + pos.x,
                    y: origin.y + pos.y,
                }),
                _ => None,
            })
            .collect()
    })
}

impl<S: PreferenceStore> eframe::App for SpeedOverlayApp<S> {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        [0.0, 0.0, 0.0, 0.0]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.controller.tick(now);

        let events = self.bus.drain();
        if events.iter().any(AppEvent::requires_repaint) {
            ctx.request_repaint();
        }
        let mut requests = ShellRequests::default();
        dispatch_events(events, &mut self.controller, &mut requests);

        if requests.open_settings {
            debug!("raising settings window");
            ctx.send_viewport_cmd(ViewportCommand::Minimized(false));
            ctx.send_viewport_cmd(ViewportCommand::Visible(true));
            ctx.send_viewport_cmd(ViewportCommand::Focus);
        }
        if requests.quit {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }

        // Closing the window keeps the running flag so the overlay comes back
        // on next launch; only Exit clears it.
        if ctx.input(|i| i.viewport().close_requested()) {
            self.controller.flush();
        }

        let publisher = self.bus.publisher();
        let running = self.controller.is_running();
        let actions = egui::CentralPanel::default()
            .show(ctx, |ui| {
                settings::show(ui, self.controller.preferences(), running)
            })
            .inner;
        for action in actions {
            apply_settings_action(action, &mut self.controller, &publisher);
        }

        if let Some(params) = self.controller.host().attached() {
            self.show_overlay(ctx, params, now);
            ctx.request_repaint_after(OVERLAY_REPAINT);
        }

        if now.duration_since(self.last_flush) >= FLUSH_INTERVAL {
            self.controller.flush();
            self.last_flush = now;
        }
    }
}

impl<S: PreferenceStore> Drop for SpeedOverlayApp<S> {
    fn drop(&mut self) {
        self.controller.flush();
    }
}
