//! Event dispatcher for handling application events.
//!
//! The dispatcher receives events from the event bus and executes the
//! corresponding actions. It is called once per frame from the UI loop and
//! processes all pending events in batch.
//!
//! # Architecture
//!
//! ```text
//! EventBus::drain() → dispatch_events() → controller / shell
//! ```

use tracing::{debug, info};

use crate::app::{OverlayController, WindowHost};
use crate::events::{AppEvent, EventPublisher};
use crate::storage::PreferenceStore;
use crate::ui::settings::SettingsAction;

/// Actions that only the window shell can carry out.
pub trait Shell {
    /// Bring the settings window to the front.
    fn open_settings(&mut self);

    /// Close the application.
    fn quit(&mut self);
}

/// Dispatch a batch of drained events, in order.
pub fn dispatch_events<H, S, Sh>(
    events: Vec<AppEvent>,
    controller: &mut OverlayController<H, S>,
    shell: &mut Sh,
) where
    H: WindowHost,
    S: PreferenceStore,
    Sh: Shell,
{
    for event in events {
        dispatch_single_event(&event, controller, shell);
    }
}

/// Dispatch a single event.
fn dispatch_single_event<H, S, Sh>(
    event: &AppEvent,
    controller: &mut OverlayController<H, S>,
    shell: &mut Sh,
) where
    H: WindowHost,
    S: PreferenceStore,
    Sh: Shell,
{
    debug!(event = event.description(), "dispatch");
    match event {
        AppEvent::LocationChanged(sample) => controller.on_location(*sample),

        AppEvent::LocationSourceClosed => {
            info!("no more location updates, keeping last speed");
        }

        AppEvent::OpenSettings => shell.open_settings(),

        AppEvent::ToggleOverlay => controller.toggle(),

        AppEvent::RequestQuit => {
            controller.stop();
            controller.flush();
            shell.quit();
        }
    }
}

/// Apply one edit made in the settings window.
///
/// Value edits go straight to the controller; start/stop and exit go through
/// the bus like any other request.
pub fn apply_settings_action<H, S>(
    action: SettingsAction,
    controller: &mut OverlayController<H, S>,
    publisher: &EventPublisher,
) where
    H: WindowHost,
    S: PreferenceStore,
{
    match action {
        SettingsAction::SetAlpha(alpha) => controller.set_alpha(alpha),
        SettingsAction::SetScale(scale) => controller.set_scale(scale),
        SettingsAction::SetUnit(unit) => controller.set_unit(unit),
        SettingsAction::SetLanguage(code) => controller.set_language(code),
        SettingsAction::ToggleOverlay => {
            publisher.publish(AppEvent::ToggleOverlay);
        }
        SettingsAction::Exit => {
            publisher.publish(AppEvent::RequestQuit);
        }
    }
}
