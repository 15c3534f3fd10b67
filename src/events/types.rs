//! Application events for inter-module communication.
//!
//! These events represent high-level application actions that can be
//! published by any module and handled by the event dispatcher.
//! This module is pure Rust with no UI dependencies, making it fully testable.

use crate::location::LocationSample;

/// Application-level events for decoupled communication between modules.
///
/// Events flow from producers (location reader, gestures, settings window)
/// through the EventBus to the dispatcher, which executes the appropriate
/// actions on the UI thread.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    // === Location Events ===
    /// A new location fix passed the update filter.
    LocationChanged(LocationSample),

    /// The location stream ended or failed; no more samples will arrive.
    LocationSourceClosed,

    // === Input Events ===
    /// Bring the settings window to the front (overlay tap or long-press).
    OpenSettings,

    /// Start the overlay if stopped, stop it if running.
    ToggleOverlay,

    /// Stop the overlay and leave the application.
    RequestQuit,
}

impl AppEvent {
    /// Returns true if this event needs the overlay to be redrawn.
    pub fn requires_repaint(&self) -> bool {
        !matches!(self, AppEvent::LocationSourceClosed)
    }

    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::LocationChanged(_) => "Location changed",
            AppEvent::LocationSourceClosed => "Location source closed",
            AppEvent::OpenSettings => "Open settings window",
            AppEvent::ToggleOverlay => "Toggle overlay",
            AppEvent::RequestQuit => "Request quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repaint_not_required_when_source_closes() {
        assert!(!AppEvent::LocationSourceClosed.requires_repaint());
    }

    #[test]
    fn test_repaint_required_for_visible_changes() {
        assert!(AppEvent::LocationChanged(LocationSample::from_speed(3.0)).requires_repaint());
        assert!(AppEvent::OpenSettings.requires_repaint());
        assert!(AppEvent::ToggleOverlay.requires_repaint());
        assert!(AppEvent::RequestQuit.requires_repaint());
    }

    #[test]
    fn test_event_debug() {
        let event = AppEvent::ToggleOverlay;
        assert_eq!(format!("{:?}", event), "ToggleOverlay");
    }

    #[test]
    fn test_all_events_have_descriptions() {
        let events = [
            AppEvent::LocationChanged(LocationSample::from_speed(0.0)),
            AppEvent::LocationSourceClosed,
            AppEvent::OpenSettings,
            AppEvent::ToggleOverlay,
            AppEvent::RequestQuit,
        ];

        for event in events {
            assert!(!event.description().is_empty());
        }
    }
}
