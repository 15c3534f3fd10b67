//! Event system for decoupled inter-module communication.
//!
//! Location samples arrive on a reader thread, gestures and settings edits on
//! the UI thread. Everything is funnelled through one mpsc channel and
//! drained on the UI thread, so state is only ever touched from there.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ NMEA reader │     │   Gesture   │     │  Settings   │
//! │  (thread)   │     │   tracker   │     │   window    │
//! └──────┬──────┘     └──────┬──────┘     └──────┬──────┘
//!        │ publish()         │ publish()         │ publish()
//!        ▼                   ▼                   ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     EventBus                        │
//! └─────────────────────────┬───────────────────────────┘
//!                           │ drain()
//!                           ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                    Dispatcher                       │
//! │                 (once per frame)                    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! - [`types`]: Event definitions (`AppEvent` enum)
//! - [`bus`]: `EventBus` and `EventPublisher` types

pub mod bus;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use types::AppEvent;
