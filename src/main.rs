//! Speed overlay: a draggable, translucent always-on-top bubble showing the
//! current GPS speed.
//!
//! Tap or long-press the bubble to open the settings window. Drag it to move
//! it; the position is remembered.

use std::path::PathBuf;

use anyhow::anyhow;
use argh::FromArgs;
use eframe::egui::ViewportBuilder;
use tracing::info;

use speed_overlay::app::{OverlayController, SpeedOverlayApp, ViewportHost};
use speed_overlay::events::EventBus;
use speed_overlay::location::{LocationSource, NmeaSource};
use speed_overlay::logging;
use speed_overlay::storage::JsonFileStore;

/// Always-on-top GPS speed overlay.
#[derive(FromArgs)]
struct Args {
    /// NMEA 0183 source: serial device, log file, or `-` for stdin
    #[argh(option)]
    nmea: Option<PathBuf>,

    /// preference file (defaults to the user config directory)
    #[argh(option)]
    prefs: Option<PathBuf>,

    /// enable debug logging (RUST_LOG is honoured)
    #[argh(switch)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let args: Args = argh::from_env();
    logging::init(args.debug);

    let store = match args.prefs {
        Some(path) => JsonFileStore::new(path),
        None => JsonFileStore::open_default(),
    };
    info!(prefs = %store.path().display(), "starting");

    let source = args
        .nmea
        .map(|path| Box::new(NmeaSource::new(path)) as Box<dyn LocationSource>);

    let bus = EventBus::new();
    let mut controller =
        OverlayController::new(ViewportHost::new(), store, source, bus.publisher());
    controller.restore();

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Speed overlay")
            .with_inner_size([360.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "speed_overlay",
        options,
        Box::new(move |_cc| Ok(Box::new(SpeedOverlayApp::new(bus, controller)))),
    )
    .map_err(|e| anyhow!("event loop failed: {e}"))
}
