//! Window host seam for the overlay.
//!
//! The controller only ever talks to a [`WindowHost`]. [`ViewportHost`] is the
//! egui implementation: it records what should be on screen and the
//! application shows a matching viewport every frame.

use anyhow::{bail, Result};
use eframe::egui::Vec2;

use crate::model::Position;

/// Placement and behaviour of the overlay window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Top-left corner in screen pixels.
    pub position: Position,
    /// Window size in pixels.
    pub size: Vec2,
    /// Whether the window may take keyboard focus.
    pub focusable: bool,
}

/// Accepts the overlay view and moves it around.
pub trait WindowHost {
    /// Shows the overlay. Fails if it is already attached.
    fn add_view(&mut self, params: LayoutParams) -> Result<()>;

    /// Applies new placement to the attached overlay.
    fn update_view_layout(&mut self, params: LayoutParams) -> Result<()>;

    /// Hides the overlay. Fails if nothing is attached.
    fn remove_view(&mut self) -> Result<()>;
}

/// Host backed by an egui immediate viewport.
#[derive(Debug, Default, Clone)]
pub struct ViewportHost {
    attached: Option<LayoutParams>,
}

impl ViewportHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current placement, or `None` when nothing should be shown.
    pub fn attached(&self) -> Option<LayoutParams> {
        self.attached
    }
}

impl WindowHost for ViewportHost {
    fn add_view(&mut self, params: LayoutParams) -> Result<()> {
        if self.attached.is_some() {
            bail!("overlay view already attached");
        }
        self.attached = Some(params);
        Ok(())
    }

    fn update_view_layout(&mut self, params: LayoutParams) -> Result<()> {
        match self.attached.as_mut() {
            Some(current) => {
                *current = params;
                Ok(())
            }
            None => bail!("overlay view not attached"),
        }
    }

    fn remove_view(&mut self) -> Result<()> {
        if self.attached.take().is_none() {
            bail!("overlay view not attached");
        }
        Ok(())
    }
}
