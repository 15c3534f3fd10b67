//! Settings window content.
//!
//! Renders the controls into the root viewport and reports edits as
//! [`SettingsAction`]s; it never mutates preferences itself.

use eframe::egui::{self, Sense, Ui};

use crate::model::constants::*;
use crate::model::{OverlayState, Preferences, SpeedUnit};
use crate::tr_key;
use crate::ui::overlay::{self, MeasureSpec};

/// One user edit in the settings window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingsAction {
    SetAlpha(i32),
    SetScale(f32),
    SetUnit(SpeedUnit),
    SetLanguage(&'static str),
    ToggleOverlay,
    Exit,
}

/// Size slider position in percent for a scale factor.
pub fn scale_to_percent(scale: f32) -> i32 {
    ((scale * 100.0) as i32).max((MIN_SCALE * 100.0) as i32)
}

/// Scale factor for a size slider position in percent.
pub fn percent_to_scale(percent: i32) -> f32 {
    percent.max((MIN_SCALE * 100.0) as i32) as f32 / 100.0
}

/// Draw the settings controls. Returns the edits made this frame.
pub fn show(ui: &mut Ui, prefs: &Preferences, running: bool) -> Vec<SettingsAction> {
    let lang = prefs.language();
    let mut actions = Vec::new();

    ui.heading(tr_key("Settings", lang).as_ref());
    ui.add_space(8.0);

    egui::Grid::new("settings_grid")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.label(tr_key("Transparency", lang).as_ref());
            let mut alpha = prefs.alpha();
            if ui
                .add(egui::Slider::new(&mut alpha, MIN_ALPHA..=MAX_ALPHA))
                .changed()
            {
                actions.push(SettingsAction::SetAlpha(alpha));
            }
            ui.end_row();

            ui.label(tr_key("Size", lang).as_ref());
            let mut percent = scale_to_percent(prefs.scale());
            let range = scale_to_percent(MIN_SCALE)..=scale_to_percent(MAX_SCALE);
            if ui
                .add(egui::Slider::new(&mut percent, range).suffix("%"))
                .changed()
            {
                actions.push(SettingsAction::SetScale(percent_to_scale(percent)));
            }
            ui.end_row();

            ui.label(tr_key("Unit", lang).as_ref());
            let mut unit = prefs.unit();
            egui::ComboBox::from_id_salt("unit")
                .selected_text(unit.label())
                .show_ui(ui, |ui| {
                    for candidate in SpeedUnit::ALL {
                        ui.selectable_value(&mut unit, candidate, candidate.label());
                    }
                });
            if unit != prefs.unit() {
                actions.push(SettingsAction::SetUnit(unit));
            }
            ui.end_row();

            ui.label(tr_key("Language", lang).as_ref());
            let mut index = prefs.language_index();
            egui::ComboBox::from_id_salt("language")
                .selected_text(LANGUAGES[index].1)
                .show_ui(ui, |ui| {
                    for (i, (_, name)) in LANGUAGES.iter().enumerate() {
                        ui.selectable_value(&mut index, i, *name);
                    }
                });
            if LANGUAGES[index].0 != prefs.language() {
                actions.push(SettingsAction::SetLanguage(LANGUAGES[index].0));
            }
            ui.end_row();
        });

    ui.add_space(12.0);
    ui.label(tr_key("Preview", lang).as_ref());
    preview(ui, prefs);

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        let toggle = if running { "Stop overlay" } else { "Start overlay" };
        if ui.button(tr_key(toggle, lang).as_ref()).clicked() {
            actions.push(SettingsAction::ToggleOverlay);
        }
        if ui.button(tr_key("Exit", lang).as_ref()).clicked() {
            actions.push(SettingsAction::Exit);
        }
    });

    actions
}

/// Overlay preview at a fixed speed with the current alpha and scale.
fn preview(ui: &mut Ui, prefs: &Preferences) {
    let mut state = OverlayState::default();
    state.set_alpha(prefs.alpha());
    state.set_scale(prefs.scale());
    state.set_speed(PREVIEW_SPEED);

    let size = overlay::measure(&state, 1.0, MeasureSpec::Unspecified, MeasureSpec::Unspecified);
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    let params = overlay::layout(&state, rect.size(), 1.0);
    overlay::paint(ui.painter(), rect.min, &params);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_slider_never_goes_below_half() {
        assert_eq!(percent_to_scale(10), MIN_SCALE);
        assert_eq!(percent_to_scale(150), 1.5);
        assert_eq!(scale_to_percent(0.2), 50);
        assert_eq!(scale_to_percent(1.0), 100);
    }
}
