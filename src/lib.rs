//! Speed overlay library. `main.rs` only parses arguments and hands the
//! controller to eframe, so everything here runs in integration tests
//! without a window.

pub mod app;
pub mod events;
pub mod handlers;
pub mod input;
pub mod location;
pub mod logging;
pub mod model;
pub mod storage;
pub mod ui;

use std::borrow::Cow;

use model::constants::{MAX_ALPHA, MIN_ALPHA, MIN_SCALE};

// Re-export model types for convenience
pub use model::{OverlayState, Position, Preferences, SpeedUnit};

// Re-export event types for convenience
pub use events::{AppEvent, EventBus, EventPublisher};

/// Clamp an alpha value to [0, 255].
pub fn clamp_alpha(alpha: i32) -> i32 {
    alpha.clamp(MIN_ALPHA, MAX_ALPHA)
}

/// Raise a scale factor to at least [`MIN_SCALE`]. NaN becomes the minimum.
pub fn clamp_scale(scale: f32) -> f32 {
    if scale >= MIN_SCALE {
        scale
    } else {
        MIN_SCALE
    }
}

/// Very small localisation helper used in Settings.
///
/// `lang` is one of the codes in [`model::LANGUAGES`]; unknown keys or
/// languages fall back to the English key.
pub fn tr_key(key: &str, lang: &str) -> Cow<'static, str> {
    let text = match (key, lang) {
        ("Settings", "nl") => "Instellingen",
        ("Settings", "fr") => "Paramètres",
        ("Settings", "de") => "Einstellungen",
        ("Settings", "it") => "Impostazioni",
        ("Settings", "es") => "Configuración",
        ("Settings", "pt") => "Configurações",

        ("Transparency", "nl") => "Transparantie",
        ("Transparency", "fr") => "Transparence",
        ("Transparency", "de") => "Transparenz",
        ("Transparency", "it") => "Trasparenza",
        ("Transparency", "es") => "Transparencia",
        ("Transparency", "pt") => "Transparência",

        ("Size", "nl") => "Grootte",
        ("Size", "fr") => "Taille",
        ("Size", "de") => "Größe",
        ("Size", "it") => "Dimensione",
        ("Size", "es") => "Tamaño",
        ("Size", "pt") => "Tamanho",

        ("Unit", "nl") => "Eenheid",
        ("Unit", "fr") => "Unité",
        ("Unit", "de") => "Einheit",
        ("Unit", "it") => "Unità",
        ("Unit", "es") => "Unidad",
        ("Unit", "pt") => "Unidade",

        ("Language", "nl") => "Taal",
        ("Language", "fr") => "Langue",
        ("Language", "de") => "Sprache",
        ("Language", "it") => "Lingua",
        ("Language", "es") => "Idioma",
        ("Language", "pt") => "Idioma",

        ("Start overlay", "nl") => "Overlay starten",
        ("Start overlay", "fr") => "Démarrer l'overlay",
        ("Start overlay", "de") => "Overlay starten",
        ("Start overlay", "it") => "Avvia overlay",
        ("Start overlay", "es") => "Iniciar overlay",
        ("Start overlay", "pt") => "Iniciar overlay",

        ("Stop overlay", "nl") => "Overlay stoppen",
        ("Stop overlay", "fr") => "Arrêter l'overlay",
        ("Stop overlay", "de") => "Overlay stoppen",
        ("Stop overlay", "it") => "Ferma overlay",
        ("Stop overlay", "es") => "Detener overlay",
        ("Stop overlay", "pt") => "Parar overlay",

        ("Exit", "nl") => "Afsluiten",
        ("Exit", "fr") => "Quitter",
        ("Exit", "de") => "Beenden",
        ("Exit", "it") => "Esci",
        ("Exit", "es") => "Salir",
        ("Exit", "pt") => "Sair",

        ("Preview", "nl") => "Voorbeeld",
        ("Preview", "fr") => "Aperçu",
        ("Preview", "de") => "Vorschau",
        ("Preview", "it") => "Anteprima",
        ("Preview", "es") => "Vista previa",
        ("Preview", "pt") => "Pré-visualização",

        _ => return Cow::Owned(key.to_string()),
    };
    Cow::Borrowed(text)
}
