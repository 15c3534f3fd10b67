use speed_overlay::model::constants::LANGUAGES;
use speed_overlay::{clamp_alpha, clamp_scale, tr_key};

#[test]
fn clamp_alpha_keeps_inner_value() {
    assert_eq!(clamp_alpha(128), 128);
}

#[test]
fn clamp_alpha_limits_low_and_high() {
    assert_eq!(clamp_alpha(-5), 0);
    assert_eq!(clamp_alpha(300), 255);
}

#[test]
fn clamp_scale_raises_small_values() {
    assert_eq!(clamp_scale(0.25), 0.5);
    assert_eq!(clamp_scale(2.0), 2.0);
    assert_eq!(clamp_scale(f32::NAN), 0.5);
}

#[test]
fn tr_key_localises_every_language() {
    for (code, _) in LANGUAGES {
        assert!(!tr_key("Settings", code).is_empty());
    }
    assert_eq!(tr_key("Settings", "nl").as_ref(), "Instellingen");
    assert_eq!(tr_key("Exit", "de").as_ref(), "Beenden");
    assert_eq!(tr_key("Size", "es").as_ref(), "Tamaño");
}

#[test]
fn tr_key_falls_back_to_key() {
    // English is the key itself
    assert_eq!(tr_key("Settings", "en").as_ref(), "Settings");
    assert_eq!(tr_key("Stop overlay", "xx").as_ref(), "Stop overlay");
    assert_eq!(tr_key("UnknownKey", "nl").as_ref(), "UnknownKey");
}
