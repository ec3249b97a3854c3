use super::*;

#[test]
fn default_theme_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn storage_values_round_trip() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::from_stored(theme.as_str()), Some(theme));
    }
}

#[test]
fn unknown_stored_value_is_ignored() {
    assert_eq!(Theme::from_stored("dark-mode"), None);
    assert_eq!(Theme::from_stored("DARK"), None);
    assert_eq!(Theme::from_stored(""), None);
}

#[test]
fn toggling_flips_and_returns() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
}

#[test]
fn storage_key_is_stable() {
    // Readers with an existing saved preference keep it across releases.
    assert_eq!(STORAGE_KEY, "theme");
}
