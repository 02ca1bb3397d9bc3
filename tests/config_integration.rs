// SPDX-License-Identifier: MPL-2.0
use iced_lightbox::config::{self, Config, GalleryConfig, LightboxConfig};
use iced_lightbox::gallery_source;
use iced_lightbox::i18n::fluent::I18n;
use iced_lightbox::ui::lightbox::State;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &config_path).expect("Failed to write initial config file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("lightbox-close"), "Close");

    let mut french = Config::default();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &config_path).expect("Failed to write french config file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("lightbox-close"), "Fermer");
}

#[test]
fn test_lightbox_section_drives_lightbox_settings() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        "[lightbox]\nscroll_duration_ms = 99999\ndrag_threshold = 0.5\nbackdrop_closes = false\n",
    )
    .expect("Failed to write config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let settings = config.lightbox.settings();
    assert_eq!(settings.scroll_duration.value(), config::scroll_duration_bounds::MAX_MS);
    assert!((settings.drag_threshold.value() - 0.5).abs() < f32::EPSILON);
    assert!(!settings.backdrop_closes);

    let lightbox = State::new(settings);
    assert_eq!(lightbox.settings(), settings);
}

#[test]
fn test_invalid_config_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[gallery\ncolumns_wide = ")
        .expect("Failed to write config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[test]
fn test_missing_config_uses_defaults_silently() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (config, warning) = config::load_with_override(Some(dir.path().join("absent")));
    assert_eq!(config.lightbox, LightboxConfig::default());
    assert_eq!(config.gallery, GalleryConfig::default());
    assert!(warning.is_none());
}

#[test]
fn test_gallery_columns_follow_breakpoint() {
    let gallery = GalleryConfig {
        columns_narrow: Some(1),
        columns_wide: Some(4),
        wide_breakpoint: Some(1000.0),
    };
    assert_eq!(gallery.columns_for_width(999.0).value(), 1);
    assert_eq!(gallery.columns_for_width(1000.0).value(), 4);
}

#[test]
fn test_manifest_gallery_opens_in_lightbox() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("gallery.toml"),
        r#"
heading = "Case studies"

[[images]]
source = "atlas.png"
caption = "Atlas"

[[images]]
source = "beacon.png"
caption = "Beacon"

[[images]]
source = "comet.png"
"#,
    )
    .expect("Failed to write manifest");

    let gallery =
        gallery_source::load(&dir.path().join("gallery.toml")).expect("Failed to load manifest");
    assert_eq!(gallery.heading(), Some("Case studies"));
    assert_eq!(gallery.images()[2].caption, "comet");

    let mut lightbox = State::default();
    let _ = lightbox.sync_request(&gallery.shared_images(), Some(2));
    let slides = lightbox.slides().expect("lightbox should be open");
    assert_eq!(slides.counter_label(), "3 / 3");
    assert!(!slides.can_scroll_next);
}
