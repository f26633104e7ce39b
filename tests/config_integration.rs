// SPDX-License-Identifier: MPL-2.0
use iced_folio::config::{self, Config, DEFAULT_AUTOPLAY_INTERVAL_MS};
use iced_folio::i18n::I18n;
use iced_folio::ui::carousel::{AutoplayInterval, Settings};
use iced_folio::ui::motion::{MotionSettings, RevealAmount};
use iced_folio::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("nav-work"), "Expérience");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn cli_language_overrides_config() {
    let mut config = Config::default();
    config.general.language = Some("fr".to_string());
    let i18n = I18n::new(Some("en-US".to_string()), None, &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn out_of_range_values_are_clamped() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        "[carousel]\nautoplay_interval_ms = 5\nswipe_threshold = 9000.0\n\n[motion]\nreveal_amount = 3.0\n",
    )
    .expect("Failed to write config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let carousel = Settings::from_config(&loaded);
    assert_eq!(carousel.interval, AutoplayInterval::new(config::MIN_AUTOPLAY_INTERVAL_MS));
    assert_eq!(carousel.swipe_threshold.value(), config::MAX_SWIPE_THRESHOLD);

    let motion = MotionSettings::from_config(&loaded);
    assert_eq!(motion.reveal_amount, RevealAmount::new(config::MAX_REVEAL_AMOUNT));
}

#[test]
fn theme_choice_survives_save_and_load() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut cfg = Config::default();
    cfg.general.theme_mode = ThemeMode::Light;
    config::save_with_override(&cfg, Some(dir.path().to_path_buf())).expect("save should succeed");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
    assert_eq!(
        loaded.carousel.autoplay_interval_ms,
        Some(DEFAULT_AUTOPLAY_INTERVAL_MS)
    );
}
