// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Embedded `.ftl` files, optionally overridden from a directory on disk
//! - Runtime language switching
//! - Fallback to the default locale, then to a visible `MISSING:` marker

pub mod fluent;

use crate::config::Config;
use fluent::Bundles;
use fluent_bundle::{FluentArgs, FluentValue};
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;

const DEFAULT_LOCALE: &str = "en-US";

fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE.parse().unwrap_or_default()
}

pub struct I18n {
    bundles: Bundles,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish_non_exhaustive()
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<String>, config: &Config) -> Self {
        let bundles = Bundles::load(i18n_dir.map(PathBuf::from).as_deref());
        let available_locales = bundles.locales();
        let current_locale = resolve_locale(
            cli_lang,
            config,
            sys_locale::get_locale(),
            &available_locales,
        )
        .unwrap_or_else(default_locale);

        tracing::debug!(locale = %current_locale, "i18n initialized");

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains(&locale) {
            self.current_locale = locale;
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.lookup(key, None)
    }

    /// Translates `key` with named Fluent arguments.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, FluentValue::from(*value));
        }
        self.lookup(key, Some(&fluent_args))
    }

    fn lookup(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        self.bundles
            .format(&self.current_locale, key, args)
            .or_else(|| self.bundles.format(&default_locale(), key, args))
            .unwrap_or_else(|| format!("MISSING: {}", key))
    }
}

fn parse_available(
    candidate: Option<&str>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let lang: LanguageIdentifier = candidate?.parse().ok()?;
    if available.contains(&lang) {
        return Some(lang);
    }
    // "fr-FR" falls back to a bare "fr" bundle.
    available
        .iter()
        .find(|l| l.language == lang.language && l.region.is_none())
        .cloned()
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    os_locale: Option<String>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    parse_available(cli_lang.as_deref(), available)
        .or_else(|| parse_available(config.general.language.as_deref(), available))
        .or_else(|| parse_available(os_locale.as_deref(), available))
}
