// SPDX-License-Identifier: MPL-2.0
//! Fluent bundle storage and message formatting.

use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Translation bundles keyed by locale.
pub(crate) struct Bundles {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
}

impl Bundles {
    /// Loads the embedded `.ftl` files, then any file of `i18n_dir`.
    ///
    /// A file on disk replaces the embedded bundle of the same locale. Files
    /// that fail to parse are logged and skipped.
    pub(crate) fn load(i18n_dir: Option<&Path>) -> Self {
        let mut bundles = HashMap::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = locale_of(filename) else {
                continue;
            };
            if let Some(content) = Asset::get(filename) {
                let source = String::from_utf8_lossy(content.data.as_ref()).into_owned();
                if let Some(bundle) = build_bundle(&locale, source, filename) {
                    bundles.insert(locale, bundle);
                }
            }
        }

        if let Some(dir) = i18n_dir {
            match fs::read_dir(dir) {
                Ok(entries) => {
                    for entry in entries.flatten() {
                        let path = entry.path();
                        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                            continue;
                        };
                        let Some(locale) = locale_of(name) else {
                            continue;
                        };
                        match fs::read_to_string(&path) {
                            Ok(source) => {
                                if let Some(bundle) = build_bundle(&locale, source, name) {
                                    bundles.insert(locale, bundle);
                                }
                            }
                            Err(err) => {
                                tracing::warn!(path = %path.display(), error = %err, "skipping translation file");
                            }
                        }
                    }
                }
                Err(err) => {
                    tracing::warn!(dir = %dir.display(), error = %err, "cannot read translation directory");
                }
            }
        }

        Self { bundles }
    }

    pub(crate) fn contains(&self, locale: &LanguageIdentifier) -> bool {
        self.bundles.contains_key(locale)
    }

    pub(crate) fn locales(&self) -> Vec<LanguageIdentifier> {
        let mut locales: Vec<_> = self.bundles.keys().cloned().collect();
        locales.sort_by_key(|l| l.to_string());
        locales
    }

    /// Formats `key` in `locale`, or `None` when the message is absent.
    pub(crate) fn format(
        &self,
        locale: &LanguageIdentifier,
        key: &str,
        args: Option<&FluentArgs<'_>>,
    ) -> Option<String> {
        let bundle = self.bundles.get(locale)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, args, &mut errors);
        if errors.is_empty() {
            Some(value.into_owned())
        } else {
            tracing::debug!(key, ?errors, "message formatting failed");
            None
        }
    }
}

fn locale_of(filename: &str) -> Option<LanguageIdentifier> {
    filename.strip_suffix(".ftl")?.parse().ok()
}

fn build_bundle(
    locale: &LanguageIdentifier,
    source: String,
    origin: &str,
) -> Option<FluentBundle<FluentResource>> {
    let resource = match FluentResource::try_new(source) {
        Ok(resource) => resource,
        Err((_, errors)) => {
            tracing::warn!(file = origin, count = errors.len(), "skipping malformed translation file");
            return None;
        }
    };
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    // Unicode isolation marks show up as boxes in iced text widgets.
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        tracing::warn!(file = origin, count = errors.len(), "duplicate messages in translation file");
    }
    Some(bundle)
}
