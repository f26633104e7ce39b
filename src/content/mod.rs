// SPDX-License-Identifier: MPL-2.0
//! Static portfolio content.
//!
//! The records shown by every section (profile, services, experience,
//! projects, skills, testimonials, contact details) are read once at startup
//! from a TOML document. A copy is embedded in the binary; a file on disk may
//! replace it (see [`load`]). Nothing in the application mutates the content
//! after it has been loaded.

use crate::error::{ContentError, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/content/"]
struct Asset;

const EMBEDDED_FILE: &str = "portfolio.toml";

/// Owner identity shown in the hero and the loader.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    #[serde(default)]
    pub intro: String,
}

/// A service card of the about section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Service {
    pub title: String,
    #[serde(default)]
    pub icon: String,
}

/// A technology badge of the skills section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Technology {
    pub name: String,
    #[serde(default)]
    pub icon: String,
}

/// One entry of the experience timeline.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company_name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub icon_bg: String,
    pub date: String,
    #[serde(default)]
    pub points: Vec<String>,
}

/// A project tag with its gradient name (`blue-text-gradient`, ...).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(default)]
    pub color: String,
}

/// A project card.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub source_code_link: String,
    #[serde(default)]
    pub live_demo_link: String,
}

/// A testimonial shown by the carousel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub designation: String,
    pub company: String,
    #[serde(alias = "testimonial")]
    pub quote: String,
    /// Avatar reference. Never loaded; cards render the author's initial.
    #[serde(default, alias = "image")]
    pub avatar: String,
}

impl Testimonial {
    /// First character of the author name, used in place of the avatar.
    #[must_use]
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

/// A titled group of skills.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Contact details listed next to the contact form.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct ContactInfo {
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
}

/// The complete content of the portfolio.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub technologies: Vec<Technology>,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub skill_categories: Vec<SkillCategory>,
    #[serde(default)]
    pub contact: ContactInfo,
}

impl Portfolio {
    /// Parses portfolio content from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Parse`] if the document is not valid TOML or
    /// misses a required field.
    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|err| ContentError::Parse(err.to_string()).into())
    }

    /// Returns the content embedded in the binary.
    ///
    /// # Errors
    ///
    /// Returns an error if the asset is missing or does not parse.
    pub fn embedded() -> Result<Self> {
        let file = Asset::get(EMBEDDED_FILE).ok_or(ContentError::MissingEmbedded)?;
        Self::from_toml(&String::from_utf8_lossy(file.data.as_ref()))
    }

    /// Reads portfolio content from a file on disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::from_toml(&source)
    }
}

/// Minimal content used when even the embedded document cannot be read.
impl Default for Portfolio {
    fn default() -> Self {
        Self {
            profile: Profile {
                name: String::new(),
                headline: String::new(),
                intro: String::new(),
            },
            services: Vec::new(),
            technologies: Vec::new(),
            experiences: Vec::new(),
            projects: Vec::new(),
            testimonials: Vec::new(),
            skill_categories: Vec::new(),
            contact: ContactInfo::default(),
        }
    }
}

/// Loads the portfolio content.
///
/// When `override_path` is given, that file is read; if it cannot be read
/// the embedded content is used instead. Returns the content together with an
/// optional i18n warning key describing what went wrong.
pub fn load(override_path: Option<&Path>) -> (Portfolio, Option<&'static str>) {
    let mut warning = None;

    if let Some(path) = override_path {
        match Portfolio::from_path(path) {
            Ok(portfolio) => return (checked(portfolio), None),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "falling back to embedded content");
                warning = Some(match err {
                    crate::error::Error::Content(content) => content.i18n_key(),
                    _ => "error-content-read",
                });
            }
        }
    }

    match Portfolio::embedded() {
        Ok(portfolio) => (checked(portfolio), warning),
        Err(err) => {
            tracing::warn!(error = %err, "embedded content unavailable");
            let key = match err {
                crate::error::Error::Content(content) => content.i18n_key(),
                _ => "error-content-read",
            };
            (Portfolio::default(), Some(key))
        }
    }
}

fn checked(portfolio: Portfolio) -> Portfolio {
    if portfolio.testimonials.is_empty() {
        tracing::warn!("portfolio content has no testimonials; carousel will be empty");
    }
    portfolio
}
