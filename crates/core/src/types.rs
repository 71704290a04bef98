use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Complete conference configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conference {
    pub event: EventInfo,
    pub site: SiteConfig,
    pub schedule: PathBuf,
    /// Data file of the base edition's walk-through page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub walkthrough: Option<PathBuf>,
    pub localizations: Vec<Localization>,
    pub build: BuildConfig,
}

impl Conference {
    /// Every language edition of the site, base language first.
    pub fn editions(&self) -> Vec<Edition> {
        let base = Edition {
            language: self.site.language,
            event: self.event.clone(),
            schedule: self.schedule.clone(),
            walkthrough: self.walkthrough.clone(),
            is_base: true,
        };

        std::iter::once(base)
            .chain(self.localizations.iter().map(|l| Edition {
                language: l.language,
                event: l.apply(&self.event),
                schedule: l.schedule.clone(),
                walkthrough: l.walkthrough.clone(),
                is_base: false,
            }))
            .collect()
    }
}

/// Event metadata shown on the landing page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventInfo {
    pub name: String,
    pub tagline: String,
    pub date: NaiveDate,
    /// Moment the countdown widget counts towards
    pub countdown_target: DateTime<FixedOffset>,
    pub venue: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_url: Option<String>,
    /// Markdown
    pub summary: String,
}

/// Site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub language: Language,
    pub accent_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

/// An additional language edition with its own schedule file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Localization {
    pub language: Language,
    pub schedule: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub walkthrough: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl Localization {
    /// Overlay the translated fields onto the base event metadata
    pub fn apply(&self, event: &EventInfo) -> EventInfo {
        EventInfo {
            name: self.name.clone().unwrap_or_else(|| event.name.clone()),
            tagline: self.tagline.clone().unwrap_or_else(|| event.tagline.clone()),
            venue: self.venue.clone().unwrap_or_else(|| event.venue.clone()),
            address: self.address.clone().or_else(|| event.address.clone()),
            summary: self.summary.clone().unwrap_or_else(|| event.summary.clone()),
            ..event.clone()
        }
    }
}

/// Build settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Embed stylesheet and script into each page instead of linking them
    #[serde(default)]
    pub inline_assets: bool,
}

/// One rendered language edition of the site
#[derive(Debug, Clone)]
pub struct Edition {
    pub language: Language,
    pub event: EventInfo,
    pub schedule: PathBuf,
    /// Present when this edition has a walk-through page
    pub walkthrough: Option<PathBuf>,
    pub is_base: bool,
}

impl Edition {
    /// Directory of this edition relative to the site root
    pub fn output_dir(&self) -> PathBuf {
        if self.is_base {
            PathBuf::new()
        } else {
            PathBuf::from(self.language.code())
        }
    }

    /// URL path of this edition's index page
    pub fn url_path(&self) -> String {
        if self.is_base {
            "/".to_string()
        } else {
            format!("/{}/", self.language.code())
        }
    }

    /// URL path of this edition's walk-through page
    pub fn walkthrough_url_path(&self) -> String {
        format!("{}walk-through/", self.url_path())
    }
}

/// Languages the site can be rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ko,
    En,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "ko" => Some(Language::Ko),
            "en" => Some(Language::En),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Check a `#RGB` / `#RRGGBB` color token (hex digits, any case)
pub fn is_hex_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(hex) => (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}
