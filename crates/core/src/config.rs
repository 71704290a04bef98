use crate::error::{Error, Result};
use crate::types::*;
use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Raw TOML configuration structure
/// This matches the site.toml file structure exactly
#[derive(Debug, Deserialize)]
struct RawConfig {
    event: RawEvent,
    site: RawSite,
    schedule: RawSchedule,
    walkthrough: Option<RawWalkthrough>,
    #[serde(default)]
    localization: Vec<RawLocalization>,
    #[serde(default)]
    build: BuildConfig,
}

#[derive(Debug, Deserialize)]
struct RawEvent {
    name: String,
    tagline: String,
    date: String,             // Parse as NaiveDate
    countdown_target: String, // Parse as RFC 3339
    venue: String,
    address: Option<String>,
    registration_url: Option<String>,
    #[serde(default)]
    summary: String,
}

#[derive(Debug, Deserialize)]
struct RawSite {
    language: String,
    accent_color: String,
    domain: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawSchedule {
    file: String, // Convert to PathBuf
}

#[derive(Debug, Deserialize)]
struct RawWalkthrough {
    file: String, // Convert to PathBuf
}

#[derive(Debug, Deserialize)]
struct RawLocalization {
    language: String,
    schedule: String, // Convert to PathBuf
    walkthrough: Option<String>,
    name: Option<String>,
    tagline: Option<String>,
    venue: Option<String>,
    address: Option<String>,
    summary: Option<String>,
}

/// Parse site.toml from a file path
pub fn parse_site_toml<P: AsRef<Path>>(path: P) -> Result<Conference> {
    let content = fs::read_to_string(path)?;
    parse_site_toml_str(&content)
}

/// Parse site.toml from a string (useful for testing)
pub fn parse_site_toml_str(content: &str) -> Result<Conference> {
    let raw: RawConfig = toml::from_str(content)?;

    let date = NaiveDate::parse_from_str(&raw.event.date, "%Y-%m-%d")
        .map_err(|e| Error::ConfigParse(format!("Invalid event.date: {}", e)))?;

    let countdown_target = DateTime::parse_from_rfc3339(&raw.event.countdown_target)
        .map_err(|e| Error::ConfigParse(format!("Invalid event.countdown_target: {}", e)))?;

    let event = EventInfo {
        name: raw.event.name,
        tagline: raw.event.tagline,
        date,
        countdown_target,
        venue: raw.event.venue,
        address: raw.event.address,
        registration_url: raw.event.registration_url,
        summary: raw.event.summary,
    };

    let base_language = parse_language(&raw.site.language, "site.language")?;

    if !is_hex_color(&raw.site.accent_color) {
        return Err(Error::ConfigParse(format!(
            "Invalid site.accent_color '{}', expected #RRGGBB or #RGB",
            raw.site.accent_color
        )));
    }

    let site = SiteConfig {
        language: base_language,
        accent_color: raw.site.accent_color,
        domain: raw.site.domain,
    };

    let schedule = validate_path(&raw.schedule.file, "schedule.file")?;
    let walkthrough = raw
        .walkthrough
        .map(|w| validate_path(&w.file, "walkthrough.file"))
        .transpose()?;

    // Convert localizations, validating languages and paths
    let mut seen = vec![base_language];
    let localizations: Result<Vec<Localization>> = raw
        .localization
        .into_iter()
        .map(|l| {
            let language = parse_language(&l.language, "localization.language")?;
            if seen.contains(&language) {
                return Err(Error::ConfigParse(format!(
                    "Language '{}' is configured more than once",
                    language
                )));
            }
            seen.push(language);

            Ok(Localization {
                language,
                schedule: validate_path(&l.schedule, "localization.schedule")?,
                walkthrough: l
                    .walkthrough
                    .map(|w| validate_path(&w, "localization.walkthrough"))
                    .transpose()?,
                name: l.name,
                tagline: l.tagline,
                venue: l.venue,
                address: l.address,
                summary: l.summary,
            })
        })
        .collect();

    Ok(Conference {
        event,
        site,
        schedule,
        walkthrough,
        localizations: localizations?,
        build: raw.build,
    })
}

fn parse_language(code: &str, field_name: &str) -> Result<Language> {
    Language::from_code(code).ok_or_else(|| {
        Error::ConfigParse(format!(
            "Unsupported language '{}' in '{}', expected \"ko\" or \"en\"",
            code, field_name
        ))
    })
}

/// Validate and convert a path string to PathBuf.
///
/// Rejects absolute paths and parent directory references (`..`) so a
/// site.toml can only point at files inside the project directory.
///
/// # Examples
///
/// ```text
/// validate_path("data/program-schedule.json", "schedule.file")  → Ok(PathBuf)
/// validate_path("/etc/passwd", "schedule.file")  → Err("Absolute paths not allowed...")
/// validate_path("../other/schedule.json", "schedule.file")  → Err("Parent directory references...")
/// ```
fn validate_path(path_str: &str, field_name: &str) -> Result<PathBuf> {
    let path = Path::new(path_str);

    if path.is_absolute() {
        return Err(Error::ConfigParse(format!(
            "Absolute paths not allowed in '{}': '{}'. Use relative paths only.",
            field_name, path_str
        )));
    }

    for component in path.components() {
        if component == std::path::Component::ParentDir {
            return Err(Error::ConfigParse(format!(
                "Parent directory references (..) not allowed in '{}': '{}'",
                field_name, path_str
            )));
        }
    }

    if path_str.trim().is_empty() {
        return Err(Error::ConfigParse(format!(
            "Empty path in '{}' field",
            field_name
        )));
    }

    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r##"
[event]
name = "Tech Conference 2024"
tagline = "Meet the future"
date = "2024-12-15"
countdown_target = "2024-12-15T09:00:00+09:00"
venue = "COEX Hall"

[site]
language = "ko"
accent_color = "#3498db"

[schedule]
file = "data/program-schedule.json"
"##;

    fn with_localization(localization: &str) -> String {
        format!("{}\n{}", MINIMAL, localization)
    }

    #[test]
    fn test_parse_minimal_config() {
        let conference = parse_site_toml_str(MINIMAL).unwrap();
        assert_eq!(conference.event.name, "Tech Conference 2024");
        assert_eq!(conference.event.date.to_string(), "2024-12-15");
        assert_eq!(
            conference.event.countdown_target.to_rfc3339(),
            "2024-12-15T09:00:00+09:00"
        );
        assert_eq!(conference.site.language, Language::Ko);
        assert_eq!(
            conference.schedule,
            PathBuf::from("data/program-schedule.json")
        );
        assert!(conference.localizations.is_empty());
        assert!(!conference.build.inline_assets);
        assert!(conference.walkthrough.is_none());
        assert_eq!(conference.editions().len(), 1);
    }

    #[test]
    fn test_parse_config_with_walkthrough() {
        let toml = with_localization(
            r##"
[walkthrough]
file = "data/walkthrough-info.json"

[[localization]]
language = "en"
schedule = "data/program-schedule-en.json"
walkthrough = "data/walkthrough-info-en.json"
"##,
        );

        let editions = parse_site_toml_str(&toml).unwrap().editions();
        assert_eq!(
            editions[0].walkthrough,
            Some(PathBuf::from("data/walkthrough-info.json"))
        );
        assert_eq!(
            editions[1].walkthrough,
            Some(PathBuf::from("data/walkthrough-info-en.json"))
        );
    }

    #[test]
    fn test_parse_config_walkthrough_is_per_edition() {
        let toml = with_localization(
            r##"
[walkthrough]
file = "data/walkthrough-info.json"

[[localization]]
language = "en"
schedule = "data/program-schedule-en.json"
"##,
        );

        let editions = parse_site_toml_str(&toml).unwrap().editions();
        assert!(editions[0].walkthrough.is_some());
        assert!(editions[1].walkthrough.is_none());
    }

    #[test]
    fn test_parse_config_rejects_path_traversal_in_walkthrough() {
        let toml = with_localization("[walkthrough]\nfile = \"../secrets.json\"\n");
        let message = parse_site_toml_str(&toml).unwrap_err().to_string();
        assert!(message.contains("walkthrough.file"));
    }

    #[test]
    fn test_parse_config_with_localization() {
        let toml = with_localization(
            r##"
[[localization]]
language = "en"
schedule = "data/program-schedule-en.json"
name = "Tech Conference 2024 (EN)"

[build]
inline_assets = true
"##,
        );

        let conference = parse_site_toml_str(&toml).unwrap();
        assert_eq!(conference.localizations.len(), 1);
        assert!(conference.build.inline_assets);
        let editions = conference.editions();
        let languages: Vec<Language> = editions.iter().map(|e| e.language).collect();
        assert_eq!(languages, vec![Language::Ko, Language::En]);
        assert_eq!(editions.len(), 2);
        assert!(editions[0].is_base);
        assert_eq!(editions[1].language, Language::En);
        assert_eq!(editions[1].event.name, "Tech Conference 2024 (EN)");
        assert_eq!(editions[1].event.venue, "COEX Hall");
    }

    #[test]
    fn test_parse_config_rejects_invalid_date() {
        let toml = MINIMAL.replace("2024-12-15\"", "2024-02-30\"");
        let result = parse_site_toml_str(&toml);
        assert!(result.unwrap_err().to_string().contains("event.date"));
    }

    #[test]
    fn test_parse_config_rejects_invalid_countdown_target() {
        let toml = MINIMAL.replace("2024-12-15T09:00:00+09:00", "next tuesday");
        let result = parse_site_toml_str(&toml);
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("event.countdown_target")
        );
    }

    #[test]
    fn test_parse_config_rejects_bad_accent_color() {
        let toml = MINIMAL.replace("#3498db", "red");
        let result = parse_site_toml_str(&toml);
        assert!(result.unwrap_err().to_string().contains("accent_color"));
    }

    #[test]
    fn test_parse_config_rejects_unknown_language() {
        let toml = MINIMAL.replace("language = \"ko\"", "language = \"fr\"");
        let result = parse_site_toml_str(&toml);
        assert!(result.unwrap_err().to_string().contains("site.language"));
    }

    #[test]
    fn test_parse_config_rejects_duplicate_language() {
        let toml = with_localization(
            r##"
[[localization]]
language = "ko"
schedule = "data/other.json"
"##,
        );
        let result = parse_site_toml_str(&toml);
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("configured more than once")
        );
    }

    #[test]
    fn test_parse_config_rejects_path_traversal_in_schedule() {
        let toml = MINIMAL.replace("data/program-schedule.json", "../../etc/passwd");
        let result = parse_site_toml_str(&toml);
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Parent directory references")
        );
    }

    #[test]
    fn test_parse_config_rejects_absolute_path_in_localization() {
        let toml = with_localization(
            r##"
[[localization]]
language = "en"
schedule = "/etc/passwd"
"##,
        );
        let result = parse_site_toml_str(&toml);
        let message = result.unwrap_err().to_string();
        assert!(message.contains("Absolute paths not allowed"));
        assert!(message.contains("localization.schedule"));
    }

    #[test]
    fn test_parse_config_missing_section() {
        let toml = MINIMAL.replace("[schedule]\nfile = \"data/program-schedule.json\"", "");
        let result = parse_site_toml_str(&toml);
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Configuration parse error")
        );
    }

    #[test]
    fn test_validate_path_rejects_empty() {
        let result = validate_path("", "schedule.file");
        assert!(result.unwrap_err().to_string().contains("Empty path"));

        assert!(validate_path("   ", "schedule.file").is_err());
    }

    #[test]
    fn test_validate_path_valid_relative() {
        assert!(validate_path("data/program-schedule.json", "schedule.file").is_ok());
        assert!(validate_path("data/i18n/en.json", "localization.schedule").is_ok());
    }

    #[test]
    fn test_parse_site_toml_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("site.toml");
        std::fs::write(&path, MINIMAL).unwrap();

        let conference = parse_site_toml(&path).unwrap();
        assert_eq!(conference.event.venue, "COEX Hall");
    }
}
