use anyhow::{Context, Result};
use conference_kit_core::{Conference, Edition, WalkthroughInfo, load_walkthrough, parse_site_toml};
use conference_kit_generator::EditionData;
use conference_kit_validator::{CheckedSchedule, check_schedule_file};
use std::path::{Path, PathBuf};

/// One edition's data files after validation. Load failures are kept per
/// edition so a broken file never hides the defects of another.
pub struct CheckedEdition {
    pub edition: Edition,
    pub schedule_path: PathBuf,
    pub checked: conference_kit_core::Result<CheckedSchedule>,
    /// `Ok(None)` when no walk-through is configured or its file is missing
    pub walkthrough: conference_kit_core::Result<Option<WalkthroughInfo>>,
}

impl CheckedEdition {
    pub fn is_valid(&self) -> bool {
        self.walkthrough.is_ok()
            && self
                .checked
                .as_ref()
                .is_ok_and(|checked| checked.report.is_valid())
    }

    /// Configured walk-through file that does not exist yet
    pub fn missing_walkthrough(&self) -> Option<PathBuf> {
        let file = self.edition.walkthrough.as_ref()?;
        matches!(self.walkthrough, Ok(None)).then(|| file.clone())
    }
}

/// Load site.toml from a site directory
pub fn load_conference(path: &Path) -> Result<Conference> {
    if !path.exists() {
        anyhow::bail!(
            "Site directory does not exist: {}\nRun 'conference-kit init {}' first",
            path.display(),
            path.display()
        );
    }

    let site_toml_path = path.join("site.toml");
    if !site_toml_path.exists() {
        anyhow::bail!(
            "site.toml not found in {}\nRun 'conference-kit init {}' first",
            path.display(),
            path.display()
        );
    }

    parse_site_toml(&site_toml_path).context("Failed to parse site.toml")
}

/// Load and validate the data files of one edition
pub fn check_edition(path: &Path, edition: Edition) -> CheckedEdition {
    let schedule_path = path.join(&edition.schedule);
    let checked = check_schedule_file(&schedule_path);
    let walkthrough = match &edition.walkthrough {
        Some(file) => load_walkthrough(path.join(file)),
        None => Ok(None),
    };

    CheckedEdition {
        edition,
        schedule_path,
        checked,
        walkthrough,
    }
}

/// Validate the data files of every edition. Each file is checked on its own
/// and every outcome is returned, failures included.
pub fn check_editions(path: &Path, conference: &Conference) -> Vec<CheckedEdition> {
    conference
        .editions()
        .into_iter()
        .map(|edition| check_edition(path, edition))
        .collect()
}

/// Print the outcome of one edition, every error on its own line
pub fn print_report(checked: &CheckedEdition) {
    let name = checked.schedule_path.display();

    match &checked.checked {
        Err(e) => eprintln!("❌ {} could not be loaded: {}", name, e),
        Ok(schedule) => {
            let report = &schedule.report;
            if report.is_valid() {
                println!("✓ {} valid ({})", name, checked.edition.language.code());
            } else {
                eprintln!(
                    "❌ {} failed validation ({} error(s)):",
                    name,
                    report.errors.len()
                );
                for error in &report.errors {
                    eprintln!("  - {}", error);
                }
            }

            for warning in &report.warnings {
                println!("  ⚠ {}", warning);
            }
        }
    }

    if let Err(e) = &checked.walkthrough {
        eprintln!("❌ walk-through data could not be loaded: {}", e);
    }
    if let Some(file) = checked.missing_walkthrough() {
        println!(
            "  ⚠ {} not found; the walk-through page shows placeholder text",
            file.display()
        );
    }
}

/// Turn fully validated editions into generator input; fails if any is invalid
pub fn into_edition_data(checked: Vec<CheckedEdition>) -> Result<Vec<EditionData>> {
    let invalid = checked.iter().filter(|c| !c.is_valid()).count();
    if invalid > 0 {
        anyhow::bail!("{} edition(s) failed validation", invalid);
    }

    checked
        .into_iter()
        .map(|c| -> Result<EditionData> {
            let schedule = c
                .checked?
                .document
                .with_context(|| format!("No schedule loaded from {}", c.schedule_path.display()))?;
            Ok(EditionData {
                edition: c.edition,
                schedule,
                walkthrough: c.walkthrough?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::init::scaffold;
    use conference_kit_core::Error;
    use std::fs;
    use tempfile::TempDir;

    fn scaffolded_site() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let site = dir.path().join("conference");
        scaffold(&site).unwrap();
        (dir, site)
    }

    fn edit_json(path: &Path, edit: impl FnOnce(&mut serde_json::Value)) {
        let mut value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        edit(&mut value);
        fs::write(path, value.to_string()).unwrap();
    }

    #[test]
    fn test_scaffolded_editions_are_valid() {
        let (_dir, site) = scaffolded_site();
        let conference = load_conference(&site).unwrap();

        let checked = check_editions(&site, &conference);
        assert_eq!(checked.len(), 2);
        assert!(checked.iter().all(CheckedEdition::is_valid));
        assert!(checked.iter().all(|c| c.missing_walkthrough().is_none()));

        let editions = into_edition_data(checked).unwrap();
        assert!(editions.iter().all(|e| e.walkthrough.is_some()));
    }

    #[test]
    fn test_unreadable_schedule_does_not_hide_other_editions() {
        let (_dir, site) = scaffolded_site();
        fs::write(site.join("data/program-schedule.json"), "{ not json").unwrap();
        edit_json(&site.join("data/program-schedule-en.json"), |schedule| {
            schedule["programs"][2]["location"] = serde_json::json!("Hall Z");
        });

        let conference = load_conference(&site).unwrap();
        let checked = check_editions(&site, &conference);
        assert_eq!(checked.len(), 2);

        assert!(matches!(checked[0].checked, Err(Error::ScheduleParse(_))));

        let english = checked[1].checked.as_ref().unwrap();
        assert!(!english.report.is_valid());
        assert!(
            english
                .report
                .messages()
                .iter()
                .any(|m| m.contains("Hall Z"))
        );

        let err = into_edition_data(checked).unwrap_err();
        assert!(err.to_string().contains("2 edition(s) failed validation"));
    }

    #[test]
    fn test_missing_walkthrough_file_is_a_warning() {
        let (_dir, site) = scaffolded_site();
        fs::remove_file(site.join("data/walkthrough-info-en.json")).unwrap();

        let conference = load_conference(&site).unwrap();
        let checked = check_editions(&site, &conference);
        assert!(checked.iter().all(CheckedEdition::is_valid));
        assert_eq!(
            checked[1].missing_walkthrough(),
            Some(PathBuf::from("data/walkthrough-info-en.json"))
        );

        let editions = into_edition_data(checked).unwrap();
        assert!(editions[0].walkthrough.is_some());
        assert!(editions[1].walkthrough.is_none());
    }

    #[test]
    fn test_malformed_walkthrough_fails_its_edition() {
        let (_dir, site) = scaffolded_site();
        fs::write(site.join("data/walkthrough-info.json"), "[1, 2").unwrap();

        let conference = load_conference(&site).unwrap();
        let checked = check_editions(&site, &conference);
        assert!(!checked[0].is_valid());
        assert!(checked[0].checked.is_ok());
        assert!(checked[1].is_valid());

        let err = into_edition_data(checked).unwrap_err();
        assert!(err.to_string().contains("1 edition(s) failed validation"));
    }
}
