use super::schedule::{CheckedEdition, check_editions, load_conference, print_report};
use conference_kit_validator::CheckedSchedule;
use serde_json::{Map, Value, json};
use std::path::{Path, PathBuf};

/// Reports keyed by data file path. Files that could not be loaded carry an
/// `error` entry instead of a report.
fn json_reports(path: &Path, checked: &[CheckedEdition]) -> anyhow::Result<Map<String, Value>> {
    let mut reports = Map::new();
    for c in checked {
        let report = match &c.checked {
            Ok(schedule) => serde_json::to_value(&schedule.report)?,
            Err(e) => json!({ "error": e.to_string() }),
        };
        reports.insert(c.schedule_path.display().to_string(), report);

        if let (Some(file), Err(e)) = (&c.edition.walkthrough, &c.walkthrough) {
            reports.insert(
                path.join(file).display().to_string(),
                json!({ "error": e.to_string() }),
            );
        }
    }
    Ok(reports)
}

pub async fn run(path: PathBuf, json: bool) -> anyhow::Result<()> {
    let conference = load_conference(&path)?;
    let checked = check_editions(&path, &conference);

    if json {
        let reports = json_reports(&path, &checked)?;
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        println!("Validating site at: {}", path.display());
        println!("✓ site.toml valid");
        println!("  Event: {}", conference.event.name);
        println!("  Editions: {}", checked.len());
        println!();

        for edition in &checked {
            print_report(edition);
            if let Ok(CheckedSchedule {
                document: Some(document),
                ..
            }) = &edition.checked
            {
                println!(
                    "  Programs: {}, time slots: {}, venues: {}",
                    document.programs.len(),
                    document.time_slots().len(),
                    document.venues().len()
                );
            }
        }
    }

    let invalid = checked.iter().filter(|c| !c.is_valid()).count();
    if invalid > 0 {
        anyhow::bail!("{} edition(s) failed validation", invalid);
    }

    Ok(())
}
