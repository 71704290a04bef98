use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, TimeDelta};
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};

/// Days between `init` and the placeholder event date
const DEFAULT_LEAD_DAYS: i64 = 90;

/// Escape a string for safe inclusion in a TOML basic string
///
/// The site.toml template carries comments and a fixed layout, so it is
/// written by hand rather than serialized.
fn toml_escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\x08', "\\b")
        .replace('\x0C', "\\f")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Turn a directory name like "dev-summit_2025" into "Dev Summit 2025"
fn event_name_from_dir(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let words: Vec<String> = name
        .split(['-', '_', ' '])
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect();

    if words.is_empty() {
        "My Conference".to_string()
    } else {
        words.join(" ")
    }
}

/// Initialize a new conference site directory.
///
/// Creates the directory if needed and writes:
/// - site.toml with event metadata placeholders
/// - data/program-schedule.json (Korean base edition)
/// - data/program-schedule-en.json (English edition)
/// - data/walkthrough-info.json and data/walkthrough-info-en.json (hands-on page)
/// - an empty assets/ directory for images and other static files
///
/// # Errors
///
/// Returns an error if site.toml already exists in the directory or if any
/// file operation fails.
pub async fn run(path: PathBuf) -> Result<()> {
    println!("Initializing conference site: {}", path.display());

    scaffold(&path)?;

    println!("\n✓ Initialization complete!");
    println!("\nGenerated structure:");
    println!("  {}/", path.display());
    println!("  ├── site.toml                      ← Event name, date, venue, languages");
    println!("  ├── assets/                        ← Images and other static files");
    println!("  └── data/");
    println!("      ├── program-schedule.json      ← Program (base language)");
    println!("      ├── program-schedule-en.json   ← Program (English)");
    println!("      ├── walkthrough-info.json      ← Hands-on page (base language)");
    println!("      └── walkthrough-info-en.json   ← Hands-on page (English)");

    println!("\nNext steps:");
    println!("  1. Edit site.toml (event name, date, countdown target, venue)");
    println!("  2. Fill in the program schedules in data/");
    println!("  3. Check them: conference-kit validate {}", path.display());
    println!("  4. Preview: conference-kit preview {}", path.display());

    Ok(())
}

/// Write the starter files into `path`
pub fn scaffold(path: &Path) -> Result<()> {
    let site_toml_path = path.join("site.toml");
    if site_toml_path.exists() {
        anyhow::bail!(
            "site.toml already exists at {}\nHint: Delete it first or use a different directory",
            site_toml_path.display()
        );
    }

    fs::create_dir_all(path.join("data")).context("Failed to create data directory")?;
    fs::create_dir_all(path.join("assets")).context("Failed to create assets directory")?;

    let event_date = Local::now().date_naive() + TimeDelta::days(DEFAULT_LEAD_DAYS);
    let name = event_name_from_dir(path);

    fs::write(&site_toml_path, site_toml(&name, event_date)).context("Failed to write site.toml")?;
    println!("✓ Created site.toml");

    write_json(
        &path.join("data").join("program-schedule.json"),
        &korean_schedule(event_date),
    )?;
    write_json(
        &path.join("data").join("program-schedule-en.json"),
        &english_schedule(event_date),
    )?;
    println!("✓ Created sample program schedules");

    write_json(
        &path.join("data").join("walkthrough-info.json"),
        &korean_walkthrough(),
    )?;
    write_json(
        &path.join("data").join("walkthrough-info-en.json"),
        &english_walkthrough(),
    )?;
    println!("✓ Created sample walk-through pages");

    Ok(())
}

fn write_json(path: &Path, value: &Value) -> Result<()> {
    let contents = serde_json::to_string_pretty(value)?;
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

fn site_toml(name: &str, date: NaiveDate) -> String {
    format!(
        r##"# Conference site configuration

[event]
name = "{name}"
tagline = "미래 기술을 만나는 하루"
date = "{date}"
# RFC 3339 timestamp the countdown counts towards
countdown_target = "{date}T09:00:00+09:00"
venue = "컨벤션 센터"
# address = "서울특별시 ..."
# registration_url = "https://example.com/register"
summary = """
하루 동안 진행되는 기술 컨퍼런스입니다. **키노트**, 기술 세션, 네트워킹이 준비되어 있습니다.
"""

[site]
# Base language: "ko" or "en"
language = "ko"
accent_color = "#3498db"
# domain = "conference.example.com"

[schedule]
file = "data/program-schedule.json"

# Optional hands-on page rendered at walk-through/
[walkthrough]
file = "data/walkthrough-info.json"

[[localization]]
language = "en"
schedule = "data/program-schedule-en.json"
walkthrough = "data/walkthrough-info-en.json"
tagline = "A day with the technology of tomorrow"
venue = "Convention Center"
summary = """
A one-day technology conference with **keynotes**, technical sessions and networking.
"""

[build]
# Embed the stylesheet and script into each page
inline_assets = false
"##,
        name = toml_escape_string(name),
        date = date.format("%Y-%m-%d"),
    )
}

struct SampleEntry {
    time: &'static str,
    location: &'static str,
    title: &'static str,
    content: &'static str,
    speaker: &'static str,
    affiliation: &'static str,
    category: &'static str,
}

fn schedule_json(
    date: NaiveDate,
    locations: [&str; 3],
    categories: Value,
    entries: &[SampleEntry],
) -> Value {
    let date = date.format("%Y-%m-%d").to_string();
    let programs: Vec<Value> = entries
        .iter()
        .enumerate()
        .map(|(i, e)| {
            json!({
                "id": format!("p{}", i + 1),
                "date": date,
                "time": e.time,
                "location": e.location,
                "title": e.title,
                "content": e.content,
                "speaker": e.speaker,
                "affiliation": e.affiliation,
                "category": e.category,
            })
        })
        .collect();

    json!({
        "programs": programs,
        "locations": locations,
        "categories": categories,
    })
}

fn korean_schedule(date: NaiveDate) -> Value {
    schedule_json(
        date,
        ["A홀", "B홀", "all"],
        json!([
            {"name": "키노트", "color": "#ffffff", "backgroundColor": "#2c3e50", "borderColor": "#2c3e50"},
            {"name": "AI", "color": "#1a5276", "backgroundColor": "#d6eaf8"},
            {"name": "클라우드", "color": "#145a32", "backgroundColor": "#d5f5e3"},
            "네트워킹"
        ]),
        &[
            SampleEntry {
                time: "09:00-09:30",
                location: "all",
                title: "등록 및 네트워킹",
                content: "참가자 등록 및 네트워킹 시간입니다.",
                speaker: "전체",
                affiliation: "운영진",
                category: "네트워킹",
            },
            SampleEntry {
                time: "09:30-10:30",
                location: "all",
                title: "키노트: 미래 기술의 방향",
                content: "AI, 클라우드 등 미래 기술의 발전 방향을 이야기합니다.",
                speaker: "김기술",
                affiliation: "테크 연구소",
                category: "키노트",
            },
            SampleEntry {
                time: "10:45-11:45",
                location: "A홀",
                title: "AI와 머신러닝",
                content: "최신 AI 기술과 머신러닝의 실제 적용 사례를 살펴봅니다.",
                speaker: "이인공",
                affiliation: "AI 랩",
                category: "AI",
            },
            SampleEntry {
                time: "10:45-11:45",
                location: "B홀",
                title: "클라우드 전환 전략",
                content: "기업의 클라우드 전환 전략을 다룹니다.",
                speaker: "박클라우드",
                affiliation: "클라우드 컴퍼니",
                category: "클라우드",
            },
        ],
    )
}

fn english_schedule(date: NaiveDate) -> Value {
    schedule_json(
        date,
        ["Hall A", "Hall B", "all"],
        json!([
            {"name": "Keynote", "color": "#ffffff", "backgroundColor": "#2c3e50", "borderColor": "#2c3e50"},
            {"name": "AI", "color": "#1a5276", "backgroundColor": "#d6eaf8"},
            {"name": "Cloud", "color": "#145a32", "backgroundColor": "#d5f5e3"},
            "Networking"
        ]),
        &[
            SampleEntry {
                time: "09:00-09:30",
                location: "all",
                title: "Registration & Networking",
                content: "Registration and networking time for attendees.",
                speaker: "Everyone",
                affiliation: "Organizers",
                category: "Networking",
            },
            SampleEntry {
                time: "09:30-10:30",
                location: "all",
                title: "Keynote: Where Technology Is Heading",
                content: "A look at where AI, cloud and other technologies are going.",
                speaker: "Gisul Kim",
                affiliation: "Tech Institute",
                category: "Keynote",
            },
            SampleEntry {
                time: "10:45-11:45",
                location: "Hall A",
                title: "AI and Machine Learning",
                content: "Recent AI techniques and how machine learning is applied in practice.",
                speaker: "Ingong Lee",
                affiliation: "AI Lab",
                category: "AI",
            },
            SampleEntry {
                time: "10:45-11:45",
                location: "Hall B",
                title: "Cloud Migration Strategies",
                content: "How companies plan and execute a move to the cloud.",
                speaker: "Cloud Park",
                affiliation: "Cloud Company",
                category: "Cloud",
            },
        ],
    )
}

fn korean_walkthrough() -> Value {
    json!({
        "title": "실습 체험",
        "subtitle": "다양한 기술 분야의 실습을 직접 체험해보세요",
        "description": "컨퍼런스 세션과 연계된 실습을 브라우저에서 바로 시작할 수 있습니다.",
        "walkthroughs": [
            {
                "title": "AI 모델 서빙 실습",
                "description": "학습된 모델을 API로 배포하는 과정을 따라해봅니다.",
                "thumbnail": "assets/images/walkthrough-ai.png",
                "link": "https://example.com/walkthroughs/ai-serving"
            },
            {
                "title": "클라우드 배포 실습",
                "description": "컨테이너 애플리케이션을 클라우드에 배포해봅니다.",
                "link": "https://example.com/walkthroughs/cloud-deploy"
            }
        ]
    })
}

fn english_walkthrough() -> Value {
    json!({
        "title": "Hands-on Walkthroughs",
        "subtitle": "Try a range of technologies yourself",
        "description": "Start the hands-on labs that accompany the sessions right in your browser.",
        "walkthroughs": [
            {
                "title": "Serving an AI Model",
                "description": "Follow along as a trained model is deployed behind an API.",
                "thumbnail": "assets/images/walkthrough-ai.png",
                "link": "https://example.com/walkthroughs/ai-serving"
            },
            {
                "title": "Deploying to the Cloud",
                "description": "Ship a containerized application to the cloud.",
                "link": "https://example.com/walkthroughs/cloud-deploy"
            }
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use conference_kit_core::{load_walkthrough, parse_site_toml};
    use conference_kit_validator::validate;
    use tempfile::TempDir;

    #[test]
    fn test_toml_escape_string() {
        assert_eq!(toml_escape_string("plain"), "plain");
        assert_eq!(toml_escape_string("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(toml_escape_string("a\\b"), "a\\\\b");
        assert_eq!(toml_escape_string("line\nbreak"), "line\\nbreak");
    }

    #[test]
    fn test_event_name_from_dir() {
        assert_eq!(
            event_name_from_dir(Path::new("dev-summit_2025")),
            "Dev Summit 2025"
        );
        assert_eq!(event_name_from_dir(Path::new("/tmp/rustconf")), "Rustconf");
        assert_eq!(event_name_from_dir(Path::new("/")), "My Conference");
    }

    #[test]
    fn test_scaffold_creates_valid_site() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dev-summit");
        scaffold(&path).unwrap();

        let conference = parse_site_toml(path.join("site.toml")).unwrap();
        assert_eq!(conference.event.name, "Dev Summit");
        assert_eq!(conference.localizations.len(), 1);
        assert!(path.join("assets").is_dir());

        for edition in conference.editions() {
            let raw = fs::read_to_string(path.join(&edition.schedule)).unwrap();
            let report = validate(&serde_json::from_str(&raw).unwrap());
            assert!(report.is_valid(), "{:?}", report.messages());
            assert!(report.warnings.is_empty());

            let walkthrough = edition.walkthrough.expect("walk-through configured");
            let info = load_walkthrough(path.join(walkthrough)).unwrap().unwrap();
            assert_eq!(info.walkthroughs.len(), 2);
        }
    }

    #[test]
    fn test_scaffold_escapes_event_name() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("say \"hello\"");
        scaffold(&path).unwrap();

        let conference = parse_site_toml(path.join("site.toml")).unwrap();
        assert_eq!(conference.event.name, "Say \"hello\"");
    }

    #[test]
    fn test_scaffold_refuses_existing_site() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("site.toml"), "").unwrap();

        let result = scaffold(dir.path());
        assert!(result.unwrap_err().to_string().contains("already exists"));
    }

    #[test]
    fn test_sample_schedule_dates_match_event() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let schedule = english_schedule(date);
        assert!(
            schedule["programs"]
                .as_array()
                .unwrap()
                .iter()
                .all(|p| p["date"] == "2025-03-01")
        );
    }
}
