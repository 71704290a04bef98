// Static landing-page generation: pages, shared assets and the build record

pub mod assets;
pub mod countdown;
pub mod html;
pub mod labels;
pub mod walkthrough;

pub use countdown::Countdown;
pub use html::{Page, html_escape, render_page};
pub use labels::{Labels, labels};
pub use walkthrough::render_walkthrough_page;

use chrono::{DateTime, Utc};
use conference_kit_core::{
    Category, Conference, Edition, EventInfo, ScheduleDocument, WalkthroughInfo,
};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

pub struct GeneratedSite {
    pub pages: Vec<(PathBuf, String)>,   // (path, html)
    pub assets: Vec<(PathBuf, Vec<u8>)>, // (path, data)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => f.write_str("development"),
            Environment::Production => f.write_str("production"),
        }
    }
}

/// Everything that varies between renders besides the content itself
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub inline_assets: bool,
    /// Adds the live-reload hook used by the preview server
    pub preview: bool,
    pub environment: Environment,
    pub version: String,
    /// Build clock; drives the pre-rendered countdown and build timestamp
    pub now: DateTime<Utc>,
}

/// A language edition together with its validated schedule
#[derive(Debug, Clone)]
pub struct EditionData {
    pub edition: Edition,
    pub schedule: ScheduleDocument,
    /// Walk-through content; `None` renders the placeholder page when the
    /// edition configures one whose file is not written yet
    pub walkthrough: Option<WalkthroughInfo>,
}

/// Summary written next to the site as `build-info.json`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfo<'a> {
    pub build_time: DateTime<Utc>,
    pub version: &'a str,
    pub environment: Environment,
    pub event_data: &'a EventInfo,
    pub program_data: ProgramData<'a>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramData<'a> {
    pub total_programs: usize,
    pub locations: &'a [String],
    pub categories: &'a [Category],
}

impl<'a> BuildInfo<'a> {
    pub fn new(event: &'a EventInfo, schedule: &'a ScheduleDocument, options: &'a RenderOptions) -> Self {
        Self {
            build_time: options.now,
            version: &options.version,
            environment: options.environment,
            event_data: event,
            program_data: ProgramData {
                total_programs: schedule.programs.len(),
                locations: &schedule.locations,
                categories: &schedule.categories,
            },
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Generate every edition's page plus the shared assets and build record.
///
/// The first edition is the base language; its schedule feeds the build
/// record. Editions that configure a walk-through also get
/// `walk-through/index.html`.
pub fn generate_site(
    conference: &Conference,
    editions: &[EditionData],
    options: &RenderOptions,
) -> anyhow::Result<GeneratedSite> {
    let Some(base) = editions.first() else {
        anyhow::bail!("No editions to generate");
    };

    let mut pages = Vec::new();
    for data in editions {
        let html = render_page(conference, &data.edition, &data.schedule, options);
        pages.push((data.edition.output_dir().join("index.html"), html));

        if data.edition.walkthrough.is_some() {
            let html = render_walkthrough_page(
                conference,
                &data.edition,
                data.walkthrough.as_ref(),
                options,
            );
            pages.push((
                data.edition.output_dir().join("walk-through/index.html"),
                html,
            ));
        }
    }

    let mut assets = Vec::new();
    if !options.inline_assets {
        assets.push((
            PathBuf::from("css/style.css"),
            assets::stylesheet().as_bytes().to_vec(),
        ));
        assets.push((
            PathBuf::from("js/site.js"),
            assets::site_js().as_bytes().to_vec(),
        ));
    }

    let build_info = BuildInfo::new(&base.edition.event, &base.schedule, options).to_json()?;
    assets.push((PathBuf::from("build-info.json"), build_info.into_bytes()));

    Ok(GeneratedSite { pages, assets })
}
