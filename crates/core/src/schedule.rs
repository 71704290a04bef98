use crate::error::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

/// Reserved location for entries that span every venue (plenary sessions)
pub const ALL_LOCATIONS: &str = "all";

/// A conference program schedule
///
/// Only build this from a document that already passed validation; the
/// conversion itself checks types but none of the cross-references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleDocument {
    pub programs: Vec<ProgramEntry>,
    #[serde(deserialize_with = "scalar_strings")]
    pub locations: Vec<String>,
    pub categories: Vec<Category>,
}

/// One scheduled talk or activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramEntry {
    #[serde(deserialize_with = "scalar_string")]
    pub id: String,
    pub date: NaiveDate,
    /// Zero-padded `HH:MM-HH:MM`
    pub time: String,
    #[serde(deserialize_with = "scalar_string")]
    pub location: String,
    #[serde(deserialize_with = "scalar_string")]
    pub title: String,
    #[serde(deserialize_with = "scalar_string")]
    pub content: String,
    #[serde(deserialize_with = "scalar_string")]
    pub speaker: String,
    #[serde(deserialize_with = "scalar_string")]
    pub affiliation: String,
    #[serde(deserialize_with = "scalar_string")]
    pub category: String,
}

impl ProgramEntry {
    /// Whether this entry occupies every venue at its time slot
    pub fn is_plenary(&self) -> bool {
        self.location == ALL_LOCATIONS
    }
}

/// Topic tag. Bare strings are the legacy form and carry no styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Category {
    Bare(String),
    Styled {
        #[serde(deserialize_with = "scalar_string")]
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<String>,
        #[serde(
            default,
            rename = "backgroundColor",
            skip_serializing_if = "Option::is_none"
        )]
        background_color: Option<String>,
        #[serde(
            default,
            rename = "borderColor",
            skip_serializing_if = "Option::is_none"
        )]
        border_color: Option<String>,
    },
}

impl Category {
    pub fn name(&self) -> &str {
        match self {
            Category::Bare(name) => name,
            Category::Styled { name, .. } => name,
        }
    }

    /// Base CSS class for entries of this category. Distinct names may share
    /// a slug; [`ScheduleDocument::category_classes`] resolves collisions.
    pub fn slug(&self) -> String {
        let slug: String = self
            .name()
            .to_lowercase()
            .replace(char::is_whitespace, "-")
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '-')
            .collect();
        format!("category-{}", slug)
    }
}

/// Text of a JSON scalar. Schedules written by hand often carry numeric ids
/// or names; they render as their JSON text.
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn scalar_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let found = value.to_string();
    scalar_text(value)
        .ok_or_else(|| de::Error::custom(format!("expected a text value, found {}", found)))
}

fn scalar_strings<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<Value>::deserialize(deserializer)?
        .into_iter()
        .map(|value| {
            let found = value.to_string();
            scalar_text(value)
                .ok_or_else(|| de::Error::custom(format!("expected a text value, found {}", found)))
        })
        .collect()
}

/// Entries sharing one time-range string
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSlotGroup<'a> {
    pub time: &'a str,
    pub programs: Vec<&'a ProgramEntry>,
}

/// Group entries by their exact `time` string.
///
/// Groups come out in ascending lexicographic order of the time string, which
/// equals chronological order for the zero-padded `HH:MM-HH:MM` format.
/// Entries keep their source order inside a group.
pub fn group_by_time(programs: &[ProgramEntry]) -> Vec<TimeSlotGroup<'_>> {
    let mut slots: BTreeMap<&str, Vec<&ProgramEntry>> = BTreeMap::new();
    for program in programs {
        slots.entry(program.time.as_str()).or_default().push(program);
    }

    slots
        .into_iter()
        .map(|(time, programs)| TimeSlotGroup { time, programs })
        .collect()
}

impl ScheduleDocument {
    /// Convert a validated raw document into the typed model
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Venue columns of the program grid: every location except the sentinel
    pub fn venues(&self) -> Vec<&str> {
        self.locations
            .iter()
            .map(String::as_str)
            .filter(|l| *l != ALL_LOCATIONS)
            .collect()
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name() == name)
    }

    /// CSS class of every category, in document order.
    ///
    /// Names that slug to the same class ("C++" and "C#") get the category's
    /// 1-based position appended, so each category keeps its own rule.
    pub fn category_classes(&self) -> Vec<String> {
        let mut taken = HashSet::new();
        self.categories
            .iter()
            .enumerate()
            .map(|(i, category)| {
                let slug = category.slug();
                let mut class = slug.clone();
                let mut n = i + 1;
                while !taken.insert(class.clone()) {
                    class = format!("{}-{}", slug, n);
                    n += 1;
                }
                class
            })
            .collect()
    }

    /// CSS class of the first category called `name`
    pub fn category_class(&self, name: &str) -> Option<String> {
        let index = self.categories.iter().position(|c| c.name() == name)?;
        self.category_classes().into_iter().nth(index)
    }

    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(Category::name).collect()
    }

    pub fn time_slots(&self) -> Vec<TimeSlotGroup<'_>> {
        group_by_time(&self.programs)
    }
}

/// Read a schedule file as raw JSON, ready for validation
pub fn load_schedule_value<P: AsRef<Path>>(path: P) -> Result<Value> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
