//! Program schedule validation.
//!
//! [`validate`] inspects a parsed schedule document and reports every defect
//! it finds instead of stopping at the first one. Only a missing top-level
//! array short-circuits the scan.

pub mod predicates;

pub use predicates::{
    is_valid_color, is_valid_date, is_valid_time_range, parse_clock_time, parse_time_range,
};

use conference_kit_core::{ALL_LOCATIONS, Result, ScheduleDocument, load_schedule_value};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use std::path::Path;

/// Fields every program entry must carry with a non-empty value
pub const REQUIRED_FIELDS: [&str; 9] = [
    "id",
    "date",
    "time",
    "location",
    "title",
    "content",
    "speaker",
    "affiliation",
    "category",
];

/// Free-text entry fields; they render verbatim, so any scalar will do
const TEXT_FIELDS: [&str; 5] = ["id", "title", "content", "speaker", "affiliation"];

/// Category color attributes and how they are named in messages
const COLOR_FIELDS: [(&str, &str); 3] = [
    ("color", "color"),
    ("backgroundColor", "background color"),
    ("borderColor", "border color"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A top-level array is missing or not an array
    Structure,
    MissingField,
    UnknownLocation,
    UnknownCategory,
    InvalidDate,
    InvalidTimeRange,
    InvalidColor,
    InvalidCategoryFormat,
    /// A list or object where text is expected
    InvalidType,
}

/// What a validation error points at. Indexes are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "index", rename_all = "snake_case")]
pub enum Subject {
    Entry(usize),
    Category(usize),
    Location(usize),
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Entry(n) => write!(f, "entry {}", n),
            Subject::Category(n) => write!(f, "category {}", n),
            Subject::Location(n) => write!(f, "location {}", n),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub kind: ErrorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Subject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub message: String,
}

impl ValidationError {
    fn structure(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Structure,
            subject: None,
            field: None,
            message: message.into(),
        }
    }

    fn new(kind: ErrorKind, subject: Subject, field: &str, detail: String) -> Self {
        Self {
            kind,
            subject: Some(subject),
            field: Some(field.to_string()),
            message: format!("{}: {}", subject, detail),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
    /// Non-fatal observations; they never affect `is_valid`
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Operator-facing error lines in report order
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    fn fatal(message: &str) -> Self {
        Self {
            errors: vec![ValidationError::structure(message)],
            warnings: vec![],
        }
    }
}

/// Validate a parsed schedule document.
///
/// Never panics on any JSON value. Identical input always produces the same
/// errors in the same order: entries first, in document order, then
/// categories, then the location list.
pub fn validate(doc: &Value) -> ValidationReport {
    let Some(programs) = doc.get("programs").and_then(Value::as_array) else {
        return ValidationReport::fatal("programs is missing or is not an array");
    };
    let Some(locations) = doc.get("locations").and_then(Value::as_array) else {
        return ValidationReport::fatal("locations is missing or is not an array");
    };
    let Some(categories) = doc.get("categories").and_then(Value::as_array) else {
        return ValidationReport::fatal("categories is missing or is not an array");
    };

    let category_names: Vec<&Value> = categories.iter().filter_map(category_name).collect();

    let mut report = ValidationReport::default();

    for (i, program) in programs.iter().enumerate() {
        let subject = Subject::Entry(i + 1);
        match program.as_object() {
            Some(fields) => {
                validate_program(fields, subject, locations, &category_names, &mut report)
            }
            // Every field of a non-object entry is missing
            None => {
                for field in REQUIRED_FIELDS {
                    report.errors.push(missing_field(subject, field));
                }
            }
        }
    }

    for (i, category) in categories.iter().enumerate() {
        validate_category(category, Subject::Category(i + 1), &mut report.errors);
    }

    for (i, location) in locations.iter().enumerate() {
        if !is_scalar(location) {
            report.errors.push(ValidationError {
                kind: ErrorKind::InvalidType,
                subject: Some(Subject::Location(i + 1)),
                field: None,
                message: format!(
                    "location {}: {} is not a valid location name",
                    i + 1,
                    display(location)
                ),
            });
        }
    }

    report
}

fn validate_program(
    program: &Map<String, Value>,
    subject: Subject,
    locations: &[Value],
    category_names: &[&Value],
    report: &mut ValidationReport,
) {
    for field in REQUIRED_FIELDS {
        if !is_truthy(program.get(field)) {
            report.errors.push(missing_field(subject, field));
        }
    }

    if let Some(location) = present(program, "location") {
        if location.as_str() == Some(ALL_LOCATIONS) {
            if !locations.contains(location) {
                report.warnings.push(format!(
                    "{}: uses the '{}' location, which is not listed in locations",
                    subject, ALL_LOCATIONS
                ));
            }
        } else if !locations.contains(location) {
            report.errors.push(ValidationError::new(
                ErrorKind::UnknownLocation,
                subject,
                "location",
                format!(
                    "'{}' is not a valid location. Valid locations: {}",
                    display(location),
                    join(locations.iter())
                ),
            ));
        }
    }

    if let Some(category) = present(program, "category")
        && !category_names.contains(&category)
    {
        report.errors.push(ValidationError::new(
            ErrorKind::UnknownCategory,
            subject,
            "category",
            format!(
                "'{}' is not a valid category. Valid categories: {}",
                display(category),
                join(category_names.iter().copied())
            ),
        ));
    }

    if let Some(date) = present(program, "date")
        && !date.as_str().is_some_and(is_valid_date)
    {
        report.errors.push(ValidationError::new(
            ErrorKind::InvalidDate,
            subject,
            "date",
            format!(
                "'{}' is not a valid date (expected YYYY-MM-DD)",
                display(date)
            ),
        ));
    }

    if let Some(time) = present(program, "time")
        && !time.as_str().is_some_and(is_valid_time_range)
    {
        report.errors.push(ValidationError::new(
            ErrorKind::InvalidTimeRange,
            subject,
            "time",
            format!(
                "'{}' is not a valid time range (expected HH:MM-HH:MM with the start before the end)",
                display(time)
            ),
        ));
    }

    for field in TEXT_FIELDS {
        if let Some(value) = present(program, field)
            && !is_scalar(value)
        {
            report.errors.push(invalid_type(subject, field, value));
        }
    }
}

fn validate_category(category: &Value, subject: Subject, errors: &mut Vec<ValidationError>) {
    match category {
        // Legacy bare names are always accepted
        Value::String(_) => {}
        Value::Object(fields) => {
            match present(fields, "name") {
                None => errors.push(missing_field(subject, "name")),
                Some(name) if !is_scalar(name) => errors.push(invalid_type(subject, "name", name)),
                Some(_) => {}
            }

            for (field, label) in COLOR_FIELDS {
                if let Some(color) = present(fields, field)
                    && !color.as_str().is_some_and(is_valid_color)
                {
                    errors.push(ValidationError::new(
                        ErrorKind::InvalidColor,
                        subject,
                        field,
                        format!(
                            "'{}' is not a valid {} (expected #RRGGBB or #RGB)",
                            display(color),
                            label
                        ),
                    ));
                }
            }
        }
        _ => errors.push(ValidationError {
            kind: ErrorKind::InvalidCategoryFormat,
            subject: Some(subject),
            field: None,
            message: format!("{}: invalid category format", subject),
        }),
    }
}

fn missing_field(subject: Subject, field: &str) -> ValidationError {
    ValidationError::new(
        ErrorKind::MissingField,
        subject,
        field,
        format!("missing required field '{}'", field),
    )
}

fn invalid_type(subject: Subject, field: &str, value: &Value) -> ValidationError {
    ValidationError::new(
        ErrorKind::InvalidType,
        subject,
        field,
        format!("'{}' must be text, found {}", field, display(value)),
    )
}

/// Strings, numbers and booleans all render as text
fn is_scalar(value: &Value) -> bool {
    matches!(value, Value::String(_) | Value::Number(_) | Value::Bool(_))
}

/// Name a category resolves to: the string itself or its `name` attribute
fn category_name(category: &Value) -> Option<&Value> {
    match category {
        Value::String(_) => Some(category),
        Value::Object(fields) => fields.get("name"),
        _ => None,
    }
}

/// A field counts as present only when it holds a non-empty, non-zero value
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

fn present<'a>(fields: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    fields.get(field).filter(|v| is_truthy(Some(v)))
}

fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn join<'a>(values: impl Iterator<Item = &'a Value>) -> String {
    values.map(display).collect::<Vec<_>>().join(", ")
}

/// A schedule file after loading and validation
#[derive(Debug)]
pub struct CheckedSchedule {
    pub report: ValidationReport,
    /// Present only when the report is valid
    pub document: Option<ScheduleDocument>,
}

/// Load a schedule file, validate it and, if it passes, build the typed model.
///
/// Unreadable files and malformed JSON are errors; a readable document with
/// defects is a successful call with an invalid report.
pub fn check_schedule_file<P: AsRef<Path>>(path: P) -> Result<CheckedSchedule> {
    let value = load_schedule_value(path)?;
    let report = validate(&value);

    let document = if report.is_valid() {
        Some(ScheduleDocument::from_value(value)?)
    } else {
        None
    };

    Ok(CheckedSchedule { report, document })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn valid_entry() -> Value {
        json!({
            "id": "p1",
            "date": "2024-12-15",
            "time": "09:00-09:30",
            "location": "Hall A",
            "title": "Opening",
            "content": "...",
            "speaker": "X",
            "affiliation": "Y",
            "category": "Keynote"
        })
    }

    fn document_with(entry: Value) -> Value {
        json!({
            "programs": [entry],
            "locations": ["Hall A", "all"],
            "categories": ["Keynote"]
        })
    }

    fn with_field(field: &str, value: Value) -> Value {
        let mut entry = valid_entry();
        entry[field] = value;
        document_with(entry)
    }

    #[test]
    fn test_valid_document() {
        let report = validate(&document_with(valid_entry()));
        assert!(report.is_valid());
        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_unknown_location_lists_valid_ones() {
        let report = validate(&with_field("location", json!("Hall Z")));
        assert!(!report.is_valid());
        assert_eq!(report.errors.len(), 1);

        let error = &report.errors[0];
        assert_eq!(error.kind, ErrorKind::UnknownLocation);
        assert_eq!(error.subject, Some(Subject::Entry(1)));
        assert!(error.message.contains("'Hall Z'"));
        assert!(error.message.contains("Hall A, all"));
    }

    #[test]
    fn test_unknown_category_lists_valid_names() {
        let mut doc = with_field("category", json!("Cloud"));
        doc["categories"] = json!(["Keynote", {"name": "AI", "color": "#fff"}]);

        let report = validate(&doc);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].kind, ErrorKind::UnknownCategory);
        assert!(report.errors[0].message.contains("'Cloud'"));
        assert!(report.errors[0].message.contains("Keynote, AI"));
    }

    #[test]
    fn test_styled_category_name_resolves() {
        let mut doc = with_field("category", json!("AI"));
        doc["categories"] = json!([{"name": "AI", "backgroundColor": "#3498db"}]);
        assert!(validate(&doc).is_valid());
    }

    #[test]
    fn test_missing_top_level_arrays() {
        for field in ["programs", "locations", "categories"] {
            let mut doc = document_with(valid_entry());
            doc.as_object_mut().unwrap().remove(field);

            let report = validate(&doc);
            assert!(!report.is_valid());
            assert_eq!(report.errors.len(), 1, "missing {}", field);
            assert_eq!(report.errors[0].kind, ErrorKind::Structure);
            assert!(report.errors[0].message.contains(field));
        }
    }

    #[test]
    fn test_non_array_top_level_fields() {
        for field in ["programs", "locations", "categories"] {
            let mut doc = document_with(valid_entry());
            doc[field] = json!({"not": "an array"});

            let report = validate(&doc);
            assert_eq!(report.errors.len(), 1, "non-array {}", field);
            assert!(report.errors[0].message.contains(field));
        }
    }

    #[test]
    fn test_structural_check_short_circuits() {
        let doc = json!({
            "programs": [{"id": ""}],
            "locations": "Hall A"
        });
        let report = validate(&doc);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].message.contains("locations"));
    }

    #[test]
    fn test_non_object_document() {
        for doc in [json!(null), json!([]), json!("schedule"), json!(42)] {
            let report = validate(&doc);
            assert_eq!(report.errors.len(), 1);
            assert_eq!(report.errors[0].kind, ErrorKind::Structure);
        }
    }

    #[test]
    fn test_each_required_field_empty_yields_one_error() {
        for field in REQUIRED_FIELDS {
            let report = validate(&with_field(field, json!("")));
            assert_eq!(report.errors.len(), 1, "empty {}", field);
            assert_eq!(report.errors[0].kind, ErrorKind::MissingField);
            assert_eq!(report.errors[0].field.as_deref(), Some(field));
            assert!(report.errors[0].message.contains(field));
        }
    }

    #[test]
    fn test_each_required_field_omitted_yields_one_error() {
        for field in REQUIRED_FIELDS {
            let mut entry = valid_entry();
            entry.as_object_mut().unwrap().remove(field);

            let report = validate(&document_with(entry));
            assert_eq!(report.errors.len(), 1, "omitted {}", field);
            assert!(report.errors[0].message.contains(field));
        }
    }

    #[test]
    fn test_falsy_values_count_as_missing() {
        for value in [json!(null), json!(false), json!(0)] {
            let report = validate(&with_field("speaker", value));
            assert_eq!(report.errors.len(), 1);
            assert_eq!(report.errors[0].kind, ErrorKind::MissingField);
        }
    }

    #[test]
    fn test_non_string_location_is_unknown() {
        let report = validate(&with_field("location", json!(7)));
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].kind, ErrorKind::UnknownLocation);
        assert!(report.errors[0].message.contains("'7'"));
    }

    #[test]
    fn test_date_validation() {
        let report = validate(&with_field("date", json!("2024-02-30")));
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].kind, ErrorKind::InvalidDate);
        assert!(report.errors[0].message.contains("2024-02-30"));

        assert!(validate(&with_field("date", json!("2024-02-29"))).is_valid());
        assert!(!validate(&with_field("date", json!("2023-02-29"))).is_valid());
        assert!(!validate(&with_field("date", json!("2024-13-40"))).is_valid());
        assert!(!validate(&with_field("date", json!(20241215))).is_valid());
    }

    #[test]
    fn test_time_range_validation() {
        for time in ["10:00-10:00", "10:00-09:00", "9:00-10:00", "09:00~10:00"] {
            let report = validate(&with_field("time", json!(time)));
            assert_eq!(report.errors.len(), 1, "time {}", time);
            assert_eq!(report.errors[0].kind, ErrorKind::InvalidTimeRange);
        }
        assert!(validate(&with_field("time", json!("09:59-10:00"))).is_valid());
    }

    #[test]
    fn test_errors_accumulate_across_entries() {
        let mut second = valid_entry();
        second["location"] = json!("Hall Z");
        second["time"] = json!("11:00-10:00");
        let mut third = valid_entry();
        third["title"] = json!("");

        let doc = json!({
            "programs": [valid_entry(), second, third],
            "locations": ["Hall A", "all"],
            "categories": ["Keynote", {"color": "red"}]
        });

        let report = validate(&doc);
        let messages = report.messages();
        assert_eq!(messages.len(), 5);
        assert!(messages[0].starts_with("entry 2:"));
        assert!(messages[0].contains("Hall Z"));
        assert!(messages[1].starts_with("entry 2:"));
        assert!(messages[1].contains("11:00-10:00"));
        assert!(messages[2].starts_with("entry 3:"));
        assert!(messages[2].contains("title"));
        assert!(messages[3].starts_with("category 2:"));
        assert!(messages[3].contains("name"));
        assert!(messages[4].starts_with("category 2:"));
        assert!(messages[4].contains("'red'"));
    }

    #[test]
    fn test_category_color_fields() {
        let mut doc = document_with(valid_entry());
        doc["categories"] = json!([
            "Keynote",
            {
                "name": "AI",
                "color": "#3498db",
                "backgroundColor": "#12345",
                "borderColor": "#gggggg"
            }
        ]);

        let report = validate(&doc);
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.errors[0].field.as_deref(), Some("backgroundColor"));
        assert!(report.errors[0].message.contains("background color"));
        assert!(report.errors[0].message.contains("#12345"));
        assert_eq!(report.errors[1].field.as_deref(), Some("borderColor"));
        assert!(report.errors[1].message.contains("#gggggg"));
    }

    #[test]
    fn test_empty_color_is_treated_as_absent() {
        let mut doc = document_with(valid_entry());
        doc["categories"] = json!(["Keynote", {"name": "AI", "color": ""}]);
        assert!(validate(&doc).is_valid());
    }

    #[test]
    fn test_invalid_category_format() {
        let mut doc = document_with(valid_entry());
        doc["categories"] = json!(["Keynote", 42, null]);

        let report = validate(&doc);
        assert_eq!(report.errors.len(), 2);
        assert!(
            report
                .errors
                .iter()
                .all(|e| e.kind == ErrorKind::InvalidCategoryFormat)
        );
        assert_eq!(report.errors[0].message, "category 2: invalid category format");
        assert_eq!(report.errors[1].subject, Some(Subject::Category(3)));
    }

    #[test]
    fn test_all_sentinel_is_always_accepted() {
        let mut doc = with_field("location", json!("all"));
        doc["locations"] = json!(["Hall A"]);

        let report = validate(&doc);
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("entry 1"));
    }

    #[test]
    fn test_non_object_entry_misses_every_field() {
        let doc = json!({
            "programs": ["not an entry"],
            "locations": ["all"],
            "categories": []
        });
        let report = validate(&doc);
        assert_eq!(report.errors.len(), REQUIRED_FIELDS.len());
    }

    #[test]
    fn test_report_serializes_structured_errors() {
        let report = validate(&with_field("location", json!("Hall Z")));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["errors"][0]["kind"], "unknown_location");
        assert_eq!(json["errors"][0]["subject"]["type"], "entry");
        assert_eq!(json["errors"][0]["subject"]["index"], 1);
        assert_eq!(json["errors"][0]["field"], "location");
    }

    #[test]
    fn test_check_schedule_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let valid = dir.path().join("valid.json");
        std::fs::write(&valid, document_with(valid_entry()).to_string()).unwrap();

        let checked = check_schedule_file(&valid).unwrap();
        assert!(checked.report.is_valid());
        let document = checked.document.unwrap();
        assert_eq!(document.programs[0].title, "Opening");

        let invalid = dir.path().join("invalid.json");
        std::fs::write(
            &invalid,
            with_field("location", json!("Hall Z")).to_string(),
        )
        .unwrap();

        let checked = check_schedule_file(&invalid).unwrap();
        assert!(!checked.report.is_valid());
        assert!(checked.document.is_none());
    }

    #[test]
    fn test_numeric_id_loads_into_typed_model() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("program-schedule.json");
        std::fs::write(&path, with_field("id", json!(1)).to_string()).unwrap();

        let checked = check_schedule_file(&path).unwrap();
        assert!(checked.report.is_valid());
        let document = checked.document.unwrap();
        assert_eq!(document.programs[0].id, "1");
    }

    #[test]
    fn test_structured_text_fields_are_rejected() {
        let mut entry = valid_entry();
        entry["title"] = json!(["Opening", "Day"]);
        entry["speaker"] = json!({"name": "X"});

        let report = validate(&document_with(entry));
        assert_eq!(report.errors.len(), 2);
        assert!(report.errors.iter().all(|e| e.kind == ErrorKind::InvalidType));
        assert_eq!(report.errors[0].field.as_deref(), Some("title"));
        assert!(report.errors[0].message.starts_with("entry 1: 'title' must be text"));
        assert_eq!(report.errors[1].field.as_deref(), Some("speaker"));
    }

    #[test]
    fn test_structured_category_name_is_rejected() {
        let mut doc = document_with(valid_entry());
        doc["categories"] = json!(["Keynote", {"name": ["AI"]}]);

        let report = validate(&doc);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].kind, ErrorKind::InvalidType);
        assert_eq!(report.errors[0].subject, Some(Subject::Category(2)));
    }

    #[test]
    fn test_structured_location_names_are_rejected() {
        let mut doc = document_with(valid_entry());
        doc["locations"] = json!(["Hall A", {"name": "Hall B"}, null, "all"]);

        let report = validate(&doc);
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.errors[0].subject, Some(Subject::Location(2)));
        assert_eq!(report.errors[1].subject, Some(Subject::Location(3)));
        assert!(report.errors[1].message.starts_with("location 3:"));
    }

    #[test]
    fn test_accepted_documents_always_load() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("program-schedule.json");
        let mut entry = valid_entry();
        entry["location"] = json!(3);
        entry["category"] = json!(7);
        entry["affiliation"] = json!(true);
        let doc = json!({
            "programs": [entry],
            "locations": [3, "all"],
            "categories": [{"name": 7, "color": "#fff"}]
        });
        std::fs::write(&path, doc.to_string()).unwrap();

        let checked = check_schedule_file(&path).unwrap();
        assert!(checked.report.is_valid(), "{:?}", checked.report.messages());
        let document = checked.document.unwrap();
        assert_eq!(document.programs[0].location, "3");
        assert_eq!(document.venues(), vec!["3"]);
    }

    fn time_strategy() -> impl Strategy<Value = String> {
        (0u32..24, 0u32..60).prop_map(|(h, m)| format!("{:02}:{:02}", h, m))
    }

    proptest! {
        #[test]
        fn prop_validation_is_deterministic(
            location in "[A-Za-z ]{0,8}",
            time in "[0-9:-]{0,11}",
            date in "[0-9-]{0,10}",
        ) {
            let mut entry = valid_entry();
            entry["location"] = json!(location);
            entry["time"] = json!(time);
            entry["date"] = json!(date);
            let doc = document_with(entry);

            prop_assert_eq!(validate(&doc), validate(&doc));
        }

        #[test]
        fn prop_time_range_valid_iff_start_before_end(
            start in time_strategy(),
            end in time_strategy(),
        ) {
            let range = format!("{}-{}", start, end);
            let report = validate(&with_field("time", json!(range)));
            prop_assert_eq!(report.is_valid(), start < end);
        }
    }
}
