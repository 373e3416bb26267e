//! Transformation of the decoded datasvc blob into the catalogue schema.
//!
//! The upstream structure is array-heavy: a `data` array of course arrays,
//! each carrying section arrays whose meetings are `[day, start_sec,
//! end_sec, room]` rows. This flattens each section into one record with a
//! merged day string and the earliest start / latest end, which is the
//! shape the catalogue loader expects.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{DayOfWeek, DaySet};

/// One flattened section record as written to the data file.
///
/// `crn`, `days`, `start`, and `end` are what the engine consumes; the rest
/// are display fields retained for rendering layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapedSection {
    pub crn: i64,
    pub days: String,
    pub start: String,
    pub end: String,
    pub location: String,
    pub section: String,
    pub instructor: String,
    pub title: String,
}

/// Upstream day numbers are 1..=7, Sunday first.
fn day_from_number(n: u64) -> Option<DayOfWeek> {
    match n {
        1 => Some(DayOfWeek::Sunday),
        2 => Some(DayOfWeek::Monday),
        3 => Some(DayOfWeek::Tuesday),
        4 => Some(DayOfWeek::Wednesday),
        5 => Some(DayOfWeek::Thursday),
        6 => Some(DayOfWeek::Friday),
        7 => Some(DayOfWeek::Saturday),
        _ => None,
    }
}

fn seconds_to_hhmm(seconds: u64) -> String {
    let minutes = seconds / 60;
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Convert the decoded blob into course code → section records.
///
/// Sections with no real meeting rows (online/asynchronous) are dropped,
/// as are malformed rows and rows with day numbers outside 1..=7.
pub fn transform(blob: &Value) -> Result<BTreeMap<String, Vec<ScrapedSection>>> {
    let data = blob
        .get("data")
        .and_then(Value::as_array)
        .context("decoded payload has no data array")?;

    let mut catalogue: BTreeMap<String, Vec<ScrapedSection>> = BTreeMap::new();
    for course_entry in data {
        let Some(course_fields) = course_entry.as_array() else {
            continue;
        };
        let Some(course_code) = course_fields.first().and_then(Value::as_str) else {
            continue;
        };

        // Elements from index 3 onward are section records.
        for raw_section in course_fields.iter().skip(3) {
            if let Some(section) = flatten_section(course_code, raw_section) {
                catalogue
                    .entry(course_code.to_ascii_uppercase())
                    .or_default()
                    .push(section);
            }
        }
    }
    Ok(catalogue)
}

/// Section record layout: course, section id, crn, units, instructor,
/// numeric flags we ignore, title, meetings.
fn flatten_section(course_code: &str, raw_section: &Value) -> Option<ScrapedSection> {
    let fields = raw_section.as_array()?;
    if fields.len() < 7 {
        log::warn!("skipping malformed section record in {course_code}");
        return None;
    }

    let crn = as_i64(&fields[2])?;
    let meetings = fields[fields.len() - 1].as_array()?;
    if meetings.is_empty() {
        // Online sections carry no meetings.
        return None;
    }

    let mut days = DaySet::EMPTY;
    let mut starts: Vec<u64> = Vec::new();
    let mut ends: Vec<u64> = Vec::new();
    let mut room = String::new();
    for meeting in meetings {
        let Some(row) = meeting.as_array() else {
            continue;
        };
        if row.len() < 4 {
            continue; // malformed row
        }
        let Some(day_number) = row[0].as_u64() else {
            continue;
        };
        let Some(day) = day_from_number(day_number) else {
            log::warn!("skipping unknown day number {day_number} in {course_code} crn {crn}");
            continue;
        };
        let (Some(start_sec), Some(end_sec)) = (row[1].as_u64(), row[2].as_u64()) else {
            continue;
        };
        days.insert(day);
        starts.push(start_sec);
        ends.push(end_sec);
        let row_room = as_text(&row[3]);
        if !row_room.is_empty() {
            room = row_room;
        }
    }

    // Still empty after filtering means no real time slots.
    let start = starts.iter().min()?;
    let end = ends.iter().max()?;

    Some(ScrapedSection {
        crn,
        days: days.to_string(),
        start: seconds_to_hhmm(*start),
        end: seconds_to_hhmm(*end),
        location: room,
        section: as_text(&fields[1]),
        instructor: as_text(&fields[4]),
        title: as_text(&fields[fields.len() - 2]),
    })
}
