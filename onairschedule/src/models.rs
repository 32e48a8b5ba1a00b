//! Data models for the weekly schedule document
//!
//! A schedule document maps each of the seven weekday keys to an ordered
//! sequence of program slots. Typed values only exist after the
//! parse-and-validate step in [`ScheduleDocument::from_value`] succeeded,
//! so downstream code never re-checks field presence.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Canonical weekday keys of a schedule document
///
/// Variant order is schedule order (monday first) and drives the stable
/// serialization order of [`ScheduleDocument`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All seven days, monday first
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Canonical lowercase key used in the JSON document
    pub fn key(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }

    /// Map a `chrono` weekday onto the schedule key
    pub fn from_chrono(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single scheduled program entry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    /// Stable identifier of the program
    pub id: String,
    /// Display title pushed to the stream's "now playing" metadata
    pub title: String,
    /// Start of the slot, `HH:MM` 24-hour local time
    pub start_time: String,
    /// Length of the slot in minutes
    pub duration: f64,
    /// Ordered track references (URLs) used for source switching;
    /// empty when the slot carries no tracks
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tracks: Vec<String>,
}

impl Slot {
    /// Start of the slot in minutes since midnight.
    ///
    /// Returns `None` when `start_time` does not parse; slots coming out
    /// of [`ScheduleDocument::from_value`] always return `Some`.
    pub fn start_minutes(&self) -> Option<u32> {
        parse_hhmm(&self.start_time)
    }
}

/// Parse a `H:MM`/`HH:MM` 24-hour time into minutes since midnight
pub(crate) fn parse_hhmm(value: &str) -> Option<u32> {
    let (hh, mm) = value.split_once(':')?;
    if hh.is_empty() || hh.len() > 2 || mm.len() != 2 {
        return None;
    }
    if !hh.bytes().all(|b| b.is_ascii_digit()) || !mm.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hours: u32 = hh.parse().ok()?;
    let minutes: u32 = mm.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// A validated weekly schedule
///
/// Every canonical day maps to an ordered (possibly empty) sequence of
/// slots. Slot order within a day is declaration order, not chronological
/// order; start times are expected to be non-decreasing by convention but
/// this is not enforced.
///
/// Serialization always emits all seven day keys in monday-first order,
/// so the persisted file stays stable and diffable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleDocument(BTreeMap<Weekday, Vec<Slot>>);

impl ScheduleDocument {
    /// Parse and validate an untyped JSON value into a schedule document.
    ///
    /// This is the only way to obtain a `ScheduleDocument`; success
    /// guarantees that all seven days are present as sequences and that
    /// every slot carries a non-empty `id` and `title`, a well-formed
    /// `startTime` and a positive numeric `duration`.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let root = value.as_object().ok_or(ValidationError::NotAnObject)?;

        let mut days = BTreeMap::new();
        for day in Weekday::ALL {
            let entries = match root.get(day.key()) {
                Some(Value::Array(entries)) => entries,
                _ => return Err(ValidationError::MissingOrNotSequence { day }),
            };

            let mut slots = Vec::with_capacity(entries.len());
            for (index, entry) in entries.iter().enumerate() {
                slots.push(parse_slot(day, index, entry)?);
            }
            days.insert(day, slots);
        }

        Ok(Self(days))
    }

    /// Slots for the given day, in declaration order.
    ///
    /// Returns an empty slice if the day is absent; validated documents
    /// always carry all seven days.
    pub fn slots_for(&self, day: Weekday) -> &[Slot] {
        self.0.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate the days in monday-first order
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[Slot])> {
        self.0.iter().map(|(day, slots)| (*day, slots.as_slice()))
    }

    /// Total number of slots across the week
    pub fn slot_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
}

fn parse_slot(day: Weekday, index: usize, entry: &Value) -> Result<Slot, ValidationError> {
    let missing = |field: &'static str| ValidationError::MissingField { day, index, field };

    let id = entry.get("id").and_then(Value::as_str).unwrap_or("");
    if id.is_empty() {
        return Err(missing("id"));
    }

    let title = entry.get("title").and_then(Value::as_str).unwrap_or("");
    if title.is_empty() {
        return Err(missing("title"));
    }

    let start_time = entry.get("startTime").and_then(Value::as_str).unwrap_or("");
    if start_time.is_empty() {
        return Err(missing("startTime"));
    }
    if parse_hhmm(start_time).is_none() {
        return Err(ValidationError::BadTimeFormat {
            day,
            index,
            value: start_time.to_string(),
        });
    }

    let duration = entry
        .get("duration")
        .and_then(Value::as_f64)
        .filter(|minutes| *minutes > 0.0)
        .ok_or_else(|| missing("duration"))?;

    let tracks = entry
        .get("tracks")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Ok(Slot {
        id: id.to_string(),
        title: title.to_string(),
        start_time: start_time.to_string(),
        duration,
        tracks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn week(monday: Value) -> Value {
        json!({
            "monday": monday,
            "tuesday": [],
            "wednesday": [],
            "thursday": [],
            "friday": [],
            "saturday": [],
            "sunday": [],
        })
    }

    #[test]
    fn accepts_valid_document() {
        let value = week(json!([{
            "id": "1",
            "title": "Morning Show",
            "startTime": "08:00",
            "duration": 120,
            "tracks": ["http://tracks/morning.mp3"]
        }]));

        let document = ScheduleDocument::from_value(&value).unwrap();
        assert_eq!(document.slot_count(), 1);

        let slots = document.slots_for(Weekday::Monday);
        assert_eq!(slots[0].id, "1");
        assert_eq!(slots[0].title, "Morning Show");
        assert_eq!(slots[0].start_minutes(), Some(480));
        assert_eq!(slots[0].duration, 120.0);
        assert_eq!(slots[0].tracks, vec!["http://tracks/morning.mp3"]);
        assert!(document.slots_for(Weekday::Sunday).is_empty());
    }

    #[test]
    fn rejects_non_object() {
        let err = ScheduleDocument::from_value(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(err, ValidationError::NotAnObject);
    }

    #[test]
    fn rejects_missing_day() {
        let mut value = week(json!([]));
        value.as_object_mut().unwrap().remove("friday");

        let err = ScheduleDocument::from_value(&value).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingOrNotSequence {
                day: Weekday::Friday
            }
        );
    }

    #[test]
    fn rejects_non_sequence_day() {
        let mut value = week(json!([]));
        value["tuesday"] = json!({"not": "a list"});

        let err = ScheduleDocument::from_value(&value).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingOrNotSequence {
                day: Weekday::Tuesday
            }
        );
    }

    #[test]
    fn rejects_empty_id() {
        let value = week(json!([{
            "id": "",
            "title": "Show",
            "startTime": "08:00",
            "duration": 60
        }]));

        let err = ScheduleDocument::from_value(&value).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField {
                day: Weekday::Monday,
                index: 0,
                field: "id"
            }
        );
    }

    #[test]
    fn rejects_missing_title() {
        let value = week(json!([{
            "id": "1",
            "startTime": "08:00",
            "duration": 60
        }]));

        let err = ScheduleDocument::from_value(&value).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField {
                day: Weekday::Monday,
                index: 0,
                field: "title"
            }
        );
    }

    #[test]
    fn rejects_bad_start_time() {
        for bad in ["24:00", "12:60", "8:5", "aa:bb", "08-00", "0800"] {
            let value = week(json!([{
                "id": "1",
                "title": "Show",
                "startTime": bad,
                "duration": 60
            }]));

            let err = ScheduleDocument::from_value(&value).unwrap_err();
            assert_eq!(
                err,
                ValidationError::BadTimeFormat {
                    day: Weekday::Monday,
                    index: 0,
                    value: bad.to_string()
                },
                "expected '{bad}' to be rejected"
            );
        }
    }

    #[test]
    fn accepts_single_digit_hour() {
        let value = week(json!([{
            "id": "1",
            "title": "Early",
            "startTime": "8:05",
            "duration": 30
        }]));

        let document = ScheduleDocument::from_value(&value).unwrap();
        assert_eq!(
            document.slots_for(Weekday::Monday)[0].start_minutes(),
            Some(485)
        );
    }

    #[test]
    fn rejects_non_numeric_duration() {
        for bad in [json!("sixty"), json!(null), json!(0), json!(-30)] {
            let value = week(json!([{
                "id": "1",
                "title": "Show",
                "startTime": "08:00",
                "duration": bad
            }]));

            let err = ScheduleDocument::from_value(&value).unwrap_err();
            assert_eq!(
                err,
                ValidationError::MissingField {
                    day: Weekday::Monday,
                    index: 0,
                    field: "duration"
                }
            );
        }
    }

    #[test]
    fn reports_slot_index() {
        let value = week(json!([
            {"id": "1", "title": "Ok", "startTime": "08:00", "duration": 60},
            {"id": "2", "title": "Broken", "startTime": "late", "duration": 60}
        ]));

        let err = ScheduleDocument::from_value(&value).unwrap_err();
        assert_eq!(
            err,
            ValidationError::BadTimeFormat {
                day: Weekday::Monday,
                index: 1,
                value: "late".to_string()
            }
        );
    }

    #[test]
    fn serializes_days_in_week_order() {
        let document = ScheduleDocument::from_value(&week(json!([]))).unwrap();
        let text = serde_json::to_string(&document).unwrap();

        let positions: Vec<usize> = Weekday::ALL
            .iter()
            .map(|day| text.find(&format!("\"{}\"", day.key())).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn weekday_from_chrono_maps_all_days() {
        assert_eq!(Weekday::from_chrono(chrono::Weekday::Mon), Weekday::Monday);
        assert_eq!(Weekday::from_chrono(chrono::Weekday::Sun), Weekday::Sunday);
    }

    #[test]
    fn parse_hhmm_bounds() {
        assert_eq!(parse_hhmm("00:00"), Some(0));
        assert_eq!(parse_hhmm("23:59"), Some(1439));
        assert_eq!(parse_hhmm("24:00"), None);
        assert_eq!(parse_hhmm("7:30"), Some(450));
        assert_eq!(parse_hhmm(""), None);
        assert_eq!(parse_hhmm(":30"), None);
    }
}
