//! Active-slot resolution
//!
//! Determines which scheduled program is on air at a given local time.

use crate::models::{ScheduleDocument, Slot, Weekday};
use chrono::{Datelike, NaiveDateTime, Timelike};

/// Return the slot on air at `now`, if any.
///
/// The probe maps `now` to its weekday and minute of day, then returns
/// the first slot in the day's declared order whose half-open window
/// `[start, start + duration)` contains that minute. Declaration order
/// acts as priority when windows overlap.
///
/// Windows are evaluated in plain minutes-since-midnight arithmetic: a
/// slot whose window extends past midnight (`start + duration > 1440`)
/// is not wrapped onto the next day, so the portion after `23:59` never
/// matches. See DESIGN.md for the rationale.
pub fn active_slot(document: &ScheduleDocument, now: NaiveDateTime) -> Option<&Slot> {
    let day = Weekday::from_chrono(now.weekday());
    let minute = f64::from(now.hour() * 60 + now.minute());

    document.slots_for(day).iter().find(|slot| {
        let Some(start) = slot.start_minutes() else {
            return false;
        };
        let start = f64::from(start);
        minute >= start && minute < start + slot.duration
    })
}
