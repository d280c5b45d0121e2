// Same-day collection warnings
use chrono::{Datelike, NaiveDateTime, Timelike};

pub const DATE_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

pub const SOON: &str = " ⚠️ Collection is soon (around 9AM)!";
pub const MAY_HAVE_HAPPENED: &str = " ⚠️ Collection may have already happened (around 9AM)!";

/// Alert text to append to a collection's date line, or `""` when the
/// collection is not today or the date cannot be parsed.
pub fn time_alert(date: &str, now: NaiveDateTime) -> &'static str {
    let Ok(collection) = NaiveDateTime::parse_from_str(date, DATE_FORMAT) else {
        return "";
    };

    if collection.year() != now.year() || collection.ordinal() != now.ordinal() {
        return "";
    }

    match now.hour() {
        7 | 8 => SOON,
        h if h >= 9 => MAY_HAVE_HAPPENED,
        _ => "",
    }
}
