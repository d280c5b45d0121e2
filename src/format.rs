// Human-readable rendering of a collection schedule
use std::fmt::Write;

use chrono::NaiveDateTime;

use crate::alert::time_alert;
use crate::classify::classify;
use crate::types::ScheduleResponse;

/// Render the schedule for `uprn` in upstream order. `now` only affects the
/// same-day alerts.
pub fn format_schedule(uprn: &str, schedule: &ScheduleResponse, now: NaiveDateTime) -> String {
    if schedule.collections.is_empty() {
        return format!("No upcoming bin collections found for UPRN {uprn}");
    }

    let mut out = format!("Upcoming bin collections for UPRN {uprn}:\n\n");
    for record in &schedule.collections {
        let category = classify(&record.service);
        // writing to a String cannot fail
        let _ = write!(
            out,
            "📅 {} ({}){}\n   {} {} ({} bin)\n\n",
            record.date,
            record.day,
            time_alert(&record.date, now),
            category.glyph(),
            record.service,
            category,
        );
    }
    out
}
