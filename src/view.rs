//! Markup for every state the result container can be in.

use html_escape::encode_text;

use crate::model::ScheduleResponse;

pub const LOADING: &str = "Loading...";
pub const NO_SCHEDULE: &str = "No schedule available.";
pub const FETCH_ERROR: &str = "Error fetching calendar.";

/// Renders a parsed response. An absent schedule is the informational
/// message; a present one (even empty) is a heading plus list.
pub fn render_response(resp: &ScheduleResponse) -> String {
    let Some(schedule) = &resp.schedule else {
        return NO_SCHEDULE.to_string();
    };

    // a schedule without a crop renders a blank name, not "undefined"
    let crop = resp.crop.as_deref().unwrap_or_default();
    let mut html = format!("<h4>Crop Calendar for {}</h4><ul>", encode_text(crop));
    for entry in schedule {
        html.push_str(&format!(
            "<li>{} — {}</li>",
            encode_text(&entry.date),
            encode_text(&entry.task)
        ));
    }
    html.push_str("</ul>");
    html
}
