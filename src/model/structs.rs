use serde::{Deserialize, Serialize};

/// One line of a crop calendar.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScheduleEntry {
    pub date: String,
    pub task: String,
}

/// Body returned by the calendar endpoint.
///
/// `schedule: None` means the server had nothing to show; it is not an
/// error. An explicit JSON `null` reads the same as a missing key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScheduleResponse {
    #[serde(default)]
    pub crop: Option<String>,
    #[serde(default)]
    pub schedule: Option<Vec<ScheduleEntry>>,
}
