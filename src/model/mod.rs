pub mod dtos;
pub mod structs;

pub use dtos::FormPayload;
pub use structs::{ScheduleEntry, ScheduleResponse};
