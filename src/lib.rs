pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod interface;
pub mod model;
pub mod view;

#[cfg(feature = "wasm")]
pub mod logging;

pub use app::{CalendarHandler, SubmitOutcome};
pub use config::CalendarConfig;
pub use model::{FormPayload, ScheduleEntry, ScheduleResponse};

#[cfg(feature = "no-wasm")]
pub use client::request::NoWasmClient;
#[cfg(feature = "wasm")]
pub use client::gloo::WasmClient;
