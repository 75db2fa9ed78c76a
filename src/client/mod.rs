//! Client module - posts calendar requests for both WASM and no-WASM environments
//!
//! Both clients implement `CalendarApi`; the no-WASM one uses reqwest, the
//! WASM one goes through the browser's fetch API via gloo_net.

#[cfg(feature = "no-wasm")]
pub mod request;

#[cfg(feature = "wasm")]
pub mod gloo;
