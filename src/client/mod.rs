//! Client module - HTTP transports for both WASM and no-WASM environments
//!
//! Both implementations speak the same [`crate::interface::BoardApi`] surface;
//! the no-WASM side uses reqwest, the WASM side uses gloo_net over the
//! browser's fetch API.

#[cfg(feature = "no-wasm")]
pub mod request;

#[cfg(feature = "wasm")]
pub mod gloo;
