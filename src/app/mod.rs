//! Application module - orchestrates the fetch/render/refresh cycle and the
//! signup and unregister flows on top of a [`crate::interface::BoardApi`]
//! transport.
//!
//! Only built for no-WASM targets: a WASM front end drives the
//! platform-neutral `normalize`/`view`/`message` modules directly from its
//! own event loop.

#[cfg(feature = "no-wasm")]
pub mod request;
#[cfg(feature = "no-wasm")]
pub use request::*;
