pub mod app;
pub mod client;
pub mod error;
pub mod interface;
pub mod message;
pub mod model;
pub mod normalize;
pub mod view;

#[cfg(feature = "no-wasm")]
pub use reqwest::Client;
#[cfg(feature = "no-wasm")]
pub use tokio;
