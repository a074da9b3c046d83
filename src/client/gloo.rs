//! WASM HTTP client implementation using gloo_net
//!
//! Speaks the same endpoints as the reqwest client, but through the browser's
//! fetch API so the core can back a WASM front end.

use gloo_net::http::Request;
use serde_json::Value;
use web_sys::{RequestCredentials, RequestMode};

use crate::error::Result;
use crate::interface::{BoardApi, HttpClient};
use crate::model::dtos::{HttpReply, RosterParams};

/// HTTP client for WASM environments using gloo_net
#[derive(Debug, Clone)]
pub struct WasmClient {
    base_url: String,
}

impl HttpClient for WasmClient {
    async fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl WasmClient {
    fn roster_url(&self, params: &RosterParams<'_>, action: &str) -> String {
        format!(
            "{}/activities/{}/{}?email={}",
            self.base_url,
            urlencoding::encode(params.activity),
            action,
            urlencoding::encode(params.email)
        )
    }

    async fn post_roster(&self, url: &str) -> Result<HttpReply> {
        let resp = Request::post(url)
            .mode(RequestMode::Cors)
            .credentials(RequestCredentials::Include)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = resp.status();
        let body = resp.json::<Value>().await?;

        Ok(HttpReply {
            status,
            ok: resp.ok(),
            body,
        })
    }
}

impl BoardApi for WasmClient {
    async fn list_activities(&self) -> Result<HttpReply> {
        let url = format!("{}/activities", self.base_url);
        let resp = Request::get(&url)
            .mode(RequestMode::Cors)
            .credentials(RequestCredentials::Include)
            .header("Accept", "application/json")
            .send()
            .await?;

        log::debug!("GET /activities status: {}", resp.status());

        if !resp.ok() {
            return Ok(HttpReply {
                status: resp.status(),
                ok: false,
                body: Value::Null,
            });
        }

        let body = resp.json::<Value>().await?;

        Ok(HttpReply {
            status: resp.status(),
            ok: true,
            body,
        })
    }

    async fn sign_up(&self, params: RosterParams<'_>) -> Result<HttpReply> {
        self.post_roster(&self.roster_url(&params, "signup")).await
    }

    async fn unregister(&self, params: RosterParams<'_>) -> Result<HttpReply> {
        self.post_roster(&self.roster_url(&params, "unregister"))
            .await
    }
}
