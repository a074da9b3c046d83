//! No-WASM HTTP client implementation using reqwest

use reqwest::Client;
use serde_json::Value;

use crate::error::Result;
use crate::interface::{BoardApi, HttpClient};
use crate::model::dtos::{HttpReply, RosterParams};

/// HTTP client for no-WASM environments using reqwest
#[derive(Debug, Clone)]
pub struct NoWasmClient {
    client: Client,
    base_url: String,
}

impl HttpClient for NoWasmClient {
    async fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl NoWasmClient {
    /// Wrap an existing reqwest client, e.g. one with custom timeouts.
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn roster_url(&self, activity: &str, action: &str) -> String {
        format!(
            "{}/activities/{}/{}",
            self.base_url,
            urlencoding::encode(activity),
            action
        )
    }
}

impl BoardApi for NoWasmClient {
    async fn list_activities(&self) -> Result<HttpReply> {
        let url = format!("{}/activities", self.base_url);
        let resp = self.client.get(&url).send().await?;
        let status = resp.status();

        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "fetch /activities failed");
            return Ok(HttpReply {
                status: status.as_u16(),
                ok: false,
                body: Value::Null,
            });
        }

        let body = resp.json::<Value>().await?;
        tracing::debug!(?body, "raw /activities response");

        Ok(HttpReply {
            status: status.as_u16(),
            ok: true,
            body,
        })
    }

    async fn sign_up(&self, params: RosterParams<'_>) -> Result<HttpReply> {
        let url = self.roster_url(params.activity, "signup");
        let resp = self
            .client
            .post(&url)
            .query(&[("email", params.email)])
            .send()
            .await?;

        let status = resp.status();
        let body = resp.json::<Value>().await?;

        Ok(HttpReply {
            status: status.as_u16(),
            ok: status.is_success(),
            body,
        })
    }

    async fn unregister(&self, params: RosterParams<'_>) -> Result<HttpReply> {
        let url = self.roster_url(params.activity, "unregister");
        let resp = self
            .client
            .post(&url)
            .query(&[("email", params.email)])
            .send()
            .await?;

        let status = resp.status();
        let body = resp.json::<Value>().await?;

        Ok(HttpReply {
            status: status.as_u16(),
            ok: status.is_success(),
            body,
        })
    }
}
