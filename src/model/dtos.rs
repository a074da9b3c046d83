use serde_json::Value;

/// Common parameters for signup/unregister requests
#[derive(Debug, Clone)]
pub struct RosterParams<'a> {
    pub activity: &'a str,
    pub email: &'a str,
}

/// Decoded HTTP exchange as seen by the application layer. `body` is
/// `Value::Null` when the endpoint short-circuits before parsing (listing
/// requests with a non-2xx status).
#[derive(Debug, Clone)]
pub struct HttpReply {
    pub status: u16,
    pub ok: bool,
    pub body: Value,
}

impl HttpReply {
    /// Server-provided success text (`message` field).
    pub fn message(&self) -> Option<&str> {
        self.body["message"].as_str()
    }

    /// Server-provided error text (`detail` field).
    pub fn detail(&self) -> Option<&str> {
        self.body["detail"].as_str()
    }
}
