use crate::descriptor::parse_port;
use crate::{ProxyDescriptor, Result, Scheme};
use serde::{Deserialize, Serialize};

/// Parse result as returned by the backend's `parseProxyString` call.
///
/// The backend answers `{}` for empty input and `{"ok": false, "error": ..}`
/// when its own parse fails, so every field defaults.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyParseResponse {
    pub ok: bool,
    #[serde(rename = "type")]
    pub proxy_type: String,
    pub host: String,
    pub port: String,
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProxyParseResponse {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// A username without a password (or the reverse) maps to `None`.
    pub fn into_descriptor(self) -> Option<ProxyDescriptor> {
        if !self.ok {
            return None;
        }
        let scheme = if self.proxy_type.trim().is_empty() {
            Scheme::Http
        } else {
            Scheme::from_token(self.proxy_type.trim())?
        };
        let host = self.host.trim();
        let port = parse_port(self.port.trim())?;
        let user = self.username.trim();
        let pass = self.password.trim();
        match (user.is_empty(), pass.is_empty()) {
            (true, true) => ProxyDescriptor::new(scheme, host, port).ok(),
            (false, false) => {
                ProxyDescriptor::new_with_credentials(scheme, host, port, user, pass).ok()
            }
            _ => None,
        }
    }
}
