use crate::{ProxyDescriptor, Scheme};
use serde::{Deserialize, Serialize};

/// The proxy record stored with a profile and exchanged with the backend.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub enabled: bool,
    #[serde(rename = "type")]
    pub proxy_type: Scheme,
    pub host: String,
    pub port: Option<u16>,
    pub username: String,
    pub password: String,
}

impl ProxySettings {
    /// Label for the profile table, e.g. `SOCKS5 203.0.113.5:1080 [AUTH]`.
    pub fn summary(&self) -> String {
        let host = self.host.trim();
        let port = match self.port {
            Some(port) if self.enabled && !host.is_empty() && port != 0 => port,
            _ => return String::new(),
        };
        let base = format!("{} {}:{}", self.proxy_type.as_str().to_uppercase(), host, port);
        if self.has_auth() {
            base + " [AUTH]"
        } else {
            base
        }
    }

    pub fn has_auth(&self) -> bool {
        !self.username.trim().is_empty() || !self.password.trim().is_empty()
    }

    pub fn proxy_url(&self) -> Option<String> {
        let host = self.host.trim();
        let port = self.port.filter(|&p| p != 0)?;
        if host.is_empty() {
            return None;
        }
        let user = self.username.trim();
        let pass = self.password.trim();
        if !user.is_empty() && !pass.is_empty() {
            Some(format!("{}://{}:{}@{}:{}", self.proxy_type, user, pass, host, port))
        } else {
            Some(format!("{}://{}:{}", self.proxy_type, host, port))
        }
    }
}

impl From<&ProxyDescriptor> for ProxySettings {
    fn from(descriptor: &ProxyDescriptor) -> Self {
        ProxySettings {
            enabled: true,
            proxy_type: descriptor.scheme(),
            host: descriptor.host().to_owned(),
            port: Some(descriptor.port()),
            username: descriptor.username().to_owned(),
            password: descriptor.password().to_owned(),
        }
    }
}
