pub mod descriptor;
pub mod error;
pub mod settings;
pub mod wire;

pub use descriptor::ProxyDescriptor;
pub use error::{Error, Result};
pub use settings::ProxySettings;
pub use wire::ProxyParseResponse;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(
    Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Copy, Clone, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    #[default]
    Http,
    Socks4,
    Socks5,
}

impl Scheme {
    pub const ALL: [Scheme; 3] = [Scheme::Http, Scheme::Socks4, Scheme::Socks5];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Socks4 => "socks4",
            Scheme::Socks5 => "socks5",
        }
    }

    /// Resolves a scheme token as written in a pasted proxy string.
    ///
    /// Matching is case-insensitive and by prefix, so `HTTPS` resolves to
    /// [`Scheme::Http`] and `socks5h` to [`Scheme::Socks5`]. Tokens must be
    /// ASCII alphanumeric; anything else is rejected.
    pub fn from_token(token: &str) -> Option<Scheme> {
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return None;
        }
        let lower = token.to_ascii_lowercase();
        if lower.starts_with("socks4") {
            Some(Scheme::Socks4)
        } else if lower.starts_with("socks5") {
            Some(Scheme::Socks5)
        } else if lower.starts_with("http") {
            Some(Scheme::Http)
        } else {
            None
        }
    }

    pub fn supports_auth(&self) -> bool {
        !matches!(self, Scheme::Socks4)
    }
}

impl FromStr for Scheme {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "http" => Ok(Scheme::Http),
            "socks4" => Ok(Scheme::Socks4),
            "socks5" => Ok(Scheme::Socks5),
            _ => Err(Error::SchemeNotSupported(value.to_owned())),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: String, password: String) -> Credentials {
        Credentials { username, password }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}
