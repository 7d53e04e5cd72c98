use crate::{Credentials, Error, Result, Scheme};
use std::fmt;

/// A proxy endpoint recognized in freeform text.
///
/// Built fresh for every parse and never partially populated: a descriptor
/// always carries a well-formed host, an in-range port, and either both
/// credentials or neither.
#[derive(Debug, Eq, PartialEq, Hash, Clone)]
pub struct ProxyDescriptor {
    scheme: Scheme,
    host: String,
    port: u16,
    credentials: Option<Credentials>,
}

impl ProxyDescriptor {
    pub fn new(scheme: Scheme, host: &str, port: u16) -> Result<ProxyDescriptor> {
        if !is_valid_host(host) {
            return Err(Error::InvalidHost(host.to_owned()));
        }
        Ok(ProxyDescriptor {
            scheme,
            host: host.to_owned(),
            port,
            credentials: None,
        })
    }

    pub fn new_with_credentials(
        scheme: Scheme,
        host: &str,
        port: u16,
        username: &str,
        password: &str,
    ) -> Result<ProxyDescriptor> {
        if username.is_empty() || password.is_empty() {
            return Err(Error::IncompleteCredentials);
        }
        let mut descriptor = ProxyDescriptor::new(scheme, host, port)?;
        descriptor.credentials = Some(Credentials::new(
            username.to_owned(),
            password.to_owned(),
        ));
        Ok(descriptor)
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn username(&self) -> &str {
        self.credentials.as_ref().map_or("", |c| c.username())
    }

    pub fn password(&self) -> &str {
        self.credentials.as_ref().map_or("", |c| c.password())
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    // host:port:user:pass, the format of the "copy proxy" action
    pub fn copy_text(&self) -> String {
        match &self.credentials {
            Some(creds) => format!(
                "{}:{}:{}:{}",
                self.host,
                self.port,
                creds.username(),
                creds.password()
            ),
            None => format!("{}:{}", self.host, self.port),
        }
    }
}

impl fmt::Display for ProxyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.credentials {
            Some(creds) => write!(
                f,
                "{}://{}:{}@{}:{}",
                self.scheme,
                creds.username(),
                creds.password(),
                self.host,
                self.port
            ),
            None => write!(f, "{}://{}:{}", self.scheme, self.host, self.port),
        }
    }
}

/// One or more of letters, digits, `.` and `-`, and not made of dots alone.
pub fn is_valid_host(host: &str) -> bool {
    !host.is_empty()
        && host
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'.' || b == b'-')
        && !host.bytes().all(|b| b == b'.')
}

pub fn parse_port(port: &str) -> Option<u16> {
    if port.is_empty() || port.len() > 5 || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // five digits always fit in u32
    let value: u32 = port.parse().ok()?;
    u16::try_from(value).ok()
}
