//! Splits a proxy string into raw tokens without validating them.
//!
//! Each stage consumes a prefix or splits on a fixed separator, so the whole
//! input is scanned a bounded number of times and never backtracks.

/// Where the credentials were found, if anywhere.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum Notation {
    /// `host:port`
    Endpoint,
    /// `user:pass@host:port`
    CredentialsPrefix,
    /// `host:port:user:pass`
    CredentialsSuffix,
}

#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Tokens<'a> {
    pub scheme: Option<&'a str>,
    pub host: &'a str,
    pub port: &'a str,
    pub credentials: Option<(&'a str, &'a str)>,
    pub notation: Notation,
}

/// Tokenizes already-trimmed input. `None` when the shape fits no notation.
pub fn tokenize(input: &str) -> Option<Tokens<'_>> {
    let (scheme, body) = split_scheme(input)?;
    if body.is_empty() || body.contains(char::is_whitespace) {
        return None;
    }
    let (credentials, endpoint) = split_credentials_prefix(body)?;
    match credentials {
        Some(creds) => {
            let (host, port) = split_endpoint(endpoint)?;
            Some(Tokens {
                scheme,
                host,
                port,
                credentials: Some(creds),
                notation: Notation::CredentialsPrefix,
            })
        }
        None => {
            let mut parts = endpoint.split(':');
            let host = parts.next()?;
            let port = parts.next()?;
            match (parts.next(), parts.next(), parts.next()) {
                (None, _, _) => Some(Tokens {
                    scheme,
                    host,
                    port,
                    credentials: None,
                    notation: Notation::Endpoint,
                }),
                (Some(user), Some(pass), None) => Some(Tokens {
                    scheme,
                    host,
                    port,
                    credentials: Some((user, pass)),
                    notation: Notation::CredentialsSuffix,
                }),
                _ => None,
            }
        }
    }
}

/// Separates a leading `scheme://` or `scheme<whitespace>` token from the body.
fn split_scheme(input: &str) -> Option<(Option<&str>, &str)> {
    if let Some((scheme, body)) = input.split_once("://") {
        if scheme.is_empty() || scheme.contains(char::is_whitespace) {
            return None;
        }
        return Some((Some(scheme), body));
    }
    match input.split_once(char::is_whitespace) {
        Some((scheme, body)) => Some((Some(scheme), body.trim_start())),
        None => Some((None, input)),
    }
}

/// Splits off a `user:pass@` prefix. More than one `@` is no match.
#[allow(clippy::type_complexity)]
fn split_credentials_prefix(body: &str) -> Option<(Option<(&str, &str)>, &str)> {
    let Some((auth, endpoint)) = body.split_once('@') else {
        return Some((None, body));
    };
    if endpoint.contains('@') {
        return None;
    }
    let (user, pass) = auth.split_once(':')?;
    if pass.contains(':') {
        return None;
    }
    Some((Some((user, pass)), endpoint))
}

/// Splits exactly `host:port`.
fn split_endpoint(endpoint: &str) -> Option<(&str, &str)> {
    let (host, port) = endpoint.split_once(':')?;
    if port.contains(':') {
        return None;
    }
    Some((host, port))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_endpoint() {
        let t = tokenize("10.0.0.1:8080").unwrap();
        assert_eq!(t.scheme, None);
        assert_eq!((t.host, t.port), ("10.0.0.1", "8080"));
        assert_eq!(t.credentials, None);
        assert_eq!(t.notation, Notation::Endpoint);
    }

    #[test]
    fn suffix_credentials() {
        let t = tokenize("socks5://h:1:u:p").unwrap();
        assert_eq!(t.scheme, Some("socks5"));
        assert_eq!(t.credentials, Some(("u", "p")));
        assert_eq!(t.notation, Notation::CredentialsSuffix);
    }

    #[test]
    fn prefix_credentials() {
        let t = tokenize("socks5 u:p@h:1").unwrap();
        assert_eq!(t.scheme, Some("socks5"));
        assert_eq!((t.host, t.port), ("h", "1"));
        assert_eq!(t.credentials, Some(("u", "p")));
        assert_eq!(t.notation, Notation::CredentialsPrefix);
    }

    #[test]
    fn whitespace_separator_may_repeat() {
        let t = tokenize("http \t h:1").unwrap();
        assert_eq!(t.scheme, Some("http"));
        assert_eq!(t.host, "h");
    }

    #[test]
    fn prefix_form_consumes_credentials_before_suffix() {
        // both positions filled is not a notation
        assert_eq!(tokenize("u:p@h:1:x:y"), None);
    }

    #[test]
    fn wrong_part_counts() {
        assert_eq!(tokenize("h"), None);
        assert_eq!(tokenize("h:1:u"), None);
        assert_eq!(tokenize("h:1:u:p:x"), None);
        assert_eq!(tokenize("u@h:1"), None);
        assert_eq!(tokenize("u:p:q@h:1"), None);
        assert_eq!(tokenize("u:p@v@h:1"), None);
        assert_eq!(tokenize("u:p@h"), None);
    }

    #[test]
    fn stray_whitespace() {
        assert_eq!(tokenize("hello world"), None);
        assert_eq!(tokenize("a b c:1"), None);
        assert_eq!(tokenize("socks5:// h:1"), None);
        assert_eq!(tokenize("sock s5://h:1"), None);
        assert_eq!(tokenize("socks5://"), None);
    }
}
