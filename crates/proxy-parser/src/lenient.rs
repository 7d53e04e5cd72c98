//! The forgiving parse the backend runs for "paste from clipboard".
//!
//! Unlike [`crate::ProxyParser`] it never rejects input: it strips whitespace
//! and control characters, guesses the scheme from typos such as `s5://` or
//! `ocks5://`, and pulls the first run of digits out of the port. Validation
//! happens later, when the response is mapped onto a descriptor.

use profile_proxy_common::{ProxyParseResponse, Result, Scheme};

pub fn parse(text: &str) -> ProxyParseResponse {
    let text: String = text
        .chars()
        .filter(|&c| !c.is_control() && !c.is_whitespace() && !is_format(c))
        .collect();
    if text.is_empty() {
        return ProxyParseResponse::default();
    }

    let (scheme, body) = match text.split_once("://") {
        Some((token, body)) if is_scheme_token(token) => (guess_scheme(token), body),
        _ => (Scheme::Http, text.as_str()),
    };

    let mut res = ProxyParseResponse {
        ok: true,
        proxy_type: scheme.as_str().to_owned(),
        ..Default::default()
    };
    let port;
    if let Some((auth, location)) = body.rsplit_once('@') {
        match auth.split_once(':') {
            Some((user, pass)) => {
                res.username = user.to_owned();
                res.password = pass.to_owned();
            }
            None => res.username = auth.to_owned(),
        }
        match location.split_once(':') {
            Some((host, rest)) => {
                res.host = host.to_owned();
                port = rest;
            }
            None => {
                res.host = location.to_owned();
                port = "";
            }
        }
    } else {
        let parts: Vec<&str> = body.split(':').collect();
        res.host = parts[0].to_owned();
        port = parts.get(1).copied().unwrap_or("");
        match parts.len() {
            4 => {
                res.username = parts[2].to_owned();
                res.password = parts[3].to_owned();
            }
            3 => res.username = parts[2].to_owned(),
            _ => {}
        }
    }
    res.port = first_digits(port).to_owned();
    res
}

/// Runs [`parse`] and encodes the result the way the backend returns it.
pub fn parse_to_json(text: &str) -> Result<String> {
    let res = parse(text);
    if !res.ok {
        return Ok("{}".to_owned());
    }
    res.to_json()
}

/// Unicode format characters (category Cf), e.g. zero-width spaces and the BOM.
fn is_format(c: char) -> bool {
    matches!(
        c,
        '\u{00ad}'
            | '\u{0600}'..='\u{0605}'
            | '\u{061c}'
            | '\u{06dd}'
            | '\u{070f}'
            | '\u{08e2}'
            | '\u{180e}'
            | '\u{200b}'..='\u{200f}'
            | '\u{202a}'..='\u{202e}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206f}'
            | '\u{feff}'
            | '\u{fff9}'..='\u{fffb}'
            | '\u{110bd}'
            | '\u{110cd}'
            | '\u{1bca0}'..='\u{1bca3}'
            | '\u{1d173}'..='\u{1d17a}'
            | '\u{e0001}'
            | '\u{e0020}'..='\u{e007f}'
    )
}

fn is_scheme_token(token: &str) -> bool {
    !token.is_empty()
        && token
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'.' || b == b'-')
}

fn guess_scheme(token: &str) -> Scheme {
    let token = token.to_ascii_lowercase();
    let has_any = |needles: &[&str]| needles.iter().any(|n| token.contains(n));
    if token.contains('5') {
        Scheme::Socks5
    } else if token.contains('4') {
        Scheme::Socks4
    } else if has_any(&["tp", "ht", "web", "ssl"]) {
        Scheme::Http
    } else if has_any(&["ck", "so", "ox"]) {
        Scheme::Socks5
    } else {
        Scheme::Http
    }
}

fn first_digits(s: &str) -> &str {
    let Some(start) = s.find(|c: char| c.is_ascii_digit()) else {
        return "";
    };
    let rest = &s[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    &rest[..end]
}
