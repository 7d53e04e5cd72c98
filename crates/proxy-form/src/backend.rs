use crate::{PasteOutcome, ProxyForm};
use async_trait::async_trait;
use log::{debug, warn};
use profile_proxy_common::{Error, ProxyParseResponse, Result};
use profile_proxy_parser::lenient;
use std::future::Future;
use std::time::Duration;
use tokio::time;

/// The native side of the RPC bridge, as far as the proxy form needs it.
#[async_trait]
pub trait ProxyBackend {
    async fn clipboard_text(&self) -> Result<String>;
    async fn parse_proxy_string(&self, text: &str) -> Result<String>;
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct BackendConfig {
    timeout: Duration,
}

impl BackendConfig {
    pub fn new(timeout: Duration) -> BackendConfig {
        BackendConfig { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        BackendConfig::new(Duration::from_secs(5))
    }
}

/// Serves a fixed clipboard and parses in-process with the lenient parser.
#[derive(Debug, Clone, Default)]
pub struct InProcessBackend {
    clipboard: String,
}

impl InProcessBackend {
    pub fn new(clipboard: String) -> InProcessBackend {
        InProcessBackend { clipboard }
    }
}

#[async_trait]
impl ProxyBackend for InProcessBackend {
    async fn clipboard_text(&self) -> Result<String> {
        Ok(self.clipboard.clone())
    }

    async fn parse_proxy_string(&self, text: &str) -> Result<String> {
        lenient::parse_to_json(text)
    }
}

impl ProxyForm {
    /// The "paste from clipboard" button: the backend reads the clipboard and
    /// parses it, and a usable result is applied like a local paste.
    pub async fn paste_from_backend<B: ProxyBackend + Sync>(
        &mut self,
        backend: &B,
        config: &BackendConfig,
    ) -> Result<PasteOutcome> {
        let text = with_timeout(config, backend.clipboard_text()).await?;
        debug!("Clipboard holds {} bytes", text.len());
        let json = with_timeout(config, backend.parse_proxy_string(&text)).await?;
        let response = ProxyParseResponse::from_json(&json)?;
        if let Some(err) = &response.error {
            warn!("Backend failed to parse proxy: {}", err);
        }
        match response.into_descriptor() {
            Some(descriptor) => {
                self.apply_proxy(&descriptor);
                Ok(PasteOutcome::Applied(descriptor))
            }
            None => {
                debug!("Clipboard content is not a usable proxy");
                Ok(PasteOutcome::Unrecognized)
            }
        }
    }
}

async fn with_timeout<T, F>(config: &BackendConfig, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match time::timeout(config.timeout(), fut).await {
        Ok(res) => res,
        Err(_) => {
            warn!("Backend call timed out after {:?}", config.timeout());
            Err(Error::BackendTimeout(config.timeout()))
        }
    }
}
