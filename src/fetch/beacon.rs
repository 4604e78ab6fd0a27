//! Visit beacon
//!
//! Fire-and-forget visit notification. Failure is swallowed: the beacon never
//! affects rendering and never blocks page readiness.

use crate::config::ViewConfig;
use crate::helpers::url;

/// Capability for notifying the analytics collaborator of a visit.
pub trait VisitBeacon: Send + Sync {
    fn notify(&self, path: &str);
}

/// HTTP beacon posting to the configured endpoint on a detached task.
pub struct HttpBeacon {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpBeacon {
    pub fn new(base: &str, config: &ViewConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!(
                "{}{}",
                base.trim_end_matches('/'),
                url::url_for(config, &config.beacon_path)
            ),
        }
    }
}

impl VisitBeacon for HttpBeacon {
    fn notify(&self, path: &str) {
        let request = self.client.get(&self.endpoint).query(&[("path", path)]);
        tokio::spawn(async move {
            if let Err(e) = request.send().await {
                tracing::debug!("visit beacon failed: {}", e);
            }
        });
    }
}

/// No-op beacon for tests and offline use.
#[derive(Default)]
pub struct NoopBeacon;

impl VisitBeacon for NoopBeacon {
    fn notify(&self, _path: &str) {}
}
