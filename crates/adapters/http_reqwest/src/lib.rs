//! # flueview-adapter-http-reqwest
//!
//! HTTP implementation of the [`StatusSource`] port.
//!
//! One `GET` per poll cycle against the controller's status endpoint; the
//! body is decoded as a [`StatusSnapshot`].
//!
//! ## Dependency rule
//!
//! Depends on `flueview-app` (port traits) and `flueview-domain` only.

use std::future::Future;

use flueview_app::ports::StatusSource;
use flueview_domain::error::PollError;
use flueview_domain::snapshot::StatusSnapshot;

pub use reqwest::Url;

/// Status source backed by `GET` requests to the controller endpoint.
///
/// The response status code is deliberately not consulted: any response
/// whose body decodes as a snapshot is processed identically, 2xx or not.
/// The client sets no request timeout — a stalled response lingers in its
/// own cycle without holding up the schedule.
pub struct HttpStatusSource {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpStatusSource {
    #[must_use]
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    /// The endpoint this source polls.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl StatusSource for HttpStatusSource {
    fn fetch(&self) -> impl Future<Output = Result<StatusSnapshot, PollError>> + Send {
        async move {
            let response = self
                .client
                .get(self.endpoint.clone())
                .send()
                .await
                .map_err(PollError::fetch)?;
            let body = response.bytes().await.map_err(PollError::fetch)?;
            serde_json::from_slice(&body).map_err(PollError::decode)
        }
    }
}
