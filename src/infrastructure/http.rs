// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the form submission port.
//!
//! Posts JSON to the PHP scripts of the site backend and decodes the
//! `{"success": bool}` answer.

use crate::application::port::{FormSubmitter, SubmissionRequest, SubmitError, SubmitResponse};
use crate::config::Config;
use std::time::Duration;

/// User agent sent with every submission.
const USER_AGENT: &str = concat!("EateryFlamingo/", env!("CARGO_PKG_VERSION"));

/// [`FormSubmitter`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSubmitter {
    /// Creates a submitter for the site rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Transport`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SubmitError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a submitter from the configured base URL and timeout.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Transport`] if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, SubmitError> {
        Self::new(config.base_url(), config.request_timeout())
    }

    /// Absolute URL of the script handling `request`.
    #[must_use]
    pub fn endpoint_url(&self, request: &SubmissionRequest) -> String {
        format!("{}/{}", self.base_url, request.endpoint())
    }
}

impl FormSubmitter for HttpSubmitter {
    async fn submit(&self, request: &SubmissionRequest) -> Result<(), SubmitError> {
        let url = self.endpoint_url(request);
        log::debug!("POST {url}");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status(status.as_u16()));
        }

        let body: SubmitResponse = response
            .json()
            .await
            .map_err(|e| SubmitError::Decode(e.to_string()))?;

        body.into_result()
    }
}
