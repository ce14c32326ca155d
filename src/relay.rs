use crate::config::{PageConfig, RelayCredentials};
use crate::contact::{EmailRelay, RelayError, RelayRequest, TemplateParams};
use gloo_net::http::Request;

/// EmailJS over its REST endpoint, so the page needs no vendor script.
pub struct EmailJsRelay {
    endpoint: String,
    credentials: Option<RelayCredentials>,
}

impl EmailJsRelay {
    pub fn from_config(config: &PageConfig) -> Self {
        Self {
            endpoint: config.relay_endpoint.clone(),
            credentials: config.relay_credentials.clone(),
        }
    }
}

impl EmailRelay for EmailJsRelay {
    async fn send(&self, params: &TemplateParams) -> Result<(), RelayError> {
        let credentials = self.credentials.as_ref().ok_or(RelayError::NotConfigured)?;
        let body = RelayRequest::new(credentials, params);

        let response = Request::post(&self.endpoint)
            .json(&body)
            .map_err(|error| RelayError::Network(error.to_string()))?
            .send()
            .await
            .map_err(|error| RelayError::Network(error.to_string()))?;

        if response.ok() {
            return Ok(());
        }

        Err(RelayError::Rejected {
            status: response.status(),
            body: response.text().await.unwrap_or_default(),
        })
    }
}
