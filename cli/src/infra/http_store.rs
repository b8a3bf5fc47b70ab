//! `RemoteStore` backed by the orchestration service's HTTP/JSON gateway.

use std::time::Duration;

use base64::Engine as _;
use mvm_types::{MicroVm, MicroVmSpec};
use reqwest::{StatusCode, header};
use serde::{Deserialize, Serialize};

use crate::application::ports::RemoteStore;
use crate::domain::{ClientSettings, ListFilter, StoreError};

const MICROVM_PATH: &str = "v1alpha1/microvm";

#[derive(Serialize)]
struct CreateRequest<'a> {
    microvm: &'a MicroVmSpec,
}

#[derive(Deserialize)]
struct SingleResponse {
    microvm: MicroVm,
}

#[derive(Deserialize)]
struct ListResponse {
    #[serde(default)]
    microvm: Vec<MicroVm>,
}

/// HTTP client for the MicroVM service.
pub struct HttpStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStore {
    /// Build a client from resolved settings. No connection is made here.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is not a valid header value or the TLS
    /// backend cannot be initialised.
    pub fn new(settings: &ClientSettings) -> anyhow::Result<Self> {
        let mut headers = header::HeaderMap::new();
        if let Some(token) = &settings.token {
            let encoded = base64::engine::general_purpose::STANDARD.encode(token);
            let mut value = header::HeaderValue::from_str(&format!("Basic {encoded}"))?;
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
        }
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: settings.base_url(),
        })
    }

    fn collection_url(&self) -> String {
        format!("{}/{MICROVM_PATH}", self.base_url)
    }

    fn item_url(&self, uid: &str) -> String {
        format!("{}/{MICROVM_PATH}/{uid}", self.base_url)
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        uid: Option<&str>,
    ) -> Result<reqwest::Response, StoreError> {
        let response = request.send().await.map_err(StoreError::transport)?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            if let Some(uid) = uid {
                return Err(StoreError::NotFound {
                    uid: uid.to_string(),
                });
            }
        }
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(StoreError::transport(format!(
            "service returned {status}: {}",
            body.trim()
        )))
    }
}

impl RemoteStore for HttpStore {
    async fn create(&self, spec: &MicroVmSpec) -> Result<MicroVm, StoreError> {
        tracing::debug!(name = %spec.id, namespace = %spec.namespace, "POST microvm");
        let request = self
            .client
            .post(self.collection_url())
            .json(&CreateRequest { microvm: spec });
        let body: SingleResponse = self
            .send(request, None)
            .await?
            .json()
            .await
            .map_err(StoreError::transport)?;
        Ok(body.microvm)
    }

    async fn get(&self, uid: &str) -> Result<MicroVm, StoreError> {
        tracing::debug!(%uid, "GET microvm");
        let request = self.client.get(self.item_url(uid));
        let body: SingleResponse = self
            .send(request, Some(uid))
            .await?
            .json()
            .await
            .map_err(StoreError::transport)?;
        Ok(body.microvm)
    }

    async fn list(&self, filter: &ListFilter) -> Result<Vec<MicroVm>, StoreError> {
        tracing::debug!(name = %filter.name, namespace = %filter.namespace, "GET microvms");
        let request = self.client.get(self.collection_url()).query(&[
            ("namespace", filter.namespace.as_str()),
            ("name", filter.name.as_str()),
        ]);
        let body: ListResponse = self
            .send(request, None)
            .await?
            .json()
            .await
            .map_err(StoreError::transport)?;
        // some gateway versions ignore the query
        Ok(body
            .microvm
            .into_iter()
            .filter(|vm| filter.matches(vm))
            .collect())
    }

    async fn delete(&self, uid: &str) -> Result<(), StoreError> {
        tracing::debug!(%uid, "DELETE microvm");
        let request = self.client.delete(self.item_url(uid));
        self.send(request, Some(uid)).await?;
        Ok(())
    }
}
