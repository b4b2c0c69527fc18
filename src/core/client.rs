use crate::domain::model::{Credential, DomainStats, SubdomainsResponse};
use crate::domain::ports::ChaosApi;
use crate::utils::error::{ChaosError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{Body, Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::path::Path;
use std::time::Duration;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const MAX_IDLE_PER_HOST: usize = 100;

/// HTTP implementation of [`ChaosApi`]. One pooled client, shared by every call.
pub struct ChaosClient {
    client: Client,
    base_url: String,
    auth: HeaderValue,
}

impl ChaosClient {
    pub fn new(base_url: impl Into<String>, credential: &Credential) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .pool_max_idle_per_host(MAX_IDLE_PER_HOST)
            .danger_accept_invalid_certs(true)
            .build()?;

        Self::with_client(client, base_url, credential)
    }

    pub fn with_client(
        client: Client,
        base_url: impl Into<String>,
        credential: &Credential,
    ) -> Result<Self> {
        let mut auth = HeaderValue::from_str(credential.expose()).map_err(|e| {
            ChaosError::InvalidCredential {
                reason: e.to_string(),
            }
        })?;
        auth.set_sensitive(true);

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends one authenticated request and returns the response only if it came back 200.
    async fn execute(&self, method: Method, url: &str, body: Option<Body>) -> Result<Response> {
        tracing::debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(method, url)
            .header(AUTHORIZATION, self.auth.clone());
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status != StatusCode::OK {
            // drain so the connection can go back to the pool
            let _ = response.bytes().await;
            return Err(ChaosError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.execute(Method::GET, url, None).await?;
        let bytes = response.bytes().await?;
        tracing::debug!("Decoding {} byte response body", bytes.len());
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl ChaosApi for ChaosClient {
    async fn domain_stats(&self, domain: &str) -> Result<DomainStats> {
        let url = self.endpoint(&format!("/dns/{}", domain));
        self.get_json(&url).await
    }

    async fn subdomains(&self, domain: &str) -> Result<SubdomainsResponse> {
        let url = self.endpoint(&format!("/dns/{}/subdomains", domain));
        self.get_json(&url).await
    }

    async fn upload(&self, path: &Path) -> Result<()> {
        let file = tokio::fs::File::open(path)
            .await
            .map_err(|source| ChaosError::File {
                path: path.display().to_string(),
                source,
            })?;

        let url = self.endpoint("/dns/add");
        // 成功時不解析回應內容
        self.execute(Method::POST, &url, Some(Body::from(file)))
            .await?;
        Ok(())
    }
}
