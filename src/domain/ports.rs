use crate::domain::model::{DomainStats, SubdomainsResponse};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Operations offered by the subdomain service.
#[async_trait]
pub trait ChaosApi: Send + Sync {
    async fn domain_stats(&self, domain: &str) -> Result<DomainStats>;
    async fn subdomains(&self, domain: &str) -> Result<SubdomainsResponse>;
    async fn upload(&self, path: &Path) -> Result<()>;
}
