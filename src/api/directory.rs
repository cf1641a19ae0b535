use async_trait::async_trait;

use crate::config::DirectoryConfig;
use crate::error::DirectoryError;
use crate::models::{Region, SubRegion};
use super::{load_regions, load_sub_regions};

/// Read-only source of regions and their sub-regions.
#[async_trait]
pub trait RegionDirectory: Send + Sync {
    async fn regions(&self) -> Result<Vec<Region>, DirectoryError>;

    async fn sub_regions(&self, region_code: &str) -> Result<Vec<SubRegion>, DirectoryError>;
}

/// `RegionDirectory` backed by the HTTP localidades API.
#[derive(Clone)]
pub struct HttpDirectory {
    client: reqwest::Client,
    config: DirectoryConfig,
}

impl HttpDirectory {
    /// Build a directory client with its own `reqwest::Client`.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::Network` if the HTTP client cannot be built.
    pub fn new(config: DirectoryConfig) -> Result<Self, DirectoryError> {
        let client = reqwest::Client::builder()
            .user_agent(format!("waypoint/{}", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()
            .map_err(|e| DirectoryError::Network(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: reqwest::Client, config: DirectoryConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }
}

#[async_trait]
impl RegionDirectory for HttpDirectory {
    async fn regions(&self) -> Result<Vec<Region>, DirectoryError> {
        load_regions(&self.client, &self.config.base_url, &self.config.order_by).await
    }

    async fn sub_regions(&self, region_code: &str) -> Result<Vec<SubRegion>, DirectoryError> {
        load_sub_regions(&self.client, &self.config.base_url, &self.config.order_by, region_code).await
    }
}
