use serde::Deserialize;

use crate::core::error::{AppError, Result};

/// Province record as published by the remote source (ids are strings)
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteProvince {
    pub id: String,
    pub name: String,
}

/// Read-only client for the public province list
pub struct ProvinceSourceClient {
    http_client: reqwest::Client,
    url: String,
}

impl ProvinceSourceClient {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!("wilayah-sync/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            http_client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the full province list
    pub async fn fetch_provinces(&self) -> Result<Vec<RemoteProvince>> {
        tracing::debug!("Fetching provinces from {}", self.url);

        let response = self.http_client.get(&self.url).send().await.map_err(|e| {
            tracing::debug!("Province source request failed: {:?}", e);
            AppError::ExternalServiceError(format!("Province source request failed: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Province source returned status: {}", status);
            return Err(AppError::ExternalServiceError(format!(
                "Province source returned status {}",
                status
            )));
        }

        let provinces = response.json::<Vec<RemoteProvince>>().await.map_err(|e| {
            tracing::debug!("Failed to parse province source response: {:?}", e);
            AppError::ExternalServiceError(format!(
                "Failed to parse province source response: {}",
                e
            ))
        })?;

        tracing::debug!("Province source returned {} records", provinces.len());
        Ok(provinces)
    }
}
