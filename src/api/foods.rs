//! Food Resource
//!
//! Create and list menu items on the foods collection.

use async_trait::async_trait;

use food_form::{ApiConfig, ApiError, FoodsApi, MenuItem, NewMenuItem};
use super::{read_json, send};

/// `fetch`-backed foods collection
#[derive(Debug, Clone)]
pub struct BrowserFoodsApi {
    config: ApiConfig,
}

impl BrowserFoodsApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl FoodsApi for BrowserFoodsApi {
    async fn create_food(&self, food: &NewMenuItem) -> Result<(), ApiError> {
        let body = serde_json::to_string(food).map_err(|e| ApiError::Encode(e.to_string()))?;
        // Created item in the response is not used
        send("POST", &self.config.foods_url(), Some(body)).await?;
        Ok(())
    }

    async fn list_foods(&self) -> Result<Vec<MenuItem>, ApiError> {
        let response = send("GET", &self.config.foods_url(), None).await?;
        read_json(response).await
    }
}
