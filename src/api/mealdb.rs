use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::{ApiError, endpoint, get_json};
use crate::model::{MealDetail, MealEnvelope, MealSummary, MealsResponse};

/// Client for TheMealDB.
#[derive(Debug, Clone)]
pub struct MealDbClient {
    base_url: String,
}

impl MealDbClient {
    /// Creates a client for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// `search.php?s=`, returned verbatim.
    pub async fn search_raw(&self, name: &str) -> Result<Value, ApiError> {
        debug!(query = name, "Searching meals by name");
        get_json(self.get("search.php").query(&[("s", name)])).await
    }

    /// `search.php?s=`, projected to [`MealSummary`].
    pub async fn search(&self, name: &str) -> Result<MealsResponse<MealSummary>, ApiError> {
        debug!(query = name, "Searching meal summaries by name");
        let envelope: MealEnvelope = get_json(self.get("search.php").query(&[("s", name)])).await?;
        Ok(envelope.project(MealSummary::from))
    }

    /// `lookup.php?i=`, projected to [`MealDetail`].
    pub async fn lookup(&self, id: &str) -> Result<MealsResponse<MealDetail>, ApiError> {
        debug!(id, "Looking up meal by id");
        let envelope: MealEnvelope = get_json(self.get("lookup.php").query(&[("i", id)])).await?;
        Ok(envelope.project(MealDetail::from))
    }

    /// `categories.php`, returned verbatim.
    pub async fn categories(&self) -> Result<Value, ApiError> {
        debug!("Listing meal categories");
        get_json(self.get("categories.php")).await
    }

    /// `filter.php?a=`, returned verbatim.
    pub async fn filter_by_area(&self, area: &str) -> Result<Value, ApiError> {
        debug!(area, "Filtering meals by area");
        get_json(self.get("filter.php").query(&[("a", area)])).await
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        Client::new().get(endpoint(&self.base_url, path))
    }
}
