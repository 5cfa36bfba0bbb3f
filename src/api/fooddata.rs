use reqwest::{Client, RequestBuilder};
use tracing::{debug, info};

use super::{ApiError, endpoint, get_json};
use crate::model::{FoodDetail, FoodSearchHit, FoodSearchResponse, NutritionResult};

/// Data types the search is restricted to.
pub const SEARCH_DATA_TYPES: [&str; 2] = ["Foundation", "SR Legacy"];

/// Client for USDA FoodData Central.
#[derive(Debug, Clone)]
pub struct FoodDataClient {
    base_url: String,
    api_key: Option<String>,
}

impl FoodDataClient {
    /// Creates a client. A missing key is not checked here; the upstream rejects it.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
        }
    }

    /// Returns the best match for `query`, if any.
    pub async fn search_top(&self, query: &str) -> Result<Option<FoodSearchHit>, ApiError> {
        debug!(query, "Searching foods");
        let mut params: Vec<(&str, String)> = vec![("query", query.to_string())];
        params.extend(SEARCH_DATA_TYPES.iter().map(|t| ("dataType", t.to_string())));
        params.push(("pageSize", "1".to_string()));
        params.push(("sortBy", "score".to_string()));

        let response: FoodSearchResponse =
            get_json(self.get("foods/search").query(&params)).await?;
        Ok(response.foods.into_iter().next())
    }

    /// Fetches full nutrient detail for one food item.
    pub async fn food(&self, fdc_id: u64) -> Result<FoodDetail, ApiError> {
        debug!(fdc_id, "Fetching food detail");
        get_json(self.get(&format!("food/{}", fdc_id))).await
    }

    /// Looks up the nutrients of the best-matching food for `ingredient`.
    ///
    /// The detail request is only sent when the search matched something.
    pub async fn ingredient_nutrition(&self, ingredient: &str) -> Result<NutritionResult, ApiError> {
        let Some(hit) = self.search_top(ingredient).await? else {
            info!(ingredient, "No food matched");
            return Ok(NutritionResult::empty());
        };

        let detail = self.food(hit.fdc_id).await?;
        Ok(NutritionResult::from(detail))
    }

    fn get(&self, path: &str) -> RequestBuilder {
        let request = Client::new().get(endpoint(&self.base_url, path));
        match &self.api_key {
            Some(key) => request.query(&[("api_key", key)]),
            None => request,
        }
    }
}
