//! Upstream endpoint configuration.

/// Default base URL for TheMealDB (free test key `1`).
pub const DEFAULT_MEALDB_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Default base URL for USDA FoodData Central.
pub const DEFAULT_FOODDATA_BASE_URL: &str = "https://api.nal.usda.gov/fdc/v1";

/// Configuration shared by all tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the meal database API
    pub mealdb_base_url: String,
    /// Base URL of the nutrition API
    pub fooddata_base_url: String,
    /// API key for the nutrition API; passed through as-is
    pub fooddata_api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mealdb_base_url: DEFAULT_MEALDB_BASE_URL.to_string(),
            fooddata_base_url: DEFAULT_FOODDATA_BASE_URL.to_string(),
            fooddata_api_key: None,
        }
    }
}

impl Config {
    /// Creates a configuration with the public default endpoints and no API key.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    ///
    /// Recognised keys are `MEALDB_BASE_URL`, `FOODDATA_BASE_URL` and
    /// `FOODDATA_API_KEY` (with `USDA_API_KEY` as a fallback). Empty values
    /// are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let mut config = Self::default();

        if let Some(url) = get("MEALDB_BASE_URL") {
            config.mealdb_base_url = url;
        }
        if let Some(url) = get("FOODDATA_BASE_URL") {
            config.fooddata_base_url = url;
        }
        config.fooddata_api_key = get("FOODDATA_API_KEY").or_else(|| get("USDA_API_KEY"));

        config
    }

    /// Sets the meal database base URL.
    pub fn with_mealdb_base_url(mut self, url: impl Into<String>) -> Self {
        self.mealdb_base_url = url.into();
        self
    }

    /// Sets the nutrition API base URL.
    pub fn with_fooddata_base_url(mut self, url: impl Into<String>) -> Self {
        self.fooddata_base_url = url.into();
        self
    }

    /// Sets the nutrition API key.
    pub fn with_fooddata_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.fooddata_api_key = Some(api_key.into());
        self
    }
}
