use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use crate::api::MealDbClient;
use crate::tool::{Tool, ToolError, ToolResult, input_schema, parse_args};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct NameArgs {
    /// Meal name or part of it, e.g. "Arrabiata"
    pub name: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct IdArgs {
    /// Meal identifier, e.g. "52771"
    pub id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct LocationArgs {
    /// Area or cuisine, e.g. "Canadian"
    pub location: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct NoArgs {}

/// Unfiltered search by name.
#[derive(Debug, Clone)]
pub struct FetchMealByName {
    client: MealDbClient,
}

impl FetchMealByName {
    pub fn new(client: MealDbClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for FetchMealByName {
    fn name(&self) -> &str {
        "fetch_meal_by_name"
    }

    fn title(&self) -> Option<&str> {
        Some("Meal Fetcher")
    }

    fn description(&self) -> &str {
        "Fetch meals by their name."
    }

    fn parameters_schema(&self) -> Value {
        input_schema::<NameArgs>()
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, ToolError> {
        let args: NameArgs = parse_args(args)?;
        Ok(ToolResult::ok(self.client.search_raw(&args.name).await?))
    }
}

/// Search by name, reduced to the summary fields.
#[derive(Debug, Clone)]
pub struct FetchMealIngredientsByName {
    client: MealDbClient,
}

impl FetchMealIngredientsByName {
    pub fn new(client: MealDbClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for FetchMealIngredientsByName {
    fn name(&self) -> &str {
        "fetch_meal_ingredients_by_name"
    }

    fn title(&self) -> Option<&str> {
        Some("Meal Search")
    }

    fn description(&self) -> &str {
        "Search meals by name. Returns id, name, category, area, YouTube link and instructions for each match."
    }

    fn parameters_schema(&self) -> Value {
        input_schema::<NameArgs>()
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, ToolError> {
        let args: NameArgs = parse_args(args)?;
        ToolResult::json(&self.client.search(&args.name).await?)
    }
}

/// Lookup by id with all 20 ingredient/measure pairs.
#[derive(Debug, Clone)]
pub struct FetchMealInstructionsById {
    client: MealDbClient,
}

impl FetchMealInstructionsById {
    pub fn new(client: MealDbClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for FetchMealInstructionsById {
    fn name(&self) -> &str {
        "fetch_meal_instructions_by_id"
    }

    fn title(&self) -> Option<&str> {
        Some("Meal Details")
    }

    fn description(&self) -> &str {
        "Look up a meal by id. Returns id, name, category, area, YouTube link and the ingredient/measure pairs strIngredient1..20 and strMeasure1..20."
    }

    fn parameters_schema(&self) -> Value {
        input_schema::<IdArgs>()
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, ToolError> {
        let args: IdArgs = parse_args(args)?;
        ToolResult::json(&self.client.lookup(&args.id).await?)
    }
}

#[derive(Debug, Clone)]
pub struct FetchMealCategories {
    client: MealDbClient,
}

impl FetchMealCategories {
    pub fn new(client: MealDbClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for FetchMealCategories {
    fn name(&self) -> &str {
        "fetch_meal_categories"
    }

    fn title(&self) -> Option<&str> {
        Some("Meal Categories")
    }

    fn description(&self) -> &str {
        "List all meal categories with thumbnail and description."
    }

    fn parameters_schema(&self) -> Value {
        input_schema::<NoArgs>()
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, ToolError> {
        let _: NoArgs = parse_args(args)?;
        Ok(ToolResult::ok(self.client.categories().await?))
    }
}

#[derive(Debug, Clone)]
pub struct FetchMealByLocation {
    client: MealDbClient,
}

impl FetchMealByLocation {
    pub fn new(client: MealDbClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for FetchMealByLocation {
    fn name(&self) -> &str {
        "fetch_meal_by_location"
    }

    fn title(&self) -> Option<&str> {
        Some("Meals by Area")
    }

    fn description(&self) -> &str {
        "List meals from an area or cuisine (e.g. Italian, Canadian). Returns name, thumbnail and id."
    }

    fn parameters_schema(&self) -> Value {
        input_schema::<LocationArgs>()
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, ToolError> {
        let args: LocationArgs = parse_args(args)?;
        Ok(ToolResult::ok(self.client.filter_by_area(&args.location).await?))
    }
}
