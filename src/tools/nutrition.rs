use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use crate::api::FoodDataClient;
use crate::tool::{Tool, ToolError, ToolResult, input_schema, parse_args};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct IngredientArgs {
    /// Ingredient name, e.g. "apple"
    pub ingredient: String,
}

#[derive(Debug, Clone)]
pub struct FetchIngredientNutrition {
    client: FoodDataClient,
}

impl FetchIngredientNutrition {
    pub fn new(client: FoodDataClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for FetchIngredientNutrition {
    fn name(&self) -> &str {
        "fetch_ingredient_nutrition"
    }

    fn title(&self) -> Option<&str> {
        Some("Ingredient Nutrition")
    }

    fn description(&self) -> &str {
        "Look up nutrient values for an ingredient in USDA FoodData Central. Returns the matched food description and a list of nutrients with name, amount and unit."
    }

    fn parameters_schema(&self) -> Value {
        input_schema::<IngredientArgs>()
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, ToolError> {
        let args: IngredientArgs = parse_args(args)?;
        ToolResult::json(&self.client.ingredient_nutrition(&args.ingredient).await?)
    }
}
