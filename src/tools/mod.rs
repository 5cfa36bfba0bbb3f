//! The MealBot tools.

pub mod meal;
pub mod nutrition;

pub use meal::{
    FetchMealByLocation, FetchMealByName, FetchMealCategories, FetchMealIngredientsByName,
    FetchMealInstructionsById,
};
pub use nutrition::FetchIngredientNutrition;

use std::sync::Arc;

use crate::api::{FoodDataClient, MealDbClient};
use crate::config::Config;
use crate::tool::ToolRegistry;

/// Builds the registry holding every MealBot tool.
pub fn registry(config: &Config) -> ToolRegistry {
    let meals = MealDbClient::new(config.mealdb_base_url.clone());
    let foods = FoodDataClient::new(
        config.fooddata_base_url.clone(),
        config.fooddata_api_key.clone(),
    );

    ToolRegistry::new()
        .with_tool(Arc::new(FetchMealByName::new(meals.clone())))
        .with_tool(Arc::new(FetchMealIngredientsByName::new(meals.clone())))
        .with_tool(Arc::new(FetchMealInstructionsById::new(meals.clone())))
        .with_tool(Arc::new(FetchMealCategories::new(meals.clone())))
        .with_tool(Arc::new(FetchMealByLocation::new(meals)))
        .with_tool(Arc::new(FetchIngredientNutrition::new(foods)))
}
