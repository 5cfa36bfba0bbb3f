//! Upstream records and the reduced shapes returned by the tools.

pub mod meal;
pub mod nutrition;

pub use meal::{INGREDIENT_SLOTS, MealDetail, MealEnvelope, MealRecord, MealSummary, MealsResponse};
pub use nutrition::{
    FoodDetail, FoodNutrient, FoodSearchHit, FoodSearchResponse, Nutrient, NutrientInfo,
    NutritionResult,
};
