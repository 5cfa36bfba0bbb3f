//! # MealBot
//!
//! An MCP tool server exposing TheMealDB and USDA FoodData Central as tools
//! an agent can call.
//!
//! ## Tools
//!
//! - **fetch_meal_by_name**: raw meal search by name
//! - **fetch_meal_ingredients_by_name**: meal search reduced to summary fields
//! - **fetch_meal_instructions_by_id**: meal lookup with all 20 ingredient/measure pairs
//! - **fetch_meal_categories**: category listing
//! - **fetch_meal_by_location**: meals filtered by area
//! - **fetch_ingredient_nutrition**: nutrient values for an ingredient
//!
//! ## Quick Start
//!
//! ```no_run
//! use mealbot::{Config, MCPServer, tools};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mealbot::MealBotError> {
//!     let config = Config::from_env();
//!     MCPServer::new(tools::registry(&config)).serve_stdio().await
//! }
//! ```
//!

pub mod api;
pub mod config;
pub mod error;
pub mod mcp;
pub mod model;
pub mod tool;
pub mod tools;

// Re-exports for convenient usage
pub use api::{ApiError, FoodDataClient, MealDbClient};
pub use config::Config;
pub use error::MealBotError;
pub use mcp::{MCPServer, ServerInfo};
pub use model::{MealDetail, MealSummary, MealsResponse, NutrientInfo, NutritionResult};
pub use tool::{DynTool, Tool, ToolDefinition, ToolError, ToolExecutor, ToolRegistry, ToolResult};
