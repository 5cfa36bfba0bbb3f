use serde::{Deserialize, Serialize};

/// Response of `foods/search`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FoodSearchResponse {
    #[serde(default)]
    pub foods: Vec<FoodSearchHit>,
}

/// One search hit; only the identifier is needed.
#[derive(Debug, Clone, Deserialize)]
pub struct FoodSearchHit {
    #[serde(rename = "fdcId")]
    pub fdc_id: u64,
}

/// Response of `food/{fdcId}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FoodDetail {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "foodNutrients", default)]
    pub food_nutrients: Vec<FoodNutrient>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FoodNutrient {
    #[serde(default)]
    pub nutrient: Option<Nutrient>,
    #[serde(default)]
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Nutrient {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "unitName", default)]
    pub unit_name: Option<String>,
}

/// A single nutrient value with a lowercased unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientInfo {
    pub name: String,
    pub amount: f64,
    pub unit: String,
}

impl NutrientInfo {
    /// Converts an upstream entry, dropping it when the amount is missing.
    pub fn from_food_nutrient(entry: FoodNutrient) -> Option<Self> {
        let amount = entry.amount?;
        let nutrient = entry.nutrient.unwrap_or_default();
        Some(Self {
            name: nutrient.name.unwrap_or_default(),
            amount,
            unit: nutrient.unit_name.unwrap_or_default().to_lowercase(),
        })
    }
}

/// Nutrition summary for one ingredient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionResult {
    pub description: Option<String>,
    pub nutrients: Vec<NutrientInfo>,
}

impl NutritionResult {
    /// The result returned when the search matched nothing.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl From<FoodDetail> for NutritionResult {
    fn from(detail: FoodDetail) -> Self {
        Self {
            description: detail.description,
            nutrients: detail
                .food_nutrients
                .into_iter()
                .filter_map(NutrientInfo::from_food_nutrient)
                .collect(),
        }
    }
}
