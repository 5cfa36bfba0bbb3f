use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// Number of ingredient/measure slots in an upstream meal record.
pub const INGREDIENT_SLOTS: usize = 20;

/// A meal record as returned by the meal database.
///
/// Only the fields that feed a projection are typed; everything else,
/// including the numbered `strIngredientN`/`strMeasureN` keys, lands in `extra`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MealRecord {
    #[serde(rename = "idMeal")]
    pub id_meal: Option<String>,
    #[serde(rename = "strMeal")]
    pub str_meal: Option<String>,
    #[serde(rename = "strCategory")]
    pub str_category: Option<String>,
    #[serde(rename = "strArea")]
    pub str_area: Option<String>,
    #[serde(rename = "strInstructions")]
    pub str_instructions: Option<String>,
    #[serde(rename = "strYoutube")]
    pub str_youtube: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MealRecord {
    /// Returns `strIngredient1..20` in positional order.
    pub fn ingredients(&self) -> [Option<String>; INGREDIENT_SLOTS] {
        self.numbered("strIngredient")
    }

    /// Returns `strMeasure1..20` in positional order.
    pub fn measures(&self) -> [Option<String>; INGREDIENT_SLOTS] {
        self.numbered("strMeasure")
    }

    fn numbered(&self, prefix: &str) -> [Option<String>; INGREDIENT_SLOTS] {
        std::array::from_fn(|i| {
            self.extra
                .get(&format!("{prefix}{}", i + 1))
                .and_then(Value::as_str)
                .map(str::to_owned)
        })
    }
}

/// Upstream `{"meals": [...] | null}` envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MealEnvelope {
    #[serde(default)]
    pub meals: Option<Vec<MealRecord>>,
}

impl MealEnvelope {
    /// Projects every record, mapping a null or missing list to an empty one.
    pub fn project<T, F>(self, f: F) -> MealsResponse<T>
    where
        F: FnMut(MealRecord) -> T,
    {
        MealsResponse {
            meals: self.meals.unwrap_or_default().into_iter().map(f).collect(),
        }
    }
}

/// Filtered `{"meals": [...]}` response; `meals` is never null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealsResponse<T> {
    pub meals: Vec<T>,
}

impl<T> Default for MealsResponse<T> {
    fn default() -> Self {
        Self { meals: Vec::new() }
    }
}

/// Reduced meal shape returned by name search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSummary {
    #[serde(rename = "idMeal")]
    pub id_meal: Option<String>,
    #[serde(rename = "strMeal")]
    pub str_meal: Option<String>,
    #[serde(rename = "strCategory")]
    pub str_category: Option<String>,
    #[serde(rename = "strArea")]
    pub str_area: Option<String>,
    #[serde(rename = "strYoutube")]
    pub str_youtube: Option<String>,
    #[serde(rename = "strInstructions")]
    pub str_instructions: Option<String>,
}

impl From<MealRecord> for MealSummary {
    fn from(record: MealRecord) -> Self {
        Self {
            id_meal: record.id_meal,
            str_meal: record.str_meal,
            str_category: record.str_category,
            str_area: record.str_area,
            str_youtube: record.str_youtube,
            str_instructions: record.str_instructions,
        }
    }
}

/// Meal shape returned by id lookup, carrying all ingredient/measure slots.
///
/// Serializes flat, with the slots written as `strIngredientN`/`strMeasureN`
/// for N in 1..=20 so the output matches the upstream key layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealDetail {
    pub id_meal: Option<String>,
    pub str_meal: Option<String>,
    pub str_category: Option<String>,
    pub str_area: Option<String>,
    pub str_youtube: Option<String>,
    pub ingredients: [Option<String>; INGREDIENT_SLOTS],
    pub measures: [Option<String>; INGREDIENT_SLOTS],
}

impl From<MealRecord> for MealDetail {
    fn from(record: MealRecord) -> Self {
        let ingredients = record.ingredients();
        let measures = record.measures();
        Self {
            id_meal: record.id_meal,
            str_meal: record.str_meal,
            str_category: record.str_category,
            str_area: record.str_area,
            str_youtube: record.str_youtube,
            ingredients,
            measures,
        }
    }
}

impl Serialize for MealDetail {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(5 + 2 * INGREDIENT_SLOTS))?;
        map.serialize_entry("idMeal", &self.id_meal)?;
        map.serialize_entry("strMeal", &self.str_meal)?;
        map.serialize_entry("strCategory", &self.str_category)?;
        map.serialize_entry("strArea", &self.str_area)?;
        map.serialize_entry("strYoutube", &self.str_youtube)?;
        for (i, (ingredient, measure)) in self.ingredients.iter().zip(&self.measures).enumerate() {
            map.serialize_entry(&format!("strIngredient{}", i + 1), ingredient)?;
            map.serialize_entry(&format!("strMeasure{}", i + 1), measure)?;
        }
        map.end()
    }
}
