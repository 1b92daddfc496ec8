//! Grocery categories.
//!
//! The category set is closed: values are matched case-insensitively against
//! [`CATEGORIES`] and normalised to the canonical label.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Rule, ValidationError};
use crate::input::trimmed_text;

/// Grocery category an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[expect(missing_docs, reason = "variants are documented by their labels")]
pub enum Category {
    AlcoholicBeverages,
    Baby,
    Bakery,
    Beverages,
    BreakfastFoods,
    CannedGoods,
    CoffeeAndTea,
    CondimentsAndDressing,
    CookingAndBaking,
    CookiesAndCrackers,
    Dairy,
    Deli,
    FrozenFoods,
    HealthAndPersonalCare,
    HouseholdAndCleaning,
    Juices,
    Meat,
    PastaAndGrains,
    PetSupplies,
    Produce,
    Seafood,
    Snacks,
    SodaAndSoftDrinks,
    SpicesAndSeasonings,
    Water,
    Other,
}

/// Every category, in menu order.
pub const CATEGORIES: [Category; 26] = [
    Category::AlcoholicBeverages,
    Category::Baby,
    Category::Bakery,
    Category::Beverages,
    Category::BreakfastFoods,
    Category::CannedGoods,
    Category::CoffeeAndTea,
    Category::CondimentsAndDressing,
    Category::CookingAndBaking,
    Category::CookiesAndCrackers,
    Category::Dairy,
    Category::Deli,
    Category::FrozenFoods,
    Category::HealthAndPersonalCare,
    Category::HouseholdAndCleaning,
    Category::Juices,
    Category::Meat,
    Category::PastaAndGrains,
    Category::PetSupplies,
    Category::Produce,
    Category::Seafood,
    Category::Snacks,
    Category::SodaAndSoftDrinks,
    Category::SpicesAndSeasonings,
    Category::Water,
    Category::Other,
];

impl Category {
    /// Canonical display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AlcoholicBeverages => "Alcoholic Beverages",
            Self::Baby => "Baby",
            Self::Bakery => "Bakery",
            Self::Beverages => "Beverages",
            Self::BreakfastFoods => "Breakfast Foods",
            Self::CannedGoods => "Canned Goods",
            Self::CoffeeAndTea => "Coffee & Tea",
            Self::CondimentsAndDressing => "Condiments & Dressing",
            Self::CookingAndBaking => "Cooking & Baking",
            Self::CookiesAndCrackers => "Cookies & Crackers",
            Self::Dairy => "Dairy",
            Self::Deli => "Deli",
            Self::FrozenFoods => "Frozen Foods",
            Self::HealthAndPersonalCare => "Health & Personal Care",
            Self::HouseholdAndCleaning => "Household & Cleaning",
            Self::Juices => "Juices",
            Self::Meat => "Meat",
            Self::PastaAndGrains => "Pasta & Grains",
            Self::PetSupplies => "Pet Supplies",
            Self::Produce => "Produce",
            Self::Seafood => "Seafood",
            Self::Snacks => "Snacks",
            Self::SodaAndSoftDrinks => "Soda & Soft Drinks",
            Self::SpicesAndSeasonings => "Spices & Seasonings",
            Self::Water => "Water",
            Self::Other => "Other",
        }
    }

    fn from_label(text: &str) -> Option<Self> {
        CATEGORIES
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(text))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        check_category(&Value::String(s.to_owned()), "category")
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.label().to_owned()
    }
}

impl TryFrom<String> for Category {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        check_category(&Value::String(value), "category")
    }
}

/// Validate a grocery category.
///
/// # Errors
///
/// Fails when the value is missing, not a string, blank, contains characters
/// other than ASCII letters, spaces and `&`, or names no known category.
///
/// # Examples
/// ```
/// use household_validation::{Category, check_category};
/// use serde_json::json;
///
/// assert_eq!(check_category(&json!(" coffee & tea "), "category"), Ok(Category::CoffeeAndTea));
/// assert!(check_category(&json!("Hardware"), "category").is_err());
/// ```
pub fn check_category(value: &Value, field: &str) -> Result<Category, ValidationError> {
    let text = trimmed_text(value, field)?;
    if !text
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c == ' ' || c == '&')
    {
        return Err(ValidationError::new(field, Rule::CategoryCharacters));
    }
    Category::from_label(text).ok_or_else(|| ValidationError::new(field, Rule::UnknownCategory))
}
